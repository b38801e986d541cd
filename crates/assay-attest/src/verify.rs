//! Policy verification across a set of attestations.
//!
//! A set is accepted as soon as one attestation's certificate matches the
//! enforcement criteria. Attestations are evaluated in order; when none
//! match, the mismatch from the last one is returned and earlier reasons
//! are dropped.

use crate::criteria::EnforcementCriteria;
use crate::error::{AttestError, AttestResult};
use crate::extensions::match_certificate;
use crate::types::AttestationProcessingResult;

/// Verify that at least one attestation carries the expected certificate identity.
///
/// # Errors
///
/// * [`AttestError::NoResults`] if `results` is empty
/// * [`AttestError::Mismatch`] with the last attestation's reason if none match
pub fn verify_cert_extensions(
    results: &[AttestationProcessingResult],
    criteria: &EnforcementCriteria,
) -> AttestResult<()> {
    if results.is_empty() {
        return Err(AttestError::NoResults);
    }

    let mut last_error = None;
    for (index, result) in results.iter().enumerate() {
        match match_certificate(result.certificate(), criteria.certificate()) {
            Ok(()) => {
                tracing::debug!(index, "attestation certificate matches policy");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(index, field = e.field(), reason = %e, "attestation rejected");
                last_error = Some(e);
            }
        }
    }

    tracing::warn!(
        evaluated = results.len(),
        "no attestation certificate matched policy"
    );
    // Non-empty input guarantees a recorded mismatch.
    Err(last_error.map_or(AttestError::NoResults, AttestError::Mismatch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CertificateMismatch;
    use crate::issuer::GITHUB_OIDC_ISSUER;
    use crate::types::CertificateSummary;

    const OWNER: &str = "https://github.com/sigstore";
    const REPO: &str = "https://github.com/sigstore/sigstore-js";

    fn criteria() -> EnforcementCriteria {
        CertificateSummary::new(GITHUB_OIDC_ISSUER, OWNER)
            .with_repository_uri(REPO)
            .into()
    }

    fn attestation(issuer: &str, owner: &str, repo: &str) -> AttestationProcessingResult {
        AttestationProcessingResult::from_certificate(
            CertificateSummary::new(issuer, owner).with_repository_uri(repo),
        )
    }

    #[test]
    fn test_empty_results() {
        let err = verify_cert_extensions(&[], &criteria()).unwrap_err();
        assert!(matches!(err, AttestError::NoResults));
        assert!(!err.is_trust_failure());
    }

    #[test]
    fn test_all_match() {
        let results = vec![
            attestation(GITHUB_OIDC_ISSUER, OWNER, REPO),
            attestation(GITHUB_OIDC_ISSUER, OWNER, REPO),
        ];
        assert!(verify_cert_extensions(&results, &criteria()).is_ok());
    }

    #[test]
    fn test_last_one_matches() {
        let results = vec![
            attestation(GITHUB_OIDC_ISSUER, "https://github.com/wrong", REPO),
            attestation("https://evil.example.com", OWNER, REPO),
            attestation(GITHUB_OIDC_ISSUER, OWNER, REPO),
        ];
        assert!(verify_cert_extensions(&results, &criteria()).is_ok());
    }

    #[test]
    fn test_first_one_matches() {
        let results = vec![
            attestation(GITHUB_OIDC_ISSUER, OWNER, REPO),
            attestation(GITHUB_OIDC_ISSUER, "https://github.com/wrong", REPO),
        ];
        assert!(verify_cert_extensions(&results, &criteria()).is_ok());
    }

    #[test]
    fn test_last_error_wins() {
        let results = vec![
            attestation(GITHUB_OIDC_ISSUER, "https://github.com/wrong", REPO),
            attestation(GITHUB_OIDC_ISSUER, OWNER, "https://github.com/sigstore/fakerepo"),
        ];
        let err = verify_cert_extensions(&results, &criteria()).unwrap_err();
        assert_eq!(
            err.mismatch(),
            Some(&CertificateMismatch::Repository {
                expected: REPO.into(),
                actual: "https://github.com/sigstore/fakerepo".into(),
            })
        );
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_single_tenant_mismatch_surfaces() {
        let results = vec![attestation(
            &format!("{GITHUB_OIDC_ISSUER}/foo-bar"),
            OWNER,
            REPO,
        )];
        let err = verify_cert_extensions(&results, &criteria()).unwrap_err();
        assert!(matches!(
            err.mismatch(),
            Some(CertificateMismatch::IssuerTenant { .. })
        ));
    }
}
