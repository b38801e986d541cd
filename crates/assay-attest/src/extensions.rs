//! Certificate extension matching for a single attestation.
//!
//! Fields are compared in a fixed order and the first failure is returned:
//!
//! 1. `SourceRepositoryOwnerURI` (always)
//! 2. `SourceRepositoryURI` (only when the policy sets one)
//! 3. `Issuer` (always), distinguishing a tenant-scoped issuer from an
//!    unrelated one
//!
//! All comparisons are case-insensitive.

use crate::error::CertificateMismatch;
use crate::issuer::{fold_eq, is_tenant_scoped};
use crate::types::CertificateSummary;

/// Match an observed certificate summary against the expected one.
pub fn match_certificate(
    observed: &CertificateSummary,
    expected: &CertificateSummary,
) -> Result<(), CertificateMismatch> {
    compare_fields(observed, expected).inspect_err(|e| {
        tracing::trace!(
            field = e.field(),
            expected = %e.expected(),
            actual = %e.actual(),
            "certificate field mismatch"
        );
    })
}

fn compare_fields(
    observed: &CertificateSummary,
    expected: &CertificateSummary,
) -> Result<(), CertificateMismatch> {
    if !fold_eq(
        &expected.source_repository_owner_uri,
        &observed.source_repository_owner_uri,
    ) {
        return Err(CertificateMismatch::RepositoryOwner {
            expected: expected.source_repository_owner_uri.clone(),
            actual: observed.source_repository_owner_uri.clone(),
        });
    }

    if !expected.source_repository_uri.is_empty()
        && !fold_eq(
            &expected.source_repository_uri,
            &observed.source_repository_uri,
        )
    {
        return Err(CertificateMismatch::Repository {
            expected: expected.source_repository_uri.clone(),
            actual: observed.source_repository_uri.clone(),
        });
    }

    if !fold_eq(&expected.issuer, &observed.issuer) {
        let expected_issuer = expected.issuer.clone();
        let actual = observed.issuer.clone();
        if is_tenant_scoped(&observed.issuer, &expected.issuer) {
            return Err(CertificateMismatch::IssuerTenant {
                expected: expected_issuer,
                actual,
            });
        }
        return Err(CertificateMismatch::Issuer {
            expected: expected_issuer,
            actual,
        });
    }

    Ok(())
}
