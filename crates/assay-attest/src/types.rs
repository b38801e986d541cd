//! Certificate summaries and the upstream verification results that carry them.

use serde::{Deserialize, Serialize};

/// Identity claims from a signing certificate that policy is matched against.
///
/// The same shape is used for both the observed certificate and the
/// expected policy values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSummary {
    /// OIDC issuer that vouched for the identity token.
    pub issuer: String,

    /// Canonical URI of the account or organization owning the repository.
    #[serde(rename = "sourceRepositoryOwnerURI")]
    pub source_repository_owner_uri: String,

    /// Canonical URI of the repository. Empty in a policy means "any".
    #[serde(rename = "sourceRepositoryURI", default)]
    pub source_repository_uri: String,
}

impl CertificateSummary {
    /// Summary with an issuer and owner and no repository constraint.
    pub fn new(issuer: impl Into<String>, source_repository_owner_uri: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            source_repository_owner_uri: source_repository_owner_uri.into(),
            source_repository_uri: String::new(),
        }
    }

    /// Set the repository URI.
    pub fn with_repository_uri(mut self, uri: impl Into<String>) -> Self {
        self.source_repository_uri = uri.into();
        self
    }
}

/// Signature verification outcome produced upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureVerification {
    /// Summary of the verified leaf certificate.
    pub certificate: CertificateSummary,
}

/// Upstream verification result for one attestation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub signature: SignatureVerification,
}

/// An attestation that already passed signature and chain verification.
///
/// Only the embedded certificate summary is read here; the carrier is never
/// modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationProcessingResult {
    #[serde(rename = "verificationResult")]
    pub verification_result: VerificationResult,
}

impl AttestationProcessingResult {
    /// Wrap a certificate summary in an otherwise empty result.
    pub fn from_certificate(certificate: CertificateSummary) -> Self {
        Self {
            verification_result: VerificationResult {
                signature: SignatureVerification { certificate },
            },
        }
    }

    /// The observed certificate summary.
    pub fn certificate(&self) -> &CertificateSummary {
        &self.verification_result.signature.certificate
    }
}
