//! Enforcement criteria: the identity a valid attestation must carry.

use serde::{Deserialize, Serialize};

use crate::types::CertificateSummary;

/// Expected certificate identity, supplied by the caller.
///
/// Holds exactly the three matched fields. Nothing is defaulted here; see
/// [`crate::config::PolicyConfig`] for assembling criteria from operator input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementCriteria {
    certificate: CertificateSummary,
}

impl EnforcementCriteria {
    pub fn new(certificate: CertificateSummary) -> Self {
        Self { certificate }
    }

    /// Expected certificate summary.
    pub fn certificate(&self) -> &CertificateSummary {
        &self.certificate
    }

    pub fn issuer(&self) -> &str {
        &self.certificate.issuer
    }

    pub fn source_repository_owner_uri(&self) -> &str {
        &self.certificate.source_repository_owner_uri
    }

    /// Expected repository URI, if the policy constrains it.
    pub fn source_repository_uri(&self) -> Option<&str> {
        let uri = self.certificate.source_repository_uri.as_str();
        (!uri.is_empty()).then_some(uri)
    }
}

impl From<CertificateSummary> for EnforcementCriteria {
    fn from(certificate: CertificateSummary) -> Self {
        Self::new(certificate)
    }
}
