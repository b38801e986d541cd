//! Error types for certificate identity enforcement.

/// Remediation hint appended when the observed issuer is a tenant-scoped
/// variant of the expected one.
pub const TENANT_ISSUER_HINT: &str = "if you have a custom OIDC issuer policy for your enterprise, use the --cert-oidc-issuer flag with your expected issuer";

/// Why a single attestation's certificate did not match the policy.
///
/// The `Display` text is shown verbatim to end users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateMismatch {
    /// Repository owner URI differs.
    #[error("expected SourceRepositoryOwnerURI to be {expected}, got {actual}")]
    RepositoryOwner { expected: String, actual: String },

    /// Repository URI differs from a constrained policy value.
    #[error("expected SourceRepositoryURI to be {expected}, got {actual}")]
    Repository { expected: String, actual: String },

    /// Issuer differs with no tenant relationship.
    #[error("expected Issuer to be {expected}, got {actual}")]
    Issuer { expected: String, actual: String },

    /// Issuer is nested under the expected issuer (enterprise tenant).
    #[error(
        "expected Issuer to be {expected}, got {actual} -- {hint}",
        hint = TENANT_ISSUER_HINT
    )]
    IssuerTenant { expected: String, actual: String },
}

impl CertificateMismatch {
    /// Name of the certificate field that failed to match.
    pub fn field(&self) -> &'static str {
        match self {
            Self::RepositoryOwner { .. } => "SourceRepositoryOwnerURI",
            Self::Repository { .. } => "SourceRepositoryURI",
            Self::Issuer { .. } | Self::IssuerTenant { .. } => "Issuer",
        }
    }

    /// Policy value.
    pub fn expected(&self) -> &str {
        match self {
            Self::RepositoryOwner { expected, .. }
            | Self::Repository { expected, .. }
            | Self::Issuer { expected, .. }
            | Self::IssuerTenant { expected, .. } => expected,
        }
    }

    /// Value observed on the certificate.
    pub fn actual(&self) -> &str {
        match self {
            Self::RepositoryOwner { actual, .. }
            | Self::Repository { actual, .. }
            | Self::Issuer { actual, .. }
            | Self::IssuerTenant { actual, .. } => actual,
        }
    }
}

/// Attestation policy errors.
#[derive(Debug, thiserror::Error)]
pub enum AttestError {
    /// Caller passed an empty result set.
    #[error("no attestations processing results")]
    NoResults,

    /// No attestation in the set matched the policy. Carries the reason
    /// from the last attestation evaluated.
    #[error(transparent)]
    Mismatch(#[from] CertificateMismatch),

    /// Policy configuration is invalid or incomplete.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Policy or results file could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// I/O error reading policy or results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AttestError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Usage / config issues
            Self::NoResults => 1,
            Self::Config { .. } => 1,

            // Trust failure
            Self::Mismatch(_) => 4,

            // Input handling
            Self::Parse { .. } => 6,
            Self::Io(_) => 6,
        }
    }

    /// Whether the error is a policy rejection rather than a usage problem.
    pub fn is_trust_failure(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }

    /// The mismatch reason, if this is a policy rejection.
    pub fn mismatch(&self) -> Option<&CertificateMismatch> {
        match self {
            Self::Mismatch(m) => Some(m),
            _ => None,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for AttestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AttestError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type for attestation policy operations.
pub type AttestResult<T> = Result<T, AttestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_mismatch_message() {
        let err = CertificateMismatch::RepositoryOwner {
            expected: "https://github.com/sigstore".into(),
            actual: "https://github.com/fakeowner".into(),
        };
        assert_eq!(
            err.to_string(),
            "expected SourceRepositoryOwnerURI to be https://github.com/sigstore, got https://github.com/fakeowner"
        );
        assert_eq!(err.field(), "SourceRepositoryOwnerURI");
    }

    #[test]
    fn test_tenant_mismatch_carries_hint() {
        let err = CertificateMismatch::IssuerTenant {
            expected: "https://token.actions.githubusercontent.com".into(),
            actual: "https://token.actions.githubusercontent.com/foo-bar".into(),
        };
        assert_eq!(
            err.to_string(),
            "expected Issuer to be https://token.actions.githubusercontent.com, got https://token.actions.githubusercontent.com/foo-bar -- if you have a custom OIDC issuer policy for your enterprise, use the --cert-oidc-issuer flag with your expected issuer"
        );
        assert_eq!(err.expected(), "https://token.actions.githubusercontent.com");
        assert_eq!(
            err.actual(),
            "https://token.actions.githubusercontent.com/foo-bar"
        );
    }

    #[test]
    fn test_mismatch_is_transparent() {
        let inner = CertificateMismatch::Issuer {
            expected: "a".into(),
            actual: "b".into(),
        };
        let err = AttestError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.mismatch(), Some(&inner));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AttestError::NoResults.exit_code(), 1);
        assert_eq!(AttestError::config("x").exit_code(), 1);
        let mismatch = AttestError::Mismatch(CertificateMismatch::Repository {
            expected: "a".into(),
            actual: "b".into(),
        });
        assert_eq!(mismatch.exit_code(), 4);
        assert!(mismatch.is_trust_failure());
        assert!(!AttestError::NoResults.is_trust_failure());
    }
}
