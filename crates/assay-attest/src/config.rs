//! Operator-facing policy configuration.
//!
//! [`PolicyConfig`] collects owner/repository/issuer settings from the
//! environment, a policy file, or builder calls and resolves them into
//! concrete [`EnforcementCriteria`]. Tenant issuer templates are expanded
//! here so matching only ever compares concrete strings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::criteria::EnforcementCriteria;
use crate::error::{AttestError, AttestResult};
use crate::issuer::{fold_eq, tenant_issuer, GITHUB_OIDC_ISSUER};
use crate::types::CertificateSummary;

/// Policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Expected repository owner (user or organization name).
    #[serde(default)]
    pub owner: Option<String>,

    /// Expected repository, as `owner/name`.
    #[serde(default)]
    pub repo: Option<String>,

    /// Host the owner and repository URIs are built on.
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Enterprise tenant name. Selects the tenant host and issuer.
    #[serde(default)]
    pub tenant: Option<String>,

    /// Explicit OIDC issuer. Takes precedence over the tenant issuer.
    #[serde(default)]
    pub cert_oidc_issuer: Option<String>,
}

fn default_hostname() -> String {
    "github.com".to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            hostname: default_hostname(),
            tenant: None,
            cert_oidc_issuer: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl PolicyConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `ASSAY_ATTEST_OWNER` | Expected repository owner |
    /// | `ASSAY_ATTEST_REPO` | Expected repository (`owner/name`) |
    /// | `ASSAY_ATTEST_HOSTNAME` | Host for owner/repository URIs (default: `github.com`) |
    /// | `ASSAY_ATTEST_TENANT` | Enterprise tenant name |
    /// | `ASSAY_ATTEST_CERT_OIDC_ISSUER` | Explicit OIDC issuer |
    pub fn from_env() -> Self {
        Self {
            owner: non_empty_var("ASSAY_ATTEST_OWNER"),
            repo: non_empty_var("ASSAY_ATTEST_REPO"),
            hostname: non_empty_var("ASSAY_ATTEST_HOSTNAME").unwrap_or_else(default_hostname),
            tenant: non_empty_var("ASSAY_ATTEST_TENANT"),
            cert_oidc_issuer: non_empty_var("ASSAY_ATTEST_CERT_OIDC_ISSUER"),
        }
    }

    /// Load config from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
    pub fn from_file(path: &Path) -> AttestResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(serde_json::from_str(&data)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&data)?),
            _ => Err(AttestError::config(format!(
                "unsupported policy file extension: {}",
                path.display()
            ))),
        }
    }

    /// Set the expected owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the expected repository (`owner/name`).
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Set the host.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set the enterprise tenant.
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Set an explicit OIDC issuer.
    pub fn with_cert_oidc_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.cert_oidc_issuer = Some(issuer.into());
        self
    }

    /// Resolve into concrete enforcement criteria.
    pub fn resolve(&self) -> AttestResult<EnforcementCriteria> {
        let repo = self.repo.as_deref().map(split_repo).transpose()?;

        let owner = match (self.owner.as_deref(), repo) {
            (Some(owner), Some((repo_owner, _))) => {
                if !fold_eq(owner, repo_owner) {
                    return Err(AttestError::config(format!(
                        "owner {owner} does not match repository owner {repo_owner}"
                    )));
                }
                owner
            }
            (Some(owner), None) => owner,
            (None, Some((repo_owner, _))) => repo_owner,
            (None, None) => return Err(AttestError::config("one of owner or repo must be set")),
        };
        if owner.is_empty() || owner.contains('/') {
            return Err(AttestError::config(format!("invalid owner: {owner:?}")));
        }

        if let Some(tenant) = &self.tenant {
            if !is_dns_label(tenant) {
                return Err(AttestError::config(format!("invalid tenant: {tenant:?}")));
            }
        }
        if !is_host(&self.hostname) {
            return Err(AttestError::config(format!(
                "invalid hostname: {:?}",
                self.hostname
            )));
        }
        if let Some(issuer) = &self.cert_oidc_issuer {
            if issuer.trim().is_empty() {
                return Err(AttestError::config("cert_oidc_issuer must not be empty"));
            }
        }

        let host = match &self.tenant {
            Some(tenant) => format!("{tenant}.ghe.com"),
            None => self.hostname.clone(),
        };

        let issuer = match (&self.cert_oidc_issuer, &self.tenant) {
            (Some(issuer), _) => issuer.clone(),
            (None, Some(tenant)) => tenant_issuer(tenant),
            (None, None) => GITHUB_OIDC_ISSUER.to_string(),
        };

        let mut certificate = CertificateSummary::new(issuer, format!("https://{host}/{owner}"));
        if let Some((_, name)) = repo {
            certificate = certificate.with_repository_uri(format!("https://{host}/{owner}/{name}"));
        }

        tracing::debug!(
            issuer = %certificate.issuer,
            owner_uri = %certificate.source_repository_owner_uri,
            repository_uri = %certificate.source_repository_uri,
            "resolved enforcement criteria"
        );
        Ok(EnforcementCriteria::new(certificate))
    }
}

/// Single DNS label: non-empty, no dots, slashes or whitespace.
fn is_dns_label(value: &str) -> bool {
    !value.is_empty() && !value.contains('.') && is_host(value)
}

fn is_host(value: &str) -> bool {
    !value.is_empty() && !value.contains('/') && !value.chars().any(char::is_whitespace)
}

fn split_repo(repo: &str) -> AttestResult<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(AttestError::config(format!(
            "invalid repository {repo:?}: expected owner/name"
        ))),
    }
}
