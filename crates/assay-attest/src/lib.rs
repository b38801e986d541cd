//! Certificate identity enforcement for signed attestations.
//!
//! Runs after signature and chain verification: each attestation carries a
//! summary of its signing certificate (issuer, repository, repository owner),
//! and this crate decides whether any attestation in a set matches the
//! operator's expected identity.
//!
//! - [`match_certificate`] compares one certificate summary against policy
//! - [`verify_cert_extensions`] accepts a set if at least one attestation matches
//! - [`PolicyConfig`] builds [`EnforcementCriteria`] from env, file, or builder calls
//!
//! # Quick Start
//!
//! ```
//! use assay_attest::{
//!     verify_cert_extensions, AttestationProcessingResult, CertificateSummary, PolicyConfig,
//!     GITHUB_OIDC_ISSUER,
//! };
//!
//! # fn example() -> assay_attest::AttestResult<()> {
//! let criteria = PolicyConfig::default()
//!     .with_repo("sigstore/sigstore-js")
//!     .resolve()?;
//!
//! let results = vec![AttestationProcessingResult::from_certificate(
//!     CertificateSummary::new(GITHUB_OIDC_ISSUER, "https://github.com/sigstore")
//!         .with_repository_uri("https://github.com/sigstore/sigstore-js"),
//! )];
//!
//! verify_cert_extensions(&results, &criteria)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `ASSAY_ATTEST_OWNER` | Expected repository owner |
//! | `ASSAY_ATTEST_REPO` | Expected repository (`owner/name`) |
//! | `ASSAY_ATTEST_HOSTNAME` | Host for owner/repository URIs (default: `github.com`) |
//! | `ASSAY_ATTEST_TENANT` | Enterprise tenant; selects `{tenant}.ghe.com` and its issuer |
//! | `ASSAY_ATTEST_CERT_OIDC_ISSUER` | Explicit OIDC issuer (overrides tenant issuer) |

pub mod config;
pub mod criteria;
pub mod error;
pub mod extensions;
pub mod issuer;
pub mod types;
pub mod verify;

// Re-export main types
pub use config::PolicyConfig;
pub use criteria::EnforcementCriteria;
pub use error::{AttestError, AttestResult, CertificateMismatch, TENANT_ISSUER_HINT};
pub use extensions::match_certificate;
pub use issuer::{tenant_issuer, GITHUB_OIDC_ISSUER, GITHUB_TENANT_OIDC_ISSUER_TEMPLATE};
pub use types::{
    AttestationProcessingResult, CertificateSummary, SignatureVerification, VerificationResult,
};
pub use verify::verify_cert_extensions;
