//! Known OIDC issuers and case-insensitive identity comparison.

/// Public GitHub Actions OIDC issuer.
pub const GITHUB_OIDC_ISSUER: &str = "https://token.actions.githubusercontent.com";

/// Issuer pattern for GitHub Enterprise Cloud with data residency.
/// `{tenant}` is replaced by the enterprise's tenant name.
pub const GITHUB_TENANT_OIDC_ISSUER_TEMPLATE: &str = "https://token.actions.{tenant}.ghe.com";

/// Resolve the issuer URL for a tenant.
pub fn tenant_issuer(tenant: &str) -> String {
    GITHUB_TENANT_OIDC_ISSUER_TEMPLATE.replace("{tenant}", tenant)
}

/// Case-insensitive equality by per-char lowercase mapping.
///
/// ASCII input (all real issuer and repository URIs) compares exactly like
/// `eq_ignore_ascii_case`. For other scripts this is lowercase comparison,
/// not full Unicode case folding: final sigma `ς` and `σ` differ.
pub fn fold_eq(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive prefix test, using the same lowercase mapping as [`fold_eq`].
pub fn fold_starts_with(haystack: &str, prefix: &str) -> bool {
    let mut rest = haystack.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|c| rest.next() == Some(c))
}

/// Whether `observed` is nested under `base` as a path segment, e.g.
/// `https://issuer.example/acme` under `https://issuer.example`.
pub fn is_tenant_scoped(observed: &str, base: &str) -> bool {
    let mut prefix = String::with_capacity(base.len() + 1);
    prefix.push_str(base);
    prefix.push('/');
    fold_starts_with(observed, &prefix)
}
