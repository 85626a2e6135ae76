//! Auth-layer configuration.

/// Configuration for session resolution and audit querying.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Page size applied to audit queries with no explicit limit.
    pub default_audit_limit: u64,
    /// Hard cap on audit query page size.
    pub max_audit_limit: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_audit_limit: 100,
            max_audit_limit: 1000,
        }
    }
}
