//! Request-scoped caller context.
//!
//! Every session resolution takes an explicit [`RequestContext`] rather
//! than reading an ambient "current user", so resolvers are trivially
//! testable with fabricated contexts.

/// The caller's authentication context for a single inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Opaque bearer token managed by the identity provider.
    pub token: Option<String>,
    /// Caller IP, recorded on audit entries when present.
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestContext {
    /// A context with no credentials (unauthenticated caller).
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context carrying a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}
