//! Session resolver — maps a request context to an admin session.

use custodia_core::context::RequestContext;
use custodia_core::error::{CustodiaError, CustodiaResult};
use custodia_core::models::audit::{ActionType, CreateAuditLogEntry};
use custodia_core::models::session::AdminSession;
use custodia_core::provider::IdentityProvider;
use custodia_core::repository::{AdminRepository, AuditRepository};
use tracing::{error, warn};

use crate::recorder::AuditRecorder;

/// Resolves the caller's current admin session.
///
/// Resolution is performed fresh on every call — sessions are never
/// cached, so deactivation and permission changes take effect on the
/// next request. All ambiguous conditions (provider outage, directory
/// outage) fail closed to "no session".
pub struct SessionResolver<P, A, L> {
    provider: P,
    admins: A,
    recorder: AuditRecorder<L>,
}

impl<P, A, L> SessionResolver<P, A, L>
where
    P: IdentityProvider,
    A: AdminRepository,
    L: AuditRepository,
{
    pub fn new(provider: P, admins: A, recorder: AuditRecorder<L>) -> Self {
        Self {
            provider,
            admins,
            recorder,
        }
    }

    /// Resolve the current admin session, or `None` for any caller
    /// without active administrative standing.
    ///
    /// A successful resolution updates the admin's login counters and
    /// appends one `login` audit entry. The counter update is issued
    /// before the audit write, so the entry's timestamp never precedes
    /// the login it describes.
    pub async fn resolve(&self, ctx: &RequestContext) -> CustodiaResult<Option<AdminSession>> {
        let principal = match self.provider.resolve(ctx).await {
            Ok(Some(p)) => p,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Identity provider unavailable; failing closed");
                return Ok(None);
            }
        };

        // Valid authentication without admin standing must look exactly
        // like no authentication, so admin emails cannot be probed.
        let admin = match self.admins.get_active_by_principal(principal.id).await {
            Ok(a) => a,
            Err(CustodiaError::NotFound { .. }) => return Ok(None),
            Err(e) => {
                error!(error = %e, "Admin directory unavailable; failing closed");
                return Ok(None);
            }
        };

        if let Err(e) = self.admins.record_login(admin.id).await {
            error!(error = %e, admin_id = %admin.id, "Failed to record login; failing closed");
            return Ok(None);
        }

        self.recorder
            .log(
                CreateAuditLogEntry::new(admin.id, ActionType::Login, "admin_session")
                    .resource_details(serde_json::json!({ "admin_id": admin.id }))
                    .ip_address(ctx.ip_address.clone()),
            )
            .await;

        Ok(Some(AdminSession::new(admin)))
    }

    /// Resolve the caller's admin record without login bookkeeping or
    /// audit side effects. Used where attribution is needed but the
    /// call is not itself a session resolution (e.g. logout).
    pub(crate) async fn identify(
        &self,
        ctx: &RequestContext,
    ) -> CustodiaResult<Option<AdminSession>> {
        let principal = match self.provider.resolve(ctx).await {
            Ok(Some(p)) => p,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Identity provider unavailable; failing closed");
                return Ok(None);
            }
        };

        match self.admins.get_active_by_principal(principal.id).await {
            Ok(a) => Ok(Some(AdminSession::new(a))),
            Err(CustodiaError::NotFound { .. }) => Ok(None),
            Err(e) => {
                error!(error = %e, "Admin directory unavailable; failing closed");
                Ok(None)
            }
        }
    }
}
