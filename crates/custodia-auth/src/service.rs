//! Admin management and compliance service.
//!
//! The public contract consumed by route handlers: session access,
//! role gating, admin lifecycle management, audit queries, and the
//! GDPR export/anonymization flows. Every management operation audits
//! its outcome, success or failure, before returning.

use chrono::Utc;
use custodia_core::context::RequestContext;
use custodia_core::error::{CustodiaError, CustodiaResult};
use custodia_core::models::admin::{AdminRole, AdminUser, CreateAdminUser, UpdateAdminUser};
use custodia_core::models::audit::{ActionType, AuditFilter, AuditLogEntry, CreateAuditLogEntry};
use custodia_core::models::session::AdminSession;
use custodia_core::models::subject::SubjectDataExport;
use custodia_core::provider::IdentityProvider;
use custodia_core::repository::{AdminRepository, AuditRepository, SubjectRepository};
use tracing::warn;

use crate::config::AuthConfig;
use crate::gate::AuthorizationGate;
use crate::recorder::AuditRecorder;
use crate::resolver::SessionResolver;

/// Admin access & audit service.
///
/// Generic over the provider and repository implementations so that
/// this layer has no dependency on the database crate.
pub struct AdminService<P, A, L, S> {
    provider: P,
    admins: A,
    subjects: S,
    gate: AuthorizationGate<P, A, L>,
    recorder: AuditRecorder<L>,
}

impl<P, A, L, S> AdminService<P, A, L, S>
where
    P: IdentityProvider + Clone,
    A: AdminRepository + Clone,
    L: AuditRepository + Clone,
    S: SubjectRepository,
{
    pub fn new(provider: P, admins: A, audit: L, subjects: S, config: AuthConfig) -> Self {
        let recorder = AuditRecorder::new(
            audit,
            config.default_audit_limit,
            config.max_audit_limit,
        );
        let resolver = SessionResolver::new(provider.clone(), admins.clone(), recorder.clone());
        Self {
            provider,
            admins,
            subjects,
            gate: AuthorizationGate::new(resolver),
            recorder,
        }
    }

    /// Resolve the caller's current admin session, if any.
    pub async fn get_admin_session(
        &self,
        ctx: &RequestContext,
    ) -> CustodiaResult<Option<AdminSession>> {
        self.gate.resolver().resolve(ctx).await
    }

    /// Require an active admin session at or above `required_role`
    /// (any active admin when `None`).
    pub async fn require_admin_auth(
        &self,
        ctx: &RequestContext,
        required_role: Option<AdminRole>,
    ) -> CustodiaResult<AdminSession> {
        Ok(self
            .gate
            .require_role(ctx, required_role.unwrap_or(AdminRole::Moderator))
            .await?)
    }

    /// Check a fine-grained permission for the caller.
    pub async fn has_permission(&self, ctx: &RequestContext, name: &str) -> CustodiaResult<bool> {
        self.gate.has_permission(ctx, name).await
    }

    /// Create a new admin user. Super admin only.
    ///
    /// Two-phase: the authentication principal is created first, then
    /// the directory record. If the directory insert fails, the
    /// orphaned principal is deleted as a best-effort compensating
    /// action so no permission-less account is left behind.
    pub async fn create_admin_user(
        &self,
        ctx: &RequestContext,
        email: &str,
        password: &str,
        role: AdminRole,
        permissions: serde_json::Value,
    ) -> CustodiaResult<AdminUser> {
        let session = self.gate.require_role(ctx, AdminRole::SuperAdmin).await?;

        if role == AdminRole::SuperAdmin {
            return Err(CustodiaError::Validation {
                message: "super_admin accounts are provisioned manually".into(),
            });
        }

        let principal = match self.provider.create_principal(email, password).await {
            Ok(p) => p,
            Err(e) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Create,
                            "admin_user",
                        )
                        .resource_details(
                            serde_json::json!({ "email": email, "role": role.as_str() }),
                        )
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                return Err(e);
            }
        };

        let created = self
            .admins
            .create(CreateAdminUser {
                principal_id: principal.id,
                email: email.to_string(),
                role,
                permissions: Some(permissions),
            })
            .await;

        match created {
            Ok(admin) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Create,
                            "admin_user",
                        )
                        .resource_id(admin.id.to_string())
                        .resource_details(
                            serde_json::json!({ "email": email, "role": role.as_str() }),
                        )
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Ok(admin)
            }
            Err(e) => {
                // Compensate for the orphaned principal; its failure is
                // logged, never escalated.
                if let Err(rollback_err) = self.provider.delete_principal(principal.id).await {
                    warn!(
                        error = %rollback_err,
                        principal_id = %principal.id,
                        "Failed to roll back orphaned principal"
                    );
                }
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Create,
                            "admin_user",
                        )
                        .resource_details(
                            serde_json::json!({ "email": email, "role": role.as_str() }),
                        )
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Replace an admin's fine-grained permission map. Super admin only.
    ///
    /// Concurrent updates are last-writer-wins at the store layer;
    /// permission changes are rare, operator-driven events.
    pub async fn update_admin_permissions(
        &self,
        ctx: &RequestContext,
        admin_id: uuid::Uuid,
        permissions: serde_json::Value,
    ) -> CustodiaResult<AdminUser> {
        let session = self.gate.require_role(ctx, AdminRole::SuperAdmin).await?;

        let updated = self
            .admins
            .update(
                admin_id,
                UpdateAdminUser {
                    permissions: Some(permissions.clone()),
                    ..Default::default()
                },
            )
            .await;

        match updated {
            Ok(admin) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::PermissionChange,
                            "admin_user",
                        )
                        .resource_id(admin_id.to_string())
                        .changes(serde_json::json!({ "permissions": permissions }))
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Ok(admin)
            }
            Err(e) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::PermissionChange,
                            "admin_user",
                        )
                        .resource_id(admin_id.to_string())
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Deactivate an admin user (soft-delete). Super admin only.
    ///
    /// Idempotent: deactivating an already-inactive admin succeeds and
    /// leaves the same end state.
    pub async fn deactivate_admin_user(
        &self,
        ctx: &RequestContext,
        admin_id: uuid::Uuid,
    ) -> CustodiaResult<()> {
        let session = self.gate.require_role(ctx, AdminRole::SuperAdmin).await?;

        let updated = self
            .admins
            .update(
                admin_id,
                UpdateAdminUser {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await;

        match updated {
            Ok(_) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Update,
                            "admin_user",
                        )
                        .resource_id(admin_id.to_string())
                        .changes(serde_json::json!({ "is_active": false }))
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Ok(())
            }
            Err(e) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Update,
                            "admin_user",
                        )
                        .resource_id(admin_id.to_string())
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Audit the caller's logout and revoke their provider session.
    ///
    /// Attribution uses a side-effect-free lookup so a logout never
    /// fabricates a `login` audit entry.
    pub async fn logout(&self, ctx: &RequestContext) -> CustodiaResult<()> {
        if let Some(session) = self.gate.resolver().identify(ctx).await? {
            self.recorder
                .log(
                    CreateAuditLogEntry::new(
                        session.admin.id,
                        ActionType::Logout,
                        "admin_session",
                    )
                    .ip_address(ctx.ip_address.clone()),
                )
                .await;
        }

        self.provider.sign_out(ctx).await
    }

    /// Query the audit trail. Requires admin tier.
    pub async fn get_audit_logs(
        &self,
        ctx: &RequestContext,
        filter: AuditFilter,
    ) -> CustodiaResult<Vec<AuditLogEntry>> {
        self.gate.require_role(ctx, AdminRole::Admin).await?;
        self.recorder.query(filter).await
    }

    /// Export all stored data for a subject (GDPR access/portability).
    /// Requires admin tier; the export itself is audited.
    pub async fn export_user_data(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> CustodiaResult<SubjectDataExport> {
        let session = self.gate.require_role(ctx, AdminRole::Admin).await?;

        match self.subjects.find_by_email(email).await {
            Ok(records) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Export,
                            "user_data",
                        )
                        .resource_id(email.to_string())
                        .resource_details(serde_json::json!({ "gdpr_export": true }))
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Ok(SubjectDataExport {
                    email: email.to_string(),
                    generated_at: Utc::now(),
                    records,
                })
            }
            Err(e) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Export,
                            "user_data",
                        )
                        .resource_id(email.to_string())
                        .resource_details(serde_json::json!({ "gdpr_export": true }))
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Err(e)
            }
        }
    }

    /// Irreversibly anonymize all stored data for a subject (GDPR
    /// erasure). Super admin only; self-documenting via a
    /// delete-flavored audit entry.
    pub async fn anonymize_user_data(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> CustodiaResult<()> {
        let session = self.gate.require_role(ctx, AdminRole::SuperAdmin).await?;

        match self.subjects.anonymize_by_email(email).await {
            Ok(affected) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Delete,
                            "user_data",
                        )
                        .resource_id(email.to_string())
                        .changes(serde_json::json!({
                            "anonymized": true,
                            "records_affected": affected,
                        }))
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Ok(())
            }
            Err(e) => {
                self.recorder
                    .log(
                        CreateAuditLogEntry::new(
                            session.admin.id,
                            ActionType::Delete,
                            "user_data",
                        )
                        .resource_id(email.to_string())
                        .failure(e.to_string())
                        .ip_address(ctx.ip_address.clone()),
                    )
                    .await;
                Err(e)
            }
        }
    }
}
