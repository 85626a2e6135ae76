//! Integration tests for the admin access & audit service, wired to
//! in-memory SurrealDB implementations of every boundary.

use custodia_auth::{AdminService, AuthConfig};
use custodia_core::context::RequestContext;
use custodia_core::error::CustodiaError;
use custodia_core::models::admin::{AdminRole, CreateAdminUser};
use custodia_core::models::audit::{ActionType, AuditFilter, AuditStatus};
use custodia_core::models::subject::CreateSubjectRecord;
use custodia_core::provider::IdentityProvider;
use custodia_core::repository::{AdminRepository, AuditRepository, SubjectRepository};
use custodia_db::DbManager;
use custodia_db::provider::SurrealIdentityProvider;
use custodia_db::repository::{
    SurrealAdminRepository, SurrealAuditRepository, SurrealSubjectRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

type Db = surrealdb::engine::local::Db;
type Service = AdminService<
    SurrealIdentityProvider<Db>,
    SurrealAdminRepository<Db>,
    SurrealAuditRepository<Db>,
    SurrealSubjectRepository<Db>,
>;

struct Harness {
    service: Service,
    provider: SurrealIdentityProvider<Db>,
    admins: SurrealAdminRepository<Db>,
    audit: SurrealAuditRepository<Db>,
    subjects: SurrealSubjectRepository<Db>,
    db: Surreal<Db>,
}

/// Spin up in-memory DB, bootstrap the schema, wire the service.
async fn setup() -> Harness {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    let manager = DbManager::init(db.clone()).await.unwrap();

    let provider = manager.identity_provider();
    let admins = manager.admins();
    let audit = manager.audit_log();
    let subjects = manager.subjects();

    let service = AdminService::new(
        provider.clone(),
        admins.clone(),
        audit.clone(),
        subjects.clone(),
        AuthConfig::default(),
    );

    Harness {
        service,
        provider,
        admins,
        audit,
        subjects,
        db,
    }
}

/// Seed an active admin with credentials and return (admin id, token).
async fn seed_admin(
    h: &Harness,
    email: &str,
    role: AdminRole,
    permissions: Option<serde_json::Value>,
) -> (Uuid, String) {
    let principal = h
        .provider
        .create_principal(email, "correct-horse-battery")
        .await
        .unwrap();
    let admin = h
        .admins
        .create(CreateAdminUser {
            principal_id: principal.id,
            email: email.into(),
            role,
            permissions,
        })
        .await
        .unwrap();
    let token = h
        .provider
        .sign_in(email, "correct-horse-battery")
        .await
        .unwrap();
    (admin.id, token)
}

async fn count_entries(h: &Harness, admin_id: Uuid, action: ActionType) -> usize {
    h.audit
        .query(AuditFilter {
            admin_user_id: Some(admin_id),
            action_type: Some(action),
            ..Default::default()
        })
        .await
        .unwrap()
        .len()
}

// -----------------------------------------------------------------------
// Session resolution
// -----------------------------------------------------------------------

#[tokio::test]
async fn resolve_session_happy_path() {
    let h = setup().await;
    let (admin_id, token) = seed_admin(&h, "leah@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(token).with_ip("127.0.0.1");

    let session = h
        .service
        .get_admin_session(&ctx)
        .await
        .unwrap()
        .expect("active super admin should resolve");
    assert!(session.is_admin);
    assert!(session.is_super_admin);
    assert_eq!(session.admin.id, admin_id);

    // Login bookkeeping and exactly one login audit entry.
    let refreshed = h.admins.get_by_id(admin_id).await.unwrap();
    assert_eq!(refreshed.login_count, 1);
    assert!(refreshed.last_login_at.is_some());
    assert_eq!(count_entries(&h, admin_id, ActionType::Login).await, 1);

    // Every resolution is fresh and audited again.
    h.service.get_admin_session(&ctx).await.unwrap().unwrap();
    assert_eq!(h.admins.get_by_id(admin_id).await.unwrap().login_count, 2);
    assert_eq!(count_entries(&h, admin_id, ActionType::Login).await, 2);
}

#[tokio::test]
async fn anonymous_and_non_admin_callers_get_no_session() {
    let h = setup().await;

    let session = h
        .service
        .get_admin_session(&RequestContext::anonymous())
        .await
        .unwrap();
    assert!(session.is_none());

    // A valid principal without admin standing must be
    // indistinguishable from no session at all.
    h.provider
        .create_principal("member@example.com", "correct-horse-battery")
        .await
        .unwrap();
    let token = h
        .provider
        .sign_in("member@example.com", "correct-horse-battery")
        .await
        .unwrap();
    let session = h
        .service
        .get_admin_session(&RequestContext::bearer(token))
        .await
        .unwrap();
    assert!(session.is_none());
}

#[tokio::test]
async fn inactive_admin_never_authorizes() {
    let h = setup().await;
    let (admin_id, token) = seed_admin(&h, "former@example.com", AdminRole::Admin, None).await;

    h.admins
        .update(
            admin_id,
            custodia_core::models::admin::UpdateAdminUser {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let session = h
        .service
        .get_admin_session(&RequestContext::bearer(token))
        .await
        .unwrap();
    assert!(session.is_none());
}

// -----------------------------------------------------------------------
// Authorization gate
// -----------------------------------------------------------------------

#[tokio::test]
async fn tier_ordering_is_enforced() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let (_, admin_token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    let (_, mod_token) = seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;

    let super_ctx = RequestContext::bearer(super_token);
    let admin_ctx = RequestContext::bearer(admin_token);
    let mod_ctx = RequestContext::bearer(mod_token);

    // requireRole(super_admin) rejects admin and moderator.
    h.service
        .require_admin_auth(&super_ctx, Some(AdminRole::SuperAdmin))
        .await
        .unwrap();
    for ctx in [&admin_ctx, &mod_ctx] {
        let result = h
            .service
            .require_admin_auth(ctx, Some(AdminRole::SuperAdmin))
            .await;
        assert!(matches!(
            result,
            Err(CustodiaError::AuthorizationDenied { .. })
        ));
    }

    // requireRole(admin) accepts admin and super_admin, rejects moderator.
    h.service
        .require_admin_auth(&admin_ctx, Some(AdminRole::Admin))
        .await
        .unwrap();
    h.service
        .require_admin_auth(&super_ctx, Some(AdminRole::Admin))
        .await
        .unwrap();
    let result = h
        .service
        .require_admin_auth(&mod_ctx, Some(AdminRole::Admin))
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));

    // No explicit tier means "any active admin".
    h.service.require_admin_auth(&mod_ctx, None).await.unwrap();

    // Unauthenticated is a distinct outcome from under-privileged.
    let result = h
        .service
        .require_admin_auth(&RequestContext::anonymous(), Some(AdminRole::Admin))
        .await;
    assert!(matches!(result, Err(CustodiaError::Unauthenticated)));
}

#[tokio::test]
async fn super_admin_permission_ceiling() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let (_, mod_token) = seed_admin(
        &h,
        "mod@example.com",
        AdminRole::Moderator,
        Some(serde_json::json!({ "manage_posts": true, "manage_users": false })),
    )
    .await;

    let super_ctx = RequestContext::bearer(super_token);
    let mod_ctx = RequestContext::bearer(mod_token);

    // Role ceiling: super admins pass every check, even unknown names.
    assert!(h.service.has_permission(&super_ctx, "anything").await.unwrap());

    // Everyone else gets exactly the stored value.
    assert!(h.service.has_permission(&mod_ctx, "manage_posts").await.unwrap());
    assert!(!h.service.has_permission(&mod_ctx, "manage_users").await.unwrap());
    assert!(!h.service.has_permission(&mod_ctx, "absent").await.unwrap());

    // No session at all: false, not an error.
    assert!(
        !h.service
            .has_permission(&RequestContext::anonymous(), "anything")
            .await
            .unwrap()
    );
}

// -----------------------------------------------------------------------
// Admin management
// -----------------------------------------------------------------------

#[tokio::test]
async fn scenario_a_super_admin_creates_admin() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;
    let ctx = RequestContext::bearer(super_token);

    let created = h
        .service
        .create_admin_user(
            &ctx,
            "new@example.com",
            "pw-one-two-three",
            AdminRole::Admin,
            serde_json::json!({}),
        )
        .await
        .unwrap();

    assert_eq!(created.email, "new@example.com");
    assert_eq!(created.role, AdminRole::Admin);
    assert!(created.is_active);

    // Scenario D: exactly one create entry, pointing at the new admin.
    let entries = h
        .service
        .get_audit_logs(
            &ctx,
            AuditFilter {
                action_type: Some(ActionType::Create),
                limit: Some(10),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.resource_type, "admin_user");
    assert_eq!(entry.status, AuditStatus::Success);
    assert_eq!(entry.resource_id.as_deref(), Some(created.id.to_string().as_str()));

    // The new admin can sign in and resolve a session.
    let token = h
        .provider
        .sign_in("new@example.com", "pw-one-two-three")
        .await
        .unwrap();
    let session = h
        .service
        .get_admin_session(&RequestContext::bearer(token))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.role(), AdminRole::Admin);
    assert!(!session.is_super_admin);
}

#[tokio::test]
async fn scenario_b_moderator_cannot_create_admins() {
    let h = setup().await;
    seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let (_, mod_token) = seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;
    let ctx = RequestContext::bearer(mod_token);

    let result = h
        .service
        .create_admin_user(
            &ctx,
            "new@example.com",
            "pw-one-two-three",
            AdminRole::Admin,
            serde_json::json!({}),
        )
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));

    // No principal was created and no create entry was fabricated.
    let sign_in = h.provider.sign_in("new@example.com", "pw-one-two-three").await;
    assert!(matches!(sign_in, Err(CustodiaError::Unauthenticated)));
    let creates = h
        .audit
        .query(AuditFilter {
            action_type: Some(ActionType::Create),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(creates.is_empty());
}

#[tokio::test]
async fn scenario_c_deactivated_admin_stops_resolving() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(super_token);

    let created = h
        .service
        .create_admin_user(
            &ctx,
            "new@example.com",
            "pw-one-two-three",
            AdminRole::Admin,
            serde_json::json!({}),
        )
        .await
        .unwrap();
    let token = h
        .provider
        .sign_in("new@example.com", "pw-one-two-three")
        .await
        .unwrap();

    h.service.deactivate_admin_user(&ctx, created.id).await.unwrap();

    let session = h
        .service
        .get_admin_session(&RequestContext::bearer(token))
        .await
        .unwrap();
    assert!(session.is_none());

    // Deactivation is idempotent and audited.
    h.service.deactivate_admin_user(&ctx, created.id).await.unwrap();
    assert!(!h.admins.get_by_id(created.id).await.unwrap().is_active);
    let updates = h
        .audit
        .query(AuditFilter {
            action_type: Some(ActionType::Update),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].changes["is_active"], false);
}

#[tokio::test]
async fn failed_create_rolls_back_principal_and_audits_failure() {
    let h = setup().await;
    let (super_id, super_token) =
        seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(super_token);

    // Occupy the directory email without a matching principal, so the
    // principal phase succeeds and the directory phase fails.
    h.admins
        .create(CreateAdminUser {
            principal_id: Uuid::new_v4(),
            email: "taken@example.com".into(),
            role: AdminRole::Admin,
            permissions: None,
        })
        .await
        .unwrap();

    let result = h
        .service
        .create_admin_user(
            &ctx,
            "taken@example.com",
            "pw-one-two-three",
            AdminRole::Admin,
            serde_json::json!({}),
        )
        .await;
    assert!(result.is_err());

    // The orphaned principal was deleted by the compensating action.
    let sign_in = h
        .provider
        .sign_in("taken@example.com", "pw-one-two-three")
        .await;
    assert!(matches!(sign_in, Err(CustodiaError::Unauthenticated)));

    // The failure is on the audit trail with its error message.
    let creates = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(super_id),
            action_type: Some(ActionType::Create),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].status, AuditStatus::Failure);
    assert!(creates[0].error_message.is_some());
}

#[tokio::test]
async fn failed_permission_update_is_audited() {
    let h = setup().await;
    let (super_id, super_token) =
        seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(super_token);
    let missing = Uuid::new_v4();

    let result = h
        .service
        .update_admin_permissions(&ctx, missing, serde_json::json!({ "manage_posts": true }))
        .await;
    assert!(matches!(result, Err(CustodiaError::NotFound { .. })));

    let changes = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(super_id),
            action_type: Some(ActionType::PermissionChange),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].status, AuditStatus::Failure);
    assert!(changes[0].error_message.is_some());
    assert_eq!(
        changes[0].resource_id.as_deref(),
        Some(missing.to_string().as_str())
    );
}

#[tokio::test]
async fn failed_deactivation_is_audited() {
    let h = setup().await;
    let (super_id, super_token) =
        seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(super_token);
    let missing = Uuid::new_v4();

    let result = h.service.deactivate_admin_user(&ctx, missing).await;
    assert!(matches!(result, Err(CustodiaError::NotFound { .. })));

    let updates = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(super_id),
            action_type: Some(ActionType::Update),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].status, AuditStatus::Failure);
    assert!(updates[0].error_message.is_some());
    assert_eq!(
        updates[0].resource_id.as_deref(),
        Some(missing.to_string().as_str())
    );
}

#[tokio::test]
async fn super_admin_role_is_not_self_serviceable() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let ctx = RequestContext::bearer(super_token);

    let result = h
        .service
        .create_admin_user(
            &ctx,
            "new@example.com",
            "pw-one-two-three",
            AdminRole::SuperAdmin,
            serde_json::json!({}),
        )
        .await;
    assert!(matches!(result, Err(CustodiaError::Validation { .. })));
}

#[tokio::test]
async fn update_permissions_takes_effect_and_is_audited() {
    let h = setup().await;
    let (_, super_token) = seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let (mod_id, mod_token) = seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;
    let super_ctx = RequestContext::bearer(super_token);
    let mod_ctx = RequestContext::bearer(mod_token);

    assert!(!h.service.has_permission(&mod_ctx, "manage_posts").await.unwrap());

    h.service
        .update_admin_permissions(
            &super_ctx,
            mod_id,
            serde_json::json!({ "manage_posts": true }),
        )
        .await
        .unwrap();

    // No caching: the next resolution sees the new map.
    assert!(h.service.has_permission(&mod_ctx, "manage_posts").await.unwrap());

    let changes = h
        .audit
        .query(AuditFilter {
            action_type: Some(ActionType::PermissionChange),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].resource_id.as_deref(), Some(mod_id.to_string().as_str()));
    assert_eq!(changes[0].changes["permissions"]["manage_posts"], true);

    // Moderators cannot grant themselves permissions.
    let result = h
        .service
        .update_admin_permissions(&mod_ctx, mod_id, serde_json::json!({ "manage_users": true }))
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));
}

#[tokio::test]
async fn logout_is_audited_without_fabricating_a_login() {
    let h = setup().await;
    let (admin_id, token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    let ctx = RequestContext::bearer(token);

    // One resolution, one login entry.
    h.service.get_admin_session(&ctx).await.unwrap().unwrap();
    assert_eq!(count_entries(&h, admin_id, ActionType::Login).await, 1);

    h.service.logout(&ctx).await.unwrap();

    assert_eq!(count_entries(&h, admin_id, ActionType::Logout).await, 1);
    assert_eq!(count_entries(&h, admin_id, ActionType::Login).await, 1);

    // The token is revoked.
    let session = h.service.get_admin_session(&ctx).await.unwrap();
    assert!(session.is_none());
}

// -----------------------------------------------------------------------
// Audit queries
// -----------------------------------------------------------------------

#[tokio::test]
async fn audit_queries_require_admin_tier() {
    let h = setup().await;
    let (_, mod_token) = seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;

    let result = h
        .service
        .get_audit_logs(&RequestContext::anonymous(), AuditFilter::default())
        .await;
    assert!(matches!(result, Err(CustodiaError::Unauthenticated)));

    let result = h
        .service
        .get_audit_logs(&RequestContext::bearer(mod_token), AuditFilter::default())
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));
}

#[tokio::test]
async fn audit_query_limit_is_clamped() {
    let h = setup().await;
    let (_, admin_token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    let ctx = RequestContext::bearer(admin_token);

    // Generate a handful of entries (each resolution logs a login).
    for _ in 0..4 {
        h.service.get_admin_session(&ctx).await.unwrap().unwrap();
    }

    let limited = h
        .service
        .get_audit_logs(
            &ctx,
            AuditFilter {
                limit: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);

    // An absurd limit is capped at the configured maximum rather than
    // passed through.
    let capped = h
        .service
        .get_audit_logs(
            &ctx,
            AuditFilter {
                limit: Some(u64::MAX),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(capped.len() <= 1000);
}

// -----------------------------------------------------------------------
// GDPR compliance flows
// -----------------------------------------------------------------------

async fn seed_subject(h: &Harness, email: &str) {
    h.subjects
        .create(CreateSubjectRecord {
            email: email.into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            phone: Some("+44 7700 900000".into()),
            details: Some(serde_json::json!({ "programme": "performance" })),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn export_requires_admin_tier_and_is_audited() {
    let h = setup().await;
    let (admin_id, admin_token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    let (_, mod_token) = seed_admin(&h, "mod@example.com", AdminRole::Moderator, None).await;
    seed_subject(&h, "jane@example.com").await;

    let result = h
        .service
        .export_user_data(&RequestContext::bearer(mod_token), "jane@example.com")
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));

    let export = h
        .service
        .export_user_data(&RequestContext::bearer(admin_token), "jane@example.com")
        .await
        .unwrap();
    assert_eq!(export.email, "jane@example.com");
    assert_eq!(export.records.len(), 1);
    assert_eq!(export.records[0].first_name, "Jane");

    let exports = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(admin_id),
            action_type: Some(ActionType::Export),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].resource_type, "user_data");
    assert_eq!(exports[0].resource_details["gdpr_export"], true);
}

#[tokio::test]
async fn failed_export_is_audited() {
    let h = setup().await;
    let (admin_id, admin_token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    let ctx = RequestContext::bearer(admin_token);

    // A record id that is not a UUID poisons the export read path.
    h.db.query(
        "CREATE subject_record:corrupt SET \
         email = 'jane@example.com', \
         first_name = 'Jane', \
         last_name = 'Doe', \
         phone = NONE, \
         details = {}, \
         anonymized_at = NONE",
    )
    .await
    .unwrap()
    .check()
    .unwrap();

    let result = h.service.export_user_data(&ctx, "jane@example.com").await;
    assert!(matches!(result, Err(CustodiaError::Database(_))));

    let exports = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(admin_id),
            action_type: Some(ActionType::Export),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].status, AuditStatus::Failure);
    assert!(exports[0].error_message.is_some());
    assert_eq!(exports[0].resource_details["gdpr_export"], true);
}

#[tokio::test]
async fn anonymize_requires_super_admin_and_is_audited() {
    let h = setup().await;
    let (super_id, super_token) =
        seed_admin(&h, "super@example.com", AdminRole::SuperAdmin, None).await;
    let (_, admin_token) = seed_admin(&h, "admin@example.com", AdminRole::Admin, None).await;
    seed_subject(&h, "jane@example.com").await;

    // Admin tier is not enough for the irreversible operation.
    let result = h
        .service
        .anonymize_user_data(&RequestContext::bearer(admin_token), "jane@example.com")
        .await;
    assert!(matches!(
        result,
        Err(CustodiaError::AuthorizationDenied { .. })
    ));

    h.service
        .anonymize_user_data(&RequestContext::bearer(super_token), "jane@example.com")
        .await
        .unwrap();

    assert!(
        h.subjects
            .find_by_email("jane@example.com")
            .await
            .unwrap()
            .is_empty()
    );

    // Compliance actions are self-documenting.
    let deletes = h
        .audit
        .query(AuditFilter {
            admin_user_id: Some(super_id),
            action_type: Some(ActionType::Delete),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].resource_id.as_deref(), Some("jane@example.com"));
    assert_eq!(deletes[0].changes["anonymized"], true);
    assert_eq!(deletes[0].changes["records_affected"], 1);
}
