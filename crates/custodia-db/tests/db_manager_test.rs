//! Integration tests for store bootstrap via [`DbManager`] using
//! in-memory SurrealDB.

use custodia_core::context::RequestContext;
use custodia_core::models::admin::{AdminRole, CreateAdminUser};
use custodia_core::provider::IdentityProvider;
use custodia_core::repository::{AdminRepository, AuditRepository};
use custodia_db::DbManager;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

async fn open_db() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    db
}

#[tokio::test]
async fn init_applies_schema_and_vends_working_stores() {
    let manager = DbManager::init(open_db().await).await.unwrap();

    let provider = manager.identity_provider();
    let principal = provider
        .create_principal("ops@example.com", "correct-horse-battery")
        .await
        .unwrap();

    let admins = manager.admins();
    let admin = admins
        .create(CreateAdminUser {
            principal_id: principal.id,
            email: "ops@example.com".into(),
            role: AdminRole::Admin,
            permissions: None,
        })
        .await
        .unwrap();

    let token = provider
        .sign_in("ops@example.com", "correct-horse-battery")
        .await
        .unwrap();
    let resolved = provider
        .resolve(&RequestContext::bearer(token))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.id, principal.id);

    let found = admins.get_active_by_principal(principal.id).await.unwrap();
    assert_eq!(found.id, admin.id);
}

#[tokio::test]
async fn init_is_idempotent() {
    let db = open_db().await;

    let first = DbManager::init(db.clone()).await.unwrap();
    let admin = first
        .admins()
        .create(CreateAdminUser {
            principal_id: Uuid::new_v4(),
            email: "keep@example.com".into(),
            role: AdminRole::Moderator,
            permissions: None,
        })
        .await
        .unwrap();

    // Re-running bootstrap on the same connection must not disturb data.
    let second = DbManager::init(db).await.unwrap();
    let fetched = second.admins().get_by_id(admin.id).await.unwrap();
    assert_eq!(fetched.email, "keep@example.com");

    let entries = second.audit_log().query(Default::default()).await.unwrap();
    assert!(entries.is_empty());
}
