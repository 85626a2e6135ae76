//! SurrealDB implementation of [`AdminRepository`].
//!
//! Admin records are never deleted; deactivation flips `is_active` so
//! audit entries keep a valid actor reference. Login bookkeeping is a
//! single atomic UPDATE so concurrent resolutions cannot lose counts.

use chrono::{DateTime, Utc};
use custodia_core::error::CustodiaResult;
use custodia_core::models::admin::{AdminRole, AdminUser, CreateAdminUser, UpdateAdminUser};
use custodia_core::repository::AdminRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AdminRow {
    principal_id: String,
    email: String,
    role: String,
    permissions: serde_json::Value,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
    login_count: u64,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AdminRowWithId {
    record_id: String,
    principal_id: String,
    email: String,
    role: String,
    permissions: serde_json::Value,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
    login_count: u64,
}

fn parse_role(s: &str) -> Result<AdminRole, DbError> {
    AdminRole::parse(s).ok_or_else(|| DbError::Corrupt(format!("unknown admin role: {s}")))
}

impl AdminRow {
    fn into_admin(self, id: Uuid) -> Result<AdminUser, DbError> {
        let principal_id = Uuid::parse_str(&self.principal_id)
            .map_err(|e| DbError::Corrupt(format!("invalid principal UUID: {e}")))?;
        Ok(AdminUser {
            id,
            principal_id,
            email: self.email,
            role: parse_role(&self.role)?,
            permissions: self.permissions,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
            login_count: self.login_count,
        })
    }
}

impl AdminRowWithId {
    fn try_into_admin(self) -> Result<AdminUser, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        let principal_id = Uuid::parse_str(&self.principal_id)
            .map_err(|e| DbError::Corrupt(format!("invalid principal UUID: {e}")))?;
        Ok(AdminUser {
            id,
            principal_id,
            email: self.email,
            role: parse_role(&self.role)?,
            permissions: self.permissions,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
            login_count: self.login_count,
        })
    }
}

/// SurrealDB implementation of the admin directory.
#[derive(Clone)]
pub struct SurrealAdminRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAdminRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AdminRepository for SurrealAdminRepository<C> {
    async fn create(&self, input: CreateAdminUser) -> CustodiaResult<AdminUser> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let permissions = input
            .permissions
            .unwrap_or(serde_json::Value::Object(Default::default()));

        let result = self
            .db
            .query(
                "CREATE type::record('admin_user', $id) SET \
                 principal_id = $principal_id, \
                 email = $email, \
                 role = $role, \
                 permissions = $permissions, \
                 is_active = true, \
                 last_login_at = NONE, \
                 login_count = 0",
            )
            .bind(("id", id_str.clone()))
            .bind(("principal_id", input.principal_id.to_string()))
            .bind(("email", input.email))
            .bind(("role", input.role.as_str().to_string()))
            .bind(("permissions", permissions))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<AdminRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "admin_user".into(),
            id: id_str,
        })?;

        Ok(row.into_admin(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> CustodiaResult<AdminUser> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('admin_user', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AdminRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "admin_user".into(),
            id: id_str,
        })?;

        Ok(row.into_admin(id)?)
    }

    async fn get_active_by_principal(&self, principal_id: Uuid) -> CustodiaResult<AdminUser> {
        let principal_id_str = principal_id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM admin_user \
                 WHERE principal_id = $principal_id AND is_active = true",
            )
            .bind(("principal_id", principal_id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AdminRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "admin_user".into(),
            id: format!("principal_id={principal_id_str}"),
        })?;

        Ok(row.try_into_admin()?)
    }

    async fn update(&self, id: Uuid, input: UpdateAdminUser) -> CustodiaResult<AdminUser> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.permissions.is_some() {
            sets.push("permissions = $permissions");
        }
        if input.is_active.is_some() {
            sets.push("is_active = $is_active");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('admin_user', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(permissions) = input.permissions {
            builder = builder.bind(("permissions", permissions));
        }
        if let Some(is_active) = input.is_active {
            builder = builder.bind(("is_active", is_active));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<AdminRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "admin_user".into(),
            id: id_str,
        })?;

        Ok(row.into_admin(id)?)
    }

    async fn record_login(&self, id: Uuid) -> CustodiaResult<()> {
        self.db
            .query(
                "UPDATE type::record('admin_user', $id) SET \
                 login_count += 1, last_login_at = time::now()",
            )
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }
}
