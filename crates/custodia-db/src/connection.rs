//! SurrealDB connection management and store bootstrap.
//!
//! [`DbManager`] wraps a SurrealDB connection with the schema applied
//! and hands out the repositories and the identity-provider stand-in
//! wired to it. Remote deployments go through [`DbManager::connect`];
//! embedded engines (tests, single-process setups) open their own
//! connection and pass it to [`DbManager::init`].

use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::DbError;
use crate::provider::SurrealIdentityProvider;
use crate::repository::{
    SurrealAdminRepository, SurrealAuditRepository, SurrealSubjectRepository,
};
use crate::schema::run_migrations;

/// Configuration for connecting to SurrealDB.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Root username for authentication.
    pub username: String,
    /// Root password for authentication.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "custodia".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

/// A SurrealDB connection with the admin-access schema applied.
#[derive(Clone)]
pub struct DbManager<C: Connection> {
    db: Surreal<C>,
}

impl DbManager<Client> {
    /// Connect over WebSocket using the provided configuration.
    ///
    /// Authenticates as root, selects the configured namespace and
    /// database, and applies any pending migrations before returning.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        Self::init(db).await
    }
}

impl<C: Connection> DbManager<C> {
    /// Apply pending migrations to an existing connection and wrap it.
    ///
    /// The namespace and database must already be selected.
    pub async fn init(db: Surreal<C>) -> Result<Self, DbError> {
        run_migrations(&db).await?;
        info!("Database schema ready");
        Ok(Self { db })
    }

    /// Returns a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<C> {
        &self.db
    }

    /// Admin directory backed by this connection.
    pub fn admins(&self) -> SurrealAdminRepository<C> {
        SurrealAdminRepository::new(self.db.clone())
    }

    /// Append-only audit store backed by this connection.
    pub fn audit_log(&self) -> SurrealAuditRepository<C> {
        SurrealAuditRepository::new(self.db.clone())
    }

    /// Data-subject store backed by this connection.
    pub fn subjects(&self) -> SurrealSubjectRepository<C> {
        SurrealSubjectRepository::new(self.db.clone())
    }

    /// Identity-provider stand-in backed by this connection.
    pub fn identity_provider(&self) -> SurrealIdentityProvider<C> {
        SurrealIdentityProvider::new(self.db.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_local_instance() {
        let config = DbConfig::default();
        assert_eq!(config.url, "127.0.0.1:8000");
        assert_eq!(config.namespace, "custodia");
        assert_eq!(config.database, "main");
    }
}
