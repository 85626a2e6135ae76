//! SurrealDB-backed identity provider.
//!
//! A stand-in for the managed identity provider, used in development
//! and tests. Credentials are Argon2id-hashed in the `principal` table;
//! sessions are opaque bearer tokens in `principal_token`. Production
//! deployments implement [`IdentityProvider`] against the real provider
//! instead.
//!
//! Password hashing uses Argon2id with OWASP-recommended parameters
//! (memory: 19 MiB, iterations: 2, parallelism: 1). Salt is randomly
//! generated per hash. An optional pepper (server-side secret) can be
//! provided at construction time.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use custodia_core::context::RequestContext;
use custodia_core::error::{CustodiaError, CustodiaResult};
use custodia_core::provider::{IdentityProvider, Principal};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct PrincipalRow {
    email: String,
    #[allow(dead_code)]
    password_hash: String,
}

#[derive(Debug, SurrealValue)]
struct PrincipalRowWithId {
    record_id: String,
    #[allow(dead_code)]
    email: String,
    password_hash: String,
}

#[derive(Debug, SurrealValue)]
struct TokenRow {
    principal_id: String,
}

/// Hash a password with Argon2id using OWASP-recommended parameters.
///
/// If a pepper is provided, it is prepended to the password before
/// hashing. The salt is randomly generated for each call.
fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, CustodiaError> {
    // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| CustodiaError::Internal(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| CustodiaError::Internal(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a password against an Argon2id hash.
fn verify_password(password: &str, hash: &str, pepper: Option<&str>) -> CustodiaResult<bool> {
    let peppered: String;
    let input = match pepper {
        Some(p) => {
            peppered = format!("{p}{password}");
            peppered.as_bytes()
        }
        None => password.as_bytes(),
    };

    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| CustodiaError::Internal(format!("invalid hash format: {e}")))?;

    let argon2 = Argon2::default();
    match argon2.verify_password(input, &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CustodiaError::Internal(format!("verify error: {e}"))),
    }
}

/// SurrealDB-backed identity provider.
#[derive(Clone)]
pub struct SurrealIdentityProvider<C: Connection> {
    db: Surreal<C>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<C: Connection> SurrealIdentityProvider<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db, pepper: None }
    }

    pub fn with_pepper(db: Surreal<C>, pepper: String) -> Self {
        Self {
            db,
            pepper: Some(pepper),
        }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Inherent rather than part of [`IdentityProvider`]: sign-in is the
    /// managed provider's concern, so only the stand-in exposes it.
    pub async fn sign_in(&self, email: &str, password: &str) -> CustodiaResult<String> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM principal \
                 WHERE email = $email",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PrincipalRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or(CustodiaError::Unauthenticated)?;

        if !verify_password(password, &row.password_hash, self.pepper.as_deref())? {
            return Err(CustodiaError::Unauthenticated);
        }

        let token = Uuid::new_v4().to_string();
        self.db
            .query(
                "CREATE principal_token SET token = $tok, \
                 principal_id = $principal_id",
            )
            .bind(("tok", token.clone()))
            .bind(("principal_id", row.record_id))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(token)
    }
}

impl<C: Connection> IdentityProvider for SurrealIdentityProvider<C> {
    async fn resolve(&self, ctx: &RequestContext) -> CustodiaResult<Option<Principal>> {
        let Some(token) = ctx.token.as_deref() else {
            return Ok(None);
        };

        let mut result = self
            .db
            .query("SELECT principal_id FROM principal_token WHERE token = $tok")
            .bind(("tok", token.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<TokenRow> = result.take(0).map_err(DbError::from)?;
        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        let principal_id = Uuid::parse_str(&row.principal_id)
            .map_err(|e| CustodiaError::Provider(format!("invalid principal UUID: {e}")))?;

        let mut result = self
            .db
            .query("SELECT * FROM type::record('principal', $id)")
            .bind(("id", row.principal_id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<PrincipalRow> = result.take(0).map_err(DbError::from)?;
        // Token without a live principal: treat as unauthenticated.
        Ok(rows.into_iter().next().map(|p| Principal {
            id: principal_id,
            email: p.email,
        }))
    }

    async fn create_principal(&self, email: &str, password: &str) -> CustodiaResult<Principal> {
        let id = Uuid::new_v4();
        let password_hash = hash_password(password, self.pepper.as_deref())?;

        let result = self
            .db
            .query(
                "CREATE type::record('principal', $id) SET \
                 email = $email, password_hash = $password_hash",
            )
            .bind(("id", id.to_string()))
            .bind(("email", email.to_string()))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        // Unique email index violation surfaces here.
        result.check().map_err(|_| CustodiaError::AlreadyExists {
            entity: "principal".into(),
        })?;

        Ok(Principal {
            id,
            email: email.to_string(),
        })
    }

    async fn delete_principal(&self, id: Uuid) -> CustodiaResult<()> {
        let id_str = id.to_string();

        self.db
            .query("DELETE type::record('principal', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        self.db
            .query("DELETE principal_token WHERE principal_id = $principal_id")
            .bind(("principal_id", id_str))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn sign_out(&self, ctx: &RequestContext) -> CustodiaResult<()> {
        let Some(token) = ctx.token.as_deref() else {
            return Ok(());
        };

        self.db
            .query("DELETE principal_token WHERE token = $tok")
            .bind(("tok", token.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }
}
