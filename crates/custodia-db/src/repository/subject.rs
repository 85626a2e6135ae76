//! SurrealDB implementation of [`SubjectRepository`].
//!
//! Anonymization overwrites personal fields in place and stamps
//! `anonymized_at`; records are never deleted, so aggregate statistics
//! survive GDPR erasure requests.

use chrono::{DateTime, Utc};
use custodia_core::error::CustodiaResult;
use custodia_core::models::subject::{CreateSubjectRecord, SubjectRecord};
use custodia_core::repository::SubjectRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

const ANONYMIZED_EMAIL: &str = "anonymized@example.com";

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct SubjectRow {
    email: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    details: serde_json::Value,
    created_at: DateTime<Utc>,
    anonymized_at: Option<DateTime<Utc>>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct SubjectRowWithId {
    record_id: String,
    email: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    details: serde_json::Value,
    created_at: DateTime<Utc>,
    anonymized_at: Option<DateTime<Utc>>,
}

impl SubjectRow {
    fn into_record(self, id: Uuid) -> SubjectRecord {
        SubjectRecord {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            details: self.details,
            created_at: self.created_at,
            anonymized_at: self.anonymized_at,
        }
    }
}

impl SubjectRowWithId {
    fn try_into_record(self) -> Result<SubjectRecord, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        Ok(SubjectRecord {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            details: self.details,
            created_at: self.created_at,
            anonymized_at: self.anonymized_at,
        })
    }
}

/// SurrealDB implementation of the data-subject store.
#[derive(Clone)]
pub struct SurrealSubjectRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealSubjectRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> SubjectRepository for SurrealSubjectRepository<C> {
    async fn create(&self, input: CreateSubjectRecord) -> CustodiaResult<SubjectRecord> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let details = input
            .details
            .unwrap_or(serde_json::Value::Object(Default::default()));

        let result = self
            .db
            .query(
                "CREATE type::record('subject_record', $id) SET \
                 email = $email, \
                 first_name = $first_name, \
                 last_name = $last_name, \
                 phone = $phone, \
                 details = $details, \
                 anonymized_at = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("first_name", input.first_name))
            .bind(("last_name", input.last_name))
            .bind(("phone", input.phone))
            .bind(("details", details))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<SubjectRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "subject_record".into(),
            id: id_str,
        })?;

        Ok(row.into_record(id))
    }

    async fn find_by_email(&self, email: &str) -> CustodiaResult<Vec<SubjectRecord>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM subject_record \
                 WHERE email = $email ORDER BY created_at ASC",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SubjectRowWithId> = result.take(0).map_err(DbError::from)?;

        let records = rows
            .into_iter()
            .map(|row| row.try_into_record())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(records)
    }

    async fn anonymize_by_email(&self, email: &str) -> CustodiaResult<u64> {
        let mut result = self
            .db
            .query(
                "UPDATE subject_record SET \
                 email = $anonymized_email, \
                 first_name = 'ANONYMIZED', \
                 last_name = 'USER', \
                 phone = NONE, \
                 anonymized_at = time::now() \
                 WHERE email = $email",
            )
            .bind(("anonymized_email", ANONYMIZED_EMAIL.to_string()))
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<SubjectRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.len() as u64)
    }
}
