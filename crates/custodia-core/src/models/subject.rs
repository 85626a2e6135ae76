//! Data-subject records for GDPR compliance flows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored record about a data subject (e.g. an enquiry submission),
/// keyed by email for export and anonymization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    /// Submission payload; shape varies per record source.
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
    /// Set when the record has been anonymized.
    pub anonymized_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubjectRecord {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub details: Option<serde_json::Value>,
}

/// Structured bundle returned by a GDPR data export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectDataExport {
    pub email: String,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<SubjectRecord>,
}
