//! Resource records returned by the Freckle API.
//!
//! All records tolerate missing fields (they fall back to their defaults)
//! and ignore fields they don't know about.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A time entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Participant>,
    pub billable: bool,
    pub minutes: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoiced_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A project, including its invoices and participants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub billing_increment: u32,
    pub enabled: bool,
    pub billable: bool,
    pub color: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<ProjectGroup>,
    pub minutes: u32,
    pub billable_minutes: u32,
    pub unbillable_minutes: u32,
    pub invoiced_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<Import>,
    pub invoices: Vec<Invoice>,
    pub participants: Vec<Participant>,
    /// Number of entries logged against the project
    pub entries: u32,
    pub entries_url: String,
    pub expenses: u32,
    pub expenses_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Short form of a project, as embedded in an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
    pub billing_increment: u32,
    pub enabled: bool,
    pub billable: bool,
    pub color: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectGroup {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// A user taking part in a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_image_url: String,
    pub url: String,
}

/// An invoice.
///
/// Embedded invoices use `reference`/`total_amount` while the invoice
/// listing uses `number`/`total`; both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub id: u64,
    #[serde(alias = "number", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,
    pub state: String,
    #[serde(alias = "total", skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Import {
    pub id: u64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub billable: bool,
    pub url: String,
}

/// Error body sent with every status >= 400
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub message: String,
    pub errors: Vec<ErrorDetail>,
}

/// Field-level detail of an API error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub code: String,
    pub field: String,
    pub resource: String,
}
