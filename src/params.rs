//! Typed parameters for list calls and inputs for create/edit calls.
//!
//! Every structure carries an `extra` map for fields the API accepts but
//! this crate doesn't name yet. Named fields take precedence over `extra`
//! entries with the same key.

use crate::error::{FreckleError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-form extension fields
pub type Extra = BTreeMap<String, Value>;

/// Filters for listing entries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListEntries {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoiced: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip)]
    pub extra: Extra,
}

impl ListEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    pub fn projects(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.projects = ids.into_iter().collect();
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Add a parameter not covered by the named fields
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_query(&self) -> Result<Vec<(String, String)>> {
        query_pairs(self, &self.extra)
    }
}

/// Filters for listing projects
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListProjects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_groups: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip)]
    pub extra: Extra,
}

impl ListProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Add a parameter not covered by the named fields
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_query(&self) -> Result<Vec<(String, String)>> {
        query_pairs(self, &self.extra)
    }
}

/// Fields for creating or editing an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Email address of the user the entry is logged for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// Project name; the API creates the project if it doesn't exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip)]
    pub extra: Extra,
}

impl EntryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn project_id(mut self, id: u64) -> Self {
        self.project_id = Some(id);
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn user(mut self, email: impl Into<String>) -> Self {
        self.user = Some(email.into());
        self
    }

    pub fn minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Add a field not covered by the named fields
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Fields for creating or editing a project
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_increment: Option<u32>,
    #[serde(skip)]
    pub extra: Extra,
}

impl ProjectInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn billable(mut self, billable: bool) -> Self {
        self.billable = Some(billable);
        self
    }

    /// Add a field not covered by the named fields
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Build a JSON request body: extension fields first, then the named
/// fields, then the positional `required` fields of the operation.
pub(crate) fn body<S: Serialize>(
    input: &S,
    extra: &Extra,
    required: impl IntoIterator<Item = (&'static str, Value)>,
) -> Result<Value> {
    let mut map: Map<String, Value> = extra.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    map.extend(object(input)?);
    for (key, value) in required {
        map.insert(key.to_string(), value);
    }
    Ok(Value::Object(map))
}

fn object<S: Serialize>(value: &S) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(FreckleError::RequestBuild(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

fn query_pairs<S: Serialize>(params: &S, extra: &Extra) -> Result<Vec<(String, String)>> {
    let mut merged: BTreeMap<String, Value> = extra.clone();
    merged.extend(object(params)?);

    let mut pairs = Vec::with_capacity(merged.len());
    for (key, value) in merged {
        if let Some(value) = query_value(value) {
            pairs.push((key, value));
        }
    }
    Ok(pairs)
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(query_value).collect();
            Some(parts.join(","))
        }
        other => Some(other.to_string()),
    }
}
