use crate::error::Result;
use crate::page::Page;
use crate::params::{self, EntryInput, ListEntries};
use crate::rest::Transport;
use crate::types::Entry;
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Access to the Freckle v2 entries API.
///
/// More info at <http://developer.letsfreckle.com/v2/entries>
#[derive(Debug, Clone, Copy)]
pub struct EntriesApi<'a> {
    transport: &'a Arc<Transport>,
}

impl<'a> EntriesApi<'a> {
    pub(crate) fn new(transport: &'a Arc<Transport>) -> Self {
        EntriesApi { transport }
    }

    /// List entries matching the given filters
    pub fn list_entries(&self, params: &ListEntries) -> Result<Page<Entry>> {
        let response = self
            .transport
            .request::<()>(Method::GET, "/entries", &params.to_query()?, None)?;
        Page::from_response(&response, Arc::clone(self.transport))
    }

    pub fn get_entry(&self, id: u64) -> Result<Entry> {
        self.transport
            .apply::<_, ()>(Method::GET, &format!("/entries/{}", id), &[], None)
    }

    /// Log a new entry. `date` and `minutes` override the same fields in `input`.
    pub fn create_entry(&self, date: NaiveDate, minutes: u32, input: &EntryInput) -> Result<Entry> {
        let body = params::body(
            input,
            &input.extra,
            [("date", json!(date)), ("minutes", json!(minutes))],
        )?;
        self.transport
            .apply(Method::POST, "/entries", &[], Some(&body))
    }

    pub fn edit_entry(&self, id: u64, input: &EntryInput) -> Result<Entry> {
        let body = params::body(input, &input.extra, [])?;
        self.transport
            .apply(Method::PUT, &format!("/entries/{}", id), &[], Some(&body))
    }

    /// Mark one entry as invoiced outside of Freckle
    pub fn mark_as_invoiced(&self, date: NaiveDate, id: u64) -> Result<()> {
        self.transport.execute(
            Method::PUT,
            &format!("/entries/{}/invoiced_outside_of_freckle", id),
            Some(&json!({ "date": date })),
        )
    }

    /// Mark several entries as invoiced outside of Freckle
    pub fn mark_multiple_as_invoiced(&self, date: NaiveDate, ids: &[u64]) -> Result<()> {
        self.transport.execute(
            Method::PUT,
            "/entries/invoiced_outside_of_freckle",
            Some(&json!({ "date": date, "entry_ids": ids })),
        )
    }

    pub fn delete_entry(&self, id: u64) -> Result<()> {
        self.transport
            .execute::<()>(Method::DELETE, &format!("/entries/{}", id), None)
    }
}
