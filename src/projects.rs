use crate::error::Result;
use crate::page::Page;
use crate::params::{self, ListEntries, ListProjects, ProjectInput};
use crate::rest::Transport;
use crate::types::{Entry, Invoice, Participant, Project};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Access to the Freckle v2 projects API.
///
/// More info at <http://developer.letsfreckle.com/v2/projects>
#[derive(Debug, Clone, Copy)]
pub struct ProjectsApi<'a> {
    transport: &'a Arc<Transport>,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(transport: &'a Arc<Transport>) -> Self {
        ProjectsApi { transport }
    }

    fn page<T>(&self, path: &str, query: &[(String, String)]) -> Result<Page<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.transport.request::<()>(Method::GET, path, query, None)?;
        Page::from_response(&response, Arc::clone(self.transport))
    }

    /// List projects matching the given filters
    pub fn list_projects(&self, params: &ListProjects) -> Result<Page<Project>> {
        self.page("/projects", &params.to_query()?)
    }

    pub fn get_project(&self, id: u64) -> Result<Project> {
        self.transport
            .apply::<_, ()>(Method::GET, &format!("/projects/{}", id), &[], None)
    }

    /// Create a project. `name` overrides the same field in `input`.
    pub fn create_project(&self, name: &str, input: &ProjectInput) -> Result<Project> {
        let body = params::body(input, &input.extra, [("name", json!(name))])?;
        self.transport
            .apply(Method::POST, "/projects", &[], Some(&body))
    }

    pub fn edit_project(&self, id: u64, input: &ProjectInput) -> Result<Project> {
        let body = params::body(input, &input.extra, [])?;
        self.transport
            .apply(Method::PUT, &format!("/projects/{}", id), &[], Some(&body))
    }

    /// List the entries logged against a project
    pub fn list_entries(&self, id: u64, params: &ListEntries) -> Result<Page<Entry>> {
        self.page(&format!("/projects/{}/entries", id), &params.to_query()?)
    }

    pub fn invoices(&self, id: u64) -> Result<Vec<Invoice>> {
        self.transport
            .apply::<_, ()>(Method::GET, &format!("/projects/{}/invoices", id), &[], None)
    }

    pub fn participants(&self, id: u64) -> Result<Vec<Participant>> {
        self.transport.apply::<_, ()>(
            Method::GET,
            &format!("/projects/{}/participants", id),
            &[],
            None,
        )
    }

    /// Merge `to_merge` into `target`; `to_merge` is deleted afterwards
    pub fn merge_project(&self, target: u64, to_merge: u64) -> Result<()> {
        self.transport.execute(
            Method::PUT,
            &format!("/projects/{}/merge", target),
            Some(&json!({ "project_id": to_merge })),
        )
    }

    pub fn delete_project(&self, id: u64) -> Result<()> {
        self.transport
            .execute::<()>(Method::DELETE, &format!("/projects/{}", id), None)
    }

    pub fn archive_project(&self, id: u64) -> Result<()> {
        self.transport
            .execute::<()>(Method::PUT, &format!("/projects/{}/archive", id), None)
    }

    pub fn unarchive_project(&self, id: u64) -> Result<()> {
        self.transport
            .execute::<()>(Method::PUT, &format!("/projects/{}/unarchive", id), None)
    }

    pub fn archive_projects(&self, ids: &[u64]) -> Result<()> {
        self.bulk("/projects/archive", ids)
    }

    pub fn unarchive_projects(&self, ids: &[u64]) -> Result<()> {
        self.bulk("/projects/unarchive", ids)
    }

    pub fn delete_projects(&self, ids: &[u64]) -> Result<()> {
        self.bulk("/projects/delete", ids)
    }

    fn bulk(&self, path: &str, ids: &[u64]) -> Result<()> {
        self.transport
            .execute(Method::PUT, path, Some(&json!({ "project_ids": ids })))
    }
}
