//! # freckle - Client for the Freckle v2 API
//!
//! A typed Rust client for the [Freckle](http://developer.letsfreckle.com/v2/)
//! time-tracking and invoicing API.
//!
//! ## Features
//!
//! - Entries and projects APIs, including project invoices and participants
//! - Typed list filters and create/edit inputs, with an `extra` slot for
//!   fields not covered yet
//! - Link-header pagination: navigate pages with `next`/`previous`/
//!   `first`/`last`, or walk every item with [`Page::all_items`]
//! - Structured API errors carrying the message and field-level details
//!
//! ## Basic Usage
//!
//! ```no_run
//! use freckle::{EntryInput, Freckle, ListEntries};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), freckle::FreckleError> {
//!     let freckle = Freckle::new("mycompany", "MyFreckleAPIV2Token")?;
//!
//!     // List the entries of November 2014
//!     let params = ListEntries::new()
//!         .from_date(NaiveDate::from_ymd_opt(2014, 11, 1).unwrap())
//!         .to_date(NaiveDate::from_ymd_opt(2014, 11, 30).unwrap());
//!     let mut page = freckle.entries().list_entries(&params)?;
//!     loop {
//!         for entry in page.items() {
//!             println!("{}: {} minutes", entry.description, entry.minutes);
//!         }
//!         if !page.has_next() {
//!             break;
//!         }
//!         page = page.next()?;
//!     }
//!
//!     // Log an hour of work
//!     let input = EntryInput::new()
//!         .description("My neat #development issue")
//!         .project_name("Customer Project");
//!     freckle
//!         .entries()
//!         .create_entry(NaiveDate::from_ymd_opt(2014, 12, 22).unwrap(), 60, &input)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Debug logging
//!
//! With [`Config::with_debug`] enabled, requests and responses are logged
//! through [`tracing`] at debug level.

pub mod client;
pub mod entries;
pub mod error;
pub mod link;
pub mod page;
pub mod params;
pub mod projects;
pub mod response;
pub mod rest;
pub mod traversal;
pub mod types;

// Re-export main types for convenience
pub use client::{Config, Freckle, DEFAULT_BASE_URL};
pub use entries::EntriesApi;
pub use error::{FreckleError, Result};
pub use link::{Links, Relation};
pub use page::Page;
pub use params::{EntryInput, ListEntries, ListProjects, ProjectInput};
pub use projects::ProjectsApi;
pub use response::RawResponse;
pub use rest::Transport;
pub use traversal::AllItems;
pub use types::{
    ApiErrorBody, Entry, ErrorDetail, Import, Invoice, Participant, Project, ProjectGroup,
    ProjectSummary, Tag,
};
