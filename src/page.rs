//! One page of a paginated listing.

use crate::error::{FreckleError, Result};
use crate::link::{Links, Relation};
use crate::response::RawResponse;
use crate::rest::Transport;
use crate::traversal::AllItems;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// A batch of items plus the links to its neighbouring pages.
///
/// Pages are immutable: navigating returns a new page and leaves this one
/// untouched, so a page can be kept around and navigated from again.
pub struct Page<T> {
    pub(crate) items: Vec<T>,
    links: Links,
    transport: Arc<Transport>,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, links: Links, transport: Arc<Transport>) -> Self {
        Page {
            items,
            links,
            transport,
        }
    }

    /// Items on this page, in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Relations announced by the response that produced this page
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Is there a page in the given direction?
    pub fn has(&self, rel: Relation) -> bool {
        self.links.contains(rel)
    }

    pub fn has_next(&self) -> bool {
        self.has(Relation::Next)
    }

    pub fn has_previous(&self) -> bool {
        self.has(Relation::Prev)
    }

    pub fn has_first(&self) -> bool {
        self.has(Relation::First)
    }

    pub fn has_last(&self) -> bool {
        self.has(Relation::Last)
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Build a page from a list response: the body is a JSON array of items,
    /// the relations come from the same response's `Link` header.
    pub(crate) fn from_response(response: &RawResponse, transport: Arc<Transport>) -> Result<Self> {
        let items: Vec<T> = response.apply()?;
        Ok(Page::new(items, response.links(), transport))
    }

    /// Fetch the page in the given direction.
    ///
    /// Fails with [`FreckleError::NoSuchPage`] without touching the network
    /// when the relation is absent.
    pub fn fetch(&self, rel: Relation) -> Result<Page<T>> {
        let url = self.links.get(rel).ok_or(FreckleError::NoSuchPage(rel))?;
        let response = self.transport.get_url(url)?;
        Page::from_response(&response, Arc::clone(&self.transport))
    }

    pub fn next(&self) -> Result<Page<T>> {
        self.fetch(Relation::Next)
    }

    pub fn previous(&self) -> Result<Page<T>> {
        self.fetch(Relation::Prev)
    }

    pub fn first(&self) -> Result<Page<T>> {
        self.fetch(Relation::First)
    }

    pub fn last(&self) -> Result<Page<T>> {
        self.fetch(Relation::Last)
    }
}

impl<T> Page<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Iterate over every item on this page and all following pages.
    ///
    /// The next page is only requested once every item of the current one
    /// has been handed out. See [`AllItems`] for error handling.
    pub fn into_all_items(self) -> AllItems<T> {
        AllItems::new(self)
    }

    /// Like [`Page::into_all_items`], starting from a copy of this page
    pub fn all_items(&self) -> AllItems<T>
    where
        T: Clone,
    {
        AllItems::new(self.clone())
    }
}

impl<T: Clone> Clone for Page<T> {
    fn clone(&self) -> Self {
        Page {
            items: self.items.clone(),
            links: self.links.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Page<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("items", &self.items)
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}
