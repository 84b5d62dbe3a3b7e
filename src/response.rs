use crate::error::Result;
use crate::link::Links;
use serde::de::DeserializeOwned;

/// Body and pagination metadata of a successful HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
    /// Value of the `Link` header, if any
    pub link: Option<String>,
}

impl RawResponse {
    /// Decode the body as JSON into the target type
    pub fn apply<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }

    /// Pagination relations announced by this response
    pub fn links(&self) -> Links {
        self.link.as_deref().map(Links::parse).unwrap_or_default()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
