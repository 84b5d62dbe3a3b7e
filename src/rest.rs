use crate::client::Config;
use crate::error::{FreckleError, Result};
use crate::response::RawResponse;
use crate::types::ApiErrorBody;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_TYPE, LINK, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Header carrying the API token
pub const TOKEN_HEADER: &str = "X-FreckleToken";

/// Performs authenticated calls against the API.
///
/// A transport is read-only once built and is shared behind an `Arc` by the
/// client and every page it hands out.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    config: Config,
}

impl Transport {
    pub fn new(client: Client, config: Config) -> Self {
        Transport { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve an API path and query parameters into a full URL
    pub fn url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Make an API request and decode the response body into the target type
    pub fn apply<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, query, body)?.apply()
    }

    /// Make an API request whose response body is not needed
    pub fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, &[], body).map(|_| ())
    }

    /// Make an API request and return the raw response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL, e.g. `/entries`
    /// * `query` - Query parameters
    /// * `body` - Optional value sent as a JSON body
    pub fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        let mut request = self.client.request(method.clone(), url.clone());

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)?;
            if self.config.debug {
                debug!("    {}", String::from_utf8_lossy(&bytes));
            }
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        self.send(request, &method, &url)
    }

    /// GET an already complete URL, such as a pagination link
    pub fn get_url(&self, url: &str) -> Result<RawResponse> {
        let url = Url::parse(url)?;
        let request = self.client.get(url.clone());
        self.send(request, &Method::GET, &url)
    }

    fn send(&self, request: RequestBuilder, method: &Method, url: &Url) -> Result<RawResponse> {
        if self.config.debug {
            debug!("Request: HTTP {} {}", method, url);
        }

        let response = request
            .header(USER_AGENT, self.config.subdomain.as_str())
            .header(TOKEN_HEADER, self.config.token.as_str())
            .send()?;

        let status = response.status();
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if self.config.debug {
            debug!("Response: HTTP {}", status);
            for (key, value) in response.headers() {
                debug!("   {}: {:?}", key, value);
            }
        }

        let body = response.bytes()?.to_vec();

        if self.config.debug {
            debug!("   {}", String::from_utf8_lossy(&body));
        }

        if status.is_client_error() || status.is_server_error() {
            let error: ApiErrorBody = serde_json::from_slice(&body)?;
            return Err(FreckleError::api(status.as_u16(), error));
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
            link,
        })
    }
}
