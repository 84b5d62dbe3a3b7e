use crate::entries::EntriesApi;
use crate::error::{FreckleError, Result};
use crate::projects::ProjectsApi;
use crate::rest::Transport;
use reqwest::blocking::{Client, ClientBuilder};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Base URL of the Freckle v2 API
pub const DEFAULT_BASE_URL: &str = "https://api.letsfreckle.com/v2";

/// Create the HTTP client used for API requests
pub fn create_http_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(config.timeout)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| FreckleError::RequestBuild(format!("failed to create HTTP client: {}", e)))
}

/// Configuration for the Freckle client
#[derive(Clone)]
pub struct Config {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Account subdomain, sent as the `User-Agent`
    pub subdomain: String,
    /// Personal access token, sent as `X-FreckleToken`
    pub token: String,
    /// Log requests and responses
    pub debug: bool,
    /// Overall request timeout
    pub timeout: Duration,
}

impl Config {
    pub fn new(subdomain: impl Into<String>, token: impl Into<String>) -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            subdomain: subdomain.into(),
            token: token.into(),
            debug: false,
            timeout: Duration::from_secs(300),
        }
    }

    /// Point the client at another server (a proxy or a test double)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("subdomain", &self.subdomain)
            .field("token", &"<redacted>")
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Entry point to the Freckle API.
///
/// ```no_run
/// use freckle::{Freckle, ListProjects};
///
/// let freckle = Freckle::new("mycompany", "MyFreckleAPIV2Token")?;
/// let page = freckle.projects().list_projects(&ListProjects::new())?;
/// for project in page.all_items() {
///     println!("{}", project.name);
/// }
/// # Ok::<(), freckle::FreckleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Freckle {
    transport: Arc<Transport>,
}

impl Freckle {
    /// Create a client for the given account subdomain and API token
    pub fn new(subdomain: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(subdomain, token))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let client = create_http_client(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Use a preconfigured HTTP client (e.g. one going through a proxy)
    pub fn with_client(config: Config, client: Client) -> Self {
        Freckle {
            transport: Arc::new(Transport::new(client, config)),
        }
    }

    pub fn config(&self) -> &Config {
        self.transport.config()
    }

    /// Access the entries API
    pub fn entries(&self) -> EntriesApi<'_> {
        EntriesApi::new(&self.transport)
    }

    /// Access the projects API
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(&self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("mydomain", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.subdomain, "mydomain");
        assert!(!config.debug);
        assert_eq!(config.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new("mydomain", "secret")
            .with_base_url("http://localhost:8080/")
            .with_debug(true)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = Config::new("mydomain", "abcdefghijklmnopqrstuvwxyz");
        let output = format!("{:?}", config);
        assert!(!output.contains("abcdefghijklmnopqrstuvwxyz"));
        assert!(output.contains("mydomain"));
    }
}
