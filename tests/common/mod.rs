#![allow(dead_code)]

use freckle::{Config, Freckle};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request, Respond, ResponseTemplate};

pub const DOMAIN: &str = "mydomain";
pub const TOKEN: &str = "abcdefghijklmnopqrstuvwxyz";

/// A mock API server driven from synchronous tests.
///
/// The blocking client must not run inside an async context, so the server
/// lives on a runtime owned by the test and requests are made from the
/// test thread.
pub struct TestServer {
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("failed to start tokio runtime");
        let server = runtime.block_on(MockServer::start());
        TestServer { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// A client pointed at this server, with debug logging on
    pub fn freckle(&self) -> Freckle {
        let config = Config::new(DOMAIN, TOKEN)
            .with_base_url(self.uri())
            .with_debug(true);
        Freckle::with_config(config).expect("failed to build client")
    }

    pub fn received_requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

/// Expect a request with the given method and path, carrying both auth headers
pub fn authenticated(http_method: &str, url_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(url_path))
        .and(header("User-Agent", DOMAIN))
        .and(header("X-FreckleToken", TOKEN))
}

pub fn response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

pub fn no_content() -> ResponseTemplate {
    ResponseTemplate::new(204)
}

/// Serves a chain of pages, page `n` holding `items[n - 1]` projects and a
/// `next` link while there are pages left. Every request is counted.
pub struct PagedProjects {
    pub base: String,
    pub items: Vec<usize>,
    pub calls: Arc<AtomicUsize>,
    pub fail_on: Option<usize>,
}

impl PagedProjects {
    pub fn new(base: String, items: Vec<usize>) -> Self {
        PagedProjects {
            base,
            items,
            calls: Arc::new(AtomicUsize::new(0)),
            fail_on: None,
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

/// Id of item `index` on page `page`
pub fn project_id(page: usize, index: usize) -> u64 {
    (page * 100 + index) as u64
}

impl Respond for PagedProjects {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let page: usize = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(1);

        if self.fail_on == Some(page) {
            return ResponseTemplate::new(500).set_body_json(json!({
                "message": "Internal Server Error",
                "errors": []
            }));
        }

        let count = self.items.get(page - 1).copied().unwrap_or(0);
        let projects: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "id": project_id(page, i),
                    "name": format!("Project {}.{}", page, i),
                    "enabled": true
                })
            })
            .collect();

        let mut template = ResponseTemplate::new(200).set_body_json(projects);
        if page < self.items.len() {
            template = template.insert_header(
                "Link",
                format!(
                    "<{}{}?page={}>; rel=\"next\"",
                    self.base,
                    request.url.path(),
                    page + 1
                )
                .as_str(),
            );
        }
        template
    }
}

pub const ARRAY_OF_PROJECTS: &str = r##"[
  {
    "id": 37396,
    "name": "Gear GmbH",
    "billing_increment": 10,
    "enabled": true,
    "billable": true,
    "color": "#ff9898",
    "url": "https://api.letsfreckle.com/v2/projects/34580",
    "group": {
      "id": 3768,
      "name": "Sprockets, Inc.",
      "url": "https://api.letsfreckle.com/v2/project_groups/3768"
    },
    "minutes": 180,
    "billable_minutes": 120,
    "unbillable_minutes": 60,
    "invoiced_minutes": 120,
    "remaining_minutes": 630,
    "budget_minutes": 750,
    "import": {
      "id": 8910,
      "url": "https://api.letsfreckle.com/v2/imports/8910"
    },
    "invoices": [
      {
        "id": 12345678,
        "reference": "AA001",
        "invoice_date": "2013-07-09",
        "state": "unpaid",
        "total_amount": 189.33,
        "url": "https://api.letsfreckle.com/v2/invoices/12345678"
      }
    ],
    "participants": [
      {
        "id": 5538,
        "email": "john.test@test.com",
        "first_name": "John",
        "last_name": "Test",
        "profile_image_url": "https://api.letsfreckle.com/images/avatars/0000/0001/avatar.jpg",
        "url": "https://api.letsfreckle.com/v2/users/5538"
      }
    ],
    "entries": 0,
    "entries_url": "https://api.letsfreckle.com/v2/projects/34580/entries",
    "expenses": 0,
    "expenses_url": "https://api.letsfreckle.com/v2/projects/34580/expenses",
    "created_at": "2012-01-09T08:33:29Z",
    "updated_at": "2012-01-09T08:33:29Z"
  }
]"##;

pub const SINGLE_PROJECT: &str = r##"{
  "id": 37396,
  "name": "Gear GmbH",
  "billing_increment": 10,
  "enabled": true,
  "billable": true,
  "color": "#ff9898",
  "url": "https://api.letsfreckle.com/v2/projects/34580",
  "group": {
    "id": 3768,
    "name": "Sprockets, Inc.",
    "url": "https://api.letsfreckle.com/v2/project_groups/3768"
  },
  "minutes": 180,
  "billable_minutes": 120,
  "unbillable_minutes": 60,
  "invoiced_minutes": 120,
  "remaining_minutes": 630,
  "budget_minutes": 750,
  "invoices": [],
  "participants": [],
  "entries": 0,
  "entries_url": "https://api.letsfreckle.com/v2/projects/34580/entries",
  "expenses": 0,
  "expenses_url": "https://api.letsfreckle.com/v2/projects/34580/expenses",
  "created_at": "2012-01-09T08:33:29Z",
  "updated_at": "2012-01-09T08:33:29Z"
}"##;

pub const ARRAY_OF_ENTRIES: &str = r##"[
  {
    "id": 1,
    "date": "2012-01-09",
    "user": {
      "id": 5538,
      "email": "john.test@test.com",
      "first_name": "John",
      "last_name": "Test",
      "profile_image_url": "https://api.letsfreckle.com/images/avatars/0000/0001/avatar.jpg",
      "url": "https://api.letsfreckle.com/v2/users/5538"
    },
    "billable": true,
    "minutes": 60,
    "description": "freckle",
    "project": {
      "id": 37396,
      "name": "Gear GmbH",
      "billing_increment": 10,
      "enabled": true,
      "billable": true,
      "color": "#ff9898",
      "url": "https://api.letsfreckle.com/v2/projects/37396"
    },
    "tags": [
      {
        "id": 249397,
        "name": "freckle",
        "billable": true,
        "url": "https://api.letsfreckle.com/v2/tags/249397"
      }
    ],
    "source_url": "http://someapp.com/special/url/",
    "invoiced_at": "2012-01-10T08:33:29Z",
    "invoice": {
      "id": 12345678,
      "number": "AA001",
      "state": "unpaid",
      "total": 189.33,
      "url": "https://api.letsfreckle.com/v2/invoices/12345678"
    },
    "import": {
      "id": 8910,
      "url": "https://api.letsfreckle.com/v2/imports/8910"
    },
    "url": "https://api.letsfreckle.com/v2/entries/1711626",
    "created_at": "2012-01-09T08:33:29Z",
    "updated_at": "2012-01-09T08:33:29Z"
  }
]"##;

pub const SINGLE_ENTRY: &str = r##"{
  "id": 1,
  "date": "2012-01-09",
  "billable": true,
  "minutes": 60,
  "description": "freckle",
  "project": {
    "id": 37396,
    "name": "Gear GmbH",
    "url": "https://api.letsfreckle.com/v2/projects/37396"
  },
  "tags": [],
  "url": "https://api.letsfreckle.com/v2/entries/1711626",
  "created_at": "2012-01-09T08:33:29Z",
  "updated_at": "2012-01-09T08:33:29Z"
}"##;

pub const INVOICES_FOR_PROJECT: &str = r##"[
  {
    "id": 26642,
    "state": "awaiting_payment",
    "number": "AB 0001",
    "invoice_date": "2013-07-09",
    "name": "Knockd, Freckle Support",
    "show_hours": true,
    "taxes": [{"id": 88292, "name": "Sales Tax", "percentage": 15.0}],
    "amount_total": 1,
    "payment": null,
    "entries_url": "https://api.letsfreckle.com/v2/invoices/26642/entries",
    "created_at": "2013-07-09T23:04:05Z",
    "updated_at": "2013-07-09T23:04:06Z",
    "total": null
  }
]"##;

pub const PARTICIPANTS_FOR_PROJECT: &str = r##"[
  {
    "id": 5538,
    "email": "john.test@test.com",
    "first_name": "John",
    "last_name": "Test",
    "profile_image_url": "https://api.letsfreckle.com/images/avatars/0000/0001/avatar.jpg",
    "url": "https://api.letsfreckle.com/v2/users/5538",
    "state": "active",
    "role": "member",
    "created_at": "2010-06-09T20:44:57Z",
    "updated_at": "2010-06-09T20:44:57Z"
  }
]"##;

pub const INVALID_BILLING_CODE: &str = r##"{
  "errors": [{"code": "not_an_accepted_value", "field": "billable", "resource": "Project"}],
  "message": "Validation Failed"
}"##;
