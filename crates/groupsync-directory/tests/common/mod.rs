//! Common test utilities for groupsync-directory integration tests.

#![allow(dead_code)]

use groupsync_directory::{DirectoryConfig, GraphDirectory};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "mock-access-token";

/// Test data factory for creating directory users.
pub fn create_test_user(id: &str, mail: &str) -> Value {
    json!({
        "id": id,
        "displayName": format!("Test User {id}"),
        "mail": mail,
        "jobTitle": "Test Engineer"
    })
}

/// Test data factory for users with only an id and mail.
pub fn create_minimal_user(id: &str, mail: &str) -> Value {
    json!({
        "id": id,
        "mail": mail
    })
}

/// Test data factory for creating groups.
pub fn create_test_group(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "displayName": name
    })
}

/// Wraps items in an `OData` collection.
pub fn create_odata_response(items: Vec<Value>) -> Value {
    json!({ "value": items })
}

/// Creates an `OData` error response.
pub fn create_odata_error(code: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Initializes test logging once; `RUST_LOG` controls the level.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Mock server wrapper with common Graph endpoints.
pub struct MockGraphServer {
    pub server: MockServer,
}

impl MockGraphServer {
    pub async fn new() -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Versioned API root as seen by the client.
    pub fn base_url(&self) -> String {
        format!("{}/v1.0", self.url())
    }

    /// Builds a Graph directory pointed at this server.
    pub fn directory(&self) -> GraphDirectory {
        let config = DirectoryConfig::builder()
            .graph_url(self.url())
            .token(TEST_TOKEN)
            .build()
            .unwrap();
        GraphDirectory::new(config).unwrap()
    }

    /// Group lookup by display name answering with `groups`.
    pub async fn mock_group_lookup(&self, name: &str, groups: Vec<Value>, expect: u64) {
        Mock::given(method("GET"))
            .and(path("/v1.0/groups"))
            .and(query_param("$filter", format!("displayName eq '{name}'")))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_odata_response(groups)))
            .expect(expect)
            .mount(&self.server)
            .await;
    }

    /// User lookup by mail answering with `users`.
    pub async fn mock_user_lookup(&self, mail: &str, users: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/v1.0/users"))
            .and(query_param("$filter", format!("mail eq '{mail}'")))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_odata_response(users)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Any `/users` request; used to assert no user lookups happen.
    pub async fn mock_any_user_lookup(&self, expect: u64) {
        Mock::given(method("GET"))
            .and(path("/v1.0/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(create_odata_response(vec![])))
            .expect(expect)
            .mount(&self.server)
            .await;
    }

    /// Membership `$ref` check answering with `status`.
    pub async fn mock_membership(&self, group_id: &str, user_id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/v1.0/groups/{group_id}/members/{user_id}/$ref")))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Member add answering with `status`, expected `expect` times.
    pub async fn mock_add_member(&self, group_id: &str, user_id: &str, status: u16, expect: u64) {
        let body = json!({
            "@odata.id": format!("{}/directoryObjects/{user_id}", self.base_url())
        });
        Mock::given(method("POST"))
            .and(path(format!("/v1.0/groups/{group_id}/members/$ref")))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(body_json(body))
            .respond_with(ResponseTemplate::new(status))
            .expect(expect)
            .mount(&self.server)
            .await;
    }

    /// Any member add for `group_id`; used to assert no adds happen.
    pub async fn mock_any_add_member(&self, group_id: &str, expect: u64) {
        Mock::given(method("POST"))
            .and(path(format!("/v1.0/groups/{group_id}/members/$ref")))
            .respond_with(ResponseTemplate::new(204))
            .expect(expect)
            .mount(&self.server)
            .await;
    }
}
