//! Microsoft Graph API HTTP client.
//!
//! One request at a time, no retry: callers decide what each status means.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{DirectoryConfig, DirectoryError, DirectoryResult};

/// `OData` error response from Microsoft Graph.
#[derive(Debug, Deserialize)]
pub struct ODataError {
    pub error: ODataErrorBody,
}

/// `OData` error body.
#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    pub code: String,
    pub message: String,
}

/// Collection response wrapper. Only the first page is ever read.
#[derive(Debug, Deserialize)]
pub struct ODataResponse<T> {
    pub value: Vec<T>,
}

/// Microsoft Graph API client.
#[derive(Debug)]
pub struct GraphClient {
    http_client: reqwest::Client,
    config: DirectoryConfig,
}

impl GraphClient {
    /// Creates a new Graph client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: DirectoryConfig) -> DirectoryResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| DirectoryError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the versioned base URL for Graph API requests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Builds an absolute URL from a path relative to the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Sends a request with the bearer token and JSON content type.
    ///
    /// Returns the response whatever its status.
    #[instrument(skip(self, body))]
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> DirectoryResult<Response> {
        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(self.config.token().expose())
            .header(CONTENT_TYPE, "application/json");

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        debug!(status = response.status().as_u16(), "Graph response");
        Ok(response)
    }

    /// Performs a GET against a collection endpoint and decodes `value[]`.
    ///
    /// # Errors
    ///
    /// Any status other than 200 becomes [`DirectoryError::Api`].
    pub async fn get_collection<T: DeserializeOwned>(&self, url: &str) -> DirectoryResult<Vec<T>> {
        let response = self.send(Method::GET, url, None::<&()>).await?;
        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        let page: ODataResponse<T> = serde_json::from_str(&body)?;
        Ok(page.value)
    }
}

/// Converts an unexpected response into [`DirectoryError::Api`], decoding the
/// `OData` error envelope when the body carries one.
pub async fn api_error(response: Response) -> DirectoryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ODataError>(&body) {
        Ok(odata) => DirectoryError::Api {
            status,
            code: Some(odata.error.code),
            message: Some(odata.error.message),
            body,
        },
        Err(_) => DirectoryError::Api {
            status,
            code: None,
            message: None,
            body,
        },
    }
}
