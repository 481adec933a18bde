//! Error types for the directory client.

use thiserror::Error;

/// Result type alias using `DirectoryError`.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur when talking to the directory API.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A 200 response whose entries lack a required field.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The API answered with a status the operation does not expect.
    ///
    /// `code` and `message` come from the `OData` error envelope when the body
    /// carries one; `body` is always the raw response text.
    #[error("Graph API error ({status}): {}", api_detail(.message, .body))]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
        body: String,
    },
}

fn api_detail<'a>(message: &'a Option<String>, body: &'a str) -> &'a str {
    message.as_deref().unwrap_or(body)
}

impl DirectoryError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
