//! Directory client configuration.

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DirectoryError, DirectoryResult};

/// Default Graph API version segment.
pub const DEFAULT_API_VERSION: &str = "v1.0";

/// National cloud hosting the Graph API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphCloud {
    /// Global commercial cloud.
    #[default]
    Commercial,
    /// US Government (GCC High / DoD).
    UsGovernment,
    /// China, operated by 21Vianet.
    China,
    /// Germany.
    Germany,
}

impl GraphCloud {
    /// Graph API root for this cloud, without a trailing slash.
    #[must_use]
    pub fn graph_endpoint(&self) -> &'static str {
        match self {
            Self::Commercial => "https://graph.microsoft.com",
            Self::UsGovernment => "https://graph.microsoft.us",
            Self::China => "https://microsoftgraph.chinacloudapi.cn",
            Self::Germany => "https://graph.microsoft.de",
        }
    }
}

/// Static bearer token attached to every request.
///
/// The token is never refreshed and never shows up in `Debug` output.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Returns true if the token is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Immutable settings for one directory client.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    base_url: Url,
    token: AccessToken,
    timeout: Option<Duration>,
}

impl DirectoryConfig {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> DirectoryConfigBuilder {
        DirectoryConfigBuilder::default()
    }

    /// Versioned API root, e.g. `https://graph.microsoft.com/v1.0`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Bearer token.
    #[must_use]
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Per-request timeout; `None` leaves the transport default in place.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Builder for [`DirectoryConfig`].
#[derive(Debug, Default)]
pub struct DirectoryConfigBuilder {
    cloud: GraphCloud,
    graph_url: Option<String>,
    api_version: Option<String>,
    token: Option<AccessToken>,
    timeout: Option<Duration>,
}

impl DirectoryConfigBuilder {
    /// Selects the national cloud. Ignored when [`Self::graph_url`] is set.
    #[must_use]
    pub fn cloud(mut self, cloud: GraphCloud) -> Self {
        self.cloud = cloud;
        self
    }

    /// Overrides the Graph root, e.g. a mock server or proxy.
    #[must_use]
    pub fn graph_url(mut self, url: impl Into<String>) -> Self {
        self.graph_url = Some(url.into());
        self
    }

    /// Sets the API version segment (default `v1.0`).
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn token(mut self, token: impl Into<AccessToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or blank, or the resulting
    /// base URL is not an absolute http(s) URL.
    pub fn build(self) -> DirectoryResult<DirectoryConfig> {
        let token = self
            .token
            .ok_or_else(|| DirectoryError::Config("access token is required".into()))?;
        if token.is_blank() {
            return Err(DirectoryError::Config("access token is empty".into()));
        }

        let root = self
            .graph_url
            .as_deref()
            .unwrap_or_else(|| self.cloud.graph_endpoint())
            .trim_end_matches('/');
        let version = self
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION)
            .trim_matches('/');

        let joined = if version.is_empty() {
            root.to_string()
        } else {
            format!("{root}/{version}")
        };
        let base_url = Url::parse(&joined)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(DirectoryError::Config(format!(
                "unsupported URL scheme: {}",
                base_url.scheme()
            )));
        }

        Ok(DirectoryConfig {
            base_url,
            token,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_commercial_v1() {
        let config = DirectoryConfig::builder().token("t").build().unwrap();
        assert_eq!(config.base_url(), "https://graph.microsoft.com/v1.0");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_cloud_selection() {
        let config = DirectoryConfig::builder()
            .cloud(GraphCloud::China)
            .api_version("beta")
            .token("t")
            .build()
            .unwrap();
        assert_eq!(
            config.base_url(),
            "https://microsoftgraph.chinacloudapi.cn/beta"
        );
    }

    #[test]
    fn test_graph_url_overrides_cloud() {
        let config = DirectoryConfig::builder()
            .cloud(GraphCloud::Germany)
            .graph_url("http://127.0.0.1:8080/")
            .token("t")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/v1.0");
    }

    #[test]
    fn test_missing_token_rejected() {
        let err = DirectoryConfig::builder().build().unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn test_blank_token_rejected() {
        let err = DirectoryConfig::builder().token("   ").build().unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = DirectoryConfig::builder()
            .graph_url("not a url")
            .token("t")
            .build()
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Url(_)));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = DirectoryConfig::builder()
            .graph_url("ftp://example.com")
            .token("t")
            .build()
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AccessToken::new("super-secret");
        assert!(!format!("{token:?}").contains("super-secret"));
    }

    #[test]
    fn test_cloud_endpoints_have_no_trailing_slash() {
        for cloud in [
            GraphCloud::Commercial,
            GraphCloud::UsGovernment,
            GraphCloud::China,
            GraphCloud::Germany,
        ] {
            let endpoint = cloud.graph_endpoint();
            assert!(endpoint.starts_with("https://"));
            assert!(!endpoint.ends_with('/'));
        }
    }
}
