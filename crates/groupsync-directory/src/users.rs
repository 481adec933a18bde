//! User lookup by mail address.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{DirectoryError, DirectoryResult, GraphDirectory, Lookup};

/// Placeholder for attributes the directory does not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// User fields to select from Graph API.
const USER_SELECT_FIELDS: &str = "id,displayName,mail,jobTitle";

/// User resolved from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryUser {
    /// Directory object ID.
    pub id: String,
    /// Display name, `N/A` when absent.
    pub display_name: String,
    /// Primary mail address, `N/A` when absent.
    pub mail: String,
    /// Job title, `N/A` when absent.
    pub job_title: String,
}

impl DirectoryUser {
    /// Parses a user from the Graph API JSON response.
    ///
    /// Graph sends `null` for unset attributes, which is treated like a
    /// missing key.
    pub fn from_json(value: &serde_json::Value) -> DirectoryResult<Self> {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or(NOT_AVAILABLE)
                .to_string()
        };

        Ok(Self {
            id: value
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| DirectoryError::MalformedResponse("Missing user id".into()))?
                .to_string(),
            display_name: text("displayName"),
            mail: text("mail"),
            job_title: text("jobTitle"),
        })
    }
}

impl GraphDirectory {
    pub(crate) fn user_query_url(&self, email: &str) -> String {
        let filter = format!("mail eq '{email}'");
        format!(
            "{}?$filter={}&$select={}",
            self.graph_client().url("users"),
            urlencoding::encode(&filter),
            USER_SELECT_FIELDS
        )
    }

    /// Resolves a user by exact mail match. The first match wins.
    #[instrument(skip(self))]
    pub async fn find_user_by_mail(&self, email: &str) -> DirectoryResult<Lookup<DirectoryUser>> {
        let url = self.user_query_url(email);

        let page: Vec<serde_json::Value> = match self.graph_client().get_collection(&url).await {
            Ok(page) => page,
            Err(e) => {
                debug!("Failed to fetch user details for {}: {}", email, e);
                return Err(e);
            }
        };

        match page.first() {
            Some(value) => {
                let user = DirectoryUser::from_json(value)?;
                info!(user_id = %user.id, "Resolved user {}", email);
                Ok(Lookup::Found(user))
            }
            None => {
                info!("Email not found: {}", email);
                Ok(Lookup::NotFound)
            }
        }
    }
}
