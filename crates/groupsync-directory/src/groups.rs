//! Group lookup by display name.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{DirectoryError, DirectoryResult, GraphDirectory, Lookup};

/// Group resolved from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryGroup {
    /// Directory object ID.
    pub id: String,
    /// Group display name.
    pub display_name: String,
}

impl DirectoryGroup {
    /// Parses a group from the Graph API JSON response.
    pub fn from_json(value: &serde_json::Value) -> DirectoryResult<Self> {
        Ok(Self {
            id: value
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| DirectoryError::MalformedResponse("Missing group id".into()))?
                .to_string(),
            display_name: value
                .get("displayName")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        })
    }
}

impl GraphDirectory {
    /// Builds the exact-match group query URL.
    ///
    /// The name goes into the filter literally; a `'` in it breaks the query.
    pub(crate) fn group_query_url(&self, name: &str) -> String {
        let filter = format!("displayName eq '{name}'");
        format!(
            "{}?$filter={}&$select=id,displayName",
            self.graph_client().url("groups"),
            urlencoding::encode(&filter)
        )
    }

    /// Resolves a group by exact display name. The first match wins.
    #[instrument(skip(self))]
    pub async fn find_group(&self, name: &str) -> DirectoryResult<Lookup<DirectoryGroup>> {
        let url = self.group_query_url(name);

        let page: Vec<serde_json::Value> = match self.graph_client().get_collection(&url).await {
            Ok(page) => page,
            Err(e) => {
                debug!("Failed to fetch group ID for {}: {}", name, e);
                return Err(e);
            }
        };

        match page.first() {
            Some(value) => {
                let group = DirectoryGroup::from_json(value)?;
                info!(group_id = %group.id, "Resolved group {}", name);
                Ok(Lookup::Found(group))
            }
            None => {
                info!("Group not found: {}", name);
                Ok(Lookup::NotFound)
            }
        }
    }
}
