//! Group membership checks and writes.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::graph_client::api_error;
use crate::{DirectoryResult, GraphDirectory};

/// Outcome of a membership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// The user is a direct member of the group.
    Member,
    /// The user is not a member of the group.
    NotMember,
    /// The check failed; neither state may be assumed.
    Unknown,
}

/// Body of a `members/$ref` POST.
#[derive(Debug, Serialize)]
struct MemberReference {
    #[serde(rename = "@odata.id")]
    odata_id: String,
}

impl GraphDirectory {
    /// Checks whether `user_id` is a member of `group_id`.
    ///
    /// 204 means member and 404 means not a member. Every other status is an
    /// error, so this never returns [`MembershipStatus::Unknown`] itself.
    #[instrument(skip(self))]
    pub async fn is_member(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> DirectoryResult<MembershipStatus> {
        let url = self
            .graph_client()
            .url(&format!("groups/{group_id}/members/{user_id}/$ref"));

        let response = self
            .graph_client()
            .send(Method::GET, &url, None::<&()>)
            .await
            .inspect_err(|e| {
                debug!("Error checking group membership for user ID {}: {}", user_id, e);
            })?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(MembershipStatus::Member),
            StatusCode::NOT_FOUND => Ok(MembershipStatus::NotMember),
            _ => {
                let e = api_error(response).await;
                debug!("Error checking group membership for user ID {}: {}", user_id, e);
                Err(e)
            }
        }
    }

    /// Adds `user_id` to `group_id`. Only 204 counts as success.
    #[instrument(skip(self))]
    pub async fn add_group_member(&self, user_id: &str, group_id: &str) -> DirectoryResult<()> {
        let url = self
            .graph_client()
            .url(&format!("groups/{group_id}/members/$ref"));
        let body = MemberReference {
            odata_id: self
                .graph_client()
                .url(&format!("directoryObjects/{user_id}")),
        };

        let response = self
            .graph_client()
            .send(Method::POST, &url, Some(&body))
            .await
            .inspect_err(|e| {
                debug!("Failed to add User ID {} to the group: {}", user_id, e);
            })?;

        if response.status() == StatusCode::NO_CONTENT {
            info!("User ID {} successfully added to the group.", user_id);
            Ok(())
        } else {
            let e = api_error(response).await;
            debug!("Failed to add User ID {} to the group: {}", user_id, e);
            Err(e)
        }
    }
}
