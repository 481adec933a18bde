//! The directory seam used by the reconciler.

use async_trait::async_trait;

use crate::graph_client::GraphClient;
use crate::{
    DirectoryConfig, DirectoryGroup, DirectoryResult, DirectoryUser, MembershipStatus,
};

/// Result of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// Converts into an `Option`, mapping `NotFound` to `None`.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }
}

/// Identity directory operations needed to reconcile group membership.
///
/// Each call is a single request with no retry. Implementations log failures
/// at `debug` only; the reconciler's observer reports them.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Resolves a group by exact display name.
    async fn resolve_group(&self, name: &str) -> DirectoryResult<Lookup<DirectoryGroup>>;

    /// Resolves a user by exact mail address.
    async fn resolve_user(&self, email: &str) -> DirectoryResult<Lookup<DirectoryUser>>;

    /// Checks direct membership. An `Err` means the state is unknown.
    async fn check_membership(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> DirectoryResult<MembershipStatus>;

    /// Adds a user to a group.
    async fn add_member(&self, user_id: &str, group_id: &str) -> DirectoryResult<()>;
}

/// [`Directory`] backed by Microsoft Graph.
#[derive(Debug)]
pub struct GraphDirectory {
    graph_client: GraphClient,
}

impl GraphDirectory {
    /// Creates a directory client from an immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: DirectoryConfig) -> DirectoryResult<Self> {
        Ok(Self {
            graph_client: GraphClient::new(config)?,
        })
    }

    #[must_use]
    pub fn graph_client(&self) -> &GraphClient {
        &self.graph_client
    }
}

#[async_trait]
impl Directory for GraphDirectory {
    async fn resolve_group(&self, name: &str) -> DirectoryResult<Lookup<DirectoryGroup>> {
        self.find_group(name).await
    }

    async fn resolve_user(&self, email: &str) -> DirectoryResult<Lookup<DirectoryUser>> {
        self.find_user_by_mail(email).await
    }

    async fn check_membership(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> DirectoryResult<MembershipStatus> {
        self.is_member(user_id, group_id).await
    }

    async fn add_member(&self, user_id: &str, group_id: &str) -> DirectoryResult<()> {
        self.add_group_member(user_id, group_id).await
    }
}
