//! Directory group membership reconciliation over Microsoft Graph.
//!
//! Given a group display name and a list of email addresses, the
//! [`Reconciler`] resolves each address to a directory user, checks whether
//! the user is already in the group and adds the ones that are not.
//!
//! # Example
//!
//! ```no_run
//! use groupsync_directory::{
//!     DirectoryConfig, GraphDirectory, Reconciler, ReportFormat, ReportPrinter,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DirectoryConfig::builder().token("access-token").build()?;
//! let reconciler = Reconciler::new(GraphDirectory::new(config)?);
//!
//! let result = reconciler
//!     .reconcile(&["user1@example.com", "user2@example.com"], "Engineering")
//!     .await;
//!
//! ReportPrinter::new(ReportFormat::Text).print(&result, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

mod config;
mod directory;
mod error;
pub mod graph_client;
mod groups;
mod membership;
pub mod observer;
mod reconcile;
mod report;
mod users;

// Re-exports
pub use config::{
    AccessToken, DirectoryConfig, DirectoryConfigBuilder, GraphCloud, DEFAULT_API_VERSION,
};
pub use directory::{Directory, GraphDirectory, Lookup};
pub use error::{DirectoryError, DirectoryResult};
pub use groups::DirectoryGroup;
pub use membership::MembershipStatus;
pub use observer::{ReconcileEvent, ReconcileObserver, TracingObserver};
pub use reconcile::{ReconciliationResult, Reconciler, UserSummary};
pub use report::{ReportFormat, ReportPrinter};
pub use users::{DirectoryUser, NOT_AVAILABLE};
