//! Progress events emitted while reconciling.

use tracing::{info, warn};

use crate::MembershipStatus;

/// One step of a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEvent {
    GroupResolved { name: String, group_id: String },
    GroupNotFound { name: String },
    GroupLookupFailed { name: String, error: String },
    ProcessingEmail { email: String },
    UserNotFound { email: String },
    UserLookupFailed { email: String, error: String },
    MembershipChecked {
        email: String,
        user_id: String,
        status: MembershipStatus,
    },
    MembershipCheckFailed {
        email: String,
        user_id: String,
        error: String,
    },
    MemberAdded { email: String, user_id: String },
    /// The add failed; the user still appears in the `added` list.
    MemberAddFailed {
        email: String,
        user_id: String,
        error: String,
    },
}

/// Receives reconciliation progress.
pub trait ReconcileObserver: Send + Sync {
    fn on_event(&self, event: &ReconcileEvent);
}

/// Observer that turns events into `tracing` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ReconcileObserver for TracingObserver {
    fn on_event(&self, event: &ReconcileEvent) {
        match event {
            ReconcileEvent::GroupResolved { name, group_id } => {
                info!(group_id = %group_id, "Target group '{}' resolved", name);
            }
            ReconcileEvent::GroupNotFound { name } => {
                warn!("Group '{}' not found. Exiting.", name);
            }
            ReconcileEvent::GroupLookupFailed { name, error } => {
                warn!("Group '{}' could not be resolved ({}). Exiting.", name, error);
            }
            ReconcileEvent::ProcessingEmail { email } => {
                info!("Processing email: {}", email);
            }
            ReconcileEvent::UserNotFound { email } => {
                warn!("Skipping {}: no user with this mail", email);
            }
            ReconcileEvent::UserLookupFailed { email, error } => {
                warn!("Skipping {}: {}", email, error);
            }
            ReconcileEvent::MembershipChecked {
                email,
                user_id,
                status,
            } => {
                info!(user_id = %user_id, status = ?status, "Membership checked for {}", email);
            }
            ReconcileEvent::MembershipCheckFailed {
                email,
                user_id,
                error,
            } => {
                warn!(user_id = %user_id, "Skipping {}: membership unknown ({})", email, error);
            }
            ReconcileEvent::MemberAdded { email, user_id } => {
                info!(user_id = %user_id, "Added {} to the group", email);
            }
            ReconcileEvent::MemberAddFailed {
                email,
                user_id,
                error,
            } => {
                warn!(user_id = %user_id, "Could not add {} to the group: {}", email, error);
            }
        }
    }
}

impl<O: ReconcileObserver + ?Sized> ReconcileObserver for &O {
    fn on_event(&self, event: &ReconcileEvent) {
        (**self).on_event(event);
    }
}
