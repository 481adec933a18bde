//! Reconciles a list of emails against one group's membership.

use serde::Serialize;
use tracing::instrument;

use crate::observer::{ReconcileEvent, ReconcileObserver, TracingObserver};
use crate::{Directory, DirectoryUser, Lookup, MembershipStatus};

/// What the report shows for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub job_title: String,
}

impl From<&DirectoryUser> for UserSummary {
    fn from(user: &DirectoryUser) -> Self {
        Self {
            name: user.display_name.clone(),
            email: user.mail.clone(),
            job_title: user.job_title.clone(),
        }
    }
}

/// Output of one run, both lists in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    /// Users that were already members.
    pub already_member: Vec<UserSummary>,
    /// Users found not to be members. An add was attempted for each of them;
    /// a failed add does not remove the entry.
    pub added: Vec<UserSummary>,
}

impl ReconciliationResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.already_member.is_empty() && self.added.is_empty()
    }
}

/// Drives a [`Directory`] over a list of emails.
pub struct Reconciler<D, O = TracingObserver> {
    directory: D,
    observer: O,
}

impl<D: Directory> Reconciler<D> {
    /// Creates a reconciler that reports progress through `tracing`.
    pub fn new(directory: D) -> Self {
        Self::with_observer(directory, TracingObserver)
    }
}

impl<D: Directory, O: ReconcileObserver> Reconciler<D, O> {
    pub fn with_observer(directory: D, observer: O) -> Self {
        Self {
            directory,
            observer,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Runs one reconciliation.
    ///
    /// If the group cannot be resolved nothing else is requested and the
    /// result is empty. Emails whose user or membership cannot be determined
    /// are left out of both lists.
    #[instrument(skip(self, emails), fields(email_count = emails.len()))]
    pub async fn reconcile<S: AsRef<str>>(
        &self,
        emails: &[S],
        group_name: &str,
    ) -> ReconciliationResult {
        let group = match self.directory.resolve_group(group_name).await {
            Ok(Lookup::Found(group)) => group,
            Ok(Lookup::NotFound) => {
                self.emit(ReconcileEvent::GroupNotFound {
                    name: group_name.to_string(),
                });
                return ReconciliationResult::default();
            }
            Err(e) => {
                self.emit(ReconcileEvent::GroupLookupFailed {
                    name: group_name.to_string(),
                    error: e.to_string(),
                });
                return ReconciliationResult::default();
            }
        };
        self.emit(ReconcileEvent::GroupResolved {
            name: group_name.to_string(),
            group_id: group.id.clone(),
        });

        let mut result = ReconciliationResult::default();

        for email in emails {
            let email = email.as_ref();
            self.emit(ReconcileEvent::ProcessingEmail {
                email: email.to_string(),
            });

            let user = match self.directory.resolve_user(email).await {
                Ok(Lookup::Found(user)) => user,
                Ok(Lookup::NotFound) => {
                    self.emit(ReconcileEvent::UserNotFound {
                        email: email.to_string(),
                    });
                    continue;
                }
                Err(e) => {
                    self.emit(ReconcileEvent::UserLookupFailed {
                        email: email.to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let status = match self.directory.check_membership(&user.id, &group.id).await {
                Ok(status) => status,
                Err(e) => {
                    self.emit(ReconcileEvent::MembershipCheckFailed {
                        email: email.to_string(),
                        user_id: user.id.clone(),
                        error: e.to_string(),
                    });
                    MembershipStatus::Unknown
                }
            };

            match status {
                MembershipStatus::Member => {
                    self.emit_checked(email, &user, status);
                    result.already_member.push(UserSummary::from(&user));
                }
                MembershipStatus::NotMember => {
                    self.emit_checked(email, &user, status);
                    result.added.push(UserSummary::from(&user));
                    self.add(email, &user, &group.id).await;
                }
                MembershipStatus::Unknown => {}
            }
        }

        result
    }

    async fn add(&self, email: &str, user: &DirectoryUser, group_id: &str) {
        match self.directory.add_member(&user.id, group_id).await {
            Ok(()) => self.emit(ReconcileEvent::MemberAdded {
                email: email.to_string(),
                user_id: user.id.clone(),
            }),
            Err(e) => self.emit(ReconcileEvent::MemberAddFailed {
                email: email.to_string(),
                user_id: user.id.clone(),
                error: e.to_string(),
            }),
        }
    }

    fn emit_checked(&self, email: &str, user: &DirectoryUser, status: MembershipStatus) {
        self.emit(ReconcileEvent::MembershipChecked {
            email: email.to_string(),
            user_id: user.id.clone(),
            status,
        });
    }

    fn emit(&self, event: ReconcileEvent) {
        self.observer.on_event(&event);
    }
}
