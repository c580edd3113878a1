//! Event-application use case.
//!
//! This module provides the `IntakeUseCase` which orchestrates the session
//! store and the flow machine: it reads the user's session, computes the
//! transition, commits the new session value, and hands the resulting
//! actions back to the dispatcher for execution.

use std::sync::Arc;

use tokio::sync::Mutex;

use intake_core::catalog::{Catalog, builtin_catalog};
use intake_core::error::Result;
use intake_core::flow::{Action, Event, transition};
use intake_core::session::{SessionStore, UserId};

/// Applies inbound events to per-user sessions.
///
/// # Responsibilities
///
/// - Reading the current session (a fresh one for unknown users)
/// - Running the pure flow transition against the catalog
/// - Committing the new session value back to the store
/// - Returning the outbound actions for the caller to execute
///
/// # Concurrency
///
/// A single apply lock serializes every read-modify-write cycle, so two
/// events for the same user can never interleave their reads and writes of
/// that session. The transition itself is pure computation and never
/// suspends, so the critical section is tiny. The lock is released before
/// the caller executes any action: a slow outbound send never blocks other
/// users' session access.
///
/// The session value is committed *before* the actions run; a failed
/// delivery does not roll the session back.
pub struct IntakeUseCase {
    /// Store holding per-user conversation state
    store: Arc<dyn SessionStore>,
    /// Localized content the flow renders from
    catalog: &'static Catalog,
    /// Serializes read-modify-write cycles across callers
    apply_lock: Mutex<()>,
}

impl IntakeUseCase {
    /// Creates a use case over the builtin catalog.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_catalog(store, builtin_catalog())
    }

    /// Creates a use case over a specific catalog.
    pub fn with_catalog(store: Arc<dyn SessionStore>, catalog: &'static Catalog) -> Self {
        Self {
            store,
            catalog,
            apply_lock: Mutex::new(()),
        }
    }

    /// Applies one event for one user and returns the actions to execute.
    ///
    /// # Errors
    ///
    /// Returns an error if the dispatcher passed a selection the catalog
    /// cannot resolve (the session is left untouched; see
    /// [`intake_core::IntakeError::is_invalid_selection`]) or if the store
    /// backend fails.
    pub async fn handle_event(&self, user_id: UserId, event: Event) -> Result<Vec<Action>> {
        let actions = {
            let _guard = self.apply_lock.lock().await;

            let current = self.store.get(user_id).await?;
            let outcome = match transition(&current, &event, self.catalog) {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::warn!(user_id, %err, "event rejected");
                    return Err(err);
                }
            };

            // Status probes and ignored events leave the session as-is; a
            // write would create store entries for users who never started.
            if outcome.session != current {
                self.store.put(user_id, outcome.session).await?;
            }

            outcome.actions
        };

        tracing::info!(user_id, ?event, actions = actions.len(), "event applied");
        Ok(actions)
    }

    /// The underlying store, for diagnostics and the sweeper.
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::IntakeError;
    use intake_core::catalog::Lang;
    use intake_core::session::{MemorySessionStore, Session, Stage};

    fn usecase() -> IntakeUseCase {
        IntakeUseCase::new(Arc::new(MemorySessionStore::new()))
    }

    // Store whose backend always fails, for error propagation tests
    struct FailingStore;

    #[async_trait::async_trait]
    impl SessionStore for FailingStore {
        async fn get(&self, _user_id: UserId) -> Result<Session> {
            Err(IntakeError::data_access("backend down"))
        }

        async fn put(&self, _user_id: UserId, _session: Session) -> Result<()> {
            Err(IntakeError::data_access("backend down"))
        }

        async fn clear_all(&self) -> Result<()> {
            Err(IntakeError::data_access("backend down"))
        }

        async fn snapshot(&self) -> Result<Vec<(UserId, Session)>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_full_flow_commits_each_step() {
        let usecase = usecase();
        let store = usecase.store();

        usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap();
        assert_eq!(store.get(1).await.unwrap().stage, Stage::AwaitingLanguage);

        usecase
            .handle_event(
                1,
                Event::LanguageChosen {
                    code: "ru".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(store.get(1).await.unwrap().language, Some(Lang::Ru));

        usecase
            .handle_event(1, Event::IssueChosen { index: 2 })
            .await
            .unwrap();
        let session = store.get(1).await.unwrap();
        assert_eq!(session.stage, Stage::AwaitingWallet);
        assert!(session.issue.is_some());

        let actions = usecase
            .handle_event(
                1,
                Event::WalletSubmitted {
                    text: "wallet-address".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(actions.len(), 4);
    }

    #[tokio::test]
    async fn test_invalid_selection_leaves_the_store_untouched() {
        let usecase = usecase();
        let store = usecase.store();

        usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap();
        let before = store.get(1).await.unwrap();

        let err = usecase
            .handle_event(
                1,
                Event::LanguageChosen {
                    code: "xx".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_selection());
        assert_eq!(store.get(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_status_query_creates_no_store_entry() {
        let usecase = usecase();
        let store = usecase.store();

        let actions = usecase.handle_event(99, Event::StatusQuery).await.unwrap();
        assert_eq!(actions.len(), 1);
        assert!(store.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_swept_user_transparently_starts_over() {
        let usecase = usecase();
        let store = usecase.store();

        usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap();
        usecase
            .handle_event(
                1,
                Event::LanguageChosen {
                    code: "es".to_string(),
                },
            )
            .await
            .unwrap();

        // The sweep happens mid-conversation
        store.clear_all().await.unwrap();

        // The stale issue pick is ignored against the fresh session, not an error
        let actions = usecase
            .handle_event(1, Event::IssueChosen { index: 0 })
            .await
            .unwrap();
        assert!(actions.is_empty());

        // And a fresh start works as for any new user
        usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap();
        assert_eq!(store.get(1).await.unwrap().stage, Stage::AwaitingLanguage);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_events_for_one_user_serialize() {
        let usecase = Arc::new(usecase());
        let store = usecase.store();

        usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap();

        // Two racing language picks: whichever applies second sees
        // AwaitingIssue and is ignored, so exactly one takes effect.
        let first = {
            let usecase = Arc::clone(&usecase);
            tokio::spawn(async move {
                usecase
                    .handle_event(
                        1,
                        Event::LanguageChosen {
                            code: "ru".to_string(),
                        },
                    )
                    .await
                    .unwrap()
            })
        };
        let second = {
            let usecase = Arc::clone(&usecase);
            tokio::spawn(async move {
                usecase
                    .handle_event(
                        1,
                        Event::LanguageChosen {
                            code: "es".to_string(),
                        },
                    )
                    .await
                    .unwrap()
            })
        };
        let (first, second) = (first.await.unwrap(), second.await.unwrap());

        // One pick rendered the issue menu, the other was ignored
        assert_eq!(
            [first.is_empty(), second.is_empty()].iter().filter(|e| **e).count(),
            1
        );

        // Never a torn mix: the stored session is a coherent whole
        let session = store.get(1).await.unwrap();
        assert_eq!(session.stage, Stage::AwaitingIssue);
        assert!(matches!(session.language, Some(Lang::Ru) | Some(Lang::Es)));
        assert_eq!(session.issue, None);
    }

    #[tokio::test]
    async fn test_store_faults_propagate() {
        let usecase = IntakeUseCase::new(Arc::new(FailingStore));
        let err = usecase
            .handle_event(1, Event::Start { display_name: None })
            .await
            .unwrap_err();
        assert!(err.is_data_access());
    }
}
