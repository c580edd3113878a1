//! Periodic session expiry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use intake_core::session::SessionStore;

/// Periodically discards every session in the store.
///
/// Expiry is global and coarse: one background task wakes on a fixed
/// interval and clears the whole store, rather than keeping a timer per
/// session. This keeps memory bounded with zero per-session bookkeeping, at
/// the cost of occasionally discarding an active conversation mid-flow; the
/// next event from a swept user simply starts from a fresh session.
pub struct ExpirySweeper {
    store: Arc<dyn SessionStore>,
    interval: Duration,
    running: AtomicBool,
}

impl ExpirySweeper {
    /// Creates a sweeper over the given store.
    pub fn new(store: Arc<dyn SessionStore>, interval: Duration) -> Self {
        Self {
            store,
            interval,
            running: AtomicBool::new(false),
        }
    }

    /// Starts the background sweep loop.
    ///
    /// Runs until the process shuts down; the task dies with the runtime. A
    /// failed sweep is logged and the loop continues with the next interval.
    /// Starting an already-running sweeper is a no-op.
    pub fn start(self: &Arc<Self>) {
        // Prevent multiple sweep loops over the same store
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::warn!(target: "sweeper", "Sweeper already running, skipping");
            return;
        }

        let sweeper = Arc::clone(self);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(sweeper.interval);
            // The first tick completes immediately; consume it so the first
            // sweep happens one full interval after startup.
            ticker.tick().await;
            tracing::info!(target: "sweeper", "Started ({:?} interval)", sweeper.interval);

            loop {
                ticker.tick().await;
                match sweeper.store.clear_all().await {
                    Ok(()) => {
                        tracing::info!(target: "sweeper", "Successfully cleared all sessions");
                    }
                    Err(e) => {
                        tracing::error!(target: "sweeper", "Error clearing sessions: {}", e);
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::error::{IntakeError, Result};
    use intake_core::session::{MemorySessionStore, Session, UserId};
    use std::sync::atomic::AtomicUsize;

    async fn populate(store: &dyn SessionStore, count: UserId) {
        for user_id in 0..count {
            store.put(user_id, Session::new()).await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_empties_the_store_and_keeps_running() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        populate(store.as_ref(), 3).await;

        let sweeper = Arc::new(ExpirySweeper::new(
            Arc::clone(&store),
            Duration::from_secs(30),
        ));
        sweeper.start();

        // Nothing happens before the first interval elapses
        tokio::time::sleep(Duration::from_secs(29)).await;
        assert_eq!(store.snapshot().await.unwrap().len(), 3);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(store.snapshot().await.unwrap().is_empty());

        // The loop keeps sweeping on subsequent intervals
        populate(store.as_ref(), 2).await;
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(store.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_is_a_no_op() {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let sweeper = Arc::new(ExpirySweeper::new(
            Arc::clone(&store),
            Duration::from_secs(30),
        ));
        sweeper.start();
        sweeper.start();

        populate(store.as_ref(), 1).await;
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert!(store.snapshot().await.unwrap().is_empty());
    }

    // Store whose clear_all always fails, to prove the loop survives
    struct StubbornStore {
        sweeps: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SessionStore for StubbornStore {
        async fn get(&self, _user_id: UserId) -> Result<Session> {
            Ok(Session::new())
        }

        async fn put(&self, _user_id: UserId, _session: Session) -> Result<()> {
            Ok(())
        }

        async fn clear_all(&self) -> Result<()> {
            self.sweeps.fetch_add(1, Ordering::SeqCst);
            Err(IntakeError::data_access("clear failed"))
        }

        async fn snapshot(&self) -> Result<Vec<(UserId, Session)>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_sweep_does_not_stop_the_loop() {
        let store = Arc::new(StubbornStore {
            sweeps: AtomicUsize::new(0),
        });
        let sweeper = Arc::new(ExpirySweeper::new(
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Duration::from_secs(30),
        ));
        sweeper.start();

        tokio::time::sleep(Duration::from_secs(95)).await;
        assert!(store.sweeps.load(Ordering::SeqCst) >= 3);
    }
}
