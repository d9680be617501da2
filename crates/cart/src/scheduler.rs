//! Debounced deferred tasks.
//!
//! A [`Debouncer`] holds at most one pending task. Every [`trigger`] cancels
//! whatever is pending and arms the new task to run once the quiet period
//! has passed with no further triggers, so a burst of triggers collapses into
//! one run of the last task.
//!
//! [`trigger`]: Debouncer::trigger

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default quiet period before a debounced task runs.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// The armed task and a flag it raises once it has run.
///
/// The sender lives inside the task, so an aborted task closes the channel.
#[derive(Debug)]
struct Pending {
    handle: JoinHandle<()>,
    done: watch::Receiver<bool>,
}

/// Cancel-and-reschedule timer for a single deferred task.
///
/// Cheaply cloneable; clones share the same pending slot.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Arc<Mutex<Option<Pending>>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Cancel any pending task and arm `task` to run after the quiet period.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn trigger<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.slot();
        if let Some(previous) = pending.take() {
            if !previous.handle.is_finished() {
                debug!("Cancelling superseded deferred task");
            }
            previous.handle.abort();
        }

        let quiet = self.quiet;
        let (done_tx, done) = watch::channel(false);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            task();
            done_tx.send_replace(true);
        });
        *pending = Some(Pending { handle, done });
        debug!(quiet_ms = quiet.as_millis(), "Armed deferred task");
    }

    /// Cancel the pending task without running it.
    ///
    /// Returns `true` if a task was still waiting to run.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(Pending { handle, .. }) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                if was_pending {
                    debug!("Cancelled pending deferred task");
                }
                was_pending
            }
            None => false,
        }
    }

    /// Wait for the armed task, if any, to run on its own schedule.
    ///
    /// This does not shorten the quiet period. If the task is cancelled by a
    /// later trigger while waiting, this returns early and the replacement
    /// stays armed. The task stays in the slot throughout, so dropping this
    /// future leaves it cancellable.
    pub async fn settle(&self) {
        let done = self.slot().as_ref().map(|pending| pending.done.clone());
        if let Some(mut done) = done {
            // Err means the task was aborted and dropped its sender.
            let _ = done.wait_for(|ran| *ran).await;
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
