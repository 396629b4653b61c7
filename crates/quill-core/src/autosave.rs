//! Periodic draft autosave
//!
//! The editing surface owns a recurring timer task that snapshots the
//! working copy and upserts it as a draft. The task is independent of
//! any in-flight edit and must stop deterministically when the editor
//! is torn down: after `AutosaveHandle::stop` returns, no further
//! save can fire.
//!
//! The snapshot callback returns `None` when there is nothing worth
//! saving yet (no title and no content), matching the editor's guard.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::models::DraftPatch;
use crate::store::ContentStore;

/// A store shared between the session and the autosave task
///
/// The mutex makes every store call atomic with respect to concurrent
/// readers: nobody observes a partially applied merge.
pub type SharedStore = Arc<Mutex<ContentStore>>;

/// Handle to a running autosave task
pub struct AutosaveHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Cancel the task and wait for it to finish
    ///
    /// No autosave fires after this returns.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
        debug!("autosave stopped");
    }
}

/// Spawn the periodic autosave task
///
/// The first save lands one `period` after spawning, then every
/// `period` thereafter. Each tick calls `snapshot` for the current
/// working copy and upserts it when there is one.
pub fn spawn_autosave<F>(store: SharedStore, period: Duration, snapshot: F) -> AutosaveHandle
where
    F: Fn() -> Option<DraftPatch> + Send + 'static,
{
    let (shutdown, mut cancelled) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let Some(patch) = snapshot() else {
                        continue;
                    };
                    let mut store = store.lock().await;
                    let id = store.save_draft(patch);
                    debug!(draft_id = %id, "autosaved draft");
                }
                _ = cancelled.changed() => break,
            }
        }
    });

    AutosaveHandle { shutdown, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn snapshot_patch() -> Option<DraftPatch> {
        Some(DraftPatch {
            id: Some("working".to_string()),
            title: Some("draft title".to_string()),
            content: Some("draft body".to_string()),
            ..Default::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_save_waits_one_period() {
        let store: SharedStore = Arc::new(Mutex::new(ContentStore::new()));
        let handle = spawn_autosave(store.clone(), Duration::from_secs(30), snapshot_patch);

        time::sleep(Duration::from_secs(29)).await;
        assert_eq!(store.lock().await.draft_count(), 0);

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(store.lock().await.draft_count(), 1);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_ticks_upsert_same_draft() {
        let store: SharedStore = Arc::new(Mutex::new(ContentStore::new()));
        let handle = spawn_autosave(store.clone(), Duration::from_secs(30), snapshot_patch);

        time::sleep(Duration::from_secs(95)).await;
        handle.stop().await;

        // Three ticks, still exactly one draft under the working id
        let store = store.lock().await;
        assert_eq!(store.draft_count(), 1);
        assert!(store.get_draft("working").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_snapshot_skips_save() {
        let store: SharedStore = Arc::new(Mutex::new(ContentStore::new()));
        let handle = spawn_autosave(store.clone(), Duration::from_secs(30), || None);

        time::sleep(Duration::from_secs(95)).await;
        assert_eq!(store.lock().await.draft_count(), 0);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_save_after_stop() {
        let store: SharedStore = Arc::new(Mutex::new(ContentStore::new()));
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_flag = stopped.clone();

        let handle = spawn_autosave(store.clone(), Duration::from_secs(30), move || {
            assert!(
                !stopped_flag.load(Ordering::SeqCst),
                "snapshot taken after stop"
            );
            snapshot_patch()
        });

        time::sleep(Duration::from_secs(35)).await;
        handle.stop().await;
        stopped.store(true, Ordering::SeqCst);

        let version = store.lock().await.version();
        time::sleep(Duration::from_secs(120)).await;
        assert_eq!(store.lock().await.version(), version);
    }
}
