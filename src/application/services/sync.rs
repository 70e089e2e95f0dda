//! Draft synchronization - debounced mirror of wizard state into the store
//!
//! Edits arrive at keystroke rate; the store does not need every one. A
//! worker task coalesces snapshots and writes the latest one after a quiet
//! period (`debounce`), or once `max_staleness` has elapsed while edits keep
//! coming. Writes are full-state and last-write-wins, so a failed flush is
//! dropped: the next successful one carries the complete picture.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::warn;

use crate::application::dto::DraftSnapshot;
use crate::application::ports::outbound::DraftStorePort;
use crate::domain::value_objects::{CampaignId, DraftId};

/// Timing for the synchronization worker
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Quiet period after the last edit before a flush
    pub debounce: Duration,
    /// Upper bound on how long the store may lag while edits keep arriving
    pub max_staleness: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(400),
            max_staleness: Duration::from_millis(2000),
        }
    }
}

enum SyncCommand {
    Snapshot(Box<DraftSnapshot>),
    Flush(oneshot::Sender<()>),
}

/// Handle to the per-draft synchronization worker
///
/// Dropping the handle closes the channel; the worker flushes anything
/// pending and exits.
pub struct DraftSynchronizer {
    tx: mpsc::UnboundedSender<SyncCommand>,
    _worker: JoinHandle<()>,
}

impl DraftSynchronizer {
    pub fn spawn(
        store: Arc<dyn DraftStorePort>,
        campaign: CampaignId,
        draft: DraftId,
        config: SyncConfig,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(store, campaign, draft, config, rx));
        Self {
            tx,
            _worker: worker,
        }
    }

    /// Queue the current full state, replacing any not-yet-flushed snapshot
    pub fn push(&self, snapshot: DraftSnapshot) {
        if self
            .tx
            .send(SyncCommand::Snapshot(Box::new(snapshot)))
            .is_err()
        {
            warn!("draft sync worker stopped; keeping edit local only");
        }
    }

    /// Write any pending state now and wait for the attempt to finish
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(SyncCommand::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}

async fn run_worker(
    store: Arc<dyn DraftStorePort>,
    campaign: CampaignId,
    draft: DraftId,
    config: SyncConfig,
    mut rx: mpsc::UnboundedReceiver<SyncCommand>,
) {
    let mut pending: Option<Box<DraftSnapshot>> = None;
    let mut first_dirty = Instant::now();
    let mut last_change = Instant::now();

    loop {
        let command = if pending.is_some() {
            let deadline =
                (last_change + config.debounce).min(first_dirty + config.max_staleness);
            tokio::select! {
                command = rx.recv() => command,
                _ = sleep_until(deadline) => {
                    flush_pending(store.as_ref(), campaign, draft, &mut pending).await;
                    continue;
                }
            }
        } else {
            rx.recv().await
        };

        match command {
            Some(SyncCommand::Snapshot(snapshot)) => {
                let now = Instant::now();
                if pending.is_none() {
                    first_dirty = now;
                }
                last_change = now;
                pending = Some(snapshot);
            }
            Some(SyncCommand::Flush(ack)) => {
                flush_pending(store.as_ref(), campaign, draft, &mut pending).await;
                let _ = ack.send(());
            }
            None => {
                flush_pending(store.as_ref(), campaign, draft, &mut pending).await;
                break;
            }
        }
    }
}

async fn flush_pending(
    store: &dyn DraftStorePort,
    campaign: CampaignId,
    draft: DraftId,
    pending: &mut Option<Box<DraftSnapshot>>,
) {
    if let Some(snapshot) = pending.take() {
        if let Err(e) = store.update(campaign, draft, &snapshot).await {
            warn!(
                draft_id = %draft,
                error = %e,
                "draft sync failed; local state kept, next flush carries full state"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::application::dto::StoredDraft;
    use crate::domain::entities::CharacterDraft;
    use crate::domain::value_objects::UserId;

    /// Store fake that records every update it receives
    #[derive(Default)]
    struct RecordingStore {
        updates: Mutex<Vec<DraftSnapshot>>,
        fail: bool,
    }

    #[async_trait]
    impl DraftStorePort for RecordingStore {
        async fn find(&self, _: CampaignId, _: UserId) -> Result<Option<StoredDraft>> {
            Ok(None)
        }

        async fn create(&self, _: CampaignId, _: UserId) -> Result<DraftId> {
            Ok(DraftId::new())
        }

        async fn update(
            &self,
            _: CampaignId,
            _: DraftId,
            snapshot: &DraftSnapshot,
        ) -> Result<()> {
            if self.fail {
                anyhow::bail!("store unavailable");
            }
            self.updates.lock().await.push(snapshot.clone());
            Ok(())
        }

        async fn activate(&self, _: CampaignId, _: DraftId) -> Result<()> {
            Ok(())
        }
    }

    fn snapshot_named(name: &str) -> DraftSnapshot {
        let mut draft = CharacterDraft::default();
        draft.identity.name = name.to_string();
        DraftSnapshot::capture(&draft)
    }

    #[tokio::test]
    async fn test_rapid_edits_coalesce_into_one_write() {
        let store = Arc::new(RecordingStore::default());
        let sync = DraftSynchronizer::spawn(
            store.clone(),
            CampaignId::new(),
            DraftId::new(),
            SyncConfig {
                debounce: Duration::from_millis(30),
                max_staleness: Duration::from_secs(5),
            },
        );

        sync.push(snapshot_named("A"));
        sync.push(snapshot_named("Az"));
        sync.push(snapshot_named("Azael"));
        tokio::time::sleep(Duration::from_millis(150)).await;

        let updates = store.updates.lock().await;
        assert_eq!(updates.len(), 1);
        let identity = updates[0].identity.clone().unwrap();
        assert_eq!(identity.name.as_deref(), Some("Azael"));
    }

    #[tokio::test]
    async fn test_flush_writes_immediately() {
        let store = Arc::new(RecordingStore::default());
        let sync = DraftSynchronizer::spawn(
            store.clone(),
            CampaignId::new(),
            DraftId::new(),
            SyncConfig {
                debounce: Duration::from_secs(60),
                max_staleness: Duration::from_secs(60),
            },
        );

        sync.push(snapshot_named("Azael"));
        sync.flush().await;

        assert_eq!(store.updates.lock().await.len(), 1);

        // Nothing pending: flush is a no-op
        sync.flush().await;
        assert_eq!(store.updates.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_max_staleness_bounds_continuous_editing() {
        let store = Arc::new(RecordingStore::default());
        let sync = DraftSynchronizer::spawn(
            store.clone(),
            CampaignId::new(),
            DraftId::new(),
            SyncConfig {
                debounce: Duration::from_secs(60),
                max_staleness: Duration::from_millis(80),
            },
        );

        // Keep editing faster than the debounce could ever settle
        for i in 0..12 {
            sync.push(snapshot_named(&format!("Azael{}", i)));
            tokio::time::sleep(Duration::from_millis(25)).await;
        }

        assert!(
            !store.updates.lock().await.is_empty(),
            "staleness bound should have forced a flush"
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_swallowed() {
        let store = Arc::new(RecordingStore {
            fail: true,
            ..RecordingStore::default()
        });
        let sync = DraftSynchronizer::spawn(
            store.clone(),
            CampaignId::new(),
            DraftId::new(),
            SyncConfig::default(),
        );

        sync.push(snapshot_named("Azael"));
        // Completes despite the failing store
        sync.flush().await;
        assert!(store.updates.lock().await.is_empty());
    }
}
