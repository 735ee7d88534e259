use crate::domain::StageStatus;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// What the stage display shows. `revision` grows by one on every publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSnapshot {
    pub status: StageStatus,
    pub revision: u64,
    pub received_at: DateTime<Local>,
}

/// Write half of the stage display. Owned by the poller, shared by its ticks.
#[derive(Debug, Clone)]
pub struct StatusWriter {
    tx: Arc<watch::Sender<Option<StageSnapshot>>>,
}

/// Read half of the stage display, handed to anything that renders it.
#[derive(Debug, Clone)]
pub struct StatusStore {
    tx: Arc<watch::Sender<Option<StageSnapshot>>>,
}

pub fn status_store() -> (StatusWriter, StatusStore) {
    let (tx, _) = watch::channel(None);
    let tx = Arc::new(tx);
    (StatusWriter { tx: tx.clone() }, StatusStore { tx })
}

impl StatusWriter {
    /// Replaces the displayed status wholesale and returns the new revision.
    pub fn publish(&self, status: StageStatus) -> u64 {
        let mut revision = 0;
        self.tx.send_modify(|slot| {
            revision = slot.as_ref().map_or(1, |previous| previous.revision + 1);
            *slot = Some(StageSnapshot {
                status,
                revision,
                received_at: Local::now(),
            });
        });
        revision
    }
}

impl StatusStore {
    pub fn current(&self) -> Option<StageSnapshot> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<StageSnapshot>> {
        self.tx.subscribe()
    }
}
