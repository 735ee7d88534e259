use crate::domain::{ResourceName, StageStatus};
use crate::error::CascadeError;
use crate::http::fetch_json;
use crate::locator::Locator;
use crate::store::StatusWriter;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Periodically refreshes the stage display.
///
/// Every tick is spawned as its own task and nothing waits for the previous one,
/// so two slow ticks can overlap and the one that resolves last is what stays on
/// screen. The display is therefore at most one interval stale once the stage
/// service answers again.
#[derive(Debug, Clone)]
pub struct StatusPoller {
    locator: Locator,
    writer: StatusWriter,
    interval: Duration,
}

impl StatusPoller {
    pub const fn new(locator: Locator, writer: StatusWriter, interval: Duration) -> Self {
        Self {
            locator,
            writer,
            interval,
        }
    }

    /// One tick: locate the stage service, fetch `{base}/stage`, publish on success.
    pub async fn poll_once(&self) -> Result<StageStatus, CascadeError> {
        let location = self.locator.locate(ResourceName::Stage).await?;
        let url = location.endpoint(&["stage"])?;
        let status: StageStatus = fetch_json(self.locator.transport(), &url).await?;

        let revision = self.writer.publish(status.clone());
        tracing::debug!(stage = status.stage, revision, "stage updated");
        Ok(status)
    }

    /// Starts the timer. The first tick fires immediately.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let tick = self.clone();
                tokio::spawn(async move {
                    if let Err(e) = tick.poll_once().await {
                        tracing::debug!(error = %e, "stage poll failed");
                    }
                });
            }
        })
    }
}
