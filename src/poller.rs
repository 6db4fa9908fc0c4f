use crate::api::BackendClient;
use crate::events::AppEvent;
use log::{info, warn};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Polls `/model-status` at a fixed interval until the backend reports
/// `initialized: true`, then emits a single `ModelReady` event and
/// finishes. No backoff and no retry cap, but the task carries a stop
/// handle so the app can tear it down on exit. A failed poll is logged
/// and retried on the next tick rather than killing the loop; the
/// backend is usually mid-model-load when this matters.
pub struct ReadinessPoller {
    handle: JoinHandle<()>,
}

impl ReadinessPoller {
    pub fn spawn(client: BackendClient, events: Sender<AppEvent>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                match client.model_status().await {
                    Ok(status) if status.initialized => {
                        info!("model ready");
                        let _ = events.send(AppEvent::ModelReady).await;
                        return;
                    }
                    Ok(_) => {
                        info!("model still initializing, next check in {:?}", interval);
                    }
                    Err(e) => {
                        warn!("model status check failed: {}", e);
                    }
                }
                tokio::time::sleep(interval).await;
            }
        });

        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
