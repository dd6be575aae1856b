use crate::probe::StatusProbe;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use vinewood_domain::config::StatusConfig;
use vinewood_domain::site::StatusApi;
use vinewood_domain::status::ServerStatus;

/// Background poller publishing the latest [`ServerStatus`].
///
/// The first probe runs immediately. The task is aborted when the monitor is dropped.
#[derive(Debug)]
pub struct StatusMonitor {
    receiver: watch::Receiver<ServerStatus>,
    handle: JoinHandle<()>,
}

impl StatusMonitor {
    /// Spawns the polling task on the current Tokio runtime.
    pub fn spawn(probe: StatusProbe, every: Duration) -> Self {
        let (sender, receiver) = watch::channel(ServerStatus::default());

        info!(interval_ms = every.as_millis(), endpoint = probe.endpoint(), "Status monitor started");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let status = probe.probe().await;
                if sender.send(status).is_err() {
                    debug!("All status receivers dropped, stopping monitor");
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<ServerStatus> {
        self.receiver.clone()
    }

    pub fn latest(&self) -> ServerStatus {
        *self.receiver.borrow()
    }
}

impl Drop for StatusMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Poll cadence: the document's `refreshInterval`, floored at `min_interval_ms`.
pub fn poll_interval(api: &StatusApi, settings: &StatusConfig) -> Duration {
    Duration::from_millis(api.refresh_interval.max(settings.min_interval_ms).max(1))
}
