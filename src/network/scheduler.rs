use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::render::RenderPort;

use super::api::{ApiError, ControlApi};
use super::fetchers::{fetch_files, fetch_messages, fetch_names, fetch_peers, fetch_private};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Self-pacing refresh loop.
///
/// Each cycle starts every fetcher, but only the peer-address fetch gates the
/// next cycle: the timer is armed once it settles, whatever the outcome. The
/// other fetchers run detached and never delay rescheduling.
pub struct PollingScheduler {
    api: Arc<dyn ControlApi>,
    render: Arc<dyn RenderPort>,
    interval: Duration,
    cycles: u64,
}

impl PollingScheduler {
    pub fn new(api: Arc<dyn ControlApi>, render: Arc<dyn RenderPort>, interval: Duration) -> Self {
        Self {
            api,
            render,
            interval,
            cycles: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of cycles whose gating fetch has settled.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one cycle and returns once the gating fetch settled.
    ///
    /// The returned handle tracks the detached fetchers of the same cycle.
    pub async fn run_cycle(&mut self) -> (Result<(), ApiError>, JoinHandle<()>) {
        let api = Arc::clone(&self.api);
        let render = Arc::clone(&self.render);
        let ungated = tokio::spawn(async move {
            let (api, render) = (api.as_ref(), render.as_ref());
            let _ = futures::join!(
                fetch_messages(api, render),
                fetch_private(api, render),
                fetch_names(api, render),
                fetch_files(api, render),
            );
        });

        let gate = fetch_peers(self.api.as_ref(), self.render.as_ref()).await;
        self.cycles += 1;
        (gate, ungated)
    }

    /// Polls until the task is dropped; there is no retry limit and no backoff.
    pub async fn run(mut self) {
        log::info!(
            "Polling every {} ms after the peer fetch settles",
            self.interval.as_millis()
        );
        loop {
            let (gate, _ungated) = self.run_cycle().await;
            match gate {
                Ok(()) => log::debug!("Polling cycle {} settled", self.cycles),
                Err(err) => log::debug!("Polling cycle {} settled with error: {err}", self.cycles),
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}
