use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::common::ConsoleCommand;
use crate::render::RenderPort;

use super::api::ControlApi;
use super::fetchers::fetch_identity;
use super::mutators;
use super::scheduler::PollingScheduler;

/// Network side of the console: polls the node and runs UI commands.
pub struct ConsoleClient {
    api: Arc<dyn ControlApi>,
    render: Arc<dyn RenderPort>,
    command_receiver: mpsc::Receiver<ConsoleCommand>,
    poll_interval: Duration,
}

impl ConsoleClient {
    pub fn new(
        api: Arc<dyn ControlApi>,
        render: Arc<dyn RenderPort>,
        command_receiver: mpsc::Receiver<ConsoleCommand>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            api,
            render,
            command_receiver,
            poll_interval,
        }
    }

    /// Runs until the UI drops its command sender.
    pub async fn run(mut self) {
        let api = Arc::clone(&self.api);
        let render = Arc::clone(&self.render);
        tokio::spawn(async move {
            if fetch_identity(api.as_ref(), render.as_ref()).await.is_ok() {
                log::info!("Node identity loaded");
            }
        });

        let scheduler = PollingScheduler::new(
            Arc::clone(&self.api),
            Arc::clone(&self.render),
            self.poll_interval,
        );
        let polling = tokio::spawn(scheduler.run());
        log::info!("Console event loop started");

        while let Some(command) = self.command_receiver.recv().await {
            self.dispatch(command);
        }

        polling.abort();
        log::info!("Command channel closed; console client stopped");
    }

    /// Writes are fire-and-forget: they neither wait for each other nor for polling.
    fn dispatch(&self, command: ConsoleCommand) {
        log::debug!("Dispatching {command:?}");
        let api = Arc::clone(&self.api);
        let render = Arc::clone(&self.render);
        tokio::spawn(async move {
            // Failures were already logged and reported to the UI.
            let _ = mutators::execute(api.as_ref(), render.as_ref(), command).await;
        });
    }
}
