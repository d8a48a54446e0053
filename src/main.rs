use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;

use peerster_console::config::{self, ConsoleConfig};
use peerster_console::network::{ConsoleClient, HttpControlApi};
use peerster_console::render::ChannelRenderer;
use peerster_console::ui::ConsoleApp;

/// UI -> network capacity.
const COMMAND_CHANNEL_SIZE: usize = 100;
/// Network -> UI capacity; one polling cycle emits about a dozen events.
const EVENT_CHANNEL_SIZE: usize = 256;

#[derive(Parser)]
#[command(
    name = "peerster_console",
    version,
    about = "Desktop console for a Peerster gossip node"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the node's control API (overrides the config file)
    #[arg(long, value_name = "URL")]
    backend: Option<String>,
    /// Delay between polling cycles in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    poll_interval_ms: Option<u64>,
    /// Persist the effective configuration to the config file
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = effective_config(&cli);
    if cli.write_config {
        match config::save_config(&cli.config, &app_config) {
            Ok(()) => log::info!("Wrote configuration to {}", cli.config),
            Err(err) => log::error!("Failed to write config {}: {err}", cli.config),
        }
    }

    run_console(app_config).await
}

fn effective_config(cli: &Cli) -> ConsoleConfig {
    let mut app_config = config::load_config(&cli.config);
    if let Some(backend) = &cli.backend {
        app_config.backend_url = backend.clone();
    }
    if let Some(poll_interval_ms) = cli.poll_interval_ms {
        app_config.poll_interval_ms = poll_interval_ms;
    }
    app_config.sanitized()
}

async fn run_console(app_config: ConsoleConfig) -> Result<(), eframe::Error> {
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);

    let api = Arc::new(HttpControlApi::new(&app_config.backend_url));
    let render = Arc::new(ChannelRenderer::new(event_tx));
    let poll_interval = app_config.poll_interval();
    log::info!("Console attached to {}", api.base_url());

    tokio::spawn(async move {
        ConsoleClient::new(api, render, cmd_rx, poll_interval)
            .run()
            .await;
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let activity_limit = app_config.activity_log_limit;

    eframe::run_native(
        "Peerster",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ConsoleApp should only be initialized once");

            Ok(Box::new(ConsoleApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                activity_limit,
            )))
        }),
    )
}
