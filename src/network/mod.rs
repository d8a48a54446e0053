pub mod api;
pub mod client;
pub mod fetchers;
pub mod mutators;
pub mod scheduler;

pub use api::{ApiError, ControlApi, HttpControlApi};
pub use client::ConsoleClient;
pub use scheduler::{DEFAULT_POLL_INTERVAL, PollingScheduler};
