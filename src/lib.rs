//! Desktop console for a Peerster gossip node.
//!
//! The UI thread owns all client state; a tokio task polls the node's HTTP
//! control API and runs write requests, talking to the UI over channels.

pub mod common;
pub mod config;
pub mod network;
pub mod render;
pub mod ui;
pub mod validation;
