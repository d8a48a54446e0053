//! In-memory stand-ins for the node and the UI.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio::sync::mpsc;

use peerster_console::common::{
    ConsoleEvent, Conversations, IndexedFile, Name, NodeIdentity, PrivateMessage, RumorMessage,
};
use peerster_console::network::api::{
    ApiError, ControlApi, FILE_INDEXING_PATH, FILE_REQUESTING_PATH, ID_PATH, MESSAGE_PATH,
    NAME_PATH, NODE_PATH, PRIVATE_PATH,
};
use peerster_console::render::ChannelRenderer;

pub const HASH: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub path: &'static str,
    pub body: Option<String>,
}

/// Answers every endpoint from canned data and records each call.
#[derive(Default)]
pub struct FakeNode {
    requests: Mutex<Vec<Request>>,
    pub names: Vec<Name>,
    pub peers: Vec<String>,
    pub conversations: Conversations,
    pub files: Vec<IndexedFile>,
    /// Paths answering 503.
    pub failing: Vec<&'static str>,
    /// Extra latency of `GET /node`.
    pub peers_delay: Option<Duration>,
}

impl FakeNode {
    pub fn new() -> Self {
        let mut conversations = Conversations::new();
        conversations.insert(
            "bob".into(),
            vec![PrivateMessage {
                origin: "bob".into(),
                text: "hi there".into(),
            }],
        );
        Self {
            names: vec!["alice".into(), "bob".into()],
            peers: vec!["127.0.0.1:5001".into()],
            conversations,
            files: vec![IndexedFile {
                meta_hash: HASH.into(),
                file_name: "notes.txt".into(),
            }],
            ..Self::default()
        }
    }

    pub fn failing(mut self, path: &'static str) -> Self {
        self.failing.push(path);
        self
    }

    pub fn with_peers_delay(mut self, delay: Duration) -> Self {
        self.peers_delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }

    fn record(
        &self,
        method: &'static str,
        path: &'static str,
        body: Option<String>,
    ) -> Result<(), ApiError> {
        self.requests.lock().unwrap().push(Request { method, path, body });
        if self.failing.contains(&path) {
            Err(ApiError::Status {
                path,
                status: StatusCode::SERVICE_UNAVAILABLE,
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ControlApi for FakeNode {
    async fn identity(&self) -> Result<NodeIdentity, ApiError> {
        self.record("GET", ID_PATH, None)?;
        Ok(NodeIdentity {
            address: "127.0.0.1:5000".into(),
            name: "nodeA".into(),
        })
    }

    async fn messages(&self) -> Result<Vec<RumorMessage>, ApiError> {
        self.record("GET", MESSAGE_PATH, None)?;
        Ok(vec![RumorMessage {
            origin: "alice".into(),
            text: "hello".into(),
        }])
    }

    async fn send_message(&self, text: &str) -> Result<(), ApiError> {
        self.record("POST", MESSAGE_PATH, Some(text.to_string()))
    }

    async fn private_messages(&self) -> Result<Conversations, ApiError> {
        self.record("GET", PRIVATE_PATH, None)?;
        Ok(self.conversations.clone())
    }

    async fn send_private(&self, text: &str, peer: &str) -> Result<(), ApiError> {
        self.record("POST", PRIVATE_PATH, Some(format!("{peer}:{text}")))
    }

    async fn peers(&self) -> Result<Vec<String>, ApiError> {
        self.record("GET", NODE_PATH, None)?;
        if let Some(delay) = self.peers_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.peers.clone())
    }

    async fn add_peer(&self, endpoint: &str) -> Result<(), ApiError> {
        self.record("POST", NODE_PATH, Some(endpoint.to_string()))
    }

    async fn names(&self) -> Result<Vec<Name>, ApiError> {
        self.record("GET", NAME_PATH, None)?;
        Ok(self.names.clone())
    }

    async fn indexed_files(&self) -> Result<Vec<IndexedFile>, ApiError> {
        self.record("GET", FILE_INDEXING_PATH, None)?;
        Ok(self.files.clone())
    }

    async fn index_file(&self, file_name: &str) -> Result<Vec<IndexedFile>, ApiError> {
        self.record("POST", FILE_INDEXING_PATH, Some(file_name.to_string()))?;
        let mut files = self.files.clone();
        files.push(IndexedFile {
            meta_hash: "00".repeat(32),
            file_name: file_name.to_string(),
        });
        Ok(files)
    }

    async fn request_file(
        &self,
        file_name: &str,
        hash: &str,
        dest: &str,
    ) -> Result<Vec<IndexedFile>, ApiError> {
        self.record(
            "POST",
            FILE_REQUESTING_PATH,
            Some(format!("{file_name}|{hash}|{dest}")),
        )?;
        let mut files = self.files.clone();
        files.push(IndexedFile {
            meta_hash: hash.to_string(),
            file_name: file_name.to_string(),
        });
        Ok(files)
    }
}

pub fn renderer() -> (ChannelRenderer, mpsc::Receiver<ConsoleEvent>) {
    let (tx, rx) = mpsc::channel(1024);
    (ChannelRenderer::new(tx), rx)
}

pub fn drain(rx: &mut mpsc::Receiver<ConsoleEvent>) -> Vec<ConsoleEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
