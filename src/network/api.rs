use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::common::types::{
    FileRequestBody, PrivateBody, PrivateEntry, RumorEntry, TextBody, indexed_files_from_map,
};
use crate::common::{Conversations, IndexedFile, Name, NodeIdentity, RumorMessage};

pub const ID_PATH: &str = "/id";
pub const MESSAGE_PATH: &str = "/message";
pub const PRIVATE_PATH: &str = "/private";
pub const NODE_PATH: &str = "/node";
pub const NAME_PATH: &str = "/name";
pub const FILE_INDEXING_PATH: &str = "/fileIndexing";
pub const FILE_REQUESTING_PATH: &str = "/fileRequesting";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} answered with status {status}")]
    Status {
        path: &'static str,
        status: StatusCode,
    },
    #[error("malformed response from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The node's HTTP control API.
///
/// Reads return whole collections; writes return once the node accepted the
/// request, which does not mean the effect is visible to the next read.
#[async_trait]
pub trait ControlApi: Send + Sync {
    async fn identity(&self) -> Result<NodeIdentity, ApiError>;

    /// Rumors in the order the node delivered them.
    async fn messages(&self) -> Result<Vec<RumorMessage>, ApiError>;

    async fn send_message(&self, text: &str) -> Result<(), ApiError>;

    async fn private_messages(&self) -> Result<Conversations, ApiError>;

    async fn send_private(&self, text: &str, peer: &str) -> Result<(), ApiError>;

    /// Known peer endpoints as raw `"ip:port"` strings.
    async fn peers(&self) -> Result<Vec<String>, ApiError>;

    async fn add_peer(&self, endpoint: &str) -> Result<(), ApiError>;

    /// Known peer names, order-significant.
    async fn names(&self) -> Result<Vec<Name>, ApiError>;

    async fn indexed_files(&self) -> Result<Vec<IndexedFile>, ApiError>;

    /// Indexes `file_name` and returns the updated index.
    async fn index_file(&self, file_name: &str) -> Result<Vec<IndexedFile>, ApiError>;

    /// Downloads a file and returns the updated index once the node is done.
    async fn request_file(
        &self,
        file_name: &str,
        hash: &str,
        dest: &str,
    ) -> Result<Vec<IndexedFile>, ApiError>;
}

/// [`ControlApi`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpControlApi {
    client: Client,
    base_url: String,
}

impl HttpControlApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;
        decode_body(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;
        ensure_success(path, response)
    }
}

fn ensure_success(path: &'static str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { path, status })
    }
}

async fn decode_body<T: DeserializeOwned>(
    path: &'static str,
    response: Response,
) -> Result<T, ApiError> {
    let response = ensure_success(path, response)?;
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport { path, source })?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { path, source })
}

#[async_trait]
impl ControlApi for HttpControlApi {
    async fn identity(&self) -> Result<NodeIdentity, ApiError> {
        self.get_json(ID_PATH).await
    }

    async fn messages(&self) -> Result<Vec<RumorMessage>, ApiError> {
        let entries: Vec<RumorEntry> = self.get_json(MESSAGE_PATH).await?;
        Ok(entries.into_iter().map(|entry| entry.rumor).collect())
    }

    async fn send_message(&self, text: &str) -> Result<(), ApiError> {
        self.post_json(MESSAGE_PATH, &TextBody { text }).await?;
        Ok(())
    }

    async fn private_messages(&self) -> Result<Conversations, ApiError> {
        let grouped: BTreeMap<Name, Vec<PrivateEntry>> = self.get_json(PRIVATE_PATH).await?;
        Ok(grouped
            .into_iter()
            .map(|(peer, entries)| {
                (
                    peer,
                    entries.into_iter().map(|entry| entry.private).collect(),
                )
            })
            .collect())
    }

    async fn send_private(&self, text: &str, peer: &str) -> Result<(), ApiError> {
        self.post_json(PRIVATE_PATH, &PrivateBody { text, peer })
            .await?;
        Ok(())
    }

    async fn peers(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(NODE_PATH).await
    }

    async fn add_peer(&self, endpoint: &str) -> Result<(), ApiError> {
        self.post_json(NODE_PATH, &TextBody { text: endpoint })
            .await?;
        Ok(())
    }

    async fn names(&self) -> Result<Vec<Name>, ApiError> {
        self.get_json(NAME_PATH).await
    }

    async fn indexed_files(&self) -> Result<Vec<IndexedFile>, ApiError> {
        let map: BTreeMap<String, String> = self.get_json(FILE_INDEXING_PATH).await?;
        Ok(indexed_files_from_map(map))
    }

    async fn index_file(&self, file_name: &str) -> Result<Vec<IndexedFile>, ApiError> {
        let response = self
            .post_json(FILE_INDEXING_PATH, &TextBody { text: file_name })
            .await?;
        let map: BTreeMap<String, String> = decode_body(FILE_INDEXING_PATH, response).await?;
        Ok(indexed_files_from_map(map))
    }

    async fn request_file(
        &self,
        file_name: &str,
        hash: &str,
        dest: &str,
    ) -> Result<Vec<IndexedFile>, ApiError> {
        let body = FileRequestBody {
            file_name,
            request: hash,
            dest,
        };
        let response = self.post_json(FILE_REQUESTING_PATH, &body).await?;
        let map: BTreeMap<String, String> = decode_body(FILE_REQUESTING_PATH, response).await?;
        Ok(indexed_files_from_map(map))
    }
}
