use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::common::{
    ConsoleEvent, Conversations, IndexedFile, Name, NodeIdentity, Resource, RumorMessage,
};

/// Presentation seam: one method per resource kind.
///
/// Every call replaces the whole view of its resource. Calls wait while the
/// presentation side is busy instead of dropping the update.
#[async_trait]
pub trait RenderPort: Send + Sync {
    async fn render_identity(&self, identity: NodeIdentity);
    async fn render_messages(&self, rumors: Vec<RumorMessage>);
    async fn render_private(&self, conversations: Conversations);
    async fn render_peers(&self, peers: Vec<String>);
    async fn render_names(&self, names: Vec<Name>);
    async fn render_files(&self, files: Vec<IndexedFile>);
    /// Blocking user-facing notice.
    async fn notify(&self, message: String);
    /// Latest request outcome for `resource`; `None` means it succeeded.
    async fn report(&self, resource: Resource, error: Option<String>);
}

/// Forwards renders to the UI thread as [`ConsoleEvent`]s.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    sender: mpsc::Sender<ConsoleEvent>,
}

impl ChannelRenderer {
    pub fn new(sender: mpsc::Sender<ConsoleEvent>) -> Self {
        Self { sender }
    }

    /// Waits for room in the channel; only fails once the UI is gone.
    async fn emit(&self, event: ConsoleEvent) {
        if let Err(err) = self.sender.send(event).await {
            log::warn!("Failed to deliver event to UI: {err}");
        }
    }
}

#[async_trait]
impl RenderPort for ChannelRenderer {
    async fn render_identity(&self, identity: NodeIdentity) {
        self.emit(ConsoleEvent::Identity(identity)).await;
    }

    async fn render_messages(&self, rumors: Vec<RumorMessage>) {
        self.emit(ConsoleEvent::Messages(rumors)).await;
    }

    async fn render_private(&self, conversations: Conversations) {
        self.emit(ConsoleEvent::Private(conversations)).await;
    }

    async fn render_peers(&self, peers: Vec<String>) {
        self.emit(ConsoleEvent::Peers(peers)).await;
    }

    async fn render_names(&self, names: Vec<Name>) {
        self.emit(ConsoleEvent::Names(names)).await;
    }

    async fn render_files(&self, files: Vec<IndexedFile>) {
        self.emit(ConsoleEvent::Files(files)).await;
    }

    async fn notify(&self, message: String) {
        self.emit(ConsoleEvent::Notice(message)).await;
    }

    async fn report(&self, resource: Resource, error: Option<String>) {
        self.emit(ConsoleEvent::Status { resource, error }).await;
    }
}
