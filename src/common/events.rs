use std::fmt;

use super::types::{Conversations, IndexedFile, Name, NodeIdentity, RumorMessage};

/// Resource kinds the console reads from the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Identity,
    Messages,
    Private,
    Peers,
    Names,
    Files,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Identity,
        Resource::Messages,
        Resource::Private,
        Resource::Peers,
        Resource::Names,
        Resource::Files,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Identity => "identity",
            Resource::Messages => "messages",
            Resource::Private => "private",
            Resource::Peers => "peers",
            Resource::Names => "names",
            Resource::Files => "files",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Events the network task sends up to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Identity(NodeIdentity),
    Messages(Vec<RumorMessage>),
    Private(Conversations),
    Peers(Vec<String>),
    Names(Vec<Name>),
    Files(Vec<IndexedFile>),
    /// User-facing notice, e.g. a completed download.
    Notice(String),
    /// Outcome of the latest request touching `resource`.
    Status {
        resource: Resource,
        error: Option<String>,
    },
}
