use super::types::{MetaHash, Name, PeerAddress};

/// Requests the UI sends down to the network task.
///
/// Write variants only carry input that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Broadcast a rumor, then refresh public messages.
    SendPublic { text: String },
    /// Send a private message, then refresh private messages.
    SendPrivate { text: String, peer: Name },
    /// Register a new peer endpoint, then refresh the peer list.
    AddPeer(PeerAddress),
    /// Download a file by metahash from `dest` (empty when no peer is chosen).
    RequestFile {
        file_name: String,
        hash: MetaHash,
        dest: String,
    },
    /// Index a file from the node's shared directory.
    IndexFile { file_name: String },
    /// Re-fetch private messages outside the polling cadence.
    RefreshPrivate,
}
