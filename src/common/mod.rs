pub mod commands;
pub mod events;
pub mod types;

pub use commands::ConsoleCommand;
pub use events::{ConsoleEvent, Resource};
pub use types::{
    Conversations, IndexedFile, MetaHash, Name, NodeIdentity, PeerAddress, PrivateMessage,
    RumorMessage,
};
