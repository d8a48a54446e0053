//! Submit handlers: turn form input into a [`ConsoleCommand`] or refuse it.
//!
//! A refused submission never reaches the network task and leaves every
//! field as typed, so the user can correct it.

use thiserror::Error;

use crate::common::{ConsoleCommand, MetaHash, PeerAddress};
use crate::validation::ValidationError;

use super::selection::SelectionState;

/// What the combined send form does on submit; exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendMode {
    #[default]
    Public,
    Private,
    FileRequest,
}

/// Input controls that can receive focus after a refused submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MessageText,
    Destination,
    FileName,
    Hash,
    PeerIp,
    PeerPort,
    IndexFileName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct InputError {
    pub field: Field,
    pub error: ValidationError,
}

impl InputError {
    fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendForm {
    pub mode: SendMode,
    pub text: String,
    pub file_name: String,
    pub hash: String,
}

impl SendForm {
    pub fn submit(&self, selection: &SelectionState) -> Result<ConsoleCommand, InputError> {
        if self.text.is_empty() && self.mode != SendMode::FileRequest {
            return Err(InputError::new(
                Field::MessageText,
                ValidationError::EmptyMessage,
            ));
        }

        match self.mode {
            SendMode::Public => Ok(ConsoleCommand::SendPublic {
                text: self.text.clone(),
            }),
            SendMode::Private => {
                let peer = selection.destination_peer().ok_or_else(|| {
                    InputError::new(Field::Destination, ValidationError::NoDestination)
                })?;
                Ok(ConsoleCommand::SendPrivate {
                    text: self.text.clone(),
                    peer: peer.clone(),
                })
            }
            SendMode::FileRequest => {
                if self.file_name.is_empty() {
                    return Err(InputError::new(
                        Field::FileName,
                        ValidationError::EmptyFileName,
                    ));
                }
                let hash =
                    MetaHash::parse(&self.hash).map_err(|err| InputError::new(Field::Hash, err))?;
                Ok(ConsoleCommand::RequestFile {
                    file_name: self.file_name.clone(),
                    hash,
                    dest: selection.destination_peer().cloned().unwrap_or_default(),
                })
            }
        }
    }

    /// Clears what a successful submission consumed; the mode is kept.
    pub fn reset(&mut self) {
        self.text.clear();
        self.file_name.clear();
        self.hash.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerForm {
    pub ip: String,
    pub port: String,
}

impl PeerForm {
    pub fn submit(&self) -> Result<ConsoleCommand, InputError> {
        PeerAddress::parse(&self.ip, &self.port)
            .map(ConsoleCommand::AddPeer)
            .map_err(|error| {
                let field = match error {
                    ValidationError::InvalidPort(_) => Field::PeerPort,
                    ValidationError::EmptyEndpoint if !self.ip.is_empty() => Field::PeerPort,
                    _ => Field::PeerIp,
                };
                InputError::new(field, error)
            })
    }

    pub fn reset(&mut self) {
        self.ip.clear();
        self.port.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexForm {
    pub file_name: String,
}

impl IndexForm {
    pub fn submit(&self) -> Result<ConsoleCommand, InputError> {
        if self.file_name.is_empty() {
            return Err(InputError::new(
                Field::IndexFileName,
                ValidationError::NoFileToIndex,
            ));
        }
        Ok(ConsoleCommand::IndexFile {
            file_name: self.file_name.clone(),
        })
    }

    pub fn reset(&mut self) {
        self.file_name.clear();
    }
}
