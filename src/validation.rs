//! Input checks run before any write request reaches the node.
//!
//! The three predicates are pure; the `parse` constructors turn raw form
//! input into the validated types carried by [`ConsoleCommand`](crate::common::ConsoleCommand).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::common::{MetaHash, PeerAddress};

/// Lowest port a peer may listen on; well-known ports are refused.
pub const MIN_PORT: u32 = 1025;
pub const MAX_PORT: u32 = 65535;

static HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{64}$").expect("hash pattern compiles"));

/// A violated input constraint, worded for the person at the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You cannot send an empty message, write something before sending")]
    EmptyMessage,
    #[error("You have to select a peer to send a private message")]
    NoDestination,
    #[error("You need to enter a name for the file you want to download")]
    EmptyFileName,
    #[error(
        "You need to enter a valid SHA256 hash (in hex format), enter 64 hexadecimal characters string"
    )]
    InvalidHash,
    #[error("The IP address and the port fields cannot be empty")]
    EmptyEndpoint,
    #[error(
        "The IP address should have the form X.X.X.X, where each X is a number between 0 and 255 included, but was {0}"
    )]
    InvalidIpAddress(String),
    #[error("The port should be between 1025 and 65535 included, but was {0}")]
    InvalidPort(String),
    #[error("You need to enter the name of a local file to index")]
    NoFileToIndex,
}

/// Exactly 64 characters, each an ASCII hex digit of either case.
pub fn is_valid_hash(s: &str) -> bool {
    HASH_PATTERN.is_match(s)
}

/// Four dot-separated decimal octets, each in `0..=255`.
pub fn is_valid_ip_address(s: &str) -> bool {
    let segments: Vec<&str> = s.split('.').collect();
    segments.len() == 4
        && segments
            .iter()
            .all(|segment| decimal_value(segment).is_some_and(|value| value <= 255))
}

/// A decimal port in `1025..=65535`.
pub fn is_valid_port(s: &str) -> bool {
    decimal_value(s).is_some_and(|value| (MIN_PORT..=MAX_PORT).contains(&value))
}

/// Parses a non-empty run of ASCII digits; signs, spaces and overflow are refused.
fn decimal_value(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl PeerAddress {
    /// Validates the two add-peer fields in the order the form reports them.
    ///
    /// Both fields are kept as typed, leading zeros included.
    pub fn parse(ip: &str, port: &str) -> Result<Self, ValidationError> {
        if ip.is_empty() || port.is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }
        if !is_valid_ip_address(ip) {
            return Err(ValidationError::InvalidIpAddress(ip.to_string()));
        }
        if !is_valid_port(port) {
            return Err(ValidationError::InvalidPort(port.to_string()));
        }
        Ok(Self {
            ip: ip.to_string(),
            port: port.to_string(),
        })
    }
}

impl MetaHash {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if is_valid_hash(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidHash)
        }
    }
}
