use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a peer in the gossip overlay.
pub type Name = String;

/// Private conversations keyed by remote peer name, as grouped by the node.
pub type Conversations = BTreeMap<Name, Vec<PrivateMessage>>;

/// Identity of the node the console is attached to (`GET /id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeIdentity {
    pub address: String,
    pub name: Name,
}

/// A publicly broadcast rumor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RumorMessage {
    pub origin: Name,
    pub text: String,
}

/// One message of a private conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateMessage {
    pub origin: Name,
    pub text: String,
}

/// `{ "Rumor": {..}, "Timestamp": .. }` entry of `GET /message`.
#[derive(Debug, Clone, Deserialize)]
pub struct RumorEntry {
    #[serde(rename = "Rumor")]
    pub rumor: RumorMessage,
}

/// `{ "Private": {..}, "Timestamp": .. }` entry of `GET /private`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateEntry {
    #[serde(rename = "Private")]
    pub private: PrivateMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    pub meta_hash: String,
    pub file_name: String,
}

/// Converts the node's `metaHash -> fileName` map into rows ordered by hash.
pub fn indexed_files_from_map(map: BTreeMap<String, String>) -> Vec<IndexedFile> {
    map.into_iter()
        .map(|(meta_hash, file_name)| IndexedFile {
            meta_hash,
            file_name,
        })
        .collect()
}

/// A peer endpoint that passed IP and port validation.
///
/// Built through [`PeerAddress::parse`]; sent to the node as `"ip:port"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerAddress {
    pub(crate) ip: String,
    pub(crate) port: String,
}

impl PeerAddress {
    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn port(&self) -> &str {
        &self.port
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// A 64 hex character content hash that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaHash(pub(crate) String);

impl MetaHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetaHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a known peer entry (`"ip:port"`) into its two display columns.
pub fn split_endpoint(entry: &str) -> (&str, &str) {
    entry.split_once(':').unwrap_or((entry, ""))
}

// ========== Request bodies ==========

/// Body of `POST /message`, `POST /node` and `POST /fileIndexing`.
#[derive(Debug, Clone, Serialize)]
pub struct TextBody<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
}

/// Body of `POST /private`.
#[derive(Debug, Clone, Serialize)]
pub struct PrivateBody<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
    #[serde(rename = "Peer")]
    pub peer: &'a str,
}

/// Body of `POST /fileRequesting`.
#[derive(Debug, Clone, Serialize)]
pub struct FileRequestBody<'a> {
    #[serde(rename = "FileName")]
    pub file_name: &'a str,
    #[serde(rename = "Request")]
    pub request: &'a str,
    #[serde(rename = "Dest")]
    pub dest: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rumor_entries_ignoring_extra_fields() {
        let body = r#"[
            {"Rumor": {"Origin": "alice", "ID": 1, "Text": "hi"}, "Timestamp": "2018-11-02T10:00:00Z"},
            {"Rumor": {"Origin": "bob", "ID": 4, "Text": "hey"}, "Timestamp": "2018-11-02T10:00:01Z"}
        ]"#;
        let entries: Vec<RumorEntry> = serde_json::from_str(body).unwrap();
        let rumors: Vec<RumorMessage> = entries.into_iter().map(|e| e.rumor).collect();
        assert_eq!(rumors[0].origin, "alice");
        assert_eq!(rumors[1].text, "hey");
    }

    #[test]
    fn decodes_private_map() {
        let body = r#"{
            "bob": [{"Private": {"Origin": "bob", "ID": 0, "Text": "yo", "Destination": "me", "HopLimit": 9}}],
            "carol": []
        }"#;
        let map: BTreeMap<Name, Vec<PrivateEntry>> = serde_json::from_str(body).unwrap();
        assert_eq!(map["bob"][0].private.text, "yo");
        assert!(map["carol"].is_empty());
    }

    #[test]
    fn indexed_files_are_ordered_by_hash() {
        let mut map = BTreeMap::new();
        map.insert("ff".to_string(), "b.txt".to_string());
        map.insert("0a".to_string(), "a.txt".to_string());
        let files = indexed_files_from_map(map);
        assert_eq!(files[0].file_name, "a.txt");
        assert_eq!(files[1].meta_hash, "ff");
    }

    #[test]
    fn request_bodies_use_node_field_names() {
        let body = FileRequestBody {
            file_name: "a.txt",
            request: "00",
            dest: "bob",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"FileName":"a.txt","Request":"00","Dest":"bob"}"#
        );
        let body = PrivateBody {
            text: "hi",
            peer: "bob",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"Text":"hi","Peer":"bob"}"#
        );
    }

    #[test]
    fn endpoint_splits_on_first_colon() {
        assert_eq!(split_endpoint("127.0.0.1:5001"), ("127.0.0.1", "5001"));
        assert_eq!(split_endpoint("garbage"), ("garbage", ""));
    }
}
