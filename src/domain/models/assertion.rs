use serde::Deserialize;
use serde::Serialize;

/// Message payload of an assertion entry. A single step may report one
/// message or a whole list sharing the same verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssertMessage {
    Single(String),
    Many(Vec<String>),
}

/// One named check inside a record's assertion document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertEntry {
    pub status: bool,
    pub msg: AssertMessage,
}

/// Display row derived from an assertion entry, one per message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    pub status: bool,
    pub msg: String,
}
