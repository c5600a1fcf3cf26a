use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// One row of a decoded header or cookie document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueRow {
    pub key: String,
    pub value: Value,
}
