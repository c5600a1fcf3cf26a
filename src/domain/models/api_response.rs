use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

pub const CODE_SUCCESS: i64 = 0;
pub const CODE_SESSION_INVALID: i64 = 401;

/// Envelope every dashboard backend reply arrives in. `data` only carries
/// meaning when `code` signals success.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        return self.code == CODE_SUCCESS;
    }
}
