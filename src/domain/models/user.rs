use serde::Deserialize;
use serde::Serialize;

/// Row of the user listing service, kept to the fields the identity map
/// needs.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: i64,
}
