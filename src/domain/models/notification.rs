use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Notification request handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub placement: Option<Placement>,
}

/// How interpreter messages surface: a transient inline message, or a
/// notification banner pinned to a corner. The variant only changes how a
/// message is shown, never what the interpreter decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Inline,
    Banner(Placement),
}

impl Surface {
    pub fn placement(&self) -> Option<Placement> {
        return match self {
            Surface::Inline => None,
            Surface::Banner(placement) => Some(*placement),
        };
    }
}
