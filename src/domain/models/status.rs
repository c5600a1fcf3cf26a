pub const COLOR_SUCCESS: &str = "#67C23A";
pub const COLOR_ERROR: &str = "#F56C6C";

/// Badge styling for the HTTP status code of a run. Unknown codes keep the
/// error color so the badge never renders unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub color: &'static str,
    pub text: &'static str,
}
