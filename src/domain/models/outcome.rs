/// Three way classification of a backend reply. `notify` records whether the
/// caller opted into a success notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success { notify: bool },
    SessionInvalid,
    Failure,
}
