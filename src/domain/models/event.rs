use serde_json::Value;

use super::NavigationCommand;
use super::Notification;

/// Outbound side effects delivered to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Notify(Notification),
    Navigate(NavigationCommand),
    MindMapData(Value),
}
