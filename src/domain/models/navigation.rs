use serde::Deserialize;
use serde::Serialize;

/// Route the forced re-login lands on.
pub const LOGIN_PATH: &str = "/user/login";

/// Resolves the location the consumer currently shows, used as the post
/// login redirect target.
pub trait Location: Send + Sync {
    fn current_url(&self) -> String;
}

/// Fixed location, enough for consumers that track their own URL.
pub struct StaticLocation {
    pub url: String,
}

impl Location for StaticLocation {
    fn current_url(&self) -> String {
        return self.url.clone();
    }
}

/// Navigation command handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationCommand {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavigationCommand {
    /// Forced re-login carrying the interrupted location as the redirect
    /// target.
    pub fn login_redirect(current_url: &str) -> NavigationCommand {
        return NavigationCommand {
            path: LOGIN_PATH.to_string(),
            query: vec![("redirect".to_string(), current_url.to_string())],
        };
    }
}
