#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use dashmap::DashMap;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DashboardApi;
use crate::domain::models::User;

const TOKEN_KEY: &str = "token";

/// Persistence seam for the session token.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keeps the token for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryTokenStorage {
    cache: DashMap<String, String>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        return Ok(self.cache.get(TOKEN_KEY).map(|e| return e.value().to_string()));
    }

    fn save(&self, token: &str) -> Result<()> {
        self.cache.insert(TOKEN_KEY.to_string(), token.to_string());
        return Ok(());
    }

    fn clear(&self) -> Result<()> {
        self.cache.remove(TOKEN_KEY);
        return Ok(());
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    token: Option<String>,
}

/// Mirrors the token into a JSON file so a restarted client resumes its
/// session.
pub struct FileTokenStorage {
    pub file_path: PathBuf,
}

impl Default for FileTokenStorage {
    fn default() -> FileTokenStorage {
        return FileTokenStorage {
            file_path: PathBuf::from(Config::get(ConfigKey::TokenFile)),
        };
    }
}

impl FileTokenStorage {
    pub fn new(file_path: PathBuf) -> FileTokenStorage {
        return FileTokenStorage { file_path };
    }

    fn read(&self) -> Result<PersistedSession> {
        if !self.file_path.exists() {
            return Ok(PersistedSession::default());
        }

        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(self.file_path.clone())?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let session: PersistedSession = serde_json::from_str(&contents)?;
        return Ok(session);
    }

    fn write(&self, session: &PersistedSession) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(self.file_path.clone())?;

        let text = serde_json::to_string(session)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        return Ok(());
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<String>> {
        return Ok(self.read()?.token);
    }

    fn save(&self, token: &str) -> Result<()> {
        return self.write(&PersistedSession {
            token: Some(token.to_string()),
        });
    }

    fn clear(&self) -> Result<()> {
        return self.write(&PersistedSession { token: None });
    }
}

/// Holder of the current session token and the cached user identity map.
/// Besides the external login flow, the response interpreter is the only
/// writer.
pub struct SessionStore {
    token: DashMap<String, String>,
    users: DashMap<i64, User>,
    storage: Box<dyn TokenStorage>,
}

impl SessionStore {
    /// Builds a store over the given persistence and primes the in memory
    /// token from it.
    pub fn new(storage: Box<dyn TokenStorage>) -> Result<SessionStore> {
        let store = SessionStore {
            token: DashMap::new(),
            users: DashMap::new(),
            storage,
        };

        if let Some(token) = store.storage.load()? {
            store.token.insert(TOKEN_KEY.to_string(), token);
        }
        return Ok(store);
    }

    pub fn token(&self) -> Option<String> {
        return self.token.get(TOKEN_KEY).map(|e| return e.value().to_string());
    }

    /// Called by the external login flow once the backend issues a token.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.save(token)?;
        self.token.insert(TOKEN_KEY.to_string(), token.to_string());
        return Ok(());
    }

    /// Drops the token from memory and persistence. A cleared token is
    /// immediately authoritative for every subsequent read.
    pub fn clear(&self) -> Result<()> {
        self.token.remove(TOKEN_KEY);
        return self.storage.clear();
    }

    /// Request headers carrying the session token, with the JSON content
    /// type when the request ships a body.
    pub fn auth_headers(&self, json: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.token() {
            headers.insert("token", HeaderValue::from_str(&token)?);
        }
        if json {
            headers.insert("content-type", HeaderValue::from_static("application/json"));
        }
        return Ok(headers);
    }

    /// Refreshes the identity map from the user listing service and returns
    /// it. Duplicate identifiers resolve last write wins. A failed fetch
    /// serves whatever the cache already holds.
    pub async fn user_map(&self, client: &dyn DashboardApi) -> HashMap<i64, User> {
        match client.list_users().await {
            Ok(users) => {
                self.users.clear();
                for user in users {
                    self.users.insert(user.id, user);
                }
            }
            Err(err) => {
                tracing::warn!(error = ?err, "User listing failed, serving the cached identity map");
            }
        }

        return self
            .users
            .iter()
            .map(|e| return (*e.key(), e.value().clone()))
            .collect();
    }

    pub fn user(&self, id: i64) -> Option<User> {
        return self.users.get(&id).map(|e| return e.value().clone());
    }
}
