#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiResponse;
use crate::domain::models::DashboardApi;
use crate::domain::models::User;
use crate::domain::services::SessionStore;

/// HTTP client for the dashboard backend. Every request carries the session
/// auth headers and the configured timeout.
pub struct Dashboard {
    url: String,
    timeout: String,
    session: Arc<SessionStore>,
}

impl Dashboard {
    pub fn new(session: Arc<SessionStore>) -> Dashboard {
        return Dashboard {
            url: Config::get(ConfigKey::ApiUrl),
            timeout: Config::get(ConfigKey::RequestTimeout),
            session,
        };
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let res = reqwest::Client::new()
            .get(format!("{url}{path}", url = self.url))
            .query(query)
            .headers(self.session.auth_headers(true)?)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), path = path, "Dashboard backend is not reachable");
            bail!("Dashboard backend is not reachable");
        }

        let reply = res.unwrap().json::<ApiResponse>().await;
        if reply.is_err() {
            tracing::error!(error = ?reply.unwrap_err(), path = path, "Dashboard reply is not a valid envelope");
            bail!("Dashboard reply is not a valid envelope");
        }

        return Ok(reply.unwrap());
    }
}

#[async_trait]
impl DashboardApi for Dashboard {
    async fn query_mindmap(&self, case_id: &str) -> Result<ApiResponse> {
        return self.get("/api/testcase/xmind", &[("case_id", case_id)]).await;
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let reply = self.get("/api/auth/listUser", &[]).await?;
        if !reply.is_success() {
            bail!("User listing failed: {msg}", msg = reply.msg);
        }

        let users: Vec<User> = match serde_json::from_value(reply.data) {
            Ok(users) => users,
            Err(err) => bail!("User listing payload is malformed: {err}"),
        };
        return Ok(users);
    }
}
