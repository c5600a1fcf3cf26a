use anyhow::Result;
use async_trait::async_trait;

use super::ApiResponse;
use super::User;

/// Seam to the dashboard backend services the contract layer consumes.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetches the mind map document attached to a test case. The full
    /// envelope is returned so the caller can run it through the response
    /// interpreter.
    async fn query_mindmap(&self, case_id: &str) -> Result<ApiResponse>;

    /// Fetches the full user list for identity map construction.
    async fn list_users(&self) -> Result<Vec<User>>;
}

pub type ApiBox = Box<dyn DashboardApi + Send + Sync>;
