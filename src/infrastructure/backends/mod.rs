pub mod dashboard;

use std::sync::Arc;

use crate::domain::models::ApiBox;
use crate::domain::services::SessionStore;

pub struct BackendManager {}

impl BackendManager {
    pub fn get(session: Arc<SessionStore>) -> ApiBox {
        return Box::new(dashboard::Dashboard::new(session));
    }
}
