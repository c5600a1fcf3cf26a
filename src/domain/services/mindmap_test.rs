use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::sync::Notify;

use super::MindMapLoader;
use crate::domain::models::ApiBox;
use crate::domain::models::ApiResponse;
use crate::domain::models::DashboardApi;
use crate::domain::models::Event;
use crate::domain::models::Severity;
use crate::domain::models::StaticLocation;
use crate::domain::models::Surface;
use crate::domain::models::TestExecutionRecord;
use crate::domain::models::User;
use crate::domain::models::LOGIN_PATH;
use crate::domain::services::MemoryTokenStorage;
use crate::domain::services::ResponseInterpreter;
use crate::domain::services::SessionStore;
use crate::domain::services::SERVICE_UNAVAILABLE_MSG;

struct StubApi {
    replies: HashMap<String, ApiResponse>,
    gate: Option<(String, Arc<Notify>)>,
    fail: bool,
}

#[async_trait]
impl DashboardApi for StubApi {
    async fn query_mindmap(&self, case_id: &str) -> Result<ApiResponse> {
        if self.fail {
            bail!("Connection refused");
        }

        if let Some((slow_case, gate)) = &self.gate {
            if case_id == slow_case {
                gate.notified().await;
            }
        }

        return match self.replies.get(case_id) {
            Some(reply) => Ok(reply.clone()),
            None => bail!("No reply configured for {case_id}"),
        };
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        bail!("Not used in these tests");
    }
}

fn reply_with_data(data: Value) -> ApiResponse {
    return ApiResponse {
        code: 0,
        msg: "operation successful".to_string(),
        data,
    };
}

fn record_for(case_id: &str) -> TestExecutionRecord {
    return TestExecutionRecord {
        case_id: Some(case_id.to_string()),
        ..TestExecutionRecord::default()
    };
}

fn loader_with(
    stub: StubApi,
) -> Result<(
    Arc<SessionStore>,
    MindMapLoader,
    mpsc::UnboundedReceiver<Event>,
)> {
    let session = Arc::new(SessionStore::new(Box::<MemoryTokenStorage>::default())?);
    session.set_token("token123")?;

    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    let location = Box::new(StaticLocation {
        url: "http://localhost/#/report/7".to_string(),
    });
    let interpreter = Arc::new(ResponseInterpreter::new(
        Arc::clone(&session),
        tx.clone(),
        location,
        Surface::Inline,
    ));

    let client: ApiBox = Box::new(stub);
    let loader = MindMapLoader::new(Arc::new(client), interpreter, tx);
    return Ok((session, loader, rx));
}

#[tokio::test]
async fn it_loads_the_mind_map_for_a_presented_record() -> Result<()> {
    let mut replies = HashMap::new();
    replies.insert("42".to_string(), reply_with_data(json!({"name": "root"})));
    let (_session, loader, mut rx) = loader_with(StubApi {
        replies,
        gate: None,
        fail: false,
    })?;

    let handle = loader.present(&record_for("42")).unwrap();
    assert!(handle.await??);

    assert_eq!(loader.data().await, Some(json!({"name": "root"})));
    assert_eq!(rx.try_recv()?, Event::MindMapData(json!({"name": "root"})));
    return Ok(());
}

#[tokio::test]
async fn it_skips_records_without_a_case_id() -> Result<()> {
    let (_session, loader, mut rx) = loader_with(StubApi {
        replies: HashMap::new(),
        gate: None,
        fail: false,
    })?;

    assert!(loader.present(&TestExecutionRecord::default()).is_none());
    assert_eq!(loader.data().await, None);
    assert!(rx.try_recv().is_err());
    return Ok(());
}

#[tokio::test]
async fn it_discards_a_superseded_fetch() -> Result<()> {
    let gate = Arc::new(Notify::new());
    let mut replies = HashMap::new();
    replies.insert("slow".to_string(), reply_with_data(json!({"name": "slow"})));
    replies.insert("fast".to_string(), reply_with_data(json!({"name": "fast"})));
    let (_session, loader, mut rx) = loader_with(StubApi {
        replies,
        gate: Some(("slow".to_string(), Arc::clone(&gate))),
        fail: false,
    })?;

    let slow = loader.present(&record_for("slow")).unwrap();
    let fast = loader.present(&record_for("fast")).unwrap();

    assert!(fast.await??);
    gate.notify_one();
    assert!(!slow.await??);

    assert_eq!(loader.data().await, Some(json!({"name": "fast"})));
    assert_eq!(rx.try_recv()?, Event::MindMapData(json!({"name": "fast"})));
    assert!(rx.try_recv().is_err());
    return Ok(());
}

#[tokio::test]
async fn it_forces_relogin_when_the_session_expired() -> Result<()> {
    let mut replies = HashMap::new();
    replies.insert(
        "42".to_string(),
        ApiResponse {
            code: 401,
            msg: "token expired".to_string(),
            data: Value::Null,
        },
    );
    let (session, loader, mut rx) = loader_with(StubApi {
        replies,
        gate: None,
        fail: false,
    })?;

    let handle = loader.present(&record_for("42")).unwrap();
    assert!(!handle.await??);

    assert_eq!(session.token(), None);
    assert_eq!(loader.data().await, None);

    let notification = match rx.try_recv()? {
        Event::Notify(notification) => notification,
        _ => bail!("Wrong event type"),
    };
    assert_eq!(notification.severity, Severity::Info);
    assert_eq!(notification.message, "token expired");

    let command = match rx.try_recv()? {
        Event::Navigate(command) => command,
        _ => bail!("Wrong event type"),
    };
    assert_eq!(command.path, LOGIN_PATH);
    return Ok(());
}

#[tokio::test]
async fn it_reports_an_unreachable_backend() -> Result<()> {
    let (session, loader, mut rx) = loader_with(StubApi {
        replies: HashMap::new(),
        gate: None,
        fail: true,
    })?;

    let handle = loader.present(&record_for("42")).unwrap();
    assert!(!handle.await??);

    assert_eq!(session.token(), Some("token123".to_string()));
    assert_eq!(loader.data().await, None);

    let notification = match rx.try_recv()? {
        Event::Notify(notification) => notification,
        _ => bail!("Wrong event type"),
    };
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, SERVICE_UNAVAILABLE_MSG);
    assert!(rx.try_recv().is_err());
    return Ok(());
}
