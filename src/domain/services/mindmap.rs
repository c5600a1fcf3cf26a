#[cfg(test)]
#[path = "mindmap_test.rs"]
mod tests;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tokio::task;

use crate::domain::models::ApiBox;
use crate::domain::models::Event;
use crate::domain::models::TestExecutionRecord;

use super::ResponseInterpreter;

/// Fetches the mind map document enriching the record currently on display.
/// `present` is the trigger: the consumer calls it whenever the displayed
/// record changes identity. There is no caching across cases, every
/// presentation re-fetches.
pub struct MindMapLoader {
    client: Arc<ApiBox>,
    interpreter: Arc<ResponseInterpreter>,
    events: mpsc::UnboundedSender<Event>,
    generation: Arc<AtomicU64>,
    data: Arc<RwLock<Option<Value>>>,
}

impl MindMapLoader {
    pub fn new(
        client: Arc<ApiBox>,
        interpreter: Arc<ResponseInterpreter>,
        events: mpsc::UnboundedSender<Event>,
    ) -> MindMapLoader {
        return MindMapLoader {
            client,
            interpreter,
            events,
            generation: Arc::new(AtomicU64::new(0)),
            data: Arc::new(RwLock::new(None)),
        };
    }

    /// Kicks off the fetch for the record's case, if it names one. Returns
    /// the task handle so callers that care can await completion; dropping
    /// it keeps the fetch fire and forget. A fetch superseded by a newer
    /// `present` call discards its result instead of overwriting the newer
    /// state.
    pub fn present(&self, record: &TestExecutionRecord) -> Option<task::JoinHandle<Result<bool>>> {
        let case_id = match record.case_id.clone() {
            Some(case_id) => case_id,
            None => return None,
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let client = Arc::clone(&self.client);
        let interpreter = Arc::clone(&self.interpreter);
        let events = self.events.clone();
        let latest = Arc::clone(&self.generation);
        let data = Arc::clone(&self.data);

        return Some(task::spawn(async move {
            let reply = match client.query_mindmap(&case_id).await {
                Ok(reply) => Some(reply),
                Err(err) => {
                    tracing::error!(error = ?err, case_id = case_id.as_str(), "Mind map fetch failed");
                    None
                }
            };

            let proceed = interpreter.handle(reply.as_ref(), false)?;
            let reply = match reply {
                Some(reply) if proceed => reply,
                _ => return Ok(false),
            };

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(case_id = case_id.as_str(), "Discarding a superseded mind map fetch");
                return Ok(false);
            }

            *data.write().await = Some(reply.data.clone());
            events.send(Event::MindMapData(reply.data))?;
            return Ok(true);
        }));
    }

    /// Last stored mind map payload.
    pub async fn data(&self) -> Option<Value> {
        return self.data.read().await.clone();
    }
}
