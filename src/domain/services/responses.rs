#[cfg(test)]
#[path = "responses_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::ApiResponse;
use crate::domain::models::Event;
use crate::domain::models::Location;
use crate::domain::models::NavigationCommand;
use crate::domain::models::Notification;
use crate::domain::models::Outcome;
use crate::domain::models::Severity;
use crate::domain::models::Surface;
use crate::domain::models::CODE_SESSION_INVALID;
use crate::domain::models::CODE_SUCCESS;

use super::SessionStore;

/// Shown when the backend could not be reached at all.
pub const SERVICE_UNAVAILABLE_MSG: &str = "Service is unavailable, please try again later";

/// Classifies backend replies and performs the side effects each outcome
/// requires: notifications, session invalidation and the forced return to
/// the login view.
pub struct ResponseInterpreter {
    session: Arc<SessionStore>,
    events: mpsc::UnboundedSender<Event>,
    location: Box<dyn Location>,
    surface: Surface,
}

impl ResponseInterpreter {
    pub fn new(
        session: Arc<SessionStore>,
        events: mpsc::UnboundedSender<Event>,
        location: Box<dyn Location>,
        surface: Surface,
    ) -> ResponseInterpreter {
        return ResponseInterpreter {
            session,
            events,
            location,
            surface,
        };
    }

    /// Classifies a reply without performing any side effect. An absent
    /// reply stands for a transport failure.
    pub fn classify(reply: Option<&ApiResponse>, verbose: bool) -> Outcome {
        let reply = match reply {
            Some(reply) => reply,
            None => return Outcome::Failure,
        };

        if reply.code == CODE_SUCCESS {
            return Outcome::Success { notify: verbose };
        }
        if reply.code == CODE_SESSION_INVALID {
            return Outcome::SessionInvalid;
        }
        return Outcome::Failure;
    }

    /// Dispatches the side effects the classified outcome requires and
    /// returns whether the caller should continue with `reply.data`.
    pub fn handle(&self, reply: Option<&ApiResponse>, verbose: bool) -> Result<bool> {
        let outcome = ResponseInterpreter::classify(reply, verbose);
        match (outcome, reply) {
            (Outcome::Success { notify }, Some(reply)) => {
                if notify {
                    self.notify(Severity::Success, &reply.msg)?;
                }
                return Ok(true);
            }
            (Outcome::SessionInvalid, Some(reply)) => {
                // The token must be gone before the login view issues its
                // first request.
                self.session.clear()?;
                self.notify(Severity::Info, &reply.msg)?;

                let command = NavigationCommand::login_redirect(&self.location.current_url());
                self.events.send(Event::Navigate(command))?;
                return Ok(false);
            }
            (_, Some(reply)) => {
                self.notify(Severity::Error, &reply.msg)?;
                return Ok(false);
            }
            (_, None) => {
                self.notify(Severity::Error, SERVICE_UNAVAILABLE_MSG)?;
                return Ok(false);
            }
        }
    }

    fn notify(&self, severity: Severity, message: &str) -> Result<()> {
        self.events.send(Event::Notify(Notification {
            severity,
            message: message.to_string(),
            placement: self.surface.placement(),
        }))?;
        return Ok(());
    }
}
