//! AgentInterceptor - Detects agent requests at any prompt and applies the
//! retain-once-then-escalate policy.

use crate::domain::conversation::{is_agent_request, messages, AgentDecision, SessionState};
use crate::ports::{ConsoleError, MessageSink};

/// Stateless policy object; the one piece of state lives in [`SessionState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentInterceptor;

impl AgentInterceptor {
    pub fn new() -> Self {
        Self
    }

    /// Returns true if `text` is one of the agent phrases.
    pub fn is_agent_request(&self, text: &str) -> bool {
        is_agent_request(text)
    }

    /// Decides how to answer an agent request.
    ///
    /// The first request in a session writes the retention message and
    /// returns `SoftRedirect`; the caller re-asks the same question. Any later
    /// request returns `Escalate` without writing anything.
    pub fn handle_request(
        &self,
        session: &mut SessionState,
        sink: &mut dyn MessageSink,
    ) -> Result<AgentDecision, ConsoleError> {
        let decision = session.record_agent_request();
        match decision {
            AgentDecision::SoftRedirect => {
                tracing::info!(session_id = %session.id(), "agent requested, offering help first");
                sink.blank_line()?;
                for line in messages::RETENTION {
                    sink.write_line(line)?;
                }
                sink.blank_line()?;
            }
            AgentDecision::Escalate => {
                tracing::info!(session_id = %session.id(), "agent requested again, escalating");
            }
        }
        Ok(decision)
    }
}
