//! Per-conversation mutable state.

use crate::domain::foundation::SessionId;

/// Agent phrases recognised at every prompt, compared after trimming and
/// lowercasing.
pub const AGENT_PHRASES: [&str; 4] = ["agent", "representative", "human", "speak to agent"];

/// Returns true if `text` asks for a human agent.
pub fn is_agent_request(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    AGENT_PHRASES.contains(&normalized.as_str())
}

/// What to do with a detected agent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentDecision {
    /// First request this session: try once to keep the user, then re-ask.
    SoftRedirect,

    /// Hand the session to a human agent.
    Escalate,
}

/// State shared by every prompt in one conversation.
///
/// The agent flag is session-wide: once a soft redirect has been given at
/// any prompt, the next agent request anywhere escalates.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    id: SessionId,
    agent_requested_once: bool,
}

impl SessionState {
    /// Starts a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns true once a soft redirect has been issued.
    pub fn agent_requested_once(&self) -> bool {
        self.agent_requested_once
    }

    /// Records an agent request and decides how to answer it.
    ///
    /// The flag flips on the first call and is never reset.
    pub fn record_agent_request(&mut self) -> AgentDecision {
        if self.agent_requested_once {
            AgentDecision::Escalate
        } else {
            self.agent_requested_once = true;
            AgentDecision::SoftRedirect
        }
    }
}
