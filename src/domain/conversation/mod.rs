//! Conversation domain module.
//!
//! Stages of a support conversation, the session-wide agent request policy,
//! answer vocabularies and the assistant's wording.

mod answers;
pub mod messages;
mod outcome;
mod session;
mod state;

pub use answers::{parse_yes_no, MenuChoice};
pub use outcome::SessionOutcome;
pub use session::{is_agent_request, AgentDecision, SessionState, AGENT_PHRASES};
pub use state::ConversationState;
