//! Terminal result of a conversation.

use serde::{Deserialize, Serialize};

/// How a conversation ended.
///
/// Returned to the host instead of exiting, so the flow stays testable.
/// Every variant is a successful end of session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The assistant handled the request itself.
    Completed,

    /// The user was handed to a human agent.
    Escalated,

    /// Input ended before the conversation finished.
    InputClosed,
}

impl SessionOutcome {
    pub fn is_escalated(&self) -> bool {
        matches!(self, Self::Escalated)
    }
}
