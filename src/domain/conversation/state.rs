//! Conversation state machine.
//!
//! Defines the stages of a support conversation and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::order::OrderStatus;

/// The stage a conversation is in.
///
/// - `CollectingOrderId`: asking for and validating the order id
/// - `PossiblyLostMenu`: offering investigation, refund or an agent
/// - `StatusFollowUp`: reporting status and asking if more help is needed
/// - `Closed`: goodbye said, no more input accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    CollectingOrderId,

    PossiblyLostMenu,

    StatusFollowUp,

    Closed,
}

impl ConversationState {
    /// The stage that follows a successful status lookup.
    pub fn branch_for(status: OrderStatus) -> Self {
        if status.offers_remediation() {
            Self::PossiblyLostMenu
        } else {
            Self::StatusFollowUp
        }
    }
}

impl StateMachine for ConversationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            (CollectingOrderId, PossiblyLostMenu) |
            (CollectingOrderId, StatusFollowUp) |
            // Escalation or end of input before an order id was given
            (CollectingOrderId, Closed) |
            (PossiblyLostMenu, Closed) |
            (StatusFollowUp, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            CollectingOrderId => vec![PossiblyLostMenu, StatusFollowUp, Closed],
            PossiblyLostMenu => vec![Closed],
            StatusFollowUp => vec![Closed],
            Closed => vec![],
        }
    }
}
