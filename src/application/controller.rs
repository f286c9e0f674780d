//! ConversationController - Runs one support conversation end to end.
//!
//! ```text
//! CollectingOrderId --possibly lost--> PossiblyLostMenu --> Closed
//!                   --other status---> StatusFollowUp   --> Closed
//!                   --escalated / input closed---------------> Closed
//! ```
//!
//! Escalation and closing never exit the process; `run` returns a
//! [`SessionReport`] and the host decides what to do with it.

use serde::Serialize;

use super::{ActionHandlers, PromptEngine, Reply};
use crate::domain::conversation::{
    messages, ConversationState, MenuChoice, SessionOutcome, SessionState,
};
use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::order::{OrderId, OrderStatus};
use crate::domain::remediation::ConfirmationRecord;
use crate::ports::{ConsoleError, LineReader, MessageSink};

/// Summary of a finished conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub session_id: SessionId,
    pub order_id: Option<OrderId>,
    pub status: Option<OrderStatus>,
    pub outcome: SessionOutcome,
    pub soft_redirect_issued: bool,
    pub confirmation: Option<ConfirmationRecord>,
}

impl SessionReport {
    fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            order_id: None,
            status: None,
            outcome: SessionOutcome::Completed,
            soft_redirect_issued: false,
            confirmation: None,
        }
    }
}

/// Drives the conversation state machine.
pub struct ConversationController {
    prompts: PromptEngine,
    actions: ActionHandlers,
    session: SessionState,
    state: ConversationState,
}

impl ConversationController {
    pub fn new(
        reader: Box<dyn LineReader>,
        sink: Box<dyn MessageSink>,
        actions: ActionHandlers,
    ) -> Self {
        Self {
            prompts: PromptEngine::new(reader, sink),
            actions,
            session: SessionState::new(),
            state: ConversationState::default(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Runs the conversation to its end.
    ///
    /// # Errors
    /// Returns `ConsoleError` only if the console itself fails. Bad answers
    /// are re-asked and end of input is a normal [`SessionOutcome::InputClosed`].
    pub fn run(mut self) -> Result<SessionReport, ConsoleError> {
        let span = tracing::info_span!("conversation", session_id = %self.session.id());
        let _enter = span.enter();

        let mut report = SessionReport::new(self.session.id());
        self.prompts.say(messages::GREETING)?;

        let outcome = self.converse(&mut report)?;
        self.close(outcome)?;

        report.outcome = outcome;
        report.soft_redirect_issued = self.session.agent_requested_once();
        Ok(report)
    }

    fn converse(&mut self, report: &mut SessionReport) -> Result<SessionOutcome, ConsoleError> {
        let order_id = match self.prompts.ask_order_id(&mut self.session)? {
            Reply::Answered(order_id) => order_id,
            Reply::Escalated => return self.escalate(),
            Reply::InputClosed => return Ok(SessionOutcome::InputClosed),
        };

        let status = OrderStatus::resolve(&order_id);
        tracing::info!(order_id = %order_id, status = %status, "order status resolved");
        report.order_id = Some(order_id.clone());
        report.status = Some(status);

        self.transition(ConversationState::branch_for(status))?;
        self.prompts.blank_line()?;

        match status {
            OrderStatus::PossiblyLost => self.possibly_lost_menu(&order_id, report),
            OrderStatus::InTransit | OrderStatus::OutForDelivery => {
                self.status_follow_up(status)
            }
            OrderStatus::Delivered => self.delivered_follow_up(),
        }
    }

    fn possibly_lost_menu(
        &mut self,
        order_id: &OrderId,
        report: &mut SessionReport,
    ) -> Result<SessionOutcome, ConsoleError> {
        self.prompts.say(messages::POSSIBLY_LOST_INTRO)?;
        for choice in MenuChoice::ALL {
            self.prompts
                .say(&format!("{}. {}", choice.key(), choice.description()))?;
        }

        let keys = MenuChoice::keys();
        let key = match self
            .prompts
            .ask_choice(&mut self.session, messages::MENU_PROMPT, &keys)?
        {
            Reply::Answered(key) => key,
            Reply::Escalated => return self.escalate(),
            Reply::InputClosed => return Ok(SessionOutcome::InputClosed),
        };

        let record = match MenuChoice::parse_key(&key)? {
            MenuChoice::FileInvestigation => self.actions.file_investigation(order_id),
            MenuChoice::RequestRefund => self.actions.request_refund(order_id),
            // An explicit menu pick is a final decision: no soft redirect,
            // and the session's agent flag is left untouched.
            MenuChoice::SpeakToAgent => return self.escalate(),
        };

        self.prompts.blank_line()?;
        self.prompts.say(record.kind.announcement())?;
        self.prompts.blank_line()?;
        for line in record.render_lines() {
            self.prompts.say(&line)?;
        }
        report.confirmation = Some(record);
        Ok(SessionOutcome::Completed)
    }

    fn status_follow_up(&mut self, status: OrderStatus) -> Result<SessionOutcome, ConsoleError> {
        if let Some(line) = status.status_line() {
            self.prompts.say(line)?;
        }

        match self
            .prompts
            .ask_yes_no(&mut self.session, messages::ANYTHING_ELSE_PROMPT)?
        {
            Reply::Answered(true) => {
                self.prompts.blank_line()?;
                self.prompts.say(messages::SORRY)?;
                self.offer_agent()
            }
            Reply::Answered(false) => Ok(SessionOutcome::Completed),
            Reply::Escalated => self.escalate(),
            Reply::InputClosed => Ok(SessionOutcome::InputClosed),
        }
    }

    fn delivered_follow_up(&mut self) -> Result<SessionOutcome, ConsoleError> {
        match self
            .prompts
            .ask_yes_no(&mut self.session, messages::RECEIVED_PROMPT)?
        {
            Reply::Answered(true) => {
                self.prompts.blank_line()?;
                for line in messages::SATISFIED {
                    self.prompts.say(line)?;
                }
                Ok(SessionOutcome::Completed)
            }
            Reply::Answered(false) => {
                self.prompts.blank_line()?;
                self.prompts.say(messages::SORRY)?;
                self.offer_agent()
            }
            Reply::Escalated => self.escalate(),
            Reply::InputClosed => Ok(SessionOutcome::InputClosed),
        }
    }

    fn offer_agent(&mut self) -> Result<SessionOutcome, ConsoleError> {
        match self
            .prompts
            .ask_yes_no(&mut self.session, messages::AGENT_OFFER_PROMPT)?
        {
            Reply::Answered(true) | Reply::Escalated => self.escalate(),
            Reply::Answered(false) => {
                self.prompts.blank_line()?;
                self.prompts.say(messages::REACH_OUT)?;
                Ok(SessionOutcome::Completed)
            }
            Reply::InputClosed => Ok(SessionOutcome::InputClosed),
        }
    }

    fn escalate(&mut self) -> Result<SessionOutcome, ConsoleError> {
        tracing::info!(state = ?self.state, "escalating to a human agent");
        self.prompts.blank_line()?;
        for line in messages::ESCALATION {
            self.prompts.say(line)?;
        }
        Ok(SessionOutcome::Escalated)
    }

    fn close(&mut self, outcome: SessionOutcome) -> Result<(), ConsoleError> {
        self.transition(ConversationState::Closed)?;
        tracing::info!(outcome = ?outcome, "conversation closed");
        self.prompts.say(messages::GOODBYE)
    }

    fn transition(&mut self, target: ConversationState) -> Result<(), ConsoleError> {
        let from = self.state;
        self.state = from.transition_to(target)?;
        tracing::debug!(from = ?from, to = ?self.state, "conversation state changed");
        Ok(())
    }
}
