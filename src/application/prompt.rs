//! PromptEngine - Asks questions, re-asks on invalid answers, and routes
//! every reply through the agent interceptor first.

use crate::application::AgentInterceptor;
use crate::domain::conversation::{messages, parse_yes_no, AgentDecision, SessionState};
use crate::domain::order::OrderId;
use crate::ports::{ConsoleError, LineReader, MessageSink};

/// Result of asking the user something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// A valid answer.
    Answered(T),

    /// The user insisted on a human agent; the conversation must escalate.
    Escalated,

    /// Input ended before a valid answer arrived.
    InputClosed,
}

/// Owns the dialogue channel and runs the per-question retry loop.
///
/// Loops are unbounded: only a valid answer, an escalation or the end of
/// input returns.
pub struct PromptEngine {
    reader: Box<dyn LineReader>,
    sink: Box<dyn MessageSink>,
    interceptor: AgentInterceptor,
}

impl PromptEngine {
    pub fn new(reader: Box<dyn LineReader>, sink: Box<dyn MessageSink>) -> Self {
        Self {
            reader,
            sink,
            interceptor: AgentInterceptor::new(),
        }
    }

    /// Writes a line of output.
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.sink.write_line(text)
    }

    pub fn blank_line(&mut self) -> Result<(), ConsoleError> {
        self.sink.blank_line()
    }

    /// Asks a yes/no question. Accepts `yes`, `y`, `no`, `n` in any case.
    pub fn ask_yes_no(
        &mut self,
        session: &mut SessionState,
        prompt: &str,
    ) -> Result<Reply<bool>, ConsoleError> {
        self.ask(session, prompt, &[messages::YES_NO_RETRY], parse_yes_no)
    }

    /// Asks the user to pick one of `choices`; returns the matched choice.
    pub fn ask_choice(
        &mut self,
        session: &mut SessionState,
        prompt: &str,
        choices: &[&str],
    ) -> Result<Reply<String>, ConsoleError> {
        let retry = messages::choice_retry(choices);
        self.ask(session, prompt, &[retry.as_str()], |answer| {
            let normalized = answer.to_lowercase();
            choices
                .iter()
                .find(|choice| choice.to_lowercase() == normalized)
                .map(|choice| (*choice).to_string())
        })
    }

    /// Asks for the order id until a well-formed one is entered.
    pub fn ask_order_id(
        &mut self,
        session: &mut SessionState,
    ) -> Result<Reply<OrderId>, ConsoleError> {
        self.ask(
            session,
            messages::ORDER_ID_PROMPT,
            &[messages::INVALID_ORDER_ID, ""],
            |answer| OrderId::parse(answer).ok(),
        )
    }

    fn ask<T>(
        &mut self,
        session: &mut SessionState,
        prompt: &str,
        retry: &[&str],
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<Reply<T>, ConsoleError> {
        loop {
            self.sink.write_prompt(prompt)?;

            let Some(line) = self.reader.read_line()? else {
                tracing::warn!(session_id = %session.id(), prompt = prompt.trim(), "input closed");
                return Ok(Reply::InputClosed);
            };

            if self.interceptor.is_agent_request(&line) {
                match self.interceptor.handle_request(session, self.sink.as_mut())? {
                    AgentDecision::Escalate => return Ok(Reply::Escalated),
                    AgentDecision::SoftRedirect => continue,
                }
            }

            let answer = line.trim();
            if let Some(value) = parse(answer) {
                return Ok(Reply::Answered(value));
            }

            tracing::debug!(session_id = %session.id(), answer, "unrecognized answer");
            for text in retry {
                self.sink.write_line(text)?;
            }
        }
    }
}
