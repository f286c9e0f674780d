//! Application layer - Orchestrates the conversation.
//!
//! Coordinates domain rules with the console and randomness ports:
//! - `interceptor` - agent request policy at every prompt
//! - `prompt` - question/answer loops
//! - `actions` - investigation and refund requests
//! - `controller` - the end-to-end conversation

mod actions;
mod controller;
mod interceptor;
mod prompt;

pub use actions::ActionHandlers;
pub use controller::{ConversationController, SessionReport};
pub use interceptor::AgentInterceptor;
pub use prompt::{PromptEngine, Reply};
