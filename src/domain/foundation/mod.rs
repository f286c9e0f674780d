//! Foundation module - Shared domain primitives.
//!
//! Contains the error type, identifiers and the state machine trait
//! that the rest of the assistant's domain is built from.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use state_machine::StateMachine;
