//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, IDs, state machine trait)
//! - `order` - Order id validation and status lookup
//! - `conversation` - Conversation stages, agent request policy, wording
//! - `remediation` - Reference numbers and confirmation records

pub mod conversation;
pub mod foundation;
pub mod order;
pub mod remediation;
