//! Order domain module.
//!
//! Validates raw order identifiers and derives the shipping status
//! the conversation branches on.

mod order_id;
mod status;

pub use order_id::OrderId;
pub use status::OrderStatus;
