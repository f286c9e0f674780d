//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the conversation and the outside world. Adapters implement these ports.
//!
//! - `LineReader` - blocking source of user input lines
//! - `MessageSink` - append-only output channel
//! - `RandomSource` - uniform integer generator for reference numbers

mod console;
mod random_source;

pub use console::{ConsoleError, LineReader, MessageSink};
pub use random_source::RandomSource;
