//! Adapters - Implementations of port interfaces.
//!
//! - `console` - stdin/stdout dialogue channel
//! - `random` - reference number randomness
//! - `scripted` - in-memory console for tests and demos

pub mod console;
pub mod random;
pub mod scripted;

pub use console::{ConsoleReader, ConsoleWriter};
pub use random::{SequenceRandomSource, StdRandomSource};
pub use scripted::{Output, RecordingSink, ScriptedReader};
