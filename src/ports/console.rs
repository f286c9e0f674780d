//! Console ports - Interfaces for the line-based dialogue channel.
//!
//! The conversation only needs two things from the outside world: a source
//! of single lines of user input and an append-only sink for text. Keeping
//! them behind traits lets tests drive whole sessions from a script.

use crate::domain::foundation::ValidationError;

/// Errors that can occur while running a conversation over a console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversation flow error: {0}")]
    InvalidTransition(#[from] ValidationError),
}

/// Port for reading user replies one line at a time.
pub trait LineReader {
    /// Blocks until the user submits a line.
    ///
    /// # Returns
    /// The line without its trailing newline, or `None` at end of input.
    ///
    /// # Errors
    /// Returns `ConsoleError::Io` if the underlying channel fails.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;
}

/// Port for writing assistant output.
pub trait MessageSink {
    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes `text` without a newline and makes it visible immediately,
    /// so the user types their answer on the same line.
    fn write_prompt(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes an empty line.
    fn blank_line(&mut self) -> Result<(), ConsoleError> {
        self.write_line("")
    }
}
