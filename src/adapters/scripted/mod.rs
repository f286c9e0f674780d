//! Scripted console adapters for tests and demos.
//!
//! Provides in-memory implementations of the console ports, allowing whole
//! conversations to run without a terminal.
//!
//! # Features
//!
//! - Pre-configured replies consumed in order
//! - End of input once the script runs out
//! - Read counting, so tests can bound the number of prompt iterations
//! - Output capture for transcript assertions
//!
//! Handles are cheap to clone and share their state, so a test can keep one
//! copy after handing the other to the controller.
//!
//! # Example
//!
//! ```ignore
//! let reader = ScriptedReader::new(["1234567891", "no"]);
//! let sink = RecordingSink::new();
//! let report = ConversationController::new(reader.clone(), sink.clone(), ..).run()?;
//! assert!(sink.text().contains("currently on the way"));
//! assert_eq!(reader.reads(), 2);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ConsoleError, LineReader, MessageSink};

/// Line reader that replays a fixed script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    lines: Arc<Mutex<VecDeque<String>>>,
    reads: Arc<Mutex<usize>>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            reads: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of read attempts so far, including those that hit end of input.
    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        *self.reads.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(self
            .lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front())
    }
}

/// One piece of captured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Line(String),
    Prompt(String),
}

/// Message sink that records everything written to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    output: Arc<Mutex<Vec<Output>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written, in order.
    pub fn output(&self) -> Vec<Output> {
        self.output.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Output as it would appear on a terminal (without echoed input).
    pub fn text(&self) -> String {
        self.output()
            .into_iter()
            .map(|out| match out {
                Output::Line(line) => format!("{}\n", line),
                Output::Prompt(prompt) => prompt,
            })
            .collect()
    }

    /// Prompts issued, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.output()
            .into_iter()
            .filter_map(|out| match out {
                Output::Prompt(prompt) => Some(prompt),
                Output::Line(_) => None,
            })
            .collect()
    }

    /// Number of times `needle` occurs in the transcript.
    pub fn count(&self, needle: &str) -> usize {
        self.text().matches(needle).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }
}

impl MessageSink for RecordingSink {
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Output::Line(text.to_string()));
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Output::Prompt(text.to_string()));
        Ok(())
    }
}
