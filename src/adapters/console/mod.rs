//! Console adapters - stdin/stdout implementations of the console ports.
//!
//! Generic over `BufRead`/`Write` so the same code serves the terminal,
//! pipes and in-memory buffers.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::ports::{ConsoleError, LineReader, MessageSink};

/// Reads user replies line by line from any buffered reader.
pub struct ConsoleReader<R> {
    input: R,
}

impl<R: BufRead> ConsoleReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl ConsoleReader<BufReader<Stdin>> {
    /// Reader over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> LineReader for ConsoleReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fall through to the retry path.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Writes assistant output to any writer.
pub struct ConsoleWriter<W> {
    output: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl ConsoleWriter<Stdout> {
    /// Writer over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MessageSink for ConsoleWriter<W> {
    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn write_prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_strips_line_endings() {
        let mut reader = ConsoleReader::new(Cursor::new("yes\r\nno\n  agent  \n"));
        assert_eq!(reader.read_line().unwrap(), Some("yes".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("no".to_string()));
        assert_eq!(reader.read_line().unwrap(), Some("  agent  ".to_string()));
    }

    #[test]
    fn reader_returns_none_at_end_of_input() {
        let mut reader = ConsoleReader::new(Cursor::new("last"));
        assert_eq!(reader.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn reader_keeps_empty_lines() {
        let mut reader = ConsoleReader::new(Cursor::new("\n1234567890\n"));
        assert_eq!(reader.read_line().unwrap(), Some(String::new()));
        assert_eq!(reader.read_line().unwrap(), Some("1234567890".to_string()));
    }

    #[test]
    fn reader_decodes_invalid_utf8_lossily() {
        let mut bytes = b"1234567891\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"no\n");
        let mut reader = ConsoleReader::new(Cursor::new(bytes));

        assert_eq!(reader.read_line().unwrap(), Some("1234567891".to_string()));
        assert_eq!(
            reader.read_line().unwrap(),
            Some("\u{FFFD}\u{FFFD}".to_string())
        );
        assert_eq!(reader.read_line().unwrap(), Some("no".to_string()));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn writer_puts_prompts_on_the_same_line() {
        let mut writer = ConsoleWriter::new(Vec::new());
        writer.write_line("Hello").unwrap();
        writer.blank_line().unwrap();
        writer.write_prompt("Answer: ").unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "Hello\n\nAnswer: ");
    }
}
