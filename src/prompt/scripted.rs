use std::io::{self, Cursor};

use super::line_reader::{read_line, Line};
use super::PromptIo;
use crate::error::CredentialError;

/// In-memory operator transcript.
///
/// Answers come from a fixed input buffer; prompts and diagnostics are
/// recorded so callers can check exactly what the operator would have seen.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    input: Cursor<Vec<u8>>,
    fail_on_read: Option<usize>,
    reads: usize,
    prompts: Vec<String>,
    output: String,
    diagnostics: Vec<String>,
}

impl ScriptedPrompt {
    /// One answer per entry, each terminated by a newline.
    pub fn new(answers: &[&str]) -> Self {
        let mut input = String::new();
        for answer in answers {
            input.push_str(answer);
            input.push('\n');
        }
        Self::from_bytes(input)
    }

    /// Raw input, read exactly as a terminal would deliver it.
    pub fn from_bytes(input: impl Into<Vec<u8>>) -> Self {
        ScriptedPrompt {
            input: Cursor::new(input.into()),
            ..Default::default()
        }
    }

    /// Make the read with zero-based index `index` fail with an I/O error.
    pub fn failing_on_read(mut self, index: usize) -> Self {
        self.fail_on_read = Some(index);
        self
    }

    /// Prompt labels in the order they were written.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Everything written to the prompt stream.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Number of read attempts, failed ones included.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl PromptIo for ScriptedPrompt {
    fn write_prompt(&mut self, label: &str) -> Result<(), CredentialError> {
        self.prompts.push(label.to_string());
        self.output.push_str(label);
        self.output.push(' ');
        Ok(())
    }

    fn read_line(&mut self) -> Result<Line, CredentialError> {
        let index = self.reads;
        self.reads += 1;

        if self.fail_on_read == Some(index) {
            return Err(CredentialError::Io(io::Error::new(
                io::ErrorKind::Other,
                "scripted read failure",
            )));
        }

        read_line(&mut self.input)
    }

    fn write_diagnostic(&mut self, message: &str) {
        self.diagnostics.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_read_in_order() {
        let mut io = ScriptedPrompt::new(&["one", "", "three"]);

        assert_eq!(io.read_line().unwrap().as_str(), "one");
        assert!(io.read_line().unwrap().is_empty());
        assert_eq!(io.read_line().unwrap().as_str(), "three");
        // Exhausted transcript behaves like end-of-stream.
        assert!(io.read_line().unwrap().is_empty());
        assert_eq!(io.reads(), 4);
    }

    #[test]
    fn test_failure_only_hits_selected_read() {
        let mut io = ScriptedPrompt::new(&["one", "two"]).failing_on_read(1);

        assert_eq!(io.read_line().unwrap().as_str(), "one");
        assert!(io.read_line().is_err());
        assert_eq!(io.read_line().unwrap().as_str(), "two");
    }

    #[test]
    fn test_records_prompts_and_diagnostics() {
        let mut io = ScriptedPrompt::default();

        io.write_prompt("Username:").unwrap();
        io.write_diagnostic("boom");

        assert_eq!(io.prompts(), ["Username:"]);
        assert_eq!(io.output(), "Username: ");
        assert_eq!(io.diagnostics(), ["boom"]);
    }
}
