//! Interactive prompt I/O.
//!
//! The negotiator never touches stdin or stdout directly. It talks to a
//! [`PromptIo`] implementation: [`Terminal`] for a real operator, or
//! [`ScriptedPrompt`] for a fixed transcript.

mod line_reader;
mod scripted;

use colored::Colorize;
use std::io::{self, Write};

use crate::error::CredentialError;

pub use line_reader::{read_line, Line};
pub use scripted::ScriptedPrompt;

pub const USERNAME_PROMPT: &str = "Username:";
pub const SSH_KEY_PROMPT: &str = "SSH Key:";
pub const PASSWORD_PROMPT: &str = "Password:";

/// Capability to prompt an operator and read their answer.
pub trait PromptIo {
    /// Write `label` followed by a single space and flush.
    fn write_prompt(&mut self, label: &str) -> Result<(), CredentialError>;

    /// Read one line of input.
    fn read_line(&mut self) -> Result<Line, CredentialError>;

    /// Report a failure to the operator on the error stream.
    ///
    /// Best effort: a failure to write the diagnostic is ignored.
    fn write_diagnostic(&mut self, message: &str);
}

impl<P: PromptIo + ?Sized> PromptIo for &mut P {
    fn write_prompt(&mut self, label: &str) -> Result<(), CredentialError> {
        (**self).write_prompt(label)
    }

    fn read_line(&mut self) -> Result<Line, CredentialError> {
        (**self).read_line()
    }

    fn write_diagnostic(&mut self, message: &str) {
        (**self).write_diagnostic(message)
    }
}

/// Prompts on stdout, reads from stdin, reports on stderr.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl PromptIo for Terminal {
    fn write_prompt(&mut self, label: &str) -> Result<(), CredentialError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{label} ")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Line, CredentialError> {
        read_line(&mut io::stdin().lock())
    }

    fn write_diagnostic(&mut self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", message.red());
    }
}

/// Prompt with `label` and return the answer.
///
/// An empty answer is always accepted. A read failure aborts whether or not
/// the prompt is `optional`; the flag only marks answers where blank means
/// "no secret supplied".
pub fn ask<P: PromptIo + ?Sized>(
    io: &mut P,
    label: &str,
    optional: bool,
) -> Result<String, CredentialError> {
    io.write_prompt(label)?;
    let line = io.read_line()?;

    if line.is_empty() {
        if optional {
            log::debug!("No value supplied for {label:?}");
        } else {
            log::debug!("Empty answer accepted for {label:?}");
        }
    }

    Ok(line.into_string())
}
