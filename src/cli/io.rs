use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output;
use crate::errors::{PlannerError, Result};

/// Source of answers for the session's questions.
pub trait Prompter {
    /// Asks `prompt` and returns the trimmed answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive prompts on the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

/// Reads one answer per line, for piped or scripted stdin.
pub struct ScriptPrompter<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: true }
    }

    /// Suppresses printing the question before reading.
    pub fn silent(reader: R) -> Self {
        Self {
            reader,
            echo: false,
        }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if self.echo {
            output::prompt(prompt);
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PlannerError::InputClosed(prompt.to_string()));
        }
        Ok(line.trim().to_string())
    }
}
