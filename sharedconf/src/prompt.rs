//! Line-based prompting used by interactive copies.
//!
//! The copier only ever talks to a [`Prompter`], so tests and embedders can
//! swap in a [`ScriptedPrompter`] instead of reading the real terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::console::Term;

/// Ask one question, get one line back.
pub trait Prompter {
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Approval check for the copy confirmation prompt.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Writes the question verbatim and reads a single line.
///
/// End of input counts as an empty answer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.writer.write_all(question.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Terminal prompt with line editing, for when stdin is a TTY.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Prompts go to stdout, like the line-based protocol.
    fn term() -> Term {
        Term::stdout()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        // dialoguer appends its own ": " separator
        let label = question.trim_end().trim_end_matches(':');
        let answer: String = dialoguer::Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&Self::term())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        Ok(answer.trim().to_string())
    }
}

/// Replays canned answers and records every question asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Prompter for the current process: line editing on a TTY, plain lines otherwise.
pub fn console_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::stdio())
    }
}
