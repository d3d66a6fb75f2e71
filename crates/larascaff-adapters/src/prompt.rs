//! Prompter adapters.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use larascaff_core::{
    application::{ApplicationError, ports::Prompter},
    error::LarascaffResult,
};

/// Interactive prompter reading answers from stdin.
///
/// An empty answer counts as "yes", matching the usual `[Y/n]` convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&self, question: &str) -> LarascaffResult<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} [Y/n] ", question).map_err(prompt_error)?;
        stdout.flush().map_err(prompt_error)?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(prompt_error)?;

        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer.is_empty() || answer == "y" || answer == "yes")
    }
}

fn prompt_error(e: io::Error) -> larascaff_core::error::LarascaffError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Prompter that always returns the same answer.
///
/// Used for non-interactive runs (`--yes`) where every confirmation is
/// accepted without touching stdin.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompter {
    answer: bool,
}

impl StaticPrompter {
    pub fn always(answer: bool) -> Self {
        Self { answer }
    }
}

impl Prompter for StaticPrompter {
    fn confirm(&self, _question: &str) -> LarascaffResult<bool> {
        Ok(self.answer)
    }
}

/// Prompter that replays a fixed sequence of answers (testing).
///
/// Answers past the end of the script default to `false`, so a test that
/// under-scripts fails safe instead of overwriting.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<Vec<bool>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str) -> LarascaffResult<bool> {
        self.questions.lock().unwrap().push(question.to_string());
        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            Ok(false)
        } else {
            Ok(answers.remove(0))
        }
    }
}
