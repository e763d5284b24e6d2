//! Asking the user for parameters that were not given on the command line.
//!
//! Handlers receive a `&mut dyn Prompter` so they can run against a real terminal or against
//! scripted answers in tests. End of input counts as a blank answer.

use boar::error::{BoarError, Result};
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Asks a question and returns the trimmed answer, possibly empty.
    fn ask(&mut self, question: &str) -> Result<String>;

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} [y/N]: ", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Returns `given` when present, otherwise asks. A blank answer aborts.
pub fn required(
    prompter: &mut dyn Prompter,
    given: Option<String>,
    question: &str,
) -> Result<String> {
    if let Some(value) = given.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    let answer = prompter.ask(question)?;
    if answer.is_empty() {
        return Err(BoarError::Aborted);
    }
    Ok(answer)
}

/// Asks for an optional value. A blank answer is `None`.
pub fn optional(prompter: &mut dyn Prompter, question: &str) -> Result<Option<String>> {
    let answer = prompter.ask(question)?;
    Ok(Some(answer).filter(|a| !a.is_empty()))
}

/// Reads answers from stdin, writing questions to stdout.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
use std::collections::VecDeque;

/// Answers questions from a fixed list and records what was asked.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_values_skip_the_prompt() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let value = required(&mut prompter, Some("temp".into()), "Category: ").unwrap();
        assert_eq!(value, "temp");
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn blank_required_answer_aborts() {
        let mut prompter = ScriptedPrompter::new(&["  "]);
        assert!(matches!(
            required(&mut prompter, None, "Category: "),
            Err(BoarError::Aborted)
        ));

        // Running out of answers behaves like end of input.
        assert!(matches!(
            required(&mut prompter, Some(" ".into()), "Category: "),
            Err(BoarError::Aborted)
        ));
    }

    #[test]
    fn optional_blank_is_none() {
        let mut prompter = ScriptedPrompter::new(&["", "https://example.com"]);
        assert_eq!(optional(&mut prompter, "Desc: ").unwrap(), None);
        assert_eq!(
            optional(&mut prompter, "Link: ").unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let mut prompter = ScriptedPrompter::new(&["Y", "yes", "n", ""]);
        assert!(prompter.confirm("Sure?").unwrap());
        assert!(prompter.confirm("Sure?").unwrap());
        assert!(!prompter.confirm("Sure?").unwrap());
        assert!(!prompter.confirm("Sure?").unwrap());
        assert_eq!(prompter.asked[0], "Sure? [y/N]: ");
    }
}
