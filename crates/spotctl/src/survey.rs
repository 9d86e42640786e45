//! Interactive prompts over the invocation streams

use crate::error::Result;
use crate::streams::{InputStream, OutputStream};
use colored::Colorize;
use std::io::Write;

pub trait Prompter: Send {
    /// Ask for a free-form value; an empty answer yields `default` (or an empty string)
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question; an empty answer yields `default`
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Line prompter: questions go to the error stream so stdout stays clean
pub struct StreamPrompter {
    input: InputStream,
    out: OutputStream,
}

impl StreamPrompter {
    pub fn new(input: InputStream, out: OutputStream) -> Self {
        Self { input, out }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.out, "{} {} ", "?".green().bold(), question)?;
        self.out.flush()?;

        let answer = self.input.read_line()?.unwrap_or_default();
        Ok(answer.trim().to_string())
    }
}

impl Prompter for StreamPrompter {
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let question = match default {
            Some(d) if !d.is_empty() => format!("{} {}:", message, format!("[{}]", d).dimmed()),
            _ => format!("{}:", message),
        };

        let answer = self.ask(&question)?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{} {}", message, hint.dimmed()))?;

        Ok(match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::SharedBuffer;
    use std::io::Cursor;

    fn prompter(answers: &str) -> (StreamPrompter, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let prompter = StreamPrompter::new(
            InputStream::new(Cursor::new(answers.to_string())),
            OutputStream::new(buffer.clone()),
        );
        (prompter, buffer)
    }

    #[test]
    fn test_input_answer_and_default() {
        colored::control::set_override(false);
        let (mut p, out) = prompter("prod\n\n");

        assert_eq!(p.input("Cluster name", None).unwrap(), "prod");
        assert_eq!(p.input("Region", Some("us-west-2")).unwrap(), "us-west-2");
        assert!(out.contents().contains("Region [us-west-2]:"));
    }

    #[test]
    fn test_input_at_eof_is_empty() {
        let (mut p, _) = prompter("");
        assert_eq!(p.input("Cluster ID", None).unwrap(), "");
    }

    #[test]
    fn test_confirm() {
        let (mut p, _) = prompter("y\nNO\n\nmaybe\n");
        assert!(p.confirm("Continue?", false).unwrap());
        assert!(!p.confirm("Continue?", true).unwrap());
        assert!(p.confirm("Continue?", true).unwrap());
        assert!(!p.confirm("Continue?", false).unwrap());
    }
}
