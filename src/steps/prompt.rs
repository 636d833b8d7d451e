//! Line-oriented terminal prompts
//!
//! Generic over the reader and writer so step components can be driven from
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{RegistrationError, RegistrationResult};

/// Typing this at a field prompt clears the field
pub const CLEAR_MARKER: &str = "-";

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text
    pub fn say(&mut self, text: impl std::fmt::Display) -> RegistrationResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt and read one trimmed line
    pub fn line(&mut self, prompt: &str) -> RegistrationResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        let read = self.input.read_line(&mut input)?;
        if read == 0 {
            return Err(RegistrationError::Io("Input closed".into()));
        }
        Ok(input.trim().to_string())
    }

    /// Ask for a field value.
    ///
    /// Returns `None` when the user pressed Enter to keep `current`, and
    /// `Some("")` when they typed the clear marker.
    pub fn ask(&mut self, label: &str, current: Option<&str>) -> RegistrationResult<Option<String>> {
        let prompt = match current {
            Some(value) if !value.is_empty() => format!("{} [{}]: ", label, value),
            _ => format!("{}: ", label),
        };
        let answer = self.line(&prompt)?;
        Ok(match answer.as_str() {
            "" => None,
            CLEAR_MARKER => Some(String::new()),
            _ => Some(answer),
        })
    }

    /// Yes/no question; Enter picks `default`
    pub fn confirm(&mut self, prompt: &str, default: bool) -> RegistrationResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.line(&format!("{} {} ", prompt, hint))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer yes or no.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_keeps_clears_and_replaces() {
        let mut p = prompter("\n-\n  Adama \n");
        assert_eq!(p.ask("Town", Some("Bishoftu")).unwrap(), None);
        assert_eq!(p.ask("Town", Some("Bishoftu")).unwrap(), Some(String::new()));
        assert_eq!(p.ask("Town", None).unwrap(), Some("Adama".to_string()));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.starts_with("Town [Bishoftu]: "));
        assert!(out.ends_with("Town: "));
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("\nmaybe\nn\n");
        assert!(p.confirm("Submit?", true).unwrap());
        assert!(!p.confirm("Submit?", true).unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(matches!(p.line("> "), Err(RegistrationError::Io(_))));
    }
}
