//! Line-oriented prompts
//!
//! Every prompt re-asks until it gets acceptable input. End of input is
//! reported as [`MonitorError::InputClosed`] so callers can shut down cleanly.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{MonitorError, MonitorResult};

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of output
    pub fn say(&mut self, message: impl fmt::Display) -> MonitorResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Write text without a trailing newline
    pub fn print(&mut self, text: &str) -> MonitorResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for a non-empty, trimmed line
    pub fn text(&mut self, prompt: &str) -> MonitorResult<String> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say("Input must not be empty.")?;
        }
    }

    /// Prompt for a number
    pub fn number(&mut self, prompt: &str) -> MonitorResult<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Prompt for a number accepted by `check`, showing its error otherwise
    pub fn number_where<F, E>(&mut self, prompt: &str, check: F) -> MonitorResult<f64>
    where
        F: Fn(f64) -> Result<(), E>,
        E: fmt::Display,
    {
        loop {
            let value = self.number(prompt)?;
            match check(value) {
                Ok(()) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompt for a whole number
    pub fn integer(&mut self, prompt: &str) -> MonitorResult<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Prompt for a yes/no answer
    pub fn confirm(&mut self, prompt: &str) -> MonitorResult<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match line.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> MonitorResult<String> {
        loop {
            self.print(prompt)?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                self.say("")?;
                return Err(MonitorError::InputClosed);
            }

            match String::from_utf8(buf) {
                Ok(line) => return Ok(line.trim().to_string()),
                Err(_) => self.say("Input is not valid text. Try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appliance::validate_hours;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn output(prompter: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompter.output).unwrap()
    }

    #[test]
    fn test_text_reprompts_on_empty() {
        let mut p = prompter("\n   \n  Fridge  \n");
        assert_eq!(p.text("Name: ").unwrap(), "Fridge");
        assert_eq!(output(p).matches("Input must not be empty.").count(), 2);
    }

    #[test]
    fn test_number_reprompts_on_garbage() {
        let mut p = prompter("abc\ninf\n150.5\n");
        assert_eq!(p.number("Watts: ").unwrap(), 150.5);
        assert_eq!(output(p).matches("Invalid number. Try again.").count(), 2);
    }

    #[test]
    fn test_number_where_applies_check() {
        let mut p = prompter("25\n-1\n8\n");
        assert_eq!(p.number_where("Hours: ", validate_hours).unwrap(), 8.0);
        assert!(output(p).contains("Hours per day must be between 0 and 24"));
    }

    #[test]
    fn test_integer() {
        let mut p = prompter("two\n2\n");
        assert_eq!(p.integer("Choose: ").unwrap(), 2);
    }

    #[test]
    fn test_confirm() {
        let mut p = prompter("maybe\nY\nno\n");
        assert!(p.confirm("Update? ").unwrap());
        assert!(!p.confirm("Update? ").unwrap());
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut p = Prompter::new(&b"\xff\n\xfe\xfd\n3\n"[..], Vec::new());
        assert_eq!(p.integer("Choose: ").unwrap(), 3);
        assert_eq!(output(p).matches("Input is not valid text. Try again.").count(), 2);
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.text("Name: "), Err(MonitorError::InputClosed)));
    }
}
