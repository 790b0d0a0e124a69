//! User confirmation input.
//!
//! Interactive flows take a `&mut dyn Prompt` instead of reading stdin
//! directly, so tests can drive them with scripted responses.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Line-oriented prompt capability.
pub trait Prompt {
    /// Print `message` and read one line of input, trimmed.
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Prompt backed by stderr and stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        eprint!("{}", message);
        io::stderr().flush().ok();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
