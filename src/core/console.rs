//! Styled console output.
//!
//! Success and informational messages go to stdout; warnings, errors and
//! prompts go to stderr so piped output stays clean.

use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn success(message: &str) {
    println!("{}", style(message).green().bold());
}

pub fn info(message: &str) {
    println!("{}", style(message).cyan().bold());
}

pub fn warn(message: &str) {
    eprintln!("{}", style(message).yellow().bold());
}

pub fn error(message: &str) {
    eprintln!("{}", style(message).red().bold());
}

/// Green label followed by a blue highlighted value, on one line.
pub fn highlight(label: &str, value: &str) {
    println!("{}{}", style(label).green().bold(), style(value).blue().bold());
}

/// Cyan label followed by an unstyled value, on one line.
pub fn pair(label: &str, value: &str) {
    println!("{}{}", style(label).cyan().bold(), value);
}

/// Animated spinner for longer operations, shown on stderr. Returns a
/// hidden bar when stderr is not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(template);
    }
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
