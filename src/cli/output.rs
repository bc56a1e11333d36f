//! Terminal output
//!
//! Results go to stdout, status lines to stderr.
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::application::services::{Notice, Reporter};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print plain output (no color, for rendered results)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Prints run notices to stderr.
///
/// Quiet mode hides status lines but never the raw error body.
#[derive(Debug, Clone, Copy)]
pub struct TerminalReporter {
    quiet: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Line printed for `notice`, `None` when quiet mode hides it.
    pub fn line(&self, notice: &Notice) -> Option<String> {
        match notice {
            Notice::ErrorBody(body) => Some(body.clone()),
            _ if self.quiet => None,
            Notice::ApiError { status } => {
                Some(format!("{}: HTTP response {}", "Cloudstack error".red(), status))
            }
            Notice::Polling => Some("Polling result... ^C to abort".cyan().to_string()),
            Notice::NotReady => Some("Result not ready yet.".yellow().to_string()),
        }
    }
}

impl Reporter for TerminalReporter {
    fn notice(&self, notice: Notice) {
        if let Some(line) = self.line(&notice) {
            eprintln!("{}", line);
        }
    }
}
