use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// In quiet mode only errors are written.
pub struct StderrProgressReporter {
    quiet: bool,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new(quiet: bool) -> Self {
        let colored = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { quiet, colored }
    }

    fn info_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "ℹ".cyan(), message)
        } else {
            format!("ℹ {}", message)
        }
    }

    fn warning_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "⚠".yellow().bold(), message.yellow())
        } else {
            format!("⚠ {}", message)
        }
    }

    fn error_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "✗".red().bold(), message.red())
        } else {
            format!("✗ {}", message)
        }
    }

    fn success_line(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "✓".green().bold(), message)
        } else {
            format!("✓ {}", message)
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.info_line(message));
        }
    }

    fn report_warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.warning_line(message));
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.error_line(message));
    }

    fn report_success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", self.success_line(message));
        }
    }
}
