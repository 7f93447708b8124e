//! Output management and formatting.
//!
//! [`OutputManager`] is also the CLI's [`Console`]: the generation service
//! reports every outcome through it and asks it to confirm overwrites.

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use domainsmith_core::application::ports::Console;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        // Keep stdout clean for the JSON document.
        let term = if resolved_format == OutputFormat::Json {
            Term::stderr()
        } else {
            Term::stdout()
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Skipped indicator: `- <msg>`.
    pub fn skipped(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("- {msg}")
        } else {
            format!("{} {}", "-".dimmed(), msg.dimmed())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout, regardless of `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn ask(&self, question: &str, default: bool) -> bool {
        #[cfg(feature = "interactive")]
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(default)
                .interact()
                .unwrap_or(false);
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "{question} {hint} ");
        let _ = stderr.flush();

        answer_from(io::stdin().lock(), default)
    }
}

/// Read one answer line. EOF or a read error answers "no".
fn answer_from(mut input: impl BufRead, default: bool) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => match line.trim().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        },
    }
}

/// The kind of line a progress message is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Success,
    Skipped,
    Info,
}

fn classify(message: &str) -> LineKind {
    if message.starts_with("Created") || message.starts_with("Replaced") || message.starts_with("Added") {
        LineKind::Success
    } else if message.starts_with("Skipped") {
        LineKind::Skipped
    } else {
        LineKind::Info
    }
}

impl Console for OutputManager {
    fn info(&self, message: &str) {
        let written = match classify(message) {
            LineKind::Success => self.success(message),
            LineKind::Skipped => self.skipped(message),
            LineKind::Info => OutputManager::info(self, message),
        };
        if let Err(e) = written {
            debug!(error = %e, "Could not write progress line");
        }
    }

    fn warn(&self, message: &str) {
        if let Err(e) = self.warning(message) {
            debug!(error = %e, "Could not write warning");
        }
    }

    fn confirm(&self, question: &str, default: bool) -> bool {
        let answer = self.ask(question, default);
        debug!(question, answer, "Confirmation answered");
        answer
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            root: PathBuf::from("."),
            output_format: OutputFormat::Human,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            root: PathBuf::from("."),
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(!out.supports_color());
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn eof_answers_no() {
        assert!(!answer_from(io::empty(), true));
    }

    #[test]
    fn empty_line_takes_default() {
        assert!(answer_from("\n".as_bytes(), true));
        assert!(!answer_from("\n".as_bytes(), false));
    }

    #[test]
    fn explicit_answers() {
        assert!(answer_from("yes\n".as_bytes(), false));
        assert!(answer_from("Y\n".as_bytes(), false));
        assert!(!answer_from("n\n".as_bytes(), true));
        assert!(!answer_from("maybe\n".as_bytes(), true));
    }

    #[test]
    fn progress_lines_are_classified() {
        assert_eq!(classify("Created file: a.php"), LineKind::Success);
        assert_eq!(classify("Replaced file: a.php"), LineKind::Success);
        assert_eq!(classify("Added repository binding to p.php"), LineKind::Success);
        assert_eq!(classify("Skipped file: a.php"), LineKind::Skipped);
        assert_eq!(classify("Directory already exists: app"), LineKind::Info);
    }
}
