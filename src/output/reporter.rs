//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.
//!
//! On a TTY each step shows an indicatif spinner (venv creation and pip
//! installs can take a while); the spinner is resolved to `✓ {message}` when
//! the next step starts or `success()` is called. Off-TTY (and in `--quiet`
//! mode) steps degrade to plain lines.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    spinner: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            spinner: RefCell::new(None),
        }
    }

    /// Resolve the active spinner, if any, marking its step as completed.
    fn resolve_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            let msg = pb.message();
            progress::finish_ok(&pb, &msg);
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if self.ctx.show_progress() {
            self.resolve_spinner();
            *self.spinner.borrow_mut() = Some(progress::spinner(message));
        } else if !self.ctx.quiet {
            println!("  {} {message}", "→".cyan());
        }
    }

    fn success(&self, message: &str) {
        if self.ctx.show_progress() {
            self.resolve_spinner();
        }
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".green());
        }
    }

    fn warn(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "!".yellow());
        }
    }
}

impl Drop for TerminalReporter<'_> {
    /// A spinner still active at drop means its step never completed.
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            let msg = pb.message();
            progress::finish_error(&pb, &msg);
        }
    }
}
