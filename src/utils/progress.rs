//! Spinner used while the registry is fetched and components are installed.
//!
//! Wraps `indicatif` so the rest of the crate does not depend on its styling
//! details. The spinner is hidden entirely under `--no-progress` or when
//! `DFL_NO_PROGRESS` is set, and `indicatif` already hides it when stderr is
//! not a terminal.
//!
//! # Examples
//!
//! ```rust
//! use dfl_components_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner();
//! spinner.set_message("Fetching registry...");
//! // fetch...
//! spinner.succeed("Installed 3 file(s)");
//! ```

use crate::constants::NO_PROGRESS_ENV;
use colored::Colorize;
use indicatif::{
    ProgressBar as IndicatifBar, ProgressDrawTarget, ProgressStyle as IndicatifStyle,
};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn is_progress_disabled() -> bool {
    std::env::var(NO_PROGRESS_ENV).is_ok()
}

/// A spinner that can be paused around interactive prompts.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
    visible: bool,
}

impl ProgressBar {
    /// Create and start a spinner, or a hidden one when progress is disabled.
    #[must_use]
    pub fn new_spinner() -> Self {
        Self::spinner_unless(false)
    }

    /// Like [`ProgressBar::new_spinner`], but also hidden when `disabled` is set.
    #[must_use]
    pub fn spinner_unless(disabled: bool) -> Self {
        if disabled || is_progress_disabled() {
            return Self::hidden();
        }

        let bar = IndicatifBar::new_spinner();
        bar.set_style(spinner_style());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self {
            inner: bar,
            visible: true,
        }
    }

    /// A spinner that never draws, for tests and quiet runs.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            inner: IndicatifBar::hidden(),
            visible: false,
        }
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Hide the spinner while `f` runs, e.g. to read from stdin.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.inner.suspend(f)
    }

    /// Stop with a green check mark and `msg`.
    pub fn succeed(&self, msg: impl Into<String>) {
        self.inner.set_style(finished_style());
        self.inner.finish_with_message(format!("{} {}", "✓".green(), msg.into()));
    }

    /// Stop with a red cross and `msg`.
    pub fn fail(&self, msg: impl Into<String>) {
        self.inner.set_style(finished_style());
        self.inner.finish_with_message(format!("{} {}", "✗".red(), msg.into()));
    }

    /// Clear the spinner and stop drawing it until [`ProgressBar::resume`].
    ///
    /// Unlike [`ProgressBar::suspend`] this spans an `.await`, e.g. reading
    /// an answer from stdin.
    pub fn pause(&self) {
        if self.visible {
            self.inner.disable_steady_tick();
            self.inner.set_draw_target(ProgressDrawTarget::hidden());
        }
    }

    /// Draw the spinner again after [`ProgressBar::pause`].
    pub fn resume(&self) {
        if self.visible && !self.inner.is_finished() {
            self.inner.set_draw_target(ProgressDrawTarget::stderr());
            self.inner.enable_steady_tick(TICK_INTERVAL);
        }
    }

    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}

fn finished_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
}
