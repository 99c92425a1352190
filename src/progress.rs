//! Spinner display for silenced child processes

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a child process runs with its output suppressed
pub struct CommandSpinner {
    pb: ProgressBar,
}

impl CommandSpinner {
    /// Start spinning with `message` next to the spinner
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Remove the spinner after the child succeeded
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }

    /// Leave the spinner line in place with a failure note
    pub fn abandon(self, message: impl Into<String>) {
        self.pb.abandon_with_message(message.into());
    }
}
