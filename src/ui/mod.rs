//! Terminal output
//!
//! Success messages are green, recommendations yellow and errors red.
//! `console` drops the colors when stdout is not a terminal.

use console::Style;
use miette::Diagnostic;

use crate::error::InstallerError;

/// A message for the user at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Success(String),
    Recommendation(String),
}

impl Message {
    pub fn text(&self) -> &str {
        match self {
            Message::Success(text) | Message::Recommendation(text) => text,
        }
    }

    pub fn print(&self) {
        let style = match self {
            Message::Success(_) => Style::new().green(),
            Message::Recommendation(_) => Style::new().yellow().bright(),
        };
        println!("{}", style.apply_to(self.text()));
    }
}

/// Banner printed before each installation step
///
/// ```text
/// ****************************
/// 3. Activating virtualenv
/// ****************************
/// ```
pub fn step_banner(number: usize, title: &str) -> String {
    let title = format!("{number}. {title}");
    let marker = "*".repeat(title.chars().count());
    format!("{marker}\n{title}\n{marker}")
}

pub fn print_step(number: usize, title: &str) {
    println!();
    println!("{}", Style::new().bold().apply_to(step_banner(number, title)));
}

/// Print `ERROR: <message>` in red, followed by the diagnostic's help
pub fn print_error(err: &InstallerError) {
    eprintln!(
        "{}",
        Style::new().red().bold().apply_to(format!("ERROR: {err}"))
    );
    if let Some(help) = err.help() {
        eprintln!();
        eprintln!("{}", Style::new().red().apply_to(help));
    }
}
