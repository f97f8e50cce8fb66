//! Alert banners and navigation hints for the terminal.

use owo_colors::OwoColorize;

/// Severity of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Warning,
    Danger,
}

/// Show a banner-style message.
///
/// Success and warnings go to stdout, dangers to stderr.
pub fn show_alert(message: &str, level: AlertLevel) {
    match level {
        AlertLevel::Success => println!("{} {message}", "[ok]".green()),
        AlertLevel::Warning => println!("{} {message}", "[warning]".yellow()),
        AlertLevel::Danger => eprintln!("{} {message}", "[error]".red()),
    }
}

/// Print where the flow continues, standing in for a page navigation.
pub fn navigate_to(subcommand: &str) {
    println!("Continue with: {} {subcommand}", "vault_keeper".bold());
}
