//! Terminal front-end for the account vault.
//!
//! This is the "form layer": subcommands carry the field values a page
//! form would, alerts stand in for the dismissible banner, and the
//! printed follow-up command stands in for a page navigation.

use clap::{Parser, Subcommand};
use vk_accounts::{AccountError, AccountStore, RegisterRequest};
use vk_core::err;

mod alert;
use alert::{AlertLevel, navigate_to, show_alert};

#[derive(Parser)]
#[command(
    name = "vault_keeper",
    version,
    about = "Local account vault: signup, login, logout and session status"
)]
struct Cli {
    /// Suppress log output (alerts are still shown)
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// 10 digits, no separators
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        /// Must match --password
        #[arg(long)]
        confirm_password: String,
    },
    /// Log into an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Keep registered accounts around after logging out
        #[arg(long)]
        remember: bool,
    },
    /// Log out of the current session
    Logout,
    /// Show who is currently logged in
    Status,
}

fn main() {
    let cli = Cli::parse();
    if cli.quiet {
        vk_core::print::set_print(false);
    }

    let store = match AccountStore::open() {
        Ok(store) => store,
        Err(error) => {
            err!("Couldn't open the vault: {error}");
            std::process::exit(1);
        }
    };

    let ok = match cli.command {
        Command::Signup {
            name,
            email,
            phone,
            password,
            confirm_password,
        } => signup(&store, &name, &email, &phone, &password, &confirm_password),
        Command::Login {
            email,
            password,
            remember,
        } => login(&store, &email, &password, remember),
        Command::Logout => {
            store.logout();
            navigate_to("status");
            true
        }
        Command::Status => {
            status(&store);
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn signup(
    store: &AccountStore,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
    confirm_password: &str,
) -> bool {
    // Profile fields are trimmed, passwords are taken as typed
    let request = RegisterRequest {
        name: name.trim().to_owned(),
        email: email.trim().to_owned(),
        phone: phone.trim().to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    };

    match store.register(request) {
        Ok(_) => {
            show_alert(
                "Account created successfully! You can now log in.",
                AlertLevel::Success,
            );
            navigate_to("login");
            true
        }
        Err(error) => {
            show_alert(&alert_text(&error), alert_level(&error));
            false
        }
    }
}

fn login(store: &AccountStore, email: &str, password: &str, remember: bool) -> bool {
    match store.login(email.trim(), password, remember) {
        Ok(session) => {
            show_alert(
                &format!("Login successful! Welcome back, {}.", session.name),
                AlertLevel::Success,
            );
            navigate_to("status");
            true
        }
        Err(error) => {
            show_alert(&alert_text(&error), alert_level(&error));
            false
        }
    }
}

fn status(store: &AccountStore) {
    match store.get_session() {
        Some(session) => println!("Welcome, {}!", session.name),
        None => println!("Not logged in."),
    }
}

/// Banner text for an error, phrased for the person at the keyboard.
fn alert_text(error: &AccountError) -> String {
    match error {
        AccountError::PasswordMismatch => "Passwords do not match!".to_owned(),
        AccountError::EmailTaken(_) => "Email already registered! Please login.".to_owned(),
        AccountError::InvalidCredentials => "Invalid email or password!".to_owned(),
        AccountError::InvalidEmail(_) => "Please enter a valid email address!".to_owned(),
        AccountError::InvalidPhone(_) => "Phone number must be exactly 10 digits!".to_owned(),
        other => format!("Something went wrong: {other}"),
    }
}

fn alert_level(error: &AccountError) -> AlertLevel {
    match error {
        AccountError::EmailTaken(_) => AlertLevel::Warning,
        _ => AlertLevel::Danger,
    }
}
