//! Command line arguments.
//!
//! Each subcommand stands in for something a visitor does in the browser:
//! following a link, submitting the login or registration form, or pressing
//! a dashboard button.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cronos")]
#[command(about = "Command line client for the Cronos booking platform")]
#[command(version)]
#[command(long_about = "
Command line client for the Cronos booking platform.

API base URL priority (highest to lowest):
1. --api-url
2. CRONOS_API_URL (also read from a .env file)
3. api_base_url in ~/.config/cronos/config.json
4. http://localhost:8080/api

Environment variables:
  CRONOS_API_URL   - API base URL
  CRONOS_PASSWORD  - Password for `login`, skips the prompt
  RUST_LOG         - Log filter (e.g. debug, cronos_core=trace)
")]
pub struct Cli {
    /// API base URL (overrides environment and config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the session file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Navigate to a path and print what renders
    Open {
        /// Path such as /, /login, /dashboard or /book/acme
        path: String,
    },

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },

    /// Sign out and return to the login page
    Logout,

    /// Leave the dashboard for the public home page, dropping the session
    Home,

    /// Show the signed-in user's profile
    Whoami,

    /// Show the stored session state
    Status,

    /// Open a tenant's public booking page
    Book {
        slug: String,
        /// Page below the booking shell, e.g. services
        section: Option<String>,
    },

    /// Rate a password against the registration rules
    PasswordStrength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open() {
        let cli = Cli::try_parse_from(["cronos", "open", "/dashboard"]).expect("parse");
        assert!(matches!(cli.command, Command::Open { ref path } if path == "/dashboard"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cronos",
            "login",
            "--email",
            "a@b.com",
            "--api-url",
            "http://api.test",
            "-v",
        ])
        .expect("parse");
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Login { email: Some(ref e) } if e == "a@b.com"));
    }

    #[test]
    fn test_register_requires_names() {
        assert!(Cli::try_parse_from(["cronos", "register", "--email", "a@b.com"]).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
