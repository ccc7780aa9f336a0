use crate::shared::domain::value_objects::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "onion",
    version,
    about = "OSINT lookup client for IP addresses, phone numbers and emails"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Backend base URL (overrides ONION_BASE_URL)"
    )]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Interface language: en or ru (overrides ONION_LOCALE)"
    )]
    pub locale: Option<Locale>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Also write an HTML report of each search"
    )]
    pub html: Option<PathBuf>,
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up an IP address, phone number or email address
    Search {
        query: String,
        #[arg(
            long,
            requires = "password",
            help = "Log in with this email before searching"
        )]
        email: Option<String>,
        #[arg(long, requires = "email")]
        password: Option<String>,
    },
    /// Log in to the backend
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account on the backend
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Report whether the current session is authenticated
    Check,
    /// Interactive session that keeps the login between searches
    Shell,
}
