//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Travelbook - search, book and manage trips from the terminal
#[derive(Parser, Debug)]
#[command(name = "travelbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "TRAVELBOOK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Directory holding config.toml and the stored session
    #[arg(long, env = "TRAVELBOOK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (resumes the stored session when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account username
        username: String,

        /// Password (prompted when omitted)
        #[arg(long, env = "TRAVELBOOK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Account username
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password (prompted twice when omitted)
        #[arg(long, env = "TRAVELBOOK_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Full name
        #[arg(long)]
        full_name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user's profile
    Whoami,

    /// Update profile fields
    Profile {
        /// New full name
        #[arg(long)]
        full_name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Search travel options
    Options {
        /// Mode of transport
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,

        /// Departure city
        #[arg(long)]
        source: Option<String>,

        /// Arrival city
        #[arg(long)]
        destination: Option<String>,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Minimum price per seat
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price per seat
        #[arg(long)]
        max_price: Option<String>,

        /// Number of results to skip
        #[arg(long)]
        skip: Option<u32>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one travel option with its booking quote
    #[command(name = "option")]
    Trip {
        /// Travel option ID
        id: i64,
    },

    /// Book seats on a travel option
    Book {
        /// Travel option ID
        id: i64,

        /// Number of seats
        #[arg(short, long, default_value = "1")]
        seats: String,

        /// Show the quote without booking
        #[arg(long)]
        dry_run: bool,
    },

    /// List your bookings
    Bookings,

    /// Show one booking
    Booking {
        /// Booking ID
        id: i64,
    },

    /// Cancel a booking
    Cancel {
        /// Booking ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Modes of transport accepted by the search filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Flights
    Flight,
    /// Trains
    Train,
    /// Buses
    Bus,
}

impl KindArg {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Train => "Train",
            Self::Bus => "Bus",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_options_filters() {
        let cli = Cli::try_parse_from([
            "travelbook", "options", "--type", "train", "--source", "Delhi", "--limit", "5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Options { kind, source, limit, .. }) => {
                assert_eq!(kind.map(KindArg::as_str), Some("Train"));
                assert_eq!(source.as_deref(), Some("Delhi"));
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "travelbook", "cancel", "12", "--yes", "--base-url", "http://example.test",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://example.test"));
        assert!(matches!(cli.command, Some(Commands::Cancel { id: 12, yes: true })));
    }
}
