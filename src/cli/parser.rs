use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchcard
/// CLI client for a timeclock REST server
#[derive(Parser)]
#[command(
    name = "punchcard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timeclock CLI: clock in and out against a timeclock server and review worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override the backend server URL (useful for tests or a custom deployment)
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Override the config/session directory
    #[arg(global = true, long = "dir", hide = true)]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        /// Backend server URL to store in the configuration
        #[arg(long)]
        server: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and store a session token
    Login {
        username: String,
        password: String,
    },

    /// Log out and discard the stored session
    Logout,

    /// Create a new user account (admin only)
    Register {
        username: String,
        password: String,

        #[arg(long, default_value = "user", help = "Account role: user or admin")]
        role: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Show the current clock status
    Status,

    /// Clock in
    In {
        /// Use an explicit instant (RFC 3339) instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// Clock out
    Out {
        /// Use an explicit instant (RFC 3339) instead of now
        #[arg(long)]
        at: Option<String>,
    },

    /// List per-day entries and worked hours
    List {
        #[arg(long, help = "Filter by month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, help = "Inspect another user's entries (admin only)")]
        user: Option<String>,

        #[arg(long, help = "List the months available for filtering")]
        months: bool,

        #[arg(long, help = "List raw clock events instead of the per-day summary")]
        events: bool,
    },

    /// List all users with their aggregate hours (admin only)
    Users,

    /// Render a chart of worked hours
    Chart {
        #[arg(long, help = "Filter by month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, help = "Chart another user's daily hours (admin only)")]
        user: Option<String>,

        #[arg(long, help = "Chart every user's total hours (admin only)")]
        all: bool,
    },

    /// Correct the clock-in/out times for a day
    Edit {
        /// Date to correct (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM, local)")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM, local)")]
        clock_out: Option<String>,

        #[arg(long, help = "Edit another user's entries (admin only)")]
        user: Option<String>,
    },

    /// Show or update a user profile
    Profile {
        #[arg(long, help = "Target another user (admin only)")]
        user: Option<String>,

        #[arg(long, help = "New username")]
        username: Option<String>,

        #[arg(long, help = "New role: user or admin")]
        role: Option<String>,

        #[arg(long, help = "New phone number")]
        phone: Option<String>,
    },

    /// Export per-day entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Filter by month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long, help = "Export another user's entries (admin only)")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
