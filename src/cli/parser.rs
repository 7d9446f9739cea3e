use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rtaboard
#[derive(Parser)]
#[command(
    name = "rtaboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Join agent performance and status exports, rank non-productive time, manage who is on leave",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Process a performance + status export pair and store the result
    Process {
        /// "Agent Performance Summary" CSV export
        performance: PathBuf,

        /// "Agent Status Summary" CSV export
        status: PathBuf,

        /// Accept files whose names do not carry the report markers
        #[arg(long = "skip-name-check")]
        skip_name_check: bool,

        /// Do not print the resulting table
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Show the stored summary (agents on leave are hidden)
    Show {
        /// Include agents on leave
        #[arg(long)]
        all: bool,

        /// Only the first N rows of the ranking
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },

    /// Manage the list of agents on leave
    Leave {
        /// Put one or more agents on leave
        #[arg(long, value_name = "AGENT", num_args = 1..)]
        add: Vec<String>,

        /// Take one or more agents off leave
        #[arg(long, value_name = "AGENT", num_args = 1..)]
        remove: Vec<String>,

        /// Empty the leave list (applied before --add/--remove)
        #[arg(long)]
        clear: bool,

        /// Print the agents currently on leave
        #[arg(long)]
        list: bool,

        /// Print every agent of the stored dataset, marking those on leave
        #[arg(long)]
        candidates: bool,
    },

    /// Export the summary view
    Export {
        /// Export format (defaults to `default_export_format` from config)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Include agents on leave
        #[arg(long)]
        all: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "unlock",
            help = "Remove a run lock left behind by an interrupted process"
        )]
        unlock: bool,
    },
}
