use crate::export::{ExportFormat, ReportKind};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for shiftguard
#[derive(Parser)]
#[command(
    name = "shiftguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift compliance and timesheet engine: record punches, aggregate hours and check labor-law rules",
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

/// The worker a command applies to.
#[derive(Args, Debug, Clone)]
pub struct WorkerArgs {
    #[arg(long = "user", help = "Worker (user) id")]
    pub user: String,

    #[arg(long = "location", help = "Location id")]
    pub location: String,

    #[arg(long = "org", help = "Organisation id (default: config `default_org`)")]
    pub org: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Record a punch: clock_in, clock_out, break_start or break_end
    Punch {
        /// Punch kind (clock_in | clock_out | break_start | break_end)
        kind: String,

        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long = "at", help = "Instant of the punch (ISO-8601, default: now)")]
        at: Option<String>,
    },

    /// Plan a shift
    Shift {
        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long = "start", help = "Planned start (ISO-8601)")]
        start: String,

        #[arg(long = "end", help = "Planned end (ISO-8601)")]
        end: String,

        #[arg(long = "break", default_value_t = 0, help = "Planned break in minutes")]
        break_minutes: i64,
    },

    /// Show worked minutes per local day
    Hours {
        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B")]
        period: Option<String>,
    },

    /// Show timesheet totals for a period
    Timesheet {
        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B")]
        period: Option<String>,
    },

    /// Evaluate compliance rules for a period
    Check {
        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B")]
        period: Option<String>,

        #[arg(long = "save", help = "Persist the violations found")]
        save: bool,
    },

    /// List or configure compliance rules
    Rules {
        #[arg(long = "list", help = "List the configured rules")]
        list: bool,

        #[arg(long = "set", value_name = "KEY", requires = "hours")]
        set: Option<String>,

        #[arg(long = "hours", help = "New threshold, e.g. 11, 10.5, 8h30m")]
        hours: Option<String>,

        #[arg(long = "enable", value_name = "KEY")]
        enable: Option<String>,

        #[arg(long = "disable", value_name = "KEY")]
        disable: Option<String>,
    },

    /// Export a report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "timesheet")]
        report: ReportKind,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        worker: WorkerArgs,

        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or a range A:B")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
