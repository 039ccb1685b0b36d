use crate::models::{Category, WorkoutKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for HealthDash
/// Personal wellness tracker backed by plain text record files
#[derive(Parser)]
#[command(
    name = "healthdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Your personal wellness companion: log hydration, diet, workouts, sleep, weight and steps",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a second profile)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Username to log in with (prompted when missing)
    #[arg(global = true, long, short = 'u')]
    pub user: Option<String>,

    /// Password to log in with (prompted when missing)
    #[arg(global = true, long, short = 'p')]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Create a new account
    Signup,

    /// Add a record
    Add {
        /// Record category
        #[arg(value_enum)]
        category: Category,

        #[arg(long, value_enum, help = "Workout type (default: unknown)")]
        kind: Option<WorkoutKind>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Duration in minutes (workout, sleep)"
        )]
        minutes: Option<i64>,

        #[arg(long, help = "Food item you ate (diet)")]
        food: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "Quantity in grams (diet)")]
        grams: Option<i64>,

        #[arg(long, allow_hyphen_values = true, help = "Amount in liters, e.g. 0.5 (hydration)")]
        liters: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Weight in kg, e.g. 72.5 (weight)")]
        kg: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "Number of steps (steps)")]
        count: Option<i64>,

        #[arg(
            long,
            value_name = "DATETIME",
            help = "Record time as 'YYYY-MM-DD HH:MM:SS' (default: now)"
        )]
        at: Option<String>,
    },

    /// List the records of one category
    List {
        #[arg(value_enum)]
        category: Category,

        #[arg(long, help = "Print parsed records as JSON")]
        json: bool,
    },

    /// Delete one record by number, or all records of a category
    Del {
        #[arg(value_enum)]
        category: Category,

        #[arg(long = "pos", help = "Record number to delete (see `list`); omit to delete all")]
        pos: Option<usize>,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Show every record file of the current user
    Progress,

    /// Export Sleep or Weight records to CSV for charting
    Export {
        #[arg(value_enum)]
        category: Category,

        #[arg(long, help = "Plot the exported CSV with the configured renderer")]
        plot: bool,

        #[arg(long = "out-dir", value_name = "DIR", help = "Override the export directory")]
        out_dir: Option<String>,
    },

    /// Set or view health reminders
    Remind {
        #[arg(long, value_name = "TEXT", help = "Add a reminder")]
        set: Option<String>,

        #[arg(long, help = "List your reminders")]
        list: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the operation log")]
        print: bool,
    },
}
