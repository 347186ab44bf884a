use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "propbag",
    about = "Inspect and edit property bag snapshot files",
    version,
    author,
    long_about = None
)]
pub struct PropbagCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json); overrides the config file
    #[arg(long, global = true)]
    pub output_format: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the properties of a bag
    Show {
        /// Snapshot file (.json, .yaml or .yml)
        file: PathBuf,

        /// Include reserved (underscore-prefixed) properties
        #[arg(short, long, default_value = "false")]
        all: bool,
    },

    /// Read one property
    Get {
        file: PathBuf,

        /// Property name
        name: String,

        /// Value returned when the property is unset (parsed as JSON)
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Create or overwrite a property
    Set {
        file: PathBuf,

        name: String,

        /// New value (parsed as JSON, falling back to a plain string)
        value: String,
    },

    /// Assign a property only if it is unset
    Def {
        file: PathBuf,

        name: String,

        /// Default value (parsed as JSON, falling back to a plain string)
        value: String,
    },

    /// Apply every property of another document
    Merge {
        file: PathBuf,

        /// Document whose top-level mapping is applied
        source: PathBuf,
    },

    /// List the error log, or one entry of it
    Errors {
        file: PathBuf,

        /// Position of the entry; the latest when omitted together with --last
        #[arg(short, long)]
        index: Option<usize>,

        /// Show only the most recent entry
        #[arg(long, default_value = "false")]
        last: bool,

        /// Show structured entries as recorded instead of their message
        #[arg(long, default_value = "false")]
        raw: bool,
    },

    /// Append an entry to the error log
    AddError {
        file: PathBuf,

        message: String,

        /// Numeric error code; makes the entry structured
        #[arg(long)]
        code: Option<i64>,

        /// Error kind; makes the entry structured
        #[arg(long)]
        kind: Option<String>,
    },
}
