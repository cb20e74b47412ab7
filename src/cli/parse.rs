//! CLI parse: clap types for the plans client. No behavior; definitions only.

use crate::types::{Equipment, Focus, PlanId};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Plans CLI - talk to the workout plans API
#[derive(Parser)]
#[command(name = "plans")]
#[command(about = "Client for the workout plans API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config and API_BASE)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List saved plans
    List,
    /// Show a single plan
    Show {
        /// Plan identifier (used verbatim in the request path)
        id: PlanId,
    },
    /// Generate a plan from an arbitrary JSON payload
    Generate {
        /// Inline JSON payload
        #[arg(long, conflicts_with = "file")]
        payload: Option<String>,
        /// Read the JSON payload from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Generate a single workout
    Workout {
        #[arg(long, value_enum)]
        focus: Focus,
        #[arg(long, value_enum, default_value_t = Equipment::Gym)]
        equipment: Equipment,
        /// Free-text soreness report, e.g. "quads 4"
        #[arg(long)]
        soreness: Option<String>,
        /// Do not let the server fall back to stored logs
        #[arg(long)]
        no_db_logs: bool,
    },
    /// Generate a weekly plan
    Week {
        /// Training days per week
        #[arg(long)]
        days: u8,
        #[arg(long, value_enum, default_value_t = Equipment::Gym)]
        equipment: Equipment,
        #[arg(long)]
        soreness: Option<String>,
        #[arg(long)]
        no_db_logs: bool,
    },
    /// Exercise logs
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Check API health
    Health,
    /// Print the resolved configuration
    Config,
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Record a set
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        reps: i64,
        #[arg(long)]
        weight_kg: f64,
        /// Reps in reserve
        #[arg(long)]
        rir: i64,
        #[arg(long, value_enum)]
        focus: Option<Focus>,
    },
    /// List recorded sets, newest first
    List {
        #[arg(long, value_enum)]
        focus: Option<Focus>,
    },
}
