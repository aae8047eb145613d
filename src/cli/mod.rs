//! CLI argument parsing for roadpath
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roadpath_core::graph::NodeId;

pub use args::PathArgs;
use parse::parse_format;
pub use roadpath_core::format::OutputFormat;

/// Roadpath - route search over grid road maps
#[derive(Parser, Debug)]
#[command(name = "roadpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./roadpath.toml when present)
    #[arg(long, global = true, env = "ROADPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events, including search statistics
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `debug` or `roadpath_core=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route that respects the private and construction budgets
    Path(PathArgs),

    /// Summarise a map: size, query and roads per kind
    Show {
        /// Map file
        map: PathBuf,
    },

    /// List the roads touching a node
    Edges {
        /// Map file
        map: PathBuf,

        /// Node id (row-major)
        node: NodeId,
    },

    /// Check whether a road joins two nodes
    Adjacent {
        /// Map file
        map: PathBuf,

        /// First node id
        u: NodeId,

        /// Second node id
        v: NodeId,
    },
}
