//! Error types and exit codes for roadpath
//!
//! Exit codes:
//! - 0: Success (including "no admissible path")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad map file, invalid node or edge)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the roadpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed map, unknown node, missing road (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadpath operations
#[derive(Error, Debug)]
pub enum RoadpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Graph errors (exit code 3)
    #[error("invalid node {id}: graph has {node_count} node(s)")]
    InvalidNode { id: NodeId, node_count: usize },

    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("a road already connects nodes {u} and {v}")]
    EdgeAlreadyExists { u: NodeId, v: NodeId },

    #[error("no road connects nodes {u} and {v}")]
    EdgeNotFound { u: NodeId, v: NodeId },

    #[error("node {id} cannot be connected to itself")]
    SelfLoop { id: NodeId },

    // Map errors (exit code 3)
    #[error("invalid map at line {line}: {reason}")]
    InvalidMap { line: usize, reason: String },

    #[error("map has {nodes} nodes, more than the configured limit of {limit}")]
    MapTooLarge { nodes: usize, limit: usize },

    #[error("map file not found: {path:?}")]
    MapNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadpathError {
    /// Create an error for a malformed map line
    pub fn invalid_map(line: usize, reason: impl std::fmt::Display) -> Self {
        RoadpathError::InvalidMap {
            line,
            reason: reason.to_string(),
        }
    }

    /// Whether this error means a node id did not belong to the graph
    pub fn is_node_error(&self) -> bool {
        matches!(
            self,
            RoadpathError::InvalidNode { .. } | RoadpathError::NodeNotFound { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadpathError::UnknownFormat(_) | RoadpathError::UsageError(_) => ExitCode::Usage,

            RoadpathError::InvalidNode { .. }
            | RoadpathError::NodeNotFound { .. }
            | RoadpathError::EdgeAlreadyExists { .. }
            | RoadpathError::EdgeNotFound { .. }
            | RoadpathError::SelfLoop { .. }
            | RoadpathError::InvalidMap { .. }
            | RoadpathError::MapTooLarge { .. }
            | RoadpathError::MapNotFound { .. } => ExitCode::Data,

            RoadpathError::Io(_)
            | RoadpathError::Json(_)
            | RoadpathError::Toml(_)
            | RoadpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoadpathError::UnknownFormat(_) => "unknown_format",
            RoadpathError::UsageError(_) => "usage_error",
            RoadpathError::InvalidNode { .. } => "invalid_node",
            RoadpathError::NodeNotFound { .. } => "node_not_found",
            RoadpathError::EdgeAlreadyExists { .. } => "edge_already_exists",
            RoadpathError::EdgeNotFound { .. } => "edge_not_found",
            RoadpathError::SelfLoop { .. } => "self_loop",
            RoadpathError::InvalidMap { .. } => "invalid_map",
            RoadpathError::MapTooLarge { .. } => "map_too_large",
            RoadpathError::MapNotFound { .. } => "map_not_found",
            RoadpathError::Io(_) => "io_error",
            RoadpathError::Json(_) => "json_error",
            RoadpathError::Toml(_) => "toml_error",
            RoadpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadpath operations
pub type Result<T> = std::result::Result<T, RoadpathError>;
