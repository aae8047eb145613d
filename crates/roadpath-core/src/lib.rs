//! Roadpath Core Library
//!
//! Road network graph, budget-constrained path search and the grid map
//! format used by the `roadpath` command-line tool.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod map;
