//! Road network graph and path search
//!
//! - `types`: nodes, oriented edges and road kinds
//! - `network`: the fixed-size undirected graph
//! - `traversal`: read-only network trait consumed by search
//! - `search`: budget-constrained depth-first path search

pub mod network;
pub mod search;
pub mod traversal;
pub mod types;

pub use network::{Graph, IncidentEdges};
pub use search::{PathSearch, RoadUsage, Route, SearchBudget, SearchStats};
pub use traversal::RoadNetwork;
pub use types::{Edge, Node, NodeId, RoadKind};
