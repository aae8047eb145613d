use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RoadpathError;

/// Index of a node inside its graph, always in `0..node_count`
pub type NodeId = usize;

/// Category of a road
///
/// Public roads are free to use; private and construction roads count
/// against the per-search budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadKind {
    Public,
    Private,
    Construction,
}

impl RoadKind {
    pub const ALL: [RoadKind; 3] = [RoadKind::Public, RoadKind::Private, RoadKind::Construction];

    /// Map-file code for a road: `P`, `V` or `C` (case-insensitive).
    /// Any other character means "no road".
    pub fn from_code(code: char) -> Option<RoadKind> {
        match code.to_ascii_uppercase() {
            'P' => Some(RoadKind::Public),
            'V' => Some(RoadKind::Private),
            'C' => Some(RoadKind::Construction),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            RoadKind::Public => 'P',
            RoadKind::Private => 'V',
            RoadKind::Construction => 'C',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadKind::Public => "public",
            RoadKind::Private => "private",
            RoadKind::Construction => "construction",
        }
    }
}

impl fmt::Display for RoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoadKind {
    type Err = RoadpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(RoadKind::Public),
            "private" => Ok(RoadKind::Private),
            "construction" => Ok(RoadKind::Construction),
            other => Err(RoadpathError::UsageError(format!(
                "unknown road kind '{}' (expected: public, private, construction)",
                other
            ))),
        }
    }
}

/// A location in the road network
///
/// The mark is free-form annotation for callers. Path search never reads
/// or writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    marked: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Node { id, marked: false }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn set_mark(&mut self, mark: bool) {
        self.marked = mark;
    }
}

/// An oriented view of an undirected road
///
/// `from` is the node the edge was looked up from and `to` is the far
/// endpoint. `edge(u, v)` and `edge(v, u)` describe the same road and
/// always carry the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: RoadKind,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, kind: RoadKind) -> Self {
        Edge { from, to, kind }
    }

    /// The same road seen from the other endpoint
    pub fn reversed(&self) -> Edge {
        Edge {
            from: self.to,
            to: self.from,
            kind: self.kind,
        }
    }

    /// Whether this edge and `other` are the same undirected road
    pub fn same_road(&self, other: &Edge) -> bool {
        self.kind == other.kind
            && ((self.from == other.from && self.to == other.to)
                || (self.from == other.to && self.to == other.from))
    }
}
