//! Undirected road network with a fixed node set
//!
//! Nodes live in an index-addressed arena created up front. Each node owns a
//! `BTreeMap` from neighbour id to road kind, so incident edges always come
//! out in ascending neighbour order. Path search relies on that order for
//! deterministic results.

use std::collections::{btree_map, BTreeMap};

use crate::error::{Result, RoadpathError};
use crate::graph::types::{Edge, Node, NodeId, RoadKind};

/// Road network with nodes `0..n` and symmetric typed adjacency
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    adjacency: Vec<BTreeMap<NodeId, RoadKind>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph with `n` nodes (ids `0..n`) and no roads
    pub fn new(n: usize) -> Self {
        Graph {
            nodes: (0..n).map(Node::new).collect(),
            adjacency: vec![BTreeMap::new(); n],
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected roads
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn check_valid(&self, id: NodeId) -> Result<()> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(RoadpathError::InvalidNode {
                id,
                node_count: self.nodes.len(),
            })
        }
    }

    /// Connect `u` and `v` with a road of the given kind
    ///
    /// Fails with `InvalidNode` if either id is out of range and with
    /// `EdgeAlreadyExists` if the two nodes are already connected, whichever
    /// way round the earlier road was added.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, kind: RoadKind) -> Result<()> {
        self.check_valid(u)?;
        self.check_valid(v)?;

        if u == v {
            return Err(RoadpathError::SelfLoop { id: u });
        }
        if self.adjacency[u].contains_key(&v) || self.adjacency[v].contains_key(&u) {
            return Err(RoadpathError::EdgeAlreadyExists { u, v });
        }

        self.adjacency[u].insert(v, kind);
        self.adjacency[v].insert(u, kind);
        self.edge_count += 1;

        tracing::trace!(u, v, kind = %kind, "add_edge");
        Ok(())
    }

    /// Get the node with the given id
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or(RoadpathError::NodeNotFound { id })
    }

    /// Mutable access to a node, for setting its mark
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or(RoadpathError::NodeNotFound { id })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Reset every node's mark to `false`
    pub fn clear_marks(&mut self) {
        for node in &mut self.nodes {
            node.set_mark(false);
        }
    }

    /// All roads touching `u`, oriented away from `u`, in ascending order of
    /// the far endpoint's id
    pub fn incident_edges(&self, u: NodeId) -> Result<IncidentEdges<'_>> {
        self.check_valid(u)?;
        Ok(IncidentEdges {
            from: u,
            neighbours: self.adjacency[u].iter(),
        })
    }

    /// Number of roads touching `u`
    pub fn degree(&self, u: NodeId) -> Result<usize> {
        self.check_valid(u)?;
        Ok(self.adjacency[u].len())
    }

    /// The road between `u` and `v`, oriented from `u`
    pub fn edge(&self, u: NodeId, v: NodeId) -> Result<Edge> {
        self.node(u)?;
        self.node(v)?;

        self.adjacency[u]
            .get(&v)
            .map(|&kind| Edge::new(u, v, kind))
            .ok_or(RoadpathError::EdgeNotFound { u, v })
    }

    /// Whether a road connects `u` and `v`
    ///
    /// A missing road is `false`; ids outside the graph are still an error.
    pub fn are_adjacent(&self, u: NodeId, v: NodeId) -> Result<bool> {
        self.check_valid(u)?;
        self.check_valid(v)?;

        match self.edge(u, v) {
            Ok(_) => Ok(true),
            Err(err) if err.is_node_error() => Err(err),
            Err(_) => Ok(false),
        }
    }

    /// Every road once, oriented from the lower id, ordered by `(from, to)`
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbours)| {
            neighbours
                .range(u + 1..)
                .map(move |(&v, &kind)| Edge::new(u, v, kind))
        })
    }

    /// Count of roads per kind, in `RoadKind::ALL` order
    pub fn kind_counts(&self) -> [(RoadKind, usize); 3] {
        let mut counts = RoadKind::ALL.map(|kind| (kind, 0));
        for edge in self.edges() {
            if let Some(entry) = counts.iter_mut().find(|(kind, _)| *kind == edge.kind) {
                entry.1 += 1;
            }
        }
        counts
    }
}

/// Lazy iterator over the roads touching one node
#[derive(Debug, Clone)]
pub struct IncidentEdges<'a> {
    from: NodeId,
    neighbours: btree_map::Iter<'a, NodeId, RoadKind>,
}

impl Iterator for IncidentEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        self.neighbours
            .next()
            .map(|(&to, &kind)| Edge::new(self.from, to, kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.neighbours.size_hint()
    }
}

impl ExactSizeIterator for IncidentEdges<'_> {}
