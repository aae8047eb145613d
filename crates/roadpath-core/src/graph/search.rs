//! Budget-constrained depth-first path search
//!
//! Explores roads depth-first in the network's incident-edge order and
//! returns the first path that reaches the destination without using more
//! private or construction roads than the budget allows. Public roads are
//! unlimited. The result is the first admissible path found, not the
//! shortest one.
//!
//! The walk keeps its own frame stack, so native stack use does not grow
//! with path length.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadpathError};
use crate::graph::traversal::RoadNetwork;
use crate::graph::types::{Edge, NodeId, RoadKind};

/// Maximum number of restricted roads a path may use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    pub max_private: usize,
    pub max_construction: usize,
}

impl SearchBudget {
    pub fn new(max_private: usize, max_construction: usize) -> Self {
        SearchBudget {
            max_private,
            max_construction,
        }
    }
}

/// Restricted roads consumed along a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoadUsage {
    pub private: usize,
    pub construction: usize,
}

impl RoadUsage {
    /// Usage after travelling one more road of `kind`
    pub fn after(self, kind: RoadKind) -> RoadUsage {
        match kind {
            RoadKind::Public => self,
            RoadKind::Private => RoadUsage {
                private: self.private + 1,
                ..self
            },
            RoadKind::Construction => RoadUsage {
                construction: self.construction + 1,
                ..self
            },
        }
    }

    pub fn within(&self, budget: &SearchBudget) -> bool {
        self.private <= budget.max_private && self.construction <= budget.max_construction
    }
}

/// An admissible path from start to destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node ids from start to destination, inclusive
    pub nodes: Vec<NodeId>,
    /// Roads travelled, `roads[i]` leads from `nodes[i]` to `nodes[i + 1]`
    pub roads: Vec<Edge>,
    pub usage: RoadUsage,
}

impl Route {
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of roads travelled
    pub fn hops(&self) -> usize {
        self.roads.len()
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes pushed onto the path
    pub expanded: usize,
    /// Edges skipped because they would exceed a budget
    pub pruned_by_budget: usize,
    /// Edges skipped because the far endpoint is already on the path
    pub skipped_on_path: usize,
    /// Nodes popped after all their edges failed
    pub backtracks: usize,
    /// Longest path explored, in roads
    pub max_depth: usize,
}

struct Frame<I> {
    node: NodeId,
    edges: I,
    usage: RoadUsage,
}

/// Depth-first backtracking search over a borrowed road network
pub struct PathSearch<'g, G: RoadNetwork + ?Sized> {
    network: &'g G,
}

impl<'g, G: RoadNetwork + ?Sized> PathSearch<'g, G> {
    pub fn new(network: &'g G) -> Self {
        PathSearch { network }
    }

    /// Find a path from `start` to `destination` using at most
    /// `max_private` private roads and `max_construction` construction roads
    ///
    /// Returns `Ok(None)` when no admissible path exists. Unknown start or
    /// destination ids fail with `NodeNotFound` before any traversal.
    pub fn find_path(
        &self,
        start: NodeId,
        destination: NodeId,
        max_private: usize,
        max_construction: usize,
    ) -> Result<Option<Route>> {
        self.find_path_within(
            start,
            destination,
            SearchBudget::new(max_private, max_construction),
        )
    }

    pub fn find_path_within(
        &self,
        start: NodeId,
        destination: NodeId,
        budget: SearchBudget,
    ) -> Result<Option<Route>> {
        self.find_path_with_stats(start, destination, budget)
            .map(|(route, _)| route)
    }

    /// Like `find_path_within`, also returning search counters
    #[tracing::instrument(skip(self), fields(max_private = budget.max_private, max_construction = budget.max_construction))]
    pub fn find_path_with_stats(
        &self,
        start: NodeId,
        destination: NodeId,
        budget: SearchBudget,
    ) -> Result<(Option<Route>, SearchStats)> {
        self.network.node(start)?;
        self.network.node(destination)?;

        let mut stats = SearchStats {
            expanded: 1,
            ..Default::default()
        };

        if start == destination {
            let route = Route {
                nodes: vec![start],
                roads: Vec::new(),
                usage: RoadUsage::default(),
            };
            return Ok((Some(route), stats));
        }

        let node_count = self.network.node_count();
        let mut on_path = vec![false; node_count];
        let mut roads: Vec<Edge> = Vec::new();
        let mut stack = vec![Frame {
            node: start,
            edges: self.network.incident_edges(start)?,
            usage: RoadUsage::default(),
        }];
        on_path[start] = true;

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.edges.next() else {
                if let Some(done) = stack.pop() {
                    on_path[done.node] = false;
                }
                roads.pop();
                stats.backtracks += 1;
                continue;
            };

            let next = edge.to;
            let visited = *on_path.get(next).ok_or(RoadpathError::InvalidNode {
                id: next,
                node_count,
            })?;
            if visited {
                stats.skipped_on_path += 1;
                continue;
            }

            let usage = frame.usage.after(edge.kind);
            if !usage.within(&budget) {
                stats.pruned_by_budget += 1;
                continue;
            }

            roads.push(edge);
            stats.expanded += 1;
            stats.max_depth = stats.max_depth.max(roads.len());

            if next == destination {
                let mut nodes: Vec<NodeId> = stack.iter().map(|f| f.node).collect();
                nodes.push(next);
                tracing::debug!(?stats, hops = roads.len(), "path_found");
                return Ok((
                    Some(Route {
                        nodes,
                        roads,
                        usage,
                    }),
                    stats,
                ));
            }

            on_path[next] = true;
            stack.push(Frame {
                node: next,
                edges: self.network.incident_edges(next)?,
                usage,
            });
        }

        tracing::debug!(?stats, "no_path");
        Ok((None, stats))
    }
}
