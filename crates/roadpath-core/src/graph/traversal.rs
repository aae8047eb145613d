use crate::error::Result;
use crate::graph::network::{Graph, IncidentEdges};
use crate::graph::types::{Edge, Node, NodeId};

/// Read-only view of a road network used by path search
///
/// Implementations must yield incident edges in ascending order of the far
/// endpoint's id; search results depend on that order. Edges are pulled one
/// at a time as the search advances.
pub trait RoadNetwork {
    type Edges<'a>: Iterator<Item = Edge>
    where
        Self: 'a;

    fn node_count(&self) -> usize;
    fn node(&self, id: NodeId) -> Result<&Node>;
    fn incident_edges(&self, id: NodeId) -> Result<Self::Edges<'_>>;
}

impl RoadNetwork for Graph {
    type Edges<'a> = IncidentEdges<'a>;

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        Graph::node(self, id)
    }

    fn incident_edges(&self, id: NodeId) -> Result<IncidentEdges<'_>> {
        Graph::incident_edges(self, id)
    }
}
