//! Road maps loaded from grid map files
//!
//! A `RoadMap` is the graph built from a map file together with the query
//! the file describes: start, destination and road budgets.

pub mod parse;


use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::config::RoadpathConfig;
use crate::error::{Result, RoadpathError};
use crate::graph::{Graph, NodeId, PathSearch, RoadKind, Route, SearchBudget};
use crate::trace_time;

pub use parse::{parse_map, MapHeader};

/// Graph plus the query parameters declared by a map file
#[derive(Debug, Clone)]
pub struct RoadMap {
    header: MapHeader,
    graph: Graph,
}

impl RoadMap {
    /// Parse map text using the default node limit
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with_config(content, &RoadpathConfig::default())
    }

    pub fn parse_with_config(content: &str, config: &RoadpathConfig) -> Result<Self> {
        let (header, graph) = parse_map(content, config.map.max_nodes)?;
        Ok(RoadMap { header, graph })
    }

    /// Load a map file using the default node limit
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_path_with_config(path, &RoadpathConfig::default())
    }

    #[tracing::instrument(skip(path, config), fields(path = %path.display()))]
    pub fn from_path_with_config(path: &Path, config: &RoadpathConfig) -> Result<Self> {
        let start = Instant::now();

        if !path.is_file() {
            return Err(RoadpathError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let map = Self::parse_with_config(&content, config)?;

        trace_time!(start, "load_map", nodes = map.graph.node_count());
        Ok(map)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Mutable graph access, for callers that annotate nodes with marks
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn header(&self) -> &MapHeader {
        &self.header
    }

    pub fn start(&self) -> NodeId {
        self.header.start
    }

    pub fn destination(&self) -> NodeId {
        self.header.destination
    }

    pub fn max_private(&self) -> usize {
        self.header.budget.max_private
    }

    pub fn max_construction(&self) -> usize {
        self.header.budget.max_construction
    }

    pub fn budget(&self) -> SearchBudget {
        self.header.budget
    }

    pub fn scale(&self) -> usize {
        self.header.scale
    }

    pub fn width(&self) -> usize {
        self.header.width
    }

    pub fn length(&self) -> usize {
        self.header.length
    }

    /// Grid `(row, column)` of a node
    pub fn position(&self, id: NodeId) -> Result<(usize, usize)> {
        self.graph.node(id)?;
        Ok((id / self.header.width, id % self.header.width))
    }

    /// Search this map's graph between any two nodes
    pub fn find_path(
        &self,
        start: NodeId,
        destination: NodeId,
        max_private: usize,
        max_construction: usize,
    ) -> Result<Option<Route>> {
        PathSearch::new(&self.graph).find_path(start, destination, max_private, max_construction)
    }

    /// Run the query declared in the map header
    pub fn find_declared_path(&self) -> Result<Option<Route>> {
        PathSearch::new(&self.graph).find_path_within(self.start(), self.destination(), self.budget())
    }

    pub fn summary(&self) -> MapSummary {
        MapSummary {
            width: self.header.width,
            length: self.header.length,
            scale: self.header.scale,
            nodes: self.graph.node_count(),
            roads: self.graph.edge_count(),
            start: self.header.start,
            destination: self.header.destination,
            budget: self.header.budget,
            roads_by_kind: self.graph.kind_counts().into_iter().collect(),
        }
    }
}

/// Overview of a loaded map, used by the `show` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub width: usize,
    pub length: usize,
    pub scale: usize,
    pub nodes: usize,
    pub roads: usize,
    pub start: NodeId,
    pub destination: NodeId,
    pub budget: SearchBudget,
    pub roads_by_kind: BTreeMap<RoadKind, usize>,
}
