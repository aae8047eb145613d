use super::*;
use crate::graph::{Graph, IncidentEdges};
use std::cell::Cell;

/// 0 -P- 1 -V- 2, plus 0 -C- 2
fn triangle() -> Graph {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, RoadKind::Public).unwrap();
    graph.add_edge(1, 2, RoadKind::Private).unwrap();
    graph.add_edge(0, 2, RoadKind::Construction).unwrap();
    graph
}

/// Build a `width` x `height` grid where every road has the given kind
fn uniform_grid(width: usize, height: usize, kind: RoadKind) -> Graph {
    let mut graph = Graph::new(width * height);
    for row in 0..height {
        for col in 0..width {
            let id = row * width + col;
            if col + 1 < width {
                graph.add_edge(id, id + 1, kind).unwrap();
            }
            if row + 1 < height {
                graph.add_edge(id, id + width, kind).unwrap();
            }
        }
    }
    graph
}

/// Check every property an admissible route must have
fn assert_admissible(
    graph: &Graph,
    route: &Route,
    start: NodeId,
    destination: NodeId,
    budget: SearchBudget,
) {
    assert_eq!(route.start(), Some(start));
    assert_eq!(route.destination(), Some(destination));
    assert_eq!(route.roads.len() + 1, route.nodes.len());

    let mut seen = std::collections::HashSet::new();
    for node in &route.nodes {
        assert!(seen.insert(*node), "node {} repeats in {:?}", node, route.nodes);
    }

    let mut usage = RoadUsage::default();
    for (pair, road) in route.nodes.windows(2).zip(&route.roads) {
        assert!(graph.are_adjacent(pair[0], pair[1]).unwrap());
        assert_eq!((road.from, road.to), (pair[0], pair[1]));
        assert_eq!(graph.edge(pair[0], pair[1]).unwrap().kind, road.kind);
        assert!(graph.edge(pair[1], pair[0]).unwrap().same_road(road));
        usage = usage.after(road.kind);
    }
    assert_eq!(usage, route.usage);
    assert!(usage.within(&budget));
}

#[test]
fn test_triangle_private_budget_uses_public_then_private() {
    let graph = triangle();
    let route = PathSearch::new(&graph)
        .find_path(0, 2, 1, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 1, 2]);
    assert_eq!(
        route.usage,
        RoadUsage {
            private: 1,
            construction: 0
        }
    );
}

#[test]
fn test_triangle_construction_budget_takes_direct_road() {
    let graph = triangle();
    let route = PathSearch::new(&graph)
        .find_path(0, 2, 0, 1)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 2]);
    assert_eq!(route.roads, vec![Edge::new(0, 2, RoadKind::Construction)]);
}

#[test]
fn test_triangle_zero_budget_has_no_path() {
    let graph = triangle();
    let result = PathSearch::new(&graph).find_path(0, 2, 0, 0).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_triangle_both_budgets_follows_exploration_order() {
    // Neighbour 1 comes before neighbour 2, so the longer route is found first.
    let graph = triangle();
    let route = PathSearch::new(&graph)
        .find_path(0, 2, 1, 1)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 1, 2]);
}

#[test]
fn test_single_node_graph() {
    let graph = Graph::new(1);
    let route = PathSearch::new(&graph)
        .find_path(0, 0, 0, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0]);
    assert_eq!(route.hops(), 0);
}

#[test]
fn test_start_equals_destination_ignores_budgets() {
    let graph = uniform_grid(3, 3, RoadKind::Construction);
    for (p, c) in [(0, 0), (5, 0), (0, 5)] {
        let route = PathSearch::new(&graph)
            .find_path(4, 4, p, c)
            .unwrap()
            .unwrap();
        assert_eq!(route.nodes, vec![4]);
    }
}

#[test]
fn test_disconnected_components_have_no_path() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, RoadKind::Public).unwrap();
    graph.add_edge(2, 3, RoadKind::Public).unwrap();

    let search = PathSearch::new(&graph);
    for budget in [0, 1, 10] {
        assert!(search.find_path(0, 3, budget, budget).unwrap().is_none());
        assert!(search.find_path(3, 1, budget, budget).unwrap().is_none());
    }
}

#[test]
fn test_isolated_start_has_no_path() {
    let mut graph = Graph::new(3);
    graph.add_edge(1, 2, RoadKind::Public).unwrap();
    assert!(PathSearch::new(&graph)
        .find_path(0, 2, 3, 3)
        .unwrap()
        .is_none());
}

#[test]
fn test_invalid_start_or_destination_is_error() {
    let graph = triangle();
    let search = PathSearch::new(&graph);
    assert!(matches!(
        search.find_path(3, 0, 1, 1),
        Err(RoadpathError::NodeNotFound { id: 3 })
    ));
    assert!(matches!(
        search.find_path(0, 42, 1, 1),
        Err(RoadpathError::NodeNotFound { id: 42 })
    ));
}

#[test]
fn test_public_grid_depth_first_route() {
    // Row-major 3x3 grid, all public. Depth-first in ascending neighbour
    // order from 0 goes right first, then snakes down through the grid.
    let graph = uniform_grid(3, 3, RoadKind::Public);
    let route = PathSearch::new(&graph)
        .find_path(0, 8, 0, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 1, 2, 5, 4, 3, 6, 7, 8]);
    assert_admissible(&graph, &route, 0, 8, SearchBudget::default());
}

#[test]
fn test_private_budget_limits_route() {
    // 0 -V- 1 -V- 2 and a public detour 0 -P- 3 -P- 4 -V- 2
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, RoadKind::Private).unwrap();
    graph.add_edge(1, 2, RoadKind::Private).unwrap();
    graph.add_edge(0, 3, RoadKind::Public).unwrap();
    graph.add_edge(3, 4, RoadKind::Public).unwrap();
    graph.add_edge(4, 2, RoadKind::Private).unwrap();

    let search = PathSearch::new(&graph);

    let two = search.find_path(0, 2, 2, 0).unwrap().unwrap();
    assert_eq!(two.nodes, vec![0, 1, 2]);

    let one = search.find_path(0, 2, 1, 0).unwrap().unwrap();
    assert_eq!(one.nodes, vec![0, 3, 4, 2]);
    assert_eq!(one.usage.private, 1);

    assert!(search.find_path(0, 2, 0, 0).unwrap().is_none());
}

#[test]
fn test_backtracking_releases_nodes_for_other_branches() {
    // 0 -P- 1 -V- 2 -V- 3 and 0 -P- 2. Going through 1 first reaches 2 but
    // runs out of private budget; 2 must be usable again via the direct road.
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, RoadKind::Public).unwrap();
    graph.add_edge(1, 2, RoadKind::Private).unwrap();
    graph.add_edge(2, 3, RoadKind::Private).unwrap();
    graph.add_edge(0, 2, RoadKind::Public).unwrap();

    let budget = SearchBudget::new(1, 0);
    let (route, stats) = PathSearch::new(&graph)
        .find_path_with_stats(0, 3, budget)
        .unwrap();
    let route = route.unwrap();
    assert_admissible(&graph, &route, 0, 3, budget);
    assert_eq!(route.nodes, vec![0, 2, 3]);
    assert!(stats.backtracks >= 3);
    assert!(stats.pruned_by_budget >= 1);
}

#[test]
fn test_exhaustive_search_reports_stats() {
    let graph = uniform_grid(3, 3, RoadKind::Private);
    let mut isolated = Graph::new(10);
    for edge in graph.edges() {
        isolated.add_edge(edge.from, edge.to, edge.kind).unwrap();
    }

    let (route, stats) = PathSearch::new(&isolated)
        .find_path_with_stats(0, 9, SearchBudget::new(8, 0))
        .unwrap();
    assert!(route.is_none());
    assert!(stats.backtracks > 0);
    assert!(stats.skipped_on_path > 0);
    assert!(stats.max_depth <= 8);

    let (_, tight) = PathSearch::new(&isolated)
        .find_path_with_stats(0, 9, SearchBudget::new(1, 0))
        .unwrap();
    assert!(tight.pruned_by_budget > 0);
    assert!(tight.max_depth <= 1);
}

#[test]
fn test_routes_are_admissible_across_budgets() {
    // Mixed 4x4 grid: kinds cycle through public/private/construction.
    let width = 4;
    let mut graph = Graph::new(width * width);
    let mut i = 0;
    for row in 0..width {
        for col in 0..width {
            let id = row * width + col;
            let mut connect = |to: NodeId, graph: &mut Graph| {
                let kind = RoadKind::ALL[i % 3];
                i += 1;
                graph.add_edge(id, to, kind).unwrap();
            };
            if col + 1 < width {
                connect(id + 1, &mut graph);
            }
            if row + 1 < width {
                connect(id + width, &mut graph);
            }
        }
    }

    let search = PathSearch::new(&graph);
    for max_private in 0..3 {
        for max_construction in 0..3 {
            let budget = SearchBudget::new(max_private, max_construction);
            for destination in 0..width * width {
                if let Some(route) = search.find_path_within(0, destination, budget).unwrap() {
                    assert_admissible(&graph, &route, 0, destination, budget);
                }
            }
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let graph = uniform_grid(4, 3, RoadKind::Public);
    let search = PathSearch::new(&graph);
    let first = search.find_path(0, 11, 0, 0).unwrap();
    for _ in 0..5 {
        assert_eq!(search.find_path(0, 11, 0, 0).unwrap(), first);
    }
}

#[test]
fn test_search_does_not_touch_marks() {
    let mut graph = uniform_grid(2, 2, RoadKind::Public);
    graph.node_mut(1).unwrap().set_mark(true);

    let route = PathSearch::new(&graph)
        .find_path(0, 3, 0, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 1, 3]);
    assert!(graph.node(1).unwrap().is_marked());
    assert!(!graph.node(3).unwrap().is_marked());
}

#[test]
fn test_long_corridor_does_not_overflow_stack() {
    let n = 200_000;
    let mut graph = Graph::new(n);
    for id in 0..n - 1 {
        graph.add_edge(id, id + 1, RoadKind::Public).unwrap();
    }
    let route = PathSearch::new(&graph)
        .find_path(0, n - 1, 0, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes.len(), n);
}

#[test]
fn test_road_usage_after() {
    let usage = RoadUsage::default()
        .after(RoadKind::Public)
        .after(RoadKind::Private)
        .after(RoadKind::Construction)
        .after(RoadKind::Private);
    assert_eq!(
        usage,
        RoadUsage {
            private: 2,
            construction: 1
        }
    );
    assert!(usage.within(&SearchBudget::new(2, 1)));
    assert!(!usage.within(&SearchBudget::new(1, 1)));
    assert!(!usage.within(&SearchBudget::new(2, 0)));
}

/// Graph wrapper that counts the incident edges the search pulls
struct CountingNetwork<'a> {
    graph: &'a Graph,
    pulled: Cell<usize>,
}

struct CountedEdges<'b> {
    inner: IncidentEdges<'b>,
    pulled: &'b Cell<usize>,
}

impl Iterator for CountedEdges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let edge = self.inner.next()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(edge)
    }
}

impl RoadNetwork for CountingNetwork<'_> {
    type Edges<'b>
        = CountedEdges<'b>
    where
        Self: 'b;

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node(&self, id: NodeId) -> Result<&crate::graph::Node> {
        self.graph.node(id)
    }

    fn incident_edges(&self, id: NodeId) -> Result<CountedEdges<'_>> {
        Ok(CountedEdges {
            inner: self.graph.incident_edges(id)?,
            pulled: &self.pulled,
        })
    }
}

#[test]
fn test_search_pulls_edges_on_demand() {
    // Star around node 0: the destination is the first neighbour, so the
    // other 999 roads are never read.
    let mut graph = Graph::new(1001);
    for leaf in 1..=1000 {
        graph.add_edge(0, leaf, RoadKind::Public).unwrap();
    }
    let network = CountingNetwork {
        graph: &graph,
        pulled: Cell::new(0),
    };

    let route = PathSearch::new(&network)
        .find_path(0, 1, 0, 0)
        .unwrap()
        .unwrap();
    assert_eq!(route.nodes, vec![0, 1]);
    assert_eq!(network.pulled.get(), 1);
}
