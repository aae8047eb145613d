//! `roadpath path` command - search for a route within road budgets
//!
//! Start, destination and budgets default to the map header. `[search]` in
//! the config overrides the header budgets and flags override both.

use std::time::Instant;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, PathArgs};
use roadpath_core::config::RoadpathConfig;
use roadpath_core::error::Result;
use roadpath_core::format::format_node_sequence;
use roadpath_core::graph::{NodeId, PathSearch, Route, SearchBudget, SearchStats};
use roadpath_core::map::RoadMap;

/// JSON shape of a path query result
#[derive(Debug, Serialize)]
struct PathReport<'a> {
    start: NodeId,
    destination: NodeId,
    budget: SearchBudget,
    found: bool,
    route: Option<&'a Route>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SearchStats>,
}

/// Budget after applying config and flag overrides to the map header
fn effective_budget(config: &RoadpathConfig, map: &RoadMap, args: &PathArgs) -> SearchBudget {
    let base = config.budget_over(map.budget());
    SearchBudget {
        max_private: args.max_private.unwrap_or(base.max_private),
        max_construction: args.max_construction.unwrap_or(base.max_construction),
    }
}

/// Execute the path command
pub fn execute(cli: &Cli, config: &RoadpathConfig, map: &RoadMap, args: &PathArgs) -> Result<()> {
    let start = Instant::now();

    let from = args.from.unwrap_or(map.start());
    let to = args.to.unwrap_or(map.destination());
    let budget = effective_budget(config, map, args);

    let (route, stats) = PathSearch::new(map.graph()).find_path_with_stats(from, to, budget)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), found = route.is_some(), "find_path");
    }

    match cli.format {
        OutputFormat::Json => {
            let report = PathReport {
                start: from,
                destination: to,
                budget,
                found: route.is_some(),
                route: route.as_ref(),
                stats: args.stats.then_some(stats),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            match &route {
                Some(route) => print_route(cli, route, budget),
                None => println!("No path found"),
            }
            if args.stats {
                print_stats(&stats);
            }
        }
    }

    Ok(())
}

fn print_route(cli: &Cli, route: &Route, budget: SearchBudget) {
    println!("{}", format_node_sequence(&route.nodes));
    if cli.quiet {
        return;
    }
    println!(
        "{} road(s): {}/{} private, {}/{} construction",
        route.hops(),
        route.usage.private,
        budget.max_private,
        route.usage.construction,
        budget.max_construction
    );
}

fn print_stats(stats: &SearchStats) {
    println!(
        "expanded {}, pruned {} over budget, skipped {} on path, {} backtrack(s), max depth {}",
        stats.expanded,
        stats.pruned_by_budget,
        stats.skipped_on_path,
        stats.backtracks,
        stats.max_depth
    );
}
