//! `roadpath edges` command - roads touching one node, in search order

use crate::cli::{Cli, OutputFormat};
use roadpath_core::error::Result;
use roadpath_core::graph::{Edge, NodeId};
use roadpath_core::map::RoadMap;

/// Execute the edges command
pub fn execute(cli: &Cli, map: &RoadMap, node: NodeId) -> Result<()> {
    let edges: Vec<Edge> = map.graph().incident_edges(node)?.collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node": node,
                "degree": edges.len(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if edges.is_empty() {
                if !cli.quiet {
                    println!("No roads at node {}", node);
                }
                return Ok(());
            }
            for edge in &edges {
                println!("{} -> {} ({})", edge.from, edge.to, edge.kind);
            }
        }
    }

    Ok(())
}
