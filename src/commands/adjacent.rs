//! `roadpath adjacent` command - is there a road between two nodes

use crate::cli::{Cli, OutputFormat};
use roadpath_core::error::Result;
use roadpath_core::graph::NodeId;
use roadpath_core::map::RoadMap;

/// Execute the adjacent command
pub fn execute(cli: &Cli, map: &RoadMap, u: NodeId, v: NodeId) -> Result<()> {
    let graph = map.graph();
    let kind = if graph.are_adjacent(u, v)? {
        Some(graph.edge(u, v)?.kind)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "u": u,
                "v": v,
                "adjacent": kind.is_some(),
                "kind": kind,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match kind {
            Some(kind) => println!("yes ({})", kind),
            None => println!("no"),
        },
    }

    Ok(())
}
