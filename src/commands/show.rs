//! `roadpath show` command - summarise a map

use crate::cli::{Cli, OutputFormat};
use roadpath_core::error::Result;
use roadpath_core::map::RoadMap;

/// Execute the show command
pub fn execute(cli: &Cli, map: &RoadMap) -> Result<()> {
    let summary = map.summary();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => {
            println!(
                "Map: {} x {} ({} nodes, scale {})",
                summary.width, summary.length, summary.nodes, summary.scale
            );
            println!("Start: {}", summary.start);
            println!("Destination: {}", summary.destination);
            println!(
                "Budget: {} private, {} construction",
                summary.budget.max_private, summary.budget.max_construction
            );
            let by_kind = summary
                .roads_by_kind
                .iter()
                .map(|(kind, count)| format!("{} {}", count, kind))
                .collect::<Vec<_>>()
                .join(", ");
            println!("Roads: {} ({})", summary.roads, by_kind);
        }
    }

    Ok(())
}
