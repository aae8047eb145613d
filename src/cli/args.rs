use std::path::PathBuf;

use clap::Args;
use roadpath_core::graph::NodeId;

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Map file
    pub map: PathBuf,

    /// Start node (default: the map's start)
    #[arg(long)]
    pub from: Option<NodeId>,

    /// Destination node (default: the map's destination)
    #[arg(long)]
    pub to: Option<NodeId>,

    /// Most private roads the route may use
    #[arg(long)]
    pub max_private: Option<usize>,

    /// Most construction roads the route may use
    #[arg(long)]
    pub max_construction: Option<usize>,

    /// Also report search statistics
    #[arg(long)]
    pub stats: bool,
}
