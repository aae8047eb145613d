//! CLI commands for roadpath

pub mod adjacent;
pub mod dispatch;
pub mod edges;
pub mod path;
pub mod show;
