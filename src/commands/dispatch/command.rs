//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use roadpath_core::config::RoadpathConfig;
use roadpath_core::error::Result;
use roadpath_core::map::RoadMap;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// `--config` if given, otherwise `roadpath.toml` in the working directory
    pub fn load_config(&self) -> Result<RoadpathConfig> {
        match &self.cli.config {
            Some(path) => RoadpathConfig::load(&self.resolve(path)),
            None => RoadpathConfig::discover(self.root),
        }
    }

    pub fn load_map(&self, path: &Path, config: &RoadpathConfig) -> Result<RoadMap> {
        let map = RoadMap::from_path_with_config(&self.resolve(path), config)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_map");
        Ok(map)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("roadpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route search over grid road maps with private and construction budgets.");
        println!();
        println!("Run `roadpath --help` for usage information.");
        Ok(())
    }
}
