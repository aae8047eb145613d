//! Command implementations for all roadpath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{adjacent, edges, path, show};
use roadpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.load_config()?;

        match self {
            Commands::Path(args) => {
                let map = ctx.load_map(&args.map, &config)?;
                path::execute(ctx.cli, &config, &map, args)
            }
            Commands::Show { map } => {
                let map = ctx.load_map(map, &config)?;
                show::execute(ctx.cli, &map)
            }
            Commands::Edges { map, node } => {
                let map = ctx.load_map(map, &config)?;
                edges::execute(ctx.cli, &map, *node)
            }
            Commands::Adjacent { map, u, v } => {
                let map = ctx.load_map(map, &config)?;
                adjacent::execute(ctx.cli, &map, *u, *v)
            }
        }
    }
}
