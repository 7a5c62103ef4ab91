//! `pathwatch config` - CLI configuration inspection.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        }
        _ => {
            let status = if ctx.config_path.exists() {
                "loaded".green()
            } else {
                "not found, using defaults".dimmed()
            };
            println!("{} {} ({status})", "Config file:".bold(), ctx.config_path.display());
            println!("{} {}", "Database:".bold(), ctx.database.display());
            println!();
            println!("{}", toml::to_string_pretty(&ctx.config)?);
        }
    }

    Ok(())
}
