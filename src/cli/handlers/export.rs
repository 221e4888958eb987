use crate::import_export::{export_posts, export_to_file};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_export(ctx: &CommandContext, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let count = export_to_file(&ctx.store, &path)?;
            println!(
                "{} {} posts to {}",
                "Exported".green(),
                count,
                path.display()
            );
        }
        None => println!("{}", export_posts(&ctx.store)?),
    }
    Ok(())
}
