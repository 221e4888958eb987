use crate::import_export::import_from_file;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::CommandContext;

pub fn handle_import(ctx: &CommandContext, file: &Path) -> Result<()> {
    let summary = import_from_file(&ctx.store, file)?;
    println!(
        "{} {} new, {} replaced",
        "Imported".green(),
        summary.added,
        summary.replaced
    );
    Ok(())
}
