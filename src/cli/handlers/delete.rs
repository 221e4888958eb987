use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_delete(ctx: &CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    if !force && !json && !confirm(&format!("Delete {} permanently?", id.cyan()))? {
        println!("Cancelled.");
        return Ok(());
    }

    let removed = ctx.store.delete_post(&id)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id,
                "removed": removed
            }))?
        );
    } else if removed {
        println!("{} {}", "Deleted".red(), id.cyan());
    } else {
        println!("{} {}", "No post with id".yellow(), id.cyan());
    }
    Ok(())
}
