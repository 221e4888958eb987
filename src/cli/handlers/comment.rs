use crate::model::NewComment;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_comment(
    ctx: &CommandContext,
    id: String,
    content: String,
    author: String,
    json: bool,
) -> Result<()> {
    let comment = ctx
        .store
        .add_comment(&id, NewComment::new(author.trim(), content.trim()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!(
            "{} {} on {}",
            "Commented".green(),
            comment.id.cyan(),
            id.cyan()
        );
    }
    Ok(())
}
