use crate::query::tag_options;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_tags(ctx: &CommandContext, json: bool) -> Result<()> {
    let posts = ctx.store.list_posts()?;
    let tags = tag_options(&posts);

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags in use.");
    }
    for tag in &tags {
        let count = posts.iter().filter(|p| p.has_tag(tag)).count();
        println!("{} {}", tag.magenta(), format!("({})", count).dimmed());
    }
    Ok(())
}
