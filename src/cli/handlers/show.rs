use crate::markdown::html::markdown_to_html;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_post;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool, html: bool) -> Result<()> {
    let post = ctx.require_post(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else if html {
        print!("{}", markdown_to_html(&post.content));
    } else {
        print_post(&post);
    }
    Ok(())
}
