use crate::query::{SortOrder, select_posts};
use anyhow::Result;

use super::CommandContext;
use super::utils::print_post_list;

pub fn handle_list(
    ctx: &CommandContext,
    tag: Option<String>,
    order: SortOrder,
    json: bool,
) -> Result<()> {
    let posts = select_posts(ctx.store.list_posts()?, tag.as_deref(), order);

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        print_post_list(&posts);
    }
    Ok(())
}
