use crate::query::{SortOrder, sort_posts};
use crate::search::SearchQuery;
use anyhow::{Result, anyhow};

use super::CommandContext;
use super::utils::print_post_list;

pub fn handle_search(ctx: &CommandContext, query: String, json: bool) -> Result<()> {
    let parsed = SearchQuery::parse(&query).map_err(|e| anyhow!(e))?;

    let mut results: Vec<_> = ctx
        .store
        .list_posts()?
        .into_iter()
        .filter(|p| parsed.matches_post(p))
        .collect();
    sort_posts(&mut results, SortOrder::Newest);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Found {} results for '{}':\n", results.len(), query);
        print_post_list(&results);
    }
    Ok(())
}
