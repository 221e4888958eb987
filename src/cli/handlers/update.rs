use crate::editor::PostDraft;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::resolve_body;

/// Parameters for editing a post
pub struct UpdateParams {
    pub id: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub body_file: Option<String>,
    pub excerpt: Option<String>,
    pub add_tag: Vec<String>,
    pub remove_tag: Vec<String>,
    pub cover: Option<String>,
    pub json: bool,
}

pub fn handle_update(ctx: &CommandContext, params: UpdateParams) -> Result<()> {
    let existing = ctx.require_post(&params.id)?;
    let mut draft = PostDraft::from_post(&existing);

    if let Some(t) = params.title {
        draft.title = t;
    }
    if let Some(b) = resolve_body(params.body, params.body_file)? {
        draft.content = b;
    }
    if let Some(e) = params.excerpt {
        draft.excerpt = e;
    }
    if let Some(c) = params.cover {
        draft.cover_image = c;
    }

    let mut tags = existing.tags.clone();
    for t in params.add_tag {
        if !tags.contains(&t) {
            tags.push(t);
        }
    }
    for t in params.remove_tag {
        tags.retain(|x| x != &t);
    }
    draft.tags = tags.join(", ");

    let settings = &ctx.config.blog;
    let post = draft.into_post(
        existing.id.clone(),
        Some(&existing),
        &settings.author,
        settings.excerpt_length,
    )?;
    let post = ctx.store.save_post(post)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{} {} {}", "Updated".green(), post.id.cyan(), post.title);
    }
    Ok(())
}
