use crate::editor::PostDraft;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::resolve_body;

/// Parameters for creating a post
pub struct CreateParams {
    pub title: String,
    pub body: Option<String>,
    pub body_file: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<String>,
    pub cover: Option<String>,
    pub json: bool,
}

pub fn handle_create(ctx: &CommandContext, params: CreateParams) -> Result<()> {
    let content = resolve_body(params.body, params.body_file)?.unwrap_or_default();

    let draft = PostDraft {
        title: params.title,
        content,
        excerpt: params.excerpt.unwrap_or_default(),
        tags: params.tags.unwrap_or_default(),
        cover_image: params.cover.unwrap_or_default(),
    };

    let settings = &ctx.config.blog;
    let post = draft.into_post(
        ctx.store.generate_id()?,
        None,
        &settings.author,
        settings.excerpt_length,
    )?;
    let post = ctx.store.save_post(post)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{} {} {}", "Published".green(), post.id.cyan(), post.title);
    }
    Ok(())
}
