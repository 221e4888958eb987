use crate::editor::{PostDraft, image_markdown, insert_at, load_image};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::CommandContext;

pub fn handle_attach(
    ctx: &CommandContext,
    id: String,
    image: &Path,
    at: Option<usize>,
    cover: bool,
) -> Result<()> {
    let existing = ctx.require_post(&id)?;
    let src = load_image(image)?;
    let mut draft = PostDraft::from_post(&existing);

    if cover {
        draft.cover_image = src;
    } else {
        let alt = image
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let fragment = image_markdown(&alt, &src);
        let position = at.unwrap_or_else(|| draft.content.chars().count());
        draft.content = insert_at(&draft.content, position, position, &fragment);
    }

    let settings = &ctx.config.blog;
    let post = draft.into_post(
        existing.id.clone(),
        Some(&existing),
        &settings.author,
        settings.excerpt_length,
    )?;
    ctx.store.save_post(post)?;

    let target = if cover { "cover of" } else { "content of" };
    println!(
        "{} {} to {} {}",
        "Attached".green(),
        image.display(),
        target,
        id.cyan()
    );
    Ok(())
}
