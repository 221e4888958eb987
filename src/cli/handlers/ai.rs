use crate::assistant::{Assistant, GeminiClient};
use crate::cli::commands::AiAction;
use crate::editor::{PostDraft, title_from_generated};
use crate::model::Post;
use anyhow::{Result, bail};
use colored::Colorize;

use super::CommandContext;

pub fn handle_ai(ctx: &CommandContext, action: AiAction) -> Result<()> {
    // reqwest is built without a bundled provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let client = GeminiClient::from_env(&ctx.config.assistant)?;
    run_action(ctx, &client, action)
}

fn run_action(ctx: &CommandContext, assistant: &dyn Assistant, action: AiAction) -> Result<()> {
    match action {
        AiAction::Draft { topic, post, save } => draft(ctx, assistant, topic, post, save),
        AiAction::Ideas { json } => {
            let ideas = assistant.generate_ideas()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ideas)?);
            } else {
                for idea in &ideas {
                    println!("  • {}", idea);
                }
            }
            Ok(())
        }
        AiAction::Cover { id } => {
            let existing = ctx.require_post(&id)?;
            println!("{} cover for {}...", "Painting".cyan(), existing.title);
            let src = assistant.generate_cover_image(&existing.title)?;

            let mut draft = PostDraft::from_post(&existing);
            draft.cover_image = src;
            save_draft(ctx, draft, Some(&existing))?;
            println!("{} cover of {}", "Updated".green(), id.cyan());
            Ok(())
        }
    }
}

fn draft(
    ctx: &CommandContext,
    assistant: &dyn Assistant,
    topic: Option<String>,
    post_id: Option<String>,
    save: bool,
) -> Result<()> {
    let existing = post_id.map(|id| ctx.require_post(&id)).transpose()?;
    let topic = match (topic, &existing) {
        (Some(t), _) => t,
        (None, Some(p)) => p.title.clone(),
        (None, None) => bail!("Give a --topic or a --post to refine"),
    };

    let generated =
        assistant.generate_content(&topic, existing.as_ref().map(|p| p.content.as_str()))?;

    if !save {
        println!("{}", generated);
        return Ok(());
    }

    let mut draft = match &existing {
        Some(p) => PostDraft::from_post(p),
        None => PostDraft {
            title: title_from_generated(&generated).unwrap_or_else(|| topic.clone()),
            ..PostDraft::default()
        },
    };
    draft.content = generated;
    // Derive a fresh excerpt from the new content
    draft.excerpt.clear();

    let post = save_draft(ctx, draft, existing.as_ref())?;
    println!("{} {} {}", "Saved".green(), post.id.cyan(), post.title);
    Ok(())
}

fn save_draft(
    ctx: &CommandContext,
    draft: PostDraft,
    existing: Option<&Post>,
) -> Result<Post> {
    let id = match existing {
        Some(p) => p.id.clone(),
        None => ctx.store.generate_id()?,
    };
    let settings = &ctx.config.blog;
    let post = draft.into_post(id, existing, &settings.author, settings.excerpt_length)?;
    Ok(ctx.store.save_post(post)?)
}
