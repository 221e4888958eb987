use anyhow::{Context, Result};
use clap::Parser;

use mindstream::cli::handlers::{self, CommandContext, CreateParams, UpdateParams};
use mindstream::cli::{Cli, Commands};
use mindstream::config::BlogConfig;
use mindstream::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    // Commands that work without an initialized blog
    let command = match cli.command {
        Commands::Init { author } => return handlers::handle_init(&cwd, author),
        Commands::Render { file, html } => return handlers::handle_render(file, html),
        other => other,
    };

    let (config, root) = BlogConfig::load(&cwd)?;
    let ctx = CommandContext::new(config, root);

    match command {
        Commands::New {
            title,
            body,
            body_file,
            excerpt,
            tags,
            cover,
            json,
        } => handlers::handle_create(
            &ctx,
            CreateParams {
                title,
                body,
                body_file,
                excerpt,
                tags,
                cover,
                json,
            },
        ),
        Commands::Edit {
            id,
            title,
            body,
            body_file,
            excerpt,
            add_tag,
            remove_tag,
            cover,
            json,
        } => handlers::handle_update(
            &ctx,
            UpdateParams {
                id,
                title,
                body,
                body_file,
                excerpt,
                add_tag,
                remove_tag,
                cover,
                json,
            },
        ),
        Commands::List { tag, sort, json } => handlers::handle_list(&ctx, tag, sort.into(), json),
        Commands::Show { id, json, html } => handlers::handle_show(&ctx, id, json, html),
        Commands::Delete { id, force, json } => handlers::handle_delete(&ctx, id, force, json),
        Commands::Comment {
            id,
            content,
            author,
            json,
        } => handlers::handle_comment(&ctx, id, content, author, json),
        Commands::Tags { json } => handlers::handle_tags(&ctx, json),
        Commands::Search { query, json } => handlers::handle_search(&ctx, query, json),
        Commands::Attach {
            id,
            image,
            at,
            cover,
        } => handlers::handle_attach(&ctx, id, &image, at, cover),
        Commands::Export { output } => handlers::handle_export(&ctx, output),
        Commands::Import { file } => handlers::handle_import(&ctx, &file),
        Commands::Ai { action } => handlers::handle_ai(&ctx, action),
        Commands::Init { .. } | Commands::Render { .. } => Ok(()),
    }
}
