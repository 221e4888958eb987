use crate::markdown::html::markdown_to_html;
use anyhow::{Context, Result};

use super::utils::{print_markdown, read_stdin};

/// Renders a markdown file, or stdin for `None` and `-`. Needs no blog.
pub fn handle_render(file: Option<String>, html: bool) -> Result<()> {
    let content = match file.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown from {}", path))?,
    };

    if html {
        print!("{}", markdown_to_html(&content));
    } else {
        print_markdown(&content);
    }
    Ok(())
}
