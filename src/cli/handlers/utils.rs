use crate::markdown::{self, BlockKind, Span};
use crate::model::{Post, format_date, format_datetime};
use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::io::{self, Read, Write};

/// Resolve content from CLI arg, file, or stdin
pub fn resolve_body(body: Option<String>, body_file: Option<String>) -> Result<Option<String>> {
    if let Some(b) = body {
        if b == "-" {
            return read_stdin().map(Some);
        }
        return Ok(Some(b));
    }
    if let Some(path) = body_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content from {}", path))?;
        return Ok(Some(content.trim_end().to_string()));
    }
    Ok(None)
}

pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(content.trim_end().to_string())
}

/// Ask a yes/no question on stdout; anything but `y` is a no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub fn print_post_list(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        let tag = post
            .primary_tag()
            .map(|t| format!("[{}] ", t).magenta().to_string())
            .unwrap_or_default();
        let comments = match post.comments.len() {
            0 => String::new(),
            n => format!(" ({} comments)", n).dimmed().to_string(),
        };
        println!(
            "{} {}{}  {}{}",
            post.id.cyan(),
            tag,
            post.title.bold(),
            format_date(post.created_at).dimmed(),
            comments
        );
    }
}

pub fn print_post(post: &Post) {
    println!("{}", post.title.bold());
    println!(
        "{} · {} · {}",
        post.author,
        format_date(post.created_at),
        post.id.cyan()
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", ").magenta());
    }
    if let Some(ref cover) = post.cover_image {
        println!("Cover: {}", describe_image_source(cover).dimmed());
    }
    println!();
    print_markdown(&post.content);
    println!();
    print_comments(post);
}

fn print_comments(post: &Post) {
    println!("{}", format!("Comments ({})", post.comments.len()).bold());
    if post.comments.is_empty() {
        println!("{}", "No comments yet.".dimmed().italic());
        return;
    }
    for comment in &post.comments {
        println!(
            "  {} {}",
            comment.author.bold(),
            format_datetime(comment.created_at).dimmed()
        );
        println!("  {}", comment.content);
    }
}

/// Prints markdown with terminal styling, one line per block.
pub fn print_markdown(content: &str) {
    for block in markdown::render(content) {
        match block.kind {
            BlockKind::Heading(1) => println!("{}", block.plain_text().bold().underline()),
            BlockKind::Heading(_) => println!("{}", block.plain_text().bold()),
            BlockKind::Blockquote => {
                println!("{} {}", "│".dimmed(), styled_line(&block.spans).italic())
            }
            BlockKind::ListItem => println!("  • {}", styled_line(&block.spans)),
            BlockKind::Paragraph => println!("{}", styled_line(&block.spans)),
            BlockKind::Blank => println!(),
        }
    }
}

fn styled_line(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| style_span(s).to_string()).collect()
}

fn style_span(span: &Span<'_>) -> ColoredString {
    match *span {
        Span::Text(t) => t.normal(),
        Span::Bold(t) => t.bold(),
        Span::Italic(t) => t.italic(),
        Span::Code(t) => t.yellow(),
        Span::Image { alt, src } => {
            format!("[image: {} {}]", alt, describe_image_source(src)).magenta()
        }
    }
}

/// Short form of an image source; data URLs are summarised, not printed.
pub fn describe_image_source(src: &str) -> String {
    match src.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("unknown");
            format!("(embedded {}, {} bytes)", mime, src.len())
        }
        None => format!("({})", src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_url() {
        assert_eq!(describe_image_source("http://x/y.png"), "(http://x/y.png)");
    }

    #[test]
    fn test_describe_data_url() {
        let src = "data:image/png;base64,AAAA";
        assert_eq!(
            describe_image_source(src),
            format!("(embedded image/png, {} bytes)", src.len())
        );
    }

    #[test]
    fn test_resolve_body_prefers_inline() {
        let body = resolve_body(Some("text".into()), Some("missing.md".into())).unwrap();
        assert_eq!(body.as_deref(), Some("text"));
    }

    #[test]
    fn test_resolve_body_missing_file() {
        assert!(resolve_body(None, Some("definitely/missing.md".into())).is_err());
    }

    #[test]
    fn test_styled_line_keeps_text() {
        colored::control::set_override(false);
        let block = markdown::render("**a** b `c`").next().unwrap();
        assert_eq!(styled_line(&block.spans), "a b c");
    }
}
