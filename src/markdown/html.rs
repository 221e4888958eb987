//! HTML output for rendered blocks.
//!
//! Every text run and attribute value is escaped, so markup characters in
//! post content are shown literally rather than interpreted. Adjacent list
//! items are grouped into a single `<ul>`.

use super::{Block, BlockKind, Span, render};
use std::fmt::Write;

/// Renders markdown source straight to an HTML fragment.
pub fn markdown_to_html(content: &str) -> String {
    to_html(render(content))
}

/// Writes a sequence of blocks as an HTML fragment.
pub fn to_html<'a>(blocks: impl IntoIterator<Item = Block<'a>>) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        let is_item = block.kind == BlockKind::ListItem;
        if in_list && !is_item {
            out.push_str("</ul>\n");
        }
        if is_item && !in_list {
            out.push_str("<ul>\n");
        }
        in_list = is_item;

        match block.kind {
            BlockKind::Heading(level) => {
                let _ = write!(out, "<h{level}>");
                write_spans(&mut out, &block.spans);
                let _ = writeln!(out, "</h{level}>");
            }
            BlockKind::Blockquote => wrap(&mut out, "blockquote", &block.spans),
            BlockKind::ListItem => wrap(&mut out, "li", &block.spans),
            BlockKind::Paragraph => wrap(&mut out, "p", &block.spans),
            BlockKind::Blank => out.push_str("<div class=\"spacer\"></div>\n"),
        }
    }

    if in_list {
        out.push_str("</ul>\n");
    }
    out
}

fn wrap(out: &mut String, tag: &str, spans: &[Span<'_>]) {
    let _ = write!(out, "<{tag}>");
    write_spans(out, spans);
    let _ = writeln!(out, "</{tag}>");
}

fn write_spans(out: &mut String, spans: &[Span<'_>]) {
    for span in spans {
        match *span {
            Span::Text(t) => escape_into(out, t),
            Span::Bold(t) => {
                out.push_str("<strong>");
                escape_into(out, t);
                out.push_str("</strong>");
            }
            Span::Italic(t) => {
                out.push_str("<em>");
                escape_into(out, t);
                out.push_str("</em>");
            }
            Span::Code(t) => {
                out.push_str("<code>");
                escape_into(out, t);
                out.push_str("</code>");
            }
            Span::Image { alt, src } => {
                out.push_str("<img src=\"");
                escape_into(out, src);
                out.push_str("\" alt=\"");
                escape_into(out, alt);
                out.push_str("\">");
            }
        }
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 10);
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
