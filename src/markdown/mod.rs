//! A deliberately small, line-oriented markdown renderer.
//!
//! Each input line becomes exactly one [`Block`]: a heading (three levels),
//! a blockquote, a list item, a paragraph, or a blank spacer. Non-blank
//! blocks carry inline [`Span`]s for bold, italic, inline code and images.
//! There is no multi-line structure: no nested lists, fenced code or tables.
//!
//! ```
//! use mindstream::markdown::{render, BlockKind, Span};
//!
//! let blocks: Vec<_> = render("# Hello\n**bold** text").collect();
//! assert_eq!(blocks[0].kind, BlockKind::Heading(1));
//! assert_eq!(blocks[1].spans[0], Span::Bold("bold"));
//! ```
//!
//! Rendering borrows from the input and never fails. Consumers decide how
//! to present the nodes; [`html::to_html`] is the HTML writer and escapes
//! every text run.

mod block;
pub mod html;
mod inline;

pub use block::{Block, BlockKind, Blocks, render};
pub use inline::{Span, Spans, parse_inline};
