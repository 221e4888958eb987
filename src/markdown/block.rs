use super::inline::{Span, parse_inline};

/// Structural role of a single rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `# `, `## ` or `### ` heading, holding the level 1..=3.
    Heading(u8),
    Blockquote,
    ListItem,
    Paragraph,
    /// Empty or whitespace-only line. Carries no spans.
    Blank,
}

/// One line of rendered markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Zero-based line index; stable across re-renders of the same text.
    pub key: usize,
    pub kind: BlockKind,
    pub spans: Vec<Span<'a>>,
}

impl Block<'_> {
    /// Concatenated readable text of the block's spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Line prefixes in the order they are tested.
const PREFIXES: &[(&str, BlockKind)] = &[
    ("# ", BlockKind::Heading(1)),
    ("## ", BlockKind::Heading(2)),
    ("### ", BlockKind::Heading(3)),
    ("> ", BlockKind::Blockquote),
    ("- ", BlockKind::ListItem),
    ("* ", BlockKind::ListItem),
];

/// Renders `content` into a lazy sequence of blocks, one per `\n`-separated
/// line, in input order.
pub fn render(content: &str) -> Blocks<'_> {
    Blocks {
        lines: content.split('\n').enumerate(),
    }
}

/// Iterator returned by [`render`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, line) = self.lines.next()?;
        Some(classify(key, line))
    }
}

fn classify(key: usize, line: &str) -> Block<'_> {
    for (prefix, kind) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Block {
                key,
                kind: *kind,
                spans: parse_inline(rest).collect(),
            };
        }
    }

    if line.trim().is_empty() {
        return Block {
            key,
            kind: BlockKind::Blank,
            spans: Vec::new(),
        };
    }

    Block {
        key,
        kind: BlockKind::Paragraph,
        spans: parse_inline(line).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(content: &str) -> Vec<Block<'_>> {
        render(content).collect()
    }

    #[test]
    fn test_heading_level_one() {
        let out = blocks("# Hello");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, BlockKind::Heading(1));
        assert_eq!(out[0].spans, vec![Span::Text("Hello")]);
    }

    #[test]
    fn test_heading_levels() {
        let out = blocks("# a\n## b\n### c\n#### d");
        assert_eq!(out[0].kind, BlockKind::Heading(1));
        assert_eq!(out[1].kind, BlockKind::Heading(2));
        assert_eq!(out[2].kind, BlockKind::Heading(3));
        assert_eq!(out[3].kind, BlockKind::Paragraph);
        assert_eq!(out[3].plain_text(), "#### d");
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let out = blocks("#tag");
        assert_eq!(out[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_list_items_are_independent() {
        let out = blocks("- item one\n- item two");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|b| b.kind == BlockKind::ListItem));
        assert_eq!(out[0].plain_text(), "item one");
        assert_eq!(out[1].plain_text(), "item two");
    }

    #[test]
    fn test_star_list_item_with_inline_bold() {
        let out = blocks("* **AI**: drafts");
        assert_eq!(out[0].kind, BlockKind::ListItem);
        assert_eq!(out[0].spans, vec![Span::Bold("AI"), Span::Text(": drafts")]);
    }

    #[test]
    fn test_blockquote() {
        let out = blocks("> quoted *words*");
        assert_eq!(out[0].kind, BlockKind::Blockquote);
        assert_eq!(
            out[0].spans,
            vec![Span::Text("quoted "), Span::Italic("words")]
        );
    }

    #[test]
    fn test_empty_input_is_one_blank_block() {
        let out = blocks("");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, BlockKind::Blank);
        assert!(out[0].spans.is_empty());
    }

    #[test]
    fn test_whitespace_line_is_blank() {
        let out = blocks("a\n   \t\nb");
        assert_eq!(out[1].kind, BlockKind::Blank);
        assert!(out[1].spans.is_empty());
    }

    #[test]
    fn test_image_paragraph() {
        let out = blocks("![alt](http://x/y.png)");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, BlockKind::Paragraph);
        assert_eq!(
            out[0].spans,
            vec![Span::Image {
                alt: "alt",
                src: "http://x/y.png"
            }]
        );
    }

    #[test]
    fn test_keys_follow_line_index() {
        let out = blocks("# T\n\npara\n- x");
        let keys: Vec<usize> = out.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_blank() {
        let out = blocks("text\n");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].kind, BlockKind::Blank);
    }

    #[test]
    fn test_bare_prefix_marker_is_heading_with_no_spans() {
        let out = blocks("# ");
        assert_eq!(out[0].kind, BlockKind::Heading(1));
        assert!(out[0].spans.is_empty());
    }

    #[test]
    fn test_render_is_lazy() {
        let mut iter = render("a\nb\nc");
        assert_eq!(iter.next().map(|b| b.key), Some(0));
        assert_eq!(iter.count(), 2);
    }
}
