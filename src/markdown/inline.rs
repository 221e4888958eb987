/// An inline run within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    Code(&'a str),
    Image { alt: &'a str, src: &'a str },
}

impl<'a> Span<'a> {
    /// The readable text of the span. Images yield their alt text.
    pub fn text(&self) -> &'a str {
        match *self {
            Span::Text(t) | Span::Bold(t) | Span::Italic(t) | Span::Code(t) => t,
            Span::Image { alt, .. } => alt,
        }
    }
}

/// Tokenizes one line of text into spans.
///
/// Matching is left to right and non-overlapping. At each position the
/// candidates are tried in order image, bold, italic, code; the first that
/// closes wins, using the nearest closing delimiter. Anything that does not
/// close stays in the surrounding text run.
pub fn parse_inline(text: &str) -> Spans<'_> {
    Spans {
        text,
        pos: 0,
        pending: None,
    }
}

/// Iterator over the spans of a line, see [`parse_inline`].
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    text: &'a str,
    pos: usize,
    pending: Option<(Span<'a>, usize)>,
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((span, end)) = self.pending.take() {
            self.pos = end;
            return Some(span);
        }

        let start = self.pos;
        let mut cursor = start;
        while cursor < self.text.len() {
            if let Some((span, len)) = match_at(&self.text[cursor..]) {
                let end = cursor + len;
                if cursor == start {
                    self.pos = end;
                    return Some(span);
                }
                // Flush the literal run first, emit the span next call
                self.pending = Some((span, end));
                self.pos = cursor;
                return Some(Span::Text(&self.text[start..cursor]));
            }
            cursor += next_char_len(&self.text[cursor..]);
        }

        if start < self.text.len() {
            self.pos = self.text.len();
            return Some(Span::Text(&self.text[start..]));
        }
        None
    }
}

/// Tries every span form at the start of `rest`, in precedence order.
/// Returns the span and the number of bytes it consumes.
fn match_at(rest: &str) -> Option<(Span<'_>, usize)> {
    match rest.as_bytes().first()? {
        b'!' => match_image(rest),
        b'*' => match delimited(rest, "**") {
            Some((t, n)) => Some((Span::Bold(t), n)),
            // A bare `**` closes as italic but reads as an empty bold
            None => delimited(rest, "*").map(|(t, n)| match t {
                "" => (Span::Bold(t), n),
                _ => (Span::Italic(t), n),
            }),
        },
        b'`' => delimited(rest, "`").map(|(t, n)| (Span::Code(t), n)),
        _ => None,
    }
}

fn match_image(rest: &str) -> Option<(Span<'_>, usize)> {
    let after_open = rest.strip_prefix("![")?;
    let alt_end = after_open.find("](")?;
    let alt = &after_open[..alt_end];
    let after_alt = &after_open[alt_end + 2..];
    let src_end = after_alt.find(')')?;
    let src = &after_alt[..src_end];
    let consumed = 2 + alt_end + 2 + src_end + 1;
    Some((Span::Image { alt, src }, consumed))
}

/// Matches `delim content delim` with the shortest content, possibly empty.
fn delimited<'a>(rest: &'a str, delim: &str) -> Option<(&'a str, usize)> {
    let after_open = rest.strip_prefix(delim)?;
    let close = after_open.find(delim)?;
    let content = &after_open[..close];
    Some((content, delim.len() + close + delim.len()))
}

fn next_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<Span<'_>> {
        parse_inline(text).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(spans("just words"), vec![Span::Text("just words")]);
    }

    #[test]
    fn test_empty_line_has_no_spans() {
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            spans("**bold** and *italic*"),
            vec![
                Span::Bold("bold"),
                Span::Text(" and "),
                Span::Italic("italic")
            ]
        );
    }

    #[test]
    fn test_multiple_bold_spans_are_isolated() {
        assert_eq!(
            spans("**a** x **b**"),
            vec![Span::Bold("a"), Span::Text(" x "), Span::Bold("b")]
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            spans("run `cargo` now"),
            vec![Span::Text("run "), Span::Code("cargo"), Span::Text(" now")]
        );
    }

    #[test]
    fn test_code_span_keeps_inner_stars() {
        assert_eq!(
            spans("`a*b` c*"),
            vec![Span::Code("a*b"), Span::Text(" c*")]
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            spans("![alt](http://x/y.png)"),
            vec![Span::Image {
                alt: "alt",
                src: "http://x/y.png"
            }]
        );
    }

    #[test]
    fn test_image_with_data_url() {
        let line = "see ![photo.jpg](data:image/jpeg;base64,/9j/4AAQ+/=) here";
        assert_eq!(
            spans(line),
            vec![
                Span::Text("see "),
                Span::Image {
                    alt: "photo.jpg",
                    src: "data:image/jpeg;base64,/9j/4AAQ+/="
                },
                Span::Text(" here"),
            ]
        );
    }

    #[test]
    fn test_image_outranks_bold_in_alt() {
        assert_eq!(
            spans("![**x**](u)"),
            vec![Span::Image {
                alt: "**x**",
                src: "u"
            }]
        );
    }

    #[test]
    fn test_unclosed_image_is_literal() {
        assert_eq!(
            spans("![alt](no close"),
            vec![Span::Text("![alt](no close")]
        );
    }

    #[test]
    fn test_stray_star_is_literal() {
        assert_eq!(spans("2 * 3 = 6"), vec![Span::Text("2 * 3 = 6")]);
    }

    #[test]
    fn test_unclosed_bold_starts_with_empty_bold() {
        assert_eq!(spans("**a*"), vec![Span::Bold(""), Span::Text("a*")]);
    }

    #[test]
    fn test_empty_delimiter_pairs_form_empty_spans() {
        assert_eq!(
            spans("a ** b"),
            vec![Span::Text("a "), Span::Bold(""), Span::Text(" b")]
        );
        assert_eq!(
            spans("x****y"),
            vec![Span::Text("x"), Span::Bold(""), Span::Text("y")]
        );
        assert_eq!(spans("``"), vec![Span::Code("")]);
        assert_eq!(spans("***"), vec![Span::Bold(""), Span::Text("*")]);
    }

    #[test]
    fn test_shortest_match_for_bold() {
        assert_eq!(spans("***a**"), vec![Span::Bold("*a")]);
    }

    #[test]
    fn test_angle_brackets_are_plain_text() {
        assert_eq!(
            spans("<script>alert(1)</script>"),
            vec![Span::Text("<script>alert(1)</script>")]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            spans("café *über* ✓"),
            vec![Span::Text("café "), Span::Italic("über"), Span::Text(" ✓")]
        );
    }

    #[test]
    fn test_span_text() {
        assert_eq!(Span::Bold("b").text(), "b");
        assert_eq!(Span::Image { alt: "a", src: "s" }.text(), "a");
    }
}
