use crate::model::Post;
use regex::Regex;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Simple substring search (case-insensitive)
    Simple(String),
    /// Regex search
    Regex(Regex),
    /// Field-specific search
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Excerpt,
    Content,
    Tag,
    Author,
    Id,
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Simple: "rust" -> searches title, excerpt, content and tags
    /// - Field-specific: "title:rust" -> searches title only
    /// - Regex: "regex:ru.t" -> regex search
    /// - Combined: "tag:regex:^ru" -> regex in tag field
    pub fn parse(query: &str) -> Result<Self, String> {
        if query.is_empty() {
            return Err("Empty query".to_string());
        }

        if let Some((field_str, pattern)) = query.split_once(':') {
            if let Ok(field) = field_str.parse::<SearchField>() {
                let sub_query = Self::parse(pattern)?;
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(sub_query),
                });
            }

            if field_str == "regex" {
                let regex = Regex::new(pattern).map_err(|e| format!("Invalid regex: {}", e))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_string()))
    }

    /// Match against a Post
    pub fn matches_post(&self, post: &Post) -> bool {
        match self {
            SearchQuery::Simple(_) | SearchQuery::Regex(_) => {
                self.matches_text(&post.title)
                    || self.matches_text(&post.excerpt)
                    || self.matches_text(&post.content)
                    || post.tags.iter().any(|tag| self.matches_text(tag))
            }
            SearchQuery::Field { field, pattern } => match field {
                SearchField::Title => pattern.matches_text(&post.title),
                SearchField::Excerpt => pattern.matches_text(&post.excerpt),
                SearchField::Content => pattern.matches_text(&post.content),
                SearchField::Tag => post.tags.iter().any(|tag| pattern.matches_text(tag)),
                SearchField::Author => pattern.matches_text(&post.author),
                SearchField::Id => pattern.matches_text(&post.id),
            },
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        match self {
            SearchQuery::Simple(p) => text.to_lowercase().contains(&p.to_lowercase()),
            SearchQuery::Regex(r) => r.is_match(text),
            // Nested field prefixes ("title:tag:x") never match
            SearchQuery::Field { .. } => false,
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "excerpt" => Ok(SearchField::Excerpt),
            "content" | "body" => Ok(SearchField::Content),
            "tag" | "tags" => Ok(SearchField::Tag),
            "author" => Ok(SearchField::Author),
            "id" => Ok(SearchField::Id),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(query: &str, post: &Post) -> bool {
        SearchQuery::parse(query).unwrap().matches_post(post)
    }

    fn create_test_post() -> Post {
        Post::new(
            "post-123".to_string(),
            "Writing a parser in Rust".to_string(),
            "Tokenizers crash on malformed input.\nAdd error handling.".to_string(),
        )
        .with_excerpt("A short tour of hand-written tokenizers".to_string())
        .with_author("Ada".to_string())
        .with_tags(vec!["rust".to_string(), "parsing".to_string()])
    }

    #[test]
    fn test_simple_search() {
        let post = create_test_post();

        assert!(hits("parser", &post));
        assert!(hits("tour", &post));
        assert!(hits("parsing", &post));
        assert!(!hits("nonexistent", &post));
    }

    #[test]
    fn test_simple_search_skips_author_and_id() {
        let post = create_test_post();
        assert!(!hits("Ada", &post));
        assert!(!hits("post-123", &post));
    }

    #[test]
    fn test_field_specific_search() {
        let post = create_test_post();

        assert!(hits("title:rust", &post));
        assert!(hits("content:crash", &post));
        assert!(!hits("content:rust", &post));
        assert!(hits("tag:pars", &post));
        assert!(!hits("tag:urgent", &post));
        assert!(hits("author:ada", &post));
        assert!(hits("id:123", &post));
    }

    #[test]
    fn test_regex_search() {
        let post = create_test_post();

        assert!(hits("regex:(parser|lexer)", &post));
        assert!(SearchQuery::parse("regex:[invalid").is_err());
    }

    #[test]
    fn test_combined_field_and_regex() {
        let post = create_test_post();
        assert!(hits("title:regex:^Writing", &post));
        assert!(!hits("content:regex:^Writing", &post));
    }

    #[test]
    fn test_unknown_field_is_plain_text() {
        let post = create_test_post();
        let query = SearchQuery::parse("note:thing").unwrap();
        assert!(matches!(query, SearchQuery::Simple(_)));
        assert!(!query.matches_post(&post));
    }

    #[test]
    fn test_case_insensitive_field_search() {
        let post = create_test_post();
        assert!(hits("TITLE:RUST", &post));
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert!(SearchQuery::parse("").is_err());
    }
}
