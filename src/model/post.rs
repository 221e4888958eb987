use super::{Comment, now_millis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub published: bool,
    pub author: String,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(id: String, title: String, content: String) -> Self {
        let now = now_millis();
        Self {
            id,
            title,
            excerpt: String::new(),
            content,
            cover_image: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            published: true,
            author: String::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = excerpt;
        self
    }

    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_cover_image(mut self, cover_image: Option<String>) -> Self {
        self.cover_image = cover_image;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// First tag, used as the post's headline category.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_fields() {
        let post = Post::new("p1".into(), "Title".into(), "Body".into())
            .with_cover_image(Some("https://example.com/a.png".into()));
        let json = serde_json::to_value(&post).unwrap();

        assert!(json.get("coverImage").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["published"], true);
        assert!(json.get("cover_image").is_none());
    }

    #[test]
    fn test_cover_image_omitted_when_absent() {
        let post = Post::new("p1".into(), "Title".into(), "Body".into());
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("coverImage").is_none());
    }

    #[test]
    fn test_comments_default_to_empty_when_absent() {
        let json = r#"{
            "id": "p1", "title": "T", "excerpt": "", "content": "C",
            "tags": ["a"], "createdAt": 1, "updatedAt": 2,
            "published": true, "author": "Admin"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.comments.is_empty());
        assert_eq!(post.cover_image, None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{ "id": "p1", "title": "T" }"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_primary_tag_and_has_tag() {
        let post = Post::new("p1".into(), "T".into(), "C".into())
            .with_tags(vec!["Rust".into(), "Guide".into()]);
        assert_eq!(post.primary_tag(), Some("Rust"));
        assert!(post.has_tag("Guide"));
        assert!(!post.has_tag("guide"));
    }
}
