//! Input validation for posts, comments and storage keys.
//!
//! Posts and comments are checked for required fields only. Titles, tags
//! and comment text have no length limits.

use crate::error::{BlogError, Result};
use crate::model::{NewComment, Post};

/// Characters forbidden in storage keys to prevent path traversal.
const FORBIDDEN_KEY_CHARS: &[char] = &['/', '\\', '\0', ':', '*', '?', '"', '<', '>', '|'];

/// Validates a post title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(BlogError::Validation("Title is required".to_string()));
    }
    Ok(())
}

/// Validates post content. Content is required but otherwise unbounded,
/// since inline images are embedded as data URLs.
pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(BlogError::Validation("Content is required".to_string()));
    }
    Ok(())
}

/// Validates a post ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(BlogError::Validation("ID cannot be empty".to_string()));
    }
    Ok(())
}

/// Validates everything a save requires before the collection is touched.
pub fn validate_post(post: &Post) -> Result<()> {
    validate_id(&post.id)?;
    validate_title(&post.title)?;
    validate_content(&post.content)?;
    Ok(())
}

/// Validates a comment submission. Both fields must have non-blank text.
pub fn validate_comment(comment: &NewComment) -> Result<()> {
    if comment.author.trim().is_empty() {
        return Err(BlogError::Validation(
            "Comment author is required".to_string(),
        ));
    }
    if comment.content.trim().is_empty() {
        return Err(BlogError::Validation(
            "Comment content is required".to_string(),
        ));
    }
    Ok(())
}

/// Validates a persistence key so it is safe to use as a file name.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BlogError::Validation("Key cannot be empty".to_string()));
    }
    if key.contains("..") {
        return Err(BlogError::Validation(
            "Key cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_KEY_CHARS {
        if key.contains(*c) {
            return Err(BlogError::Validation(format!("Key cannot contain '{}'", c)));
        }
    }
    Ok(())
}
