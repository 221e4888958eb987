//! Turning editor input into posts.
//!
//! A [`PostDraft`] is what a user types: title, content, optional excerpt,
//! comma-separated tags and a cover image. [`PostDraft::into_post`] applies
//! the save rules (derived excerpt, parsed tags, preserved comments) and
//! leaves timestamps to the store.

use crate::error::{BlogError, Result};
use crate::model::Post;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use std::path::Path;

/// Embedded images are scaled down to this width.
pub const MAX_IMAGE_WIDTH: u32 = 800;

const JPEG_QUALITY: u8 = 80;
const JPEG_MIME: &str = "image/jpeg";

const EXCERPT_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// Comma-separated tag list as typed.
    pub tags: String,
    pub cover_image: String,
}

impl PostDraft {
    /// Loads an existing post back into editable form.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.join(", "),
            cover_image: post.cover_image.clone().unwrap_or_default(),
        }
    }

    /// Builds the post to hand to the store.
    ///
    /// Title and content are required. Editing keeps the existing post's
    /// author, comments and creation time; new posts get `id`, `author`
    /// and no comments.
    pub fn into_post(
        self,
        id: String,
        existing: Option<&Post>,
        author: &str,
        excerpt_length: usize,
    ) -> Result<Post> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(BlogError::Validation(
                "Title and Content are required".to_string(),
            ));
        }

        let excerpt = if self.excerpt.trim().is_empty() {
            derive_excerpt(&self.content, excerpt_length)
        } else {
            self.excerpt
        };
        let cover_image = Some(self.cover_image).filter(|c| !c.trim().is_empty());

        let mut post = Post::new(id, self.title, self.content)
            .with_excerpt(excerpt)
            .with_tags(parse_tags(&self.tags))
            .with_author(author.to_string())
            .with_cover_image(cover_image);

        if let Some(existing) = existing {
            post.created_at = existing.created_at;
            post.author = existing.author.clone();
            post.comments = existing.comments.clone();
        }
        Ok(post)
    }
}

/// First `length` characters of `content` followed by `...`.
pub fn derive_excerpt(content: &str, length: usize) -> String {
    let mut excerpt: String = content.chars().take(length).collect();
    excerpt.push_str(EXCERPT_ELLIPSIS);
    excerpt
}

/// Splits on commas, trims, drops empties. Order and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Title taken from a generated draft whose first line is a `# ` heading.
pub fn title_from_generated(text: &str) -> Option<String> {
    let first = text.lines().next()?;
    let title = first.strip_prefix("# ")?.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Inline image fragment, padded with newlines so it renders on its own line.
pub fn image_markdown(alt: &str, src: &str) -> String {
    format!("\n![{}]({})\n", alt, src)
}

/// Replaces the character range `start..end` of `content` with `fragment`.
/// Positions count characters, not bytes, and are clamped to the content.
pub fn insert_at(content: &str, start: usize, end: usize, fragment: &str) -> String {
    let char_count = content.chars().count();
    let start = start.min(char_count);
    let end = end.clamp(start, char_count);

    let byte_at = |pos: usize| {
        content
            .char_indices()
            .nth(pos)
            .map_or(content.len(), |(i, _)| i)
    };
    let (start_byte, end_byte) = (byte_at(start), byte_at(end));

    let mut out = String::with_capacity(content.len() + fragment.len());
    out.push_str(&content[..start_byte]);
    out.push_str(fragment);
    out.push_str(&content[end_byte..]);
    out
}

/// Encodes raw image bytes as a `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Shrinks an image to at most [`MAX_IMAGE_WIDTH`] pixels wide, keeping
/// its aspect ratio, and re-encodes it as JPEG.
pub fn compress_image(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| BlogError::Validation(format!("Not a supported image: {}", e)))?;

    let img = if img.width() > MAX_IMAGE_WIDTH {
        let height = u64::from(img.height()) * u64::from(MAX_IMAGE_WIDTH) / u64::from(img.width());
        let height = u32::try_from(height).unwrap_or(u32::MAX).max(1);
        img.resize_exact(MAX_IMAGE_WIDTH, height, FilterType::Triangle)
    } else {
        img
    };

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode_image(&img.to_rgb8())
        .map_err(|e| BlogError::Storage(format!("Failed to encode image: {}", e)))?;
    Ok(out)
}

/// Reads an image file into a width-capped JPEG `data:` URL.
pub fn load_image(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let jpeg = compress_image(&bytes).map_err(|e| match e {
        BlogError::Validation(msg) => BlogError::Validation(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        original = bytes.len(),
        encoded = jpeg.len(),
        "Encoded image"
    );
    Ok(data_url(JPEG_MIME, &jpeg))
}
