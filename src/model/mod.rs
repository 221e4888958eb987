//! Data models for the blog.
//!
//! This module defines the persisted records:
//!
//! - [`Post`]: A blog post with markdown content and embedded comments
//! - [`Comment`]: A plain-text reader comment, append-only
//! - [`NewComment`]: The caller-supplied half of a comment
//!
//! Field names serialize in camelCase so the stored JSON keeps the
//! `createdAt`/`coverImage` layout readers of the collection expect.

mod comment;
mod post;

pub use comment::{Comment, NewComment};
pub use post::Post;

use chrono::{DateTime, Local, Utc};

/// Current time as milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats a millisecond timestamp as `Month D, YYYY` in local time.
pub fn format_date(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.with_timezone(&Local).format("%B %-d, %Y").to_string(),
        None => "unknown date".to_string(),
    }
}

/// Formats a millisecond timestamp as `Month D, YYYY HH:MM` in local time.
pub fn format_datetime(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%B %-d, %Y %H:%M")
            .to_string(),
        None => "unknown date".to_string(),
    }
}
