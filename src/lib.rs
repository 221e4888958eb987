//! # MindStream - A local-first blog with a writing assistant
//!
//! MindStream keeps a blog as one JSON collection of posts, renders their
//! markdown content, and collects reader comments. An optional generative
//! assistant drafts posts, suggests topics and paints cover images.
//!
//! ## Features
//!
//! - **Single-key storage**: All posts live as one JSON array in `.mindstream/`
//! - **Markdown renderer**: A small, line-oriented markdown subset
//! - **Comments**: Append-only reader comments embedded in each post
//! - **Assistant**: Gemini-backed drafting, topic ideas and cover art
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new blog
//! mindstream init
//!
//! # Write a post
//! mindstream new "Hello" --body "# Hi\n\nFirst post" --tags "Intro"
//!
//! # Read it
//! mindstream list
//! mindstream show <id>
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`markdown`]: Markdown to blocks and spans, plus an HTML writer
//! - [`model`]: Data models (Post, Comment)
//! - [`storage`]: The post store and its key-value backends
//! - [`validation`]: Input validation utilities

/// Generative writing assistant.
pub mod assistant;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.mindstream.toml` configuration files and blog discovery.
pub mod config;

/// Turning editor input into posts.
pub mod editor;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// Import and export functionality.
///
/// Moves the whole collection in and out as JSON.
pub mod import_export;

pub mod logging;

/// Markdown rendering.
pub mod markdown;

/// Data models for the blog.
///
/// Includes `Post`, `Comment` and `NewComment`.
pub mod model;

pub mod query;
pub mod search;

/// Post persistence.
///
/// Keeps the collection as one JSON value under a single storage key.
pub mod storage;

/// Input validation utilities.
///
/// Validates titles, content, ids, tags and comments.
pub mod validation;
