use crate::model::{Comment, Post, now_millis};

pub const SEED_POST_ID: &str = "seed-1";

const SEED_CONTENT: &str = "# Welcome to MindStream

This blog keeps your posts in a **local** store, meaning everything stays on your machine.

## Features

- **AI Writing Assistant**: Use Gemini to draft posts or fix grammar.
- **AI Image Generation**: Create unique cover art for your stories.
- **Markdown Support**: Write in clean, formatted text.

Enjoy writing!";

/// The collection written on first access to an empty store.
pub fn seed_posts() -> Vec<Post> {
    let now = now_millis();
    let welcome = Post {
        id: SEED_POST_ID.to_string(),
        title: "Welcome to MindStream".to_string(),
        excerpt: "This is a local-first, AI-powered blogging platform.".to_string(),
        content: SEED_CONTENT.to_string(),
        cover_image: Some("https://picsum.photos/800/400".to_string()),
        tags: vec!["Welcome".to_string(), "Guide".to_string()],
        created_at: now,
        updated_at: now,
        published: true,
        author: "Admin".to_string(),
        comments: vec![Comment {
            id: "c1".to_string(),
            author: "MindStream User".to_string(),
            content: "This looks amazing! Can not wait to start writing.".to_string(),
            created_at: now,
        }],
    };
    vec![welcome]
}
