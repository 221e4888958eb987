use super::backend::KeyValueStore;
use super::seed::seed_posts;
use crate::{
    error::{BlogError, Result},
    model::{Comment, NewComment, Post, now_millis},
    validation,
};
use std::collections::HashSet;

/// Persistence key used when none is configured.
pub const DEFAULT_KEY: &str = "mindstream_posts";

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const POST_ID_LENGTH: usize = 12;
const COMMENT_ID_LENGTH: usize = 10;

/// Outcome of merging an imported collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub replaced: usize,
}

/// CRUD over the single post collection stored under one key.
///
/// Every mutation reads the whole collection, changes one entry and writes
/// the whole collection back. Nothing is cached between calls, so the last
/// writer wins when two processes share a backend.
pub struct PostStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PostStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the collection in persisted order.
    ///
    /// An empty store is seeded with the welcome post. A stored value that
    /// fails to parse reads as an empty collection and is left in place
    /// until the next mutation overwrites it.
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        let raw = match self.backend.read(&self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tracing::debug!(key = %self.key, "Seeding empty store");
                let seed = seed_posts();
                self.write_collection(&seed)?;
                return Ok(seed);
            }
        };

        match parse_collection(&raw) {
            Ok(posts) => Ok(posts),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to parse posts, treating store as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn get_post(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.list_posts()?.into_iter().find(|p| p.id == id))
    }

    /// Inserts or replaces a post and returns the record as stored.
    ///
    /// New ids go to the front with both timestamps set to now. Known ids
    /// are replaced in place, keeping the stored `created_at` and setting
    /// `updated_at` to now.
    pub fn save_post(&self, mut post: Post) -> Result<Post> {
        validation::validate_post(&post)?;

        let mut posts = self.list_posts()?;
        let now = now_millis();

        match posts.iter().position(|p| p.id == post.id) {
            Some(index) => {
                tracing::info!(id = %post.id, title = %post.title, "Updating post");
                post.created_at = posts[index].created_at;
                post.updated_at = now;
                posts[index] = post.clone();
            }
            None => {
                tracing::info!(id = %post.id, title = %post.title, "Creating post");
                post.created_at = now;
                post.updated_at = now;
                posts.insert(0, post.clone());
            }
        }

        self.write_collection(&posts)?;
        Ok(post)
    }

    /// Removes a post. Returns whether anything was removed; a missing id
    /// is not an error.
    pub fn delete_post(&self, id: &str) -> Result<bool> {
        tracing::info!(id = %id, "Deleting post");

        let mut posts = self.list_posts()?;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        self.write_collection(&posts)?;

        Ok(posts.len() != before)
    }

    /// Appends a comment to a post and returns it.
    pub fn add_comment(&self, post_id: &str, comment: NewComment) -> Result<Comment> {
        validation::validate_comment(&comment)?;

        let mut posts = self.list_posts()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| BlogError::NotFound(post_id.to_string()))?;

        let taken: HashSet<&str> = post.comments.iter().map(|c| c.id.as_str()).collect();
        let created = Comment {
            id: generate_unique_id(COMMENT_ID_LENGTH, |id| taken.contains(id)),
            author: comment.author,
            content: comment.content,
            created_at: now_millis(),
        };
        tracing::info!(post = %post_id, comment = %created.id, "Adding comment");

        post.comments.push(created.clone());
        self.write_collection(&posts)?;

        Ok(created)
    }

    /// Generates a post id not used by any post in the collection.
    pub fn generate_id(&self) -> Result<String> {
        let posts = self.list_posts()?;
        let taken: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        Ok(generate_unique_id(POST_ID_LENGTH, |id| taken.contains(id)))
    }

    /// Merges imported posts: matching ids are replaced in place, new ids
    /// are appended. Records are kept verbatim, timestamps included.
    pub fn import_posts(&self, incoming: Vec<Post>) -> Result<ImportSummary> {
        for post in &incoming {
            validation::validate_post(post)?;
        }

        let mut posts = self.list_posts()?;
        let mut summary = ImportSummary::default();

        for post in incoming {
            match posts.iter().position(|p| p.id == post.id) {
                Some(index) => {
                    posts[index] = post;
                    summary.replaced += 1;
                }
                None => {
                    posts.push(post);
                    summary.added += 1;
                }
            }
        }

        tracing::info!(
            added = summary.added,
            replaced = summary.replaced,
            "Imported posts"
        );
        self.write_collection(&posts)?;
        Ok(summary)
    }

    fn write_collection(&self, posts: &[Post]) -> Result<()> {
        let json = serde_json::to_string(posts)?;
        self.backend.write(&self.key, &json)
    }
}

/// Parses a stored collection.
///
/// Any schema mismatch is reported as [`BlogError::Corrupt`]. Duplicate ids
/// are tolerated; lookups and edits act on the first match.
pub fn parse_collection(raw: &str) -> Result<Vec<Post>> {
    serde_json::from_str(raw).map_err(|e| BlogError::Corrupt(e.to_string()))
}

/// Rejects a collection in which two posts share an id.
pub fn ensure_unique_ids(posts: &[Post]) -> Result<()> {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.id.as_str()) {
            let msg = format!("duplicate post id '{}'", post.id);
            return Err(BlogError::Corrupt(msg));
        }
    }
    Ok(())
}

fn generate_unique_id(length: usize, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = nanoid::format(nanoid::rngs::default, &ID_ALPHABET, length);
        if !taken(&id) {
            return id;
        }
    }
}
