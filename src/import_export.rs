//! Moving the collection in and out as plain JSON.
//!
//! Exports use the persisted layout verbatim, so an export can be imported
//! into another blog or dropped in as its storage file.

use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::storage::{
    ImportSummary, KeyValueStore, PostStore, ensure_unique_ids, parse_collection,
};
use std::path::Path;

/// Pretty-printed JSON of the whole collection.
pub fn export_posts<S: KeyValueStore>(store: &PostStore<S>) -> Result<String> {
    let posts = store.list_posts()?;
    Ok(serde_json::to_string_pretty(&posts)?)
}

/// Writes the export to `path`.
pub fn export_to_file<S: KeyValueStore>(store: &PostStore<S>, path: &Path) -> Result<usize> {
    let posts = store.list_posts()?;
    std::fs::write(path, serde_json::to_string_pretty(&posts)?)?;
    tracing::info!(path = %path.display(), count = posts.len(), "Exported posts");
    Ok(posts.len())
}

/// Parses an export. Unlike reading the live store, a malformed file or
/// one with repeated post ids is an error rather than an empty collection.
pub fn parse_export(content: &str) -> Result<Vec<Post>> {
    let posts = parse_collection(content)?;
    ensure_unique_ids(&posts)?;
    Ok(posts)
}

/// Reads an export file and merges it into the store.
pub fn import_from_file<S: KeyValueStore>(
    store: &PostStore<S>,
    path: &Path,
) -> Result<ImportSummary> {
    let content = std::fs::read_to_string(path)?;
    let posts = parse_export(&content).map_err(|e| match e {
        BlogError::Corrupt(msg) => {
            BlogError::Corrupt(format!("{} is not a post export: {}", path.display(), msg))
        }
        other => other,
    })?;
    store.import_posts(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SEED_POST_ID};
    use tempfile::TempDir;

    #[test]
    fn test_export_matches_persisted_layout() {
        let store = PostStore::new(MemoryStore::new());
        let json = export_posts(&store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let seed = &value[0];
        assert_eq!(seed["id"], SEED_POST_ID);
        for field in [
            "title", "excerpt", "content", "coverImage", "tags", "createdAt", "updatedAt",
            "published", "author", "comments",
        ] {
            assert!(seed.get(field).is_some(), "missing {}", field);
        }
        assert!(seed["comments"][0].get("createdAt").is_some());
    }

    #[test]
    fn test_export_then_import_into_fresh_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");

        let source = PostStore::new(MemoryStore::new());
        assert_eq!(export_to_file(&source, &path).unwrap(), 1);

        let target = PostStore::new(MemoryStore::with_entry(crate::storage::DEFAULT_KEY, "[]"));
        let summary = import_from_file(&target, &path).unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(target.list_posts().unwrap(), source.list_posts().unwrap());
    }

    #[test]
    fn test_parse_export_rejects_repeated_ids() {
        let json = r#"[
            {"id":"a","title":"A","excerpt":"","content":"x","tags":[],"createdAt":1,"updatedAt":1,"published":true,"author":"Admin"},
            {"id":"a","title":"B","excerpt":"","content":"y","tags":[],"createdAt":2,"updatedAt":2,"published":true,"author":"Admin"}
        ]"#;
        assert!(matches!(parse_export(json), Err(BlogError::Corrupt(_))));
    }

    #[test]
    fn test_import_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();

        let store = PostStore::new(MemoryStore::new());
        let err = import_from_file(&store, &path).unwrap_err();

        assert!(matches!(err, BlogError::Corrupt(_)));
        assert_eq!(store.list_posts().unwrap().len(), 1);
    }
}
