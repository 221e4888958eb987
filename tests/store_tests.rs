use mindstream::error::BlogError;
use mindstream::model::{NewComment, Post};
use mindstream::storage::{DEFAULT_KEY, FileStore, KeyValueStore, PostStore, SEED_POST_ID};
use std::fs;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> PostStore<FileStore> {
    PostStore::new(FileStore::new(dir.path().join("data")))
}

fn stored_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("data").join(format!("{}.json", DEFAULT_KEY))
}

// =============================================================================
// Seeding and recovery
// =============================================================================

#[test]
fn test_first_read_seeds_and_persists() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    let posts = store.list_posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, SEED_POST_ID);

    let raw = fs::read_to_string(stored_file(&temp_dir)).unwrap();
    assert!(raw.contains("\"coverImage\""));
    assert!(raw.contains("\"createdAt\""));
}

#[test]
fn test_emptied_collection_is_not_reseeded() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    assert!(store.delete_post(SEED_POST_ID).unwrap());
    assert!(store.list_posts().unwrap().is_empty());
    assert_eq!(fs::read_to_string(stored_file(&temp_dir)).unwrap(), "[]");
}

#[test]
fn test_corrupt_file_reads_empty_and_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    fs::write(stored_file(&temp_dir), "{ not json").unwrap();

    let store = file_store(&temp_dir);
    assert!(store.list_posts().unwrap().is_empty());
    assert_eq!(
        fs::read_to_string(stored_file(&temp_dir)).unwrap(),
        "{ not json"
    );
}

// =============================================================================
// Mutations across store instances
// =============================================================================

#[test]
fn test_changes_visible_to_a_second_store() {
    let temp_dir = TempDir::new().unwrap();
    let writer = file_store(&temp_dir);
    let reader = file_store(&temp_dir);

    let post = Post::new("p-1".into(), "Shared".into(), "Body".into());
    writer.save_post(post).unwrap();
    writer
        .add_comment("p-1", NewComment::new("Ann", "Hi"))
        .unwrap();

    let seen = reader.get_post("p-1").unwrap().unwrap();
    assert_eq!(seen.title, "Shared");
    assert_eq!(seen.comments.len(), 1);
    assert_eq!(reader.list_posts().unwrap()[0].id, "p-1");
}

#[test]
fn test_update_keeps_created_and_moves_updated() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    let first = store
        .save_post(Post::new("p-1".into(), "One".into(), "Body".into()))
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));

    let mut edit = first.clone();
    edit.title = "Two".into();
    edit.created_at = 0;
    let second = store.save_post(edit).unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(store.list_posts().unwrap().len(), 2);
}

#[test]
fn test_comment_on_missing_post() {
    let temp_dir = TempDir::new().unwrap();
    let store = file_store(&temp_dir);

    let err = store
        .add_comment("ghost", NewComment::new("Ann", "Hi"))
        .unwrap_err();
    assert!(matches!(err, BlogError::NotFound(_)));
}

#[test]
fn test_separate_keys_are_separate_collections() {
    let temp_dir = TempDir::new().unwrap();
    let backend = FileStore::new(temp_dir.path().join("data"));
    let main = PostStore::with_key(&backend, "main");
    let other = PostStore::with_key(&backend, "other");

    main.delete_post(SEED_POST_ID).unwrap();
    assert!(main.list_posts().unwrap().is_empty());
    assert_eq!(other.list_posts().unwrap().len(), 1);
    assert!(backend.read("main").unwrap().is_some());
}
