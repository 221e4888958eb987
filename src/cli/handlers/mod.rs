mod ai;
mod attach;
mod comment;
mod create;
mod delete;
mod export;
mod import;
mod init;
mod list;
mod render;
mod search;
mod show;
mod tags;
mod update;
mod utils;

pub use ai::handle_ai;
pub use attach::handle_attach;
pub use comment::handle_comment;
pub use create::{CreateParams, handle_create};
pub use delete::handle_delete;
pub use export::handle_export;
pub use import::handle_import;
pub use init::handle_init;
pub use list::handle_list;
pub use render::handle_render;
pub use search::handle_search;
pub use show::handle_show;
pub use tags::handle_tags;
pub use update::{UpdateParams, handle_update};

use crate::config::BlogConfig;
use crate::error::BlogError;
use crate::model::Post;
use crate::storage::{FileStore, PostStore};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub root: PathBuf,
    pub store: PostStore<FileStore>,
}

impl CommandContext {
    pub fn new(config: BlogConfig, root: PathBuf) -> Self {
        let store = config.open_store(&root);
        Self {
            config,
            root,
            store,
        }
    }

    /// Loads a post or fails with a not-found error naming the id.
    pub fn require_post(&self, id: &str) -> anyhow::Result<Post> {
        self.store
            .get_post(id)?
            .ok_or_else(|| BlogError::NotFound(id.to_string()).into())
    }
}
