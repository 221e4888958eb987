use crate::config::{BlogConfig, BlogSettings, CONFIG_FILE_NAME};
use crate::error::BlogError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(cwd: &Path, author: String) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(BlogError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BlogConfig {
        blog: BlogSettings {
            author,
            ..BlogSettings::default()
        },
        assistant: Default::default(),
    };

    let data_path = config.data_path(cwd);
    std::fs::create_dir_all(&data_path)?;
    config.save(&config_path)?;

    // First read seeds the welcome post
    let posts = config.open_store(cwd).list_posts()?;
    tracing::debug!(count = posts.len(), "Seeded new blog");

    println!("{} blog in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
