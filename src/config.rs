use crate::error::{BlogError, Result};
use crate::storage::{DEFAULT_KEY, FileStore, PostStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".mindstream.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub blog: BlogSettings,

    #[serde(default)]
    pub assistant: AssistantSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
}

fn default_path() -> String {
    ".mindstream".to_string()
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_author() -> String {
    "Admin".to_string()
}

fn default_excerpt_length() -> usize {
    150
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            key: default_key(),
            author: default_author(),
            excerpt_length: default_excerpt_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            endpoint: default_endpoint(),
            text_model: default_text_model(),
            image_model: default_image_model(),
        }
    }
}

impl BlogConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: BlogConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BlogError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.blog.path)
    }

    /// The file-backed post store this configuration describes.
    pub fn open_store(&self, project_root: &Path) -> PostStore<FileStore> {
        PostStore::with_key(FileStore::new(self.data_path(project_root)), &self.blog.key)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
