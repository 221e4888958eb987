use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Stored collection is corrupt: {0}")]
    Corrupt(String),

    #[error("Assistant error: {0}")]
    Assistant(String),

    #[error("API key is missing (set {0})")]
    MissingApiKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Blog not initialized. Run 'mindstream init' first.")]
    NotInitialized,

    #[error("Blog already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
