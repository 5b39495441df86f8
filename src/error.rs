use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
