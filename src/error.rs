use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("project '{0}' not found")]
    ProjectNotFound(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    // Sync errors
    #[error("failed to sync issue '{id}': {reason}")]
    SyncFailed { id: String, reason: String },

    #[error("failed to create issue '{id}': {reason}")]
    CreateFailed { id: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KanbanError>;
