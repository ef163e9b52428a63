use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Asset upload failed: {0}")]
    Upload(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<content::ContentError> for EditorError {
    fn from(err: content::ContentError) -> Self {
        match err {
            content::ContentError::Validation(msg) => EditorError::Validation(msg),
            content::ContentError::Serialization(e) => EditorError::Serialization(e),
        }
    }
}
