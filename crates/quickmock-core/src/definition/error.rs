use std::path::PathBuf;

/// Fatal problems while loading a definition document.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("failed to read definition file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported definition file type: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(String),
    #[error("invalid YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid endpoint record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
