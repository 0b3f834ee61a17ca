use thiserror::Error;

/// Errors that can occur when loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for the expected shape.
    #[error("Invalid seed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for seed loading.
pub type Result<T> = std::result::Result<T, SeedError>;
