use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Could not get tags for: {filename}")]
    MalformedArtifactName { filename: String },

    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
