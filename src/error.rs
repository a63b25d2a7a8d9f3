//! Error types for collection browsing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tag sources or image data.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Embedded image payload is not valid base64
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Image bytes could not be decoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Identifier not present in the loaded tag index
    #[error("unknown image id: {id}")]
    UnknownImage {
        /// The identifier that was looked up
        id: String,
    },

    /// Record has no embedded payload but embedded retrieval was requested
    #[error("no embedded image data for: {id}")]
    MissingImageData {
        /// The identifier of the record
        id: String,
    },

    /// Tag source file not found at expected path
    #[error("tag source not found: {path:?}")]
    SourceNotFound {
        /// Path where the source file was expected
        path: PathBuf,
    },

    /// Image file not found at expected path
    #[error("image not found: {path:?}")]
    ImageNotFound {
        /// Path where the image was expected
        path: PathBuf,
    },

    /// A background task was cancelled or panicked
    #[error("background task failed: {message}")]
    TaskFailed {
        /// Description of the task failure
        message: String,
    },
}

impl BrowserError {
    /// Create an unknown-image error for an identifier.
    pub fn unknown_image(id: impl Into<String>) -> Self {
        Self::UnknownImage { id: id.into() }
    }

    /// Create a task-failure error with a message.
    pub fn task_failed(message: impl Into<String>) -> Self {
        Self::TaskFailed {
            message: message.into(),
        }
    }
}
