//! Error types for the landing display.

use std::path::PathBuf;

/// Failures while acquiring display resources.
///
/// Everything past mount is total; these only surface while loading the
/// optional background image.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to read {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image format: {path:?}")]
    UnsupportedImage { path: PathBuf },

    #[error("failed to decode image {path:?}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    #[error("failed to create texture: {message}")]
    Texture { message: String },
}
