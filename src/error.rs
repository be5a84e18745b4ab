//! Crate-level error type and `Result` alias.
//! Separates failures to open/decode the input image from failures of the OCR
//! engine, so callers can tell a bad input apart from a missing Tesseract.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open image {path:?}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("OCR engine error: {0}")]
    Engine(String),
}

impl Error {
    pub fn engine<E: std::fmt::Display>(e: E) -> Self {
        Error::Engine(e.to_string())
    }

    pub fn resource(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Resource {
            path: path.into(),
            source,
        }
    }
}
