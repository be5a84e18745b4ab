use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Source of decoded images.
///
/// The CLI uses [`FileImageLoader`]; tests substitute their own implementation.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage>;
}

/// Reads and decodes an image from the filesystem with the `image` crate.
///
/// The format is guessed from the file contents first and only falls back to
/// the extension, so a mislabelled file still decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage> {
        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| Error::resource(path, ImageError::IoError(e)))?;

        debug!("Decoding {:?} (format: {:?})", path, reader.format());

        let img = reader.decode().map_err(|e| Error::resource(path, e))?;
        debug!(
            "Decoded {:?}: {}x{} {:?}",
            path,
            img.width(),
            img.height(),
            img.color()
        );
        Ok(img)
    }
}
