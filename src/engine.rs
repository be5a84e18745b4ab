//! OCR engine seam and the Tesseract-backed implementation.
use std::collections::HashMap;

use image::DynamicImage;
use rusty_tesseract::{Args, Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Transcription;

/// Turns a decoded image into plain text.
pub trait OcrEngine {
    fn name(&self) -> &str;

    fn recognize(&self, image: &DynamicImage) -> Result<Transcription>;
}

/// Runs the `tesseract` executable found on `PATH`.
///
/// No page segmentation, engine mode or DPI overrides are passed, so Tesseract
/// runs with its own defaults for the English model.
#[derive(Debug, Clone, Copy)]
pub struct TesseractEngine;

impl TesseractEngine {
    pub fn new() -> Self {
        Self
    }

    fn args(&self) -> Args {
        Args {
            lang: "eng".to_string(),
            config_variables: HashMap::new(),
            dpi: None,
            psm: None,
            oem: None,
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &DynamicImage) -> Result<Transcription> {
        let image = Image::from_dynamic_image(image).map_err(Error::engine)?;
        let text =
            rusty_tesseract::image_to_string(&image, &self.args()).map_err(Error::engine)?;
        debug!("tesseract returned {} bytes", text.len());
        Ok(Transcription::from(text))
    }
}
