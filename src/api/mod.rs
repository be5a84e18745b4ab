//! High-level library API: load an image, run OCR over it, and write the
//! result in the CLI's output format. Prefer these entrypoints over wiring the
//! loader and engine by hand.
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::engine::{OcrEngine, TesseractEngine};
use crate::error::Result;
use crate::io::{FileImageLoader, ImageLoader};
use crate::types::Transcription;

/// Label printed on the line before the transcription.
pub const RESULT_LABEL: &str = "OCR Result:";

/// Load `path` with `loader` and transcribe it with `engine`.
///
/// The image is dropped as soon as the engine returns. Errors from either step
/// are returned as-is; nothing is retried.
pub fn recognize_with<L, E>(path: &Path, loader: &L, engine: &E) -> Result<Transcription>
where
    L: ImageLoader + ?Sized,
    E: OcrEngine + ?Sized,
{
    let image = loader.load(path)?;
    info!(
        "Running {} on {:?} ({}x{})",
        engine.name(),
        path,
        image.width(),
        image.height()
    );
    let transcription = engine.recognize(&image)?;
    info!(
        "Recognized {} characters{}",
        transcription.text().chars().count(),
        if transcription.is_blank() {
            " (no text detected)"
        } else {
            ""
        }
    );
    Ok(transcription)
}

/// Decode `path` from disk and run Tesseract over it.
pub fn recognize_path(path: &Path) -> Result<Transcription> {
    recognize_with(path, &FileImageLoader, &TesseractEngine::new())
}

/// Write the label line followed by the raw transcription.
pub fn write_transcription<W: Write + ?Sized>(
    out: &mut W,
    transcription: &Transcription,
) -> std::io::Result<()> {
    writeln!(out, "{RESULT_LABEL}")?;
    writeln!(out, "{transcription}")?;
    out.flush()
}
