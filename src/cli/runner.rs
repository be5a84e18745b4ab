use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use imgocr::api::{recognize_with, write_transcription};
use imgocr::engine::{OcrEngine, TesseractEngine};
use imgocr::io::{FileImageLoader, ImageLoader};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Load the image named by `args`, transcribe it, and print the result to `out`.
///
/// Nothing is written to `out` unless recognition succeeds.
pub fn run_with<L, E, W>(
    args: &CliArgs,
    loader: &L,
    engine: &E,
    out: &mut W,
) -> Result<(), AppError>
where
    L: ImageLoader + ?Sized,
    E: OcrEngine + ?Sized,
    W: Write + ?Sized,
{
    debug!("Input image: {:?}", args.image);
    let transcription = recognize_with(&args.image, loader, engine)?;
    write_transcription(out, &transcription)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &FileImageLoader, &TesseractEngine::new(), &mut out)?;
    info!("Done: {:?}", args.image);

    Ok(())
}
