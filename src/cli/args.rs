use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "imgocr",
    version,
    about = "OCR script (Tesseract version)",
    after_help = "Log verbosity is read from RUST_LOG (default: warn); logs go to stderr."
)]
pub struct CliArgs {
    /// Path to the image file
    #[arg(long)]
    pub image: PathBuf,
}
