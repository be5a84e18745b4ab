//! imgocr CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run OCR on the image, and
//! exit with the appropriate status. For programmatic use, prefer the library
//! API (`imgocr::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
