//! Command Line Interface (CLI) layer for imgocr.
//!
//! Defines argument parsing (`args`), CLI error types (`errors`), and the
//! orchestration logic (`runner`) that loads the image, runs the OCR engine
//! and prints the result.
//!
//! If you are embedding imgocr into another application, use `imgocr::api`
//! instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
