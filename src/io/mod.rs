//! I/O layer: turns a path on disk into a decoded in-memory image.
pub mod loader;
pub use loader::{FileImageLoader, ImageLoader};
