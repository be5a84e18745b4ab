#![doc = r#"
imgocr — run Tesseract OCR over an image file.

The crate backs the `imgocr` CLI (`imgocr --image <path>`) and can also be
embedded: decode an image, hand it to an OCR engine, get the text back.

Requirements
------------
- The `tesseract` executable on `PATH` (with the English model installed).

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> imgocr::Result<()> {
    let text = imgocr::recognize_path(Path::new("receipt.png"))?;
    println!("{text}");
    Ok(())
}
```

Custom loader or engine
-----------------------
Image decoding and OCR sit behind the [`ImageLoader`] and [`OcrEngine`] traits,
so either can be replaced, e.g. with a deterministic fake in tests.

```rust
use std::path::Path;
use image::DynamicImage;
use imgocr::{recognize_with, ImageLoader, OcrEngine, Transcription};

struct Blank;
impl ImageLoader for Blank {
    fn load(&self, _path: &Path) -> imgocr::Result<DynamicImage> {
        Ok(DynamicImage::new_luma8(1, 1))
    }
}

struct Echo;
impl OcrEngine for Echo {
    fn name(&self) -> &str { "echo" }
    fn recognize(&self, _image: &DynamicImage) -> imgocr::Result<Transcription> {
        Ok(Transcription::new("hello"))
    }
}

let text = recognize_with(Path::new("any.png"), &Blank, &Echo).unwrap();
assert_eq!(text.text(), "hello");
```

Error handling
--------------
Functions return `imgocr::Result<T>`. `Error::Resource` means the file could not
be opened or decoded; `Error::Engine` means Tesseract is missing or rejected the
image.

```rust,no_run
use std::path::Path;
use imgocr::{recognize_path, Error};

match recognize_path(Path::new("/bad/path.png")) {
    Ok(text) => print!("{text}"),
    Err(Error::Resource { path, source }) => eprintln!("cannot read {path:?}: {source}"),
    Err(Error::Engine(e)) => eprintln!("OCR failed: {e}"),
}
```
"#]

pub mod api;
pub mod engine;
pub mod error;
pub mod io;
pub mod types;

pub use api::{RESULT_LABEL, recognize_path, recognize_with, write_transcription};
pub use engine::{OcrEngine, TesseractEngine};
pub use error::{Error, Result};
pub use io::{FileImageLoader, ImageLoader};
pub use types::Transcription;
