use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};
use imgocr::{
    Error, FileImageLoader, OcrEngine, TesseractEngine, Transcription, recognize_path,
    recognize_with,
};

struct Upper;

impl OcrEngine for Upper {
    fn name(&self) -> &str {
        "upper"
    }

    fn recognize(&self, image: &DynamicImage) -> imgocr::Result<Transcription> {
        Ok(Transcription::new(format!(
            "{}X{}\n",
            image.width(),
            image.height()
        )))
    }
}

#[test]
fn real_loader_feeds_decoded_image_to_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    GrayImage::from_pixel(12, 7, Luma([200u8]))
        .save(&path)
        .unwrap();

    let t = recognize_with(&path, &FileImageLoader, &Upper).unwrap();
    assert_eq!(t.text(), "12X7\n");
}

#[test]
fn recognize_path_reports_missing_file_as_resource_error() {
    let err = recognize_path(Path::new("/definitely/not/here.png")).unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));
    assert!(err.to_string().contains("not/here.png"));
}

#[test]
#[ignore = "requires tesseract on PATH"]
fn tesseract_finds_nothing_on_blank_page() {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(120, 60, Luma([255u8])));
    let t = TesseractEngine::new().recognize(&img).unwrap();
    assert!(t.is_blank());
}
