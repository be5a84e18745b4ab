use std::fmt;

/// Plain-text output of one OCR call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcription {
    text: String,
}

impl Transcription {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the engine found nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for Transcription {
    fn from(text: String) -> Self {
        Self { text }
    }
}
