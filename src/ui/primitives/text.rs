use std::fmt;

use crate::ui::theme::{paint, Tone};

/// Text with a tone that is only applied when rendering with color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Muted)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, color: bool) -> String {
        paint(&self.text, self.tone, self.bold, color)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
