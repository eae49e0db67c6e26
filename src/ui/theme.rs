//! Colors and glyphs shared by every piece of installer output.
//!
//! Nothing outside this module picks a color or a glyph directly.

use crossterm::style::{Color, Stylize};

/// Semantic tone of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Muted,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Muted => Color::DarkGrey,
        }
    }
}

/// Apply a tone to `text`, or return it untouched when color is off.
pub fn paint(text: &str, tone: Tone, bold: bool, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let styled = text.with(tone.color());
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

/// One complete glyph set
#[derive(Debug)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub pending: &'static str,
    pub arrow: &'static str,
    pub transition: &'static str,
    pub deploy: &'static str,
    /// top-left, top-right, bottom-left, bottom-right
    pub corners: [&'static str; 4],
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub const UNICODE: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    pending: "○",
    arrow: "↳",
    transition: "→",
    deploy: "📦",
    corners: ["╭", "╮", "╰", "╯"],
    horizontal: "─",
    vertical: "│",
};

pub const ASCII: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    pending: "[--]",
    arrow: "[>]",
    transition: "->",
    deploy: "[DEPLOY]",
    corners: ["+", "+", "+", "+"],
    horizontal: "-",
    vertical: "|",
};

pub fn glyphs(unicode: bool) -> &'static Glyphs {
    if unicode {
        &UNICODE
    } else {
        &ASCII
    }
}
