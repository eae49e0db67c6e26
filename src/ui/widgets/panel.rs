//! Bordered panel used for the run summary and error reports.

use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{self, paint, Tone};

#[derive(Debug, Clone)]
pub struct Panel {
    rows: Vec<String>,
    tone: Tone,
}

impl Panel {
    /// A panel whose first row is `title`.
    pub fn titled(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            rows: vec![title.into()],
            tone,
        }
    }

    /// Append text; embedded newlines start new rows.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.rows.extend(text.as_ref().lines().map(str::to_string));
        self
    }

    pub fn gap(&mut self) -> &mut Self {
        self.rows.push(String::new());
        self
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let g = theme::glyphs(unicode);
        let [tl, tr, bl, br] = g.corners;
        let inner = self
            .rows
            .iter()
            .map(|r| display_width(r))
            .max()
            .unwrap_or(0)
            + 2;
        let edge = |s: &str| paint(s, self.tone, false, color);

        let mut out = edge(&format!("{tl}{}{tr}", g.horizontal.repeat(inner)));
        out.push('\n');
        for row in &self.rows {
            let pad = inner - 1 - display_width(row);
            out.push_str(&format!(
                "{} {}{}{}\n",
                edge(g.vertical),
                row,
                " ".repeat(pad),
                edge(g.vertical)
            ));
        }
        out.push_str(&edge(&format!("{bl}{}{br}", g.horizontal.repeat(inner))));
        out.push('\n');
        out
    }
}

/// Terminal column width of `s`, not counting CSI escape sequences.
fn display_width(s: &str) -> usize {
    if !s.contains('\u{1b}') {
        return s.width();
    }

    let mut visible = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, c) => visible.push(c),
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
        }
    }
    visible.width()
}
