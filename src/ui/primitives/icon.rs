use crate::ui::theme::{self, paint, Tone};

/// Status markers printed at the start of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Transition,
    Deploy,
}

impl Icon {
    pub fn render(self, unicode: bool) -> &'static str {
        let g = theme::glyphs(unicode);
        match self {
            Icon::Success => g.success,
            Icon::Error => g.error,
            Icon::Warning => g.warning,
            Icon::Pending => g.pending,
            Icon::Arrow => g.arrow,
            Icon::Transition => g.transition,
            Icon::Deploy => g.deploy,
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Deploy => Tone::Info,
            Icon::Pending | Icon::Arrow | Icon::Transition => Tone::Muted,
        }
    }

    pub fn colored(self, color: bool, unicode: bool) -> String {
        paint(self.render(unicode), self.tone(), false, color)
    }
}
