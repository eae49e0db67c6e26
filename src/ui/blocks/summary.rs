use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::Tone;
use crate::ui::widgets::panel::Panel;

/// End-of-run panel: counts, extra notes, and an optional follow-up command.
#[derive(Debug, Clone, Default)]
pub struct ResultSummary {
    title: String,
    counts: Vec<(usize, String)>,
    notes: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn count(mut self, count: usize, label: impl Into<String>) -> Self {
        self.counts.push((count, label.into()));
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn next_step(mut self, command: impl Into<String>) -> Self {
        self.next_step = Some(command.into());
        self
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let ok = Icon::Success.colored(color, unicode);
        let title = ColoredText::success(self.title.as_str()).bold().render(color);
        let mut panel = Panel::titled(format!("{ok} {title}"), Tone::Success);
        panel.gap();

        for (count, label) in &self.counts {
            panel.line(format!("{count} {label}"));
        }

        if !self.notes.is_empty() {
            panel.gap();
            for note in &self.notes {
                panel.line(format!("{ok} {note}"));
            }
        }

        if let Some(command) = &self.next_step {
            panel.gap().line(format!(
                "{} {} {}",
                Icon::Arrow.colored(color, unicode),
                ColoredText::dim("Next:").render(color),
                command
            ));
        }

        panel.render(color, unicode)
    }
}
