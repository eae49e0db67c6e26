use std::path::PathBuf;

use crate::ui::theme::Tone;
use crate::ui::widgets::panel::Panel;

/// Failure report: which step failed, on what path, and how to recover.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    step: String,
    path: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            path: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, color: bool, unicode: bool) -> String {
        let mut panel = Panel::titled(format!("ERROR: {}", self.step), Tone::Error);
        if let Some(path) = &self.path {
            panel.line(path.display().to_string());
        }
        panel.gap().line(&self.message);
        if let Some(fix) = &self.fix {
            panel.gap().line(format!("FIX: {fix}"));
        }
        panel.render(color, unicode)
    }
}
