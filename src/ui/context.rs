use raspberry_web_deploy::config::{ColorMode, DeployConfig};
use raspberry_web_deploy::presentation::ColorWhen;

use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, config: &DeployConfig) -> Self {
        Self::from_caps(verbose, cli_color, config, TerminalCapabilities::detect())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &DeployConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            color,
            unicode,
        }
    }
}
