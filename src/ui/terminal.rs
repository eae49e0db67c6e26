//! What the attached terminal can display.

use is_terminal::IsTerminal;

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "TEAMCITY_VERSION",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    fn from_env(var: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = var("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        Self {
            supports_color: stdout_is_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_is_unicode(&var),
            is_ci: CI_MARKERS.iter().any(|key| var(key).is_some()),
        }
    }
}

/// The first non-empty locale variable decides; no locale at all means Unicode.
fn locale_is_unicode(var: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| var(key).filter(|v| !v.is_empty()));

    match locale {
        None => true,
        Some(locale) => {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf") || !matches!(locale.as_str(), "c" | "posix")
        }
    }
}
