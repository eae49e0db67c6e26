//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::types::{ColorMode, DeployConfig};

/// Environment variable overriding the build root
pub const ENV_BUILD_ROOT: &str = "RWDEPLOY_BUILD_ROOT";
/// Environment variable overriding the staging prefix
pub const ENV_DESTDIR: &str = "RWDEPLOY_DESTDIR";
/// Environment variable overriding the detected platform
pub const ENV_PLATFORM: &str = "RWDEPLOY_PLATFORM";
/// Environment variable pointing at a config file
pub const ENV_CONFIG: &str = "RWDEPLOY_CONFIG";

/// Config file picked up from the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "rwdeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Parse a config file, reporting unknown keys instead of rejecting them.
pub fn load_with_warnings(path: &Path) -> DeployResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: format!("cannot read file: {e}"),
    })?;

    let mut ignored = Vec::new();
    let config: DeployConfig =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key| {
            ignored.push(key.to_string())
        })
        .map_err(|e| DeployError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            let (section, key) = match dotted.rsplit_once('.') {
                Some((section, key)) => (Some(section), key),
                None => (None, dotted.as_str()),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: line_of(&content, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the named file, or the default file in `cwd` when present, or defaults.
///
/// A file named explicitly must exist; the implicit one is optional.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> DeployResult<(DeployConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let implicit = cwd.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        return load_with_warnings(&implicit);
    }

    Ok((DeployConfig::default(), Vec::new()))
}

/// Apply environment variable overrides (RWDEPLOY_* prefix)
pub fn with_env_overrides(config: DeployConfig) -> DeployConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: DeployConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> DeployConfig {
    if let Some(root) = get_env(ENV_BUILD_ROOT).filter(|v| !v.is_empty()) {
        config.paths.build_root = Some(PathBuf::from(root));
    }

    if let Some(destdir) = get_env(ENV_DESTDIR).filter(|v| !v.is_empty()) {
        config.paths.destdir = Some(PathBuf::from(destdir));
    }

    if let Some(platform) = get_env(ENV_PLATFORM).filter(|v| !v.is_empty()) {
        config.platform.os_override = Some(platform);
    }

    // https://no-color.org
    if get_env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = ColorMode::Never;
    }

    config
}

fn line_of(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(index, line)| {
        let line = line.trim();
        let name = match line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            Some(table) => table.trim(),
            None => line.split('=').next().unwrap_or_default().trim(),
        };
        (name == key).then_some(index + 1)
    })
}

/// Keys accepted at each level of the file.
fn known_keys(section: Option<&str>) -> &'static [&'static str] {
    match section {
        None => &["paths", "platform", "output"],
        Some("paths") => &["build_root", "destdir"],
        Some("platform") => &["override"],
        Some("output") => &["color", "unicode"],
        Some(_) => &[],
    }
}

fn suggest_key(section: Option<&str>, unknown: &str) -> Option<String> {
    known_keys(section)
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min()
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, single-row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == *cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
