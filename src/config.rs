//! TOML configuration parsing and validation.
//!
//! Every section is optional. When no config file exists at the given path
//! the application falls back to [`Config::minimal`].
//!
//! ```toml
//! [content]
//! dir = "content"
//! profile = "profile.json"
//! projects = "projects.json"
//! timeline = "timeline.json"
//!
//! [chat]
//! suggestions = ["What is Mesquite MoCap?"]
//!
//! [logging]
//! level = "warn"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_profile_file")]
    pub profile: String,
    #[serde(default = "default_projects_file")]
    pub projects: String,
    #[serde(default = "default_timeline_file")]
    pub timeline: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            profile: default_profile_file(),
            projects: default_projects_file(),
            timeline: default_timeline_file(),
        }
    }
}

impl ContentConfig {
    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(&self.profile)
    }

    pub fn projects_path(&self) -> PathBuf {
        self.dir.join(&self.projects)
    }

    pub fn timeline_path(&self) -> PathBuf {
        self.dir.join(&self.timeline)
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}
fn default_profile_file() -> String {
    "profile.json".to_string()
}
fn default_projects_file() -> String {
    "projects.json".to_string()
}
fn default_timeline_file() -> String {
    "timeline.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
        }
    }
}

fn default_suggestions() -> Vec<String> {
    [
        "What is Mesquite MoCap?",
        "What are your XR interests?",
        "Publications and thesis?",
        "Tell me about To Wilt.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise return [`Config::minimal`].
///
/// A file that exists but does not parse or validate is still an error.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}

fn validate(config: &Config) -> Result<()> {
    for (key, value) in [
        ("content.profile", &config.content.profile),
        ("content.projects", &config.content.projects),
        ("content.timeline", &config.content.timeline),
    ] {
        if value.trim().is_empty() {
            bail!("{} must not be empty", key);
        }
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        bail!(
            "Unknown logging.level: '{}'. Must be trace, debug, info, warn, or error.",
            config.logging.level
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(body: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(&path, body).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let (_tmp, path) = write_config("");
        let config = load_config(&path).unwrap();
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(
            config.content.projects_path(),
            PathBuf::from("content/projects.json")
        );
        assert_eq!(config.chat.suggestions.len(), 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_overrides() {
        let (_tmp, path) = write_config(
            r#"
[content]
dir = "site/data"
timeline = "events.json"

[chat]
suggestions = ["Hi?"]

[logging]
level = "DEBUG"
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(
            config.content.timeline_path(),
            PathBuf::from("site/data/events.json")
        );
        assert_eq!(
            config.content.profile_path(),
            PathBuf::from("site/data/profile.json")
        );
        assert_eq!(config.chat.suggestions, vec!["Hi?"]);
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let (_tmp, path) = write_config("[logging]\nlevel = \"loud\"\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_rejects_empty_file_name() {
        let (_tmp, path) = write_config("[content]\nprofile = \"\"\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("content.profile"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let (_tmp, path) = write_config("[content\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_minimal() {
        let tmp = TempDir::new().unwrap();
        let config = load_or_minimal(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config.logging.level, "warn");
    }
}
