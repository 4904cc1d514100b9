//! Configuration: the optional `reflect.toml` settings file and the resolved
//! `SessionConfig` handed to the session controller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bank;
use crate::model::QuestionBank;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "reflect.toml";

/// Settings from `reflect.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReflectConfig {
    /// Where answers are persisted.
    #[serde(default = "default_answers_file")]
    pub answers_file: PathBuf,
    /// Clear the terminal before each screen.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Characters of question text shown in the list view.
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_answers_file() -> PathBuf {
    PathBuf::from("my-answers.json")
}
fn default_true() -> bool {
    true
}
fn default_preview_width() -> usize {
    50
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            answers_file: default_answers_file(),
            clear_screen: true,
            preview_width: default_preview_width(),
        }
    }
}

impl ReflectConfig {
    /// Read `reflect.toml` from `dir`, falling back to defaults when the file
    /// is absent. A relative `answers_file` is taken relative to `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let mut config: ReflectConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        if config.answers_file.is_relative() {
            config.answers_file = dir.join(&config.answers_file);
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Everything the session controller needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub bank: QuestionBank,
    pub answers_path: PathBuf,
    pub clear_screen: bool,
    pub preview_width: usize,
}

impl SessionConfig {
    /// Built-in questions, answers in `answers_path`.
    pub fn new(answers_path: impl Into<PathBuf>) -> Self {
        Self {
            bank: bank::builtin(),
            answers_path: answers_path.into(),
            clear_screen: true,
            preview_width: default_preview_width(),
        }
    }

    pub fn from_config(config: &ReflectConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            preview_width: config.preview_width,
            ..Self::new(&config.answers_file)
        }
    }

    /// File name of the answers file, for display.
    pub fn answers_display(&self) -> String {
        self.answers_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.answers_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReflectConfig::load(dir.path()).unwrap();
        assert_eq!(config, ReflectConfig::default());
        assert_eq!(config.answers_file, PathBuf::from("my-answers.json"));
        assert!(config.clear_screen);
        assert_eq!(config.preview_width, 50);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "answers_file = \"notes/answers.json\"\nclear_screen = false\n",
        )
        .unwrap();

        let config = ReflectConfig::load(dir.path()).unwrap();
        assert_eq!(config.answers_file, dir.path().join("notes/answers.json"));
        assert!(!config.clear_screen);
        assert_eq!(config.preview_width, 50);
    }

    #[test]
    fn absolute_answers_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let target = elsewhere.path().join("answers.json");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            format!("answers_file = {:?}\n", target.display().to_string()),
        )
        .unwrap();

        let config = ReflectConfig::load(dir.path()).unwrap();
        assert_eq!(config.answers_file, target);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "questions_file = \"q.toml\"\n").unwrap();

        let err = ReflectConfig::load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }

    #[test]
    fn session_config_carries_builtin_bank() {
        let config = ReflectConfig {
            preview_width: 30,
            clear_screen: false,
            ..ReflectConfig::default()
        };
        let session = SessionConfig::from_config(&config);
        assert_eq!(session.bank.len(), 26);
        assert_eq!(session.preview_width, 30);
        assert!(!session.clear_screen);
        assert_eq!(session.answers_display(), "my-answers.json");
    }

    #[test]
    fn answers_display_uses_file_name() {
        let session = SessionConfig::new("/tmp/somewhere/answers.json");
        assert_eq!(session.answers_display(), "answers.json");
    }
}
