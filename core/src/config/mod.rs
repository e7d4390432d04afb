use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::lessons::SKILL_LESSONS_FILE;

const LESSONSYNC_DIR: &str = ".lessonsync";
const OPENCLAW_WORKSPACE: &str = ".openclaw/workspace";
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub workspace_dir: Option<PathBuf>,
    pub skill_lessons_path: PathBuf,
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workspace_dir: None,
            skill_lessons_path: PathBuf::from(SKILL_LESSONS_FILE),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// Workspace to sync from: the configured one, else `~/.openclaw/workspace`.
    pub fn resolve_workspace(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.workspace_dir.clone())
            .unwrap_or_else(default_workspace_dir)
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_workspace_dir() -> PathBuf {
    home_dir().join(OPENCLAW_WORKSPACE)
}

pub fn get_config_path() -> PathBuf {
    home_dir().join(LESSONSYNC_DIR).join("config.toml")
}

/// Loads the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read config from {}", path.display()));
        }
    };

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))
}
