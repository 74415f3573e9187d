use anyhow::{Context, Result};
use serde::Deserialize;

use std::fs;
use std::path::{Path, PathBuf};

/// Batch configuration, usually kept out of version control as `secret.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Directory holding one sub-directory of exports per account nickname.
    pub global_prefix: PathBuf,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub nickname: String,
    pub account_id: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}'", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("invalid config `{}'", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Config> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl Task {
    pub fn directory(&self, global_prefix: &Path) -> PathBuf {
        global_prefix.join(&self.nickname)
    }
}
