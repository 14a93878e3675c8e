use std::path::{Path, PathBuf};

use anyhow::Context;
use hostprobe_core::FileMode;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CapabilitiesConfig {
    #[serde(default)]
    pub default_file_mode: FileMode,
    #[serde(default = "default_force_permissions")]
    pub force_permissions: bool,
    #[serde(default)]
    pub tomcat_users_paths: Vec<PathBuf>,
}

impl CapabilitiesConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize capabilities config")
    }
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            default_file_mode: FileMode::default(),
            force_permissions: default_force_permissions(),
            tomcat_users_paths: Vec::new(),
        }
    }
}

fn default_force_permissions() -> bool {
    true
}
