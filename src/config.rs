// File: ./src/config.rs
use crate::model::{Item, placeholder_items};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The todo API the client talks to when nothing else is configured.
pub const DEFAULT_URL: &str = "http://localhost:8080/api/v1/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    /// Replaces the built-in placeholder list shown before the first fetch.
    pub initial_items: Option<Vec<Item>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            initial_items: None,
        }
    }
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(dir) = env::var("TODOVIEW_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.toml"));
        }
        ProjectDirs::from("com", "todoview", "todoview")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The list a freshly created view starts with.
    pub fn initial_items(&self) -> Vec<Item> {
        self.initial_items
            .clone()
            .unwrap_or_else(placeholder_items)
    }
}
