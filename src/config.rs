//! Engine configuration persistence
//!
//! Stores the trigger set and suggestion catalog in
//! `~/.config/mention/config.yaml`. The config is passed explicitly into the
//! model at construction; nothing here is global, so multiple independent
//! engine instances can carry different catalogs.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trigger set and suggestion catalog for one engine instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Characters that open an autocomplete lookup
    #[serde(default = "default_triggers")]
    pub trigger_characters: Vec<char>,
    /// Ordered suggestion catalog; each entry starts with a trigger character
    #[serde(default = "default_catalog")]
    pub suggestion_catalog: Vec<String>,
}

fn default_triggers() -> Vec<char> {
    vec!['#', '@', '<']
}

fn default_catalog() -> Vec<String> {
    ["#react", "#javascript", "@john", "@alice", "<related>"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trigger_characters: default_triggers(),
            suggestion_catalog: default_catalog(),
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load config from an explicit YAML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))?;
        Ok(config.sanitized())
    }

    /// Load just a catalog from a JSON file (one array of strings)
    pub fn with_catalog_file(mut self, path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog at {}: {}", path.display(), e))?;
        let catalog: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse catalog at {}: {}", path.display(), e))?;
        self.suggestion_catalog = catalog;
        Ok(self.sanitized())
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Drop catalog entries that do not begin with a configured trigger
    /// character followed by at least one character.
    ///
    /// Such entries could never match any trigger run, so keeping them would
    /// only hide a config mistake.
    pub fn sanitized(mut self) -> Self {
        let triggers = self.trigger_characters.clone();
        self.suggestion_catalog.retain(|entry| {
            let valid = entry
                .chars()
                .next()
                .map(|first| triggers.contains(&first) && entry.chars().count() > 1)
                .unwrap_or(false);
            if !valid {
                tracing::warn!("Dropping catalog entry without a trigger prefix: {:?}", entry);
            }
            valid
        });
        self
    }
}
