use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long toast notifications stay on screen, in seconds
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
    /// Where the theme preference is stored (default: preferences.json
    /// next to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<PathBuf>,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_toast_duration_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keymap: Keymap::default(),
            toast_duration_secs: default_toast_duration_secs(),
            storage_file: None,
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Set secure permissions (600: owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Resolve the preference storage file
    pub fn storage_path(&self) -> PathBuf {
        self.storage_file
            .as_deref()
            .map(crate::utils::expand_path)
            .unwrap_or_else(crate::utils::get_storage_path)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.toast_duration_secs, 3);
        assert_eq!(config.keymap.preset, KeymapPreset::Standard);
        assert!(config.storage_file.is_none());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.toast_duration_secs = 5;
        config.storage_file = Some(temp_dir.path().join("prefs.json"));
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded.toast_duration_secs, 5);
        assert_eq!(loaded.storage_path(), temp_dir.path().join("prefs.json"));
    }

    #[test]
    fn test_load_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config.toast_duration_secs, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[keymap]\npreset = \"vim\"\n").unwrap();
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert_eq!(config.toast_duration_secs, 3);
    }

    #[test]
    fn test_toast_duration_has_floor() {
        let config = Config {
            toast_duration_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.toast_duration(), Duration::from_secs(1));
    }
}
