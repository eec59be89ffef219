use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use frontdesk_engine::ViewMode;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FRONTDESK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.frontdesk (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FRONTDESK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("frontdesk"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".frontdesk"));
    }

    anyhow::bail!("could not determine a data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hotel_name")]
    pub hotel_name: String,

    /// Currency symbol appended to prices in plain output.
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub default_view: ViewMode,

    /// Operator name recorded in the session; $USER when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

fn default_hotel_name() -> String {
    "Frontdesk Hotel".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotel_name: default_hotel_name(),
            currency: default_currency(),
            default_view: ViewMode::default(),
            operator: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.hotel_name, "Frontdesk Hotel");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.default_view, ViewMode::Week);
        assert!(config.operator.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            hotel_name: "Le Grand Hôtel".to_string(),
            currency: "CHF".to_string(),
            default_view: ViewMode::Month,
            operator: Some("sophie".to_string()),
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.hotel_name, "Le Grand Hôtel");
        assert_eq!(loaded.default_view, ViewMode::Month);
        assert_eq!(loaded.operator.as_deref(), Some("sophie"));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config.hotel_name, "Frontdesk Hotel");
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "hotel_name = \"Pension Simone\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.hotel_name, "Pension Simone");
        assert_eq!(loaded.currency, "EUR");
        Ok(())
    }
}
