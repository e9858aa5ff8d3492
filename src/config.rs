use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemePreset;

const CONFIG_DIR: &str = "ops-console";
const CONFIG_FILE: &str = "config.json";

/// Application configuration, loaded from a JSON file in the user's config
/// directory. Missing file or unknown fields fall back to defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemePreset,
    /// Override for the path prefix classifying documentation routes.
    pub docs_prefix: Option<String>,
    pub rtl: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("could not read config, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    fn try_load() -> anyhow::Result<Option<Self>> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path().context("no config directory on this platform")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let config = AppConfig {
            theme: ThemePreset::Light,
            docs_prefix: Some("/manual".to_string()),
            rtl: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let decoded: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.theme, ThemePreset::Light);
        assert_eq!(decoded.docs_prefix.as_deref(), Some("/manual"));
        assert!(decoded.rtl);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let decoded: AppConfig = serde_json::from_str("{\"theme\":\"light\"}").unwrap();
        assert_eq!(decoded.theme, ThemePreset::Light);
        assert_eq!(decoded.docs_prefix, None);
        assert!(!decoded.rtl);
    }
}
