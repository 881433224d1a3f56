use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub gazetteer: GazetteerConfig,
    #[serde(default)]
    pub intent: IntentConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GazetteerConfig {
    /// Places file; the bundled list is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Phrase tables for offering/seeking classification, checked in list order.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct IntentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeking: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    #[serde(default = "PipelineConfig::default_true")]
    pub parallel: bool,
    /// Opt-in; the key ignores message text, so distinct posts can collapse.
    #[serde(default)]
    pub dedup: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            dedup: false,
        }
    }
}

impl PipelineConfig {
    const fn default_true() -> bool {
        true
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("ridelog"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/ridelog/config.json`, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ridelog_core::Error::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: Self = serde_json::from_str(&content).map_err(|e| {
            ridelog_core::Error::Config(format!("invalid config {}: {e}", path.display()))
        })?;

        // Relative gazetteer paths are relative to the config file.
        if let (Some(places), Some(base)) = (config.gazetteer.path.as_mut(), path.parent()) {
            if places.is_relative() {
                *places = base.join(&*places);
            }
        }

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    pub fn write_template(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "gazetteer": {
    "path": "places.txt"
  },
  "intent": {
    "offering": ["offering", "available", "can give", "have space", "driving to", "driving from", "ride from"],
    "seeking": ["anyone going", "looking for", "need a ride", "anyone driving", "want to join", "ride to"]
  },
  "pipeline": {
    "parallel": true,
    "dedup": false
  }
}"#;

        std::fs::write(config_path, config_template)?;
        Ok(())
    }
}
