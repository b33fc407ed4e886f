use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kiosk_vitals::ScoringConfig;

/// Current config version. Bump this when changing shape, and migrate older
/// files in [`parse_config`] from then on.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Schema version. Missing or 0 reads as the current version.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Narrative language used when `--language` is not given.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            scoring: ScoringConfig::default(),
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("kiosk").join("config.json"))
}

/// Load the config from `path`, or from the default location.
///
/// A missing file at the default location means defaults; an explicit path
/// must exist.
pub fn load_config(path: Option<&Path>) -> eyre::Result<KioskConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!(path = %p.display(), "no config file, using defaults");
                return Ok(KioskConfig::default());
            }
            p
        }
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)?;
    tracing::info!(path = %path.display(), version = config.config_version, "config loaded");
    Ok(config)
}

pub fn parse_config(contents: &str) -> eyre::Result<KioskConfig> {
    let mut config: KioskConfig = serde_json::from_str(contents)?;
    check_version(config.config_version)?;
    config.config_version = CURRENT_VERSION;
    config.scoring.validate()?;
    Ok(config)
}

/// Refuse configs written by a newer build. Missing or 0 reads as the
/// current version.
fn check_version(on_disk: u32) -> eyre::Result<()> {
    if on_disk > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {on_disk} is newer than this build supports ({CURRENT_VERSION}). \
             Please update kiosk."
        ));
    }
    Ok(())
}
