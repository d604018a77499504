use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Default distance-from-bottom (px) that counts as "near bottom"
pub const DEFAULT_SCROLL_THRESHOLD_PX: u32 = 200;

/// Default page-size hint for granule sources
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Tunables for the result-list browsing behavior
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BrowseConfig {
    pub scroll_threshold_px: u32,
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl Config {
    /// Load configuration: embedded defaults, overridden by the first
    /// config file found in the user's config dir (if any).
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            // A library core is usable without any user config
            return Ok(default_config);
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let cfg: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        assert_eq!(cfg.browse.scroll_threshold_px, DEFAULT_SCROLL_THRESHOLD_PX);
        assert_eq!(cfg.browse.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_default_matches_embedded() {
        let cfg = Config::default();
        let embedded: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        assert_eq!(cfg.browse, embedded.browse);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg: Config =
            json5::from_str(r#"{ "browse": { "scroll_threshold_px": 50 } }"#).expect("parse");
        assert_eq!(cfg.browse.scroll_threshold_px, 50);
        assert_eq!(cfg.browse.page_size, DEFAULT_PAGE_SIZE);
    }
}
