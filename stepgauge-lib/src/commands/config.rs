use super::common::SurfaceKind;
use crate::Result;
use crate::progress::Rounding;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the base directory when no explicit configuration path is given
pub const CONFIG_FILE_NAME: &str = "gauge.toml";

const LOG_TARGET: &str = "    config";

/// Largest accepted `bar_width`
const MAX_BAR_WIDTH: u16 = 200;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of steps the demo counts through
    #[serde(default = "default_total_steps")]
    pub total_steps: u32,

    /// Tie-break rule for the percentage label
    #[serde(default)]
    pub rounding: Rounding,

    /// Width of the bar in terminal cells
    #[serde(default = "default_bar_width")]
    pub bar_width: u16,

    /// How the panel is drawn
    #[serde(default)]
    pub surface: SurfaceKind,
}

const fn default_total_steps() -> u32 {
    5
}

const fn default_bar_width() -> u16 {
    25
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds out-of-range values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading stepgauge configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No {CONFIG_FILE_NAME} in '{base_dir}', using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading stepgauge configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if `bar_width` is out of range
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BAR_WIDTH).contains(&self.bar_width) {
            return Err(app_err!("bar_width must be between 1 and {MAX_BAR_WIDTH}, got {}", self.bar_width));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
