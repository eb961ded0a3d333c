#![forbid(unsafe_code)]

//! TOML configuration for the profile screen.
//!
//! Every section and field is optional; missing values take the defaults
//! below. Unknown keys are rejected so a typo does not silently fall back to
//! a default.
//!
//! ```toml
//! [profile]
//! first_name = "Ada"
//! last_name = "Lovelace"
//! likes = 0
//! max = 100
//!
//! [popularity]
//! popular_above = 4
//! star_above = 9
//!
//! [theme]
//! foreground = "#212121"
//!
//! [palette]
//! popular = "#FF9800"
//! star = "#F44336"
//!
//! [device]
//! progress_tint = true
//! ```

use std::path::{Path, PathBuf};

use likebind_style::{Palette, Theme};
use serde::{Deserialize, Serialize};

use crate::popularity::Thresholds;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("profile.max must be greater than zero")]
    ZeroMax,
    #[error(
        "popularity.star_above ({star_above}) must not be below popularity.popular_above ({popular_above})"
    )]
    ThresholdOrder { popular_above: u32, star_above: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    pub first_name: String,
    pub last_name: String,
    pub likes: u32,
    pub max: u32,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            likes: 0,
            max: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Whether progress bars accept a tint list.
    pub progress_tint: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            progress_tint: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub popularity: Thresholds,
    pub theme: Theme,
    pub palette: Palette,
    pub device: DeviceConfig,
}

impl AppConfig {
    /// Read and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.max == 0 {
            return Err(ConfigError::ZeroMax);
        }
        let Thresholds {
            popular_above,
            star_above,
        } = self.popularity;
        if star_above < popular_above {
            return Err(ConfigError::ThresholdOrder {
                popular_above,
                star_above,
            });
        }
        Ok(())
    }
}
