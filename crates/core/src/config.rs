// Copyright 2025 LLM Contrast Contributors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `CONTRAST_`-prefixed environment variables.
//!
//! ```ignore
//! use llm_contrast_core::config::ContrastConfig;
//!
//! // CONTRAST_SEED=7 CONTRAST_PACING=live
//! let config = ContrastConfig::load(None)?;
//! assert_eq!(config.seed, Some(7));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "contrast.toml";

/// Default report output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "contrast/output";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CONTRAST";

/// Whether simulated stage durations are also waited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    /// Durations are computed but never slept
    #[default]
    Instant,
    /// Each stage sleeps for its simulated duration
    Live,
}

impl fmt::Display for PacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant => f.write_str("instant"),
            Self::Live => f.write_str("live"),
        }
    }
}

impl FromStr for PacingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "instant" | "off" => Ok(Self::Instant),
            "live" | "real" => Ok(Self::Live),
            _ => Err(Error::invalid_input(format!("unknown pacing mode: {s}"))),
        }
    }
}

/// Resolved configuration for the engine and CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Seed for the duration generator; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stage pacing
    #[serde(default)]
    pub pacing: PacingMode,
    /// Directory for written reports
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing: PacingMode::default(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

impl ContrastConfig {
    /// Load configuration from an optional file and `CONTRAST_*` variables.
    ///
    /// Without an explicit path, `contrast.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Load configuration reading environment variables with `prefix`.
    pub fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .set_default("pacing", PacingMode::default().to_string())?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(config::Environment::with_prefix(prefix).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
