use crate::Result;
use crate::facts::hub::DEFAULT_BASE_URL;
use crate::metrics::{Registry, SizeBounds};
use camino::{Utf8Path, Utf8PathBuf};
use core::num::NonZero;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "model-rank.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Models scored concurrently; the number of CPUs when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    /// Seconds allowed to gather the facts of a single model
    #[serde(default = "default_task_timeout_secs")]
    pub task_timeout_secs: u64,

    /// Root of the Hugging Face Hub API
    #[serde(default = "default_hub_base_url")]
    pub hub_base_url: String,

    /// Size at or below which the size score is 1
    #[serde(default = "default_size_lower_bytes")]
    pub size_lower_bytes: u64,

    /// Size at or above which the size score is 0
    #[serde(default = "default_size_upper_bytes")]
    pub size_upper_bytes: u64,

    /// Per-metric weight overrides; metrics not named keep their standard weight
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
}

const fn default_task_timeout_secs() -> u64 {
    120
}

fn default_hub_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_size_lower_bytes() -> u64 {
    SizeBounds::DEFAULT.lower
}

const fn default_size_upper_bytes() -> u64 {
    SizeBounds::DEFAULT.upper
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `model-rank.toml` in `base_dir` is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

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

    /// Check every setting, including that the weights form a valid registry
    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(app_err!("workers must be at least 1"));
        }

        if self.task_timeout_secs == 0 {
            return Err(app_err!("task_timeout_secs must be at least 1"));
        }

        if self.size_upper_bytes <= self.size_lower_bytes {
            return Err(app_err!(
                "size_lower_bytes ({}) must be less than size_upper_bytes ({})",
                self.size_lower_bytes,
                self.size_upper_bytes
            ));
        }

        let _ = Url::parse(&self.hub_base_url).into_app_err_with(|| format!("invalid hub_base_url '{}'", self.hub_base_url))?;
        let _ = self.registry()?;

        Ok(())
    }

    #[must_use]
    pub const fn size_bounds(&self) -> SizeBounds {
        SizeBounds {
            lower: self.size_lower_bytes,
            upper: self.size_upper_bytes,
        }
    }

    #[must_use]
    pub fn workers(&self) -> Option<NonZero<usize>> {
        self.workers.and_then(NonZero::new)
    }

    #[must_use]
    pub const fn task_timeout(&self) -> Duration {
        Duration::from_secs(self.task_timeout_secs)
    }

    /// Build the standard metric registry with the configured bounds and weights
    pub fn registry(&self) -> Result<Registry> {
        Registry::standard_with(self.size_bounds(), &self.weights).into_app_err("invalid metric configuration")
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
