//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslatError};

/// Environment variable prefix, e.g. `TRANSLAT_LANGUAGE`
pub const ENV_PREFIX: &str = "TRANSLAT";

/// Configuration for the translator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatConfig {
    /// Category used when a call omits one; `None` falls back to the route
    pub default_category: Option<String>,
    /// Application target language
    pub language: String,
    /// Route identifier used when no request supplies one
    pub default_route: String,
    /// Return a visible marker for untranslatable input instead of nothing
    pub debug: bool,
}

impl Default for TranslatConfig {
    fn default() -> Self {
        Self {
            default_category: None,
            language: "en-US".to_string(),
            default_route: "site/index".to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

impl TranslatConfig {
    /// Load configuration from `TRANSLAT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::load(None::<&Path>)
    }

    /// Load an optional file, then the environment, over the defaults.
    ///
    /// Keys missing from every source keep their [`Default`] values.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            let path = path.as_ref();
            builder = builder.add_source(config::File::from(path).required(true));
            info!("Loading configuration from {}", path.display());
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON or YAML file, picked by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(TranslatError::ConfigError {
                message: "language is required".to_string(),
            });
        }

        if self.default_route.trim().is_empty() {
            return Err(TranslatError::ConfigError {
                message: "default_route is required".to_string(),
            });
        }

        if let Some(category) = &self.default_category {
            if category.trim().is_empty() {
                return Err(TranslatError::ConfigError {
                    message: "default_category must not be blank; omit it to fall back to the route"
                        .to_string(),
                });
            }
        }

        if self.debug && !cfg!(debug_assertions) {
            warn!("Debug mode enabled in a release build");
        }

        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "yaml" || ext == "yml"
        })
        .unwrap_or(false)
}
