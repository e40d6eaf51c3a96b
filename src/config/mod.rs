//! Configuration for the result and watch layer.
//!
//! Sources, later ones overriding earlier:
//! 1. Default values (hardcoded)
//! 2. Config file named by `CONFIG_PATH`
//! 3. Environment variables with the `ZK__` prefix
//!
//! [`ResultsConfig::new`] and [`ResultsConfig::load`] are the only places in
//! the crate that touch the filesystem or the environment, and they run only
//! when the caller invokes them. Everything else works from values passed in,
//! e.g. [`crate::watch_channel_with`].
//!
mod watch;
pub use watch::*;

use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ResultsConfig {
    /// Watch channel diagnostics
    #[serde(default)]
    pub watch: WatchConfig,
}

impl ResultsConfig {
    /// Builds configuration from defaults, `CONFIG_PATH` and `ZK__*` variables.
    ///
    /// Does not validate; call [`ResultsConfig::validate`] once all overrides
    /// have been applied.
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("ZK")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Loads from an explicit file (or only defaults and environment when
    /// `path` is `None`) and validates the result.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::new()?.with_override_config(path)?,
            None => Self::new()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Layers `path` and the environment on top of `self`, without validation.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("ZK")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.watch.validate()?;
        Ok(())
    }
}
