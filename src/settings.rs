// chainparams_rs/src/settings.rs
// Which chain and network the process runs on. Read from an optional settings
// file, then NETPARAMS_* environment variables.

use crate::chainparams::{ChainFamily, NetworkKind};
use crate::error::ConfigError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_SETTINGS_FILE: &str = "netparams";
const DEFAULT_CHAIN: &str = "bitcoin";
const DEFAULT_NETWORK: &str = "testnet3";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub chain: String,
    pub network: String,
}

impl Settings {
    /// Loads settings from `path`, or from `netparams.{toml,json,...}` in the
    /// working directory when no path is given (that file is optional).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("chain", DEFAULT_CHAIN)?
            .set_default("network", DEFAULT_NETWORK)?
            .add_source(file)
            .add_source(Environment::with_prefix("NETPARAMS"))
            .build()?
            .try_deserialize()?;

        log::debug!("Loaded settings: chain={} network={}", settings.chain, settings.network);
        Ok(settings)
    }

    pub fn resolve(&self) -> Result<(ChainFamily, NetworkKind), ConfigError> {
        Ok((self.chain.parse()?, self.network.parse()?))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings { chain: DEFAULT_CHAIN.to_string(), network: DEFAULT_NETWORK.to_string() }
    }
}
