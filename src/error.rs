// chainparams_rs/src/error.rs

use crate::chainparams::{ChainFamily, NetworkKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The (chain, network) pair has no registry entry. Fatal at startup.
    #[error("no network parameters registered for {chain} {kind}")]
    UnknownNetwork { chain: ChainFamily, kind: NetworkKind },

    #[error("unknown chain '{0}'")]
    UnknownChain(String),

    #[error("unknown network kind '{0}'")]
    UnknownNetworkKind(String),

    #[error("invalid rpc port '{0}'")]
    InvalidRpcPort(String),

    #[error("invalid hash '{0}': expected 64 hex digits")]
    InvalidHash(String),

    #[error("failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),
}
