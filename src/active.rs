// chainparams_rs/src/active.rs
// Entry point the rest of the node calls to get the parameters of the
// configured chain and network.

use crate::chainparams::{ChainFamily, NetParams, NetworkKind};
use crate::error::ConfigError;
use crate::registry::{is_testnet, Registry, RegistryEntry};
use std::ops::Deref;
use std::sync::Arc;

/// Resolves `(chain, kind)` to canonical parameters.
///
/// Reference chain entries are returned as declared; fork entries are adapted
/// into a freshly allocated `NetParams`. An unregistered pair is an error, never
/// a fallback to some default network.
pub fn select_active_params(
    registry: &Registry,
    chain: ChainFamily,
    kind: NetworkKind,
) -> Result<NetParams, ConfigError> {
    let entry = registry.lookup(chain, kind).map_err(|e| {
        log::warn!("No network parameters registered for {} {}", chain, kind);
        e
    })?;

    let params = match entry {
        RegistryEntry::Reference(params) => params.clone(),
        RegistryEntry::Variant(variant) => NetParams::from(variant),
    };
    log::debug!("Resolved {} {} to network '{}' ({})", chain, kind, params.name, params.net);
    Ok(params)
}

/// Parameters of the active network, frozen after selection.
///
/// Cloning shares the same allocation; there is no way to get a mutable
/// reference to the inner `NetParams`.
#[derive(Debug, Clone)]
pub struct ActiveNetParams {
    chain: ChainFamily,
    kind: NetworkKind,
    params: Arc<NetParams>,
}

impl ActiveNetParams {
    pub fn select(chain: ChainFamily, kind: NetworkKind) -> Result<Self, ConfigError> {
        Self::select_from(Registry::global(), chain, kind)
    }

    pub fn select_from(registry: &Registry, chain: ChainFamily, kind: NetworkKind) -> Result<Self, ConfigError> {
        let params = select_active_params(registry, chain, kind)?;
        log::info!(
            "Active network: {} {} (magic {}, rpc port {}, testnet: {})",
            chain,
            kind,
            params.net,
            params.rpc_port,
            is_testnet(&params)
        );
        Ok(ActiveNetParams { chain, kind, params: Arc::new(params) })
    }

    pub fn chain(&self) -> ChainFamily {
        self.chain
    }

    pub fn kind(&self) -> NetworkKind {
        self.kind
    }

    pub fn params(&self) -> &NetParams {
        &self.params
    }

    pub fn is_testnet(&self) -> bool {
        is_testnet(&self.params)
    }
}

impl Deref for ActiveNetParams {
    type Target = NetParams;

    fn deref(&self) -> &NetParams {
        &self.params
    }
}
