// chainparams_rs/src/registry/mod.rs
// Every supported (chain, network kind) pair and its declared parameters.

pub mod bitcoin;
pub mod classify;
pub mod einsteinium;
pub mod litecoin;

use crate::chainparams::{ChainFamily, NetParams, NetworkKind, VariantParams};
use crate::error::ConfigError;
use std::sync::OnceLock;

pub use classify::{is_testnet, is_testnet_magic, TEST_NET_MAGICS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEntry {
    /// Reference chain entries are declared canonical and handed out as-is.
    Reference(NetParams),
    /// Fork entries go through the adapter.
    Variant(VariantParams),
}

impl RegistryEntry {
    pub fn rpc_port(&self) -> &str {
        match self {
            RegistryEntry::Reference(params) => &params.rpc_port,
            RegistryEntry::Variant(variant) => variant.rpc_port,
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    entries: Vec<(ChainFamily, NetworkKind, RegistryEntry)>,
}

impl Registry {
    pub fn new() -> Self {
        let mut entries = Vec::new();
        for (chain, chain_entries) in [
            (ChainFamily::Bitcoin, bitcoin::entries()),
            (ChainFamily::Litecoin, litecoin::entries()),
            (ChainFamily::Einsteinium, einsteinium::entries()),
        ] {
            for (kind, entry) in chain_entries {
                entries.push((chain, kind, entry));
            }
        }
        log::debug!("Network registry initialized with {} entries", entries.len());
        Registry { entries }
    }

    /// Process-wide registry, built on first use and never modified.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    pub fn lookup(&self, chain: ChainFamily, kind: NetworkKind) -> Result<&RegistryEntry, ConfigError> {
        self.entries
            .iter()
            .find(|(c, k, _)| *c == chain && *k == kind)
            .map(|(_, _, entry)| entry)
            .ok_or(ConfigError::UnknownNetwork { chain, kind })
    }

    pub fn contains(&self, chain: ChainFamily, kind: NetworkKind) -> bool {
        self.lookup(chain, kind).is_ok()
    }

    /// All registered pairs in registration order.
    pub fn networks(&self) -> impl Iterator<Item = (ChainFamily, NetworkKind)> + '_ {
        self.entries.iter().map(|(chain, kind, _)| (*chain, *kind))
    }

    pub fn kinds_for(&self, chain: ChainFamily) -> Vec<NetworkKind> {
        self.networks().filter(|(c, _)| *c == chain).map(|(_, kind)| kind).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
