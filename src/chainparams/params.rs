// chainparams_rs/src/chainparams/params.rs
// Canonical network parameters read by every other subsystem of the node.

use super::types::{BlockHash, Checkpoint, HdKeyId, NetworkMagic};
use crate::error::ConfigError;
use serde::Serialize;

/// The one parameter shape consumers read, whatever chain is active.
///
/// Wallet code reads `coin_type`/`hd_coin_type`, the RPC dialer reads
/// `rpc_port`, address codecs read the version bytes and `bech32_hrp_segwit`,
/// and chain sync reads `genesis_hash` and `checkpoints`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetParams {
    pub name: String,
    pub net: NetworkMagic,
    pub default_port: String,
    pub rpc_port: String,
    pub coinbase_maturity: u16,
    pub genesis_hash: BlockHash,

    // Address encoding magics
    pub pub_key_hash_addr_id: u8,
    pub script_hash_addr_id: u8,
    pub private_key_id: u8,
    pub witness_pub_key_hash_addr_id: u8,
    pub witness_script_hash_addr_id: u8,
    pub bech32_hrp_segwit: String,

    pub hd_private_key_id: HdKeyId,
    pub hd_public_key_id: HdKeyId,
    pub hd_coin_type: u32,

    /// Ordered by strictly increasing height.
    pub checkpoints: Vec<Checkpoint>,

    /// Coin type used in key-derivation paths.
    pub coin_type: u32,
}

impl NetParams {
    /// Zero-valued destination for the adapter. Not public: an unfilled value
    /// has no rpc port and names no network.
    pub(crate) fn unfilled() -> Self {
        NetParams {
            name: String::new(),
            net: NetworkMagic::default(),
            default_port: String::new(),
            rpc_port: String::new(),
            coinbase_maturity: 0,
            genesis_hash: BlockHash::ZERO,
            pub_key_hash_addr_id: 0,
            script_hash_addr_id: 0,
            private_key_id: 0,
            witness_pub_key_hash_addr_id: 0,
            witness_script_hash_addr_id: 0,
            bech32_hrp_segwit: String::new(),
            hd_private_key_id: HdKeyId::default(),
            hd_public_key_id: HdKeyId::default(),
            hd_coin_type: 0,
            checkpoints: Vec::new(),
            coin_type: 0,
        }
    }

    pub fn rpc_port_number(&self) -> Result<u16, ConfigError> {
        match self.rpc_port.parse::<u16>() {
            Ok(port) if port != 0 => Ok(port),
            _ => Err(ConfigError::InvalidRpcPort(self.rpc_port.clone())),
        }
    }

    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    pub fn checkpoint_at(&self, height: i32) -> Option<&Checkpoint> {
        self.checkpoints
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|idx| &self.checkpoints[idx])
    }

    /// True unless a checkpoint exists at `height` with a different hash.
    pub fn is_checkpointed(&self, height: i32, hash: &BlockHash) -> bool {
        match self.checkpoint_at(height) {
            Some(checkpoint) => checkpoint.hash == *hash,
            None => true,
        }
    }

    pub fn checkpoints_strictly_increasing(&self) -> bool {
        self.checkpoints.windows(2).all(|w| w[0].height < w[1].height)
    }
}
