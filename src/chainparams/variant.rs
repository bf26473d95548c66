// chainparams_rs/src/chainparams/variant.rs
// Raw per-fork parameter descriptor. Every fork fills the same shape with its
// own values; the adapter is the only code that turns one into NetParams.

use super::types::{BlockHash, ChainFamily, HdKeyId, NetworkKind, NetworkMagic, HASH_SIZE};

/// Checkpoint as declared by a fork: the hash is kept as raw bytes in
/// internal byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkCheckpoint {
    pub height: i32,
    pub hash: [u8; HASH_SIZE],
}

impl ForkCheckpoint {
    pub const fn new(height: i32, display_hex: &str) -> Self {
        ForkCheckpoint { height, hash: BlockHash::from_display_hex(display_hex).to_bytes() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantParams {
    pub chain: ChainFamily,
    pub kind: NetworkKind,

    pub name: &'static str,
    pub net: NetworkMagic,
    pub default_port: &'static str,
    pub coinbase_maturity: u16,
    pub genesis_hash: [u8; HASH_SIZE],

    pub pub_key_hash_addr_id: u8,
    pub script_hash_addr_id: u8,
    pub private_key_id: u8,
    pub witness_pub_key_hash_addr_id: u8,
    pub witness_script_hash_addr_id: u8,
    pub bech32_hrp_segwit: &'static str,

    pub hd_private_key_id: HdKeyId,
    pub hd_public_key_id: HdKeyId,
    pub hd_coin_type: u32,

    pub checkpoints: Vec<ForkCheckpoint>,

    pub rpc_port: &'static str,
    pub coin_type: u32,
}
