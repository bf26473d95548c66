// chainparams_rs/src/registry/einsteinium.rs
// Values from the emc2d chain configuration. Einsteinium forked litecoin before
// litecoin moved its test networks to the 0x3a script prefix and ttpv/ttub keys,
// so its test networks keep bitcoin's test prefixes. Testnet reuses the mainnet
// genesis block; regtest mines its genesis over the same coinbase.

use super::RegistryEntry;
use crate::chainparams::{BlockHash, ChainFamily, ForkCheckpoint, HdKeyId, NetworkKind, NetworkMagic, VariantParams};

pub const MAINNET_NET: NetworkMagic = NetworkMagic(0xacc4f1e8);
pub const TESTNET4_NET: NetworkMagic = NetworkMagic(0xc1f0a2fa);
pub const REGTEST_NET: NetworkMagic = NetworkMagic(0xdab5bffa);

// SLIP-44
pub const COIN_TYPE_EINSTEINIUM: u32 = 41;

const MAINNET_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b");
const TESTNET4_GENESIS_HASH: BlockHash = MAINNET_GENESIS_HASH;
const REGTEST_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("65fdcc15cf606592e940d619b945ffa242cb963f94b4aa34aade5cc774b2950f");

const MAINNET_CHECKPOINTS: [ForkCheckpoint; 1] =
    [ForkCheckpoint::new(0, "4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b")];

pub fn mainnet_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Einsteinium,
        kind: NetworkKind::MainNet,
        name: "mainnet",
        net: MAINNET_NET,
        default_port: "41878",
        coinbase_maturity: 100,
        genesis_hash: MAINNET_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x21, // starts with E
        script_hash_addr_id: 0x05,
        private_key_id: 0xa1,
        witness_pub_key_hash_addr_id: 0x06,
        witness_script_hash_addr_id: 0x0a,
        bech32_hrp_segwit: "emc2",
        hd_private_key_id: HdKeyId::new([0x04, 0x88, 0xad, 0xe4]),
        hd_public_key_id: HdKeyId::new([0x04, 0x88, 0xb2, 0x1e]),
        hd_coin_type: COIN_TYPE_EINSTEINIUM,
        checkpoints: MAINNET_CHECKPOINTS.to_vec(),
        rpc_port: "41876",
        coin_type: COIN_TYPE_EINSTEINIUM,
    }
}

pub fn testnet4_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Einsteinium,
        kind: NetworkKind::TestNet4,
        name: "testnet4",
        net: TESTNET4_NET,
        default_port: "31878",
        coinbase_maturity: 100,
        genesis_hash: TESTNET4_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x6f,
        script_hash_addr_id: 0xc4, // same as bitcoin testnet
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x52,
        witness_script_hash_addr_id: 0x31,
        bech32_hrp_segwit: "temc2",
        hd_private_key_id: HdKeyId::new([0x04, 0x35, 0x83, 0x94]), // tprv
        hd_public_key_id: HdKeyId::new([0x04, 0x35, 0x87, 0xcf]),  // tpub
        hd_coin_type: 1,
        checkpoints: Vec::new(),
        rpc_port: "31876",
        coin_type: super::bitcoin::COIN_TYPE_TESTNET,
    }
}

pub fn regtest_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Einsteinium,
        kind: NetworkKind::RegTest,
        name: "regtest",
        net: REGTEST_NET,
        default_port: "31880",
        coinbase_maturity: 100,
        genesis_hash: REGTEST_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x6f,
        script_hash_addr_id: 0xc4,
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x52,
        witness_script_hash_addr_id: 0x31,
        bech32_hrp_segwit: "remc2",
        hd_private_key_id: HdKeyId::new([0x04, 0x35, 0x83, 0x94]),
        hd_public_key_id: HdKeyId::new([0x04, 0x35, 0x87, 0xcf]),
        hd_coin_type: 1,
        checkpoints: Vec::new(),
        rpc_port: "31882",
        coin_type: super::bitcoin::COIN_TYPE_TESTNET,
    }
}

pub(super) fn entries() -> Vec<(NetworkKind, RegistryEntry)> {
    vec![
        (NetworkKind::MainNet, RegistryEntry::Variant(mainnet_params())),
        (NetworkKind::TestNet4, RegistryEntry::Variant(testnet4_params())),
        (NetworkKind::RegTest, RegistryEntry::Variant(regtest_params())),
    ]
}
