// chainparams_rs/src/registry/litecoin.rs
// Values from ltcd chaincfg/params.go.

use super::RegistryEntry;
use crate::chainparams::{BlockHash, ChainFamily, ForkCheckpoint, HdKeyId, NetworkKind, NetworkMagic, VariantParams};

pub const MAINNET_NET: NetworkMagic = NetworkMagic(0xdbb6c0fb);
pub const TESTNET4_NET: NetworkMagic = NetworkMagic(0xf1c8d2fd);
// Same value as bitcoin regtest.
pub const REGTEST_NET: NetworkMagic = NetworkMagic(0xdab5bffa);

pub const COIN_TYPE_LITECOIN: u32 = 2;

const MAINNET_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2");
const TESTNET4_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("4966625a4b2851d9fdee139e56211a0d88575f59ed816ff5e6a63deb4e3e29a0");
const REGTEST_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("530827f38f93b43ed12af0b3ad25a288dc02ed74d6d7857862df51fc56c416f9");

pub const MAINNET_CHECKPOINTS: &[ForkCheckpoint] = &[
    ForkCheckpoint::new(1500, "841a2965955dd288cfa707a755d05a54e45f8bd476835ec9af4402a2b59a2967"),
    ForkCheckpoint::new(4032, "9ce90e427198fc0ef05e5905ce3503725b80e26afd35a987965fd7e3d9cf0846"),
    ForkCheckpoint::new(8064, "eb984353fc5190f210651f150c40b8a4bab9eeeff0b729fcb3987da694430d70"),
    ForkCheckpoint::new(16128, "602edf1859b7f9a6af809f1d9b0e6cb66fdc1d4d9dcd7a4bec03e12a1ccd153d"),
    ForkCheckpoint::new(23420, "d80fdf9ca81afd0bd2b2a90ac3a9fe547da58f2530ec874e978fce0b5101b507"),
    ForkCheckpoint::new(50000, "69dc37eb029b68f075a5012dcc0419c127672adb4f3a32882b2b3e71d07a20a6"),
    ForkCheckpoint::new(80000, "4fcb7c02f676a300503f49c764a89955a8f920b46a8cbecb4867182ecdb2e90a"),
    ForkCheckpoint::new(120000, "bd9d26924f05f6daa7f0155f32828ec89e8e29cee9e7121b026a7a3552ac6131"),
    ForkCheckpoint::new(161500, "dbe89880474f4bb4f75c227c77ba1cdc024991123b28b8418dbbf7798471ff43"),
    ForkCheckpoint::new(179620, "2ad9c65c990ac00426d18e446e0fd7be2ffa69e9a7dcb28358a50b2b78b9f709"),
    ForkCheckpoint::new(240000, "7140d1c4b4c2157ca217ee7636f24c9c73db39c4590c4e6eab2e3ea1555088aa"),
    ForkCheckpoint::new(383640, "2b6809f094a9215bafc65eb3f110a35127a34be94b7d0590a096c3f126c6f364"),
    ForkCheckpoint::new(409004, "487518d663d9f1fa08611d9395ad74d982b667fbdc0e77e9cf39b4f1355908a3"),
    ForkCheckpoint::new(456000, "bf34f71cc6366cd487930d06be22f897e34ca6a40501ac7d401be32456372004"),
    ForkCheckpoint::new(638902, "15238656e8ec63d28de29a8c75fcf3a5819afc953dcd9cc45cecc53baec74f38"),
    ForkCheckpoint::new(721000, "198a7b4de1df9478e2463bd99d75b714eab235a2e63e741641dc8a759a9840e5"),
];

pub const TESTNET4_CHECKPOINTS: &[ForkCheckpoint] = &[
    ForkCheckpoint::new(26115, "817d5b509e91ab5e439652eee2f59271bbc7ba85021d720cdb6da6565b43c14f"),
    ForkCheckpoint::new(43928, "7d86614c153f5ef6ad878483118ae523e248cd0dd0345330cb148e812493cbb4"),
    ForkCheckpoint::new(69296, "66c2f58da3cfd282093b55eb09c1f5287d7a18801a8ff441830e67e8771010df"),
    ForkCheckpoint::new(99949, "8dd471cb5aecf5ead91e7e4b1e932c79a0763060f8d93671b6801d115bfc6cde"),
    ForkCheckpoint::new(159256, "ab5b0b9968842f5414804591119d6db829af606864b1959a25d6f5c114afb2b7"),
];

pub fn mainnet_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Litecoin,
        kind: NetworkKind::MainNet,
        name: "mainnet",
        net: MAINNET_NET,
        default_port: "9333",
        coinbase_maturity: 100,
        genesis_hash: MAINNET_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x30, // starts with L
        script_hash_addr_id: 0x32,  // starts with M
        private_key_id: 0xb0,
        witness_pub_key_hash_addr_id: 0x06,
        witness_script_hash_addr_id: 0x0a,
        bech32_hrp_segwit: "ltc",
        hd_private_key_id: HdKeyId::new([0x04, 0x88, 0xad, 0xe4]),
        hd_public_key_id: HdKeyId::new([0x04, 0x88, 0xb2, 0x1e]),
        hd_coin_type: 2,
        checkpoints: MAINNET_CHECKPOINTS.to_vec(),
        rpc_port: "9334",
        coin_type: COIN_TYPE_LITECOIN,
    }
}

pub fn testnet4_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Litecoin,
        kind: NetworkKind::TestNet4,
        name: "testnet4",
        net: TESTNET4_NET,
        default_port: "19335",
        coinbase_maturity: 100,
        genesis_hash: TESTNET4_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x6f, // starts with m or n
        script_hash_addr_id: 0x3a,  // starts with Q
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x52,
        witness_script_hash_addr_id: 0x31,
        bech32_hrp_segwit: "tltc",
        hd_private_key_id: HdKeyId::new([0x04, 0x36, 0xef, 0x7d]), // ttpv
        hd_public_key_id: HdKeyId::new([0x04, 0x36, 0xf6, 0xe1]),  // ttub
        hd_coin_type: 1,
        checkpoints: TESTNET4_CHECKPOINTS.to_vec(),
        rpc_port: "19334",
        coin_type: super::bitcoin::COIN_TYPE_TESTNET,
    }
}

pub fn regtest_params() -> VariantParams {
    VariantParams {
        chain: ChainFamily::Litecoin,
        kind: NetworkKind::RegTest,
        name: "regtest",
        net: REGTEST_NET,
        default_port: "18444",
        coinbase_maturity: 100,
        genesis_hash: REGTEST_GENESIS_HASH.to_bytes(),
        pub_key_hash_addr_id: 0x6f,
        script_hash_addr_id: 0x3a,
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x52,
        witness_script_hash_addr_id: 0x31,
        bech32_hrp_segwit: "rltc",
        hd_private_key_id: HdKeyId::new([0x04, 0x35, 0x83, 0x94]),
        hd_public_key_id: HdKeyId::new([0x04, 0x35, 0x87, 0xcf]),
        hd_coin_type: 1,
        checkpoints: Vec::new(),
        rpc_port: "19334",
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
