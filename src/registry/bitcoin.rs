// chainparams_rs/src/registry/bitcoin.rs
// Bitcoin is the reference chain, so its entries are declared directly in the
// canonical shape. Values from btcd chaincfg/params.go.

use super::RegistryEntry;
use crate::chainparams::{BlockHash, Checkpoint, HdKeyId, NetParams, NetworkKind, NetworkMagic};

pub const MAINNET_NET: NetworkMagic = NetworkMagic(0xd9b4bef9);
pub const TESTNET3_NET: NetworkMagic = NetworkMagic(0x0709110b);
pub const REGTEST_NET: NetworkMagic = NetworkMagic(0xdab5bffa);
pub const SIMNET_NET: NetworkMagic = NetworkMagic(0x12141c16);

// lnd keychain coin types
pub const COIN_TYPE_BITCOIN: u32 = 0;
pub const COIN_TYPE_TESTNET: u32 = 1;

const fn checkpoint(height: i32, display_hex: &str) -> Checkpoint {
    Checkpoint { height, hash: BlockHash::from_display_hex(display_hex) }
}

pub const MAINNET_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");
pub const TESTNET3_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943");
pub const REGTEST_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206");
pub const SIMNET_GENESIS_HASH: BlockHash =
    BlockHash::from_display_hex("683e86bd5c6d110d91b94b97137ba6bfe02dbbdb8e3dff722a669b5d69d77af6");

pub const MAINNET_CHECKPOINTS: &[Checkpoint] = &[
    checkpoint(11111, "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d"),
    checkpoint(33333, "000000002dd5588a74784eaa7ab0507a18ad16a236e7b1ce69f00d7ddfb5d0a6"),
    checkpoint(74000, "0000000000573993a3c9e41ce34471c079dcf5f52a0e824a81e7f953b8661a20"),
    checkpoint(105000, "00000000000291ce28027faea320c8d2b054b2e0fe44a773f3eefb151d6bdc97"),
    checkpoint(134444, "00000000000005b12ffd4cd315cd34ffd4a594f430ac814c91184a0d42d2b0fe"),
    checkpoint(168000, "000000000000099e61ea72015e79632f216fe6cb33d7899acb35b75c8303b763"),
    checkpoint(193000, "000000000000059f452a5f7340de6682a977387c17010ff6e6c3bd83ca8b1317"),
    checkpoint(210000, "000000000000048b95347e83192f69cf0366076336c639f9b7228e9ba171342e"),
    checkpoint(216116, "00000000000001b4f4b433e81ee46494af945cf96014816a4e2370f11b23df4e"),
    checkpoint(225430, "00000000000001c108384350f74090433e7fcf79a606b8e797f065b130575932"),
    checkpoint(250000, "000000000000003887df1f29024b06fc2200b55f8af8f35453d7be294df2d214"),
    checkpoint(267300, "000000000000000a83fbd660e918f218bf37edd92b748ad940483c7c116179ac"),
    checkpoint(279000, "0000000000000001ae8c72a0b0c301f67e3afca10e819efa9041e458e9bd7e40"),
    checkpoint(300255, "0000000000000000162804527c6e9b9f0563a280525f9d08c12041def0a0f3b2"),
    checkpoint(319400, "000000000000000021c6052e9becade189495d1c539aa37c58917305fd15f13b"),
    checkpoint(343185, "0000000000000000072b8bf361d01a6ba7d445dd024203fafc78768ed4368554"),
    checkpoint(352940, "000000000000000010755df42dba556bb72be6a32f3ce0b6941ce4430152c9ff"),
    checkpoint(382320, "00000000000000000a8dc6ed5b133d0eb2fd6af56203e4159789b092defd8ab2"),
];

pub const TESTNET3_CHECKPOINTS: &[Checkpoint] = &[
    checkpoint(546, "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70"),
    checkpoint(100000, "00000000009e2958c15ff9290d571bf9459e93b19765c6801ddeccadbb160a1e"),
    checkpoint(200000, "0000000000287bffd321963ef05feab753ebe274e1d78b2fd4e2bfe9ad3aa6f2"),
    checkpoint(300001, "0000000000004829474748f3d1bc8fcf893c88be255e6d7f571c548aff57abf4"),
    checkpoint(400002, "0000000005e2c73b8ecb82ae2dbc2e8274614ebad7172b53528aba7501f5a089"),
    checkpoint(500011, "00000000000929f63977fbac92ff570a9bd9e7715401ee96f2848f7b07750b02"),
    checkpoint(600002, "000000000001f471389afd6ee94dcace5ccc44adc18e8bff402443f034b07240"),
    checkpoint(700000, "000000000000406178b12a4dea3b27e13b3c4fe4510994fd667d7c1e6a3f4dc1"),
    checkpoint(800010, "000000000017ed35296433190b6829db01e657d80631d43f5983fa403bfdb4c1"),
    checkpoint(900000, "0000000000356f8d8924556e765b7a94aaebc6b5c8685dcfa2b1ee8b41acd89b"),
    checkpoint(1000007, "00000000001ccb893d8a1f25b70ad173ce955e5f50124261bbbc50379a612ddf"),
];

const MAINNET_HD_PRIVATE_KEY_ID: HdKeyId = HdKeyId::new([0x04, 0x88, 0xad, 0xe4]); // xprv
const MAINNET_HD_PUBLIC_KEY_ID: HdKeyId = HdKeyId::new([0x04, 0x88, 0xb2, 0x1e]); // xpub
const TESTNET_HD_PRIVATE_KEY_ID: HdKeyId = HdKeyId::new([0x04, 0x35, 0x83, 0x94]); // tprv
const TESTNET_HD_PUBLIC_KEY_ID: HdKeyId = HdKeyId::new([0x04, 0x35, 0x87, 0xcf]); // tpub

pub fn mainnet_params() -> NetParams {
    NetParams {
        name: "mainnet".to_string(),
        net: MAINNET_NET,
        default_port: "8333".to_string(),
        rpc_port: "8334".to_string(),
        coinbase_maturity: 100,
        genesis_hash: MAINNET_GENESIS_HASH,
        pub_key_hash_addr_id: 0x00,
        script_hash_addr_id: 0x05,
        private_key_id: 0x80,
        witness_pub_key_hash_addr_id: 0x06,
        witness_script_hash_addr_id: 0x0a,
        bech32_hrp_segwit: "bc".to_string(),
        hd_private_key_id: MAINNET_HD_PRIVATE_KEY_ID,
        hd_public_key_id: MAINNET_HD_PUBLIC_KEY_ID,
        hd_coin_type: 0,
        checkpoints: MAINNET_CHECKPOINTS.to_vec(),
        coin_type: COIN_TYPE_BITCOIN,
    }
}

pub fn testnet3_params() -> NetParams {
    NetParams {
        name: "testnet3".to_string(),
        net: TESTNET3_NET,
        default_port: "18333".to_string(),
        rpc_port: "18334".to_string(),
        coinbase_maturity: 100,
        genesis_hash: TESTNET3_GENESIS_HASH,
        pub_key_hash_addr_id: 0x6f,
        script_hash_addr_id: 0xc4,
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x03,
        witness_script_hash_addr_id: 0x28,
        bech32_hrp_segwit: "tb".to_string(),
        hd_private_key_id: TESTNET_HD_PRIVATE_KEY_ID,
        hd_public_key_id: TESTNET_HD_PUBLIC_KEY_ID,
        hd_coin_type: 1,
        checkpoints: TESTNET3_CHECKPOINTS.to_vec(),
        coin_type: COIN_TYPE_TESTNET,
    }
}

// Regtest shares the testnet3 rpc port. btcd leaves the witness version bytes
// unset on regtest.
pub fn regtest_params() -> NetParams {
    NetParams {
        name: "regtest".to_string(),
        net: REGTEST_NET,
        default_port: "18444".to_string(),
        rpc_port: "18334".to_string(),
        coinbase_maturity: 100,
        genesis_hash: REGTEST_GENESIS_HASH,
        pub_key_hash_addr_id: 0x6f,
        script_hash_addr_id: 0xc4,
        private_key_id: 0xef,
        witness_pub_key_hash_addr_id: 0x00,
        witness_script_hash_addr_id: 0x00,
        bech32_hrp_segwit: "bcrt".to_string(),
        hd_private_key_id: TESTNET_HD_PRIVATE_KEY_ID,
        hd_public_key_id: TESTNET_HD_PUBLIC_KEY_ID,
        hd_coin_type: 1,
        checkpoints: Vec::new(),
        coin_type: COIN_TYPE_TESTNET,
    }
}

pub fn simnet_params() -> NetParams {
    NetParams {
        name: "simnet".to_string(),
        net: SIMNET_NET,
        default_port: "18555".to_string(),
        rpc_port: "18556".to_string(),
        coinbase_maturity: 100,
        genesis_hash: SIMNET_GENESIS_HASH,
        pub_key_hash_addr_id: 0x3f, // starts with S
        script_hash_addr_id: 0x7b,  // starts with s
        private_key_id: 0x64,       // starts with 4 (uncompressed) or F (compressed)
        witness_pub_key_hash_addr_id: 0x19,
        witness_script_hash_addr_id: 0x28,
        bech32_hrp_segwit: "sb".to_string(),
        hd_private_key_id: HdKeyId::new([0x04, 0x20, 0xb9, 0x00]), // sprv
        hd_public_key_id: HdKeyId::new([0x04, 0x20, 0xbd, 0x3a]),  // spub
        hd_coin_type: 115, // ASCII for s
        checkpoints: Vec::new(),
        coin_type: COIN_TYPE_TESTNET,
    }
}

pub(super) fn entries() -> Vec<(NetworkKind, RegistryEntry)> {
    vec![
        (NetworkKind::MainNet, RegistryEntry::Reference(mainnet_params())),
        (NetworkKind::TestNet3, RegistryEntry::Reference(testnet3_params())),
        (NetworkKind::RegTest, RegistryEntry::Reference(regtest_params())),
        (NetworkKind::SimNet, RegistryEntry::Reference(simnet_params())),
    ]
}
