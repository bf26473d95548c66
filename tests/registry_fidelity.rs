use chainparams_rs::chainparams::{BlockHash, Checkpoint, NetworkMagic, VariantParams};
use chainparams_rs::registry::{bitcoin, einsteinium, is_testnet_magic, litecoin};
use chainparams_rs::{is_testnet, select_active_params, ChainFamily, ConfigError, NetParams, NetworkKind, Registry};
use std::collections::HashMap;

fn declared_variant(chain: ChainFamily, kind: NetworkKind) -> Option<VariantParams> {
    match (chain, kind) {
        (ChainFamily::Litecoin, NetworkKind::MainNet) => Some(litecoin::mainnet_params()),
        (ChainFamily::Litecoin, NetworkKind::TestNet4) => Some(litecoin::testnet4_params()),
        (ChainFamily::Litecoin, NetworkKind::RegTest) => Some(litecoin::regtest_params()),
        (ChainFamily::Einsteinium, NetworkKind::MainNet) => Some(einsteinium::mainnet_params()),
        (ChainFamily::Einsteinium, NetworkKind::TestNet4) => Some(einsteinium::testnet4_params()),
        (ChainFamily::Einsteinium, NetworkKind::RegTest) => Some(einsteinium::regtest_params()),
        _ => None,
    }
}

fn declared_reference(kind: NetworkKind) -> Option<NetParams> {
    match kind {
        NetworkKind::MainNet => Some(bitcoin::mainnet_params()),
        NetworkKind::TestNet3 => Some(bitcoin::testnet3_params()),
        NetworkKind::RegTest => Some(bitcoin::regtest_params()),
        NetworkKind::SimNet => Some(bitcoin::simnet_params()),
        NetworkKind::TestNet4 => None,
    }
}

fn all_selected() -> Vec<(ChainFamily, NetworkKind, NetParams)> {
    let registry = Registry::new();
    registry
        .networks()
        .map(|(chain, kind)| {
            let params = select_active_params(&registry, chain, kind).unwrap();
            (chain, kind, params)
        })
        .collect()
}

struct Upstream {
    chain: ChainFamily,
    kind: NetworkKind,
    genesis: &'static str,
    hd_private_key_id: &'static str,
    hd_public_key_id: &'static str,
    first_checkpoint: Option<(i32, &'static str)>,
    last_checkpoint: Option<(i32, &'static str)>,
}

// Written out from btcd, ltcd and emc2d chain configurations rather than taken
// from the registry modules.
fn upstream_values() -> Vec<Upstream> {
    use ChainFamily::*;
    use NetworkKind::*;
    vec![
        Upstream {
            chain: Bitcoin,
            kind: MainNet,
            genesis: "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
            hd_private_key_id: "0488ade4",
            hd_public_key_id: "0488b21e",
            first_checkpoint: Some((11111, "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d")),
            last_checkpoint: Some((382320, "00000000000000000a8dc6ed5b133d0eb2fd6af56203e4159789b092defd8ab2")),
        },
        Upstream {
            chain: Bitcoin,
            kind: TestNet3,
            genesis: "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943",
            hd_private_key_id: "04358394",
            hd_public_key_id: "043587cf",
            first_checkpoint: Some((546, "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70")),
            last_checkpoint: Some((1000007, "00000000001ccb893d8a1f25b70ad173ce955e5f50124261bbbc50379a612ddf")),
        },
        Upstream {
            chain: Bitcoin,
            kind: RegTest,
            genesis: "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206",
            hd_private_key_id: "04358394",
            hd_public_key_id: "043587cf",
            first_checkpoint: None,
            last_checkpoint: None,
        },
        Upstream {
            chain: Bitcoin,
            kind: SimNet,
            genesis: "683e86bd5c6d110d91b94b97137ba6bfe02dbbdb8e3dff722a669b5d69d77af6",
            hd_private_key_id: "0420b900",
            hd_public_key_id: "0420bd3a",
            first_checkpoint: None,
            last_checkpoint: None,
        },
        Upstream {
            chain: Litecoin,
            kind: MainNet,
            genesis: "12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2",
            hd_private_key_id: "0488ade4",
            hd_public_key_id: "0488b21e",
            first_checkpoint: Some((1500, "841a2965955dd288cfa707a755d05a54e45f8bd476835ec9af4402a2b59a2967")),
            last_checkpoint: Some((721000, "198a7b4de1df9478e2463bd99d75b714eab235a2e63e741641dc8a759a9840e5")),
        },
        Upstream {
            chain: Litecoin,
            kind: TestNet4,
            genesis: "4966625a4b2851d9fdee139e56211a0d88575f59ed816ff5e6a63deb4e3e29a0",
            hd_private_key_id: "0436ef7d",
            hd_public_key_id: "0436f6e1",
            first_checkpoint: Some((26115, "817d5b509e91ab5e439652eee2f59271bbc7ba85021d720cdb6da6565b43c14f")),
            last_checkpoint: Some((159256, "ab5b0b9968842f5414804591119d6db829af606864b1959a25d6f5c114afb2b7")),
        },
        Upstream {
            chain: Litecoin,
            kind: RegTest,
            genesis: "530827f38f93b43ed12af0b3ad25a288dc02ed74d6d7857862df51fc56c416f9",
            hd_private_key_id: "04358394",
            hd_public_key_id: "043587cf",
            first_checkpoint: None,
            last_checkpoint: None,
        },
        Upstream {
            chain: Einsteinium,
            kind: MainNet,
            genesis: "4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b",
            hd_private_key_id: "0488ade4",
            hd_public_key_id: "0488b21e",
            first_checkpoint: Some((0, "4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b")),
            last_checkpoint: Some((0, "4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b")),
        },
        Upstream {
            chain: Einsteinium,
            kind: TestNet4,
            genesis: "4e56204bb7b8ac06f860ff1c845f03f984303b5b97eb7b42868f714611aed94b",
            hd_private_key_id: "04358394",
            hd_public_key_id: "043587cf",
            first_checkpoint: None,
            last_checkpoint: None,
        },
        Upstream {
            chain: Einsteinium,
            kind: RegTest,
            genesis: "65fdcc15cf606592e940d619b945ffa242cb963f94b4aa34aade5cc774b2950f",
            hd_private_key_id: "04358394",
            hd_public_key_id: "043587cf",
            first_checkpoint: None,
            last_checkpoint: None,
        },
    ]
}

fn checkpoint_text(checkpoint: Option<&Checkpoint>) -> Option<(i32, String)> {
    checkpoint.map(|c| (c.height, c.hash.to_hex()))
}

#[test]
fn selected_params_match_upstream_values() {
    let registry = Registry::new();
    let expected = upstream_values();
    assert_eq!(expected.len(), registry.networks().count());

    for upstream in expected {
        let label = format!("{} {}", upstream.chain, upstream.kind);
        let params = select_active_params(&registry, upstream.chain, upstream.kind).unwrap();

        assert_eq!(params.genesis_hash.to_hex(), upstream.genesis, "{}", label);
        assert_eq!(hex::encode(params.hd_private_key_id.as_bytes()), upstream.hd_private_key_id, "{}", label);
        assert_eq!(hex::encode(params.hd_public_key_id.as_bytes()), upstream.hd_public_key_id, "{}", label);
        assert_eq!(
            checkpoint_text(params.checkpoints.first()),
            upstream.first_checkpoint.map(|(h, hash)| (h, hash.to_string())),
            "{} first checkpoint",
            label
        );
        assert_eq!(
            checkpoint_text(params.checkpoints.last()),
            upstream.last_checkpoint.map(|(h, hash)| (h, hash.to_string())),
            "{} last checkpoint",
            label
        );
    }
}

#[test]
fn adapted_params_carry_every_declared_fork_value() {
    for (chain, kind, params) in all_selected() {
        if chain.is_reference() {
            let declared = declared_reference(kind).unwrap();
            assert_eq!(params, declared, "{} {}", chain, kind);
            continue;
        }

        let declared = declared_variant(chain, kind).unwrap();
        assert_eq!(params.genesis_hash.as_bytes(), &declared.genesis_hash, "{} {}", chain, kind);
        assert_eq!(params.hd_private_key_id, declared.hd_private_key_id);
        assert_eq!(params.hd_public_key_id, declared.hd_public_key_id);
        assert_eq!(params.checkpoints.len(), declared.checkpoints.len());
        for (canonical, raw) in params.checkpoints.iter().zip(&declared.checkpoints) {
            assert_eq!(canonical.height, raw.height);
            assert_eq!(canonical.hash.as_bytes(), &raw.hash);
        }
        assert_eq!(params.net, declared.net);
        assert_eq!(params.rpc_port, declared.rpc_port);
        assert_eq!(params.coin_type, declared.coin_type);
    }
}

#[test]
fn einsteinium_test_networks_use_bitcoin_test_prefixes() {
    let registry = Registry::new();
    for kind in [NetworkKind::TestNet4, NetworkKind::RegTest] {
        let params = select_active_params(&registry, ChainFamily::Einsteinium, kind).unwrap();
        assert_eq!(params.pub_key_hash_addr_id, 0x6f, "{}", kind);
        assert_eq!(params.script_hash_addr_id, 0xc4, "{}", kind);
        assert_eq!(params.private_key_id, 0xef, "{}", kind);
    }
}

#[test]
fn well_known_genesis_hashes() {
    let registry = Registry::new();
    let btc = select_active_params(&registry, ChainFamily::Bitcoin, NetworkKind::MainNet).unwrap();
    assert_eq!(btc.genesis_hash.to_hex(), "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");

    let ltc = select_active_params(&registry, ChainFamily::Litecoin, NetworkKind::MainNet).unwrap();
    assert_eq!(ltc.genesis_hash.to_hex(), "12a765e31ffd4059bada1e25190f6e98c99d9714d334efa41a195a7e7e04bfe2");
    assert_eq!(
        ltc.checkpoint_at(1500).map(|c| c.hash),
        Some(BlockHash::from_hex("841a2965955dd288cfa707a755d05a54e45f8bd476835ec9af4402a2b59a2967").unwrap())
    );
}

#[test]
fn checkpoints_strictly_increase_everywhere() {
    for (chain, kind, params) in all_selected() {
        assert!(params.checkpoints_strictly_increasing(), "{} {}", chain, kind);
    }
}

#[test]
fn rpc_ports_are_valid_tcp_ports() {
    for (chain, kind, params) in all_selected() {
        assert!(!params.rpc_port.is_empty());
        assert!(params.rpc_port_number().is_ok(), "{} {} has rpc port {:?}", chain, kind, params.rpc_port);
    }
}

#[test]
fn testnet_classification_is_exact() {
    for (chain, kind, params) in all_selected() {
        let expected = kind != NetworkKind::MainNet;
        assert_eq!(is_testnet(&params), expected, "{} {}", chain, kind);
    }
    // Bitcoin signet is not registered and must not unlock test behavior.
    assert!(!is_testnet_magic(NetworkMagic(0x40cf030a)));
    assert!(!is_testnet_magic(NetworkMagic(0xffffffff)));
}

#[test]
fn coin_type_is_consistent_across_test_networks() {
    let mut per_chain: HashMap<ChainFamily, Vec<u32>> = HashMap::new();
    for (chain, _, params) in all_selected() {
        if is_testnet(&params) {
            per_chain.entry(chain).or_default().push(params.coin_type);
        }
    }
    for (chain, coin_types) in per_chain {
        assert!(coin_types.windows(2).all(|w| w[0] == w[1]), "{} test coin types {:?}", chain, coin_types);
    }
}

#[test]
fn magics_are_unique_within_a_chain() {
    let mut seen: HashMap<(ChainFamily, NetworkMagic), NetworkKind> = HashMap::new();
    for (chain, kind, params) in all_selected() {
        if let Some(previous) = seen.insert((chain, params.net), kind) {
            panic!("{} {} reuses the magic of {}", chain, kind, previous);
        }
    }
}

#[test]
fn mainnet_magic_wire_bytes() {
    let btc = bitcoin::mainnet_params();
    assert_eq!(btc.net.to_wire_bytes(), [0xf9, 0xbe, 0xb4, 0xd9]);
    assert_eq!(litecoin::MAINNET_NET.to_wire_bytes(), [0xfb, 0xc0, 0xb6, 0xdb]);
}

#[test]
fn unregistered_fork_network_is_a_configuration_error() {
    let registry = Registry::new();
    let err = select_active_params(&registry, ChainFamily::Einsteinium, NetworkKind::SimNet).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownNetwork { .. }));
    assert_eq!(err.to_string(), "no network parameters registered for einsteinium simnet");
}

#[test]
fn params_serialize_with_display_forms() {
    let params = bitcoin::mainnet_params();
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["net"], "0xd9b4bef9");
    assert_eq!(json["genesis_hash"], "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f");
    assert_eq!(json["hd_public_key_id"], "0488b21e");
    assert_eq!(json["rpc_port"], "8334");
    assert_eq!(json["checkpoints"][0]["height"], 11111);
}
