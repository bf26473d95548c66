// chainparams_rs/src/registry/classify.rs

use super::{bitcoin, einsteinium, litecoin};
use crate::chainparams::{NetParams, NetworkMagic};

/// Magics of every registered non-mainnet network. Closed set: a magic that is
/// not listed here is treated as a main network.
pub const TEST_NET_MAGICS: [NetworkMagic; 7] = [
    bitcoin::TESTNET3_NET,
    bitcoin::REGTEST_NET,
    bitcoin::SIMNET_NET,
    litecoin::TESTNET4_NET,
    litecoin::REGTEST_NET,
    einsteinium::TESTNET4_NET,
    einsteinium::REGTEST_NET,
];

// The magic is compared without looking at which chain family it came from.
// Callers always hold params resolved for a single chain, so two families
// sharing a test magic cannot produce a wrong answer there.
pub fn is_testnet_magic(net: NetworkMagic) -> bool {
    TEST_NET_MAGICS.contains(&net)
}

/// Whether the params describe a test network (testnet, regtest or simnet).
pub fn is_testnet(params: &NetParams) -> bool {
    is_testnet_magic(params.net)
}
