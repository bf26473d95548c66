// chainparams_rs/src/chainparams/adapter.rs

use super::params::NetParams;
use super::types::{BlockHash, Checkpoint};
use super::variant::VariantParams;

/// Overwrites every field of `params` with the values declared by a fork.
///
/// Fixed-size arrays are copied by value into fresh storage and the checkpoint
/// list is rebuilt, so `params` shares nothing with `variant` afterwards.
pub fn apply_variant_params(params: &mut NetParams, variant: &VariantParams) {
    log::debug!("Applying {} {} parameters to canonical params", variant.chain, variant.kind);

    params.name = variant.name.to_string();
    params.net = variant.net;
    params.default_port = variant.default_port.to_string();
    params.coinbase_maturity = variant.coinbase_maturity;

    params.genesis_hash.as_bytes_mut().copy_from_slice(&variant.genesis_hash);

    // Address encoding magics
    params.pub_key_hash_addr_id = variant.pub_key_hash_addr_id;
    params.script_hash_addr_id = variant.script_hash_addr_id;
    params.private_key_id = variant.private_key_id;
    params.witness_pub_key_hash_addr_id = variant.witness_pub_key_hash_addr_id;
    params.witness_script_hash_addr_id = variant.witness_script_hash_addr_id;
    params.bech32_hrp_segwit = variant.bech32_hrp_segwit.to_string();

    params.hd_private_key_id = variant.hd_private_key_id;
    params.hd_public_key_id = variant.hd_public_key_id;
    params.hd_coin_type = variant.hd_coin_type;

    params.checkpoints = variant
        .checkpoints
        .iter()
        .map(|checkpoint| {
            let mut hash = BlockHash::ZERO;
            hash.as_bytes_mut().copy_from_slice(&checkpoint.hash);
            Checkpoint { height: checkpoint.height, hash }
        })
        .collect();

    params.rpc_port = variant.rpc_port.to_string();
    params.coin_type = variant.coin_type;
}

impl From<&VariantParams> for NetParams {
    fn from(variant: &VariantParams) -> Self {
        let mut params = NetParams::unfilled();
        apply_variant_params(&mut params, variant);
        params
    }
}
