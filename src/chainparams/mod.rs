pub mod adapter;
pub mod params;
pub mod types;
pub mod variant;

pub use adapter::apply_variant_params;
pub use params::NetParams;
pub use types::{BlockHash, ChainFamily, Checkpoint, HdKeyId, NetworkKind, NetworkMagic};
pub use variant::{ForkCheckpoint, VariantParams};
