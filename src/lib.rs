// chainparams_rs/src/lib.rs
// Network parameters for bitcoin and its forks, normalized into one canonical
// shape for the rest of a multi-chain node.

pub mod active;
pub mod chainparams;
pub mod error;
pub mod registry;
pub mod settings;

pub use active::{select_active_params, ActiveNetParams};
pub use chainparams::{ChainFamily, NetParams, NetworkKind};
pub use error::ConfigError;
pub use registry::{is_testnet, Registry};
pub use settings::Settings;
