// chainparams_rs/src/chainparams/types.rs
// Fixed-width value types shared by the canonical and variant parameter models.

use crate::error::ConfigError;
use byteorder::{ByteOrder, LittleEndian};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const HASH_SIZE: usize = 32;
pub const HD_KEY_ID_SIZE: usize = 4;

/// A 32-byte block hash stored in internal (wire) byte order.
///
/// The text form is the reversed, big-endian hex string that block explorers
/// print, so `000000000019d6...` for the bitcoin genesis block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockHash([u8; HASH_SIZE]);

impl BlockHash {
    pub const ZERO: BlockHash = BlockHash([0u8; HASH_SIZE]);

    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        BlockHash(bytes)
    }

    /// Decodes a big-endian display hex literal at compile time.
    ///
    /// Only meant for `const`/`static` tables: a malformed literal aborts const
    /// evaluation and therefore the build.
    pub const fn from_display_hex(s: &str) -> Self {
        let digits = s.as_bytes();
        assert!(digits.len() == HASH_SIZE * 2, "hash literal must be 64 hex digits");
        let mut out = [0u8; HASH_SIZE];
        let mut i = 0;
        while i < HASH_SIZE {
            let hi = hex_nibble(digits[2 * i]);
            let lo = hex_nibble(digits[2 * i + 1]);
            out[HASH_SIZE - 1 - i] = (hi << 4) | lo;
            i += 1;
        }
        BlockHash(out)
    }

    /// Runtime counterpart of [`BlockHash::from_display_hex`] for user input.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let mut out = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut out).map_err(|_| ConfigError::InvalidHash(s.to_string()))?;
        out.reverse();
        Ok(BlockHash(out))
    }

    pub fn to_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }

    pub const fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; HASH_SIZE] {
        &mut self.0
    }
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in hash literal"),
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", self.to_hex())
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// BIP-32 extended key version prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HdKeyId([u8; HD_KEY_ID_SIZE]);

impl HdKeyId {
    pub const fn new(bytes: [u8; HD_KEY_ID_SIZE]) -> Self {
        HdKeyId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HD_KEY_ID_SIZE] {
        &self.0
    }
}

impl fmt::Debug for HdKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HdKeyId({})", hex::encode(self.0))
    }
}

impl Serialize for HdKeyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

/// Peer-protocol network magic. Every chain family declares its magic with this
/// one width, so moving a fork's value into the canonical model is a plain copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NetworkMagic(pub u32);

impl NetworkMagic {
    /// The four bytes that open every P2P message header.
    pub fn to_wire_bytes(self) -> [u8; 4] {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, self.0);
        buf
    }

    pub fn from_wire_bytes(bytes: [u8; 4]) -> Self {
        NetworkMagic(LittleEndian::read_u32(&bytes))
    }
}

impl fmt::Display for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::Debug for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkMagic({:#010x})", self.0)
    }
}

impl Serialize for NetworkMagic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    pub height: i32,
    pub hash: BlockHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Bitcoin,
    Litecoin,
    Einsteinium,
}

impl ChainFamily {
    pub const ALL: [ChainFamily; 3] = [ChainFamily::Bitcoin, ChainFamily::Litecoin, ChainFamily::Einsteinium];

    /// Bitcoin is the reference chain: its entries are already canonical.
    pub fn is_reference(self) -> bool {
        self == ChainFamily::Bitcoin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChainFamily::Bitcoin => "bitcoin",
            ChainFamily::Litecoin => "litecoin",
            ChainFamily::Einsteinium => "einsteinium",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(ChainFamily::Bitcoin),
            "litecoin" | "ltc" => Ok(ChainFamily::Litecoin),
            "einsteinium" | "emc2" => Ok(ChainFamily::Einsteinium),
            _ => Err(ConfigError::UnknownChain(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    MainNet,
    TestNet3,
    TestNet4,
    RegTest,
    SimNet,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 5] = [
        NetworkKind::MainNet,
        NetworkKind::TestNet3,
        NetworkKind::TestNet4,
        NetworkKind::RegTest,
        NetworkKind::SimNet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkKind::MainNet => "mainnet",
            NetworkKind::TestNet3 => "testnet3",
            NetworkKind::TestNet4 => "testnet4",
            NetworkKind::RegTest => "regtest",
            NetworkKind::SimNet => "simnet",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = ConfigError;

    // "testnet" alone is rejected: which testnet that means depends on the chain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkKind::MainNet),
            "testnet3" => Ok(NetworkKind::TestNet3),
            "testnet4" => Ok(NetworkKind::TestNet4),
            "regtest" => Ok(NetworkKind::RegTest),
            "simnet" => Ok(NetworkKind::SimNet),
            _ => Err(ConfigError::UnknownNetworkKind(s.to_string())),
        }
    }
}
