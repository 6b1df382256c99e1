//! 256-bit external value that drives a shuffle

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::crc32;
use crate::error::ShuffleError;
use crate::HASH_LENGTH;

/// Exactly 32 raw bytes, usually a published block hash.
///
/// Bytes are kept in the order they were supplied. Hex input is decoded
/// as-is, so a hash copied from a block explorer keeps its display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockHash([u8; HASH_LENGTH]);

impl BlockHash {
    pub const GENESIS: BlockHash = BlockHash([0u8; HASH_LENGTH]);

    pub fn new(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Decode 64 hex characters. An optional `0x` prefix is accepted.
    pub fn from_hex(s: &str) -> Result<Self, ShuffleError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// CRC-32 of the raw bytes.
    pub fn seed(&self) -> u32 {
        crc32(&self.0)
    }
}

impl TryFrom<&[u8]> for BlockHash {
    type Error = ShuffleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; HASH_LENGTH] = bytes.try_into().map_err(|_| ShuffleError::InvalidHashLength {
            expected: HASH_LENGTH,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl From<[u8; HASH_LENGTH]> for BlockHash {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::str::FromStr for BlockHash {
    type Err = ShuffleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl core::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_11111: &str = "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d";

    #[test]
    fn test_hex_roundtrip_keeps_byte_order() {
        let hash = BlockHash::from_hex(BLOCK_11111).unwrap();
        assert_eq!(hash.as_bytes()[4], 0x69);
        assert_eq!(hash.as_bytes()[31], 0x1d);
        assert_eq!(hash.to_string(), BLOCK_11111);
    }

    #[test]
    fn test_prefixed_hex() {
        let a = BlockHash::from_hex(BLOCK_11111).unwrap();
        let b: BlockHash = format!("0x{}", BLOCK_11111).parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed() {
        assert_eq!(BlockHash::GENESIS.seed(), 0x190A_55AD);
        assert_eq!(BlockHash::from_hex(BLOCK_11111).unwrap().seed(), 0x7936_4EA3);
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            BlockHash::try_from(&[0u8; 31][..]),
            Err(ShuffleError::InvalidHashLength { expected: 32, actual: 31 }),
        );
        assert_eq!(
            BlockHash::from_hex("00"),
            Err(ShuffleError::InvalidHashLength { expected: 32, actual: 1 }),
        );
    }

    #[test]
    fn test_bad_hex() {
        assert!(matches!(BlockHash::from_hex("xyz"), Err(ShuffleError::InvalidHex(_))));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let hash = BlockHash::from_hex(BLOCK_11111).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", BLOCK_11111));
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
