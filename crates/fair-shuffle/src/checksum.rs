//! Block hash → 32-bit seed reduction
//!
//! CRC-32/ISO-HDLC (reflected polynomial 0xEDB88320, init and final xor
//! 0xFFFFFFFF). The bytes are checksummed exactly as received: a block hash
//! in display order stays in display order.

use crate::error::ShuffleError;
use crate::HASH_LENGTH;

const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Byte-at-a-time lookup table, built at compile time.
const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// CRC-32 of an arbitrary byte slice.
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &b in bytes {
        crc = TABLE[((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    !crc
}

/// Reduce a 256-bit hash to the shuffle seed.
///
/// Rejects anything that is not exactly [`HASH_LENGTH`] bytes; there is no
/// truncation or padding.
pub fn reduce(hash: &[u8]) -> Result<u32, ShuffleError> {
    if hash.len() != HASH_LENGTH {
        return Err(ShuffleError::InvalidHashLength {
            expected: HASH_LENGTH,
            actual: hash.len(),
        });
    }
    Ok(crc32(hash))
}
