//! Fair Shuffle
//!
//! Deterministic, externally verifiable shuffling of a list driven by a
//! published 256-bit value such as a Bitcoin block hash. Anyone holding the
//! same items and the same hash recomputes the identical order.
//!
//! The hash is reduced to a 32-bit seed with CRC-32, the seed drives an
//! MT19937 engine, and the engine drives a Fisher-Yates shuffle. Fairness
//! comes from the unpredictability of the hash, not from this transform: the
//! seed space is only 32 bits wide.
//!
//! This crate is compiled to:
//! - Native (for publishing and verifying)
//! - WASM (for in-browser verification)

mod checksum;
mod error;
mod hash;
mod items;
mod random;
mod shuffle;

pub mod checkpoints;
pub mod verify;

#[cfg(feature = "wasm")]
mod wasm;

pub use checksum::{crc32, reduce};
pub use error::ShuffleError;
pub use hash::BlockHash;
pub use items::{Items, TUPLE_KEY};
pub use random::Mt19937;
pub use shuffle::{shuffle_slice, shuffle_with_seed, DrawStrategy, ShuffleConfig};

/// Length of the external value in bytes (256 bits).
pub const HASH_LENGTH: usize = 32;

/// A set of items waiting to be shuffled by one or more hashes.
///
/// Shuffling never mutates the stored items; every call works on a copy
/// with its own freshly seeded engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairShuffle<T> {
    items: Items<T>,
    config: ShuffleConfig,
}

impl<T: Clone> FairShuffle<T> {
    pub fn new(items: impl Into<Items<T>>) -> Self {
        Self::with_config(items, ShuffleConfig::default())
    }

    pub fn with_config(items: impl Into<Items<T>>, config: ShuffleConfig) -> Self {
        Self { items: items.into(), config }
    }

    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    pub fn config(&self) -> ShuffleConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shuffle by a raw hash.
    ///
    /// Fails with [`ShuffleError::InvalidHashLength`] unless `hash` is
    /// exactly [`HASH_LENGTH`] bytes. Tuples come back as tuples; every
    /// other shape comes back as a list.
    pub fn shuffle(&self, hash: &[u8]) -> Result<Items<T>, ShuffleError> {
        let seed = reduce(hash)?;
        Ok(self.shuffle_seeded(seed))
    }

    /// Shuffle by an already validated hash.
    pub fn shuffle_block(&self, hash: &BlockHash) -> Items<T> {
        self.shuffle_seeded(hash.seed())
    }

    /// Shuffle by a seed that was already reduced from a hash.
    pub fn shuffle_seeded(&self, seed: u32) -> Items<T> {
        let draw = self.config.draw;
        self.items.clone().reorder(|items| shuffle_with_seed(items, seed, draw))
    }
}

impl FairShuffle<serde_json::Value> {
    /// Build from a dynamically typed value; see [`Items::from_json`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, ShuffleError> {
        Ok(Self::new(Items::from_json(value)?))
    }
}
