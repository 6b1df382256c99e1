//! Publishable shuffle records
//!
//! A [`ShuffleRecord`] is what the publisher of a shuffle hands out: the
//! block hash, the seed it reduces to, the draw strategy and the resulting
//! order. A third party holding the original items rechecks it with
//! [`ShuffleRecord::verify`] without trusting the publisher.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::hash::BlockHash;
use crate::shuffle::DrawStrategy;
use crate::{FairShuffle, Items, ShuffleConfig, ShuffleError};

/// Outcome of checking a record against the original items
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// The recorded seed is not the CRC-32 of the recorded hash.
    SeedMismatch { recorded: u32, computed: u32 },
    /// Recomputing the shuffle gives a different order or shape.
    OrderMismatch,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleRecord<T> {
    pub hash: BlockHash,
    pub seed: u32,
    #[serde(default)]
    pub draw: DrawStrategy,
    pub items: Items<T>,
}

impl<T: Clone + PartialEq> ShuffleRecord<T> {
    /// Shuffle `fair` by `hash` and record the result.
    pub fn create(fair: &FairShuffle<T>, hash: &BlockHash) -> Self {
        Self {
            hash: *hash,
            seed: hash.seed(),
            draw: fair.config().draw,
            items: fair.shuffle_block(hash),
        }
    }

    /// Recompute the shuffle of `original` and compare with this record.
    ///
    /// The record's own draw strategy is used, whatever `original` is
    /// configured with.
    pub fn verify(&self, original: &Items<T>) -> Verdict {
        let computed = self.hash.seed();
        if computed != self.seed {
            log::warn!(
                "record for {} claims seed {:#010x}, hash reduces to {:#010x}",
                self.hash,
                self.seed,
                computed
            );
            return Verdict::SeedMismatch { recorded: self.seed, computed };
        }

        let config = ShuffleConfig { draw: self.draw };
        let recomputed = FairShuffle::with_config(original.clone(), config).shuffle_seeded(computed);
        if recomputed != self.items {
            log::warn!("record for {} does not match the recomputed order", self.hash);
            return Verdict::OrderMismatch;
        }
        Verdict::Valid
    }
}

impl<T: Serialize> ShuffleRecord<T> {
    pub fn to_json(&self) -> Result<String, ShuffleError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> ShuffleRecord<T> {
    pub fn from_json(s: &str) -> Result<Self, ShuffleError> {
        Ok(serde_json::from_str(s)?)
    }
}
