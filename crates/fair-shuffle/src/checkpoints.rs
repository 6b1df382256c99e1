//! Published regression vectors
//!
//! Bitcoin genesis and checkpoint blocks (as listed in the reference
//! client's chain parameters), each paired with the order `(1, ..., 10)`
//! must shuffle into. Any implementation that disagrees with one of these
//! is not interoperable.

use crate::hash::BlockHash;
use crate::{FairShuffle, Items, ShuffleError};

/// Items every checkpoint shuffles.
pub const CHECKPOINT_INPUT: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// A block hash and the permutation of [`CHECKPOINT_INPUT`] it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: &'static str,
    pub expected: [u8; 10],
}

pub const CHECKPOINTS: [Checkpoint; 14] = [
    Checkpoint {
        height: 0,
        hash: "0000000000000000000000000000000000000000000000000000000000000000",
        expected: [2, 4, 7, 9, 10, 8, 3, 6, 1, 5],
    },
    Checkpoint {
        height: 11111,
        hash: "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d",
        expected: [5, 4, 6, 3, 10, 7, 8, 1, 9, 2],
    },
    Checkpoint {
        height: 33333,
        hash: "000000002dd5588a74784eaa7ab0507a18ad16a236e7b1ce69f00d7ddfb5d0a6",
        expected: [7, 9, 5, 8, 4, 3, 6, 2, 10, 1],
    },
    Checkpoint {
        height: 74000,
        hash: "0000000000573993a3c9e41ce34471c079dcf5f52a0e824a81e7f953b8661a20",
        expected: [10, 7, 1, 2, 9, 8, 4, 6, 3, 5],
    },
    Checkpoint {
        height: 105000,
        hash: "00000000000291ce28027faea320c8d2b054b2e0fe44a773f3eefb151d6bdc97",
        expected: [9, 3, 4, 6, 7, 1, 10, 8, 5, 2],
    },
    Checkpoint {
        height: 134444,
        hash: "00000000000005b12ffd4cd315cd34ffd4a594f430ac814c91184a0d42d2b0fe",
        expected: [5, 4, 3, 8, 9, 1, 6, 2, 7, 10],
    },
    Checkpoint {
        height: 168000,
        hash: "000000000000099e61ea72015e79632f216fe6cb33d7899acb35b75c8303b763",
        expected: [9, 3, 5, 6, 1, 10, 8, 7, 2, 4],
    },
    Checkpoint {
        height: 193000,
        hash: "000000000000059f452a5f7340de6682a977387c17010ff6e6c3bd83ca8b1317",
        expected: [7, 3, 8, 9, 5, 4, 2, 1, 10, 6],
    },
    Checkpoint {
        height: 210000,
        hash: "000000000000048b95347e83192f69cf0366076336c639f9b7228e9ba171342e",
        expected: [4, 8, 3, 1, 7, 9, 2, 6, 5, 10],
    },
    Checkpoint {
        height: 216116,
        hash: "00000000000001b4f4b433e81ee46494af945cf96014816a4e2370f11b23df4e",
        expected: [8, 10, 1, 7, 5, 2, 6, 4, 3, 9],
    },
    Checkpoint {
        height: 225430,
        hash: "00000000000001c108384350f74090433e7fcf79a606b8e797f065b130575932",
        expected: [8, 4, 5, 9, 3, 7, 1, 10, 6, 2],
    },
    Checkpoint {
        height: 250000,
        hash: "000000000000003887df1f29024b06fc2200b55f8af8f35453d7be294df2d214",
        expected: [6, 4, 9, 2, 8, 1, 10, 7, 3, 5],
    },
    Checkpoint {
        height: 279000,
        hash: "0000000000000001ae8c72a0b0c301f67e3afca10e819efa9041e458e9bd7e40",
        expected: [7, 5, 3, 6, 1, 9, 8, 10, 2, 4],
    },
    Checkpoint {
        height: 295000,
        hash: "00000000000000004d9b4ef50f0f9d686fd69db2e03af35a100370c64632a983",
        expected: [3, 10, 9, 1, 8, 7, 5, 4, 6, 2],
    },
];

impl Checkpoint {
    pub fn block_hash(&self) -> Result<BlockHash, ShuffleError> {
        BlockHash::from_hex(self.hash)
    }

    /// Shuffle [`CHECKPOINT_INPUT`] by this block and compare.
    pub fn verify(&self) -> Result<bool, ShuffleError> {
        let block = self.block_hash()?;
        let actual = FairShuffle::new(CHECKPOINT_INPUT).shuffle_block(&block);
        let ok = actual == Items::Tuple(self.expected.to_vec());
        if !ok {
            log::warn!(
                "checkpoint {} mismatch: expected {:?}, got {:?}",
                self.height,
                self.expected,
                actual.as_slice()
            );
        }
        Ok(ok)
    }
}

/// Look up a checkpoint by block height.
pub fn find(height: u32) -> Option<&'static Checkpoint> {
    CHECKPOINTS.iter().find(|c| c.height == height)
}

/// Verify every checkpoint; returns the heights that failed.
pub fn verify_all() -> Result<Vec<u32>, ShuffleError> {
    let mut failed = Vec::new();
    for checkpoint in &CHECKPOINTS {
        if !checkpoint.verify()? {
            failed.push(checkpoint.height);
        }
    }
    Ok(failed)
}
