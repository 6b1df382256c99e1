//! Seeded Fisher-Yates shuffle
//!
//! Walks the slice from the end, swapping each position with one drawn
//! uniformly from `[0, i]`. How that index is drawn is selected by
//! [`DrawStrategy`]; the default reproduces every published checkpoint.

use serde::{Deserialize, Serialize};

use crate::random::Mt19937;

/// How an index in `[0, n)` is drawn from the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawStrategy {
    /// `floor(next_f64() * n)`, two words per draw. Matches the published
    /// checkpoints.
    #[default]
    Legacy,
    /// Rejection sampling over `bit_length(n)` bits. No modulo or float
    /// bias, but produces a different permutation than `Legacy`.
    Rejection,
}

/// Shuffle configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    #[serde(default)]
    pub draw: DrawStrategy,
}

impl ShuffleConfig {
    /// Compatible with every published checkpoint.
    pub fn legacy() -> Self {
        Self { draw: DrawStrategy::Legacy }
    }

    /// Bias-free bounded draws.
    pub fn rejection() -> Self {
        Self { draw: DrawStrategy::Rejection }
    }
}

impl DrawStrategy {
    /// Draw an index in `[0, n)`, `n >= 1`.
    pub fn draw(self, rng: &mut Mt19937, n: usize) -> usize {
        match self {
            DrawStrategy::Legacy => {
                let j = (rng.next_f64() * n as f64) as usize;
                // x * n can round up to n for huge n
                j.min(n - 1)
            }
            DrawStrategy::Rejection => rng.gen_below(n as u64) as usize,
        }
    }
}

/// Fisher-Yates over `items`, consuming draws from `rng`.
///
/// Slices shorter than two elements are left alone without touching the
/// engine.
pub fn shuffle_slice<T>(items: &mut [T], rng: &mut Mt19937, draw: DrawStrategy) {
    if items.len() < 2 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = draw.draw(rng, i + 1);
        items.swap(i, j);
    }
}

/// Shuffle `items` with a fresh engine seeded from `seed`.
///
/// Empty and single-element inputs return immediately and never build an
/// engine.
pub fn shuffle_with_seed<T>(mut items: Vec<T>, seed: u32, draw: DrawStrategy) -> Vec<T> {
    if items.len() < 2 {
        return items;
    }
    log::debug!("shuffling {} items with seed {:#010x} ({:?})", items.len(), seed, draw);
    let mut rng = Mt19937::for_shuffle(seed);
    shuffle_slice(&mut items, &mut rng, draw);
    items
}
