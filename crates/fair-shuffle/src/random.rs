//! MT19937 pseudo-random engine
//!
//! The classic 32-bit Mersenne Twister, built from its published constants.
//! Every published shuffle depends on this reproducing the reference
//! generator bit for bit, so nothing here may be swapped for a platform RNG.

/// Number of 32-bit words of state.
pub const STATE_WORDS: usize = 624;
const SHIFT_SIZE: usize = 397;

const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

const INIT_MULTIPLIER: u32 = 1_812_433_253;
const KEY_SEED: u32 = 19_650_218;
const KEY_MULTIPLIER_1: u32 = 1_664_525;
const KEY_MULTIPLIER_2: u32 = 1_566_083_941;

/// Mersenne Twister state
///
/// One instance per shuffle call. Cloning forks the sequence; nothing is
/// shared between instances.
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; STATE_WORDS],
    index: usize,
}

impl core::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish_non_exhaustive()
    }
}

impl Mt19937 {
    /// Seed from a single word (`init_genrand`).
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; STATE_WORDS];
        state[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        // Forces a twist on the first draw.
        Self { state, index: STATE_WORDS }
    }

    /// Seed from a key array (`init_by_array`).
    ///
    /// An empty key behaves like the one-word key `[0]`.
    pub fn new_with_key(key: &[u32]) -> Self {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };
        let mut mt = Self::new(KEY_SEED);
        let s = &mut mt.state;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..STATE_WORDS.max(key.len()) {
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            s[i] = (s[i] ^ prev.wrapping_mul(KEY_MULTIPLIER_1))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_WORDS {
                s[0] = s[STATE_WORDS - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..STATE_WORDS - 1 {
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            s[i] = (s[i] ^ prev.wrapping_mul(KEY_MULTIPLIER_2)).wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_WORDS {
                s[0] = s[STATE_WORDS - 1];
                i = 1;
            }
        }
        // MSB set so the initial state is never all zero.
        s[0] = UPPER_MASK;
        mt
    }

    /// Engine used by the shuffle: key-array seeding over `[seed]`.
    ///
    /// This is the seeding the published checkpoint permutations were
    /// generated with. It is not the same stream as [`Mt19937::new`].
    pub fn for_shuffle(seed: u32) -> Self {
        Self::new_with_key(&[seed])
    }

    fn twist(&mut self) {
        log::trace!("mt19937 twist");
        let s = &mut self.state;
        for k in 0..STATE_WORDS {
            let y = (s[k] & UPPER_MASK) | (s[(k + 1) % STATE_WORDS] & LOWER_MASK);
            let mut next = s[(k + SHIFT_SIZE) % STATE_WORDS] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            s[k] = next;
        }
        self.index = 0;
    }

    /// Next tempered 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_WORDS {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform float in `[0, 1)` with 53 bits of resolution (`genrand_res53`).
    ///
    /// Consumes two words: the top 27 bits of the first and the top 26 bits
    /// of the second.
    pub fn next_f64(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// `k` random bits, `1 <= k <= 64`.
    ///
    /// Words are consumed least-significant first. Each word contributes its
    /// top bits, so the surplus high bits of the final word are dropped.
    pub fn next_bits(&mut self, k: u32) -> u64 {
        debug_assert!((1..=64).contains(&k), "next_bits: k = {} out of range", k);
        if k <= 32 {
            return (self.next_u32() >> (32 - k)) as u64;
        }
        let low = self.next_u32() as u64;
        let high = (self.next_u32() >> (64 - k)) as u64;
        low | (high << 32)
    }

    /// Uniform integer in `[0, n)` by rejection over `bit_length(n)` bits.
    ///
    /// `n == 0` returns 0 without consuming output.
    pub fn gen_below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let k = u64::BITS - n.leading_zeros();
        let mut r = self.next_bits(k);
        while r >= n {
            r = self.next_bits(k);
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs_default_seed() {
        let mut rng = Mt19937::new(5489);
        assert_eq!(rng.next_u32(), 3_499_211_612);
        assert_eq!(rng.next_u32(), 581_869_302);
        assert_eq!(rng.next_u32(), 3_890_346_734);
    }

    #[test]
    fn test_ten_thousandth_output() {
        let mut rng = Mt19937::new(5489);
        for _ in 0..9999 {
            rng.next_u32();
        }
        assert_eq!(rng.next_u32(), 4_123_659_995);
    }

    #[test]
    fn test_single_seed_matches_rand_mt() {
        for seed in [0u32, 1, 5489, 0x190A_55AD, u32::MAX] {
            let mut ours = Mt19937::new(seed);
            let mut oracle = rand_mt::Mt::new(seed);
            for _ in 0..2000 {
                assert_eq!(ours.next_u32(), oracle.next_u32(), "seed {:#x}", seed);
            }
        }
    }

    #[test]
    fn test_key_seeding_matches_rand_mt() {
        // rand_mt diverges from init_by_array for keys longer than the state
        let keys: [&[u32]; 3] = [&[0], &[0x190A_55AD], &[0x123, 0x234, 0x345, 0x456]];
        for key in keys {
            let mut ours = Mt19937::new_with_key(key);
            let mut oracle = rand_mt::Mt::new_with_key(key.iter().copied());
            for _ in 0..2000 {
                assert_eq!(ours.next_u32(), oracle.next_u32());
            }
        }
    }

    #[test]
    fn test_key_longer_than_state() {
        let key = [u32::MAX; STATE_WORDS + 76];
        let mut rng = Mt19937::new_with_key(&key);
        assert_eq!(rng.next_u32(), 2_830_013_534);
    }

    #[test]
    fn test_genesis_shuffle_stream() {
        let mut rng = Mt19937::for_shuffle(0x190A_55AD);
        assert_eq!(rng.next_u32(), 1_984_117_922);
        assert_eq!(rng.next_u32(), 1_749_314_719);
        assert_eq!(rng.next_u32(), 7_940_855);
    }

    #[test]
    fn test_empty_key_is_zero_key() {
        let mut empty = Mt19937::new_with_key(&[]);
        let mut zero = Mt19937::new_with_key(&[0]);
        assert_eq!(zero.next_u32(), 3_626_764_237);
        assert_eq!(empty.next_u32(), 3_626_764_237);
        for _ in 0..100 {
            assert_eq!(empty.next_u32(), zero.next_u32());
        }
    }

    #[test]
    fn test_next_f64_reference() {
        let mut rng = Mt19937::for_shuffle(0x190A_55AD);
        assert_eq!(rng.next_f64(), 0.46196345543335426);
    }

    #[test]
    fn test_next_f64_range() {
        let mut rng = Mt19937::new(42);
        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x), "next_f64 returned {}", x);
        }
    }

    #[test]
    fn test_next_bits_takes_top_bits() {
        let mut a = Mt19937::new(7);
        let mut b = Mt19937::new(7);
        let word = a.next_u32();
        assert_eq!(b.next_bits(5), (word >> 27) as u64);
    }

    #[test]
    fn test_next_bits_wide_is_low_word_first() {
        let mut a = Mt19937::new(7);
        let mut b = Mt19937::new(7);
        let lo = a.next_u32() as u64;
        let hi = (a.next_u32() >> 24) as u64;
        assert_eq!(b.next_bits(40), lo | (hi << 32));
    }

    #[test]
    fn test_gen_below_bounds() {
        let mut rng = Mt19937::new(42);
        for n in [1u64, 2, 3, 7, 10, 1000, 1 << 33, u64::MAX] {
            for _ in 0..200 {
                let v = rng.gen_below(n);
                assert!(v < n, "gen_below({}) returned {}", n, v);
            }
        }
        assert_eq!(rng.gen_below(0), 0);
    }

    #[test]
    fn test_clone_forks_sequence() {
        let mut a = Mt19937::new(99);
        a.next_u32();
        let mut b = a.clone();
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
