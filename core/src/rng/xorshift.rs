//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for fixture generation.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Reproducing a fixture exactly from its seed
//! - Asserting generated values in tests
//! - Resuming a stream from a snapshotted state

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Odd constant from the splitmix64 finalizer, also used to spread entropy
/// streams apart.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Process-wide counter so sources created in the same instant still get
/// distinct streams.
static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Deterministic random number source using xorshift64*
///
/// Exactly one `RandomSource` backs each generator; every facet draws from
/// it through a mutable borrow, so the sequence of outputs is a pure
/// function of the starting state and the sequence of draw requests.
///
/// # Example
/// ```
/// use fakegen_core_rs::RandomSource;
///
/// let mut rng = RandomSource::from_seed(12345);
/// let value = rng.next_u64();
/// let die = rng.int_between(1, 6); // [1, 6] inclusive
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSource {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RandomSource {
    /// Create a deterministic source from a 64-bit seed
    ///
    /// The state is the seed's two's-complement bit pattern. A zero seed is
    /// replaced with 1 (xorshift requires nonzero state).
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::RandomSource;
    ///
    /// let rng = RandomSource::from_seed(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn from_seed(seed: i64) -> Self {
        let state = if seed == 0 { 1 } else { seed as u64 };
        Self { state }
    }

    /// Create a nondeterministic source from process entropy
    ///
    /// Mixes wall-clock nanoseconds, the process id and a process-wide
    /// counter through a splitmix64 finalizer. Two sources created in the
    /// same instant still receive distinct streams.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(GOLDEN_GAMMA);
        let pid = u64::from(std::process::id());
        let counter = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mixed = splitmix64(nanos ^ pid.rotate_left(32) ^ counter.wrapping_mul(GOLDEN_GAMMA));
        let state = if mixed == 0 { 1 } else { mixed };
        Self { state }
    }

    /// Resume a source from a snapshotted state word
    ///
    /// The new source continues the exact stream the original would have
    /// produced from the point `state()` was captured.
    pub fn from_state(state: u64) -> Self {
        let state = if state == 0 { 1 } else { state };
        Self { state }
    }

    /// Generate the next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Generate a random value in the inclusive range [low, high]
    ///
    /// Uses modulo reduction; the bias is negligible for fixture data.
    /// Exactly one draw is consumed, even when `low == high`.
    ///
    /// # Panics
    /// Panics if `low > high`.
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::RandomSource;
    ///
    /// let mut rng = RandomSource::from_seed(12345);
    /// let byte = rng.int_between(0, 255);
    /// assert!((0..=255).contains(&byte));
    /// ```
    pub fn int_between(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "low must not exceed high");

        // Span as modular u64 arithmetic; a span of 0 means the full i64
        // range was requested.
        let span = (high as u64).wrapping_sub(low as u64).wrapping_add(1);
        if span == 0 {
            return self.next_u64() as i64;
        }
        low.wrapping_add((self.next_u64() % span) as i64)
    }

    /// Generate a random f64 in the range [0.0, 1.0)
    ///
    /// Uses the high 53 bits of one draw, matching f64 mantissa resolution.
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::RandomSource;
    ///
    /// let mut rng = RandomSource::from_seed(12345);
    /// let p = rng.next_f64();
    /// assert!((0.0..1.0).contains(&p));
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a uniform random boolean from the top bit of one draw
    pub fn next_bool(&mut self) -> bool {
        (self.next_u64() >> 63) != 0
    }

    /// Generate a uniform random byte from the top byte of one draw
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Fill a buffer with independent byte draws
    ///
    /// Consumes exactly one draw per byte. Determinism contracts are
    /// specified in draws, so bytes are not packed eight to a draw.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for slot in buf {
            *slot = self.next_byte();
        }
    }

    /// Get the current state word (for checkpointing/resume)
    ///
    /// # Example
    /// ```
    /// use fakegen_core_rs::RandomSource;
    ///
    /// let mut rng = RandomSource::from_seed(12345);
    /// rng.next_u64();
    /// let state = rng.state();
    ///
    /// // Later, a source resumed from this state continues the stream
    /// let resumed = RandomSource::from_state(state);
    /// assert_eq!(resumed.state(), state);
    /// ```
    pub fn state(&self) -> u64 {
        self.state
    }
}

/// splitmix64 finalizer: spreads weak entropy across all 64 bits.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
