use std::cell::Cell;

use log::debug;
use rand::{rngs::OsRng, RngCore};

/// The step of the Weyl sequence that drives the generator. It is odd, hence coprime to 2^64,
/// and `INCREMENT / 2^64` is close to `phi - 1`, so the state walks all 2^64 values before
/// repeating.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// Multipliers for the output hash, also coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// A single-threaded random number generator that hands out values through a shared reference.
///
/// Each output is the `wyhash` of the next element of a Weyl sequence, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct Rng {
    /// The current position in the Weyl sequence.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Initializes a new RNG seeded from the operating system's entropy source, so separate runs
    /// of the program produce different output.
    ///
    /// # Example
    /// ```
    /// # use bitseq::Rng;
    /// let rng = Rng::new();
    /// let x: u64 = rng.random();
    /// println!("{x}");
    /// ```
    pub fn new() -> Self {
        let seed = OsRng.next_u64();
        debug!("seeded generator from OS entropy");
        Self::with_seed(seed)
    }

    /// Returns an RNG starting from `seed`. The same seed always yields the same values.
    ///
    /// # Example
    /// ```
    /// # use bitseq::Rng;
    /// let a = Rng::with_seed(7);
    /// let b = Rng::with_seed(7);
    /// assert_eq!(a.random::<u64>(), b.random::<u64>());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Returns a random value of type `T`.
    ///
    /// # Example
    /// ```
    /// # use bitseq::{Bit, Rng};
    /// let rng = Rng::new();
    /// let bit: Bit = rng.random();
    /// println!("{bit}");
    /// ```
    pub fn random<T>(&self) -> T
    where
        T: Random<Self>,
    {
        T::random(self)
    }

    /// Restarts the RNG from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Fills the slice `data` with random bytes
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        let mut chunks = data.chunks_exact_mut(CHUNK_SIZE);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.u64().to_ne_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.u64().to_ne_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub(crate) fn u64(&self) -> u64 {
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));
        wyhash(old_state)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

/// A generator of values of type `T`.
pub trait Generator<T> {
    /// Generates a value of type `T`.
    fn generate(&self) -> T;
}

impl Default for Rng {
    /// Returns a new entropy-seeded `Rng`.
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<u64> for Rng {
    fn generate(&self) -> u64 {
        self.u64()
    }
}

/// Types that can be drawn from a generator `G`.
pub trait Random<G> {
    fn random(generator: &G) -> Self;
}

impl<G> Random<G> for u64
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        generator.generate()
    }
}

impl<G> Random<G> for bool
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        generator.generate() >> 63 == 1
    }
}

impl<G, T, const N: usize> Random<G> for [T; N]
where
    T: Random<G> + Sized,
{
    fn random(generator: &G) -> Self {
        core::array::from_fn(|_| T::random(generator))
    }
}
