use std::cell::Cell;

use rand::{RngCore, SeedableRng};

use crate::{Bit, Rng, Sequence};

impl RngCore for &Rng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let seed = u64::from_ne_bytes(seed);
        let state = Cell::new(seed);
        Rng { state }
    }
}

impl Sequence {
    /// Draws a sequence from any `rand` generator, taking the top bit of one `u64` per element.
    ///
    /// # Example
    /// ```
    /// # use bitseq::Sequence;
    /// use rand::rngs::OsRng;
    ///
    /// let sequence = Sequence::from_rng(&mut OsRng);
    /// assert_eq!(sequence.len(), 128);
    /// ```
    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: RngCore + ?Sized,
    {
        Sequence::from_bits(core::array::from_fn(|_| {
            Bit::from(rng.next_u64() >> 63 == 1)
        }))
    }
}
