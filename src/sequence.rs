use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    rng::{Generator, Random, Rng},
    SEQUENCE_LEN,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// One element of a [`Sequence`].
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// The ASCII character the bit is written as, `b'0'` or `b'1'`.
    pub fn to_ascii(self) -> u8 {
        match self {
            Bit::Zero => b'0',
            Bit::One => b'1',
        }
    }

    /// Parses `b'0'` or `b'1'`. Any other byte yields `None`.
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Bit::Zero),
            b'1' => Some(Bit::One),
            _ => None,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl<G> Random<G> for Bit
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        Bit::from(bool::random(generator))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// A fixed-length run of independent, uniformly distributed bits.
///
/// A sequence is built once and never mutated; it is written out as its bits' ASCII characters
/// with no separators.
pub struct Sequence([Bit; SEQUENCE_LEN]);

impl Sequence {
    /// Generates a sequence from a freshly seeded [`Rng`].
    ///
    /// # Example
    /// ```
    /// # use bitseq::Sequence;
    /// let sequence = Sequence::generate();
    /// assert_eq!(sequence.len(), 128);
    /// ```
    pub fn generate() -> Self {
        Rng::new().random()
    }

    pub fn from_bits(bits: [Bit; SEQUENCE_LEN]) -> Self {
        Self(bits)
    }

    pub fn as_slice(&self) -> &[Bit] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().copied()
    }

    /// Always [`SEQUENCE_LEN`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the file representation: one `b'0'` or `b'1'` per bit, in order.
    pub fn to_ascii(&self) -> [u8; SEQUENCE_LEN] {
        core::array::from_fn(|index| self.0[index].to_ascii())
    }
}

impl<G> Random<G> for Sequence
where
    G: Generator<u64>,
{
    fn random(generator: &G) -> Self {
        Sequence(<[Bit; SEQUENCE_LEN]>::random(generator))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = Error;

    /// Parses exactly [`SEQUENCE_LEN`] characters, each `'0'` or `'1'`, with nothing around them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != SEQUENCE_LEN {
            return Err(Error::Parse(format!(
                "expected {SEQUENCE_LEN} characters, found {}",
                bytes.len()
            )));
        }
        let mut bits = [Bit::Zero; SEQUENCE_LEN];
        for (index, (slot, &byte)) in bits.iter_mut().zip(bytes).enumerate() {
            *slot = Bit::from_ascii(byte).ok_or_else(|| {
                Error::Parse(format!("invalid byte 0x{byte:02X} at offset {index}"))
            })?;
        }
        Ok(Sequence(bits))
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
