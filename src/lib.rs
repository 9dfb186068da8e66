//! Generates a fixed-length uniformly random bit sequence and stores it as a string of `'0'` and
//! `'1'` characters.
//!
//! ```
//! use bitseq::{Rng, Sequence};
//!
//! let rng = Rng::with_seed(42);
//! let sequence: Sequence = rng.random();
//! assert_eq!(sequence.to_string().len(), bitseq::SEQUENCE_LEN);
//! ```

mod error;
mod rand_support;
mod rng;
mod sequence;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use rng::{Generator, Random, Rng};
pub use sequence::{Bit, Sequence};
pub use writer::{read_sequence, write_sequence, SequenceFile};

/// The number of bits in every generated sequence.
pub const SEQUENCE_LEN: usize = 128;

/// Where the binary writes its sequence, relative to the working directory.
pub const OUTPUT_PATH: &str = "sequence(cpp).txt";
