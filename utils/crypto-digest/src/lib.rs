#![cfg_attr(not(feature = "std"), no_std)]
extern crate generic_array;
use generic_array::{GenericArray, ArrayLength};
use generic_array::typenum::Unsigned;

/// The Digest trait specifies an interface common to digest functions
pub trait Digest: Default {
    /// Output size in bytes.
    type N: ArrayLength<u8>;

    /// Create new digest instance
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly
    /// for use with streaming messages.
    fn input(&mut self, input: &[u8]);

    /// Retrieve the digest result. This method consumes digest instance
    fn result(self) -> GenericArray<u8, Self::N>;

    /// Get the block size in bytes.
    fn block_size(&self) -> usize;

    /// Discard any absorbed input and start over from the initial state.
    fn reset(&mut self) {
        *self = Default::default();
    }

    /// Convenience function to hash a whole message in one call.
    fn digest(input: &[u8]) -> GenericArray<u8, Self::N> {
        let mut d = Self::new();
        d.input(input);
        d.result()
    }

    /// Retrieve the digest result as a lowercase hex string.
    #[cfg(feature = "std")]
    fn result_str(self) -> String
    where
        Self: Sized,
    {
        hex::encode(self.result())
    }

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize { Self::N::to_usize() }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize { Self::N::to_usize() * 8 }
}
