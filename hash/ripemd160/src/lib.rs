//! An implementation of the RIPEMD-160 cryptographic hash.
//!
//! First create a `Ripemd160` object using the `Ripemd160` constructor,
//! then feed it input using the `input` method, which may be called any
//! number of times. After the entire input has been fed to the hash, call
//! `result` (or `result_str` for lowercase hex). Both consume the hasher, so
//! a finished hasher cannot be fed again; call `reset` or create a new one
//! to hash another message.
//!
//! ```
//! use ripemd160::{Digest, Ripemd160};
//!
//! let mut hasher = Ripemd160::new();
//! hasher.input(b"message ");
//! hasher.input(b"digest");
//! assert_eq!(hasher.result_str(), "5d0689ef49d2fae572b881b123a85ffa21595f36");
//! ```
//!
//! For a message already in memory, `hash` does the same in one call. With
//! the `std` feature (on by default) there is also `hash_file`, which
//! streams a file through the hasher, and `self_test`, which checks the
//! published test vectors.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate crypto_bytes;
extern crate crypto_digest;
extern crate crypto_fixed_buffer;
extern crate generic_array;
#[cfg(test)]
#[macro_use]
extern crate crypto_tests;

use crypto_bytes::{add_bytes, bytes_to_bits_le, write_u32_le};
use crypto_fixed_buffer::{FixedBuffer, FixedBuffer64, StandardPadding};
use generic_array::typenum::U20;
use generic_array::GenericArray;

pub use crypto_digest::Digest;

mod compress;
mod consts;
#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod file;

use compress::process_msg_block;
use consts::{BLOCK_LEN, DIGEST_BUF_LEN, H0};

#[cfg(feature = "std")]
pub use error::{Error, Result};
#[cfg(feature = "std")]
pub use file::hash_file;
#[cfg(feature = "std")]
pub use self_test::self_test;

/// Size of a RIPEMD-160 digest in bytes.
pub const OUTPUT_LEN: usize = 20;

/// A finished RIPEMD-160 digest.
pub type Output = GenericArray<u8, U20>;

/// Structure representing the state of a Ripemd160 computation
#[derive(Clone, Copy)]
pub struct Ripemd160 {
    h: [u32; DIGEST_BUF_LEN],
    /// Bytes absorbed so far, modulo 2^64.
    length: u64,
    buffer: FixedBuffer64,
}

impl Ripemd160 {
    /// Construct a `Ripemd160` object
    pub const fn new() -> Ripemd160 {
        Ripemd160 {
            h: H0,
            length: 0,
            buffer: FixedBuffer64::new(),
        }
    }
}

impl Default for Ripemd160 {
    fn default() -> Self { Self::new() }
}

impl Digest for Ripemd160 {
    type N = U20;

    /// Adds the input `msg` to the hash. This method can be called repeatedly
    /// for use with streaming messages.
    fn input(&mut self, msg: &[u8]) {
        self.length = add_bytes(self.length, msg.len() as u64);
        let st_h = &mut self.h;
        self.buffer.input(msg, |d: &[u8]| {
            process_msg_block(d, st_h);
        });
    }

    /// Pads the message, appends its bit length and returns the digest.
    fn result(mut self) -> Output {
        let (low, high) = bytes_to_bits_le(self.length);

        let st_h = &mut self.h;
        self.buffer.standard_padding(8, |d: &[u8]| {
            process_msg_block(d, st_h)
        });

        // The length goes straight into the last 8 bytes of the block; it is
        // not message data and must not be counted.
        write_u32_le(self.buffer.next(4), low);
        write_u32_le(self.buffer.next(4), high);
        process_msg_block(self.buffer.full_buffer(), st_h);

        let mut out = Output::default();
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            write_u32_le(chunk, *word);
        }
        out
    }

    fn reset(&mut self) {
        self.h = H0;
        self.length = 0;
        self.buffer.reset();
    }

    /// Returns the block size the hash operates on in bytes
    fn block_size(&self) -> usize { BLOCK_LEN }
}

#[cfg(feature = "std")]
impl std::io::Write for Ripemd160 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Compute the RIPEMD-160 digest of `data` in one call.
pub fn hash(data: &[u8]) -> Output {
    Ripemd160::digest(data)
}
