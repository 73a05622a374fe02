//! Test helpers shared by the digest crates.
extern crate crypto_digest;
extern crate rand;

pub mod hash;
pub mod random;
