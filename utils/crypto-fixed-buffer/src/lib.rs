#![no_std]
extern crate crypto_bytes;
use crypto_bytes::{copy_memory, zero};

/// Size in bytes of the blocks handled by `FixedBuffer64`.
pub const BLOCK_LEN: usize = 64;

/// A `FixedBuffer` holds the trailing part of a message that does not yet
/// fill a whole block. `input` hands every completed block to the caller and
/// keeps the rest; the other methods give the caller direct access to the
/// unused tail of the buffer, which is how padding and length encoding are
/// written without going through `input`.
pub trait FixedBuffer {
    /// Feed bytes into the buffer, calling `func` once for every complete
    /// block. Blocks lying entirely inside `input` are passed straight through
    /// without being copied.
    fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], func: F);

    /// Forget any buffered bytes.
    fn reset(&mut self);

    /// Zero the buffer from the current position up to `idx` and move the
    /// position there. The position must not already be past `idx`.
    fn zero_until(&mut self, idx: usize);

    /// Claim the next `len` bytes of the buffer for writing.
    fn next(&mut self, len: usize) -> &mut [u8];

    /// Take the buffer once it is exactly full, leaving it empty.
    fn full_buffer(&mut self) -> &[u8];

    /// Number of bytes currently buffered.
    fn position(&self) -> usize;

    /// Number of bytes that can still be buffered before the block is full.
    fn remaining(&self) -> usize;

    /// Size of the buffer
    fn size(&self) -> usize;
}

/// A fixed size buffer of 64 bytes useful for cryptographic operations.
#[derive(Clone, Copy)]
pub struct FixedBuffer64 {
    buffer: [u8; BLOCK_LEN],
    buffer_idx: usize,
}

impl FixedBuffer64 {
    /// Create a new, empty buffer
    pub const fn new() -> FixedBuffer64 {
        FixedBuffer64 {
            buffer: [0u8; BLOCK_LEN],
            buffer_idx: 0,
        }
    }
}

impl Default for FixedBuffer64 {
    fn default() -> Self { Self::new() }
}

impl FixedBuffer for FixedBuffer64 {
    fn input<F: FnMut(&[u8])>(&mut self, mut input: &[u8], mut func: F) {
        // Top up a partially filled buffer first. If the input can't complete
        // it, everything is buffered and we're done.
        if self.buffer_idx != 0 {
            let buffer_remaining = BLOCK_LEN - self.buffer_idx;
            if input.len() < buffer_remaining {
                copy_memory(
                    input,
                    &mut self.buffer[self.buffer_idx..self.buffer_idx + input.len()]);
                self.buffer_idx += input.len();
                return;
            }
            let (head, rest) = input.split_at(buffer_remaining);
            copy_memory(head, &mut self.buffer[self.buffer_idx..]);
            self.buffer_idx = 0;
            func(&self.buffer[..]);
            input = rest;
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            func(block);
        }

        // Less than a block is left and the buffer is empty.
        let tail = blocks.remainder();
        copy_memory(tail, &mut self.buffer[..tail.len()]);
        self.buffer_idx = tail.len();
    }

    fn reset(&mut self) {
        self.buffer_idx = 0;
    }

    fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx);
        zero(&mut self.buffer[self.buffer_idx..idx]);
        self.buffer_idx = idx;
    }

    fn next(&mut self, len: usize) -> &mut [u8] {
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    fn full_buffer(&mut self) -> &[u8] {
        assert!(self.buffer_idx == BLOCK_LEN);
        self.buffer_idx = 0;
        &self.buffer[..]
    }

    fn position(&self) -> usize { self.buffer_idx }

    fn remaining(&self) -> usize { BLOCK_LEN - self.buffer_idx }

    fn size(&self) -> usize { BLOCK_LEN }
}

/// The `StandardPadding` trait adds the Merkle-Damgard message padding to a
/// `FixedBuffer`.
pub trait StandardPadding {
    /// Append the `0x80` marker and zero-fill so that exactly `rem` bytes are
    /// left in the buffer on return. If the marker leaves fewer than `rem`
    /// bytes, the current block is zero-filled and handed to `func`, and a
    /// fresh all-zero block is started.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<T: FixedBuffer> StandardPadding for T {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next(1)[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}
