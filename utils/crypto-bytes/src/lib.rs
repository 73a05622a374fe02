//! Byte and word conversion helpers shared by the digest crates.
#![no_std]

/// Write a u32 into a vector, which must be 4 bytes long. The value is written
/// in little-endian format.
pub fn write_u32_le(dst: &mut [u8], input: u32) {
    assert!(dst.len() == 4);
    dst.copy_from_slice(&input.to_le_bytes());
}

/// Read a vector of bytes into a vector of u32s. The values are read in
/// little-endian format.
pub fn read_u32v_le(dst: &mut [u32], input: &[u8]) {
    assert!(dst.len() * 4 == input.len());
    for (word, chunk) in dst.iter_mut().zip(input.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Copy bytes from src to dest. The destination must be exactly as long as
/// the source.
pub fn copy_memory(src: &[u8], dst: &mut [u8]) {
    dst.copy_from_slice(src);
}

/// Zero all bytes in dst
#[inline]
pub fn zero(dst: &mut [u8]) {
    for b in dst.iter_mut() {
        *b = 0;
    }
}

/// Add a number of bytes to a running byte count. The count wraps around
/// at 2^64 bytes.
#[inline]
pub fn add_bytes(count: u64, bytes: u64) -> u64 {
    count.wrapping_add(bytes)
}

/// Convert a byte count into the message length in bits, modulo 2^64, split
/// into its low and high 32-bit words.
pub fn bytes_to_bits_le(count: u64) -> (u32, u32) {
    let bits = count.wrapping_shl(3);
    (bits as u32, (bits >> 32) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_words_are_little_endian() {
        let mut words = [0u32; 2];
        read_u32v_le(&mut words, &[0x01, 0x02, 0x03, 0x04, 0xff, 0x00, 0x00, 0x80]);
        assert_eq!(words, [0x04030201, 0x800000ff]);
    }

    #[test]
    fn write_word_is_little_endian() {
        let mut out = [0u8; 4];
        write_u32_le(&mut out, 0xc3d2e1f0);
        assert_eq!(out, [0xf0, 0xe1, 0xd2, 0xc3]);
    }

    #[test]
    fn zero_clears_slice() {
        let mut buf = [0xaau8; 7];
        zero(&mut buf[2..5]);
        assert_eq!(buf, [0xaa, 0xaa, 0, 0, 0, 0xaa, 0xaa]);
    }

    #[test]
    fn bit_length_splits_into_words() {
        assert_eq!(bytes_to_bits_le(0), (0, 0));
        assert_eq!(bytes_to_bits_le(3), (24, 0));
        // 2^29 bytes is exactly 2^32 bits
        assert_eq!(bytes_to_bits_le(1 << 29), (0, 1));
        assert_eq!(bytes_to_bits_le((1 << 29) + 1), (8, 1));
    }

    #[test]
    fn byte_count_wraps() {
        assert_eq!(add_bytes(u64::MAX, 2), 1);
        assert_eq!(bytes_to_bits_le(u64::MAX), (0xffff_fff8, 0xffff_ffff));
    }
}
