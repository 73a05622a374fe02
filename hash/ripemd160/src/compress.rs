use crypto_bytes::read_u32v_le;

use crate::consts::{
    BLOCK_LEN, DIGEST_BUF_LEN, K_LEFT, K_RIGHT, R_LEFT, R_RIGHT, S_LEFT, S_RIGHT, WORK_BUF_LEN,
};

type BoolFn = fn(u32, u32, u32) -> u32;

fn f1(x: u32, y: u32, z: u32) -> u32 { x ^ y ^ z }

fn f2(x: u32, y: u32, z: u32) -> u32 { (x & y) | (!x & z) }

fn f3(x: u32, y: u32, z: u32) -> u32 { (x | !y) ^ z }

fn f4(x: u32, y: u32, z: u32) -> u32 { (x & z) | (y & !z) }

fn f5(x: u32, y: u32, z: u32) -> u32 { x ^ (y | !z) }

// The right line runs the same functions in reverse order.
const F_LEFT: [BoolFn; 5] = [f1, f2, f3, f4, f5];
const F_RIGHT: [BoolFn; 5] = [f5, f4, f3, f2, f1];

/// Run one line (80 steps) over the message words, starting from `h`.
#[inline(always)]
fn line(
    h: &[u32; DIGEST_BUF_LEN],
    x: &[u32; WORK_BUF_LEN],
    funcs: &[BoolFn; 5],
    k: &[u32; 5],
    r: &[usize; 80],
    s: &[u32; 80],
) -> [u32; DIGEST_BUF_LEN] {
    let [mut a, mut b, mut c, mut d, mut e] = *h;

    for j in 0..80 {
        let round = j / 16;
        let t = a
            .wrapping_add(funcs[round](b, c, d))
            .wrapping_add(x[r[j]])
            .wrapping_add(k[round])
            .rotate_left(s[j])
            .wrapping_add(e);
        a = e;
        e = d;
        d = c.rotate_left(10);
        c = b;
        b = t;
    }

    [a, b, c, d, e]
}

/// Compress one 64-byte block into the chaining value `h`.
pub fn process_msg_block(data: &[u8], h: &mut [u32; DIGEST_BUF_LEN]) {
    debug_assert_eq!(data.len(), BLOCK_LEN);
    let mut w = [0u32; WORK_BUF_LEN];
    read_u32v_le(&mut w, data);

    let [al, bl, cl, dl, el] = line(h, &w, &F_LEFT, &K_LEFT, &R_LEFT, &S_LEFT);
    let [ar, br, cr, dr, er] = line(h, &w, &F_RIGHT, &K_RIGHT, &R_RIGHT, &S_RIGHT);

    // Combine results
    let t = h[1].wrapping_add(cl).wrapping_add(dr);
    h[1] = h[2].wrapping_add(dl).wrapping_add(er);
    h[2] = h[3].wrapping_add(el).wrapping_add(ar);
    h[3] = h[4].wrapping_add(al).wrapping_add(br);
    h[4] = h[0].wrapping_add(bl).wrapping_add(cr);
    h[0] = t;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::H0;

    #[test]
    fn boolean_functions() {
        let (x, y, z) = (0xf0f0_f0f0, 0xcccc_cccc, 0xaaaa_aaaa);
        assert_eq!(f1(x, y, z), x ^ y ^ z);
        // f2 selects y where x is set, z elsewhere
        assert_eq!(f2(x, y, z), 0xcaca_caca);
        // f4 selects x where z is set, y elsewhere
        assert_eq!(f4(x, y, z), 0xe4e4_e4e4);
        assert_eq!(f3(0, 0, 0), 0xffff_ffff);
        assert_eq!(f5(0, 0, 0xffff_ffff), 0);
        assert_eq!(f5(0, 0xffff_ffff, 0xffff_ffff), 0xffff_ffff);
    }

    #[test]
    fn selection_tables_are_permutations() {
        for table in [&R_LEFT, &R_RIGHT] {
            for round in table.chunks(16) {
                let mut seen = [false; 16];
                for &i in round {
                    assert!(!seen[i]);
                    seen[i] = true;
                }
            }
        }
    }

    #[test]
    fn compression_is_pure() {
        let block = [0x5au8; BLOCK_LEN];
        let mut h1 = H0;
        let mut h2 = H0;
        process_msg_block(&block, &mut h1);
        process_msg_block(&block, &mut h2);
        assert_eq!(h1, h2);
        assert_ne!(h1, H0);
    }

    #[test]
    fn padded_empty_message_block() {
        // The single block produced by padding an empty message.
        let mut block = [0u8; BLOCK_LEN];
        block[0] = 0x80;
        let mut h = H0;
        process_msg_block(&block, &mut h);
        assert_eq!(h, [0xa585119c, 0x54fce9c5, 0x97082861, 0x48f5e87e, 0x318d25b2]);
    }
}
