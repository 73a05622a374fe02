use proptest::collection::vec;
use proptest::prelude::*;
use ripemd160::{hash, Digest, Ripemd160, OUTPUT_LEN};

/// Split `msg` at the given cut points (taken modulo the message length),
/// keeping empty pieces.
fn split<'a>(msg: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (msg.len() + 1)).collect();
    points.sort_unstable();
    let mut pieces = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for p in points {
        pieces.push(&msg[start..p]);
        start = p;
    }
    pieces.push(&msg[start..]);
    pieces
}

proptest! {
    #[test]
    fn chunking_does_not_change_digest(
        msg in vec(any::<u8>(), 0..600),
        cuts in vec(any::<usize>(), 0..20),
    ) {
        let mut sh = Ripemd160::new();
        for piece in split(&msg, &cuts) {
            sh.input(piece);
        }
        prop_assert_eq!(sh.result(), hash(&msg));
    }

    #[test]
    fn hashing_is_deterministic(msg in vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(hash(&msg), hash(&msg));
    }

    #[test]
    fn digest_length_is_fixed(msg in vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(hash(&msg).len(), OUTPUT_LEN);
    }

    #[test]
    fn common_prefix_can_be_forked(
        prefix in vec(any::<u8>(), 0..200),
        a in vec(any::<u8>(), 0..100),
        b in vec(any::<u8>(), 0..100),
    ) {
        let mut base = Ripemd160::new();
        base.input(&prefix);
        let mut left = base;
        let mut right = base;
        left.input(&a);
        right.input(&b);
        prop_assert_eq!(left.result(), hash(&[&prefix[..], &a[..]].concat()));
        prop_assert_eq!(right.result(), hash(&[&prefix[..], &b[..]].concat()));
    }
}
