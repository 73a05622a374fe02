use crypto_digest::Digest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Feed 1,000,000 'a's into the digest with input sizes drawn at random from
/// `0..=2 * blocksize` and check that the result is correct.
pub fn one_million_random<D: Digest>(blocksize: usize, expected: &[u8]) {
    let total_size = 1_000_000;
    let buffer = vec![b'a'; blocksize * 2];
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut digest = D::new();
    let mut count = 0;

    while count < total_size {
        let next = rng.gen_range(0..=2 * blocksize);
        let size = next.min(total_size - count);
        digest.input(&buffer[..size]);
        count += size;
    }

    assert_eq!(digest.result()[..], expected[..]);
}

/// Split `msg` at random points, feed the pieces in order and compare with
/// the one-shot digest.
pub fn random_splits<D: Digest>(msg: &[u8], rounds: usize, seed: u64) {
    let expected = D::digest(msg);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..rounds {
        let mut digest = D::new();
        let mut rest = msg;
        while !rest.is_empty() {
            let take = rng.gen_range(0..=rest.len().min(150));
            let (head, tail) = rest.split_at(take);
            digest.input(head);
            rest = tail;
        }
        assert_eq!(digest.result(), expected);
    }
}
