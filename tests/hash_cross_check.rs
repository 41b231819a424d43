//! Cross-checks the hand-rolled BLAKE2s in `jq255::hash` against the
//! `blake2` crate's implementation, so a bug in the from-scratch
//! compression function doesn't silently propagate into every
//! signature/ECDH test that relies on it.
use blake2::{Blake2s256, Digest};
use jq255::hash::blake2s;

fn reference(input: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2s256::new();
    hasher.update(input);
    hasher.finalize().into()
}

#[test]
fn matches_reference_for_varied_inputs() {
    let cases: &[&[u8]] = &[
        b"",
        b"a",
        b"abc",
        b"The quick brown fox jumps over the lazy dog",
        &[0u8; 64],
        &[0xFFu8; 65],
        &[0x5A; 1000],
    ];
    for input in cases {
        assert_eq!(blake2s(input), reference(input), "mismatch for input of length {}", input.len());
    }
}

#[test]
fn matches_reference_across_block_boundary_lengths() {
    for len in [0usize, 1, 63, 64, 65, 127, 128, 129, 256] {
        let data = vec![0x33u8; len];
        assert_eq!(blake2s(&data), reference(&data), "mismatch for length {len}");
    }
}
