//! Hashing used by the signature and key-exchange schemes: a streaming
//! `Hasher` trait and a pure-Rust BLAKE2s implementation (RFC 7693),
//! following the same shape as the teacher's SHA-256 module (a
//! block-compression function plus a Merkle–Damgård-style driver), but
//! exposed as a streaming object rather than a one-shot function since
//! signing/verification hash several discontiguous byte strings (domain
//! tag, public key, message) into a single digest.
//!
//! `blake2` is a dev-dependency only, used by `tests/` to cross-check
//! this implementation against a known-good one; nothing here depends
//! on it at runtime.

/// A streaming hash function as used by the signature and ECDH schemes:
/// initialize (optionally keyed, for domain separation), feed bytes in
/// any number of calls, then finalize once into a fixed-size digest.
pub trait Hasher: Sized {
    /// Output length in bytes.
    const OUTPUT_LEN: usize;

    /// Unkeyed initialization.
    fn init() -> Self;

    /// Keyed initialization (BLAKE2's native keying, used here for
    /// domain separation rather than MAC authentication).
    fn init_key(key: &[u8]) -> Self;

    fn update(&mut self, data: &[u8]);

    fn finalize(self) -> [u8; 32];
}

const IV: [u32; 8] = [
    0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A, 0x510E_527F, 0x9B05_688C, 0x1F83_D9AB,
    0x5BE0_CD19,
];

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

#[inline(always)]
fn g(v: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// Compresses a single 64-byte message block into `h`.
///
/// # Parameters
/// - `h`: the running chain value, updated in place
/// - `block`: the 64-byte message block, little-endian 32-bit words
/// - `t`: total bytes hashed so far, including this block
/// - `last`: whether this is the final block
fn compress(h: &mut [u32; 8], block: &[u8; 64], t: u64, last: bool) {
    let mut m = [0u32; 16];
    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u32; 16];
    v[0..8].copy_from_slice(h);
    v[8..16].copy_from_slice(&IV);
    v[12] ^= t as u32;
    v[13] ^= (t >> 32) as u32;
    if last {
        v[14] = !v[14];
    }

    for round in 0..10 {
        let s = &SIGMA[round];
        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);
        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

/// Streaming BLAKE2s-256, used unkeyed for general hashing and keyed
/// only to fold a one-byte domain-separation tag into the IV (§6).
pub struct Blake2s {
    h: [u32; 8],
    t: u64,
    buf: [u8; 64],
    buf_len: usize,
}

impl Blake2s {
    fn new_with_param(key_len: usize) -> Self {
        let mut h = IV;
        // parameter block: digest length 32, key length, fanout=1, depth=1,
        // every other field zero (sequential, unsalted).
        h[0] ^= 0x0101_0000 ^ ((key_len as u32) << 8) ^ 32;
        Self { h, t: 0, buf: [0u8; 64], buf_len: 0 }
    }

    fn absorb_block(&mut self, block: &[u8; 64]) {
        self.t += 64;
        compress(&mut self.h, block, self.t, false);
    }
}

impl Hasher for Blake2s {
    const OUTPUT_LEN: usize = 32;

    fn init() -> Self {
        Self::new_with_param(0)
    }

    fn init_key(key: &[u8]) -> Self {
        let mut st = Self::new_with_param(key.len());
        if !key.is_empty() {
            let mut block = [0u8; 64];
            block[..key.len()].copy_from_slice(key);
            // the key block counts toward `t` only once consumed below,
            // via the normal `update` buffering path.
            st.update(&block);
        }
        st
    }

    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.buf_len == 64 {
                let block = self.buf;
                self.absorb_block(&block);
                self.buf_len = 0;
            }
            let take = (64 - self.buf_len).min(data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];
        }
    }

    fn finalize(mut self) -> [u8; 32] {
        for b in self.buf[self.buf_len..].iter_mut() {
            *b = 0;
        }
        self.t += self.buf_len as u64;
        let block = self.buf;
        compress(&mut self.h, &block, self.t, true);
        let mut out = [0u8; 32];
        for i in 0..8 {
            out[i * 4..i * 4 + 4].copy_from_slice(&self.h[i].to_le_bytes());
        }
        out
    }
}

/// One-shot convenience wrapper, mirroring the teacher's `sha256` free
/// function.
pub fn blake2s(input: &[u8]) -> [u8; 32] {
    let mut h = Blake2s::init();
    h.update(input);
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_matches_known_vector() {
        // RFC 7693 test vector for BLAKE2s-256 of the empty string.
        let expect = [
            0x69, 0x21, 0x7a, 0x30, 0x79, 0x90, 0x80, 0x94, 0xe1, 0x11, 0x21, 0xd0, 0x42, 0x35,
            0x4a, 0x7c, 0x1f, 0x55, 0xb6, 0x48, 0x2c, 0xa1, 0xa5, 0x1e, 0x1b, 0x25, 0x0d, 0xfd,
            0x1e, 0xd0, 0xee, 0xf9,
        ];
        assert_eq!(blake2s(b""), expect);
    }

    #[test]
    fn streaming_matches_one_shot() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let one_shot = blake2s(data);
        let mut h = Blake2s::init();
        for chunk in data.chunks(7) {
            h.update(chunk);
        }
        assert_eq!(h.finalize(), one_shot);
    }

    #[test]
    fn keyed_differs_from_unkeyed() {
        let mut unkeyed = Blake2s::init();
        unkeyed.update(b"message");
        let mut keyed = Blake2s::init_key(&[0x52]);
        keyed.update(b"message");
        assert_ne!(unkeyed.finalize(), keyed.finalize());
    }
}
