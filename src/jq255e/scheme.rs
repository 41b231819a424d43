//! jq255e signature and ECDH schemes (§4.5): key generation, signing,
//! verification, and shared-secret derivation, built on the group law
//! and multipliers above plus the external `Hasher` collaborator.
use super::consts::S;
use super::mul;
use super::pt::Point;
use crate::ct;
use crate::hash::{Blake2s, Hasher};

/// The concrete hash collaborator this core is built against. Any
/// 256-bit-output `Hasher` could stand in (§6); BLAKE2s is the
/// reference implementation.
type H = Blake2s;

/// A decoded public key, kept alongside its 32-byte encoding so
/// re-encoding is free and so `sign`/`verify`/`ecdh` can reject the
/// identity sentinel without redoing the decode.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    point: Point,
    encoded: [u8; 32],
    valid: bool,
}

impl PublicKey {
    pub fn decode(bytes: &[u8; 32]) -> Self {
        let (point, ok) = Point::decode(bytes);
        let valid = ct::mask_to_bool(ok) && point.is_identity() == 0;
        PublicKey { point, encoded: *bytes, valid }
    }

    fn from_point(point: Point) -> Self {
        let encoded = point.encode();
        let valid = point.is_identity() == 0;
        PublicKey { point, encoded, valid }
    }

    pub fn encoded(&self) -> &[u8; 32] {
        &self.encoded
    }

    /// `false` for the identity sentinel or a non-canonical encoding;
    /// any operation taking an invalid key must report failure.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

#[derive(Clone, Copy, Debug)]
pub struct KeyPair {
    pub sec: S,
    pub public: PublicKey,
}

/// Derives a keypair from a CSPRNG-supplied seed (§4.5): hash the seed,
/// reduce to a scalar, substitute `1` if the result is zero.
pub fn keygen(seed: &[u8]) -> KeyPair {
    let mut h = H::init();
    h.update(seed);
    let digest = h.finalize();
    let raw = S::decode_reduce(&digest);
    let is_zero = raw.is_zero();
    let sec = S::select(is_zero, &S::ONE, &raw);
    let public = PublicKey::from_point(mul::mulgen(&sec));
    KeyPair { sec, public }
}

fn feed_domain(h: &mut H, hash_name: Option<&[u8]>) {
    match hash_name {
        Some(name) if !name.is_empty() => {
            h.update(&[0x48]);
            h.update(name);
            h.update(&[0x00]);
        }
        _ => h.update(&[0x52]),
    }
}

fn derive_nonce(sec_enc: &[u8; 32], q_enc: &[u8; 32], seed: &[u8], hash_name: Option<&[u8]>, hv: &[u8]) -> S {
    let mut h = H::init();
    h.update(sec_enc);
    h.update(q_enc);
    h.update(&(seed.len() as u64).to_le_bytes());
    h.update(seed);
    feed_domain(&mut h, hash_name);
    h.update(hv);
    S::decode_reduce(&h.finalize())
}

fn derive_challenge(r_enc: &[u8; 32], q_enc: &[u8; 32], hash_name: Option<&[u8]>, hv: &[u8]) -> [u8; 16] {
    let mut h = H::init();
    h.update(r_enc);
    h.update(q_enc);
    feed_domain(&mut h, hash_name);
    h.update(hv);
    let digest = h.finalize();
    let mut c = [0u8; 16];
    c.copy_from_slice(&digest[0..16]);
    c
}

fn scalar_from_u128_bytes(bytes16: &[u8; 16]) -> S {
    let lo = u64::from_le_bytes(bytes16[0..8].try_into().unwrap());
    let hi = u64::from_le_bytes(bytes16[8..16].try_into().unwrap());
    S([lo, hi, 0, 0])
}

/// Produces a 48-byte signature: 16-byte challenge `c` || 32-byte
/// scalar `s`. `hash_name` is `None`/empty for raw-message signing, or
/// the hash algorithm's name when `hv` is a hash digest rather than the
/// message itself. `seed` is empty for fully deterministic signatures.
pub fn sign(sec: &S, q_enc: &[u8; 32], hash_name: Option<&[u8]>, hv: &[u8], seed: &[u8]) -> [u8; 48] {
    let sec_enc = sec.encode();
    let k = derive_nonce(&sec_enc, q_enc, seed, hash_name, hv);
    let r_enc = mul::mulgen(&k).encode();
    let c_bytes = derive_challenge(&r_enc, q_enc, hash_name, hv);
    let c = scalar_from_u128_bytes(&c_bytes);
    let s = k.add(&c.mul(sec));
    let mut out = [0u8; 48];
    out[0..16].copy_from_slice(&c_bytes);
    out[16..48].copy_from_slice(&s.encode());
    out
}

/// Verifies a signature over `(hash_name, hv)` against `q`. Variable-time
/// (§5): the combined multiplier and the final comparison are allowed
/// to branch on public data.
pub fn verify(sig: &[u8], q: &PublicKey, hash_name: Option<&[u8]>, hv: &[u8]) -> bool {
    if sig.len() != 48 || !q.is_valid() {
        return false;
    }
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&sig[16..48]);
    let (s, ok) = S::decode(&s_bytes);
    if !ct::mask_to_bool(ok) {
        return false;
    }
    let mut c_bytes = [0u8; 16];
    c_bytes.copy_from_slice(&sig[0..16]);
    let c = scalar_from_u128_bytes(&c_bytes);
    let neg_c = S::ZERO.sub(&c);
    let r_prime = mul::combined_mul(&q.point, &neg_c, &s);
    let recomputed = derive_challenge(&r_prime.encode(), q.encoded(), hash_name, hv);
    recomputed == c_bytes
}

fn select_byte(ctl: ct::Mask, a: u8, b: u8) -> u8 {
    ct::select_u64(ctl, a as u64, b as u64) as u8
}

/// Orders two 32-byte encodings as little-endian 256-bit integers,
/// comparing from the most significant byte down, branch-free.
fn lexicographic_order(a: &[u8; 32], b: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut decided = 0u64;
    let mut a_is_low = ct::mask_true();
    for i in (0..32).rev() {
        let ai = a[i] as u64;
        let bi = b[i] as u64;
        let eq = ct::eq_u64(ai, bi);
        let a_lt = ct::mask_from_bool(ai < bi);
        let this_decides = !eq & !decided;
        a_is_low = ct::select_u64(this_decides, a_is_low, a_lt);
        decided |= !eq;
    }
    let mut low = [0u8; 32];
    let mut high = [0u8; 32];
    for i in 0..32 {
        low[i] = select_byte(a_is_low, b[i], a[i]);
        high[i] = select_byte(a_is_low, a[i], b[i]);
    }
    (low, high)
}

/// Authenticated ECDH (§4.5). `own` is the local keypair's public key,
/// used only to order the two encodings before hashing. Always returns
/// a 32-byte output; `success` is `false` exactly when `peer` is the
/// identity sentinel, in which case the output is still deterministic
/// and unguessable (derived under the failure domain byte instead of
/// leaking that the peer key was invalid).
pub fn ecdh(sec: &S, own: &PublicKey, peer: &PublicKey) -> ([u8; 32], bool) {
    let bad = peer.point.is_identity();
    let z_enc = mul::mul(sec, &peer.point).encode();
    let fail_enc = sec.encode();
    let mut shared = [0u8; 32];
    for i in 0..32 {
        shared[i] = select_byte(bad, z_enc[i], fail_enc[i]);
    }
    let (low, high) = lexicographic_order(own.encoded(), peer.encoded());
    let domain = select_byte(bad, 0x53, 0x46);

    let mut h = H::init();
    h.update(&low);
    h.update(&high);
    h.update(&[domain]);
    h.update(&shared);
    (h.finalize(), !ct::mask_to_bool(bad))
}
