//! Field, scalar, group, and signature/ECDH primitives for the jq255e
//! and jq255s double-odd elliptic curve groups.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are designed to be dependency-free, explicit in their
//! semantics, and suitable for security-critical code.
//!
//! # Module overview
//!
//! - `gf`
//!   Field arithmetic in GF(2^255 − c), generic over the modulus
//!   subtrahend so the same code serves both curves.
//!
//! - `sc`
//!   Scalar arithmetic modulo the group order `r`, including the
//!   constant-time long-division reduction and the 5-bit and wNAF
//!   digit recodings the multipliers consume.
//!
//! - `ct`
//!   Constant-time mask primitives (select, compare, conditional
//!   negate) shared by every layer above.
//!
//! - `hash`
//!   The streaming `Hasher` collaborator contract and a pure-Rust
//!   BLAKE2s implementation, the reference hash for this core.
//!
//! - `endo`
//!   One-time, non-constant-time derivation of jq255e's endomorphism
//!   constants at first use (not part of any per-call hot path).
//!
//! - `jq255e` / `jq255s`
//!   The group law, precomputed generator windows, scalar multipliers,
//!   and the signature/ECDH schemes for each curve. Both can be built
//!   simultaneously; `jq255e` is the default.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Constant-time by default; only `verify` and its combined
//!   multiplier are permitted to branch on (necessarily public) data
//! - Clear separation between curve-specific constants and the
//!   generic field/scalar/group-law code layered on top of them
//!
//! This crate is not intended to replace full-featured, externally
//! audited cryptographic libraries, but to serve as a small, controlled
//! implementation of the jq255e/jq255s core operations.

mod ct;
pub mod gf;
pub mod hash;
pub mod sc;

#[cfg(feature = "jq255e")]
mod endo;
#[cfg(feature = "jq255e")]
pub mod jq255e;

#[cfg(feature = "jq255s")]
pub mod jq255s;
