//! The jq255e group: `c = 18651`, curve `(a, b) = (0, -2)`, with a
//! `sqrt(-1)`-based endomorphism enabling two-dimensional scalar
//! splitting in its multipliers.
pub mod consts;
mod gen;
mod mul;
mod pt;
mod scheme;

pub use pt::Point;
pub use scheme::{ecdh, keygen, sign, verify, KeyPair, PublicKey};

pub use consts::S as Scalar;
pub use gen::generator;
pub use mul::{combined_mul, mul, mulgen};
