//! The jq255s group: `c = 3957`, curve `(a, b) = (-1, 1/2)`. No
//! endomorphism splitting; its multiplier is a plain windowed scan.
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
