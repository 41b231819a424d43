//! jq255e group law: the `(E:Z:U:T)` extended point representation,
//! encoding/decoding, the unified addition law, and constant-time
//! window lookup.
use super::consts::{a_prime, b_prime, F};
use crate::ct::{self, Mask};

/// A jq255e group element in extended `(E:Z:U:T)` coordinates.
/// `E != 0`, `Z != 0` always; the identity is `(1:1:0:0)`.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) e: F,
    pub(crate) z: F,
    pub(crate) u: F,
    pub(crate) t: F,
}

/// An affine `(e, u, t)` point with implicit `Z = 1`, used only for
/// precomputed windows.
#[derive(Clone, Copy, Debug)]
pub struct Affine {
    pub(crate) e: F,
    pub(crate) u: F,
    pub(crate) t: F,
}

impl Point {
    pub const IDENTITY: Self = Self { e: F::ONE, z: F::ONE, u: F::ZERO, t: F::ZERO };

    pub fn from_affine(p: &Affine) -> Self {
        Self { e: p.e, z: F::ONE, u: p.u, t: p.t }
    }

    pub fn to_affine(&self) -> Affine {
        let zi = self.z.inv();
        Affine { e: self.e.mul(&zi), u: self.u.mul(&zi), t: self.t.mul(&zi).mul(&zi) }
    }

    /// The general unified addition law (§4.3); also used for doubling
    /// (`double(p) == add(p, p)`, a testable group invariant).
    pub fn add(&self, other: &Self) -> Self {
        add_generic(self.e, self.z, self.u, self.t, other.e, other.z, other.u, other.t)
    }

    pub fn add_affine(&self, other: &Affine) -> Self {
        add_generic(self.e, self.z, self.u, self.t, other.e, F::ONE, other.u, other.t)
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// `n` successive doublings.
    pub fn xdouble(&self, n: u32) -> Self {
        let mut r = *self;
        for _ in 0..n {
            r = r.double();
        }
        r
    }

    pub fn neg(&self) -> Self {
        Self { e: self.e, z: self.z, u: self.u.neg(), t: self.t }
    }

    pub fn condneg(&self, ctl: Mask) -> Self {
        Self { e: self.e, z: self.z, u: self.u.condneg(ctl), t: self.t }
    }

    pub fn select(ctl: Mask, a0: &Self, a1: &Self) -> Self {
        Self {
            e: F::select(ctl, &a0.e, &a1.e),
            z: F::select(ctl, &a0.z, &a1.z),
            u: F::select(ctl, &a0.u, &a1.u),
            t: F::select(ctl, &a0.t, &a1.t),
        }
    }

    /// `true` iff the two points represent the same group element:
    /// `U1*E2 == U2*E1`.
    pub fn equals(&self, other: &Self) -> bool {
        self.u.mul(&other.e).equals(&other.u.mul(&self.e))
    }

    pub fn is_identity(&self) -> Mask {
        self.u.is_zero()
    }

    /// Encodes the `u` coordinate of the canonical representative (the
    /// one whose `e` coordinate is non-negative).
    pub fn encode(&self) -> [u8; 32] {
        let zi = self.z.inv();
        let e = self.e.mul(&zi);
        let u = self.u.mul(&zi);
        let take_neg = e.is_negative();
        let u = F::select(take_neg, &u.neg(), &u);
        u.encode()
    }

    /// Decodes a 32-byte `u` coordinate; returns `(point, mask)` with
    /// `mask` all-ones iff `u` was a canonical field encoding and
    /// `(a^2-4b)u^4 - 2a u^2 + 1` is a square (the resulting `e` is
    /// taken non-negative automatically by [`F::sqrt`]).
    pub fn decode(bytes: &[u8; 32]) -> (Self, Mask) {
        let (u, ok_u) = F::decode(bytes);
        let u2 = u.square();
        let v = b_prime().mul(&u2.square()).add(&a_prime().mul(&u2)).add(&F::ONE);
        let (e, ok_v) = v.sqrt();
        let ok = ok_u & ok_v;
        let p = Self { e, z: F::ONE, u, t: u2 };
        (Self::select(ok, &p, &Self::IDENTITY), ok)
    }
}

impl Affine {
    pub fn from_point(p: &Point) -> Self {
        let a = p.to_affine();
        Affine { e: a.e, u: a.u, t: a.t }
    }

    pub fn condneg(&self, ctl: Mask) -> Self {
        Affine { e: self.e, u: self.u.condneg(ctl), t: self.t }
    }

    pub fn select(ctl: Mask, a0: &Self, a1: &Self) -> Self {
        Affine {
            e: F::select(ctl, &a0.e, &a1.e),
            u: F::select(ctl, &a0.u, &a1.u),
            t: F::select(ctl, &a0.t, &a1.t),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn add_generic(e1: F, z1: F, u1: F, t1: F, e2: F, z2: F, u2: F, t2: F) -> Point {
    let bp = b_prime();
    let ap = a_prime();
    let e1e2 = e1.mul(&e2);
    let u1u2 = u1.mul(&u2);
    let z1z2 = z1.mul(&z2);
    let t1t2 = t1.mul(&t2);
    let eu = e1.mul(&u2).add(&e2.mul(&u1));
    let zt = z1.mul(&t2).add(&z2.mul(&t1));
    let hd = z1z2.sub(&bp.mul(&t1t2));
    let e3 = z1z2.add(&bp.mul(&t1t2)).mul(&e1e2.add(&ap.mul(&u1u2))).add(&bp.mul2().mul(&u1u2).mul(&zt));
    let z3 = hd.square();
    let t3 = eu.square();
    let u3 = hd.mul(&eu);
    Point { e: e3, z: z3, u: u3, t: t3 }
}

/// Constant-time window lookup: given 16 multiples `win[i] = (i+1)*P`
/// and a signed digit `d` in `[-15, 16]`, returns `|d|*P` with `d`'s
/// sign folded in by negating `U`. Every table entry is touched.
pub fn lookup(win: &[Point; 16], d: i32) -> Point {
    let ad = d.unsigned_abs() as u64;
    let mut acc = Point::IDENTITY;
    for (i, entry) in win.iter().enumerate() {
        let take = ct::mask_from_bool(ad == (i as u64 + 1));
        acc = Point::select(take, entry, &acc);
    }
    acc.condneg(ct::mask_from_bool(d < 0))
}

/// Same, over a window of affine points.
pub fn lookup_affine(win: &[Affine; 16], d: i32) -> Affine {
    let ad = d.unsigned_abs() as u64;
    let mut acc = Affine { e: F::ONE, u: F::ZERO, t: F::ZERO };
    for (i, entry) in win.iter().enumerate() {
        let take = ct::mask_from_bool(ad == (i as u64 + 1));
        acc = Affine::select(take, entry, &acc);
    }
    acc.condneg(ct::mask_from_bool(d < 0))
}
