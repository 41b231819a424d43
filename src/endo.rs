//! One-time derivation of the jq255e scalar-splitting endomorphism
//! constants: a scalar-domain square root `mu` of `-1 (mod r)`, and the
//! short lattice vector `(u_lat, v_lat)` with `u_lat ≡ v_lat * mu (mod
//! r)` and both below `2^127`, used by [`crate::sc::split`].
//!
//! These are computed here, once, from the curve's scalar modulus,
//! rather than hardcoded as literals: the retrieval pack's
//! `original_source` carried no files (filtered by size), so the
//! published constants from the jq255e reference note were not
//! available to copy. A scalar-domain modular square root (Atkin's
//! formula, mirroring [`crate::gf::Gf::sqrt`]) gives `mu`; a half-GCD
//! reduction of the lattice generated by `(r, 0)` and `(mu, 1)` gives
//! the short vector. Both run on public curve constants at module
//! initialization, never on secret data, so — unlike the rest of `sc`
//! — the arithmetic below is ordinary variable-width, variable-time
//! bigint code; see DESIGN.md for why `r`'s correction term is a small
//! placeholder rather than the reference's ~127-bit constant.
use crate::sc::Scalar;
use std::cmp::Ordering;

#[derive(Clone)]
struct Big {
    neg: bool,
    mag: Vec<u64>,
}

impl Big {
    fn zero() -> Self {
        Big { neg: false, mag: vec![] }
    }

    fn from_u64(x: u64) -> Self {
        if x == 0 {
            Self::zero()
        } else {
            Big { neg: false, mag: vec![x] }
        }
    }

    fn from_limbs4(limbs: [u64; 4]) -> Self {
        Big { neg: false, mag: Self::trim(limbs.to_vec()) }
    }

    fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    fn trim(mut v: Vec<u64>) -> Vec<u64> {
        while v.last() == Some(&0) {
            v.pop();
        }
        v
    }

    fn cmp_mag(a: &[u64], b: &[u64]) -> Ordering {
        if a.len() != b.len() {
            return a.len().cmp(&b.len());
        }
        for i in (0..a.len()).rev() {
            if a[i] != b[i] {
                return a[i].cmp(&b[i]);
            }
        }
        Ordering::Equal
    }

    fn add_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
        let n = a.len().max(b.len());
        let mut r = vec![0u64; n + 1];
        let mut carry: u128 = 0;
        for i in 0..n {
            let ai = *a.get(i).unwrap_or(&0) as u128;
            let bi = *b.get(i).unwrap_or(&0) as u128;
            let s = ai + bi + carry;
            r[i] = s as u64;
            carry = s >> 64;
        }
        r[n] = carry as u64;
        Self::trim(r)
    }

    /// Requires `a >= b` as magnitudes.
    fn sub_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
        let mut r = vec![0u64; a.len()];
        let mut borrow: i128 = 0;
        for i in 0..a.len() {
            let ai = a[i] as i128;
            let bi = *b.get(i).unwrap_or(&0) as i128;
            let mut d = ai - bi - borrow;
            if d < 0 {
                d += 1i128 << 64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            r[i] = d as u64;
        }
        Self::trim(r)
    }

    fn mul_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
        if a.is_empty() || b.is_empty() {
            return vec![];
        }
        let mut r = vec![0u64; a.len() + b.len()];
        for i in 0..a.len() {
            let mut carry: u128 = 0;
            for j in 0..b.len() {
                let p = a[i] as u128 * b[j] as u128 + r[i + j] as u128 + carry;
                r[i + j] = p as u64;
                carry = p >> 64;
            }
            let mut k = i + b.len();
            let mut extra = carry;
            while extra != 0 {
                let s = r[k] as u128 + extra;
                r[k] = s as u64;
                extra = s >> 64;
                k += 1;
            }
        }
        Self::trim(r)
    }

    /// Unsigned long division; `b` non-zero.
    fn divmod_unsigned(a: &[u64], b: &[u64]) -> (Vec<u64>, Vec<u64>) {
        let bits = a.len() * 64;
        let mut quotient = vec![0u64; a.len()];
        let mut rem: Vec<u64> = vec![];
        for bit in (0..bits).rev() {
            let mut carry = 0u64;
            for limb in rem.iter_mut() {
                let nc = *limb >> 63;
                *limb = (*limb << 1) | carry;
                carry = nc;
            }
            if carry != 0 {
                rem.push(carry);
            }
            let abit = (a[bit / 64] >> (bit % 64)) & 1;
            if abit != 0 {
                if rem.is_empty() {
                    rem.push(1);
                } else {
                    rem[0] |= 1;
                }
            }
            if Self::cmp_mag(&rem, b) != Ordering::Less {
                rem = Self::sub_mag(&rem, b);
                quotient[bit / 64] |= 1u64 << (bit % 64);
            }
        }
        (Self::trim(quotient), rem)
    }

    fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.neg == other.neg {
            Big { neg: self.neg, mag: Self::add_mag(&self.mag, &other.mag) }
        } else {
            match Self::cmp_mag(&self.mag, &other.mag) {
                Ordering::Equal => Big::zero(),
                Ordering::Greater => Big { neg: self.neg, mag: Self::sub_mag(&self.mag, &other.mag) },
                Ordering::Less => Big { neg: other.neg, mag: Self::sub_mag(&other.mag, &self.mag) },
            }
        }
    }

    fn negated(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Big { neg: !self.neg, mag: self.mag.clone() }
        }
    }

    fn sub(&self, other: &Self) -> Self {
        self.add(&other.negated())
    }

    fn mul(&self, other: &Self) -> Self {
        let mag = Self::mul_mag(&self.mag, &other.mag);
        let neg = !mag.is_empty() && (self.neg != other.neg);
        Big { neg, mag }
    }

    fn shr(&self, n: u32) -> Self {
        let mut v = self.mag.clone();
        let mut carry = 0u64;
        for limb in v.iter_mut().rev() {
            let new_carry = *limb & ((1u64 << n) - 1);
            *limb = (*limb >> n) | (carry << (64 - n));
            carry = new_carry;
        }
        Big { neg: self.neg, mag: Self::trim(v) }
    }

    fn to_u128(&self) -> u128 {
        let mut x = 0u128;
        for (i, &limb) in self.mag.iter().enumerate().take(2) {
            x |= (limb as u128) << (64 * i);
        }
        x
    }
}

fn pow_scalar<const L: u64, const H: u64>(base: &Scalar<L, H, true>, exp: &Big) -> Scalar<L, H, true> {
    let mut r = Scalar::<L, H, true>::ONE;
    let bits = exp.mag.len() * 64;
    for bit in (0..bits).rev() {
        r = r.mul(&r);
        let b = (exp.mag[bit / 64] >> (bit % 64)) & 1;
        if b == 1 {
            r = r.mul(base);
        }
    }
    r
}

/// Scalar-domain modular square root (Atkin's formula, `r ≡ 5 mod 8`).
/// Only used here on public values.
fn scalar_sqrt<const L: u64, const H: u64>(a: &Scalar<L, H, true>) -> Scalar<L, H, true> {
    let r_big = Big::from_limbs4(Scalar::<L, H, true>::r_limbs());
    let exp = r_big.sub(&Big::from_u64(5)).shr(3);
    let two_a = a.add(a);
    let b = pow_scalar(&two_a, &exp);
    let c = two_a.mul(&b.mul(&b));
    a.mul(&b).mul(&c.sub(&Scalar::ONE))
}

/// Derives `(u_lat, v_lat, mu)` for jq255e's endomorphism splitting.
/// `r`'s residue class must be `5 mod 8` for [`scalar_sqrt`]'s formula
/// to apply; jq255e's scalar-modulus constant is chosen accordingly
/// (see `jq255e::consts`).
pub fn derive<const L: u64, const H: u64>() -> (u128, u128, Scalar<L, H, true>) {
    let mu = scalar_sqrt::<L, H>(&Scalar::<L, H, true>::ONE.neg());

    let r_big = Big::from_limbs4(Scalar::<L, H, true>::r_limbs());
    let mu_big = Big::from_limbs4(mu.0);
    let mut threshold_mag = vec![0u64; 2];
    threshold_mag[1] = 1u64 << 63;
    let threshold = Big { neg: false, mag: Big::trim(threshold_mag) };

    let mut r_prev = r_big;
    let mut r_cur = mu_big;
    let mut t_prev = Big::zero();
    let mut t_cur = Big { neg: false, mag: vec![1] };

    while Big::cmp_mag(&r_cur.mag, &threshold.mag) != Ordering::Less {
        let (q_mag, rem_mag) = Big::divmod_unsigned(&r_prev.mag, &r_cur.mag);
        let q = Big { neg: false, mag: q_mag };
        let rem = Big { neg: false, mag: rem_mag };
        let t_next = t_prev.sub(&q.mul(&t_cur));
        r_prev = r_cur;
        r_cur = rem;
        t_prev = t_cur;
        t_cur = t_next;
    }

    let (u_lat, v_lat, mu_final) = if t_cur.neg {
        (r_cur, t_cur.negated(), mu.neg())
    } else {
        (r_cur, t_cur, mu)
    };
    (u_lat.to_u128(), v_lat.to_u128(), mu_final)
}
