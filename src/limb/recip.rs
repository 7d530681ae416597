//! Word reciprocals and reciprocal-based small division.
//!
//! Division in this crate never uses hardware division in a loop. A
//! divisor is normalized (top bit set), its reciprocal is computed once,
//! and every quotient limb is then produced with multiplications and a
//! couple of unpredictable-but-cheap fix-up steps. The three reciprocal
//! flavors are:
//!
//! - [`inv_2by1`]: reciprocal of a normalized single limb, driving
//!   2-limb-by-1-limb division.
//! - [`inv_3by2`]: refined reciprocal of a normalized limb pair, driving
//!   3-limb-by-2-limb division.
//! - [`inv_mod`]: the multiplicative inverse of an odd limb modulo the
//!   word base, driving exact division and Montgomery reduction.

use crate::limb::{self, LIMB_BITS, Limb, Wide};

/// Reciprocal `v = ⌊(B² − 1)/d⌋ − B` of a normalized divisor.
///
/// `d` must have its most significant bit set. The double-width division
/// here runs once per divisor, not once per quotient limb.
#[inline]
pub fn inv_2by1(d: Limb) -> Limb {
    debug_assert!(d & limb::LIMB_HIGHBIT != 0);

    ((!((d as Wide) << LIMB_BITS)) / (d as Wide)) as Limb
}

/// Refined reciprocal of the normalized two-limb divisor `(d1, d0)`.
///
/// Starts from `inv_2by1(d1)` and applies two fix-up rounds so the
/// reciprocal accounts for the low divisor limb.
pub fn inv_3by2(d1: Limb, d0: Limb) -> Limb {
    debug_assert!(d1 & limb::LIMB_HIGHBIT != 0);

    let mut v = inv_2by1(d1);
    let mut p = d1.wrapping_mul(v).wrapping_add(d0);

    if p < d0 {
        v = v.wrapping_sub(1);

        if p >= d1 {
            v = v.wrapping_sub(1);
            p = p.wrapping_sub(d1);
        }

        p = p.wrapping_sub(d1);
    }

    let (t1, t0) = limb::mul(d0, v);

    p = p.wrapping_add(t1);

    if p < t1 {
        v = v.wrapping_sub(1);

        if p >= d1 && (p > d1 || t0 >= d0) {
            v = v.wrapping_sub(1);
        }
    }

    v
}

/// Multiplicative inverse of an odd limb modulo B.
///
/// Newton iteration `m ← m·(2 − d·m)` doubles the number of correct low
/// bits each round. Starting from `m = d` gives three correct bits
/// (d² ≡ 1 mod 8 for odd d), so ⌈log₂ L⌉ − 1 rounds reach the full word.
pub fn inv_mod(d: Limb) -> Limb {
    debug_assert!(d & 1 == 1);

    let mut m = d;

    for _ in 0..(LIMB_BITS.ilog2() - 1) {
        m = m.wrapping_mul((2 as Limb).wrapping_sub(d.wrapping_mul(m)));
    }

    m
}

/// Divides the two-limb value `(u1, u0)` by the normalized limb `d` with
/// precomputed reciprocal `v`, returning `(q, r)`.
///
/// Requires `u1 < d` so the quotient fits one limb. The first fix-up
/// compares against the candidate low quotient limb after letting the
/// remainder wrap modulo B; the second triggers at most once.
#[inline]
pub fn div_2by1(u1: Limb, u0: Limb, d: Limb, v: Limb) -> (Limb, Limb) {
    debug_assert!(d & limb::LIMB_HIGHBIT != 0);
    debug_assert!(u1 < d);

    let (t1, t0) = limb::mul(v, u1);
    let (q0, c) = limb::add(t0, u0);
    let mut q1 = t1.wrapping_add(u1).wrapping_add(c).wrapping_add(1);

    let mut r = u0.wrapping_sub(q1.wrapping_mul(d));

    if r > q0 {
        q1 = q1.wrapping_sub(1);
        r = r.wrapping_add(d);
    }

    if r >= d {
        q1 = q1.wrapping_add(1);
        r -= d;
    }

    (q1, r)
}

/// Divides the three-limb value `(u2, u1, u0)` by the normalized pair
/// `(d1, d0)` with precomputed reciprocal `v`, returning `(q, r1, r0)`.
///
/// Requires `(u2, u1) < (d1, d0)`. The remainder words are returned so
/// the large-division loop can reuse them instead of re-deriving them
/// with two extra multiply-subtract passes.
#[inline]
pub fn div_3by2(
    u2: Limb,
    u1: Limb,
    u0: Limb,
    d1: Limb,
    d0: Limb,
    v: Limb,
) -> (Limb, Limb, Limb) {
    debug_assert!(d1 & limb::LIMB_HIGHBIT != 0);
    debug_assert!(u2 < d1 || (u2 == d1 && u1 < d0));

    let (t1, t0) = limb::mul(v, u2);
    let (q0, c) = limb::add(t0, u1);
    let mut q1 = t1.wrapping_add(u2).wrapping_add(c);

    let mut r1 = u1.wrapping_sub(q1.wrapping_mul(d1));

    // (r1, r0) := (r1, u0) − (d1, d0) − q1·d0, wrapping modulo B².
    let (p1, p0) = limb::mul(q1, d0);
    let (r0, b) = limb::sub(u0, d0);
    r1 = r1.wrapping_sub(d1).wrapping_sub(b);
    let (mut r0, b) = limb::sub(r0, p0);
    r1 = r1.wrapping_sub(p1).wrapping_sub(b);

    q1 = q1.wrapping_add(1);

    if r1 >= q0 {
        q1 = q1.wrapping_sub(1);
        let (z0, c) = limb::add(r0, d0);
        r0 = z0;
        r1 = r1.wrapping_add(d1).wrapping_add(c);
    }

    if r1 > d1 || (r1 == d1 && r0 >= d0) {
        q1 = q1.wrapping_add(1);
        let (z0, b) = limb::sub(r0, d0);
        r0 = z0;
        r1 = r1.wrapping_sub(d1).wrapping_sub(b);
    }

    (q1, r1, r0)
}
