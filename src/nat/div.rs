//! The division engine.
//!
//! All division is reciprocal-based: a [`Inverse`] is built at the entry
//! of a divmod, carries the normalization shift and the reciprocal of the
//! top divisor limb(s), and dies with the call. Quotient limbs come from
//! [`div_2by1`](crate::limb::recip::div_2by1) for single-limb divisors
//! and [`div_3by2`](crate::limb::recip::div_3by2) otherwise; the large
//! loop is Knuth's Algorithm D with the leading-limbs-equal special case
//! and the add-back correction.
//!
//! Exact division by a known-exact single-limb divisor multiplies by the
//! inverse of the divisor's odd part modulo the word base instead of
//! dividing.

use crate::limb::{self, LIMB_BITS, LIMB_HIGHBIT, Limb, recip};
use crate::nat;

/// Precomputed divisor state: the normalization shift, the normalized top
/// limb pair, and the matching reciprocal.
///
/// Built once per divmod and consumed by it.
#[derive(Clone, Copy, Debug)]
pub struct Inverse {
    /// Left shift in `[0, L)` that makes the top divisor limb's MSB set.
    pub shift: u32,
    /// Normalized top limb.
    pub d1: Limb,
    /// Normalized second limb (zero for single-limb divisors).
    pub d0: Limb,
    /// Reciprocal of `d1` (single-limb) or of `(d1, d0)`.
    pub v: Limb,
}

impl Inverse {
    /// Reciprocal state for a single-limb divisor `d != 0`.
    pub fn new_1(d: Limb) -> Inverse {
        debug_assert!(d != 0);

        let shift = limb::clz(d);
        let d1 = d << shift;

        Inverse {
            shift,
            d1,
            d0: 0,
            v: recip::inv_2by1(d1),
        }
    }

    /// Reciprocal state for a two-limb divisor with `d1 != 0`.
    pub fn new_2(d1: Limb, d0: Limb) -> Inverse {
        debug_assert!(d1 != 0);

        let shift = limb::clz(d1);
        let (n1, n0) = if shift > 0 {
            ((d1 << shift) | (d0 >> (LIMB_BITS - shift)), d0 << shift)
        } else {
            (d1, d0)
        };

        Inverse {
            shift,
            d1: n1,
            d0: n0,
            v: recip::inv_3by2(n1, n0),
        }
    }

    /// Reciprocal state for a stripped divisor of any length.
    pub fn new(dp: &[Limb]) -> Inverse {
        let dn = dp.len();

        debug_assert!(dn > 0 && dp[dn - 1] != 0);

        match dn {
            1 => Inverse::new_1(dp[0]),
            2 => Inverse::new_2(dp[1], dp[0]),
            _ => {
                let shift = limb::clz(dp[dn - 1]);
                let (d1, d0) = if shift > 0 {
                    (
                        (dp[dn - 1] << shift) | (dp[dn - 2] >> (LIMB_BITS - shift)),
                        (dp[dn - 2] << shift) | (dp[dn - 3] >> (LIMB_BITS - shift)),
                    )
                } else {
                    (dp[dn - 1], dp[dn - 2])
                };

                Inverse {
                    shift,
                    d1,
                    d0,
                    v: recip::inv_3by2(d1, d0),
                }
            }
        }
    }
}

/// `qp := np / d`, returning the remainder. `qp.len() == np.len()`.
///
/// Normalizes on the fly: each numerator limb is concatenated with the
/// running remainder and shifted into position without materializing a
/// shifted copy.
pub fn divmod_1(qp: &mut [Limb], np: &[Limb], d: Limb) -> Limb {
    assert!(d != 0, "division by zero");
    debug_assert_eq!(qp.len(), np.len());

    let nn = np.len();

    if nn == 0 {
        return 0;
    }

    let shift = limb::clz(d);
    let dnorm = d << shift;
    let v = recip::inv_2by1(dnorm);

    if shift == 0 {
        let mut r = 0;

        for i in (0..nn).rev() {
            let (q, r2) = recip::div_2by1(r, np[i], dnorm, v);
            qp[i] = q;
            r = r2;
        }

        r
    } else {
        let rb = LIMB_BITS - shift;
        let mut r = np[nn - 1] >> rb;
        let mut n1 = np[nn - 1];

        for i in (0..nn - 1).rev() {
            let n0 = np[i];
            let (q, r2) = recip::div_2by1(r, (n1 << shift) | (n0 >> rb), dnorm, v);
            qp[i + 1] = q;
            r = r2;
            n1 = n0;
        }

        let (q, r2) = recip::div_2by1(r, n1 << shift, dnorm, v);
        qp[0] = q;

        r2 >> shift
    }
}

/// Remainder of `np / d` without storing the quotient.
pub fn mod_1(np: &[Limb], d: Limb) -> Limb {
    assert!(d != 0, "division by zero");

    let nn = np.len();

    if nn == 0 {
        return 0;
    }

    let shift = limb::clz(d);
    let dnorm = d << shift;
    let v = recip::inv_2by1(dnorm);

    if shift == 0 {
        let mut r = 0;

        for i in (0..nn).rev() {
            let (_, r2) = recip::div_2by1(r, np[i], dnorm, v);
            r = r2;
        }

        r
    } else {
        let rb = LIMB_BITS - shift;
        let mut r = np[nn - 1] >> rb;
        let mut n1 = np[nn - 1];

        for i in (0..nn - 1).rev() {
            let n0 = np[i];
            let (_, r2) = recip::div_2by1(r, (n1 << shift) | (n0 >> rb), dnorm, v);
            r = r2;
            n1 = n0;
        }

        let (_, r2) = recip::div_2by1(r, n1 << shift, dnorm, v);

        r2 >> shift
    }
}

/// Two-limb divisor loop over the 3-by-2 primitive.
fn div_qr_2(qp: &mut [Limb], rp: &mut [Limb], np: &[Limb], inv: &Inverse) {
    let nn = np.len();

    debug_assert!(nn >= 2);
    debug_assert_eq!(qp.len(), nn - 1);

    let mut tmp = np.to_vec();

    let mut r1 = if inv.shift > 0 {
        nat::lshift_in(&mut tmp, inv.shift)
    } else {
        0
    };
    let mut r0 = tmp[nn - 1];

    for i in (0..nn - 1).rev() {
        let (q, nr1, nr0) = recip::div_3by2(r1, r0, tmp[i], inv.d1, inv.d0, inv.v);
        qp[i] = q;
        r1 = nr1;
        r0 = nr0;
    }

    if inv.shift > 0 {
        r0 = (r0 >> inv.shift) | (r1 << (LIMB_BITS - inv.shift));
        r1 >>= inv.shift;
    }

    rp[0] = r0;
    rp[1] = r1;
}

/// Knuth Algorithm D over the 3-by-2 primitive.
///
/// `np` holds the already-normalized numerator, `n1` its shifted-out top
/// limb, `dp` the normalized divisor of at least 3 limbs. The remainder
/// is left in `np[..dp.len()]` (still normalized).
fn div_qr_pi1(qp: &mut [Limb], np: &mut [Limb], mut n1: Limb, dp: &[Limb], v: Limb) {
    let nn = np.len();
    let dn = dp.len();

    debug_assert!(dn > 2 && nn >= dn);
    debug_assert_eq!(qp.len(), nn - dn + 1);

    let d1 = dp[dn - 1];
    let d0 = dp[dn - 2];

    debug_assert!(d1 & LIMB_HIGHBIT != 0);

    for i in (0..=nn - dn).rev() {
        let n0 = np[dn - 1 + i];
        let mut q;

        if n1 == d1 && n0 == d0 {
            // The estimation loop would overflow; take q̂ = B−1 directly
            // and let the subtraction repair the top limbs.
            q = Limb::MAX;
            nat::submul_1(&mut np[i..i + dn], dp, q);
            n1 = np[dn - 1 + i];
        } else {
            let (qq, r1, r0) = recip::div_3by2(n1, n0, np[dn - 2 + i], d1, d0, v);
            q = qq;

            let cy = nat::submul_1(&mut np[i..i + dn - 2], &dp[..dn - 2], q);

            // Propagate the submul borrow through the saved remainder
            // words instead of re-subtracting the top two divisor limbs.
            let cy1 = (r0 < cy) as Limb;
            let r0 = r0.wrapping_sub(cy);
            let cy2 = (r1 < cy1) as Limb;
            n1 = r1.wrapping_sub(cy1);
            np[dn - 2 + i] = r0;

            if cy2 != 0 {
                // Add-back: q̂ was one too large.
                let c = nat::add_n_in(&mut np[i..i + dn - 1], &dp[..dn - 1]);
                n1 = n1.wrapping_add(d1).wrapping_add(c);
                q -= 1;
            }
        }

        qp[i] = q;
    }

    np[dn - 1] = n1;
}

/// Full division `np = qp · dp + rp` with `0 ≤ r < d`.
///
/// `dp` must be stripped (top limb non-zero). `qp.len()` must be
/// `np.len() − dp.len() + 1` and `rp.len()` must equal `dp.len()`; a
/// numerator shorter than the divisor yields a zero quotient. Aborts on a
/// zero divisor.
pub fn divmod(qp: &mut [Limb], rp: &mut [Limb], np: &[Limb], dp: &[Limb]) {
    let dn = dp.len();
    let nn = np.len();

    assert!(dn > 0 && dp[dn - 1] != 0, "division by zero");
    debug_assert_eq!(rp.len(), dn);

    if nn < dn {
        rp[..nn].copy_from_slice(np);
        rp[nn..].fill(0);
        qp.fill(0);
        return;
    }

    debug_assert_eq!(qp.len(), nn - dn + 1);

    let inv = Inverse::new(dp);

    match dn {
        1 => {
            rp[0] = divmod_1(qp, np, dp[0]);
        }
        2 => {
            div_qr_2(qp, rp, np, &inv);
        }
        _ => {
            let mut tmp = np.to_vec();
            let nh = if inv.shift > 0 {
                nat::lshift_in(&mut tmp, inv.shift)
            } else {
                0
            };

            let mut dnorm;
            let dref: &[Limb] = if inv.shift > 0 {
                dnorm = dp.to_vec();
                let c = nat::lshift_in(&mut dnorm, inv.shift);
                debug_assert_eq!(c, 0);
                &dnorm
            } else {
                dp
            };

            div_qr_pi1(qp, &mut tmp, nh, dref, inv.v);

            if inv.shift > 0 {
                nat::rshift(rp, &tmp[..dn], inv.shift);
            } else {
                rp.copy_from_slice(&tmp[..dn]);
            }
        }
    }
}

/// Exact division `qp := np / d` for a `d` known to divide `np`.
///
/// Strips the common factor of two and multiplies by the inverse of the
/// odd part modulo B; no quotient estimation, no remainder.
pub fn divexact_1(qp: &mut [Limb], np: &[Limb], d: Limb) {
    assert!(d != 0, "division by zero");
    debug_assert_eq!(qp.len(), np.len());

    let nn = np.len();

    if nn == 0 {
        return;
    }

    let tz = limb::ctz(d);
    let dodd = d >> tz;
    let di = recip::inv_mod(dodd);
    let rb = LIMB_BITS - tz;

    let mut b: Limb = 0;

    for i in 0..nn {
        let s = if tz == 0 {
            np[i]
        } else {
            (np[i] >> tz) | if i + 1 < nn { np[i + 1] << rb } else { 0 }
        };

        let (l, b1) = limb::sub(s, b);
        let q = l.wrapping_mul(di);
        qp[i] = q;

        let (hi, _) = limb::mul(q, dodd);
        b = hi + b1;
    }
}
