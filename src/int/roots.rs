//! Integer and modular roots.
//!
//! The integer k-th root is a Newton iteration started one bit above the
//! true root; it converges from above and stops at the first
//! non-decreasing step. The modular square root dispatches on the prime's
//! residue class: an exponentiation for `p ≡ 3 (mod 4)`, Atkin's formula
//! for `p ≡ 5 (mod 8)`, Tonelli–Shanks otherwise. Every path verifies by
//! squaring before reporting success.

use super::Int;
use core::cmp::Ordering;

/// Candidates tried for the Tonelli–Shanks non-residue witness before
/// giving up on an adversarial (non-prime) modulus.
const WITNESS_CAP: u64 = 1000;

impl Int {
    /// Integer k-th root with remainder: `(s, r)` with `s^k + r = self`
    /// and `(|s|+1)^k > |self|`. Negative values require odd `k`; the
    /// root then carries the sign and the remainder follows the operand.
    pub fn rootrem(&self, k: u64) -> (Int, Int) {
        assert!(k >= 1, "zeroth root");
        assert!(!self.is_neg() || k % 2 == 1, "even root of negative");

        if self.is_zero() || k == 1 {
            return (self.clone(), Int::new());
        }

        let mag = self.abs();
        let s = mag.root_newton(k);
        let r = mag.sub(&s.pow_u64(k));

        if self.is_neg() {
            (s.neg(), r.neg())
        } else {
            (s, r)
        }
    }

    /// Newton iteration on a positive value.
    fn root_newton(&self, k: u64) -> Int {
        debug_assert!(self.sgn() > 0 && k >= 2);

        let km1 = k - 1;
        let ki = Int::from(k);

        // Start one bit above the root so the first step descends.
        let mut u = Int::one().mul_2exp(self.bitlen().div_ceil(k) + 1);

        loop {
            let s = u.clone();
            let t = s.mul_u64(km1).add(&self.quo(&s.pow_u64(km1)));

            u = t.quo(&ki);

            if u.cmp(&s) != Ordering::Less {
                return s;
            }
        }
    }

    /// Integer k-th root, discarding the remainder.
    pub fn root(&self, k: u64) -> Int {
        self.rootrem(k).0
    }

    /// Square root with remainder; the operand must be non-negative.
    pub fn sqrtrem(&self) -> (Int, Int) {
        assert!(!self.is_neg(), "square root of negative");

        self.rootrem(2)
    }

    /// Integer square root.
    pub fn sqrt(&self) -> Int {
        self.sqrtrem().0
    }

    /// True for perfect squares (negatives are not).
    pub fn perfect_square_p(&self) -> bool {
        if self.is_neg() {
            return false;
        }

        self.sqrtrem().1.is_zero()
    }

    /// Square root modulo an odd prime: `Some(r)` with `r² ≡ self
    /// (mod p)`, or `None` when no root exists (or `p` was not prime
    /// enough for the search to terminate).
    pub fn sqrtm(&self, p: &Int) -> Option<Int> {
        assert!(p.is_odd() && p.cmp(&Int::one()) == Ordering::Greater, "modulus must be an odd prime");

        let x = self.mod_e(p);

        if x.is_zero() {
            return Some(Int::new());
        }

        let r = match p.limbs[0] & 7 {
            3 | 7 => {
                // r = x^((p+1)/4).
                let e = p.add_u64(1).quo_2exp(2);
                x.powm(&e, p)
            }
            5 => {
                // Atkin: a = (2x)^((p−5)/8), r = ((a²·2x − 1)·x·a).
                let t2x = x.mul_u64(2).mod_e(p);
                let e = p.sub_u64(5).quo_2exp(3);
                let a = t2x.powm(&e, p);
                let inner = a.square().mul(&t2x).sub_u64(1);

                inner.mul(&x).mul(&a).mod_e(p)
            }
            _ => Int::sqrtm_tonelli(&x, p)?,
        };

        if r.square().mod_e(p).cmp(&x) == Ordering::Equal {
            Some(r)
        } else {
            None
        }
    }

    /// The general Tonelli–Shanks path for `p ≡ 1 (mod 8)`.
    fn sqrtm_tonelli(x: &Int, p: &Int) -> Option<Int> {
        if x.jacobi(p) != 1 {
            return None;
        }

        // p − 1 = 2^e · q with q odd.
        let pm1 = p.sub_u64(1);
        let e = pm1.ctz();
        let q = pm1.quo_2exp(e);

        // Witness search: the first n with (n / p) = −1.
        let mut witness = None;

        for n in 2..WITNESS_CAP {
            let cand = Int::from(n);

            if cand.jacobi(p) == -1 {
                witness = Some(cand);
                break;
            }
        }

        let n = witness?;

        let mut y = x.powm(&q.add_u64(1).quo_2exp(1), p);
        let mut b = x.powm(&q, p);
        let mut g = n.powm(&q, p);
        let mut r = e;

        loop {
            // Least m with b^(2^m) = 1.
            let mut m = 0;
            let mut t = b.clone();

            while t.cmp(&Int::one()) != Ordering::Equal {
                t = t.square().mod_e(p);
                m += 1;

                if m >= r {
                    return None;
                }
            }

            if m == 0 {
                return Some(y);
            }

            let mut t = g.clone();

            for _ in 0..r - m - 1 {
                t = t.square().mod_e(p);
            }

            y = y.mul(&t).mod_e(p);
            g = t.square().mod_e(p);
            b = b.mul(&g).mod_e(p);
            r = m;
        }
    }

    /// Square root modulo `p·q` for two distinct odd primes, composed by
    /// CRT from the per-prime roots and the Bézout coefficients.
    pub fn sqrtpq(&self, p: &Int, q: &Int) -> Option<Int> {
        let sp = self.sqrtm(p)?;
        let sq = self.sqrtm(q)?;

        let (g, cp, cq) = p.gcdext(q);

        if g.cmp(&Int::one()) != Ordering::Equal {
            return None;
        }

        // cp·p + cq·q = 1: glue the two roots.
        let n = p.mul(q);
        let z = sp.mul(&cq).mul(q).add(&sq.mul(&cp).mul(p));

        Some(z.mod_e(&n))
    }
}
