//! The three signed division families, exact division, and multiplicity
//! removal.
//!
//! - `quo`/`rem` truncate toward zero; the remainder has the numerator's
//!   sign.
//! - `div`/`mod_e` are Euclidean: the remainder is never negative and
//!   the quotient absorbs the adjustment.
//! - `divround` rounds to nearest via `(n ± ⌊|d|/2⌋)/d` truncated.
//!
//! Divisibility tests reuse the remainder computation; the 2-exponent
//! forms live with the other bit-level operations.

use super::Int;
use crate::nat::{self, div};
use core::cmp::Ordering;
use core::ops::{Div, Rem};

impl Int {
    /// Truncating division: `(quotient, remainder)` with the remainder
    /// carrying the numerator's sign. Aborts on a zero divisor.
    pub fn quorem(&self, d: &Int) -> (Int, Int) {
        assert!(!d.is_zero(), "division by zero");

        let nn = self.abs_size();
        let dn = d.abs_size();

        if self.cmpabs(d) == Ordering::Less {
            return (Int::new(), self.clone());
        }

        let mut qp = vec![0; nn - dn + 1];
        let mut rp = vec![0; dn];
        div::divmod(&mut qp, &mut rp, self.d(), d.d());

        let q = Int::from_raw(qp, self.is_neg() != d.is_neg());
        let r = Int::from_raw(rp, self.is_neg());

        (q, r)
    }

    /// Truncating quotient.
    pub fn quo(&self, d: &Int) -> Int {
        self.quorem(d).0
    }

    /// Truncating remainder.
    pub fn rem(&self, d: &Int) -> Int {
        self.quorem(d).1
    }

    /// Euclidean division: `(quotient, remainder)` with `0 ≤ r < |d|`.
    pub fn divmod(&self, d: &Int) -> (Int, Int) {
        let (mut q, mut r) = self.quorem(d);

        if r.is_neg() {
            if d.is_neg() {
                q = q.add_u64(1);
                r = r.sub(d);
            } else {
                q = q.sub_u64(1);
                r = r.add(d);
            }
        }

        (q, r)
    }

    /// Euclidean quotient.
    pub fn div_e(&self, d: &Int) -> Int {
        self.divmod(d).0
    }

    /// Euclidean remainder, always non-negative.
    pub fn mod_e(&self, d: &Int) -> Int {
        self.divmod(d).1
    }

    /// Round-to-nearest division: `(n ± ⌊|d|/2⌋)/d` truncated, so an
    /// exact half (possible only for even divisors) rounds away from
    /// zero.
    pub fn divround(&self, d: &Int) -> Int {
        assert!(!d.is_zero(), "division by zero");

        let half = d.abs().quo_2exp(1);

        let adjusted = if self.is_neg() {
            self.sub(&half)
        } else {
            self.add(&half)
        };

        adjusted.quo(d)
    }

    /// Truncating division by an unsigned word: `(quotient, |remainder|)`.
    pub fn quorem_u64(&self, d: u64) -> (Int, u64) {
        let (q, r) = self.quorem(&Int::from(d));

        (q, r.get_u64())
    }

    /// Truncating quotient by an unsigned word.
    pub fn quo_u64(&self, d: u64) -> Int {
        self.quorem_u64(d).0
    }

    /// Magnitude of the truncating remainder by an unsigned word.
    pub fn rem_u64(&self, d: u64) -> u64 {
        self.quorem_u64(d).1
    }

    /// Euclidean remainder by an unsigned word, always in `[0, d)`.
    pub fn mod_u64(&self, d: u64) -> u64 {
        self.mod_e(&Int::from(d)).get_u64()
    }

    /// True when the word `d` divides `self`.
    pub fn divisible_u64_p(&self, d: u64) -> bool {
        if d == 0 {
            return self.is_zero();
        }

        #[cfg(not(any(feature = "limb32", target_pointer_width = "32")))]
        {
            div::mod_1(self.d(), d) == 0
        }

        #[cfg(any(feature = "limb32", target_pointer_width = "32"))]
        {
            self.rem_u64(d) == 0
        }
    }

    /// True when `self ≡ y (mod m)`; every pair is congruent modulo zero
    /// only if equal.
    pub fn congruent_p(&self, y: &Int, m: &Int) -> bool {
        if m.is_zero() {
            return self == y;
        }

        self.sub(y).divisible_p(m)
    }

    /// True when `self ≡ y (mod 2^bits)`.
    pub fn congruent_2exp_p(&self, y: &Int, bits: u64) -> bool {
        self.sub(y).divisible_2exp_p(bits)
    }

    /// True when `d` divides `self` (everything divides zero; only zero
    /// is divisible by zero).
    pub fn divisible_p(&self, d: &Int) -> bool {
        if d.is_zero() {
            return self.is_zero();
        }

        self.rem(d).is_zero()
    }

    /// True when `2^bits` divides `self`, checked on the trailing bits.
    pub fn divisible_2exp_p(&self, bits: u64) -> bool {
        if self.is_zero() {
            return true;
        }

        nat::ctz(self.d()) >= bits
    }

    /// Exact division: aborts if the remainder is non-zero.
    pub fn divexact(&self, d: &Int) -> Int {
        let (q, r) = self.quorem(d);
        assert!(r.is_zero(), "inexact division");

        q
    }

    /// Exact division by an unsigned word through the odd-inverse kernel.
    pub fn divexact_u64(&self, d: u64) -> Int {
        #[cfg(not(any(feature = "limb32", target_pointer_width = "32")))]
        {
            assert!(d != 0, "division by zero");

            let n = self.abs_size();

            if n == 0 {
                return Int::new();
            }

            let mut qp = vec![0; n];
            div::divexact_1(&mut qp, self.d(), d);

            Int::from_raw(qp, self.is_neg())
        }

        #[cfg(any(feature = "limb32", target_pointer_width = "32"))]
        {
            self.divexact(&Int::from(d))
        }
    }

    /// Divides out every factor `f`, returning the reduced value and the
    /// multiplicity. Aborts when `|f| ≤ 1`.
    pub fn remove(&self, f: &Int) -> (Int, u64) {
        assert!(
            f.cmpabs(&Int::one()) == Ordering::Greater,
            "factor must exceed one"
        );

        if self.is_zero() {
            return (Int::new(), 0);
        }

        // Power-of-two factors reduce to a trailing-zero count.
        if f.abs_size() >= 1 && nat::popcount(f.d()) == 1 {
            let fbits = f.bitlen() - 1;
            let count = nat::ctz(self.d()) / fbits;
            let mut z = self.quo_2exp(count * fbits);

            if f.is_neg() && count % 2 == 1 {
                z = z.neg();
            }

            return (z, count);
        }

        let mut z = self.clone();
        let mut count = 0;

        loop {
            let (q, r) = z.quorem(f);

            if !r.is_zero() {
                return (z, count);
            }

            z = q;
            count += 1;
        }
    }
}

impl Div for &Int {
    type Output = Int;

    fn div(self, rhs: &Int) -> Int {
        self.quo(rhs)
    }
}

impl Div for Int {
    type Output = Int;

    fn div(self, rhs: Int) -> Int {
        self.quo(&rhs)
    }
}

impl Rem for &Int {
    type Output = Int;

    fn rem(self, rhs: &Int) -> Int {
        Int::rem(self, rhs)
    }
}

impl Rem for Int {
    type Output = Int;

    fn rem(self, rhs: Int) -> Int {
        Int::rem(&self, &rhs)
    }
}
