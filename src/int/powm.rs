//! Modular and plain exponentiation on signed integers.

use super::Int;
use crate::nat::{
    modular::{Barrett, Montgomery},
    powm,
};
use core::cmp::Ordering;

impl Int {
    /// `self^y mod m`, variable time, `0 ≤ result < |m|`.
    ///
    /// Odd moduli with multi-limb exponents run the Montgomery sliding
    /// window; everything else runs the division-based window. Aborts on
    /// `m = 0` or negative `y`.
    pub fn powm(&self, y: &Int, m: &Int) -> Int {
        assert!(!m.is_zero(), "division by zero");
        assert!(!y.is_neg(), "negative exponent");

        let ma = m.abs();

        if ma.cmp(&Int::one()) == Ordering::Equal {
            return Int::new();
        }

        if y.is_zero() {
            return Int::one();
        }

        let x = self.mod_e(&ma);

        if x.is_zero() {
            return Int::new();
        }

        let n = ma.abs_size();
        let mut xp = x.d().to_vec();
        xp.resize(n, 0);

        let mut zp = vec![0; n];

        if ma.is_odd() && y.abs_size() >= 2 {
            let mg = Montgomery::new(ma.d());
            powm::powm_mont(&mut zp, &xp, y.d(), &mg);
        } else {
            let br = Barrett::new(ma.d());
            powm::powm_div(&mut zp, &xp, y.d(), &br);
        }

        Int::from_raw(zp, false)
    }

    /// Constant-time `self^y mod m` for odd `m` and `y ≥ 0`.
    ///
    /// Runs the fixed-window engine over the full stored length of `y`;
    /// only the public limb counts shape the execution. Aborts on an even
    /// modulus or a negative exponent.
    pub fn powm_sec(&self, y: &Int, m: &Int) -> Int {
        assert!(m.is_odd(), "modulus must be odd");
        assert!(!y.is_neg(), "negative exponent");

        let ma = m.abs();

        if ma.cmp(&Int::one()) == Ordering::Equal {
            return Int::new();
        }

        let x = self.mod_e(&ma);

        let n = ma.abs_size();
        let mut xp = x.d().to_vec();
        xp.resize(n, 0);

        let mut zp = vec![0; n];

        let mg = Montgomery::new(ma.d());
        powm::powm_sec(&mut zp, &xp, y.d(), &mg);

        Int::from_raw(zp, false)
    }

    /// `self^e` by left-to-right square-and-multiply; a power-of-two
    /// exponent degenerates into squarings only.
    pub fn pow_u64(&self, e: u64) -> Int {
        if e == 0 {
            return Int::one();
        }

        if self.is_zero() {
            return Int::new();
        }

        let top = 63 - e.leading_zeros();
        let mut z = self.clone();

        for bit in (0..top).rev() {
            z = z.square();

            if (e >> bit) & 1 == 1 {
                z = z.mul(self);
            }
        }

        z
    }
}
