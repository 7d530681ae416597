//! Modular reduction machinery: Barrett and Montgomery.
//!
//! Both structures precompute per-modulus state once and are then applied
//! to many operands, which is what the exponentiation loops need. The
//! Montgomery product exists in a variable-time "almost" form (one
//! conditional subtraction, output kept below B^n rather than below m)
//! and a constant-time form finished by [`reduce_weak`].

use crate::limb::{self, LIMB_BITS, Limb, recip};
use crate::nat::{self, div, sec};

/// Masked conditional subtraction: `zp := xp − np` when that does not
/// underflow the extra high limb `hi`, else `zp := xp`. Branch-free.
///
/// Sufficient as the full reduction after a Montgomery step whose output
/// is bounded by `2m`.
pub fn reduce_weak(zp: &mut [Limb], xp: &[Limb], np: &[Limb], hi: Limb, scratch: &mut [Limb]) {
    debug_assert!(zp.len() == xp.len() && xp.len() == np.len());
    debug_assert!(scratch.len() >= xp.len());

    let t = &mut scratch[..xp.len()];
    let b = nat::sub_n(t, xp, np);

    // Underflow iff hi < borrow; both are 0 or 1.
    let keep = hi.wrapping_sub(b) >> (LIMB_BITS - 1);

    sec::cnd_select(keep, zp, t, xp);
}

/// Barrett reduction state for a fixed modulus.
///
/// Precomputes `m = ⌊B^(2k) / n⌋` for a k-limb modulus; a reduction is
/// then one multiply, one truncating shift, one multiply-subtract, and at
/// most two corrective subtractions.
pub struct Barrett {
    /// The modulus, stripped.
    np: Vec<Limb>,
    /// ⌊B^shift / n⌋.
    mp: Vec<Limb>,
    /// Shift in limbs, `2 · np.len()`.
    shift: usize,
}

impl Barrett {
    /// Builds the reduction state for a non-zero modulus.
    pub fn new(np: &[Limb]) -> Barrett {
        let n = nat::strip(np);
        assert!(n > 0, "division by zero");

        let np = np[..n].to_vec();
        let shift = 2 * n;

        let mut num = vec![0; shift + 1];
        num[shift] = 1;

        let mut mp = vec![0; shift + 1 - n + 1];
        let mut rp = vec![0; n];
        div::divmod(&mut mp, &mut rp, &num, &np);

        let mn = nat::strip(&mp);
        mp.truncate(mn);

        Barrett { np, mp, shift }
    }

    /// Limb count of the modulus.
    pub fn mod_len(&self) -> usize {
        self.np.len()
    }

    /// The modulus limbs.
    pub fn mod_limbs(&self) -> &[Limb] {
        &self.np
    }

    /// `zp := xp mod n` for `xp` shorter than `B^(2k)`.
    /// `zp.len() == mod_len()`.
    pub fn reduce(&self, zp: &mut [Limb], xp: &[Limb]) {
        let n = self.np.len();

        debug_assert_eq!(zp.len(), n);
        debug_assert!(xp.len() <= self.shift);

        let xn = nat::strip(xp);
        let xp = &xp[..xn];

        if xn <= n && nat::cmp_stripped(xp, &self.np) == core::cmp::Ordering::Less {
            zp[..xn].copy_from_slice(xp);
            zp[xn..].fill(0);
            return;
        }

        // h = ⌊x·m / B^shift⌋.
        let mut prod = vec![0; xn + self.mp.len()];
        nat::mul(&mut prod, xp, &self.mp);
        let hp = &prod[self.shift.min(prod.len())..];

        // q = x − h·n, known to fit n+1 limbs.
        let mut q = vec![0; n + 1];
        let qn = q.len();
        q[..xn.min(qn)].copy_from_slice(&xp[..xn.min(qn)]);

        let mut hn = vec![0; hp.len() + n];
        nat::mul(&mut hn, hp, &self.np);
        nat::sub_in(&mut q, &hn[..qn.min(hn.len())]);

        // At most two corrective subtractions.
        for _ in 0..2 {
            let ge = q[n] != 0
                || nat::cmp_stripped(&q[..n], &self.np) != core::cmp::Ordering::Less;

            if ge {
                nat::sub_in(&mut q, &self.np);
            } else {
                break;
            }
        }

        debug_assert_eq!(q[n], 0);
        zp.copy_from_slice(&q[..n]);
    }
}

/// Montgomery multiplication state for a fixed odd modulus.
pub struct Montgomery {
    /// The modulus, stripped, odd.
    mp: Vec<Limb>,
    /// −m₀⁻¹ mod B.
    k: Limb,
    /// B^(2n) mod m, for entering the Montgomery domain.
    r2: Vec<Limb>,
}

impl Montgomery {
    /// Builds the multiplication state. The modulus must be odd.
    pub fn new(mp: &[Limb]) -> Montgomery {
        let n = nat::strip(mp);
        assert!(n > 0 && mp[0] & 1 == 1, "modulus must be odd");

        let mp = mp[..n].to_vec();
        let k = recip::inv_mod(mp[0]).wrapping_neg();

        let mut num = vec![0; 2 * n + 1];
        num[2 * n] = 1;

        let mut qp = vec![0; n + 2];
        let mut r2 = vec![0; n];
        div::divmod(&mut qp, &mut r2, &num, &mp);

        Montgomery { mp, k, r2 }
    }

    /// Limb count of the modulus.
    pub fn mod_len(&self) -> usize {
        self.mp.len()
    }

    /// The modulus limbs.
    pub fn mod_limbs(&self) -> &[Limb] {
        &self.mp
    }

    /// B^(2n) mod m.
    pub fn r2(&self) -> &[Limb] {
        &self.r2
    }

    /// CIOS accumulator walk shared by both product variants.
    ///
    /// `t` has 2n+1 limbs, zeroed by the caller; on return the candidate
    /// result sits in `t[n..2n]` with the extra carry in `t[2n]`.
    fn cios(&self, t: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
        let n = self.mp.len();

        debug_assert!(t.len() == 2 * n + 1);
        debug_assert!(xp.len() == n && yp.len() == n);

        for i in 0..n {
            let mut c = nat::addmul_1(&mut t[i..i + n], yp, xp[i]);

            // Fixed-length ripple; no early exit so the constant-time
            // caller can share this loop.
            for w in t[i + n..].iter_mut() {
                let (s, c2) = limb::add(*w, c);
                *w = s;
                c = c2;
            }
            debug_assert_eq!(c, 0);

            let u = t[i].wrapping_mul(self.k);
            let mut c = nat::addmul_1(&mut t[i..i + n], &self.mp, u);

            for w in t[i + n..].iter_mut() {
                let (s, c2) = limb::add(*w, c);
                *w = s;
                c = c2;
            }
            debug_assert_eq!(c, 0);
            debug_assert_eq!(t[i], 0);
        }
    }

    /// Variable-time "almost Montgomery" product
    /// `zp := xp · yp · B^(−n) mod m`, with all values kept below `B^n`
    /// (not necessarily below `m`).
    pub fn mul(&self, zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
        let n = self.mp.len();

        debug_assert_eq!(zp.len(), n);

        let mut t = vec![0; 2 * n + 1];
        self.cios(&mut t, xp, yp);

        if t[2 * n] != 0 {
            let b = nat::sub_n(zp, &t[n..2 * n], &self.mp);
            debug_assert_eq!(b, t[2 * n]);
        } else {
            zp.copy_from_slice(&t[n..2 * n]);
        }
    }

    /// Constant-time Montgomery product; the reduction is an
    /// unconditional masked subtraction.
    pub fn mul_sec(&self, zp: &mut [Limb], xp: &[Limb], yp: &[Limb]) {
        let n = self.mp.len();

        debug_assert_eq!(zp.len(), n);

        let mut t = vec![0; 2 * n + 1];
        self.cios(&mut t, xp, yp);

        let mut scratch = vec![0; n];
        let (lo, hi) = t.split_at(2 * n);
        reduce_weak(zp, &lo[n..], &self.mp, hi[0], &mut scratch);
    }
}
