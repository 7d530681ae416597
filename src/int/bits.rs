//! Bitwise operations, shifts, and bit manipulation over the signed
//! representation.
//!
//! Negative operands are read as infinite-width two's complement. The
//! AND/OR/XOR kernels never materialize the complemented magnitudes:
//! each operand walks its own borrow chain converting magnitude limbs to
//! two's-complement limbs on the fly, and a third chain converts the
//! combined limbs back into a magnitude. One extra limb is reserved for
//! the final carry of that output chain.
//!
//! The shift split follows the division families: `mul_2exp` is the left
//! shift, `quo_2exp` shifts toward zero, `div_2exp` is the arithmetic
//! (floor) shift, and `rem_2exp`/`mod_2exp` are the matching remainders.

use super::Int;
use crate::limb::{self, LIMB_BITS, Limb};
use crate::nat;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// One step of a magnitude→two's-complement limb chain.
#[inline]
fn tc_step(mag: Limb, ext: Limb, carry: &mut Limb) -> Limb {
    let (l, c) = limb::add(mag ^ ext, *carry);
    *carry = c;
    l
}

impl Int {
    /// Bitwise AND over the two's-complement reading.
    pub fn and(&self, rhs: &Int) -> Int {
        let (u, v) = if self.abs_size() >= rhs.abs_size() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let un = u.abs_size();
        let vn = v.abs_size();

        if vn == 0 {
            return Int::new();
        }

        let su = u.is_neg() as Limb;
        let sv = v.is_neg() as Limb;
        let sr = su & sv;

        let ux = su.wrapping_neg();
        let vx = sv.wrapping_neg();
        let rx = sr.wrapping_neg();

        // A positive shorter operand zeroes everything above itself.
        let rn = if vx != 0 { un } else { vn };
        let mut rp = vec![0; rn + sr as usize];

        let (mut uc, mut vc, mut rc) = (su, sv, sr);
        let up = u.d();
        let vp = v.d();

        for i in 0..vn {
            let ul = tc_step(up[i], ux, &mut uc);
            let vl = tc_step(vp[i], vx, &mut vc);
            rp[i] = tc_step(ul & vl, rx, &mut rc);
        }

        debug_assert_eq!(vc, 0);

        for i in vn..rn {
            let ul = tc_step(up[i], ux, &mut uc);
            rp[i] = tc_step(ul & vx, rx, &mut rc);
        }

        if rc != 0 {
            rp[rn] = rc;
        }

        Int::from_raw(rp, sr != 0)
    }

    /// Bitwise OR over the two's-complement reading.
    pub fn ior(&self, rhs: &Int) -> Int {
        let (u, v) = if self.abs_size() >= rhs.abs_size() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let un = u.abs_size();
        let vn = v.abs_size();

        if vn == 0 {
            return u.clone();
        }

        let su = u.is_neg() as Limb;
        let sv = v.is_neg() as Limb;
        let sr = su | sv;

        let ux = su.wrapping_neg();
        let vx = sv.wrapping_neg();
        let rx = sr.wrapping_neg();

        // A negative shorter operand forces ones above itself.
        let rn = if vx != 0 { vn } else { un };
        let mut rp = vec![0; rn + sr as usize];

        let (mut uc, mut vc, mut rc) = (su, sv, sr);
        let up = u.d();
        let vp = v.d();

        for i in 0..vn {
            let ul = tc_step(up[i], ux, &mut uc);
            let vl = tc_step(vp[i], vx, &mut vc);
            rp[i] = tc_step(ul | vl, rx, &mut rc);
        }

        debug_assert_eq!(vc, 0);

        for i in vn..rn {
            let ul = tc_step(up[i], ux, &mut uc);
            rp[i] = tc_step(ul | vx, rx, &mut rc);
        }

        if rc != 0 {
            rp[rn] = rc;
        }

        Int::from_raw(rp, sr != 0)
    }

    /// Bitwise XOR over the two's-complement reading.
    pub fn xor(&self, rhs: &Int) -> Int {
        let (u, v) = if self.abs_size() >= rhs.abs_size() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let un = u.abs_size();
        let vn = v.abs_size();

        if vn == 0 {
            return u.clone();
        }

        let su = u.is_neg() as Limb;
        let sv = v.is_neg() as Limb;
        let sr = su ^ sv;

        let ux = su.wrapping_neg();
        let vx = sv.wrapping_neg();
        let rx = sr.wrapping_neg();

        let rn = un;
        let mut rp = vec![0; rn + sr as usize];

        let (mut uc, mut vc, mut rc) = (su, sv, sr);
        let up = u.d();
        let vp = v.d();

        for i in 0..vn {
            let ul = tc_step(up[i], ux, &mut uc);
            let vl = tc_step(vp[i], vx, &mut vc);
            rp[i] = tc_step(ul ^ vl ^ rx, 0, &mut rc);
        }

        debug_assert_eq!(vc, 0);

        for i in vn..rn {
            let ul = tc_step(up[i], ux, &mut uc);
            rp[i] = tc_step(ul ^ vx ^ rx, 0, &mut rc);
        }

        if rc != 0 {
            rp[rn] = rc;
        }

        Int::from_raw(rp, sr != 0)
    }

    /// One's complement: `−x − 1`.
    pub fn com(&self) -> Int {
        if self.is_neg() {
            Int::from_raw(super::arith::subabs(self.d(), &[1]), false)
        } else {
            Int::from_raw(super::arith::addabs(self.d(), &[1]), true)
        }
    }

    /// `self · 2^bits`.
    pub fn mul_2exp(&self, bits: u64) -> Int {
        let n = self.abs_size();

        if n == 0 {
            return Int::new();
        }

        let off = (bits / LIMB_BITS as u64) as usize;
        let sh = (bits % LIMB_BITS as u64) as u32;

        let mut z = vec![0; n + off + 1];
        z[off..off + n].copy_from_slice(self.d());

        if sh > 0 {
            let c = nat::lshift_in(&mut z[off..], sh);
            debug_assert_eq!(c, 0);
        }

        Int::from_raw(z, self.is_neg())
    }

    /// `self / 2^bits` truncated toward zero.
    pub fn quo_2exp(&self, bits: u64) -> Int {
        let n = self.abs_size();
        let off = (bits / LIMB_BITS as u64) as usize;
        let sh = (bits % LIMB_BITS as u64) as u32;

        if off >= n {
            return Int::new();
        }

        let mut z = self.d()[off..].to_vec();

        if sh > 0 {
            nat::rshift_in(&mut z, sh);
        }

        Int::from_raw(z, self.is_neg())
    }

    /// `⌊self / 2^bits⌋`, the arithmetic shift: negatives round toward
    /// −∞, as `−((|x| − 1) >> bits) − 1`.
    pub fn div_2exp(&self, bits: u64) -> Int {
        if !self.is_neg() {
            return self.quo_2exp(bits);
        }

        let m1 = Int::from_raw(super::arith::subabs(self.d(), &[1]), false);
        let shifted = m1.quo_2exp(bits);

        Int::from_raw(super::arith::addabs(shifted.d(), &[1]), true)
    }

    /// Truncating remainder of division by `2^bits`: the low bits with
    /// the numerator's sign.
    pub fn rem_2exp(&self, bits: u64) -> Int {
        let mut z = self.d().to_vec();
        nat::mask(&mut z, bits);

        Int::from_raw(z, self.is_neg())
    }

    /// Euclidean remainder of division by `2^bits`, always non-negative.
    pub fn mod_2exp(&self, bits: u64) -> Int {
        let low = self.rem_2exp(bits);

        if !low.is_neg() {
            return low;
        }

        // 2^bits − |low|.
        let mut p = Int::new();
        p.grow((bits / LIMB_BITS as u64 + 1) as usize + 1);
        let nlimbs = p.limbs.len();
        nat::setbit(&mut p.limbs, bits);
        p.normalize(nlimbs, false);

        p.sub(&low.abs())
    }

    /// Reads bit `pos` of the two's-complement representation.
    pub fn tstbit(&self, pos: u64) -> bool {
        let n = self.abs_size();
        let li = (pos / LIMB_BITS as u64) as usize;

        if li >= n {
            return self.is_neg();
        }

        let sh = (pos % LIMB_BITS as u64) as u32;
        let stored = (self.limbs[li] >> sh) & 1 != 0;

        if !self.is_neg() {
            return stored;
        }

        // For −m the bit is the stored magnitude bit when everything
        // below it is zero (the borrow of m−1 ripples past), and the
        // complement otherwise.
        let low_mask = ((1 as Limb) << sh) - 1;
        let low_zero =
            self.limbs[..li].iter().all(|&l| l == 0) && self.limbs[li] & low_mask == 0;

        if low_zero { stored } else { !stored }
    }

    /// Adds `2^pos` to the magnitude.
    fn abs_add_bit(&mut self, pos: u64) {
        let li = (pos / LIMB_BITS as u64) as usize;
        let sh = (pos % LIMB_BITS as u64) as u32;
        let n = self.abs_size();
        let neg = self.is_neg();

        self.grow(li.max(n) + 2);
        let cap = self.limbs.len();
        self.limbs[n..].fill(0);

        let c = nat::add_1_in(&mut self.limbs[li..], (1 as Limb) << sh);
        debug_assert_eq!(c, 0);

        self.normalize(cap, neg);
    }

    /// Subtracts `2^pos` from the magnitude; requires magnitude ≥ 2^pos.
    fn abs_sub_bit(&mut self, pos: u64) {
        let li = (pos / LIMB_BITS as u64) as usize;
        let sh = (pos % LIMB_BITS as u64) as u32;
        let n = self.abs_size();
        let neg = self.is_neg();

        let b = nat::sub_1_in(&mut self.limbs[li..n], (1 as Limb) << sh);
        debug_assert_eq!(b, 0);

        self.normalize(n, neg);
    }

    /// Sets bit `pos` of the two's-complement representation.
    pub fn setbit(&mut self, pos: u64) {
        if !self.tstbit(pos) {
            if self.is_neg() {
                self.abs_sub_bit(pos);
            } else {
                self.abs_add_bit(pos);
            }
        }
    }

    /// Clears bit `pos` of the two's-complement representation.
    pub fn clrbit(&mut self, pos: u64) {
        if self.tstbit(pos) {
            if self.is_neg() {
                self.abs_add_bit(pos);
            } else {
                self.abs_sub_bit(pos);
            }
        }
    }

    /// Flips bit `pos` of the two's-complement representation.
    pub fn combit(&mut self, pos: u64) {
        if self.tstbit(pos) {
            self.clrbit(pos);
        } else {
            self.setbit(pos);
        }
    }

    /// Population count; negatives (infinitely many ones) yield
    /// `u64::MAX`.
    pub fn popcount(&self) -> u64 {
        if self.is_neg() {
            return u64::MAX;
        }

        nat::popcount(self.d())
    }

    /// Hamming distance over the two's-complement reading; operands of
    /// different sign are infinitely far apart, yielding `u64::MAX`.
    pub fn hamdist(&self, rhs: &Int) -> u64 {
        if self.is_neg() != rhs.is_neg() {
            return u64::MAX;
        }

        let un = self.abs_size().max(rhs.abs_size());
        let ext = if self.is_neg() { Limb::MAX } else { 0 };
        let mut dist = 0;

        let (mut uc, mut vc) = (self.is_neg() as Limb, rhs.is_neg() as Limb);

        for i in 0..un {
            let ul = tc_step(self.d().get(i).copied().unwrap_or(0), ext, &mut uc);
            let vl = tc_step(rhs.d().get(i).copied().unwrap_or(0), ext, &mut vc);
            dist += limb::popcount(ul ^ vl) as u64;
        }

        dist
    }

    /// Position of the first set bit at or after `from` in the
    /// two's-complement reading. `None` only for non-negative values
    /// with no set bit left.
    pub fn scan1(&self, from: u64) -> Option<u64> {
        if !self.is_neg() {
            return nat::scan1(self.d(), from);
        }

        let n = self.abs_size();
        let mut c: Limb = 1;
        let start = (from / LIMB_BITS as u64) as usize;

        for i in 0..n.max(start + 1) {
            let mag = self.d().get(i).copied().unwrap_or(0);
            let tc = tc_step(mag, Limb::MAX, &mut c);

            if i < start {
                continue;
            }

            let w = if i == start {
                let sh = (from % LIMB_BITS as u64) as u32;
                tc >> sh << sh
            } else {
                tc
            };

            if w != 0 {
                return Some(i as u64 * LIMB_BITS as u64 + limb::ctz(w) as u64);
            }
        }

        // Sign extension: all ones from the end of the magnitude on.
        Some(n as u64 * LIMB_BITS as u64)
    }

    /// Position of the first clear bit at or after `from` in the
    /// two's-complement reading. `None` only for negative values with no
    /// clear bit left.
    pub fn scan0(&self, from: u64) -> Option<u64> {
        if !self.is_neg() {
            return Some(nat::scan0(self.d(), from));
        }

        let n = self.abs_size();
        let mut c: Limb = 1;
        let start = (from / LIMB_BITS as u64) as usize;

        for i in 0..n {
            let tc = tc_step(self.d()[i], Limb::MAX, &mut c);

            if i < start {
                continue;
            }

            let w = if i == start {
                let sh = (from % LIMB_BITS as u64) as u32;
                tc | if sh == 0 { 0 } else { Limb::MAX >> (LIMB_BITS - sh) }
            } else {
                tc
            };

            if w != Limb::MAX {
                return Some(i as u64 * LIMB_BITS as u64 + limb::ctz(!w) as u64);
            }
        }

        None
    }
}

impl BitAnd for &Int {
    type Output = Int;

    fn bitand(self, rhs: &Int) -> Int {
        self.and(rhs)
    }
}

impl BitAnd for Int {
    type Output = Int;

    fn bitand(self, rhs: Int) -> Int {
        self.and(&rhs)
    }
}

impl BitOr for &Int {
    type Output = Int;

    fn bitor(self, rhs: &Int) -> Int {
        self.ior(rhs)
    }
}

impl BitOr for Int {
    type Output = Int;

    fn bitor(self, rhs: Int) -> Int {
        self.ior(&rhs)
    }
}

impl BitXor for &Int {
    type Output = Int;

    fn bitxor(self, rhs: &Int) -> Int {
        self.xor(rhs)
    }
}

impl BitXor for Int {
    type Output = Int;

    fn bitxor(self, rhs: Int) -> Int {
        self.xor(&rhs)
    }
}

impl Not for &Int {
    type Output = Int;

    fn not(self) -> Int {
        self.com()
    }
}

impl Not for Int {
    type Output = Int;

    fn not(self) -> Int {
        self.com()
    }
}

impl Shl<u64> for &Int {
    type Output = Int;

    fn shl(self, bits: u64) -> Int {
        self.mul_2exp(bits)
    }
}

impl Shl<u64> for Int {
    type Output = Int;

    fn shl(self, bits: u64) -> Int {
        self.mul_2exp(bits)
    }
}

impl Shr<u64> for &Int {
    type Output = Int;

    fn shr(self, bits: u64) -> Int {
        self.div_2exp(bits)
    }
}

impl Shr<u64> for Int {
    type Output = Int;

    fn shr(self, bits: u64) -> Int {
        self.div_2exp(bits)
    }
}
