//! Signed addition, subtraction, and multiplication.
//!
//! The signed operations dispatch on the operand signs and reduce to two
//! magnitude primitives: `addabs` (sum of absolute values) and `subabs`
//! (larger magnitude minus smaller). The sign of an add/sub result
//! follows the operand with the larger magnitude.

use super::Int;
use crate::limb::Limb;
use crate::nat;
use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

/// |x| + |y| as a magnitude buffer.
pub(crate) fn addabs(xp: &[Limb], yp: &[Limb]) -> Vec<Limb> {
    let (long, short) = if xp.len() >= yp.len() {
        (xp, yp)
    } else {
        (yp, xp)
    };

    let mut z = vec![0; long.len() + 1];
    let c = nat::add(&mut z[..long.len()], long, short);
    z[long.len()] = c;

    z
}

/// |x| − |y| as a magnitude buffer; requires |x| ≥ |y|.
pub(crate) fn subabs(xp: &[Limb], yp: &[Limb]) -> Vec<Limb> {
    debug_assert!(nat::cmp_stripped(xp, yp) != Ordering::Less);

    let mut z = vec![0; xp.len()];
    let b = nat::sub(&mut z, xp, yp);
    debug_assert_eq!(b, 0);

    z
}

impl Int {
    /// Signed sum.
    pub fn add(&self, rhs: &Int) -> Int {
        self.add_signed(rhs, false)
    }

    /// Signed difference.
    pub fn sub(&self, rhs: &Int) -> Int {
        self.add_signed(rhs, true)
    }

    fn add_signed(&self, rhs: &Int, negate_rhs: bool) -> Int {
        let xneg = self.is_neg();
        let yneg = rhs.is_neg() ^ negate_rhs;

        if xneg == yneg {
            return Int::from_raw(addabs(self.d(), rhs.d()), xneg);
        }

        match self.cmpabs(rhs) {
            Ordering::Equal => Int::new(),
            Ordering::Greater => Int::from_raw(subabs(self.d(), rhs.d()), xneg),
            Ordering::Less => Int::from_raw(subabs(rhs.d(), self.d()), yneg),
        }
    }

    /// `self + y` for an unsigned word.
    pub fn add_u64(&self, y: u64) -> Int {
        self.add(&Int::from(y))
    }

    /// `self − y` for an unsigned word.
    pub fn sub_u64(&self, y: u64) -> Int {
        self.sub(&Int::from(y))
    }

    /// `y − self` for an unsigned word: a regular subtract, negated.
    pub fn u64_sub(&self, y: u64) -> Int {
        self.sub(&Int::from(y)).neg()
    }

    /// `y − self` for a signed word.
    pub fn i64_sub(&self, y: i64) -> Int {
        self.sub(&Int::from(y)).neg()
    }

    /// The negated value.
    pub fn neg(&self) -> Int {
        Int {
            limbs: self.limbs.clone(),
            size: -self.size,
        }
    }

    /// Signed product.
    pub fn mul(&self, rhs: &Int) -> Int {
        let xn = self.abs_size();
        let yn = rhs.abs_size();

        if xn == 0 || yn == 0 {
            return Int::new();
        }

        let mut z = vec![0; xn + yn];
        nat::mul(&mut z, self.d(), rhs.d());

        Int::from_raw(z, self.is_neg() != rhs.is_neg())
    }

    /// Product with an unsigned word.
    pub fn mul_u64(&self, y: u64) -> Int {
        self.mul(&Int::from(y))
    }

    /// Product with a signed word.
    pub fn mul_i64(&self, y: i64) -> Int {
        self.mul(&Int::from(y))
    }

    /// The square, through the dedicated squaring kernel.
    pub fn square(&self) -> Int {
        let n = self.abs_size();

        if n == 0 {
            return Int::new();
        }

        let mut z = vec![0; 2 * n];
        nat::sqr(&mut z, self.d());

        Int::from_raw(z, false)
    }

    /// `self + x·y` fused accumulate.
    pub fn addmul(&self, x: &Int, y: &Int) -> Int {
        self.add(&x.mul(y))
    }

    /// `self − x·y` fused accumulate.
    pub fn submul(&self, x: &Int, y: &Int) -> Int {
        self.sub(&x.mul(y))
    }

    /// `self + x·y` for a word multiplier.
    pub fn addmul_u64(&self, x: &Int, y: u64) -> Int {
        self.add(&x.mul_u64(y))
    }

    /// `self − x·y` for a word multiplier.
    pub fn submul_u64(&self, x: &Int, y: u64) -> Int {
        self.sub(&x.mul_u64(y))
    }
}

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        Int::add(self, rhs)
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        Int::add(&self, &rhs)
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        Int::sub(self, rhs)
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        Int::sub(&self, &rhs)
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        Int::mul(self, rhs)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        Int::mul(&self, &rhs)
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        Int::neg(self)
    }
}

impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Int {
        let mut z = self;
        z.size = -z.size;
        z
    }
}
