//! Single-word arithmetic primitives.
//!
//! Everything in the crate is built from the operations in this module:
//! carrying addition and subtraction, full-width multiplication, and the
//! bit-counting helpers. A limb is an unsigned machine word; all
//! higher-level values are little-endian vectors of limbs.
//!
//! The limb width is fixed at build time. 64-bit limbs are the default;
//! 32-bit targets (or the `limb32` feature) select 32-bit limbs. All code
//! above this module is written against the [`Limb`]/[`Wide`] aliases and
//! the width constants, never against a concrete integer type.
//!
//! The reciprocal machinery used by the division engine lives in
//! [`recip`].

pub mod recip;

/// Unsigned machine word used as a base-2^L digit.
#[cfg(not(any(feature = "limb32", target_pointer_width = "32")))]
pub type Limb = u64;
#[cfg(any(feature = "limb32", target_pointer_width = "32"))]
pub type Limb = u32;

/// Signed counterpart of [`Limb`], used for sign extension masks.
#[cfg(not(any(feature = "limb32", target_pointer_width = "32")))]
pub type SLimb = i64;
#[cfg(any(feature = "limb32", target_pointer_width = "32"))]
pub type SLimb = i32;

/// Double-width type holding a full limb product.
#[cfg(not(any(feature = "limb32", target_pointer_width = "32")))]
pub type Wide = u128;
#[cfg(any(feature = "limb32", target_pointer_width = "32"))]
pub type Wide = u64;

/// Bit width of a limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Byte width of a limb.
pub const LIMB_BYTES: usize = (LIMB_BITS as usize) / 8;

/// The most significant bit of a limb.
pub const LIMB_HIGHBIT: Limb = 1 << (LIMB_BITS - 1);

/// The largest limb value, 2^L − 1.
pub const LIMB_MAX: Limb = Limb::MAX;

/// Half the bit width of a limb, used by the half-word comparison walk
/// in the constant-time toolkit.
pub const LIMB_HALF_BITS: u32 = LIMB_BITS / 2;

/// `x + y`, returning the wrapped sum and the carry-out (0 or 1).
#[inline(always)]
pub const fn add(x: Limb, y: Limb) -> (Limb, Limb) {
    let (z, c) = x.overflowing_add(y);
    (z, c as Limb)
}

/// `x + y + cin` three-way ripple. `cin` must be 0 or 1.
#[inline(always)]
pub const fn addc(x: Limb, y: Limb, cin: Limb) -> (Limb, Limb) {
    let (z, c1) = x.overflowing_add(y);
    let (z, c2) = z.overflowing_add(cin);
    (z, (c1 | c2) as Limb)
}

/// `x − y`, returning the wrapped difference and the borrow-out (0 or 1).
#[inline(always)]
pub const fn sub(x: Limb, y: Limb) -> (Limb, Limb) {
    let (z, b) = x.overflowing_sub(y);
    (z, b as Limb)
}

/// `x − y − bin` three-way ripple. `bin` must be 0 or 1.
#[inline(always)]
pub const fn subc(x: Limb, y: Limb, bin: Limb) -> (Limb, Limb) {
    let (z, b1) = x.overflowing_sub(y);
    let (z, b2) = z.overflowing_sub(bin);
    (z, (b1 | b2) as Limb)
}

/// Full 2L-bit product `x · y`, returned as `(hi, lo)`.
#[inline(always)]
pub const fn mul(x: Limb, y: Limb) -> (Limb, Limb) {
    let w = (x as Wide) * (y as Wide);
    ((w >> LIMB_BITS) as Limb, w as Limb)
}

/// Full 2L-bit square `x²`, returned as `(hi, lo)`.
#[inline(always)]
pub const fn sqr(x: Limb) -> (Limb, Limb) {
    mul(x, x)
}

/// `x · y + a`, returned as `(lo, carry)`.
///
/// Cannot overflow: (B−1)² + (B−1) < B².
#[inline(always)]
pub const fn muladd(x: Limb, y: Limb, a: Limb) -> (Limb, Limb) {
    let w = (x as Wide) * (y as Wide) + (a as Wide);
    (w as Limb, (w >> LIMB_BITS) as Limb)
}

/// `x · y + a + c`, returned as `(lo, carry)`.
///
/// The multiply-accumulate step of the vector kernels. Cannot overflow:
/// (B−1)² + 2(B−1) < B².
#[inline(always)]
pub const fn muladd2(x: Limb, y: Limb, a: Limb, c: Limb) -> (Limb, Limb) {
    let w = (x as Wide) * (y as Wide) + (a as Wide) + (c as Wide);
    (w as Limb, (w >> LIMB_BITS) as Limb)
}

/// Number of leading zero bits. `clz(0) = L`, defined.
#[inline(always)]
pub const fn clz(x: Limb) -> u32 {
    x.leading_zeros()
}

/// Number of trailing zero bits. `ctz(0) = L`, defined.
#[inline(always)]
pub const fn ctz(x: Limb) -> u32 {
    x.trailing_zeros()
}

/// Number of set bits.
#[inline(always)]
pub const fn popcount(x: Limb) -> u32 {
    x.count_ones()
}

/// Position of the highest set bit plus one; `bitlen(0) = 0`.
#[inline(always)]
pub const fn bitlen(x: Limb) -> u32 {
    LIMB_BITS - x.leading_zeros()
}
