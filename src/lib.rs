//! Arbitrary-precision integer arithmetic
//!
//! This crate is a from-scratch implementation of the classical bignum
//! tool chest: natural-number kernels on raw limb buffers, a signed
//! big-integer type with automatic storage growth, and the modular and
//! number-theoretic machinery needed by elliptic-curve, RSA, and
//! prime-generation stacks.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on chasing asymptotically faster multiplication. All arithmetic is
//! schoolbook, all carry chains are explicit, and the crate is free of
//! runtime dependencies so that every instruction executed on secret data
//! can be read in one place.
//!
//! # Module overview
//!
//! - `limb`
//!   Single-word primitives: carrying add/sub, wide multiply and square,
//!   bit counting, and the precomputed reciprocals (2-by-1, 3-by-2, and
//!   the inverse modulo the word base) that drive the division engine.
//!
//! - `nat`
//!   The natural-number layer. Fixed-length kernels over caller-owned limb
//!   slices: add, subtract, multiply, square, shift, pointwise logical
//!   ops, comparison, and bit scanning. On top of those sit the division
//!   engine (Knuth Algorithm D over reciprocal-based small division),
//!   Barrett and Montgomery reduction, sliding-window and constant-time
//!   fixed-window modular exponentiation, byte import/export, and the
//!   constant-time toolkit used by side-channel-sensitive callers.
//!
//! - `int`
//!   The signed big-integer layer. [`int::Int`] owns a growable limb
//!   buffer plus a signed limb count and dispatches into `nat`. It covers
//!   the full arithmetic surface (three division families, exact division,
//!   two's-complement bitwise operations over negatives, bit manipulation,
//!   roots, GCD and modular inverses, Jacobi symbols, modular square
//!   roots, primality testing, random generation, sequences, and the
//!   string/byte codecs).
//!
//! - `rng`
//!   The randomness injection seam. The crate never gathers entropy on its
//!   own; primality testing and random-integer generation consume any
//!   caller-supplied [`rng::Rng`].
//!
//! # Design goals
//!
//! - No runtime dependencies
//! - Explicit carry and borrow propagation everywhere
//! - Constant-time variants with no secret-dependent branches or indexing
//! - Misuse (division by zero, non-odd modulus where oddness is required)
//!   aborts; domain failures (no inverse, no square root, invalid digit)
//!   are ordinary return values
//!
//! The limb width follows the target: 64-bit limbs by default, 32-bit
//! limbs on 32-bit targets or when the `limb32` feature is enabled.

pub mod int;
pub mod limb;
pub mod nat;
pub mod rng;

pub use int::{Int, IntRef};
pub use rng::Rng;
