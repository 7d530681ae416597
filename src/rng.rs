//! Randomness injection.
//!
//! The numeric engine never gathers entropy itself. Every operation that
//! needs random bytes (Miller–Rabin base sampling, uniform random
//! integers, random prime search) takes a caller-supplied generator
//! through this trait. The caller decides whether that generator is a
//! CSPRNG, a DRBG under test vectors, or a seeded deterministic stream.

/// Byte-oriented random source.
///
/// Implementations must fill the entire buffer. The crate treats the
/// output as uniformly distributed; a biased generator degrades the
/// statistical guarantees of the primality tests accordingly.
pub trait Rng {
    /// Fills `buf` with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

impl<T: Rng + ?Sized> Rng for &mut T {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        (**self).fill_bytes(buf)
    }
}
