//! Random integers from an injected generator.

use super::Int;
use crate::limb::{LIMB_BITS, LIMB_BYTES, Limb};
use crate::rng::Rng;
use core::cmp::Ordering;

impl Int {
    /// A uniformly random integer in `[0, 2^bits)`.
    pub fn urandomb<R: Rng>(rng: &mut R, bits: u64) -> Int {
        let nlimbs = (bits.div_ceil(LIMB_BITS as u64)) as usize;

        if nlimbs == 0 {
            return Int::new();
        }

        let mut bytes = vec![0u8; nlimbs * LIMB_BYTES];
        rng.fill_bytes(&mut bytes);

        let mut limbs = vec![0 as Limb; nlimbs];

        for (i, chunk) in bytes.chunks_exact(LIMB_BYTES).enumerate() {
            let mut w: Limb = 0;

            for (j, &b) in chunk.iter().enumerate() {
                w |= (b as Limb) << (8 * j);
            }

            limbs[i] = w;
        }

        // Mask the partial top limb.
        let top = (bits % LIMB_BITS as u64) as u32;

        if top != 0 {
            limbs[nlimbs - 1] &= Limb::MAX >> (LIMB_BITS - top);
        }

        Int::from_raw(limbs, false)
    }

    /// A uniformly random integer in `[0, m)` by rejection sampling;
    /// aborts unless `m > 0`.
    pub fn urandomm<R: Rng>(rng: &mut R, m: &Int) -> Int {
        assert!(m.sgn() > 0, "bound must be positive");

        let bits = m.bitlen();

        loop {
            let r = Int::urandomb(rng, bits);

            if r.cmp(m) == Ordering::Less {
                return r;
            }
        }
    }
}
