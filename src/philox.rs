use wrapping_arithmetic::wrappit;
use super::Permutation;

// Philox4x32 features
// -counter-based: a 128-bit counter and a 64-bit key are the whole state
// -a Feistel-like network of 32x32->64-bit multiplies, no tables, no branches
// -10 rounds pass BigCrush with a margin; fewer rounds are faster and weaker
// -from Salmon, J. K., Moraes, M. A., Dror, R. O. and Shaw, D. E.,
//  Parallel Random Numbers: As Easy as 1, 2, 3 (2011).

/// Round multipliers.
const PHILOX_M4X32_0: u32 = 0xd2511f53;
const PHILOX_M4X32_1: u32 = 0xcd9e8d57;

/// Key schedule increments (golden ratio and sqrt(3) - 1).
const PHILOX_W32_0: u32 = 0x9e3779b9;
const PHILOX_W32_1: u32 = 0xbb67ae85;

/// Philox4x32 keyed permutation with `ROUNDS` rounds (10 by default).
/// Output is bit-compatible with Random123's `philox4x32_R`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Philox4x32<const ROUNDS: usize = 10>;

impl<const ROUNDS: usize> Philox4x32<ROUNDS> {
    pub const fn new() -> Self {
        Philox4x32
    }
}

#[inline]
fn round(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    // 32x32 -> 64-bit products cannot overflow.
    let product0 = (ctr[0] as u64) * (PHILOX_M4X32_0 as u64);
    let product1 = (ctr[2] as u64) * (PHILOX_M4X32_1 as u64);
    [
        (product1 >> 32) as u32 ^ ctr[1] ^ key[0],
        product1 as u32,
        (product0 >> 32) as u32 ^ ctr[3] ^ key[1],
        product0 as u32,
    ]
}

#[wrappit] #[inline]
fn bump(key: [u32; 2]) -> [u32; 2] {
    [key[0] + PHILOX_W32_0, key[1] + PHILOX_W32_1]
}

impl<const ROUNDS: usize> Permutation for Philox4x32<ROUNDS> {
    #[inline]
    fn apply(&self, counter: [u32; 4], key: [u32; 2]) -> [u32; 4] {
        let mut ctr = counter;
        let mut key = key;
        for i in 0 .. ROUNDS {
            if i > 0 {
                key = bump(key);
            }
            ctr = round(ctr, key);
        }
        ctr
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn known_answers() {
        // Random123 kat_vectors, philox4x32 10 rounds.
        let philox = Philox4x32::<10>::new();
        assert_eq!([0x6627e8d5, 0xe169c58d, 0xbc57ac4c, 0x9b00dbd8], philox.apply([0; 4], [0; 2]));
        assert_eq!([0x408f276d, 0x41c83b0e, 0xa20bc7c6, 0x6d5451fd], philox.apply([u32::MAX; 4], [u32::MAX; 2]));
        assert_eq!([0xd16cfe09, 0x94fdcceb, 0x5001e420, 0x24126ea1],
            philox.apply([0x243f6a88, 0x85a308d3, 0x13198a2e, 0x03707344], [0xa4093822, 0x299f31d0]));
    }

    #[test] fn rounds() {
        let ten: Philox4x32 = Philox4x32::default();
        assert_eq!(ten.apply([1, 2, 3, 4], [5, 6]), Philox4x32::<10>::new().apply([1, 2, 3, 4], [5, 6]));
        assert_ne!(ten.apply([1, 2, 3, 4], [5, 6]), Philox4x32::<7>::new().apply([1, 2, 3, 4], [5, 6]));
        assert_eq!([1, 2, 3, 4], Philox4x32::<0>::new().apply([1, 2, 3, 4], [5, 6]));
        assert_eq!(round([1, 2, 3, 4], [5, 6]), Philox4x32::<1>::new().apply([1, 2, 3, 4], [5, 6]));
    }

    #[test] fn key_and_counter_sensitivity() {
        let mut r: u64 = 0;
        let mut rnd = || -> u32 { r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff); (r >> 32) as u32 };
        let philox = Philox4x32::<10>::new();

        for _ in 0 .. 1 << 10 {
            let ctr = [rnd(), rnd(), rnd(), rnd()];
            let key = [rnd(), rnd()];
            let out = philox.apply(ctr, key);
            assert_eq!(out, philox.apply(ctr, key));
            for bit in 0 .. 128 {
                let mut flipped = ctr;
                flipped[bit / 32] ^= 1 << (bit % 32);
                assert_ne!(out, philox.apply(flipped, key));
            }
            for bit in 0 .. 64 {
                let mut flipped = key;
                flipped[bit / 32] ^= 1 << (bit % 32);
                assert_ne!(out, philox.apply(ctr, flipped));
            }
        }
    }
}
