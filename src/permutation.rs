#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Keyed bijection on 128-bit counters: the primitive a counter-based generator is built on.
///
/// Implementations must be deterministic and bijective for each key, and their output
/// must pass the usual statistical test batteries when the counter is incremented.
/// They carry no per-stream state; a key and a counter are all they see.
pub trait Permutation {
    /// Maps `counter` to a random block under `key`.
    fn apply(&self, counter: [u32; 4], key: [u32; 2]) -> [u32; 4];
}

impl<P: Permutation + ?Sized> Permutation for &P {
    #[inline]
    fn apply(&self, counter: [u32; 4], key: [u32; 2]) -> [u32; 4] {
        (**self).apply(counter, key)
    }
}

/// One 128-bit output of a permutation, as four 32-bit lanes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Block(pub [u32; 4]);

impl Block {
    /// The first lane.
    #[inline]
    pub fn u32(&self) -> u32 {
        self.0[0]
    }

    /// The first two lanes, first lane in the high bits.
    #[inline]
    pub fn u64(&self) -> u64 {
        (self.0[0] as u64) << 32 | self.0[1] as u64
    }

    /// Two independent 64-bit values from lanes (0, 1) and (2, 3).
    #[inline]
    pub fn two_u64(&self) -> (u64, u64) {
        ((self.0[0] as u64) << 32 | self.0[1] as u64, (self.0[2] as u64) << 32 | self.0[3] as u64)
    }

    /// The lanes in order, each little-endian.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (chunk, lane) in bytes.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        bytes
    }
}

impl From<[u32; 4]> for Block {
    #[inline]
    fn from(lanes: [u32; 4]) -> Self {
        Block(lanes)
    }
}
