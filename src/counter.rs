#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Initial 128-bit counter of a random stream.
///
/// Up to three 32-bit identifiers (particle tag, pair index, pass number...)
/// and one narrow 16-bit field distinguish streams that share a [`Seed`](crate::Seed).
/// The words are stored as `[d << 16, c, b, a]`; the generator advances the
/// first word, so the low 16 bits left free below `d` are the only headroom
/// that field has. Only use `d` when the stream needs no more than 65536
/// values. This is not checked.
///
/// Unset fields default to zero: `Counter::from(a)`, `Counter::from((a, b))`
/// and `Counter::from((a, b, c))` fill in the rest.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Counter {
    ctr: [u32; 4],
}

impl Counter {
    #[inline]
    pub fn new(a: u32, b: u32, c: u32, d: u16) -> Self {
        Counter { ctr: [(d as u32) << 16, c, b, a] }
    }

    /// Returns the counter words, in the order the permutation consumes them.
    #[inline]
    pub fn counter(&self) -> [u32; 4] {
        self.ctr
    }
}

impl From<u32> for Counter {
    #[inline]
    fn from(a: u32) -> Self {
        Counter::new(a, 0, 0, 0)
    }
}

impl From<(u32, u32)> for Counter {
    #[inline]
    fn from((a, b): (u32, u32)) -> Self {
        Counter::new(a, b, 0, 0)
    }
}

impl From<(u32, u32, u32)> for Counter {
    #[inline]
    fn from((a, b, c): (u32, u32, u32)) -> Self {
        Counter::new(a, b, c, 0)
    }
}

impl From<(u32, u32, u32, u16)> for Counter {
    #[inline]
    fn from((a, b, c, d): (u32, u32, u32, u16)) -> Self {
        Counter::new(a, b, c, d)
    }
}
