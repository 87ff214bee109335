#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// First class id available outside this crate's own subsystems.
/// Built-in users of the generator take ids below this value; external
/// extensions must pick ids at or above it.
pub const EXTERNAL_CLASS_ID: u8 = 200;

/// 64-bit generator key derived from a class id, a timestep and a user seed.
///
/// The key is 8 bytes, laid out big-endian over two 32-bit words:
///
/// ```text
/// id seed1 seed0 timestep4 | timestep3 timestep2 timestep1 timestep0
/// ```
///
/// Only the lower 5 bytes of the timestep are kept, so timesteps 2^40 apart
/// share a key. Every subsystem drawing random numbers must use its own class
/// id; two subsystems sharing an id produce correlated streams. When several
/// instances of one subsystem draw at the same timestep, they must be told
/// apart through the [`Counter`](crate::Counter).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Seed {
    key: [u32; 2],
}

impl Seed {
    /// Creates the key for subsystem `class_id` at `timestep` under user seed `seed`.
    #[inline]
    pub fn new(class_id: u8, timestep: u64, seed: u16) -> Self {
        let high = (class_id as u32) << 24
            | (seed as u32) << 8
            | ((timestep >> 32) & 0xff) as u32;
        let low = (timestep & 0xffff_ffff) as u32;
        Seed { key: [high, low] }
    }

    /// Returns the key words, high word first.
    #[inline]
    pub fn key(&self) -> [u32; 2] {
        self.key
    }

    /// Returns the class id the key was made for.
    #[inline]
    pub fn class_id(&self) -> u8 {
        (self.key[0] >> 24) as u8
    }

    /// Returns the user seed the key was made for.
    #[inline]
    pub fn user_seed(&self) -> u16 {
        (self.key[0] >> 8) as u16
    }

    /// Returns the 40 timestep bits retained in the key.
    #[inline]
    pub fn timestep_bits(&self) -> u64 {
        ((self.key[0] & 0xff) as u64) << 32 | self.key[1] as u64
    }
}
