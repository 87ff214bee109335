use wrapping_arithmetic::wrappit;
use super::{Block, Counter, Permutation, Philox4x32, Real, Seed};

/// Source of 128-bit permutation blocks.
/// Draw helpers and distributions take their randomness from here.
pub trait BlockSource {
    /// Returns the next block, advancing the source by one step.
    fn draw(&mut self) -> Block;
}

impl<R: BlockSource + ?Sized> BlockSource for &mut R {
    #[inline]
    fn draw(&mut self) -> Block {
        (**self).draw()
    }
}

/// Counter-based random number generator.
///
/// The generator holds a key, copied from a [`Seed`], and a counter, copied from a
/// [`Counter`]. Each draw applies the permutation to (counter, key) and then adds one
/// to the first counter word. The other words never change, so a stream is good for
/// 2^32 draws; after that the first word wraps around and the stream repeats.
/// That limit is the caller's to respect.
///
/// Generators are cheap to build and are meant to be built right where randomness is
/// needed, one per particle, thread or other unit of parallel work, and dropped
/// afterwards. Output depends only on the seed and counter, never on scheduling:
/// simulations are reproducible at any degree of parallelism as long as no two
/// units share a (seed, counter) origin.
///
/// Counter-based generators for particle simulation are discussed in
///
/// C. L. Phillips, J. A. Anderson and S. C. Glotzer, Pseudo-random number generation
/// for Brownian Dynamics and Dissipative Particle Dynamics simulations on GPU devices,
/// J. Comput. Phys. 230, 7191-7201 (2011).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generator<P: Permutation = Philox4x32> {
    /// Key, fixed at construction.
    key: [u32; 2],
    /// Counter, first word advances.
    ctr: [u32; 4],
    permutation: P,
}

impl Generator<Philox4x32> {
    /// Creates a Philox4x32-10 generator positioned at the start of the
    /// stream addressed by `seed` and `counter`.
    #[inline]
    pub fn new(seed: &Seed, counter: &Counter) -> Self {
        Generator::with_permutation(seed, counter, Philox4x32::new())
    }
}

impl<P: Permutation> Generator<P> {
    /// Creates a generator over an arbitrary permutation.
    #[inline]
    pub fn with_permutation(seed: &Seed, counter: &Counter, permutation: P) -> Self {
        Generator { key: seed.key(), ctr: counter.counter(), permutation }
    }

    /// Returns the next 128-bit block and advances the counter.
    #[wrappit] #[inline]
    pub fn draw(&mut self) -> Block {
        let block = Block(self.permutation.apply(self.ctr, self.key));
        self.ctr[0] = self.ctr[0] + 1;
        block
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> [u32; 2] {
        self.key
    }

    /// Returns the current counter, which addresses the next block.
    #[inline]
    pub fn counter(&self) -> [u32; 4] {
        self.ctr
    }

    #[inline]
    pub fn permutation(&self) -> &P {
        &self.permutation
    }
}

impl<P: Permutation> BlockSource for Generator<P> {
    #[inline]
    fn draw(&mut self) -> Block {
        Generator::draw(self)
    }
}

/// Generates a uniform random `u32` from one block.
#[inline]
pub fn generate_u32<R: BlockSource + ?Sized>(rng: &mut R) -> u32 {
    rng.draw().u32()
}

/// Generates a uniform random `u64` from one block.
#[inline]
pub fn generate_u64<R: BlockSource + ?Sized>(rng: &mut R) -> u64 {
    rng.draw().u64()
}

/// Generates two uniform random `u64`s from one block.
#[inline]
pub fn generate_two_u64<R: BlockSource + ?Sized>(rng: &mut R) -> (u64, u64) {
    rng.draw().two_u64()
}

/// Generates a uniform random value in [2^-65, 1] from one block.
#[inline]
pub fn generate_canonical<F: Real, R: BlockSource + ?Sized>(rng: &mut R) -> F {
    F::uniform01(generate_u64(rng))
}

use super::{RngCore, Error};
use rand_core::block::BlockRngCore;

impl<P: Permutation> RngCore for Generator<P> {
    fn next_u32(&mut self) -> u32 {
        generate_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        generate_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(16) {
            let bytes = self.draw().to_le_bytes();
            // Always use Little-Endian.
            chunk.copy_from_slice(&bytes[0 .. chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Lets a generator feed `rand_core::block::BlockRng`, which hands out all four
/// lanes of each block one by one.
impl<P: Permutation> BlockRngCore for Generator<P> {
    type Item = u32;
    type Results = [u32; 4];

    #[inline]
    fn generate(&mut self, results: &mut Self::Results) {
        *results = self.draw().0;
    }
}
