#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::{generate_canonical, BlockSource, Real};

/// Uniform distribution on the interval [a, b].
///
/// For all practical purposes samples lie in [a, b]. Round-off in `a + (b - a) * u`,
/// with `u` in [2^-65, 1], decides the exact ends: for a = 1.0, 1.0 + 2^-65 == 1.0,
/// while for small `a` the interval may become (a, b].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformDistribution<F: Real> {
    /// Left end point of the interval.
    a: F,
    /// Width of the interval.
    width: F,
}

impl<F: Real> UniformDistribution<F> {
    /// Creates the distribution on [a, b].
    #[inline]
    pub fn new(a: F, b: F) -> Self {
        UniformDistribution { a, width: b - a }
    }

    /// Draws one value, advancing `rng` by one block.
    #[inline]
    pub fn sample<R: BlockSource + ?Sized>(&self, rng: &mut R) -> F {
        self.a + self.width * generate_canonical::<F, R>(rng)
    }

    #[inline]
    pub fn a(&self) -> F {
        self.a
    }

    #[inline]
    pub fn b(&self) -> F {
        self.a + self.width
    }

    #[inline]
    pub fn width(&self) -> F {
        self.width
    }
}

/// The unit interval [0, 1].
impl Default for UniformDistribution<f32> {
    fn default() -> Self {
        UniformDistribution::new(0.0, 1.0)
    }
}

/// The unit interval [0, 1].
impl Default for UniformDistribution<f64> {
    fn default() -> Self {
        UniformDistribution::new(0.0, 1.0)
    }
}
