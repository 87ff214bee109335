#![no_std]

//! Counter-based random number streams for parallel simulation.
//!
//! A stream is addressed by a [`Seed`], built from a subsystem class id, the
//! timestep and a user seed, and by a [`Counter`] holding whatever identifies
//! the unit of work (particle tag, pair index, pass number). A [`Generator`]
//! built from the pair produces 128-bit blocks by applying a keyed
//! [`Permutation`] (Philox4x32-10 by default) to successive counters. Nothing
//! is stored between timesteps and nothing is shared between threads.
//!
//! ```
//! use rand_cbrng::*;
//!
//! let seed = Seed::new(EXTERNAL_CLASS_ID, 1000, 42);
//! let mut rng = Generator::new(&seed, &Counter::from(7));
//! let velocity = UniformDistribution::new(-1.0f64, 1.0).sample(&mut rng);
//! assert!((-1.0 ..= 1.0).contains(&velocity));
//! ```

pub mod convert;
pub mod counter;
pub mod generator;
pub mod permutation;
pub mod philox;
pub mod seed;
pub mod uniform;

pub use convert::*;
pub use counter::*;
pub use generator::*;
pub use permutation::*;
pub use philox::*;
pub use seed::*;
pub use uniform::*;
pub use rand_core::*;
