//! Genetic-algorithm string evolution.
//!
//! Evolves a population of candidate strings toward a fixed target string:
//! random initialization, a fuzzy-string-similarity fitness function,
//! single-point crossover, probabilistic single-gene mutation, and
//! generational replacement until some member matches the target exactly.
//!
//! # Components
//!
//! - [`similarity`]: Approximate string matching: a greedy left-to-right
//!   character-alignment heuristic with accumulated penalties and bonuses.
//! - [`random`]: Seedable random source plus uniform random strings and
//!   in-place string shuffling.
//! - [`genetics`]: The evolutionary core: [`genetics::Chromosome`]
//!   (genes + fitness, crossover/mutation operators) and
//!   [`genetics::Population`] (the generational loop).
//!
//! # Determinism
//!
//! Every randomized operation takes an explicit `&mut impl Rng`, so runs
//! are reproducible under a single stream created once with
//! [`random::create_rng`] and never reseeded mid-run. The core is fully
//! synchronous and single-threaded; a driver that shares a `Population`
//! across threads must confine it or synchronize both the member sequence
//! and the random source.
//!
//! # Example
//!
//! ```
//! use strevo::genetics::{Chromosome, Population};
//! use strevo::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let target = Chromosome::new(1.0, "Hi");
//! let mut population = Population::new(target);
//! population.populate(10, &mut rng).unwrap();
//!
//! let mut converged = false;
//! for _ in 0..100_000 {
//!     if population.step(&mut rng).unwrap() {
//!         converged = true;
//!         break;
//!     }
//! }
//! assert!(converged);
//! ```

pub mod error;
pub mod genetics;
pub mod random;
pub mod similarity;

pub use error::{Error, Result};
