//! The evolutionary core.
//!
//! [`Chromosome`] is the genetic unit: a gene string plus its fitness.
//! [`Population`] owns an ordered collection of chromosomes and a fixed
//! target, and drives the generational loop: fitness evaluation,
//! ranking, mating, replacement, mutation, convergence detection.
//!
//! # Key Types
//!
//! - [`Chromosome`]: Genes + fitness, with crossover/mutation operators
//! - [`Population`]: The generational control loop
//! - [`GENES`]: The fixed mutation alphabet (printable ASCII)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod chromosome;
mod population;

pub use chromosome::{Chromosome, GENES};
pub use population::{Population, DEFAULT_MUTATION_RATE};
