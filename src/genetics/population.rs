//! The generational control loop.

use std::fmt;

use log::debug;
use rand::Rng;

use super::chromosome::Chromosome;
use crate::error::Result;
use crate::similarity::Scorer;

/// Default probability that a member mutates during a generation step.
pub const DEFAULT_MUTATION_RATE: f64 = 0.25;

/// An ordered collection of chromosomes evolving toward a fixed target.
///
/// Each [`step`](Self::step) evaluates every member against the target,
/// ranks the population, replaces the two weakest members with two
/// children of the two strongest, mutates every member probabilistically,
/// and reports whether any member now matches the target exactly. The
/// member count is constant across steps and the members are sorted
/// ascending by fitness after every step.
///
/// There is no generation cap: absent convergence the caller invokes
/// [`step`](Self::step) repeatedly, and termination policy beyond "did we
/// match" belongs to the driver.
///
/// # Examples
///
/// ```
/// use strevo::genetics::{Chromosome, Population};
/// use strevo::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut population = Population::new(Chromosome::new(1.0, "ok"));
/// population.populate(8, &mut rng).unwrap();
///
/// for _ in 0..100_000 {
///     if population.step(&mut rng).unwrap() {
///         break;
///     }
/// }
/// println!("{population}");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    generation: usize,
    members: Vec<Chromosome>,
    target: Chromosome,
    scorer: Scorer,
    mutation_rate: f64,
}

impl Population {
    /// Creates an empty population bound to `target`.
    ///
    /// The target is immutable from here on; by convention the driver
    /// presets its fitness to `1.0`.
    pub fn new(target: Chromosome) -> Self {
        Self {
            generation: 0,
            members: Vec::new(),
            target,
            scorer: Scorer::default(),
            mutation_rate: DEFAULT_MUTATION_RATE,
        }
    }

    /// Sets the similarity scorer used for fitness evaluation.
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Sets the per-member mutation probability, clamped to `0.0..=1.0`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Returns the number of completed generation steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the members, sorted ascending by fitness after a step.
    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    /// Returns the target chromosome.
    pub fn target(&self) -> &Chromosome {
        &self.target
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the member with the highest fitness, if any.
    pub fn best(&self) -> Option<&Chromosome> {
        self.members.iter().max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Returns `true` when some member's genes exactly equal the
    /// target's genes (case- and character-sensitive).
    pub fn is_converged(&self) -> bool {
        self.members
            .iter()
            .any(|member| member.genes() == self.target.genes())
    }

    /// Appends `n` members with random genes of the target's gene
    /// length, each with fitness `0.0`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::EmptyAlphabet`](crate::Error::EmptyAlphabet)
    /// from random-string generation.
    pub fn populate<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<()> {
        let gene_count = self.target.len();
        self.members.reserve(n);

        for _ in 0..n {
            let mut member = Chromosome::new(0.0, "");
            member.randomize(gene_count, rng)?;
            self.members.push(member);
        }

        debug!("populated {n} members with {gene_count} genes each");
        Ok(())
    }

    /// Runs one generation and reports whether the population converged.
    ///
    /// 1. Evaluate every member against the target.
    /// 2. Sort ascending by fitness.
    /// 3. Mate the two fittest members, producing two children.
    /// 4. Drop the two weakest members and append the children, so the
    ///    member count is preserved.
    /// 5. Mutate every member with the configured probability, then
    ///    re-evaluate it.
    /// 6. Converged iff any member now equals the target exactly.
    /// 7. Increment the generation counter unconditionally.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`](crate::Error::LengthMismatch) when a
    /// member's gene count differs from the target's.
    ///
    /// # Panics
    ///
    /// Panics when the population has fewer than two members.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<bool> {
        assert!(
            self.members.len() >= 2,
            "cannot step a population with fewer than two members"
        );

        for member in &mut self.members {
            member.evaluate(&self.target, &self.scorer)?;
        }
        self.sort_by_fitness();

        let count = self.members.len();
        let (child_a, child_b) = self.members[count - 1].mate(&self.members[count - 2]);
        self.members.drain(..2);
        self.members.push(child_a);
        self.members.push(child_b);

        let mut converged = false;
        for member in &mut self.members {
            member.mutate(self.mutation_rate, rng);
            member.evaluate(&self.target, &self.scorer)?;

            if member.genes() == self.target.genes() {
                converged = true;
            }
        }

        self.sort_by_fitness();
        self.generation += 1;

        if converged {
            debug!("converged after {} generations", self.generation);
        }

        Ok(converged)
    }

    fn sort_by_fitness(&mut self) {
        self.members.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

/// Renders the generation counter followed by one `{genes} - {fitness}`
/// line per member. The destination and cadence are the driver's choice.
impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;

        for member in &self.members {
            writeln!(f, "{} - {}", member.genes(), member.fitness())?;
        }

        Ok(())
    }
}
