//! The genetic unit: a gene string and its fitness.

use crate::error::{Error, Result};
use crate::random::{random_string, shuffle_string};
use crate::similarity::Scorer;
use rand::Rng;

/// The fixed mutation alphabet: all 95 printable ASCII characters from
/// space (0x20) through tilde (0x7E).
pub const GENES: &str =
    " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// A candidate solution: an ordered gene string plus a fitness value.
///
/// Fitness is recomputed every generation via [`evaluate`](Self::evaluate)
/// and is not meaningful after a structural change (crossover produces
/// children with fitness `0.0`, unevaluated).
///
/// Within a [`Population`](super::Population) every chromosome carries
/// the same gene count as the target; the length is fixed at creation by
/// [`randomize`](Self::randomize) and preserved by every operator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    fitness: f64,
    genes: String,
}

impl Chromosome {
    /// Creates a chromosome with explicit fitness and genes.
    ///
    /// Used for the target (fitness preset to `1.0` by the driver) and
    /// for seeding known populations in tests.
    pub fn new(fitness: f64, genes: impl Into<String>) -> Self {
        Self {
            fitness,
            genes: genes.into(),
        }
    }

    /// Returns the current fitness of this chromosome.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Returns the gene string.
    pub fn genes(&self) -> &str {
        &self.genes
    }

    /// Returns the number of genes.
    pub fn len(&self) -> usize {
        self.genes.chars().count()
    }

    /// Returns `true` when the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Recomputes fitness against `target`: the fuzzy similarity score
    /// minus, for every gene position, the squared difference of the two
    /// character codes. Higher is better; `1.0` is an exact match.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] when the two gene strings differ in
    /// length; the per-position distance is undefined in that case.
    pub fn evaluate(&mut self, target: &Chromosome, scorer: &Scorer) -> Result<()> {
        let own_len = self.len();
        let target_len = target.len();
        if own_len != target_len {
            return Err(Error::LengthMismatch {
                candidate: own_len,
                target: target_len,
            });
        }

        let mut fitness = scorer.score(&self.genes, &target.genes)?;

        for (own, tgt) in self.genes.chars().zip(target.genes.chars()) {
            let distance = own as i64 - tgt as i64;
            fitness -= (distance * distance) as f64;
        }

        self.fitness = fitness;
        Ok(())
    }

    /// Single-point crossover: both parents split at their own midpoint
    /// (rounding down) and the tails are exchanged.
    ///
    /// Returns `(ownHead + otherTail, otherHead + ownTail)`, both with
    /// fitness `0.0` (unevaluated). Parents of unequal length produce
    /// children of non-uniform length, which breaks the population-wide
    /// fixed-length invariant; keeping lengths equal is the caller's
    /// responsibility.
    pub fn mate(&self, other: &Chromosome) -> (Chromosome, Chromosome) {
        let own: Vec<char> = self.genes.chars().collect();
        let theirs: Vec<char> = other.genes.chars().collect();
        let own_mid = own.len() / 2;
        let their_mid = theirs.len() / 2;

        let first: String = own[..own_mid].iter().chain(theirs[their_mid..].iter()).collect();
        let second: String = theirs[..their_mid].iter().chain(own[own_mid..].iter()).collect();

        (Chromosome::new(0.0, first), Chromosome::new(0.0, second))
    }

    /// With chance `probability`, overwrites one uniformly random gene
    /// position with a uniformly random character from [`GENES`].
    ///
    /// At most one position changes per call. Exactly one uniform draw
    /// in `[0, 1)` decides whether the mutation happens at all.
    pub fn mutate<R: Rng>(&mut self, probability: f64, rng: &mut R) {
        if rng.random_range(0.0..1.0) >= probability {
            return;
        }

        let mut genes: Vec<char> = self.genes.chars().collect();
        if genes.is_empty() {
            return;
        }

        let position = rng.random_range(0..genes.len());
        let symbol = GENES.as_bytes()[rng.random_range(0..GENES.len())] as char;
        genes[position] = symbol;
        self.genes = genes.into_iter().collect();
    }

    /// Replaces the genes with `n` random characters from [`GENES`].
    pub fn randomize<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<()> {
        self.genes = random_string(n, GENES, rng)?;
        Ok(())
    }

    /// Replaces the genes with a uniformly random permutation of
    /// themselves.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.genes = shuffle_string(&self.genes, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_genes_alphabet() {
        assert_eq!(GENES.len(), 95);
        assert!(GENES.starts_with(' '));
        assert!(GENES.ends_with('~'));
        assert!(GENES.is_ascii());
    }

    #[test]
    fn test_new_and_accessors() {
        let c = Chromosome::new(1.0, "genes");
        assert_eq!(c.fitness(), 1.0);
        assert_eq!(c.genes(), "genes");
        assert_eq!(c.len(), 5);
        assert!(!c.is_empty());
    }

    #[test]
    fn test_evaluate_exact_match() {
        let target = Chromosome::new(1.0, "abc");
        let mut c = Chromosome::new(0.0, "abc");
        c.evaluate(&target, &Scorer::default()).unwrap();
        assert_eq!(c.fitness(), 1.0);
    }

    #[test]
    fn test_evaluate_one_character_off() {
        // Similarity 0.50555…, minus a squared code distance of 1 for the
        // final position, regardless of the mismatch direction.
        let target = Chromosome::new(1.0, "abc");
        let expected = -0.49444444444444446;

        for genes in ["abb", "abd"] {
            let mut c = Chromosome::new(0.0, genes);
            c.evaluate(&target, &Scorer::default()).unwrap();
            assert!(
                (c.fitness() - expected).abs() < EPS,
                "{genes}: expected {expected}, got {}",
                c.fitness()
            );
        }
    }

    #[test]
    fn test_evaluate_distance_dominates() {
        let target = Chromosome::new(1.0, "aa");
        let mut near = Chromosome::new(0.0, "ab");
        let mut far = Chromosome::new(0.0, "az");
        near.evaluate(&target, &Scorer::default()).unwrap();
        far.evaluate(&target, &Scorer::default()).unwrap();
        assert!(near.fitness() > far.fitness());
    }

    #[test]
    fn test_evaluate_length_mismatch() {
        let target = Chromosome::new(1.0, "abc");
        let mut c = Chromosome::new(0.0, "ab");
        assert_eq!(
            c.evaluate(&target, &Scorer::default()),
            Err(Error::LengthMismatch {
                candidate: 2,
                target: 3,
            })
        );
    }

    #[test]
    fn test_mate_exchanges_halves() {
        let p1 = Chromosome::new(0.0, "parthalf");
        let p2 = Chromosome::new(0.0, "halfpart");
        let (a, b) = p1.mate(&p2);
        assert_eq!(a.genes(), "partpart");
        assert_eq!(b.genes(), "halfhalf");
        assert_eq!(a.fitness(), 0.0);
        assert_eq!(b.fitness(), 0.0);
    }

    #[test]
    fn test_mate_odd_lengths() {
        // Midpoints round down; total gene count is conserved.
        let p1 = Chromosome::new(0.0, "abc");
        let p2 = Chromosome::new(0.0, "de");
        let (a, b) = p1.mate(&p2);
        assert_eq!(a.genes(), "ae");
        assert_eq!(b.genes(), "dbc");
        assert_eq!(a.len() + b.len(), p1.len() + p2.len());
    }

    #[test]
    fn test_mutate_changes_at_most_one_position() {
        let mut rng = create_rng(42);
        // Genes deliberately outside the mutation alphabet, so any
        // mutation is visible as exactly one differing position.
        let original = "\u{1}\u{1}\u{1}\u{1}\u{1}";

        for _ in 0..200 {
            let mut c = Chromosome::new(0.0, original);
            c.mutate(0.5, &mut rng);
            let diffs: Vec<(usize, char)> = c
                .genes()
                .chars()
                .enumerate()
                .filter(|&(i, g)| original.chars().nth(i) != Some(g))
                .collect();
            assert!(diffs.len() <= 1, "more than one position changed: {diffs:?}");
            for (_, g) in diffs {
                assert!(GENES.contains(g), "mutated to {g:?}, not in the alphabet");
            }
        }
    }

    #[test]
    fn test_mutate_zero_probability_is_identity() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(0.0, "stable");
        for _ in 0..100 {
            c.mutate(0.0, &mut rng);
        }
        assert_eq!(c.genes(), "stable");
    }

    #[test]
    fn test_mutate_certain_probability_draws_from_alphabet() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(0.0, "\u{1}\u{1}\u{1}");
        c.mutate(1.0, &mut rng);
        let changed: Vec<char> = c.genes().chars().filter(|&g| g != '\u{1}').collect();
        assert_eq!(changed.len(), 1);
        assert!(GENES.contains(changed[0]));
    }

    #[test]
    fn test_mutate_empty_genes_is_noop() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(0.0, "");
        c.mutate(1.0, &mut rng);
        assert_eq!(c.genes(), "");
    }

    #[test]
    fn test_randomize_length_and_alphabet() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(0.0, "");
        c.randomize(16, &mut rng).unwrap();
        assert_eq!(c.len(), 16);
        assert!(c.genes().chars().all(|g| GENES.contains(g)));
    }

    #[test]
    fn test_randomize_reproducible() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        let mut c1 = Chromosome::new(0.0, "");
        let mut c2 = Chromosome::new(0.0, "");
        c1.randomize(12, &mut a).unwrap();
        c2.randomize(12, &mut b).unwrap();
        assert_eq!(c1.genes(), c2.genes());
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(0.0, "shuffle");
        c.shuffle(&mut rng);
        let mut before: Vec<char> = "shuffle".chars().collect();
        let mut after: Vec<char> = c.genes().chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    proptest! {
        #[test]
        fn prop_mate_conserves_total_length(
            g1 in "[ -~]{0,32}",
            g2 in "[ -~]{0,32}",
        ) {
            let p1 = Chromosome::new(0.0, g1.clone());
            let p2 = Chromosome::new(0.0, g2.clone());
            let (a, b) = p1.mate(&p2);

            prop_assert_eq!(a.len() + b.len(), p1.len() + p2.len());

            let mid1 = g1.chars().count() / 2;
            let mid2 = g2.chars().count() / 2;
            let head1: String = g1.chars().take(mid1).collect();
            let tail2: String = g2.chars().skip(mid2).collect();
            let head2: String = g2.chars().take(mid2).collect();
            let tail1: String = g1.chars().skip(mid1).collect();
            prop_assert_eq!(a.genes(), format!("{head1}{tail2}"));
            prop_assert_eq!(b.genes(), format!("{head2}{tail1}"));
        }

        #[test]
        fn prop_mutate_stays_within_alphabet(
            seed in 0u64..500,
            genes in "[ -~]{1,16}",
        ) {
            let mut rng = create_rng(seed);
            let mut c = Chromosome::new(0.0, genes.clone());
            c.mutate(1.0, &mut rng);

            prop_assert_eq!(c.len(), genes.chars().count());
            prop_assert!(c.genes().chars().all(|g| GENES.contains(g)));
            let diffs = c
                .genes()
                .chars()
                .zip(genes.chars())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert!(diffs <= 1);
        }
    }
}
