//! Integer-vector genetic operators.
//!
//! Crossover, mutation and repair operators for chromosomes encoded as
//! `&[usize]` with every gene in `0..upper`. Duplicate genes are allowed.
//! The order-based, partially-mapped and position-based crossovers keep
//! each parent's gene multiset, so permutations stay permutations.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails at the midpoint
//! - [`uniform_crossover`]: fair coin per position
//! - [`order_based_crossover`]: reorder a random subset of positions by the
//!   other parent's ordering (Syswerda, 1991)
//! - [`partially_mapped_crossover`]: swap-based PMX over a random segment
//!   (Goldberg & Lingle, 1985)
//! - [`position_based_crossover`]: keep a few positions, fill the rest in
//!   the other parent's order
//!
//! # Mutation / Repair
//!
//! - [`reset_mutation`]: overwrite one random position, O(1)
//! - [`swap_mutation`]: exchange two distinct positions, O(1)
//! - [`scrambled_identity`]: identity permutation shuffled by swaps
//! - [`repair_duplicates`]: bounded reassignment of duplicated genes

use super::error::GaError;
use rand::Rng;

/// Crossover policy for integer-vector chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// See [`single_point_crossover`].
    #[default]
    SinglePoint,
    /// See [`uniform_crossover`].
    Uniform,
    /// See [`order_based_crossover`].
    OrderBased,
    /// See [`partially_mapped_crossover`].
    PartiallyMapped,
    /// See [`position_based_crossover`].
    PositionBased,
}

impl Crossover {
    /// Recombines two parents into two children.
    pub fn apply<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        match self {
            Crossover::SinglePoint => single_point_crossover(parent1, parent2),
            Crossover::Uniform => uniform_crossover(parent1, parent2, rng),
            Crossover::OrderBased => order_based_crossover(parent1, parent2, rng),
            Crossover::PartiallyMapped => partially_mapped_crossover(parent1, parent2, rng),
            Crossover::PositionBased => position_based_crossover(parent1, parent2, rng),
        }
    }
}

/// Mutation policy for integer-vector chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// See [`reset_mutation`].
    #[default]
    Reset,
    /// See [`swap_mutation`].
    Swap,
}

impl Mutation {
    /// Mutates `genes` in place; `upper` bounds reset values.
    pub fn apply<R: Rng>(&self, genes: &mut [usize], upper: usize, rng: &mut R) {
        match self {
            Mutation::Reset => reset_mutation(genes, upper, rng),
            Mutation::Swap => swap_mutation(genes, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at `len / 2`.
///
/// child1 = head of parent1 + tail of parent2, child2 is the mirror.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover(parent1: &[usize], parent2: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let half = n / 2;
    let child1 = [&parent1[..half], &parent2[half..]].concat();
    let child2 = [&parent2[..half], &parent1[half..]].concat();
    (child1, child2)
}

/// Uniform crossover: at each position a fair coin decides whether the
/// children swap parent sources.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    for i in 0..n {
        if rng.random_bool(0.5) {
            child1[i] = parent2[i];
            child2[i] = parent1[i];
        }
    }
    (child1, child2)
}

/// Order-based uniform crossover.
///
/// # Algorithm
///
/// 1. Select a random subset of positions (fair coin per position)
/// 2. Take parent1's genes at those positions and reorder them by where
///    they first appear in parent2
/// 3. Write them back into the selected positions of a copy of parent1;
///    child2 is built the same way with the parents swapped
///
/// Genes that never appear in the other parent keep their relative order
/// after the ones that do. For true permutations this is the classic
/// order-based crossover.
///
/// # Complexity
/// O(n²) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_based_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let positions: Vec<usize> = (0..n).filter(|_| rng.random_bool(0.5)).collect();

    let child1 = reorder_positions(parent1, parent2, &positions);
    let child2 = reorder_positions(parent2, parent1, &positions);
    (child1, child2)
}

/// Copy `template`, then rewrite `positions` with the same genes sorted by
/// their first index in `donor`.
fn reorder_positions(template: &[usize], donor: &[usize], positions: &[usize]) -> Vec<usize> {
    let mut genes: Vec<usize> = positions.iter().map(|&i| template[i]).collect();
    // stable: unmatched genes keep their relative order
    genes.sort_by_key(|gene| donor.iter().position(|d| d == gene).unwrap_or(usize::MAX));

    let mut child = template.to_vec();
    for (&pos, gene) in positions.iter().zip(genes) {
        child[pos] = gene;
    }
    child
}

/// Partially-mapped crossover (PMX), swap formulation.
///
/// # Algorithm
///
/// 1. Pick a random segment `[start, end]`
/// 2. Start child1 as a copy of parent1
/// 3. For each `i` in the segment, swap the positions of `parent1[i]` and
///    `parent2[i]` inside child1; child2 mirrors this from parent2
///
/// For permutations child1's segment ends up equal to parent2's and the
/// rest is repaired through the mapping. Values missing from a child are
/// skipped, so any input keeps its gene multiset.
///
/// # Complexity
/// O(n²) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn partially_mapped_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);
    let child1 = pmx_build_child(parent1, parent2, start, end);
    let child2 = pmx_build_child(parent2, parent1, start, end);
    (child1, child2)
}

fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut child = template.to_vec();
    for i in start..=end {
        let (own, other) = (template[i], donor[i]);
        if own == other {
            continue;
        }
        let a = child.iter().position(|&g| g == own);
        let b = child.iter().position(|&g| g == other);
        if let (Some(a), Some(b)) = (a, b) {
            child.swap(a, b);
        }
    }
    child
}

/// Position-based crossover.
///
/// # Algorithm
///
/// 1. Choose up to `n / 2` distinct positions at random
/// 2. child1 keeps parent1's genes at those positions
/// 3. The remaining positions take parent2's genes left to right, with one
///    occurrence of each kept gene removed; child2 mirrors this
///
/// # Complexity
/// O(n²) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn position_based_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let count = rng.random_range(0..=n / 2);
    let mut kept = vec![false; n];
    for i in rand::seq::index::sample(rng, n, count) {
        kept[i] = true;
    }

    let child1 = pbx_build_child(parent1, parent2, &kept);
    let child2 = pbx_build_child(parent2, parent1, &kept);
    (child1, child2)
}

fn pbx_build_child(keeper: &[usize], donor: &[usize], kept: &[bool]) -> Vec<usize> {
    let mut rest = donor.to_vec();
    for (&gene, _) in keeper.iter().zip(kept).filter(|&(_, &keep)| keep) {
        if let Some(pos) = rest.iter().position(|&g| g == gene) {
            rest.remove(pos);
        }
    }

    // rest has at least as many genes as there are free positions
    let mut rest = rest.into_iter();
    keeper
        .iter()
        .zip(kept)
        .map(|(&gene, &keep)| if keep { gene } else { rest.next().unwrap_or(gene) })
        .collect()
}

// ============================================================================
// Mutation and repair
// ============================================================================

/// Reset mutation: overwrite one random position with a random value in
/// `0..upper`. The new value may equal the old one.
pub fn reset_mutation<R: Rng>(genes: &mut [usize], upper: usize, rng: &mut R) {
    if genes.is_empty() || upper == 0 {
        return;
    }
    let value = rng.random_range(0..upper);
    let idx = rng.random_range(0..genes.len());
    genes[idx] = value;
}

/// Swap mutation: exchange the genes at two distinct random positions.
///
/// Keeps the gene multiset, so permutations stay permutations.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    genes.swap(i, j);
}

/// The identity permutation `0..n` scrambled by `swaps` swap mutations.
pub fn scrambled_identity<R: Rng>(n: usize, swaps: usize, rng: &mut R) -> Vec<usize> {
    let mut genes: Vec<usize> = (0..n).collect();
    for _ in 0..swaps {
        swap_mutation(&mut genes, rng);
    }
    genes
}

/// Reassigns duplicated genes until every value is unique.
///
/// Each round scans left to right and redraws every gene whose value
/// currently occurs more than once. Gives up after `max_rounds` rounds.
///
/// Returns the number of rounds that rewrote at least one gene.
///
/// # Errors
/// - [`GaError::RepairImpossible`] if `upper < genes.len()`
/// - [`GaError::RepairExhausted`] if duplicates remain after `max_rounds`
pub fn repair_duplicates<R: Rng>(
    genes: &mut [usize],
    upper: usize,
    max_rounds: usize,
    rng: &mut R,
) -> Result<usize, GaError> {
    if upper < genes.len() {
        return Err(GaError::RepairImpossible {
            len: genes.len(),
            upper,
        });
    }

    for round in 0..max_rounds {
        if !reassign_duplicates(genes, upper, rng) {
            return Ok(round);
        }
    }

    if has_duplicates(genes) {
        Err(GaError::RepairExhausted { rounds: max_rounds })
    } else {
        Ok(max_rounds)
    }
}

/// One repair round. Returns `true` if any gene was rewritten.
fn reassign_duplicates<R: Rng>(genes: &mut [usize], upper: usize, rng: &mut R) -> bool {
    let mut changed = false;
    for i in 0..genes.len() {
        let value = genes[i];
        if genes.iter().filter(|&&g| g == value).count() > 1 {
            genes[i] = rng.random_range(0..upper);
            changed = true;
        }
    }
    changed
}

fn has_duplicates(genes: &[usize]) -> bool {
    genes
        .iter()
        .enumerate()
        .any(|(i, g)| genes[i + 1..].contains(g))
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    (a.min(b), a.max(b))
}

// ============================================================================
// Tests
// ============================================================================
