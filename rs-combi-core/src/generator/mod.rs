//! Top-level module for the combinatorial generators.
//!
//! Five independent generators share the same conceptual shape: bind an
//! input sequence at construction, then expose counting, eager
//! materialization and lazy iteration:
//! - Combinations without repetition (`CombinationGenerator`)
//! - Permutations without repetition (`PermutationGenerator`)
//! - Permutations with repetition (`RepeatedPermutationGenerator`)
//! - Multiset combinations (`MultisetCombinationGenerator`)
//! - Cartesian products (`CartesianProductGenerator`)
//!
//! A generator instance is immutable and safe to share read-only across
//! threads; an iterator obtained from it is single-pass and must be driven
//! by a single owner. Every emitted result is a fresh owned copy of the
//! selected elements — internal index vectors are never exposed.

/// r-combinations without repetition (nCr), order-independent selection.
///
/// Lazy next-combination successor over strictly increasing index vectors,
/// plus a predicate-filtered iterator.
pub mod combination;

/// r-permutations without repetition (nPr), order-dependent selection.
///
/// Eager backtracking over a `used` marker array and an equivalent lazy
/// successor iterator.
pub mod permutation;

/// r-permutations with repetition (n^r).
///
/// Fixed-radix odometer with carry propagation, enumerated most
/// significant digit first.
pub mod repeated_permutation;

/// r-combinations with repetition (nHr, "multiset").
///
/// Non-decreasing odometer plus streaming and short-circuiting search
/// variants for spaces too large to materialize.
pub mod multiset_combination;

/// Cartesian product of independently sized sequences.
///
/// Mixed-radix odometer where each digit has its own radix.
pub mod cartesian_product;
