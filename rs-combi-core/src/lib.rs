//! Combinatorial sequence generation library.
//!
//! This crate provides eager and lazy enumeration over an ordered input
//! sequence, including:
//! - k-combinations without repetition (nCr)
//! - k-permutations without repetition (nPr)
//! - k-permutations with repetition (n^r)
//! - k-combinations with repetition / multisets (nHr)
//! - Cartesian products of independently sized sequences
//!
//! Every generator exposes a closed-form `size`, an eager `compute`, and a
//! lazy iterator; enumeration spaces can be combinatorially explosive, so
//! callers are expected to consult `size` before materializing. Low-level
//! counting helpers are kept internal to ensure consistency and prevent
//! misuse.

/// Core generators and their lazy iterators.
///
/// This module exposes the high-level enumeration interface while keeping
/// internal traversal state private.
pub mod generator;

/// Error type shared by all generators.
///
/// Argument validation and overflow detection; iterator exhaustion is
/// signalled with `None`, never with an error.
pub mod error;

/// Counting utilities (overflow-safe binomials, factorials, products).
///
/// Not exposed
pub(crate) mod count;
