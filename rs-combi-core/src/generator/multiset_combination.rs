use crate::count;
use crate::error::GeneratorError;

/// Generator of all r-combinations with repetition (nHr, "multiset").
///
/// An order-independent selection of `r` positions where the same position
/// may be chosen several times; canonically represented as a non-decreasing
/// index vector of length `r` over `[0, n)`. Size is `C(n + r - 1, r)`.
///
/// The traversal is an odometer with a non-decreasing carry: when a digit
/// is incremented, every digit to its right is raised to the same value
/// instead of resetting to zero. Digits whose value already reached the
/// maximum radix `n - 1` cannot advance and force the carry further left.
///
/// Because nHr spaces grow very fast, this generator also offers streaming
/// (`match_execute`) and short-circuiting (`first_match`) scans that never
/// materialize the result list.
///
/// # Invariants
/// - `n >= 1` and `r >= 1`; `r > n` is valid
/// - Index vectors are non-decreasing, each value in `[0, n)`
/// - Emitted results are owned copies; traversal state is never aliased
#[derive(Debug, Clone)]
pub struct MultisetCombinationGenerator<T> {
	items: Vec<T>,
}

impl<T: Clone> MultisetCombinationGenerator<T> {
	/// Creates a generator bound to `items`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `items` is empty.
	pub fn new(items: Vec<T>) -> Result<Self, GeneratorError> {
		if items.is_empty() {
			return Err(GeneratorError::InvalidArgument(
				"input sequence must contain at least one element".to_owned(),
			));
		}
		Ok(Self { items })
	}

	/// Closed-form `C(n + r - 1, r)`, the number of r-multisets over n
	/// distinct values.
	///
	/// Uses the same overflow-safe interleaved multiply/divide as the
	/// plain combination count.
	///
	/// # Errors
	/// - `InvalidArgument` unless `n >= 1` and `r >= 1`.
	/// - `Overflow` if `n + r - 1` or the count does not fit in `u64`.
	pub fn size(n: u64, r: u64) -> Result<u64, GeneratorError> {
		if n < 1 || r < 1 {
			return Err(GeneratorError::InvalidArgument(format!(
				"n and r must be at least 1, got n = {}, r = {}",
				n, r
			)));
		}
		let total = n
			.checked_add(r - 1)
			.ok_or_else(|| GeneratorError::Overflow(format!("n + r - 1 does not fit in u64 for n = {}, r = {}", n, r)))?;
		count::binomial(total, r)
	}

	/// Materializes all r-multiset combinations in ascending lexicographic
	/// index order.
	///
	/// # Notes
	/// `C(n + r - 1, r)` can be astronomically large; check `size` first
	/// and prefer `iterate`, `match_execute` or `first_match` when the
	/// space may not fit in memory.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn compute(&self, r: usize) -> Result<Vec<Vec<T>>, GeneratorError> {
		Ok(self.iterate(r)?.collect())
	}

	/// Returns a lazy iterator over all r-multiset combinations, in the
	/// same order as `compute`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn iterate(&self, r: usize) -> Result<MultisetCombinationIter<'_, T>, GeneratorError> {
		if r < 1 {
			return Err(GeneratorError::InvalidArgument(format!(
				"r must be at least 1, got {}",
				r
			)));
		}
		Ok(MultisetCombinationIter {
			items: &self.items,
			current: Some(vec![0; r]),
		})
	}

	/// Streaming scan with bounded memory: drives the odometer once over
	/// the full space and invokes `consumer` on every combination
	/// satisfying `predicate`.
	///
	/// The result list is never materialized, so this is usable on spaces
	/// far too large for `compute`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn match_execute<P, C>(
		&self,
		r: usize,
		mut predicate: P,
		mut consumer: C,
	) -> Result<(), GeneratorError>
	where
		P: FnMut(&[T]) -> bool,
		C: FnMut(Vec<T>),
	{
		for candidate in self.iterate(r)? {
			if predicate(&candidate) {
				consumer(candidate);
			}
		}
		Ok(())
	}

	/// Short-circuiting search: returns the first combination (in
	/// `compute` order) satisfying `predicate`, or `None` if none exists.
	///
	/// Odometer advancement stops at the first match; no candidate beyond
	/// it is generated or evaluated.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn first_match<P>(&self, r: usize, mut predicate: P) -> Result<Option<Vec<T>>, GeneratorError>
	where
		P: FnMut(&[T]) -> bool,
	{
		Ok(self.iterate(r)?.find(|candidate| predicate(candidate)))
	}
}

/// Lazy odometer over non-decreasing index vectors.
#[derive(Debug)]
pub struct MultisetCombinationIter<'a, T> {
	items: &'a [T],
	current: Option<Vec<usize>>,
}

impl<'a, T: Clone> Iterator for MultisetCombinationIter<'a, T> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let indices = self.current.as_mut()?;
		let emitted: Vec<T> = indices.iter().map(|&i| self.items[i].clone()).collect();

		// Non-decreasing carry: positions already at the maximum radix
		// n - 1 are skipped; the rightmost advanceable position goes up
		// and drags the whole suffix to its new value.
		let n = self.items.len();
		let r = indices.len();
		let mut advanced = false;
		for i in (0..r).rev() {
			if indices[i] + 1 < n {
				let raised = indices[i] + 1;
				for index in indices.iter_mut().skip(i) {
					*index = raised;
				}
				advanced = true;
				break;
			}
		}
		if !advanced {
			self.current = None;
		}

		Some(emitted)
	}
}
