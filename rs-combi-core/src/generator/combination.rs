use crate::count;
use crate::error::GeneratorError;

/// Generator of all r-combinations (nCr) of a bound input sequence.
///
/// A combination is an order-independent selection of `r` distinct
/// positions, emitted as the corresponding elements in ascending position
/// order. Duplicate *values* in the input are treated purely positionally:
/// two equal values at different positions are distinct for enumeration.
///
/// # Responsibilities
/// - Count combinations without overflow (`size`)
/// - Materialize all combinations in lexicographic index order (`compute`)
/// - Enumerate lazily, optionally filtered by a predicate
///
/// # Invariants
/// - The bound sequence is non-empty
/// - Internal index vectors are strictly increasing, each value in `[0, n)`
/// - Emitted results are owned copies; traversal state is never aliased
#[derive(Debug, Clone)]
pub struct CombinationGenerator<T> {
	items: Vec<T>,
}

impl<T: Clone> CombinationGenerator<T> {
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

	/// Closed-form `C(n, r)`, the number of r-combinations of n elements.
	///
	/// Multiplication and division are interleaved in increasing order over
	/// `min(r, n - r)` terms, so intermediate values never truncate and
	/// stay as small as possible.
	///
	/// # Errors
	/// - `InvalidArgument` unless `1 <= r <= n`.
	/// - `Overflow` if the count does not fit in `u64`.
	pub fn size(n: u64, r: u64) -> Result<u64, GeneratorError> {
		if r < 1 || r > n {
			return Err(GeneratorError::InvalidArgument(format!(
				"r must be between 1 and {}, got {}",
				n, r
			)));
		}
		count::binomial(n, r)
	}

	/// Materializes all r-combinations in ascending lexicographic index
	/// order.
	///
	/// # Notes
	/// The result has `C(n, r)` rows; check `size` first when `n` and `r`
	/// are large and prefer `iterate` if the space may not fit in memory.
	///
	/// # Errors
	/// Returns `InvalidArgument` unless `1 <= r <= n`.
	pub fn compute(&self, r: usize) -> Result<Vec<Vec<T>>, GeneratorError> {
		Ok(self.iterate(r)?.collect())
	}

	/// Returns a lazy iterator over all r-combinations, in the same order
	/// as `compute`.
	///
	/// # Errors
	/// Returns `InvalidArgument` unless `1 <= r <= n`; validation happens
	/// here, never mid-iteration.
	pub fn iterate(&self, r: usize) -> Result<CombinationIter<'_, T>, GeneratorError> {
		self.check_r(r)?;
		Ok(CombinationIter {
			items: &self.items,
			current: Some((0..r).collect()),
		})
	}

	/// Returns a lazy iterator that only yields combinations satisfying
	/// `predicate`.
	///
	/// Non-matching combinations are skipped, not emitted; the output
	/// equals `compute(r)` filtered by the same predicate, in the same
	/// relative order.
	///
	/// # Errors
	/// Returns `InvalidArgument` unless `1 <= r <= n`.
	pub fn iterate_filtered<P>(
		&self,
		r: usize,
		predicate: P,
	) -> Result<FilteredCombinationIter<'_, T, P>, GeneratorError>
	where
		P: FnMut(&[T]) -> bool,
	{
		Ok(FilteredCombinationIter {
			inner: self.iterate(r)?,
			predicate,
		})
	}

	fn check_r(&self, r: usize) -> Result<(), GeneratorError> {
		if r < 1 || r > self.items.len() {
			return Err(GeneratorError::InvalidArgument(format!(
				"r must be between 1 and {}, got {}",
				self.items.len(),
				r
			)));
		}
		Ok(())
	}
}

/// Lazy iterator over r-combinations.
///
/// Single-pass and exclusively owned by the caller that requested it.
/// Holds the classic next-combination successor state: a strictly
/// increasing index vector where position `i` is bounded by `n - r + i`.
#[derive(Debug)]
pub struct CombinationIter<'a, T> {
	items: &'a [T],
	current: Option<Vec<usize>>,
}

impl<'a, T: Clone> Iterator for CombinationIter<'a, T> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let indices = self.current.as_mut()?;
		let emitted: Vec<T> = indices.iter().map(|&i| self.items[i].clone()).collect();

		// Next-combination successor: find the rightmost index below its
		// positional maximum, increment it, reset the suffix to
		// consecutive values.
		let n = self.items.len();
		let r = indices.len();
		let mut advanced = false;
		for i in (0..r).rev() {
			if indices[i] < n - r + i {
				indices[i] += 1;
				for j in i + 1..r {
					indices[j] = indices[j - 1] + 1;
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

/// Predicate-filtered lazy iterator over r-combinations.
///
/// Advances the underlying successor until a match is found or the space
/// is exhausted; each qualifying result is emitted exactly once.
pub struct FilteredCombinationIter<'a, T, P> {
	inner: CombinationIter<'a, T>,
	predicate: P,
}

impl<'a, T, P> Iterator for FilteredCombinationIter<'a, T, P>
where
	T: Clone,
	P: FnMut(&[T]) -> bool,
{
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let predicate = &mut self.predicate;
		self.inner.by_ref().find(|candidate| predicate(candidate))
	}
}
