use crate::count;
use crate::error::GeneratorError;

/// Generator of the Cartesian product of k independently sized sequences.
///
/// A mixed-radix odometer where digit `i` has its own radix
/// `lists[i].len()`: the last digit spins fastest, carrying leftward on
/// overflow. Size is the product of the list lengths.
///
/// # Invariants
/// - At least one list is bound, and no bound list is empty
/// - Emitted rows have length `k`, one element per list, owned copies
#[derive(Debug, Clone)]
pub struct CartesianProductGenerator<T> {
	lists: Vec<Vec<T>>,
}

impl<T: Clone> CartesianProductGenerator<T> {
	/// Creates a generator bound to `lists`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `lists` is empty or any inner list is
	/// empty (an empty factor would make the whole product empty, which is
	/// treated as a caller mistake rather than a valid request).
	pub fn new(lists: Vec<Vec<T>>) -> Result<Self, GeneratorError> {
		if lists.is_empty() {
			return Err(GeneratorError::InvalidArgument(
				"at least one input list is required".to_owned(),
			));
		}
		if let Some(position) = lists.iter().position(|list| list.is_empty()) {
			return Err(GeneratorError::InvalidArgument(format!(
				"input list at position {} is empty",
				position
			)));
		}
		Ok(Self { lists })
	}

	/// Number of rows in the product, the product of the list lengths.
	///
	/// # Errors
	/// Returns `Overflow` if the count does not fit in `u64`.
	pub fn size(&self) -> Result<u64, GeneratorError> {
		let lengths: Vec<usize> = self.lists.iter().map(Vec::len).collect();
		count::checked_product(&lengths)
	}

	/// Materializes the full cross product, last digit fastest.
	///
	/// # Notes
	/// Check `size` first; a k-way product multiplies up quickly, and
	/// `iterate` walks the same space in O(k) memory.
	pub fn product(&self) -> Vec<Vec<T>> {
		self.iterate().collect()
	}

	/// Returns a lazy odometer walk over the product, in the same order as
	/// `product`. O(k) worst-case per step.
	pub fn iterate(&self) -> CartesianProductIter<'_, T> {
		CartesianProductIter {
			lists: &self.lists,
			current: Some(vec![0; self.lists.len()]),
		}
	}

	/// Returns a predicate-filtered lazy walk over the product.
	///
	/// # Notes
	/// This is a post-filter, not a pruning search: the odometer still
	/// advances through the full product space internally and discards
	/// non-matches, so it gives no asymptotic speedup over full
	/// enumeration. It only saves the caller the filtering boilerplate
	/// and the materialized result list.
	pub fn iterate_filtered<P>(&self, predicate: P) -> FilteredCartesianProductIter<'_, T, P>
	where
		P: FnMut(&[T]) -> bool,
	{
		FilteredCartesianProductIter {
			inner: self.iterate(),
			predicate,
		}
	}
}

/// Lazy mixed-radix odometer over one index per bound list.
#[derive(Debug)]
pub struct CartesianProductIter<'a, T> {
	lists: &'a [Vec<T>],
	current: Option<Vec<usize>>,
}

impl<'a, T: Clone> Iterator for CartesianProductIter<'a, T> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let digits = self.current.as_mut()?;
		let emitted: Vec<T> = digits
			.iter()
			.zip(self.lists)
			.map(|(&i, list)| list[i].clone())
			.collect();

		// Increment the last digit; each digit overflowing its own radix
		// resets to zero and carries left.
		let mut advanced = false;
		for i in (0..digits.len()).rev() {
			digits[i] += 1;
			if digits[i] < self.lists[i].len() {
				advanced = true;
				break;
			}
			digits[i] = 0;
		}
		if !advanced {
			self.current = None;
		}

		Some(emitted)
	}
}

/// Predicate-filtered walk over the product space (post-filter, see
/// `CartesianProductGenerator::iterate_filtered`).
pub struct FilteredCartesianProductIter<'a, T, P> {
	inner: CartesianProductIter<'a, T>,
	predicate: P,
}

impl<'a, T, P> Iterator for FilteredCartesianProductIter<'a, T, P>
where
	T: Clone,
	P: FnMut(&[T]) -> bool,
{
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let predicate = &mut self.predicate;
		self.inner.by_ref().find(|row| predicate(row))
	}
}
