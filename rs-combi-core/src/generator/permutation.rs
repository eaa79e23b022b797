use crate::count;
use crate::error::GeneratorError;

/// Generator of all r-permutations without repetition (nPr).
///
/// A permutation is an order-dependent selection of `r` distinct positions;
/// the same set of positions appears once per ordering. Size is the falling
/// factorial `n! / (n - r)!`.
///
/// # Responsibilities
/// - Count permutations without overflow (`size`)
/// - Materialize all permutations by backtracking over a `used` marker
///   array (`compute`)
/// - Enumerate lazily with an equivalent successor iterator (`iterate`)
///
/// # Invariants
/// - `1 <= r <= n`; `r == n` is the full n! enumeration
/// - Index vectors always hold `r` distinct values in `[0, n)`
/// - Both enumeration strategies produce the same ascending lexicographic
///   index order
#[derive(Debug, Clone)]
pub struct PermutationGenerator<T> {
	items: Vec<T>,
}

impl<T: Clone> PermutationGenerator<T> {
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

	/// Closed-form `n! / (n - r)!`, the number of r-permutations of n
	/// elements.
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
		count::falling_factorial(n, r)
	}

	/// Materializes all r-permutations via recursive backtracking.
	///
	/// Extends a partial selection one position at a time, marking chosen
	/// indices in a `used` array, and copies the indexed values out once
	/// the selection reaches length `r`.
	///
	/// # Errors
	/// Returns `InvalidArgument` unless `1 <= r <= n`.
	pub fn compute(&self, r: usize) -> Result<Vec<Vec<T>>, GeneratorError> {
		self.check_r(r)?;
		let mut results = Vec::new();
		let mut used = vec![false; self.items.len()];
		let mut selection = Vec::with_capacity(r);
		self.backtrack(r, &mut used, &mut selection, &mut results);
		Ok(results)
	}

	fn backtrack(
		&self,
		r: usize,
		used: &mut Vec<bool>,
		selection: &mut Vec<usize>,
		results: &mut Vec<Vec<T>>,
	) {
		if selection.len() == r {
			results.push(selection.iter().map(|&i| self.items[i].clone()).collect());
			return;
		}
		for i in 0..self.items.len() {
			if used[i] {
				continue;
			}
			used[i] = true;
			selection.push(i);
			self.backtrack(r, used, selection, results);
			selection.pop();
			used[i] = false;
		}
	}

	/// Returns a lazy iterator over all r-permutations, in the same order
	/// as `compute`.
	///
	/// Single-pass, O(n) worst-case per step, without materializing the
	/// `n!/(n-r)!` space.
	///
	/// # Errors
	/// Returns `InvalidArgument` unless `1 <= r <= n`.
	pub fn iterate(&self, r: usize) -> Result<PermutationIter<'_, T>, GeneratorError> {
		self.check_r(r)?;
		let mut used = vec![false; self.items.len()];
		for flag in used.iter_mut().take(r) {
			*flag = true;
		}
		Ok(PermutationIter {
			items: &self.items,
			used,
			current: Some((0..r).collect()),
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

/// Lazy iterator over r-permutations.
///
/// Holds a distinct-index vector plus the matching `used` marker array.
/// The successor backtracks from the tail: free the current index, move
/// the position to the next unused index above it, then refill the suffix
/// with the smallest unused indices in ascending order.
#[derive(Debug)]
pub struct PermutationIter<'a, T> {
	items: &'a [T],
	used: Vec<bool>,
	current: Option<Vec<usize>>,
}

impl<'a, T: Clone> Iterator for PermutationIter<'a, T> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let indices = self.current.as_mut()?;
		let emitted: Vec<T> = indices.iter().map(|&i| self.items[i].clone()).collect();

		let n = self.items.len();
		let r = indices.len();
		let mut pos = r;
		let mut advanced = false;
		while pos > 0 {
			pos -= 1;
			let old = indices[pos];
			self.used[old] = false;
			if let Some(next) = (old + 1..n).find(|&j| !self.used[j]) {
				indices[pos] = next;
				self.used[next] = true;
				// Refill the suffix with the smallest unused indices.
				// Exactly r - pos - 1 are free again at this point.
				let refill: Vec<usize> = (0..n)
					.filter(|&j| !self.used[j])
					.take(r - pos - 1)
					.collect();
				for (position, index) in (pos + 1..r).zip(refill) {
					indices[position] = index;
					self.used[index] = true;
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

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn compute_3_pick_2() {
		let generator = PermutationGenerator::new(vec!['A', 'B', 'C']).unwrap();
		let result = generator.compute(2).unwrap();
		assert_eq!(
			result,
			vec![
				vec!['A', 'B'],
				vec!['A', 'C'],
				vec!['B', 'A'],
				vec!['B', 'C'],
				vec!['C', 'A'],
				vec!['C', 'B'],
			]
		);
	}

	#[test]
	fn compute_full_length_is_factorial() {
		let generator = PermutationGenerator::new((0..4).collect::<Vec<_>>()).unwrap();
		let result = generator.compute(4).unwrap();
		assert_eq!(result.len(), 24);
		let distinct: HashSet<Vec<i32>> = result.iter().cloned().collect();
		assert_eq!(distinct.len(), 24);
	}

	#[test]
	fn iterate_matches_compute() {
		let generator = PermutationGenerator::new((0..5).collect::<Vec<_>>()).unwrap();
		for r in 1..=5 {
			let lazy: Vec<Vec<i32>> = generator.iterate(r).unwrap().collect();
			assert_eq!(lazy, generator.compute(r).unwrap(), "mismatch at r = {}", r);
		}
	}

	#[test]
	fn compute_len_matches_size() {
		let generator = PermutationGenerator::new((0..6).collect::<Vec<_>>()).unwrap();
		for r in 1..=6 {
			let expected = PermutationGenerator::<i32>::size(6, r as u64).unwrap();
			assert_eq!(generator.compute(r).unwrap().len() as u64, expected);
		}
	}

	#[test]
	fn every_result_has_distinct_positions() {
		let generator = PermutationGenerator::new(vec!['a', 'b', 'c', 'd']).unwrap();
		for row in generator.compute(3).unwrap() {
			let distinct: HashSet<char> = row.iter().copied().collect();
			assert_eq!(distinct.len(), 3);
		}
	}

	#[test]
	fn same_index_set_appears_in_multiple_orders() {
		let generator = PermutationGenerator::new(vec![1, 2, 3]).unwrap();
		let result = generator.compute(2).unwrap();
		assert!(result.contains(&vec![1, 2]));
		assert!(result.contains(&vec![2, 1]));
	}

	#[test]
	fn invalid_r_rejected() {
		let generator = PermutationGenerator::new(vec![1, 2]).unwrap();
		assert!(matches!(generator.compute(0), Err(GeneratorError::InvalidArgument(_))));
		assert!(matches!(generator.iterate(3), Err(GeneratorError::InvalidArgument(_))));
	}

	#[test]
	fn size_known_values() {
		assert_eq!(PermutationGenerator::<i32>::size(5, 2), Ok(20));
		assert_eq!(PermutationGenerator::<i32>::size(4, 4), Ok(24));
		assert!(PermutationGenerator::<i32>::size(3, 4).is_err());
	}
}
