use crate::count;
use crate::error::GeneratorError;

/// Generator of all length-r sequences with repetition allowed (n^r).
///
/// Each of the `r` positions independently takes any of the `n` elements,
/// so the index vector is a plain fixed-radix number: `r` digits, each in
/// `[0, n)`. Enumeration counts upward with the most significant digit
/// first (ascending lexicographic index order), carrying left when a digit
/// overflows `n - 1`.
///
/// Unlike the no-repetition generators, `r > n` is valid here.
///
/// # Invariants
/// - `n >= 1` and `r >= 1`
/// - Emitted results are owned copies of length `r`
#[derive(Debug, Clone)]
pub struct RepeatedPermutationGenerator<T> {
	items: Vec<T>,
}

impl<T: Clone> RepeatedPermutationGenerator<T> {
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

	/// Closed-form `n^r`.
	///
	/// # Errors
	/// - `InvalidArgument` unless `n >= 1` and `r >= 1`.
	/// - `Overflow` if the count does not fit in `u64`.
	pub fn size(n: u64, r: u64) -> Result<u64, GeneratorError> {
		if n < 1 || r < 1 {
			return Err(GeneratorError::InvalidArgument(format!(
				"n and r must be at least 1, got n = {}, r = {}",
				n, r
			)));
		}
		count::power(n, r)
	}

	/// Materializes all `n^r` sequences in counting order.
	///
	/// # Notes
	/// `n^r` grows very fast; check `size` first and prefer `iterate` for
	/// anything beyond small inputs.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn compute(&self, r: usize) -> Result<Vec<Vec<T>>, GeneratorError> {
		Ok(self.iterate(r)?.collect())
	}

	/// Returns a lazy counter over all `n^r` sequences.
	///
	/// O(r) worst-case per step due to carry chains, O(1) amortized; the
	/// full space is never materialized.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `r < 1`.
	pub fn iterate(&self, r: usize) -> Result<RepeatedPermutationIter<'_, T>, GeneratorError> {
		if r < 1 {
			return Err(GeneratorError::InvalidArgument(format!(
				"r must be at least 1, got {}",
				r
			)));
		}
		Ok(RepeatedPermutationIter {
			items: &self.items,
			current: Some(vec![0; r]),
		})
	}
}

/// Lazy fixed-radix counter over length-r index vectors.
#[derive(Debug)]
pub struct RepeatedPermutationIter<'a, T> {
	items: &'a [T],
	current: Option<Vec<usize>>,
}

impl<'a, T: Clone> Iterator for RepeatedPermutationIter<'a, T> {
	type Item = Vec<T>;

	fn next(&mut self) -> Option<Self::Item> {
		let digits = self.current.as_mut()?;
		let emitted: Vec<T> = digits.iter().map(|&i| self.items[i].clone()).collect();

		// Increment the least significant digit, carrying left: the
		// rightmost digit below n - 1 goes up, everything after it resets
		// to zero.
		let n = self.items.len();
		let mut advanced = false;
		for i in (0..digits.len()).rev() {
			if digits[i] + 1 < n {
				digits[i] += 1;
				for digit in digits.iter_mut().skip(i + 1) {
					*digit = 0;
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
	fn compute_3_repeat_2() {
		let generator = RepeatedPermutationGenerator::new(vec!['A', 'B', 'C']).unwrap();
		let result = generator.compute(2).unwrap();
		assert_eq!(result.len(), 9);
		let expected: HashSet<Vec<char>> = [
			vec!['A', 'A'], vec!['A', 'B'], vec!['A', 'C'],
			vec!['B', 'A'], vec!['B', 'B'], vec!['B', 'C'],
			vec!['C', 'A'], vec!['C', 'B'], vec!['C', 'C'],
		]
		.into_iter()
		.collect();
		let actual: HashSet<Vec<char>> = result.into_iter().collect();
		assert_eq!(actual, expected);
	}

	#[test]
	fn counting_order_is_lexicographic() {
		let generator = RepeatedPermutationGenerator::new(vec![0, 1]).unwrap();
		assert_eq!(
			generator.compute(2).unwrap(),
			vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
		);
	}

	#[test]
	fn r_may_exceed_n() {
		let generator = RepeatedPermutationGenerator::new(vec!['x', 'y']).unwrap();
		let result = generator.compute(3).unwrap();
		assert_eq!(result.len(), 8);
		assert!(result.iter().all(|row| row.len() == 3));
	}

	#[test]
	fn iterate_matches_compute() {
		let generator = RepeatedPermutationGenerator::new((0..3).collect::<Vec<_>>()).unwrap();
		let lazy: Vec<Vec<i32>> = generator.iterate(3).unwrap().collect();
		assert_eq!(lazy, generator.compute(3).unwrap());
	}

	#[test]
	fn compute_len_matches_size() {
		let generator = RepeatedPermutationGenerator::new((0..4).collect::<Vec<_>>()).unwrap();
		for r in 1..=4 {
			let expected = RepeatedPermutationGenerator::<i32>::size(4, r as u64).unwrap();
			assert_eq!(generator.compute(r).unwrap().len() as u64, expected);
		}
	}

	#[test]
	fn single_element_input() {
		let generator = RepeatedPermutationGenerator::new(vec![42]).unwrap();
		assert_eq!(generator.compute(3).unwrap(), vec![vec![42, 42, 42]]);
	}

	#[test]
	fn invalid_r_rejected() {
		let generator = RepeatedPermutationGenerator::new(vec![1, 2]).unwrap();
		assert!(matches!(generator.compute(0), Err(GeneratorError::InvalidArgument(_))));
	}

	#[test]
	fn size_known_values() {
		assert_eq!(RepeatedPermutationGenerator::<i32>::size(3, 2), Ok(9));
		assert_eq!(RepeatedPermutationGenerator::<i32>::size(2, 10), Ok(1024));
		assert!(RepeatedPermutationGenerator::<i32>::size(0, 1).is_err());
		assert!(matches!(
			RepeatedPermutationGenerator::<i32>::size(10, 30),
			Err(GeneratorError::Overflow(_))
		));
	}
}
