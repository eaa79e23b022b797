use crate::error::GeneratorError;

/// Computes the binomial coefficient `C(n, r)` without intermediate
/// overflow where the final value fits.
///
/// # Behavior
/// - Works over `min(r, n - r)` terms.
/// - Interleaves multiplication and division in increasing order: after
///   step `i` the accumulator holds `C(n - r + i, i)`, which is itself an
///   integer, so every division is exact and intermediate values stay as
///   small as possible.
/// - Each multiply/divide step runs in `u128`, so a count is rejected
///   only when a running coefficient itself no longer fits in `u64`.
///   The running coefficients never exceed the final value, so every
///   representable `C(n, r)` is returned exactly.
///
/// # Errors
/// Returns `Overflow` if the count does not fit in `u64`.
pub(crate) fn binomial(n: u64, r: u64) -> Result<u64, GeneratorError> {
	if r > n {
		return Ok(0);
	}
	let requested = r;
	let r = r.min(n - r);
	let mut acc: u128 = 1;
	for i in 1..=r {
		acc = acc * (n - r + i) as u128 / i as u128;
		if acc > u64::MAX as u128 {
			return Err(GeneratorError::Overflow(format!(
				"C({}, {}) does not fit in u64",
				n, requested
			)));
		}
	}
	Ok(acc as u64)
}

/// Computes the falling factorial `n * (n-1) * ... * (n-r+1)`, i.e.
/// `n! / (n-r)!`, the number of r-permutations of n elements.
///
/// # Errors
/// Returns `Overflow` if the product exceeds `u64`. Requires `r <= n`
/// (checked by the caller).
pub(crate) fn falling_factorial(n: u64, r: u64) -> Result<u64, GeneratorError> {
	let mut acc: u64 = 1;
	for i in 0..r {
		acc = acc
			.checked_mul(n - i)
			.ok_or_else(|| GeneratorError::Overflow(format!("{}! / {}! does not fit in u64", n, n - r)))?;
	}
	Ok(acc)
}

/// Computes `n^r` with overflow detection.
///
/// The loop is bounded in practice: for `n >= 2` an overflow is reached in
/// at most 64 steps, and `n == 1` short-circuits, so a huge `r` never
/// spins.
pub(crate) fn power(n: u64, r: u64) -> Result<u64, GeneratorError> {
	if n <= 1 {
		return Ok(n);
	}
	let mut acc: u64 = 1;
	for _ in 0..r {
		acc = acc
			.checked_mul(n)
			.ok_or_else(|| GeneratorError::Overflow(format!("{}^{} does not fit in u64", n, r)))?;
	}
	Ok(acc)
}

/// Computes the product of a sequence of lengths with overflow detection.
pub(crate) fn checked_product(lengths: &[usize]) -> Result<u64, GeneratorError> {
	let mut acc: u64 = 1;
	for &len in lengths {
		acc = acc
			.checked_mul(len as u64)
			.ok_or_else(|| GeneratorError::Overflow("Cartesian product size does not fit in u64".to_owned()))?;
	}
	Ok(acc)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn binomial_small_values() {
		assert_eq!(binomial(4, 2), Ok(6));
		assert_eq!(binomial(5, 0), Ok(1));
		assert_eq!(binomial(5, 5), Ok(1));
		assert_eq!(binomial(10, 3), Ok(120));
		assert_eq!(binomial(52, 5), Ok(2_598_960));
		assert_eq!(binomial(3, 4), Ok(0));
	}

	#[test]
	fn binomial_symmetry() {
		assert_eq!(binomial(30, 7), binomial(30, 23));
	}

	#[test]
	fn binomial_large_still_exact() {
		// C(60, 30) is close to the u64 limit but fits
		assert_eq!(binomial(60, 30), Ok(118_264_581_564_861_424));
	}

	#[test]
	fn binomial_near_the_u64_limit_is_not_rejected() {
		// Larger than any single multiplication step could survive in u64,
		// yet the count itself is representable
		assert_eq!(binomial(64, 32), Ok(1_832_624_140_942_590_534));
	}

	#[test]
	fn binomial_overflow_detected() {
		assert!(matches!(binomial(100, 50), Err(GeneratorError::Overflow(_))));
	}

	#[test]
	fn binomial_overflow_reports_requested_r() {
		match binomial(100, 70) {
			Err(GeneratorError::Overflow(message)) => assert!(message.contains("C(100, 70)")),
			other => panic!("expected an overflow, got {:?}", other),
		}
	}

	#[test]
	fn falling_factorial_values() {
		assert_eq!(falling_factorial(5, 2), Ok(20));
		assert_eq!(falling_factorial(4, 4), Ok(24));
		assert_eq!(falling_factorial(7, 0), Ok(1));
	}

	#[test]
	fn falling_factorial_overflow_detected() {
		assert!(matches!(falling_factorial(30, 30), Err(GeneratorError::Overflow(_))));
	}

	#[test]
	fn power_values() {
		assert_eq!(power(3, 2), Ok(9));
		assert_eq!(power(2, 10), Ok(1024));
		assert_eq!(power(1, 1_000_000_000), Ok(1));
	}

	#[test]
	fn power_overflow_detected() {
		assert!(matches!(power(10, 20), Err(GeneratorError::Overflow(_))));
	}

	#[test]
	fn checked_product_values() {
		assert_eq!(checked_product(&[2, 3, 4]), Ok(24));
		assert_eq!(checked_product(&[]), Ok(1));
	}

	#[test]
	fn checked_product_overflow_detected() {
		let huge = vec![usize::MAX; 3];
		assert!(matches!(checked_product(&huge), Err(GeneratorError::Overflow(_))));
	}
}
