use thiserror::Error;

/// Errors raised by the generators.
///
/// All errors are raised synchronously, at construction or at the first
/// `compute`/`iterate` call, before any enumeration begins — never
/// mid-enumeration. They are local and non-recoverable for that call:
/// either the full requested enumeration/count succeeds or the call fails
/// before producing anything.
///
/// Exhausting a lazy iterator is not an error: `next()` returns `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
	/// A parameter is outside its valid range (`r < 1`, `r > n` for the
	/// no-repetition generators, an empty input sequence, ...).
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A computed size does not fit in `u64`.
	///
	/// Detected explicitly rather than silently wrapping, since callers
	/// may use `size` to pre-allocate storage.
	#[error("Size overflow: {0}")]
	Overflow(String),
}
