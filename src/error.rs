//! A module containing [`ElementNotFound`].

use smallvec::SmallVec;
use thiserror::Error;

/// The error returned by [`Set::remove()`] when one or more of the
/// elements asked to be removed were not in the set.
///
/// By the time this error is returned every requested element that *was*
/// present has already been removed, nothing is rolled back. Contains the
/// elements which could not be found, in the order they were requested.
///
/// [`Set::remove()`]: crate::Set::remove
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("element not found")]
pub struct ElementNotFound<T> {
	/// The requested elements which were not present in the set.
	pub missing: SmallVec<[T; 1]>,
}

impl<T> ElementNotFound<T> {
	/// Returns the number of requested elements which were not present.
	pub fn len(&self) -> usize {
		self.missing.len()
	}

	/// Returns `true` if no missing elements are recorded. Errors returned
	/// by [`Set::remove()`](crate::Set::remove) always record at least one.
	pub fn is_empty(&self) -> bool {
		self.missing.is_empty()
	}

	/// Consumes the error, returning the missing elements.
	pub fn into_missing(self) -> SmallVec<[T; 1]> {
		self.missing
	}
}
