//! A module containing [`Set`].

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;

use hashbrown::hash_set::{IntoIter as HashSetIntoIter, Iter as HashSetIter};
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::ElementNotFound;

/// An unordered set of unique values based on [`HashSet`].
///
/// `T` is the generic type parameter for the elements stored in the set,
/// every element of one set has this same type. Any method which looks up
/// or inserts elements requires `T: Eq + Hash`.
///
/// The set-algebra operations which produce new sets live in the
/// [`algebra`](crate::algebra) module.
///
/// # Examples
/// ```
/// use hashset_algebra::Set;
///
/// let mut set = Set::from_slice(&["ferris", "corro", "ferris"]);
/// assert_eq!(set.len(), 2);
///
/// set.add(["crab"]);
/// set.append(vec!["ferris", "gopher"]);
/// assert_eq!(set.len(), 4);
///
/// assert!(set.remove(["gopher"]).is_ok());
/// assert!(set.remove(["gopher"]).is_err());
///
/// for name in set.iter() {
/// 	println!("{name}");
/// }
/// ```
///
/// [`HashSet`]: https://docs.rs/hashbrown/latest/hashbrown/struct.HashSet.html
#[derive(Clone)]
pub struct Set<T> {
	pub(crate) inner: HashSet<T>,
}

impl<T> Set<T> {
	/// Makes a new, empty `Set`.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let set: Set<u8> = Set::new();
	/// assert_eq!(set.len(), 0);
	/// ```
	pub fn new() -> Self {
		Set {
			inner: HashSet::new(),
		}
	}

	/// Makes a new, empty `Set` with room for at least `capacity`
	/// elements before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Set {
			inner: HashSet::with_capacity(capacity),
		}
	}

	/// Returns the number of distinct elements in the set.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let set = Set::from_slice(&[1, 1, 2]);
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no elements.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the name of the element type `T`, as given by
	/// [`core::any::type_name()`].
	///
	/// The returned name is only meant for diagnostics, its exact contents
	/// are not guaranteed to be stable between compiler versions. No type
	/// descriptor is needed to get the elements back out with their type,
	/// [`Set::to_vec()`] already returns a `Vec<T>`.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let set = Set::from_slice(&[1_u16, 2]);
	/// assert_eq!(set.element_type(), "u16");
	///
	/// let elements: Vec<u16> = set.to_vec();
	/// assert_eq!(elements.len(), 2);
	/// ```
	pub fn element_type(&self) -> &'static str {
		core::any::type_name::<T>()
	}

	/// Returns an iterator over every element in the set, in no
	/// particular order.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			inner: self.inner.iter(),
		}
	}

	/// Removes every element from the set. The set keeps its allocated
	/// capacity.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let mut set = Set::from_slice(&['a', 'b']);
	/// set.clear();
	/// assert!(set.is_empty());
	/// ```
	pub fn clear(&mut self) {
		self.inner.clear();
	}

	/// Collects the elements of the set into a newly allocated [`Vec`].
	///
	/// The order of the returned elements is the internal hash-table
	/// order, do not rely on it.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let set = Set::from_slice(&[3, 1, 2, 3]);
	///
	/// let mut elements = set.to_vec();
	/// elements.sort();
	/// assert_eq!(elements, [1, 2, 3]);
	/// ```
	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.inner.iter().cloned().collect()
	}
}

impl<T> Set<T>
where
	T: Eq + Hash,
{
	/// Makes a new `Set` from the elements of a slice, duplicate elements
	/// are collapsed.
	///
	/// To build a set from an iterator of owned elements use
	/// [`FromIterator`] instead.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let set = Set::from_slice(&[4, 4, 8]);
	/// assert_eq!(set.len(), 2);
	///
	/// let empty: Set<i32> = Set::from_slice(&[]);
	/// assert!(empty.is_empty());
	/// ```
	pub fn from_slice(slice: &[T]) -> Self
	where
		T: Clone,
	{
		let mut set = Set::with_capacity(slice.len());
		set.append(slice.iter().cloned());
		return set;
	}

	/// Returns `true` if the set contains `element`.
	pub fn contains(&self, element: &T) -> bool {
		self.inner.contains(element)
	}

	/// Inserts a single element, returning `true` if it was not already
	/// in the set.
	pub fn insert(&mut self, element: T) -> bool {
		self.inner.insert(element)
	}

	/// Inserts every element of a sequence into the set. Elements which
	/// are already present are left as they are.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let mut set = Set::from_slice(&[1]);
	/// set.append(vec![1, 2, 3]);
	/// assert_eq!(set.len(), 3);
	/// ```
	pub fn append<E>(&mut self, elements: E)
	where
		E: IntoIterator<Item = T>,
	{
		for element in elements {
			self.inner.insert(element);
		}
	}

	/// Inserts one or more individual elements into the set.
	///
	/// This does the same as [`Set::append()`] and exists so that call
	/// sites listing discrete elements read naturally.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let mut set = Set::new();
	/// set.add([5]);
	/// set.add([5, 6]);
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn add<E>(&mut self, elements: E)
	where
		E: IntoIterator<Item = T>,
	{
		self.append(elements);
	}

	/// Inserts every element of each of the given sets into this set. The
	/// given sets are not modified.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let mut set = Set::from_slice(&[1]);
	/// let a = Set::from_slice(&[2]);
	/// let b = Set::from_slice(&[2, 3]);
	///
	/// set.update([&a, &b]);
	/// assert_eq!(set.len(), 3);
	/// assert_eq!(b.len(), 2);
	/// ```
	pub fn update<'a, S>(&mut self, others: S)
	where
		T: Clone + 'a,
		S: IntoIterator<Item = &'a Set<T>>,
	{
		for other in others {
			self.append(other.iter().cloned());
		}
	}

	/// Removes each of the given elements from the set.
	///
	/// Every requested element that is present gets removed, even if some
	/// of the others are not. If at least one requested element was not in
	/// the set an [`ElementNotFound`] holding the absent elements is
	/// returned afterwards, the removals which did happen are kept.
	///
	/// # Examples
	/// ```
	/// use hashset_algebra::Set;
	///
	/// let mut set = Set::from_slice(&[1, 2, 3]);
	///
	/// let error = set.remove([2, 9]).unwrap_err();
	/// assert_eq!(error.missing.as_slice(), [9]);
	///
	/// // 2 was still removed
	/// assert_eq!(set.contains(&2), false);
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn remove<E>(&mut self, elements: E) -> Result<(), ElementNotFound<T>>
	where
		E: IntoIterator<Item = T>,
	{
		let mut missing: SmallVec<[T; 1]> = SmallVec::new();
		for element in elements {
			if !self.inner.remove(&element) {
				missing.push(element);
			}
		}

		if missing.is_empty() {
			return Ok(());
		}

		#[cfg(feature = "tracing")]
		tracing::trace!(
			missing = missing.len(),
			remaining = self.len(),
			"remove requested elements not in the set"
		);

		return Err(ElementNotFound { missing });
	}
}

// Trait Impls ==========================

impl<T> fmt::Debug for Set<T>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl<T> Default for Set<T> {
	fn default() -> Self {
		Set::new()
	}
}

impl<T> PartialEq for Set<T>
where
	T: Eq + Hash,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}
impl<T> Eq for Set<T> where T: Eq + Hash {}

impl<T> FromIterator<T> for Set<T>
where
	T: Eq + Hash,
{
	fn from_iter<E: IntoIterator<Item = T>>(iter: E) -> Self {
		let mut set = Set::new();
		set.append(iter);
		return set;
	}
}

impl<T> Extend<T> for Set<T>
where
	T: Eq + Hash,
{
	fn extend<E: IntoIterator<Item = T>>(&mut self, iter: E) {
		self.append(iter);
	}
}
impl<'a, T> Extend<&'a T> for Set<T>
where
	T: Eq + Hash + Copy + 'a,
{
	fn extend<E: IntoIterator<Item = &'a T>>(&mut self, iter: E) {
		self.append(iter.into_iter().copied());
	}
}

impl<T> IntoIterator for Set<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}
impl<'a, T> IntoIterator for &'a Set<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// An iterator over the elements of a [`Set`].
///
/// This `struct` is created by the [`iter`] method on [`Set`]. See its
/// documentation for more.
///
/// [`iter`]: Set::iter
pub struct Iter<'a, T> {
	inner: HashSetIter<'a, T>,
}
impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Iter {
			inner: self.inner.clone(),
		}
	}
}

/// An owning iterator over the elements of a [`Set`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`Set`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<T> {
	inner: HashSetIntoIter<T>,
}
impl<T> Iterator for IntoIter<T> {
	type Item = T;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
