//! A module containing the set-algebra functions over [`Set`]s.
//!
//! Every function here takes its operands by reference and returns a
//! newly allocated [`Set`], the operands are never modified. The
//! functions taking a variable number of operand sets accept anything
//! implementing `IntoIterator<Item = &Set<T>>`.

use core::hash::Hash;

use smallvec::SmallVec;

use crate::Set;

/// Returns a copy of `set` which shares no storage with it.
///
/// This is the same as [`Clone::clone()`] on the [`Set`].
///
/// # Examples
/// ```
/// use hashset_algebra::{copy, Set};
///
/// let original = Set::from_slice(&[1, 2]);
/// let mut copied = copy(&original);
///
/// copied.add([3]);
/// assert_eq!(original.len(), 2);
/// assert_eq!(copied.len(), 3);
/// ```
pub fn copy<T>(set: &Set<T>) -> Set<T>
where
	T: Clone,
{
	set.clone()
}

/// Returns a new set containing every element of `first` along with every
/// element of each of the `others`.
///
/// # Examples
/// ```
/// use hashset_algebra::{union, Set};
///
/// let a = Set::from_slice(&[1, 2]);
/// let b = Set::from_slice(&[2, 3]);
/// let c = Set::from_slice(&[5]);
///
/// let mut result = union(&a, [&b, &c]).to_vec();
/// result.sort();
/// assert_eq!(result, [1, 2, 3, 5]);
/// ```
pub fn union<'a, T, S>(first: &Set<T>, others: S) -> Set<T>
where
	T: Eq + Hash + Clone + 'a,
	S: IntoIterator<Item = &'a Set<T>>,
{
	let mut set = copy(first);
	set.update(others);

	#[cfg(feature = "tracing")]
	tracing::trace!(len = set.len(), "union");

	return set;
}

/// Returns a new set containing the elements of `first` which are also
/// present in *every* one of the `others`.
///
/// If `others` is empty then no element can be present in every one of
/// them and so the result is empty, rather than a copy of `first`.
///
/// # Examples
/// ```
/// use core::iter;
///
/// use hashset_algebra::{intersection, Set};
///
/// let a = Set::from_slice(&[1, 2, 3, 4]);
/// let b = Set::from_slice(&[2, 3, 4]);
/// let c = Set::from_slice(&[3, 4, 5]);
///
/// let mut result = intersection(&a, [&b, &c]).to_vec();
/// result.sort();
/// assert_eq!(result, [3, 4]);
///
/// assert!(intersection(&a, iter::empty()).is_empty());
/// ```
pub fn intersection<'a, T, S>(first: &Set<T>, others: S) -> Set<T>
where
	T: Eq + Hash + Clone + 'a,
	S: IntoIterator<Item = &'a Set<T>>,
{
	let others: SmallVec<[&Set<T>; 4]> = others.into_iter().collect();

	let mut set = Set::new();
	if others.is_empty() {
		return set;
	}

	set.append(
		first
			.iter()
			.filter(|element| others.iter().all(|other| other.contains(element)))
			.cloned(),
	);

	#[cfg(feature = "tracing")]
	tracing::trace!(operands = others.len(), len = set.len(), "intersection");

	return set;
}

/// Returns a new set containing the elements of `first` which are not
/// present in any of the `others`.
///
/// # Examples
/// ```
/// use hashset_algebra::{difference, Set};
///
/// let a = Set::from_slice(&[1, 2, 3, 4]);
/// let b = Set::from_slice(&[2]);
/// let c = Set::from_slice(&[4, 9]);
///
/// let mut result = difference(&a, [&b, &c]).to_vec();
/// result.sort();
/// assert_eq!(result, [1, 3]);
/// ```
pub fn difference<'a, T, S>(first: &Set<T>, others: S) -> Set<T>
where
	T: Eq + Hash + Clone + 'a,
	S: IntoIterator<Item = &'a Set<T>>,
{
	let mut set = copy(first);
	for other in others {
		for element in other.iter() {
			set.inner.remove(element);
		}
	}

	#[cfg(feature = "tracing")]
	tracing::trace!(len = set.len(), "difference");

	return set;
}
