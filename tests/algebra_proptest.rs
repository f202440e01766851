//! Property tests checking the set-algebra laws against `std::collections::HashSet`.

use std::collections::HashSet;

use hashset_algebra::{copy, difference, intersection, union, Set};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<u8>> {
	proptest::collection::vec(0u8..32, 0..40)
}

fn model(elements: &[u8]) -> HashSet<u8> {
	elements.iter().copied().collect()
}

fn members(set: &Set<u8>) -> HashSet<u8> {
	set.iter().copied().collect()
}

proptest! {
	#[test]
	fn union_matches_std(a in elements(), b in elements()) {
		let result = union(&Set::from_slice(&a), [&Set::from_slice(&b)]);
		let expected: HashSet<u8> = model(&a).union(&model(&b)).copied().collect();

		prop_assert_eq!(result.len(), expected.len());
		for element in a.iter().chain(b.iter()) {
			prop_assert!(result.contains(element), "missing {}", element);
		}
	}

	#[test]
	fn intersection_matches_std(a in elements(), b in elements()) {
		let result = intersection(&Set::from_slice(&a), [&Set::from_slice(&b)]);
		let expected: HashSet<u8> = model(&a).intersection(&model(&b)).copied().collect();

		prop_assert_eq!(members(&result), expected);
	}

	#[test]
	fn intersection_of_many_matches_std(a in elements(), b in elements(), c in elements()) {
		let (sb, sc) = (Set::from_slice(&b), Set::from_slice(&c));
		let result = intersection(&Set::from_slice(&a), [&sb, &sc]);
		let expected: HashSet<u8> = model(&a)
			.into_iter()
			.filter(|e| model(&b).contains(e) && model(&c).contains(e))
			.collect();

		prop_assert_eq!(members(&result), expected);
	}

	#[test]
	fn intersection_without_operands_is_empty(a in elements()) {
		let result = intersection(&Set::from_slice(&a), std::iter::empty());
		prop_assert!(result.is_empty());
	}

	#[test]
	fn difference_matches_std(a in elements(), b in elements()) {
		let result = difference(&Set::from_slice(&a), [&Set::from_slice(&b)]);
		let expected: HashSet<u8> = model(&a).difference(&model(&b)).copied().collect();

		prop_assert_eq!(members(&result), expected);
	}

	#[test]
	fn union_with_self_is_idempotent(a in elements()) {
		let set = Set::from_slice(&a);
		prop_assert_eq!(union(&set, [&set]).len(), set.len());
	}

	#[test]
	fn add_present_element_keeps_len(a in proptest::collection::vec(any::<u8>(), 1..40), index in any::<prop::sample::Index>()) {
		let mut set = Set::from_slice(&a);
		let len = set.len();
		set.add([a[index.index(a.len())]]);
		prop_assert_eq!(set.len(), len);
	}

	#[test]
	fn to_vec_round_trips(a in elements()) {
		let set = Set::from_slice(&a);
		let elements = set.to_vec();

		prop_assert_eq!(elements.len(), set.len());
		prop_assert_eq!(model(&elements), model(&a));
	}

	#[test]
	fn copy_is_independent(a in elements(), extra in elements()) {
		let original = Set::from_slice(&a);
		let before = members(&original);

		let mut copied = copy(&original);
		copied.add(extra.iter().copied());
		let _ = copied.remove(a.iter().copied());

		prop_assert_eq!(original.len(), before.len());
		prop_assert_eq!(members(&original), before);
	}

	#[test]
	fn remove_reports_missing_but_removes_present(a in elements(), to_remove in elements()) {
		let mut set = Set::from_slice(&a);
		let mut remaining = model(&a);

		let result = set.remove(to_remove.iter().copied());
		// a repeated element is only found the first time it is removed
		let absent: Vec<u8> = to_remove.iter().copied().filter(|e| !remaining.remove(e)).collect();

		match result {
			Ok(()) => prop_assert!(absent.is_empty()),
			Err(error) => {
				prop_assert!(!absent.is_empty());
				prop_assert_eq!(error.missing.to_vec(), absent);
			}
		}
		prop_assert_eq!(members(&set), remaining);
	}
}
