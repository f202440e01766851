//! This crate provides [`Set`], a generic hash-based set, along with the
//! set-algebra functions [`union()`], [`intersection()`] and
//! [`difference()`] which accept any number of operand sets.
//!
//! ## Example
//!
//! ```rust
//! use hashset_algebra::{difference, intersection, union, Set};
//!
//! let s = Set::from_slice(&[1, 2, 3]);
//! let t = Set::from_slice(&[2, 3, 4]);
//!
//! let mut all = union(&s, [&t]).to_vec();
//! all.sort();
//! assert_eq!(all, [1, 2, 3, 4]);
//!
//! let mut common = intersection(&s, [&t]).to_vec();
//! common.sort();
//! assert_eq!(common, [2, 3]);
//!
//! assert_eq!(difference(&s, [&t]).to_vec(), [1]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Element Types
//!
//! Every element of a [`Set`] has the same type `T`, checked by the
//! compiler. Membership operations require `T: Eq + Hash`, so a set of
//! values that cannot be hashed simply does not compile. The name of `T`
//! is still available at runtime through [`Set::element_type()`].
//!
//! ### Ordering
//!
//! A [`Set`] is unordered. [`Set::iter()`] and [`Set::to_vec()`] yield the
//! members in the internal hash-table order, which can differ between two
//! sets holding the same members. Sort the output if you need a stable
//! order.
//!
//! ### Operands
//!
//! The set-algebra functions and [`Set::update()`] take their operand sets
//! as anything implementing `IntoIterator<Item = &Set<T>>`, so an array of
//! references, a `Vec` of references or [`core::iter::empty()`] all work.
//! None of them mutate their operands, and the sets they return share no
//! storage with their inputs.
//!
//! ### Intersection with no operands
//!
//! [`intersection()`] keeps an element only if it is present in every one
//! of the given operand sets. When no operand sets are given at all, the
//! result is the empty set, not a copy of the first set.
//!
//! ### Partial removal
//!
//! [`Set::remove()`] removes every requested element that is present and
//! only then reports the ones which were not, via [`ElementNotFound`]. The
//! removals that did happen are not undone.
//!
//! ## Features
//!
//! - `tracing`: emit `trace` level events from [`Set::remove()`] and the
//!   set-algebra functions through the [`tracing`] crate.
//!
//! [`tracing`]: https://docs.rs/tracing

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod algebra;
pub mod error;
pub mod set;

pub use crate::algebra::{copy, difference, intersection, union};
pub use crate::error::ElementNotFound;
pub use crate::set::Set;
