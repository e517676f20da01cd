//! Semigroup type class - types with an associative binary operation.
//!
//! Folds accumulate their results through semigroups: every element a fold
//! visits is combined into the running result, left to right.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use super::identity::Identity;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is the identity; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
