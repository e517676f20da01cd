//! Monoid type class - semigroups with an identity element.
//!
//! A fold over zero foci produces [`Monoid::empty`], which is why folds and
//! traversals consumed through a constant action require a monoid.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```

use super::identity::Identity;
use super::semigroup::Semigroup;

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Monoid;
///
/// let words = vec![String::from("a"), String::from("b")];
/// assert_eq!(String::combine_all(words), "ab");
/// assert_eq!(String::combine_all(Vec::new()), "");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
        assert_eq!(Option::<String>::combine_all(Vec::new()), None);
    }

    #[rstest]
    fn identity_wraps_the_inner_empty() {
        assert_eq!(Identity::<String>::empty(), Identity(String::new()));
    }

    proptest! {
        #[test]
        fn option_empty_is_two_sided_identity(value in prop::option::of(".{0,6}")) {
            prop_assert_eq!(Option::<String>::empty().combine(value.clone()), value.clone());
            prop_assert_eq!(value.clone().combine(Option::<String>::empty()), value);
        }

        #[test]
        fn pair_empty_is_two_sided_identity(text in ".{0,6}", items in prop::collection::vec(any::<u8>(), 0..6)) {
            let value = (text, items);
            prop_assert_eq!(<(String, Vec<u8>)>::empty().combine(value.clone()), value.clone());
            prop_assert_eq!(value.clone().combine(<(String, Vec<u8>)>::empty()), value);
        }
    }
}
