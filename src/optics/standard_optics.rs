//! Standard optics that are commonly used.
//!
//! - [`Fst`], [`Snd`]: type-changing lenses onto the components of a pair
//! - [`Both`]: a traversal over both components of a homogeneous pair
//! - [`identity`], [`swapped`]: isomorphisms on any type and on pairs

use super::iso::{Iso, iso};
use super::optic::Optic;
use crate::typeclass::{Applicative, Functor};

/// Lens onto the first component of a pair.
///
/// The component may change type: `Fst` focuses `A` in `(A, C)` and
/// rebuilds `(B, C)` from a replacement `B`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{over, view, Fst};
///
/// assert_eq!(view(&Fst, (1, "one")), 1);
/// assert_eq!(over(&Fst, |n: i32| n.to_string(), (1, "one")), ("1".to_string(), "one"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fst;

impl<F, A, B, C> Optic<F, (A, C), (B, C), A, B> for Fst
where
    F: Functor,
    B: 'static,
    C: 'static,
{
    fn apply<G>(&self, mut focus: G, (first, rest): (A, C)) -> F::Of<(B, C)>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        F::fmap(focus(first), move |replacement| (replacement, rest))
    }
}

/// Lens onto the second component of a pair.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{set, view, Snd};
///
/// assert_eq!(view(&Snd, (1, "hello")), "hello");
/// assert_eq!(set(&Snd, "world", (1, "hello")), (1, "world"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snd;

impl<F, A, B, C> Optic<F, (C, A), (C, B), A, B> for Snd
where
    F: Functor,
    B: 'static,
    C: 'static,
{
    fn apply<G>(&self, mut focus: G, (rest, second): (C, A)) -> F::Of<(C, B)>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        F::fmap(focus(second), move |replacement| (rest, replacement))
    }
}

/// Traversal over both components of a pair, first then second.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{over, to_list_of, Both};
///
/// assert_eq!(to_list_of(&Both, (1, 2)), vec![1, 2]);
/// assert_eq!(over(&Both, |n: i32| n * 10, (1, 2)), (10, 20));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Both;

impl<F, A, B> Optic<F, (A, A), (B, B), A, B> for Both
where
    F: Applicative,
    B: 'static,
{
    fn apply<G>(&self, mut focus: G, (first, second): (A, A)) -> F::Of<(B, B)>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        let first = focus(first);
        let second = focus(second);
        F::map2(first, second, |left, right| (left, right))
    }
}

/// Traversal over both components of a pair; the same as [`Both`].
pub const fn both() -> Both {
    Both
}

/// The isomorphism between a type and itself.
pub fn identity<A>() -> Iso<A, A, A, A, fn(A) -> A, fn(A) -> A, fn(A) -> A, fn(A) -> A> {
    let same: fn(A) -> A = std::convert::identity;
    iso(same, same)
}

/// The isomorphism swapping the components of a pair.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{swapped, view};
///
/// assert_eq!(view(&swapped(), (1, "one")), ("one", 1));
/// ```
pub fn swapped<A, B>() -> Iso<
    (A, B),
    (A, B),
    (B, A),
    (B, A),
    fn((A, B)) -> (B, A),
    fn((B, A)) -> (A, B),
    fn((A, B)) -> (B, A),
    fn((B, A)) -> (A, B),
> {
    iso(
        (|(first, second): (A, B)| (second, first)) as fn((A, B)) -> (B, A),
        (|(first, second): (B, A)| (second, first)) as fn((B, A)) -> (A, B),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{from, over, set, to_list_of, view, Isomorphism};
    use crate::typeclass::PairBrand;
    use rstest::rstest;

    #[rstest]
    fn snd_views_and_sets_the_second_component() {
        assert_eq!(view(&Snd, (1, "hello")), "hello");
        assert_eq!(set(&Snd, "world", (1, "hello")), (1, "world"));
    }

    #[rstest]
    fn fst_changes_the_component_type() {
        assert_eq!(set(&Fst, 'x', (1_u8, true)), ('x', true));
    }

    #[rstest]
    fn both_lists_first_then_second() {
        assert_eq!(to_list_of(&Both, ('a', 'b')), vec!['a', 'b']);
    }

    #[rstest]
    fn identity_leaves_values_alone() {
        assert_eq!(view(&identity(), 'q'), 'q');
        assert_eq!(over(&identity(), |n: u8| n + 1, 1), 2);
    }

    #[rstest]
    fn swapped_is_its_own_reverse() {
        assert_eq!(set(&swapped(), ("b", 2), (1, "a")), (2, "b"));
        assert_eq!(from(&swapped::<i32, char>()).forward(('z', 1)), (1, 'z'));
    }

    #[rstest]
    fn both_reports_through_the_writer_pair() {
        let result: (String, (u8, u8)) =
            <Both as Optic<PairBrand<String>, _, _, _, _>>::apply(&Both, |n: u8| (n.to_string(), n + 1), (1, 2));
        assert_eq!(result, (String::from("12"), (2, 3)));
    }
}
