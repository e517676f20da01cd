//! Traversals: optics focusing on zero or more parts of a whole.
//!
//! A traversal demands [`Applicative`] of its action type so that the
//! actions of its foci can be sequenced left to right. Every traversal in
//! this module visits its foci in structural order, which is also the order
//! in which [`to_list_of`](super::to_list_of) reports them and the order in
//! which positional searches count them.
//!
//! # Laws
//!
//! ```text
//! over(t, |x| x, s) == s
//! over(t, g, over(t, f, s)) == over(t, |x| g(f(x)), s)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::optics::{compose, over, to_list_of, traversed, Fst};
//!
//! let keys = compose(traversed(), Fst);
//! let table = vec![(1, 'a'), (2, 'b')];
//!
//! assert_eq!(to_list_of(&keys, table.clone()), vec![1, 2]);
//! assert_eq!(over(&keys, |key| key * 100, table), vec![(100, 'a'), (200, 'b')]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::optic::Optic;
use crate::carrier::{Bazaar, BazaarBrand};
use crate::typeclass::Applicative;

/// Traversal over every element of a vector.
///
/// See [`traversed`].
pub struct VecTraversal<A, B> {
    _marker: PhantomData<fn(A) -> B>,
}

impl<A, B> VecTraversal<A, B> {
    /// Creates the traversal.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> Default for VecTraversal<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for VecTraversal<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for VecTraversal<A, B> {}

impl<A, B> fmt::Debug for VecTraversal<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("VecTraversal")
    }
}

impl<F, A, B> Optic<F, Vec<A>, Vec<B>, A, B> for VecTraversal<A, B>
where
    F: Applicative,
    B: 'static,
{
    fn apply<G>(&self, mut focus: G, whole: Vec<A>) -> F::Of<Vec<B>>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        let capacity = whole.len();
        whole
            .into_iter()
            .fold(F::pure(Vec::with_capacity(capacity)), |accumulated, part| {
                F::map2(accumulated, focus(part), |mut replaced: Vec<B>, replacement| {
                    replaced.push(replacement);
                    replaced
                })
            })
    }
}

/// Traversal over every element of a vector, allowed to change the element type.
pub const fn traversed<A, B>() -> VecTraversal<A, B> {
    VecTraversal::new()
}

/// Traversal over the element at one position of a vector.
///
/// An index past the end focuses on nothing, so updates leave the vector
/// unchanged and reads report no focus.
///
/// See [`ix`].
pub struct Ix<A> {
    index: usize,
    _marker: PhantomData<fn(A) -> A>,
}

impl<A> Ix<A> {
    /// The position this traversal focuses on.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl<A> Clone for Ix<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Ix<A> {}

impl<A> fmt::Debug for Ix<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Ix").field("index", &self.index).finish()
    }
}

impl<F, A> Optic<F, Vec<A>, Vec<A>, A, A> for Ix<A>
where
    F: Applicative,
    A: 'static,
{
    fn apply<G>(&self, mut focus: G, mut whole: Vec<A>) -> F::Of<Vec<A>>
    where
        G: FnMut(A) -> F::Of<A>,
    {
        let index = self.index;
        if index >= whole.len() {
            return F::pure(whole);
        }
        let part = whole.remove(index);
        F::fmap(focus(part), move |replacement| {
            whole.insert(index, replacement);
            whole
        })
    }
}

/// Builds a traversal over the element at `index`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{ix, set, to_list_of};
///
/// assert_eq!(set(&ix(1), 'X', vec!['a', 'b', 'c']), vec!['a', 'X', 'c']);
/// assert_eq!(to_list_of(&ix(5), vec!['a']), Vec::<char>::new());
/// ```
pub const fn ix<A>(index: usize) -> Ix<A> {
    Ix {
        index,
        _marker: PhantomData,
    }
}

/// A traversal captured as its positional rebuild structure.
///
/// Unlike an arbitrary traversal, a `ClonedTraversal` is a single concrete
/// type that can be stored, cloned and passed around freely. It visits the
/// same foci in the same order as the optic it was built from.
pub struct ClonedTraversal<S, T, A, B> {
    witness: Rc<dyn Fn(S) -> Bazaar<A, B, T>>,
}

impl<S, T, A, B> Clone for ClonedTraversal<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            witness: Rc::clone(&self.witness),
        }
    }
}

impl<S, T, A, B> fmt::Debug for ClonedTraversal<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ClonedTraversal").finish_non_exhaustive()
    }
}

impl<S, T, A, B> ClonedTraversal<S, T, A, B> {
    /// Runs the captured traversal once, recording its foci.
    pub fn witness(&self, whole: S) -> Bazaar<A, B, T> {
        (self.witness)(whole)
    }
}

impl<F, S, T, A, B> Optic<F, S, T, A, B> for ClonedTraversal<S, T, A, B>
where
    F: Applicative,
    B: 'static,
    T: 'static,
{
    fn apply<G>(&self, focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        self.witness(whole).run::<F, G>(focus)
    }
}

/// Captures any traversal (or lens, or iso) as a [`ClonedTraversal`].
///
/// # Examples
///
/// ```rust
/// use focal::optics::{clone_traversal, compose, over, traversed, Snd};
///
/// let values = clone_traversal(compose(traversed(), Snd));
/// let copy = values.clone();
///
/// let table = vec![("a", 1), ("b", 2)];
/// assert_eq!(over(&copy, |n: i32| n + 1, table), vec![("a", 2), ("b", 3)]);
/// ```
pub fn clone_traversal<O, S, T, A, B>(optic: O) -> ClonedTraversal<S, T, A, B>
where
    O: Optic<BazaarBrand<A, B>, S, T, A, B> + 'static,
    A: 'static,
    B: 'static,
{
    ClonedTraversal {
        witness: Rc::new(move |whole| optic.apply(Bazaar::sell, whole)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, over, set, to_list_of, traverse_of, Fst};
    use crate::typeclass::OptionBrand;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn traversed_visits_in_order() {
        assert_eq!(to_list_of(&traversed(), vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[rstest]
    fn traversed_may_change_the_element_type() {
        assert_eq!(over(&traversed(), |n: u8| n % 2 == 0, vec![1, 2]), vec![false, true]);
    }

    #[rstest]
    fn traverse_fails_as_a_whole() {
        let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
        assert_eq!(traverse_of::<OptionBrand, _, _, _, _, _, _>(&traversed(), halve, vec![2, 4]), Some(vec![1, 2]));
        assert_eq!(traverse_of::<OptionBrand, _, _, _, _, _, _>(&traversed(), halve, vec![2, 3]), None);
    }

    #[rstest]
    #[case(0, vec![10, 2, 3])]
    #[case(2, vec![1, 2, 30])]
    #[case(3, vec![1, 2, 3])]
    fn ix_updates_only_its_position(#[case] index: usize, #[case] expected: Vec<i32>) {
        assert_eq!(over(&ix(index), |n: i32| n * 10, vec![1, 2, 3]), expected);
    }

    #[rstest]
    fn ix_on_empty_vector_focuses_nothing() {
        assert_eq!(to_list_of(&ix(0), Vec::<u8>::new()), Vec::<u8>::new());
    }

    #[rstest]
    fn composed_traversal_reaches_nested_parts() {
        let keys = compose(traversed(), Fst);
        assert_eq!(set(&keys, 0, vec![(1, 'a'), (2, 'b')]), vec![(0, 'a'), (0, 'b')]);
    }

    #[rstest]
    fn cloned_traversal_witness_records_foci() {
        let cloned = clone_traversal(traversed::<i32, i32>());
        let witness = cloned.witness(vec![7, 8, 9]);
        assert_eq!(witness.foci(), &[7, 8, 9]);
        assert_eq!(witness.rebuild_with(|n| -n), vec![-7, -8, -9]);
    }

    proptest! {
        #[test]
        fn cloned_traversal_matches_its_source(values in proptest::collection::vec(any::<i16>(), 0..16)) {
            let source = traversed::<i16, i32>();
            let cloned = clone_traversal(source);
            let widen = |n: i16| i32::from(n) * 3;
            prop_assert_eq!(over(&cloned, widen, values.clone()), over(&source, widen, values));
        }

        #[test]
        fn traversal_identity_law(values in proptest::collection::vec(any::<i32>(), 0..16)) {
            prop_assert_eq!(over(&traversed(), |n: i32| n, values.clone()), values);
        }
    }
}
