//! Single-focus searches through multi-focus optics.
//!
//! [`element_of`] picks the focus at a position, [`element_where`] the one
//! focus satisfying a predicate. Both run the underlying optic once at
//! [`ElementOfBrand`], counting foci in visiting order, and report a missing
//! or ambiguous focus as an [`OpticError`] rather than panicking.

use std::fmt;

use super::error::OpticError;
use super::optic::Optic;
use crate::carrier::{Const, ConstBrand, ElementOfBrand, ElementSearch};
use crate::typeclass::{Functor, Identity, IdentityBrand};

/// Runs `optic` handing to `focus` every visited focus accepted by
/// `accept`, and returns the outcome with the number of foci visited.
fn locate<F, O, S, T, A, G, P>(
    optic: &O,
    mut accept: P,
    mut focus: G,
    whole: S,
) -> (ElementSearch<F, T>, usize)
where
    F: Functor,
    O: Optic<ElementOfBrand<F>, S, T, A, A>,
    G: FnMut(A) -> F::Of<A>,
    P: FnMut(usize, &A) -> bool,
{
    let mut visited = 0;
    let outcome = optic.apply(
        |part| {
            let position = visited;
            visited += 1;
            if accept(position, &part) {
                ElementSearch::Found(focus(part))
            } else {
                ElementSearch::Searching(part)
            }
        },
        whole,
    );
    (outcome, visited)
}

fn settle<F: Functor, T>(
    outcome: ElementSearch<F, T>,
    missing: OpticError,
) -> Result<F::Of<T>, OpticError> {
    match outcome {
        ElementSearch::Found(action) => Ok(action),
        ElementSearch::Searching(_) => Err(missing),
        ElementSearch::Failed(error) => Err(error),
    }
}

/// The focus at one position of a multi-focus optic.
///
/// See [`element_of`].
#[derive(Clone)]
pub struct ElementOf<O> {
    optic: O,
    index: usize,
}

impl<O> fmt::Debug for ElementOf<O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ElementOf")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<O> ElementOf<O> {
    /// The searched position.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Runs `focus` on the selected focus and rebuilds the whole inside its action.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::IndexOutOfRange`] when the optic has no focus at
    /// the position.
    pub fn traverse<F, S, T, A, G>(&self, focus: G, whole: S) -> Result<F::Of<T>, OpticError>
    where
        F: Functor,
        O: Optic<ElementOfBrand<F>, S, T, A, A>,
        G: FnMut(A) -> F::Of<A>,
    {
        let index = self.index;
        let (outcome, length) = locate(&self.optic, |position, _| position == index, focus, whole);
        settle(outcome, OpticError::IndexOutOfRange { index, length })
    }

    /// Reads the selected focus.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::IndexOutOfRange`] when the optic has no focus at
    /// the position.
    pub fn view<S, A>(&self, whole: S) -> Result<A, OpticError>
    where
        O: Optic<ElementOfBrand<ConstBrand<A>>, S, S, A, A>,
    {
        self.traverse::<ConstBrand<A>, _, _, _, _>(Const::new, whole)
            .map(Const::into_inner)
    }

    /// Rebuilds the whole with only the selected focus updated.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::IndexOutOfRange`] when the optic has no focus at
    /// the position.
    pub fn over<S, T, A, G>(&self, mut function: G, whole: S) -> Result<T, OpticError>
    where
        O: Optic<ElementOfBrand<IdentityBrand>, S, T, A, A>,
        G: FnMut(A) -> A,
    {
        self.traverse::<IdentityBrand, _, _, _, _>(|part| Identity(function(part)), whole)
            .map(Identity::into_inner)
    }

    /// Rebuilds the whole with only the selected focus replaced.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::IndexOutOfRange`] when the optic has no focus at
    /// the position.
    pub fn set<S, T, A>(&self, value: A, whole: S) -> Result<T, OpticError>
    where
        O: Optic<ElementOfBrand<IdentityBrand>, S, T, A, A>,
    {
        let mut value = Some(value);
        self.traverse::<IdentityBrand, _, _, _, _>(
            |part| Identity(value.take().unwrap_or(part)),
            whole,
        )
        .map(Identity::into_inner)
    }
}

/// Selects the focus at `index`, counting from zero in visiting order.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{element_of, traversed, OpticError};
///
/// let third = element_of(traversed(), 2);
/// assert_eq!(third.view(vec!['a', 'b', 'c']), Ok('c'));
/// assert_eq!(third.set('z', vec!['a', 'b', 'c']), Ok(vec!['a', 'b', 'z']));
/// assert_eq!(
///     third.view(vec!['a']),
///     Err(OpticError::IndexOutOfRange { index: 2, length: 1 })
/// );
/// ```
pub const fn element_of<O>(optic: O, index: usize) -> ElementOf<O> {
    ElementOf { optic, index }
}

/// The one focus of a multi-focus optic satisfying a predicate.
///
/// See [`element_where`].
#[derive(Clone)]
pub struct ElementWhere<O, P> {
    optic: O,
    predicate: P,
}

impl<O, P> fmt::Debug for ElementWhere<O, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ElementWhere").finish_non_exhaustive()
    }
}

impl<O, P> ElementWhere<O, P> {
    /// Runs `focus` on the matching focus and rebuilds the whole inside its action.
    ///
    /// # Errors
    ///
    /// Returns [`OpticError::NoMatch`] when no focus satisfies the predicate
    /// and [`OpticError::MultipleResults`] when more than one does.
    pub fn traverse<F, S, T, A, G>(&self, focus: G, whole: S) -> Result<F::Of<T>, OpticError>
    where
        F: Functor,
        O: Optic<ElementOfBrand<F>, S, T, A, A>,
        G: FnMut(A) -> F::Of<A>,
        P: Fn(&A) -> bool,
    {
        let (outcome, visited) = locate(&self.optic, |_, part| (self.predicate)(part), focus, whole);
        settle(outcome, OpticError::NoMatch { visited })
    }

    /// Reads the matching focus.
    ///
    /// # Errors
    ///
    /// See [`ElementWhere::traverse`].
    pub fn view<S, A>(&self, whole: S) -> Result<A, OpticError>
    where
        O: Optic<ElementOfBrand<ConstBrand<A>>, S, S, A, A>,
        P: Fn(&A) -> bool,
    {
        self.traverse::<ConstBrand<A>, _, _, _, _>(Const::new, whole)
            .map(Const::into_inner)
    }

    /// Rebuilds the whole with only the matching focus updated.
    ///
    /// # Errors
    ///
    /// See [`ElementWhere::traverse`].
    pub fn over<S, T, A, G>(&self, mut function: G, whole: S) -> Result<T, OpticError>
    where
        O: Optic<ElementOfBrand<IdentityBrand>, S, T, A, A>,
        G: FnMut(A) -> A,
        P: Fn(&A) -> bool,
    {
        self.traverse::<IdentityBrand, _, _, _, _>(|part| Identity(function(part)), whole)
            .map(Identity::into_inner)
    }
}

/// Selects the single focus satisfying `predicate`.
///
/// Unlike a filter, the search insists on exactly one match.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{element_where, traversed, OpticError};
///
/// let even = element_where(traversed(), |n: &i32| n % 2 == 0);
/// assert_eq!(even.over(|n: i32| n * 10, vec![1, 4, 7]), Ok(vec![1, 40, 7]));
/// assert_eq!(even.view(vec![1, 3]), Err(OpticError::NoMatch { visited: 2 }));
/// assert_eq!(even.view(vec![2, 4]), Err(OpticError::MultipleResults));
/// ```
pub const fn element_where<O, P>(optic: O, predicate: P) -> ElementWhere<O, P> {
    ElementWhere { optic, predicate }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, traversed, Both, Fst, Snd};
    use crate::typeclass::OptionBrand;
    use rstest::rstest;

    #[rstest]
    fn index_past_the_end_is_reported_with_the_length() {
        let fifth = element_of(traversed(), 4);
        let error = fifth.view(vec![10, 20, 30]).unwrap_err();
        assert_eq!(error, OpticError::IndexOutOfRange { index: 4, length: 3 });
        assert_eq!(error.to_string(), "no element at index 4: the optic has 3 foci");
    }

    #[rstest]
    #[case(0, 'a')]
    #[case(1, 'b')]
    #[case(3, 'd')]
    fn positions_follow_visiting_order(#[case] index: usize, #[case] expected: char) {
        let nested = compose(traversed(), Both);
        let element = element_of(nested, index);
        assert_eq!(element.view(vec![('a', 'b'), ('c', 'd')]), Ok(expected));
    }

    #[rstest]
    fn over_touches_only_the_selected_position() {
        let second = element_of(compose(traversed(), Snd), 1);
        assert_eq!(
            second.over(|n: i32| n + 100, vec![("x", 1), ("y", 2), ("z", 3)]),
            Ok(vec![("x", 1), ("y", 102), ("z", 3)])
        );
    }

    #[rstest]
    fn traverse_runs_the_effect_once() {
        let first = element_of(traversed(), 0);
        let outcome = first.traverse::<OptionBrand, _, _, _, _>(|n: i32| n.checked_mul(2), vec![4, 5]);
        assert_eq!(outcome, Ok(Some(vec![8, 5])));
    }

    #[rstest]
    fn a_lens_has_exactly_one_position() {
        let only = element_of(Fst, 0);
        assert_eq!(only.view((7, ())), Ok(7));
        assert_eq!(
            element_of(Fst, 1).view((7, ())),
            Err(OpticError::IndexOutOfRange { index: 1, length: 1 })
        );
    }

    #[rstest]
    fn predicate_search_counts_visited_foci() {
        let negative = element_where(traversed(), |n: &i32| *n < 0);
        assert_eq!(negative.view(Vec::new()), Err(OpticError::NoMatch { visited: 0 }));
        assert_eq!(negative.view(vec![-1, 2]), Ok(-1));
        assert_eq!(negative.view(vec![-1, -2]), Err(OpticError::MultipleResults));
    }
}
