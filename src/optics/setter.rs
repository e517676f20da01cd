//! Write-only optics.
//!
//! A setter is implemented only for [`Committing`] action types, which are
//! isomorphic to the identity wrapper. Reading through a setter does not
//! type-check, and neither does running it at any effectful applicative.

use std::fmt;
use std::marker::PhantomData;

use super::optic::Optic;
use crate::typeclass::Committing;

/// A setter built from a mapping function.
///
/// See [`sets`].
pub struct Sets<S, T, A, B, M> {
    mapper: M,
    _marker: PhantomData<fn(S, B) -> (T, A)>,
}

impl<S, T, A, B, M: Clone> Clone for Sets<S, T, A, B, M> {
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, M> fmt::Debug for Sets<S, T, A, B, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Sets").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B, M> Optic<F, S, T, A, B> for Sets<S, T, A, B, M>
where
    F: Committing,
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
    T: 'static,
{
    fn apply<G>(&self, mut focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        F::pure((self.mapper)(whole, &mut |part| F::commit::<B>(focus(part))))
    }
}

/// Builds a setter from a function that maps every focus of a whole.
///
/// The mapper receives the whole and the per-focus update and must apply
/// the update to each focus exactly once.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{over, sets};
///
/// let values = sets(|pairs: Vec<(char, i32)>, update: &mut dyn FnMut(i32) -> i32| {
///     pairs.into_iter().map(|(key, value)| (key, update(value))).collect::<Vec<_>>()
/// });
///
/// assert_eq!(over(&values, |n| n * 10, vec![('a', 1), ('b', 2)]), vec![('a', 10), ('b', 20)]);
/// ```
pub const fn sets<S, T, A, B, M>(mapper: M) -> Sets<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
{
    Sets {
        mapper,
        _marker: PhantomData,
    }
}

fn map_elements<A, B>(elements: Vec<A>, update: &mut dyn FnMut(A) -> B) -> Vec<B> {
    elements.into_iter().map(update).collect()
}

/// A setter over every element of a vector, allowed to change the element type.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{mapped, over};
///
/// assert_eq!(over(&mapped(), |n: i32| n.to_string(), vec![1, 2]), vec!["1", "2"]);
/// ```
pub fn mapped<A, B>() -> Sets<Vec<A>, Vec<B>, A, B, fn(Vec<A>, &mut dyn FnMut(A) -> B) -> Vec<B>> {
    sets(map_elements::<A, B> as fn(Vec<A>, &mut dyn FnMut(A) -> B) -> Vec<B>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{compose, over, set, Snd};
    use rstest::rstest;

    #[rstest]
    fn mapped_updates_every_element() {
        assert_eq!(over(&mapped(), |n: i32| n + 1, vec![1, 2, 3]), vec![2, 3, 4]);
    }

    #[rstest]
    fn mapped_on_empty_is_empty() {
        assert_eq!(over(&mapped(), |n: i32| n + 1, Vec::new()), Vec::<i32>::new());
    }

    #[rstest]
    fn setters_compose_behind_lenses() {
        let nested = compose(Snd, mapped());
        assert_eq!(
            set(&nested, 'x', ("keep", vec!['a', 'b'])),
            ("keep", vec!['x', 'x'])
        );
    }

    #[rstest]
    fn setter_visits_each_focus_once() {
        let mut calls = 0;
        let result = over(
            &mapped(),
            |n: i32| {
                calls += 1;
                n * 2
            },
            vec![5, 6],
        );
        assert_eq!(result, vec![10, 12]);
        assert_eq!(calls, 2);
    }
}
