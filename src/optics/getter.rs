//! Read-only optics: getters, folds and monadic getters.
//!
//! A getter is implemented only for [`Phantom`] action types, so it can be
//! read through but never written through: running it at the identity
//! action used by `set` does not type-check. A fold additionally requires
//! [`Applicative`], because it may visit any number of foci.
//!
//! Getters compose in reading order: `compose(outer, to(f))` first reaches
//! through `outer`, then applies `f`. This is the reverse of mathematical
//! function composition notation, where `f . outer` would be written.

use std::fmt;
use std::marker::PhantomData;

use super::optic::Optic;
use crate::typeclass::{Applicative, Effective, Monad, Phantom};

/// A getter built from a projection function.
///
/// See [`to`].
pub struct To<S, A, G> {
    getter: G,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G: Clone> Clone for To<S, A, G> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> fmt::Debug for To<S, A, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("To").finish_non_exhaustive()
    }
}

impl<F, S, A, G> Optic<F, S, S, A, A> for To<S, A, G>
where
    F: Phantom,
    G: Fn(&S) -> A,
{
    fn apply<H>(&self, mut focus: H, whole: S) -> F::Of<S>
    where
        H: FnMut(A) -> F::Of<A>,
    {
        F::coerce::<A, S>(focus((self.getter)(&whole)))
    }
}

/// Builds a getter from a projection function.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{compose, to, view, Snd};
///
/// let length = compose(Snd, to(|text: &String| text.len()));
/// assert_eq!(view(&length, (1, String::from("hello"))), 5);
/// ```
pub const fn to<S, A, G>(getter: G) -> To<S, A, G>
where
    G: Fn(&S) -> A,
{
    To {
        getter,
        _marker: PhantomData,
    }
}

/// A fold built from a function listing the foci.
///
/// See [`folding`].
pub struct Folding<S, I, G> {
    fold: G,
    _marker: PhantomData<fn(S) -> I>,
}

impl<S, I, G: Clone> Clone for Folding<S, I, G> {
    fn clone(&self) -> Self {
        Self {
            fold: self.fold.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, I, G> fmt::Debug for Folding<S, I, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Folding").finish_non_exhaustive()
    }
}

impl<F, S, I, G> Optic<F, S, S, I::Item, I::Item> for Folding<S, I, G>
where
    F: Phantom + Applicative,
    I: IntoIterator,
    I::Item: 'static,
    G: Fn(&S) -> I,
{
    fn apply<H>(&self, mut focus: H, whole: S) -> F::Of<S>
    where
        H: FnMut(I::Item) -> F::Of<I::Item>,
    {
        let visited = (self.fold)(&whole)
            .into_iter()
            .fold(F::pure(()), |accumulated, part| {
                F::map2(accumulated, focus(part), |(), _| ())
            });
        F::coerce::<(), S>(visited)
    }
}

/// Builds a fold from a function producing the foci in order.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{folding, to_list_of};
///
/// let digits = folding(|number: &u32| number.to_string().chars().collect::<Vec<_>>());
/// assert_eq!(to_list_of(&digits, 406), vec!['4', '0', '6']);
/// ```
pub const fn folding<S, I, G>(fold: G) -> Folding<S, I, G>
where
    I: IntoIterator,
    G: Fn(&S) -> I,
{
    Folding {
        fold,
        _marker: PhantomData,
    }
}

fn cloned_elements<C, A>(container: &C) -> Vec<A>
where
    for<'a> &'a C: IntoIterator<Item = &'a A>,
    A: Clone,
{
    container.into_iter().cloned().collect()
}

/// A fold over every element of a borrowable collection, in iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use focal::optics::{folded, max_of};
///
/// let scores = BTreeSet::from([3, 9, 4]);
/// assert_eq!(max_of(&folded::<BTreeSet<i32>, i32>(), scores), Some(9));
/// ```
pub fn folded<C, A>() -> Folding<C, Vec<A>, fn(&C) -> Vec<A>>
where
    for<'a> &'a C: IntoIterator<Item = &'a A>,
    A: Clone,
{
    folding(cloned_elements::<C, A> as fn(&C) -> Vec<A>)
}

/// A monadic getter: a host computation run on the whole.
///
/// See [`act`].
pub struct Act<M, S, A, G> {
    action: G,
    _marker: PhantomData<fn(M, S) -> A>,
}

impl<M, S, A, G: Clone> Clone for Act<M, S, A, G> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M, S, A, G> fmt::Debug for Act<M, S, A, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Act").finish_non_exhaustive()
    }
}

impl<F, M, S, A, G> Optic<F, S, S, A, A> for Act<M, S, A, G>
where
    M: Monad,
    F: Effective<M>,
    F::Output: 'static,
    G: Fn(&S) -> M::Of<A>,
    A: 'static,
{
    fn apply<H>(&self, mut focus: H, whole: S) -> F::Of<S>
    where
        H: FnMut(A) -> F::Of<A>,
    {
        F::effective::<S>(M::flat_map((self.action)(&whole), |part| {
            F::ineffective::<A>(focus(part))
        }))
    }
}

/// Builds a monadic getter from a host computation.
///
/// An action is usable wherever its monad `M` is the host of an effective
/// action type: with [`perform`](super::perform) for any monad, and with
/// `view` when `M` is [`IdentityBrand`](crate::typeclass::IdentityBrand).
///
/// # Examples
///
/// ```rust
/// use focal::optics::{act, compose, perform, Snd};
/// use focal::typeclass::OptionBrand;
///
/// let checked_half = compose(
///     Snd,
///     act::<OptionBrand, _, _, _>(|n: &i32| (n % 2 == 0).then_some(n / 2)),
/// );
/// assert_eq!(perform::<OptionBrand, _, _, _>(&checked_half, ("even", 8)), Some(4));
/// assert_eq!(perform::<OptionBrand, _, _, _>(&checked_half, ("odd", 7)), None);
/// ```
pub const fn act<M, S, A, G>(action: G) -> Act<M, S, A, G>
where
    M: Monad,
    G: Fn(&S) -> M::Of<A>,
{
    Act {
        action,
        _marker: PhantomData,
    }
}
