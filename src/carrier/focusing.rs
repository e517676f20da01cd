//! Monadic focusing carriers used by the zoom family.
//!
//! Zooming runs a stateful computation over a sub-state by driving the
//! optic with an action that *is* that computation: the focus function runs
//! the inner computation on the focus and returns its result together with
//! the new focus, and the optic rebuilds the whole inside the host monad.
//! The result of the inner computation travels alongside as a monoidal
//! accumulator, so a traversal zoom combines the results of every focus.
//!
//! | carrier          | host value                    | accumulator       |
//! |------------------|-------------------------------|-------------------|
//! | [`Focusing`]     | `M::Of<(C, X)>`               | `C`               |
//! | [`FocusingWith`] | `M::Of<(C, X, W)>`            | `C`, log `W`      |
//! | [`FocusingMay`]  | `M::Of<(May<C>, X)>`          | optional `C`      |
//! | [`FocusingErr`]  | `M::Of<(Fallible<E, C>, X)>`  | fallible `C`      |

use std::marker::PhantomData;

use super::accumulator::{Fallible, May};
use crate::typeclass::{Applicative, Functor, Monad, Monoid, TypeConstructor};

/// A host computation yielding an accumulated result `C` and a value `X`.
pub struct Focusing<M: Monad, C, X>(pub M::Of<(C, X)>);

/// Brand for [`Focusing`].
pub struct FocusingBrand<M, C>(PhantomData<(M, C)>);

impl<M: Monad, C> TypeConstructor for FocusingBrand<M, C> {
    type Of<X> = Focusing<M, C, X>;
}

impl<M: Monad, C: 'static> Functor for FocusingBrand<M, C> {
    fn fmap<X, Y, G>(value: Focusing<M, C, X>, function: G) -> Focusing<M, C, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        Focusing(M::fmap(value.0, move |(accumulated, inner)| {
            (accumulated, function(inner))
        }))
    }
}

impl<M: Monad, C: Monoid + 'static> Applicative for FocusingBrand<M, C> {
    fn pure<X: 'static>(value: X) -> Focusing<M, C, X> {
        Focusing(M::pure((C::empty(), value)))
    }

    fn map2<X, Y, Z, G>(first: Focusing<M, C, X>, second: Focusing<M, C, Y>, function: G) -> Focusing<M, C, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        let later = second.0;
        Focusing(M::flat_map(first.0, move |(accumulated, left)| {
            M::fmap(later, move |(more, right)| {
                (accumulated.combine(more), function(left, right))
            })
        }))
    }
}

/// A host computation yielding a result `C`, a value `X` and a log `W`.
pub struct FocusingWith<M: Monad, C, W, X>(pub M::Of<(C, X, W)>);

/// Brand for [`FocusingWith`].
pub struct FocusingWithBrand<M, C, W>(PhantomData<(M, C, W)>);

impl<M: Monad, C, W> TypeConstructor for FocusingWithBrand<M, C, W> {
    type Of<X> = FocusingWith<M, C, W, X>;
}

impl<M: Monad, C: 'static, W: 'static> Functor for FocusingWithBrand<M, C, W> {
    fn fmap<X, Y, G>(value: FocusingWith<M, C, W, X>, function: G) -> FocusingWith<M, C, W, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        FocusingWith(M::fmap(value.0, move |(accumulated, inner, log)| {
            (accumulated, function(inner), log)
        }))
    }
}

impl<M: Monad, C: Monoid + 'static, W: Monoid + 'static> Applicative for FocusingWithBrand<M, C, W> {
    fn pure<X: 'static>(value: X) -> FocusingWith<M, C, W, X> {
        FocusingWith(M::pure((C::empty(), value, W::empty())))
    }

    fn map2<X, Y, Z, G>(
        first: FocusingWith<M, C, W, X>,
        second: FocusingWith<M, C, W, Y>,
        function: G,
    ) -> FocusingWith<M, C, W, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        let later = second.0;
        FocusingWith(M::flat_map(first.0, move |(accumulated, left, log)| {
            M::fmap(later, move |(more, right, more_log)| {
                (
                    accumulated.combine(more),
                    function(left, right),
                    log.combine(more_log),
                )
            })
        }))
    }
}

/// [`Focusing`] whose accumulator short-circuits to absence.
pub struct FocusingMay<M: Monad, C, X>(pub Focusing<M, May<C>, X>);

/// Brand for [`FocusingMay`].
pub struct FocusingMayBrand<M, C>(PhantomData<(M, C)>);

impl<M: Monad, C> TypeConstructor for FocusingMayBrand<M, C> {
    type Of<X> = FocusingMay<M, C, X>;
}

impl<M: Monad, C: 'static> Functor for FocusingMayBrand<M, C> {
    fn fmap<X, Y, G>(value: FocusingMay<M, C, X>, function: G) -> FocusingMay<M, C, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        FocusingMay(FocusingBrand::<M, May<C>>::fmap(value.0, function))
    }
}

impl<M: Monad, C: Monoid + 'static> Applicative for FocusingMayBrand<M, C> {
    fn pure<X: 'static>(value: X) -> FocusingMay<M, C, X> {
        FocusingMay(FocusingBrand::<M, May<C>>::pure(value))
    }

    fn map2<X, Y, Z, G>(first: FocusingMay<M, C, X>, second: FocusingMay<M, C, Y>, function: G) -> FocusingMay<M, C, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        FocusingMay(FocusingBrand::<M, May<C>>::map2(first.0, second.0, function))
    }
}

/// [`Focusing`] whose accumulator short-circuits to the first failure.
pub struct FocusingErr<M: Monad, E, C, X>(pub Focusing<M, Fallible<E, C>, X>);

/// Brand for [`FocusingErr`].
pub struct FocusingErrBrand<M, E, C>(PhantomData<(M, E, C)>);

impl<M: Monad, E, C> TypeConstructor for FocusingErrBrand<M, E, C> {
    type Of<X> = FocusingErr<M, E, C, X>;
}

impl<M: Monad, E: 'static, C: 'static> Functor for FocusingErrBrand<M, E, C> {
    fn fmap<X, Y, G>(value: FocusingErr<M, E, C, X>, function: G) -> FocusingErr<M, E, C, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        FocusingErr(FocusingBrand::<M, Fallible<E, C>>::fmap(value.0, function))
    }
}

impl<M: Monad, E: 'static, C: Monoid + 'static> Applicative for FocusingErrBrand<M, E, C> {
    fn pure<X: 'static>(value: X) -> FocusingErr<M, E, C, X> {
        FocusingErr(FocusingBrand::<M, Fallible<E, C>>::pure(value))
    }

    fn map2<X, Y, Z, G>(
        first: FocusingErr<M, E, C, X>,
        second: FocusingErr<M, E, C, Y>,
        function: G,
    ) -> FocusingErr<M, E, C, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        FocusingErr(FocusingBrand::<M, Fallible<E, C>>::map2(first.0, second.0, function))
    }
}
