//! The effective action type.
//!
//! [`Effect`] wraps a host computation `M::Of<R>` and ignores the type it is
//! tagged with. It is how monadic getters built with `act` are run
//! (`perform`), and how `magnify` threads a reader computation through an
//! optic. When `R` is a monoid, effects over several foci are sequenced
//! left to right and their results combined.

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Applicative, Effective, Functor, Monad, Monoid, Phantom, TypeConstructor};

/// A host computation producing `R`, tagged with a phantom type `X`.
pub struct Effect<M: Monad, R, X> {
    action: M::Of<R>,
    _marker: PhantomData<fn() -> X>,
}

impl<M: Monad, R, X> Effect<M, R, X> {
    /// Wraps a host computation.
    pub const fn new(action: M::Of<R>) -> Self {
        Self {
            action,
            _marker: PhantomData,
        }
    }

    /// Returns the host computation.
    pub fn into_inner(self) -> M::Of<R> {
        self.action
    }

    fn retag<Y>(self) -> Effect<M, R, Y> {
        Effect::new(self.action)
    }
}

impl<M: Monad, R, X> fmt::Debug for Effect<M, R, X>
where
    M::Of<R>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Effect").field(&self.action).finish()
    }
}

/// Brand for [`Effect`] over host monad `M` with result type `R`.
pub struct EffectBrand<M, R>(PhantomData<(M, R)>);

impl<M: Monad, R> TypeConstructor for EffectBrand<M, R> {
    type Of<X> = Effect<M, R, X>;
}

impl<M: Monad, R> Functor for EffectBrand<M, R> {
    fn fmap<X, Y, G>(value: Effect<M, R, X>, _function: G) -> Effect<M, R, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        value.retag()
    }
}

impl<M: Monad, R> Phantom for EffectBrand<M, R> {
    fn coerce<X, Y>(value: Effect<M, R, X>) -> Effect<M, R, Y> {
        value.retag()
    }
}

impl<M: Monad, R: Monoid + 'static> Applicative for EffectBrand<M, R> {
    fn pure<X: 'static>(_value: X) -> Effect<M, R, X> {
        Effect::new(M::pure(R::empty()))
    }

    fn map2<X, Y, Z, G>(first: Effect<M, R, X>, second: Effect<M, R, Y>, _function: G) -> Effect<M, R, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        Effect::new(M::map2(first.action, second.action, R::combine))
    }
}

impl<M: Monad, R> Effective<M> for EffectBrand<M, R> {
    type Output = R;

    fn effective<X>(action: M::Of<R>) -> Effect<M, R, X> {
        Effect::new(action)
    }

    fn ineffective<X>(value: Effect<M, R, X>) -> M::Of<R> {
        value.action
    }
}
