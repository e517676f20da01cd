//! Brands for standard library types and the writer-shaped pair.

use std::marker::PhantomData;

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;
use super::monoid::Monoid;

/// Brand for [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionBrand;

impl TypeConstructor for OptionBrand {
    type Of<X> = Option<X>;
}

impl Functor for OptionBrand {
    fn fmap<X, Y, G>(value: Option<X>, function: G) -> Option<Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        value.map(function)
    }
}

impl Applicative for OptionBrand {
    fn pure<X: 'static>(value: X) -> Option<X> {
        Some(value)
    }

    fn map2<X, Y, Z, G>(first: Option<X>, second: Option<Y>, function: G) -> Option<Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        first.zip(second).map(|(left, right)| function(left, right))
    }
}

impl Monad for OptionBrand {
    fn flat_map<X, Y, G>(value: Option<X>, function: G) -> Option<Y>
    where
        G: FnOnce(X) -> Option<Y>,
        X: 'static,
        Y: 'static,
    {
        value.and_then(function)
    }
}

/// Brand for [`Result`] with a fixed error type.
///
/// `map2` keeps the first error it meets, scanning left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultBrand<E>(PhantomData<E>);

impl<E> TypeConstructor for ResultBrand<E> {
    type Of<X> = Result<X, E>;
}

impl<E> Functor for ResultBrand<E> {
    fn fmap<X, Y, G>(value: Result<X, E>, function: G) -> Result<Y, E>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        value.map(function)
    }
}

impl<E> Applicative for ResultBrand<E> {
    fn pure<X: 'static>(value: X) -> Result<X, E> {
        Ok(value)
    }

    fn map2<X, Y, Z, G>(first: Result<X, E>, second: Result<Y, E>, function: G) -> Result<Z, E>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        Ok(function(first?, second?))
    }
}

impl<E> Monad for ResultBrand<E> {
    fn flat_map<X, Y, G>(value: Result<X, E>, function: G) -> Result<Y, E>
    where
        G: FnOnce(X) -> Result<Y, E>,
        X: 'static,
        Y: 'static,
    {
        value.and_then(function)
    }
}

/// Brand for `(W, X)`: a result paired with an accumulated output.
///
/// This is the writer shape. It is a functor for any `W`, and applicative
/// and monadic when `W` is a monoid, in which case outputs are combined left
/// to right. The report-back operators (`over_and_report` and friends) run
/// optics at this brand to hand the new focus back alongside the new whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairBrand<W>(PhantomData<W>);

impl<W> TypeConstructor for PairBrand<W> {
    type Of<X> = (W, X);
}

impl<W> Functor for PairBrand<W> {
    fn fmap<X, Y, G>((output, value): (W, X), function: G) -> (W, Y)
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        (output, function(value))
    }
}

impl<W: Monoid> Applicative for PairBrand<W> {
    fn pure<X: 'static>(value: X) -> (W, X) {
        (W::empty(), value)
    }

    fn map2<X, Y, Z, G>(first: (W, X), second: (W, Y), function: G) -> (W, Z)
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        (first.0.combine(second.0), function(first.1, second.1))
    }
}

impl<W: Monoid> Monad for PairBrand<W> {
    fn flat_map<X, Y, G>((output, value): (W, X), function: G) -> (W, Y)
    where
        G: FnOnce(X) -> (W, Y),
        X: 'static,
        Y: 'static,
    {
        let (more, result) = function(value);
        (output.combine(more), result)
    }
}
