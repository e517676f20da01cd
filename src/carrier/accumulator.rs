//! Monoid-shaped accumulators used when an optic is consumed as a fold.
//!
//! Each accumulator is the carried type of a constant action: running a fold
//! at `ConstBrand<Max<A>>` tracks the largest focus, at
//! `ConstBrand<Traversed<F>>` sequences one effect per focus, and so on.
//! [`May`] and [`Fallible`] are the accumulators of the short-circuiting zoom
//! carriers.

use std::fmt;

use crate::typeclass::{Applicative, Monad, Monoid, Semigroup};

/// Tracks the largest value seen. Ties keep the later value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max<A>(pub Option<A>);

/// Tracks the smallest value seen. Ties keep the earlier value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min<A>(pub Option<A>);

/// Keeps the first value seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct First<A>(pub Option<A>);

/// A monoidal value, or a short-circuited absence.
///
/// Once any side is absent the combination stays absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct May<A>(pub Option<A>);

/// A monoidal value, or the first failure met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fallible<E, A>(pub Result<A, E>);

/// An applicative action whose result is discarded; combining sequences them.
pub struct Traversed<F: Applicative>(pub F::Of<()>);

/// A monadic action whose result is discarded; combining sequences them.
pub struct Sequenced<M: Monad>(pub M::Of<()>);

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(left), Some(right)) => Self(Some(left.max(right))),
            (left, None) => Self(left),
            (None, right) => Self(right),
        }
    }
}

impl<A: Ord> Monoid for Max<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Some(left), Some(right)) => Self(Some(left.min(right))),
            (left, None) => Self(left),
            (None, right) => Self(right),
        }
    }
}

impl<A: Ord> Monoid for Min<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Semigroup> Semigroup for May<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.zip(other.0).map(|(left, right)| left.combine(right)))
    }
}

impl<A: Monoid> Monoid for May<A> {
    fn empty() -> Self {
        Self(Some(A::empty()))
    }
}

impl<E, A: Semigroup> Semigroup for Fallible<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Ok(left), Ok(right)) => Self(Ok(left.combine(right))),
            (Err(error), _) | (Ok(_), Err(error)) => Self(Err(error)),
        }
    }
}

impl<E, A: Monoid> Monoid for Fallible<E, A> {
    fn empty() -> Self {
        Self(Ok(A::empty()))
    }
}

impl<F: Applicative> Semigroup for Traversed<F> {
    fn combine(self, other: Self) -> Self {
        Self(F::apply_second(self.0, other.0))
    }
}

impl<F: Applicative> Monoid for Traversed<F> {
    fn empty() -> Self {
        Self(F::pure(()))
    }
}

impl<F: Applicative> fmt::Debug for Traversed<F>
where
    F::Of<()>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Traversed").field(&self.0).finish()
    }
}

impl<M: Monad> Semigroup for Sequenced<M> {
    fn combine(self, other: Self) -> Self {
        let next = other.0;
        Self(M::flat_map(self.0, move |()| next))
    }
}

impl<M: Monad> Monoid for Sequenced<M> {
    fn empty() -> Self {
        Self(M::pure(()))
    }
}

impl<M: Monad> fmt::Debug for Sequenced<M>
where
    M::Of<()>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Sequenced").field(&self.0).finish()
    }
}

impl<A> From<Max<A>> for Option<A> {
    fn from(value: Max<A>) -> Self {
        value.0
    }
}

impl<A> From<Min<A>> for Option<A> {
    fn from(value: Min<A>) -> Self {
        value.0
    }
}

impl<A> From<First<A>> for Option<A> {
    fn from(value: First<A>) -> Self {
        value.0
    }
}
