//! The constant action type.
//!
//! `Const<R, X>` holds an `R` and pretends to hold an `X`. Running an optic
//! at [`ConstBrand`] never rebuilds anything: the rebuild function handed to
//! `fmap` is dropped, and the value produced by the focus function travels
//! back out untouched. That is how `view` reads through a lens, and, with a
//! monoidal `R`, how `to_list_of` and `fold_map_of` read through a fold.

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{
    Applicative, Effective, Functor, Identity, IdentityBrand, Monoid, Phantom, TypeConstructor,
};

/// A value of type `R` tagged with a phantom type `X`.
pub struct Const<R, X> {
    value: R,
    _marker: PhantomData<fn() -> X>,
}

impl<R, X> Const<R, X> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> R {
        self.value
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &R {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<Y>(self) -> Const<R, Y> {
        Const::new(self.value)
    }
}

impl<R: Clone, X> Clone for Const<R, X> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R: PartialEq, X> PartialEq for Const<R, X> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: fmt::Debug, X> fmt::Debug for Const<R, X> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// Brand for [`Const`] with a fixed carried type `R`.
pub struct ConstBrand<R>(PhantomData<R>);

impl<R> TypeConstructor for ConstBrand<R> {
    type Of<X> = Const<R, X>;
}

impl<R> Functor for ConstBrand<R> {
    #[inline]
    fn fmap<X, Y, G>(value: Const<R, X>, _function: G) -> Const<R, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        value.retag()
    }
}

impl<R> Phantom for ConstBrand<R> {
    #[inline]
    fn coerce<X, Y>(value: Const<R, X>) -> Const<R, Y> {
        value.retag()
    }
}

/// Combining two constant actions combines what they carry.
impl<R: Monoid> Applicative for ConstBrand<R> {
    #[inline]
    fn pure<X: 'static>(_value: X) -> Const<R, X> {
        Const::new(R::empty())
    }

    #[inline]
    fn map2<X, Y, Z, G>(first: Const<R, X>, second: Const<R, Y>, _function: G) -> Const<R, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        Const::new(first.value.combine(second.value))
    }
}

/// A constant action is a pure host computation that already has its result.
impl<R> Effective<IdentityBrand> for ConstBrand<R> {
    type Output = R;

    fn effective<X>(action: Identity<R>) -> Const<R, X> {
        Const::new(action.0)
    }

    fn ineffective<X>(value: Const<R, X>) -> Identity<R> {
        Identity(value.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_never_runs_the_function() {
        let mapped = ConstBrand::<i32>::fmap(Const::<i32, String>::new(7), |_: String| -> u8 {
            unreachable!("constant actions never hold a value to map")
        });
        assert_eq!(mapped.into_inner(), 7);
    }

    #[rstest]
    fn map2_combines_carried_values() {
        let combined = ConstBrand::<Vec<i32>>::map2(
            Const::<_, u8>::new(vec![1]),
            Const::<_, u8>::new(vec![2, 3]),
            |a, b| a + b,
        );
        assert_eq!(combined.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn pure_carries_empty() {
        let lifted: Const<String, i32> = ConstBrand::<String>::pure(5);
        assert_eq!(lifted.as_inner(), "");
    }

    #[rstest]
    fn effective_round_trips_through_identity() {
        let action: Const<i32, String> = ConstBrand::<i32>::effective(Identity(3));
        assert_eq!(ConstBrand::<i32>::ineffective(action), Identity(3));
    }
}
