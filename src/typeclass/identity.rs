//! The identity action type.
//!
//! `Identity` carries no effect at all. Running an optic with
//! [`IdentityBrand`] as its action type is exactly "modify the focus and
//! rebuild the whole", which is how `over` and `set` are implemented. It is
//! the only brand with the committing capability.

use super::applicative::Applicative;
use super::capability::Committing;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// A value wrapped without any additional behavior.
///
/// # Examples
///
/// ```rust
/// use focal::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityBrand;

impl TypeConstructor for IdentityBrand {
    type Of<X> = Identity<X>;
}

impl Functor for IdentityBrand {
    #[inline]
    fn fmap<X, Y, G>(value: Identity<X>, function: G) -> Identity<Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        Identity(function(value.0))
    }
}

impl Applicative for IdentityBrand {
    #[inline]
    fn pure<X: 'static>(value: X) -> Identity<X> {
        Identity(value)
    }

    #[inline]
    fn map2<X, Y, Z, G>(first: Identity<X>, second: Identity<Y>, function: G) -> Identity<Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        Identity(function(first.0, second.0))
    }
}

impl Monad for IdentityBrand {
    #[inline]
    fn flat_map<X, Y, G>(value: Identity<X>, function: G) -> Identity<Y>
    where
        G: FnOnce(X) -> Identity<Y>,
        X: 'static,
        Y: 'static,
    {
        function(value.0)
    }
}

impl Committing for IdentityBrand {
    #[inline]
    fn commit<X>(value: Identity<X>) -> X {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_and_into_inner() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.as_inner(), "hello");
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped, Identity(42));
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn fmap_applies_function(#[case] value: i32) {
        let mapped = IdentityBrand::fmap(Identity(value), |n: i32| i64::from(n) + 1);
        assert_eq!(mapped, Identity(i64::from(value) + 1));
    }

    #[rstest]
    fn map2_combines_left_to_right() {
        let combined = IdentityBrand::map2(
            Identity(String::from("a")),
            Identity(String::from("b")),
            |left, right| left + &right,
        );
        assert_eq!(combined, Identity(String::from("ab")));
    }

    #[rstest]
    fn flat_map_follows_pure() {
        let result = IdentityBrand::flat_map(IdentityBrand::pure(3), |n: i32| Identity(n * 2));
        assert_eq!(result, Identity(6));
    }

    #[rstest]
    fn commit_is_lossless() {
        assert_eq!(IdentityBrand::commit(IdentityBrand::pure(vec![1, 2])), vec![1, 2]);
    }
}
