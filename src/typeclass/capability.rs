//! Capability interfaces for action types.
//!
//! An optic's kind is decided by what it demands of its action type. Plain
//! [`Functor`] is enough for lenses and isomorphisms; the traits here add the
//! restrictions that carve out the read-only and write-only kinds:
//!
//! - [`Phantom`]: the action never holds a value of its type argument, so
//!   an optic consumed at it can only report information (getters, folds).
//! - [`Committing`]: the action is isomorphic to [`Identity`](super::Identity),
//!   so no effect can be smuggled through it (setters).
//! - [`Effective`]: the action is isomorphic to a host monad computation
//!   that ignores the focus type (monadic getters built with `act`).
//!
//! All of these distinctions are checked at compile time. Using a getter
//! where a setter is required fails to type-check because the brand used
//! for writing does not implement [`Phantom`].

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;

/// An action type that does not depend on its type argument.
///
/// # Laws
///
/// ```text
/// F::coerce(F::fmap(fa, f)) == F::coerce(fa)
/// ```
pub trait Phantom: Functor {
    /// Changes the type argument without touching the action.
    fn coerce<X, Y>(value: Self::Of<X>) -> Self::Of<Y>;
}

/// An action type isomorphic to the identity wrapper.
///
/// # Laws
///
/// ```text
/// F::commit(F::pure(x)) == x
/// F::pure(F::commit(fx)) == fx
/// ```
pub trait Committing: Applicative {
    /// Unwraps the action, losing nothing.
    fn commit<X>(value: Self::Of<X>) -> X;
}

/// An action type isomorphic to a host computation `M::Of<Output>`.
///
/// `effective` and `ineffective` are mutually inverse for every type
/// argument `X`; `focal::optics::effective_iso` packages them as an
/// isomorphism.
pub trait Effective<M: Monad>: Phantom {
    /// The result type of the wrapped host computation.
    type Output;

    /// Wraps a host computation as an action.
    fn effective<X>(action: M::Of<Self::Output>) -> Self::Of<X>;

    /// Recovers the host computation from an action.
    fn ineffective<X>(value: Self::Of<X>) -> M::Of<Self::Output>;
}
