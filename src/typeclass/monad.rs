//! Monad type class - sequencing dependent actions.
//!
//! Host contexts (`StateT`, `ReaderT`, `RwsT`) are parameterized by a monad
//! brand, and the effectful capability bridges a monad into the optic
//! algebra.
//!
//! # Laws
//!
//! ```text
//! M::flat_map(M::pure(a), f) == f(a)
//! M::flat_map(ma, M::pure) == ma
//! M::flat_map(M::flat_map(ma, f), g) == M::flat_map(ma, |x| M::flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Monad, OptionBrand};
//!
//! let halved = OptionBrand::flat_map(Some(8), |n: i32| (n % 2 == 0).then_some(n / 2));
//! assert_eq!(halved, Some(4));
//! ```

use super::applicative::Applicative;

/// An applicative whose actions can depend on the results of earlier ones.
///
/// Unlike [`Functor::fmap`](super::Functor::fmap), the continuation given to
/// `flat_map` is not required to be `'static`: every monad brand in this
/// crate runs its continuation eagerly.
pub trait Monad: Applicative {
    /// Runs `value`, then feeds its result to `function`.
    fn flat_map<X, Y, G>(value: Self::Of<X>, function: G) -> Self::Of<Y>
    where
        G: FnOnce(X) -> Self::Of<Y>,
        X: 'static,
        Y: 'static;
}
