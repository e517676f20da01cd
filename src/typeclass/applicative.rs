//! Applicative type class - lifting values and combining independent effects.
//!
//! Traversals and folds demand `Applicative` of their action type: visiting
//! several foci means combining several independent actions, left to right.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::map2(F::pure(()), fa, |(), a| a) == fa
//! F::map2(fa, F::pure(()), |a, ()| a) == fa
//! ```
//!
//! ## Associativity
//!
//! ```text
//! F::map2(F::map2(fa, fb, pair), fc, flatten_left)
//!     == F::map2(fa, F::map2(fb, fc, pair), flatten_right)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Applicative, OptionBrand};
//!
//! let sum = OptionBrand::map2(Some(1), Some(2), |a: i32, b: i32| a + b);
//! assert_eq!(sum, Some(3));
//! assert_eq!(OptionBrand::map2(Some(1), None::<i32>, |a, b| a + b), None);
//! ```

use super::functor::Functor;

/// A functor whose actions can be created from pure values and combined.
pub trait Applicative: Functor {
    /// Lifts a pure value into the action type.
    fn pure<X: 'static>(value: X) -> Self::Of<X>;

    /// Combines two actions, running `first` before `second`.
    ///
    /// # Arguments
    ///
    /// * `first` - The action whose effects happen first
    /// * `second` - The action whose effects happen second
    /// * `function` - Combines the two results
    fn map2<X, Y, Z, G>(first: Self::Of<X>, second: Self::Of<Y>, function: G) -> Self::Of<Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static;

    /// Runs both actions and keeps the result of the second.
    fn apply_second<X, Y>(first: Self::Of<X>, second: Self::Of<Y>) -> Self::Of<Y>
    where
        X: 'static,
        Y: 'static,
    {
        Self::map2(first, second, |_, kept| kept)
    }
}
