//! Functor type class - mapping over branded values.
//!
//! `Functor` is the mapping capability every optic relies on. Lenses and
//! isomorphisms demand nothing more of their action type, which is why they
//! are usable at every other capability.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Functor, OptionBrand};
//!
//! let transformed = OptionBrand::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A brand whose values can have a function mapped over their contents.
///
/// The `'static` bounds allow carriers to store the mapping function in a
/// boxed closure, which the store-pair and positional rebuild carriers do.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the branded value.
    ///
    /// # Arguments
    ///
    /// * `value` - The branded value to transform
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// The branded value holding the transformed contents
    fn fmap<X, Y, G>(value: Self::Of<X>, function: G) -> Self::Of<Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static;

    /// Replaces the contents with a constant.
    fn replace<X, Y>(value: Self::Of<X>, replacement: Y) -> Self::Of<Y>
    where
        X: 'static,
        Y: 'static,
    {
        Self::fmap(value, move |_| replacement)
    }

    /// Discards the contents, keeping only the structure.
    fn void<X: 'static>(value: Self::Of<X>) -> Self::Of<()> {
        Self::replace::<X, ()>(value, ())
    }
}
