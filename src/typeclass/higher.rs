//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: a trait cannot
//! abstract over `Option<_>` or `Result<_, E>` as type constructors. This
//! module works around the limitation with *brands*. A brand is an
//! uninhabited marker type whose generic associated type [`TypeConstructor::Of`]
//! names the constructor it stands for:
//!
//! ```text
//! OptionBrand::Of<X>      = Option<X>
//! ResultBrand<E>::Of<X>   = Result<X, E>
//! IdentityBrand::Of<X>    = Identity<X>
//! ```
//!
//! Brands are what lets an optic be generic over its *action type*: the
//! optic receives the brand as a type parameter and builds `F::Of<T>` values
//! without knowing which constructor `F` denotes.
//!
//! # Example
//!
//! ```rust
//! use focal::typeclass::{OptionBrand, TypeConstructor};
//!
//! fn nothing<F: TypeConstructor>() -> Option<F::Of<i32>> {
//!     None
//! }
//!
//! let value: Option<Option<i32>> = nothing::<OptionBrand>();
//! assert_eq!(value, None);
//! ```

/// A brand naming a type constructor of one argument.
///
/// # Laws
///
/// A brand must be a pure name: `Of<X>` is fully determined by the brand and
/// `X`, so two occurrences of `F::Of<X>` always denote the same type.
pub trait TypeConstructor {
    /// The constructor applied to `X`.
    type Of<X>;
}
