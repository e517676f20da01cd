//! Type classes over branded action types.
//!
//! - [`TypeConstructor`]: Brands emulating higher-kinded types
//! - [`Functor`]: Mapping over branded values
//! - [`Applicative`]: Lifting pure values and combining independent actions
//! - [`Monad`]: Sequencing dependent actions
//! - [`Phantom`], [`Committing`], [`Effective`]: Capabilities that decide an optic's kind
//! - [`Semigroup`], [`Monoid`]: Accumulation for folds
//!
//! ## Brands
//!
//! - [`IdentityBrand`]: No effect at all ([`Identity`])
//! - [`OptionBrand`], [`ResultBrand`]: Short-circuiting host monads
//! - [`PairBrand`]: Result paired with a monoidal output
//!
//! # Examples
//!
//! ```rust
//! use focal::typeclass::{Applicative, Functor, IdentityBrand, Identity};
//!
//! let doubled = IdentityBrand::fmap(IdentityBrand::pure(21), |n: i32| n * 2);
//! assert_eq!(doubled, Identity(42));
//! ```

mod applicative;
mod capability;
mod functor;
mod higher;
mod identity;
mod instances;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use capability::{Committing, Effective, Phantom};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::{Identity, IdentityBrand};
pub use instances::{OptionBrand, PairBrand, ResultBrand};
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
