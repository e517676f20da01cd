//! # focal
//!
//! Composable optics for Rust: lenses, isomorphisms, getters, folds,
//! traversals and setters as values of one shape, composed with one
//! operation.
//!
//! ## Overview
//!
//! Every optic implements [`Optic<F, S, T, A, B>`](optics::Optic): given a
//! function from a focus `A` to an action `F::Of<B>`, it turns a whole `S`
//! into an action `F::Of<T>`. What an optic demands of the action type `F`
//! decides what it can be used for, and composing two optics with
//! [`compose`](optics::compose) yields an optic usable wherever both are.
//!
//! - **Type Classes** ([`typeclass`]): brand-encoded `Functor`,
//!   `Applicative` and `Monad`, the capability interfaces `Phantom`,
//!   `Committing` and `Effective`, and `Semigroup`/`Monoid`
//! - **Carriers** ([`carrier`]): the action types optics are run at: the
//!   constant action, the store-pair witness, the positional rebuild
//!   structure, the focusing carriers of zoom and the fold accumulators
//! - **Optics** ([`optics`]): construction, composition and consumption
//! - **Host Contexts** ([`effect`]): `StateT`, `ReaderT` and `RwsT` with
//!   optic-aware combinators and zoom
//!
//! ## Feature Flags
//!
//! - `effect` (default): host contexts and zoom
//! - `derive` (default): `#[derive(Lenses)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//!
//! let pair = (1, "hello");
//! assert_eq!(view(&Snd, pair), "hello");
//! assert_eq!(set(&Snd, "world", pair), (1, "world"));
//!
//! let wrapped = iso(|n: i32| vec![n], |items: Vec<i32>| items.into_iter().sum::<i32>());
//! assert_eq!(view(&wrapped, 7), vec![7]);
//! assert_eq!(over(&wrapped, |mut items: Vec<i32>| { items.push(3); items }, 7), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the type classes, the optics and their consumers, and, with
/// the `effect` feature, the host contexts.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::optics::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod carrier;
pub mod control;
pub mod optics;
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
