//! Internal carrier toolkit.
//!
//! Optics are generic over their action type; the carriers in this module
//! are the action types the library itself instantiates them at:
//!
//! - [`Const`]: read without rebuilding (`view`, folds)
//! - [`Context`]: the store-pair witness behind `clone_lens` and `alongside`
//! - [`Bazaar`]: the positional rebuild structure behind `clone_traversal`
//! - [`Effect`]: host monad computations (`perform`, `magnify`)
//! - [`ElementSearch`]: single-focus search (`element_of`)
//! - [`Focusing`] and its variants: zooming into sub-state
//! - [`Max`], [`Min`], [`First`], [`May`], [`Fallible`], [`Traversed`],
//!   [`Sequenced`]: monoid-shaped accumulators for folds

use crate::typeclass::{Applicative, Committing, Functor, Phantom};

mod accumulator;
mod bazaar;
mod constant;
mod context;
mod effect;
mod element;
mod focusing;

pub use accumulator::{Fallible, First, Max, May, Min, Sequenced, Traversed};
pub use bazaar::{Bazaar, BazaarBrand};
pub use constant::{Const, ConstBrand};
pub use context::{Context, ContextBrand};
pub use effect::{Effect, EffectBrand};
pub use element::{ElementOfBrand, ElementSearch};
pub use focusing::{
    Focusing, FocusingBrand, FocusingErr, FocusingErrBrand, FocusingMay, FocusingMayBrand,
    FocusingWith, FocusingWithBrand,
};

static_assertions::assert_impl_all!(ConstBrand<Vec<i32>>: Phantom, Applicative);
static_assertions::assert_not_impl_any!(ConstBrand<Vec<i32>>: Committing);
static_assertions::assert_impl_all!(ContextBrand<i32, i32>: Functor);
static_assertions::assert_not_impl_any!(ContextBrand<i32, i32>: Applicative, Phantom);
static_assertions::assert_not_impl_any!(Bazaar<i32, i32, Vec<i32>>: Send, Sync);
