//! Host contexts and zooming.
//!
//! This module provides the sequencing contexts an optic can be consumed in
//! besides plain values:
//!
//! - [`StateT`]: computations threading a state, with the optic consumers
//!   [`use_`], [`uses`], [`assign`], [`modifying`], [`modifying_and_report`]
//!   and [`assigning_and_report`]
//! - [`ReaderT`]: computations reading an environment, with [`query`],
//!   [`queries`] and [`magnify`]
//! - [`RwsT`]: reader, writer and state combined
//!
//! Each is generic over its host monad brand; [`State`], [`Reader`] and
//! [`Rws`] fix the host to [`IdentityBrand`](crate::typeclass::IdentityBrand).
//!
//! The zoom family ([`zoom`], [`zoom_may`], [`zoom_err`], [`zoom_rws`]) runs a
//! computation written against a part of the state inside a computation
//! over the whole.
//!
//! # Examples
//!
//! ```rust
//! use focal::effect::{assign, use_, zoom, State};
//! use focal::optics::{Fst, Snd};
//!
//! let double: State<i32, ()> = State::modify(|n: i32| n * 2);
//! let program: State<(i32, i32), i32> = zoom(Fst, double)
//!     .then(assign(Snd, 0))
//!     .then(use_(Fst));
//!
//! assert_eq!(program.run_state((21, 9)), (42, (42, 0)));
//! ```

mod reader;
mod rws;
mod state;
mod zoom;

pub use reader::{magnify, queries, query, Reader, ReaderT};
pub use rws::{Rws, RwsT};
pub use state::{
    assign, assigning_and_report, modifying, modifying_and_report, use_, uses, State, StateT,
};
pub use zoom::{zoom, zoom_err, zoom_may, zoom_rws};
