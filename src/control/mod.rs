//! Control structures shared by the optics.
//!
//! - [`Either`]: a value that is one of two alternatives, the whole of a
//!   [`merged`](crate::optics::merged) lens.

mod either;

pub use either::Either;
