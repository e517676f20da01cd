//! A value that is one of two alternatives.
//!
//! [`Either`] is the sum type whose sides [`merged`](crate::optics::merged)
//! focuses through: a lens over `Either<S1, S2>` built from a lens over each
//! side.
//!
//! # Examples
//!
//! ```rust
//! use focal::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! let result = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The first alternative.
    Left(L),
    /// The second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Collapses both alternatives into one type.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}
