//! Derive macros for focal optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for every named struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use focal::optics::{set, view};
//! use focal_derive::Lenses;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated constructors:
//! // - Point::x_lens() -> Lens<Point, Point, i32, i32, fn(&Point) -> i32, fn(Point, i32) -> Point>
//! // - Point::y_lens() -> Lens<Point, Point, i32, i32, fn(&Point) -> i32, fn(Point, i32) -> Point>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&Point::x_lens(), point.clone()), 10);
//! assert_eq!(set(&Point::y_lens(), 0, point), Point { x: 10, y: 0 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating a lens constructor for each struct field.
///
/// For a field `foo` the macro generates `foo_lens()`, returning a
/// `focal::optics::Lens` whose getter clones the field and whose setter
/// replaces it. The result is a full lens: it can be viewed, set, composed
/// and cloned like any lens built with `focal::optics::lens`.
///
/// # Requirements
///
/// - The struct must have named fields
/// - Every field type must implement `Clone`
/// - The struct must be `'static`, as every optic built with `lens` is
///
/// # Generated Code
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> Lens<Self, Self, T, T, fn(&Self) -> T, fn(Self, T) -> Self> { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported. Each constructor carries a `Clone` bound on
/// its own field type, so a `Container<T>` exposes `value_lens()` whenever
/// `T: Clone + 'static`:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(view(&lens, Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
