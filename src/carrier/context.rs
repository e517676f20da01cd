//! The store-pair witness.
//!
//! A [`Context`] holds a focus together with a function rebuilding the whole
//! from a replacement focus. Running a lens once with [`Context::sell`] as
//! its focus function yields such a pair: the lens extracts exactly once and
//! the rebuild function it returns is the lens's setter, closed over the
//! original whole. `clone_lens` stores the resulting pair-producing function
//! behind an `Rc`, turning a generic optic into a concrete value.

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Functor, TypeConstructor};

/// A focus paired with a rebuild function `B -> T`.
pub struct Context<A, B, T> {
    focus: A,
    rebuild: Box<dyn FnOnce(B) -> T>,
}

impl<A, B, T> Context<A, B, T> {
    /// Creates a witness from a focus and the function that rebuilds the whole.
    pub fn new<R>(focus: A, rebuild: R) -> Self
    where
        R: FnOnce(B) -> T + 'static,
    {
        Self {
            focus,
            rebuild: Box::new(rebuild),
        }
    }

    /// Returns the cached focus.
    pub const fn position(&self) -> &A {
        &self.focus
    }

    /// Rebuilds the whole around a replacement focus.
    pub fn peek(self, replacement: B) -> T {
        (self.rebuild)(replacement)
    }

    /// Splits the witness into its focus and its rebuild function.
    pub fn into_parts(self) -> (A, Box<dyn FnOnce(B) -> T>) {
        (self.focus, self.rebuild)
    }
}

impl<A: 'static, B: 'static> Context<A, B, B> {
    /// The focus function that records its argument and rebuilds by substitution.
    pub fn sell(focus: A) -> Self {
        Self::new(focus, |replacement| replacement)
    }
}

impl<A: fmt::Debug, B, T> fmt::Debug for Context<A, B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Context")
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// Brand for [`Context`] with fixed focus and replacement types.
///
/// It is a functor and nothing more, so only optics that demand no more than
/// mapping (lenses and isomorphisms) can be run at it.
pub struct ContextBrand<A, B>(PhantomData<fn(B) -> A>);

impl<A, B> TypeConstructor for ContextBrand<A, B> {
    type Of<X> = Context<A, B, X>;
}

impl<A: 'static, B: 'static> Functor for ContextBrand<A, B> {
    fn fmap<X, Y, G>(value: Context<A, B, X>, function: G) -> Context<A, B, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        let (focus, rebuild) = value.into_parts();
        Context::new(focus, move |replacement| function(rebuild(replacement)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sell_rebuilds_by_substitution() {
        let witness = Context::<i32, String, String>::sell(3);
        assert_eq!(*witness.position(), 3);
        assert_eq!(witness.peek(String::from("replaced")), "replaced");
    }

    #[rstest]
    fn fmap_composes_after_rebuild() {
        let whole = (1, String::from("hello"));
        let witness = Context::new(whole.1.clone(), move |replacement: String| (whole.0, replacement));
        let mapped = ContextBrand::<String, String>::fmap(witness, |(number, text): (i32, String)| {
            format!("{number}:{text}")
        });

        assert_eq!(mapped.position(), "hello");
        assert_eq!(mapped.peek(String::from("world")), "1:world");
    }

    #[rstest]
    fn rebuild_is_referentially_transparent() {
        let make = || Context::new(5, |replacement: i32| vec![replacement, 0]);
        assert_eq!(make().peek(9), make().peek(9));
    }
}
