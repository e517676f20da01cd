//! The positional search carrier.
//!
//! Running an optic at [`ElementOfBrand`] turns a multi-focus optic into a
//! single-focus one: each visited focus is either passed through untouched
//! ([`ElementSearch::Searching`]) or handed to the real action
//! ([`ElementSearch::Found`]). Combining two searches keeps whichever side
//! found its target; two found targets collapse into the terminal failure
//! case ([`ElementSearch::Failed`]) carrying [`OpticError::MultipleResults`].

use std::fmt;
use std::marker::PhantomData;

use crate::optics::OpticError;
use crate::typeclass::{Applicative, Functor, TypeConstructor};

/// Outcome of searching for one focus while running an optic.
pub enum ElementSearch<F: Functor, X> {
    /// No focus matched yet; the value is rebuilt unchanged.
    Searching(X),
    /// Exactly one focus matched; its action carries the rebuilt value.
    Found(F::Of<X>),
    /// The search cannot produce a single result.
    Failed(OpticError),
}

impl<F: Functor, X> ElementSearch<F, X> {
    /// Whether a focus matched.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<F: Functor, X: fmt::Debug> fmt::Debug for ElementSearch<F, X>
where
    F::Of<X>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Searching(value) => formatter.debug_tuple("Searching").field(value).finish(),
            Self::Found(action) => formatter.debug_tuple("Found").field(action).finish(),
            Self::Failed(error) => formatter.debug_tuple("Failed").field(error).finish(),
        }
    }
}

/// Brand for [`ElementSearch`] over the action type `F` of the matched focus.
pub struct ElementOfBrand<F>(PhantomData<F>);

impl<F: Functor> TypeConstructor for ElementOfBrand<F> {
    type Of<X> = ElementSearch<F, X>;
}

impl<F: Functor> Functor for ElementOfBrand<F> {
    fn fmap<X, Y, G>(value: ElementSearch<F, X>, function: G) -> ElementSearch<F, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        match value {
            ElementSearch::Searching(whole) => ElementSearch::Searching(function(whole)),
            ElementSearch::Found(action) => ElementSearch::Found(F::fmap(action, function)),
            ElementSearch::Failed(error) => ElementSearch::Failed(error),
        }
    }
}

impl<F: Functor> Applicative for ElementOfBrand<F> {
    fn pure<X: 'static>(value: X) -> ElementSearch<F, X> {
        ElementSearch::Searching(value)
    }

    fn map2<X, Y, Z, G>(
        first: ElementSearch<F, X>,
        second: ElementSearch<F, Y>,
        function: G,
    ) -> ElementSearch<F, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        match (first, second) {
            (ElementSearch::Failed(error), _) | (_, ElementSearch::Failed(error)) => {
                ElementSearch::Failed(error)
            }
            (ElementSearch::Found(_), ElementSearch::Found(_)) => {
                ElementSearch::Failed(OpticError::MultipleResults)
            }
            (ElementSearch::Searching(left), ElementSearch::Searching(right)) => {
                ElementSearch::Searching(function(left, right))
            }
            (ElementSearch::Found(action), ElementSearch::Searching(right)) => {
                ElementSearch::Found(F::fmap(action, move |left| function(left, right)))
            }
            (ElementSearch::Searching(left), ElementSearch::Found(action)) => {
                ElementSearch::Found(F::fmap(action, move |right| function(left, right)))
            }
        }
    }
}
