//! The positional rebuild structure.
//!
//! A [`Bazaar`] records every focus a traversal visits, in visiting order,
//! together with a reassembly function expecting one replacement per focus.
//! Running a traversal once at [`BazaarBrand`] with [`Bazaar::sell`] as its
//! focus function produces the structure; it can afterwards be consumed
//! purely with [`Bazaar::rebuild_with`] or against any applicative visitor
//! with [`Bazaar::run`], both from the same witness.
//!
//! Arity is preserved by construction. The only ways to build a `Bazaar`
//! are [`Bazaar::done`] (no foci, consumes nothing), [`Bazaar::sell`] (one
//! focus, consumes one replacement) and the applicative `map2` (foci
//! concatenated, reassembly consumes the left part's replacements before the
//! right part's). Consumers always supply exactly one replacement per
//! recorded focus, so a reassembly function never runs short.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::typeclass::{Applicative, Functor, TypeConstructor};

const INLINE_FOCI: usize = 4;

type Replacements<B> = SmallVec<[B; INLINE_FOCI]>;

/// Replacement values handed to a reassembly function, in focus order.
struct Holes<B> {
    replacements: smallvec::IntoIter<[B; INLINE_FOCI]>,
}

impl<B> Holes<B> {
    fn new(replacements: Replacements<B>) -> Self {
        Self {
            replacements: replacements.into_iter(),
        }
    }

    // `sell` records one focus and takes one hole, `done` neither, and
    // `map2` concatenates both sides in order, so the holes are exhausted
    // exactly when the last focus is filled.
    fn fill(&mut self) -> B {
        match self.replacements.next() {
            Some(replacement) => replacement,
            None => unreachable!("Bazaar rebuild asked for more replacements than it recorded foci"),
        }
    }
}

/// Foci of type `A` and a reassembly from as many `B`s into a `T`.
pub struct Bazaar<A, B, T> {
    foci: SmallVec<[A; INLINE_FOCI]>,
    rebuild: Box<dyn FnOnce(&mut Holes<B>) -> T>,
}

impl<A, B: 'static> Bazaar<A, B, B> {
    /// Records a single focus whose replacement becomes the result.
    pub fn sell(focus: A) -> Self {
        let mut foci = SmallVec::new();
        foci.push(focus);
        Self {
            foci,
            rebuild: Box::new(Holes::fill),
        }
    }
}

impl<A, B, T> Bazaar<A, B, T> {
    /// A structure with no foci that reassembles to `whole`.
    pub fn done(whole: T) -> Self
    where
        T: 'static,
    {
        Self {
            foci: SmallVec::new(),
            rebuild: Box::new(move |_| whole),
        }
    }

    /// Number of recorded foci.
    pub fn len(&self) -> usize {
        self.foci.len()
    }

    /// Whether no focus was recorded.
    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }

    /// The recorded foci in visiting order.
    pub fn foci(&self) -> &[A] {
        &self.foci
    }

    /// Reassembles the whole, replacing each focus independently.
    pub fn rebuild_with<G>(self, replace: G) -> T
    where
        G: FnMut(A) -> B,
    {
        let replacements: Replacements<B> = self.foci.into_iter().map(replace).collect();
        (self.rebuild)(&mut Holes::new(replacements))
    }

    /// Visits every focus left to right with an effectful function, then
    /// reassembles the whole inside the resulting action.
    ///
    /// # Arguments
    ///
    /// * `visit` - Produces the action for one focus
    ///
    /// # Returns
    ///
    /// The sequenced actions, carrying the rebuilt whole
    pub fn run<F, G>(self, mut visit: G) -> F::Of<T>
    where
        F: Applicative,
        G: FnMut(A) -> F::Of<B>,
        B: 'static,
        T: 'static,
    {
        let Self { foci, rebuild } = self;
        let capacity = foci.len();
        let collected = foci.into_iter().fold(
            F::pure(Replacements::<B>::with_capacity(capacity)),
            |accumulated, focus| {
                F::map2(accumulated, visit(focus), |mut replacements, replacement| {
                    replacements.push(replacement);
                    replacements
                })
            },
        );
        F::fmap(collected, move |replacements| {
            rebuild(&mut Holes::new(replacements))
        })
    }
}

impl<A: fmt::Debug, B, T> fmt::Debug for Bazaar<A, B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Bazaar")
            .field("foci", &self.foci)
            .finish_non_exhaustive()
    }
}

/// Brand for [`Bazaar`] with fixed focus and replacement types.
pub struct BazaarBrand<A, B>(PhantomData<fn(B) -> A>);

impl<A, B> TypeConstructor for BazaarBrand<A, B> {
    type Of<X> = Bazaar<A, B, X>;
}

impl<A: 'static, B: 'static> Functor for BazaarBrand<A, B> {
    fn fmap<X, Y, G>(value: Bazaar<A, B, X>, function: G) -> Bazaar<A, B, Y>
    where
        G: FnOnce(X) -> Y + 'static,
        X: 'static,
        Y: 'static,
    {
        let Bazaar { foci, rebuild } = value;
        Bazaar {
            foci,
            rebuild: Box::new(move |holes: &mut Holes<B>| function(rebuild(holes))),
        }
    }
}

impl<A: 'static, B: 'static> Applicative for BazaarBrand<A, B> {
    fn pure<X: 'static>(value: X) -> Bazaar<A, B, X> {
        Bazaar::done(value)
    }

    fn map2<X, Y, Z, G>(first: Bazaar<A, B, X>, second: Bazaar<A, B, Y>, function: G) -> Bazaar<A, B, Z>
    where
        G: FnOnce(X, Y) -> Z + 'static,
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        let Bazaar {
            mut foci,
            rebuild: rebuild_first,
        } = first;
        let Bazaar {
            foci: second_foci,
            rebuild: rebuild_second,
        } = second;
        foci.extend(second_foci);
        Bazaar {
            foci,
            rebuild: Box::new(move |holes: &mut Holes<B>| {
                let left = rebuild_first(holes);
                let right = rebuild_second(holes);
                function(left, right)
            }),
        }
    }
}
