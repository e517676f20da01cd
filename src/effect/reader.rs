//! `ReaderT` - a computation reading an environment over any host monad.
//!
//! `ReaderT<R, M, A>` wraps a function `R -> M::Of<A>`. [`query`] and
//! [`queries`] read the environment through an optic, and [`magnify`] runs
//! a computation written against one part of the environment inside a
//! computation over the whole.
//!
//! # Examples
//!
//! ```rust
//! use focal::effect::{magnify, query, Reader};
//! use focal::optics::{Fst, Snd};
//!
//! let port: Reader<(&str, u16), u16> = query(Snd);
//! let nested: Reader<((&str, u16), bool), u16> = magnify(Fst, port);
//!
//! assert_eq!(nested.run_reader((("localhost", 8080), true)), 8080);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::carrier::{ConstBrand, Effect, EffectBrand};
use crate::optics::{view, views, Optic};
use crate::typeclass::{IdentityBrand, Monad};

/// A computation reading an environment `R` and producing an `A` inside the host monad `M`.
pub struct ReaderT<R, M: Monad, A> {
    run_function: Rc<dyn Fn(R) -> M::Of<A>>,
}

/// A pure environment-reading computation.
pub type Reader<R, A> = ReaderT<R, IdentityBrand, A>;

impl<R, M: Monad, A> Clone for ReaderT<R, M, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, M: Monad, A> fmt::Debug for ReaderT<R, M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ReaderT").finish_non_exhaustive()
    }
}

impl<R, M, A> ReaderT<R, M, A>
where
    R: 'static,
    M: Monad + 'static,
    A: 'static,
{
    /// Creates a computation from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M::Of<A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: R) -> M::Of<A> {
        (self.run_function)(environment)
    }

    /// A computation ignoring the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| M::pure(value.clone()))
    }

    /// Projects the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment| M::pure(projection(&environment)))
    }

    /// Runs `computation` against a modified environment.
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }

    /// Maps the result.
    pub fn fmap<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment| {
            let function = Rc::clone(&function);
            M::fmap(self.run(environment), move |result| function(result))
        })
    }

    /// Chains a computation depending on the result; both read the same environment.
    pub fn flat_map<B, F>(self, function: F) -> ReaderT<R, M, B>
    where
        F: Fn(A) -> ReaderT<R, M, B> + 'static,
        B: 'static,
        R: Clone,
    {
        ReaderT::new(move |environment: R| {
            M::flat_map(self.run(environment.clone()), |result| {
                function(result).run(environment)
            })
        })
    }
}

impl<R, M> ReaderT<R, M, R>
where
    R: 'static,
    M: Monad + 'static,
{
    /// Returns the environment.
    pub fn ask() -> Self {
        Self::new(M::pure)
    }
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Runs a pure computation.
    pub fn run_reader(&self, environment: R) -> A {
        self.run(environment).into_inner()
    }
}

/// Reads the focus of the environment.
pub fn query<M, O, R, A>(optic: O) -> ReaderT<R, M, A>
where
    M: Monad + 'static,
    O: Optic<ConstBrand<A>, R, R, A, A> + 'static,
    R: 'static,
    A: 'static,
{
    ReaderT::new(move |environment| M::pure(view(&optic, environment)))
}

/// Reads the focus of the environment through a function.
///
/// With several foci the mapped values are combined with the monoid of `X`.
pub fn queries<M, O, R, A, X, G>(optic: O, function: G) -> ReaderT<R, M, X>
where
    M: Monad + 'static,
    O: Optic<ConstBrand<X>, R, R, A, A> + 'static,
    G: Fn(A) -> X + 'static,
    R: 'static,
    X: 'static,
{
    ReaderT::new(move |environment| M::pure(views(&optic, &function, environment)))
}

/// Runs a computation over the focus of the environment.
///
/// Through a lens or getter the computation runs once, against the focus.
/// Through a fold or traversal it runs once per focus, left to right, and the
/// results are combined with the monoid of `X`; an optic with no foci yields
/// [`Monoid::empty`](crate::typeclass::Monoid::empty).
///
/// # Examples
///
/// ```rust
/// use focal::effect::{magnify, Reader};
/// use focal::optics::traversed;
///
/// let length: Reader<String, Vec<usize>> = Reader::asks(|text: &String| vec![text.len()]);
/// let lengths: Reader<Vec<String>, Vec<usize>> = magnify(traversed(), length);
///
/// assert_eq!(lengths.run_reader(vec![String::from("ab"), String::from("c")]), vec![2, 1]);
/// ```
pub fn magnify<M, O, R, A, X>(optic: O, computation: ReaderT<A, M, X>) -> ReaderT<R, M, X>
where
    M: Monad + 'static,
    O: Optic<EffectBrand<M, X>, R, R, A, A> + 'static,
    R: 'static,
    A: 'static,
    X: 'static,
{
    ReaderT::new(move |environment| {
        optic
            .apply(
                |part| Effect::<M, X, A>::new(computation.run(part)),
                environment,
            )
            .into_inner()
    })
}
