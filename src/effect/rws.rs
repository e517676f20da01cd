//! `RwsT` - reader, writer and state combined over any host monad.
//!
//! An `RwsT<R, W, S, M, A>` wraps a function `(R, S) -> M::Of<(A, S, W)>`:
//! it reads an environment `R`, threads a state `S`, accumulates a log `W`
//! and produces a result `A`, all inside the host monad `M`. Logs of chained
//! computations are combined with the monoid of `W`, left to right.
//!
//! [`zoom_rws`](super::zoom_rws) runs such a computation over a part of the
//! state.
//!
//! # Examples
//!
//! ```rust
//! use focal::effect::Rws;
//!
//! #[derive(Clone)]
//! struct Config { multiplier: i32 }
//!
//! let computation: Rws<Config, Vec<String>, i32, i32> = Rws::ask()
//!     .flat_map(|config: Config| Rws::get().flat_map(move |state: i32| {
//!         let result = state * config.multiplier;
//!         Rws::put(state + 1)
//!             .then(Rws::tell(vec![format!("result: {result}")]))
//!             .then(Rws::pure(result))
//!     }));
//!
//! let (result, final_state, logs) = computation.run_rws(Config { multiplier: 3 }, 10);
//! assert_eq!(result, 30);
//! assert_eq!(final_state, 11);
//! assert_eq!(logs, vec!["result: 30"]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{IdentityBrand, Monad, Monoid};

/// A computation reading `R`, threading `S`, logging `W` and producing `A` inside `M`.
pub struct RwsT<R, W, S, M: Monad, A> {
    run_function: Rc<dyn Fn(R, S) -> M::Of<(A, S, W)>>,
}

/// A pure reader, writer and state computation.
pub type Rws<R, W, S, A> = RwsT<R, W, S, IdentityBrand, A>;

impl<R, W, S, M: Monad, A> Clone for RwsT<R, W, S, M, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, W, S, M: Monad, A> fmt::Debug for RwsT<R, W, S, M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("RwsT").finish_non_exhaustive()
    }
}

impl<R, W, S, M, A> RwsT<R, W, S, M, A>
where
    R: 'static,
    W: Monoid + 'static,
    S: 'static,
    M: Monad + 'static,
    A: 'static,
{
    /// Creates a computation from its transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R, S) -> M::Of<(A, S, W)> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against an environment and an initial state.
    pub fn run(&self, environment: R, initial_state: S) -> M::Of<(A, S, W)> {
        (self.run_function)(environment, initial_state)
    }

    /// A computation returning `value` with an empty log.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_, state| M::pure((value.clone(), state, W::empty())))
    }

    /// Projects the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment, state| M::pure((projection(&environment), state, W::empty())))
    }

    /// Returns a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |_, state| M::pure((projection(&state), state, W::empty())))
    }

    /// Maps the result.
    pub fn fmap<B, F>(self, function: F) -> RwsT<R, W, S, M, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        RwsT::new(move |environment, state| {
            let function = Rc::clone(&function);
            M::fmap(self.run(environment, state), move |(result, state, log)| {
                (function(result), state, log)
            })
        })
    }

    /// Chains a computation depending on the result, combining the logs.
    pub fn flat_map<B, F>(self, function: F) -> RwsT<R, W, S, M, B>
    where
        F: Fn(A) -> RwsT<R, W, S, M, B> + 'static,
        B: 'static,
        R: Clone,
    {
        RwsT::new(move |environment: R, state| {
            M::flat_map(
                self.run(environment.clone(), state),
                |(result, state, log)| {
                    M::fmap(
                        function(result).run(environment, state),
                        move |(next, state, more)| (next, state, log.combine(more)),
                    )
                },
            )
        })
    }

    /// Sequences two computations, keeping the second result.
    #[must_use]
    pub fn then<B>(self, next: RwsT<R, W, S, M, B>) -> RwsT<R, W, S, M, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<R, W, S, M> RwsT<R, W, S, M, R>
where
    R: 'static,
    W: Monoid + 'static,
    S: 'static,
    M: Monad + 'static,
{
    /// Returns the environment.
    pub fn ask() -> Self {
        Self::new(|environment, state| M::pure((environment, state, W::empty())))
    }
}

impl<R, W, S, M> RwsT<R, W, S, M, S>
where
    R: 'static,
    W: Monoid + 'static,
    S: Clone + 'static,
    M: Monad + 'static,
{
    /// Returns the current state.
    pub fn get() -> Self {
        Self::new(|_, state: S| M::pure((state.clone(), state, W::empty())))
    }
}

impl<R, W, S, M> RwsT<R, W, S, M, ()>
where
    R: 'static,
    W: Monoid + 'static,
    S: 'static,
    M: Monad + 'static,
{
    /// Appends to the log.
    pub fn tell(output: W) -> Self
    where
        W: Clone,
    {
        Self::new(move |_, state| M::pure(((), state, output.clone())))
    }

    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_, _| M::pure(((), new_state.clone(), W::empty())))
    }

    /// Updates the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |_, state| M::pure(((), modifier(state), W::empty())))
    }
}

impl<R, W, S, A> Rws<R, W, S, A>
where
    R: 'static,
    W: Monoid + 'static,
    S: 'static,
    A: 'static,
{
    /// Runs a pure computation, returning the result, the final state and the log.
    pub fn run_rws(&self, environment: R, initial_state: S) -> (A, S, W) {
        self.run(environment, initial_state).into_inner()
    }
}
