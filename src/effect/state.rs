//! `StateT` - a state-threading computation over any host monad.
//!
//! `StateT<S, M, A>` wraps a function `S -> M::Of<(A, S)>`: given a state it
//! produces, inside the host monad `M`, a result and the next state. The
//! host is named by its brand, so the same type serves pure state
//! ([`State`], over [`IdentityBrand`]), optional state (over
//! [`OptionBrand`](crate::typeclass::OptionBrand)) and fallible state (over
//! [`ResultBrand`](crate::typeclass::ResultBrand)).
//!
//! The optic consumers at the bottom of this module read and write the
//! state through an optic: [`use_`], [`uses`], [`assign`], [`modifying`],
//! [`modifying_and_report`] and [`assigning_and_report`].
//!
//! # Examples
//!
//! ```rust
//! use focal::effect::{modifying, use_, State};
//! use focal::optics::Fst;
//!
//! let tick = modifying(Fst, |count: u32| count + 1)
//!     .then(modifying(Fst, |count: u32| count + 1))
//!     .then(use_(Fst));
//!
//! let state: State<(u32, &str), u32> = tick;
//! assert_eq!(state.run_state((0, "clock")), (2, (2, "clock")));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::carrier::ConstBrand;
use crate::optics::{over, over_and_report, set, set_and_report, view, views, Optic};
use crate::typeclass::{IdentityBrand, Monad, PairBrand};

/// A computation threading a state `S` and producing an `A` inside the host monad `M`.
pub struct StateT<S, M: Monad, A> {
    run_function: Rc<dyn Fn(S) -> M::Of<(A, S)>>,
}

/// A pure state computation.
pub type State<S, A> = StateT<S, IdentityBrand, A>;

impl<S, M: Monad, A> Clone for StateT<S, M, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, M: Monad, A> fmt::Debug for StateT<S, M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("StateT").finish_non_exhaustive()
    }
}

impl<S, M, A> StateT<S, M, A>
where
    S: 'static,
    M: Monad + 'static,
    A: 'static,
{
    /// Creates a computation from its state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::effect::StateT;
    /// use focal::typeclass::OptionBrand;
    ///
    /// let halve: StateT<i32, OptionBrand, i32> =
    ///     StateT::new(|state: i32| (state % 2 == 0).then_some((state, state / 2)));
    /// assert_eq!(halve.run(10), Some((10, 5)));
    /// assert_eq!(halve.run(3), None);
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> M::Of<(A, S)> + 'static,
    {
        Self {
            run_function: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial_state`.
    pub fn run(&self, initial_state: S) -> M::Of<(A, S)> {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> M::Of<A> {
        M::fmap(self.run(initial_state), |(result, _)| result)
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> M::Of<S> {
        M::fmap(self.run(initial_state), |(_, state)| state)
    }

    /// A computation returning `value` and leaving the state alone.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| M::pure((value.clone(), state)))
    }

    /// Runs a host computation without touching the state.
    pub fn lift(inner: M::Of<A>) -> Self
    where
        M::Of<A>: Clone,
    {
        Self::new(move |state| M::fmap(inner.clone(), move |result| (result, state)))
    }

    /// Runs a pure state transition.
    pub fn state<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::new(move |state| M::pure(transition(state)))
    }

    /// Maps the result.
    pub fn fmap<B, F>(self, function: F) -> StateT<S, M, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        StateT::new(move |state| {
            let function = Rc::clone(&function);
            M::fmap(self.run(state), move |(result, state)| (function(result), state))
        })
    }

    /// Chains a computation depending on the result.
    pub fn flat_map<B, F>(self, function: F) -> StateT<S, M, B>
    where
        F: Fn(A) -> StateT<S, M, B> + 'static,
        B: 'static,
    {
        StateT::new(move |state| {
            M::flat_map(self.run(state), |(result, state)| function(result).run(state))
        })
    }

    /// Sequences two computations, keeping the second result.
    #[must_use]
    pub fn then<B>(self, next: StateT<S, M, B>) -> StateT<S, M, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<S, M> StateT<S, M, S>
where
    S: Clone + 'static,
    M: Monad + 'static,
{
    /// Returns the current state.
    pub fn get() -> Self {
        Self::new(|state: S| M::pure((state.clone(), state)))
    }
}

impl<S, M, A> StateT<S, M, A>
where
    S: 'static,
    M: Monad + 'static,
    A: 'static,
{
    /// Returns a projection of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| M::pure((projection(&state), state)))
    }
}

impl<S, M> StateT<S, M, ()>
where
    S: Clone + 'static,
    M: Monad + 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| M::pure(((), new_state.clone())))
    }
}

impl<S, M> StateT<S, M, ()>
where
    S: 'static,
    M: Monad + 'static,
{
    /// Updates the state with a function.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| M::pure(((), modifier(state))))
    }
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Runs a pure computation, returning the result and the final state.
    pub fn run_state(&self, initial_state: S) -> (A, S) {
        self.run(initial_state).into_inner()
    }

    /// Runs a pure computation and keeps only the result.
    pub fn eval_state(&self, initial_state: S) -> A {
        self.run_state(initial_state).0
    }

    /// Runs a pure computation and keeps only the final state.
    pub fn exec_state(&self, initial_state: S) -> S {
        self.run_state(initial_state).1
    }
}

/// Reads the focus of the state.
pub fn use_<M, O, S, A>(optic: O) -> StateT<S, M, A>
where
    M: Monad + 'static,
    O: Optic<ConstBrand<A>, S, S, A, A> + 'static,
    S: Clone + 'static,
    A: 'static,
{
    StateT::new(move |state: S| M::pure((view(&optic, state.clone()), state)))
}

/// Reads the focus of the state through a function.
///
/// With several foci the mapped values are combined with the monoid of `R`.
pub fn uses<M, O, S, A, R, G>(optic: O, function: G) -> StateT<S, M, R>
where
    M: Monad + 'static,
    O: Optic<ConstBrand<R>, S, S, A, A> + 'static,
    G: Fn(A) -> R + 'static,
    S: Clone + 'static,
    R: 'static,
{
    StateT::new(move |state: S| M::pure((views(&optic, &function, state.clone()), state)))
}

/// Replaces every focus of the state with `value`.
pub fn assign<M, O, S, A, B>(optic: O, value: B) -> StateT<S, M, ()>
where
    M: Monad + 'static,
    O: Optic<IdentityBrand, S, S, A, B> + 'static,
    S: 'static,
    B: Clone + 'static,
{
    StateT::new(move |state| M::pure(((), set(&optic, value.clone(), state))))
}

/// Updates every focus of the state with `function`.
pub fn modifying<M, O, S, A, B, G>(optic: O, function: G) -> StateT<S, M, ()>
where
    M: Monad + 'static,
    O: Optic<IdentityBrand, S, S, A, B> + 'static,
    G: Fn(A) -> B + 'static,
    S: 'static,
{
    StateT::new(move |state| M::pure(((), over(&optic, &function, state))))
}

/// Updates every focus of the state and returns the new focus.
///
/// With several foci the new foci are combined with the monoid of `B`.
///
/// # Examples
///
/// ```rust
/// use focal::effect::{modifying_and_report, State};
/// use focal::optics::Snd;
///
/// let bump: State<(char, i32), i32> = modifying_and_report(Snd, |n: i32| n * 2);
/// assert_eq!(bump.run_state(('k', 21)), (42, ('k', 42)));
/// ```
pub fn modifying_and_report<M, O, S, A, B, G>(optic: O, function: G) -> StateT<S, M, B>
where
    M: Monad + 'static,
    O: Optic<PairBrand<B>, S, S, A, B> + 'static,
    G: Fn(A) -> B + 'static,
    S: 'static,
    B: Clone + 'static,
{
    StateT::new(move |state| M::pure(over_and_report(&optic, &function, state)))
}

/// Replaces every focus of the state with `value` and returns it.
pub fn assigning_and_report<M, O, S, A, B>(optic: O, value: B) -> StateT<S, M, B>
where
    M: Monad + 'static,
    O: Optic<IdentityBrand, S, S, A, B> + 'static,
    S: 'static,
    B: Clone + 'static,
{
    StateT::new(move |state| M::pure(set_and_report(&optic, value.clone(), state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{lens, traversed, Fst, Snd};
    use crate::typeclass::{OptionBrand, ResultBrand};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Game {
        score: u32,
        moves: Vec<String>,
    }

    fn score() -> crate::optics::Lens<Game, Game, u32, u32, fn(&Game) -> u32, fn(Game, u32) -> Game> {
        lens(
            (|game: &Game| game.score) as fn(&Game) -> u32,
            (|game: Game, score: u32| Game { score, ..game }) as fn(Game, u32) -> Game,
        )
    }

    fn start() -> Game {
        Game {
            score: 10,
            moves: vec![String::from("e4")],
        }
    }

    #[rstest]
    fn get_put_and_modify_thread_the_state() {
        let program: State<i32, i32> = State::<i32, ()>::modify(|n| n + 1)
            .then(State::put(7))
            .then(State::get());
        assert_eq!(program.run_state(0), (7, 7));
    }

    #[rstest]
    fn fmap_and_flat_map_chain_results() {
        let program: State<i32, String> = State::<i32, i32>::gets(|n| n * 2)
            .flat_map(|doubled| State::<i32, ()>::put(doubled).fmap(move |()| doubled))
            .fmap(|n| format!("#{n}"));
        assert_eq!(program.run_state(4), (String::from("#8"), 8));
    }

    #[rstest]
    fn host_failure_short_circuits() {
        let refuse: StateT<i32, OptionBrand, ()> = StateT::lift(None);
        let program = refuse.then(StateT::<i32, OptionBrand, ()>::put(99));
        assert_eq!(program.run(1), None);
    }

    #[rstest]
    fn eval_and_exec_split_the_outcome() {
        let program: StateT<i32, ResultBrand<String>, i32> = StateT::state(|n| (n + 1, n * 10));
        assert_eq!(program.eval(2), Ok(3));
        assert_eq!(program.exec(2), Ok(20));
    }

    #[rstest]
    fn use_and_uses_read_through_optics() {
        let program: State<Game, (u32, bool)> = use_(score())
            .flat_map(|points| uses(score(), |n: u32| n > 5).fmap(move |high| (points, high)));
        assert_eq!(program.eval_state(start()), (10, true));
    }

    #[rstest]
    fn assign_and_modifying_write_through_optics() {
        let program: State<Game, ()> = assign(score(), 0).then(modifying(score(), |n: u32| n + 3));
        assert_eq!(program.exec_state(start()).score, 3);
    }

    #[rstest]
    fn uses_on_a_traversal_combines_results() {
        let total: State<(Vec<String>, ()), String> = uses(
            crate::optics::compose(Fst, traversed()),
            |word: String| word.to_uppercase(),
        );
        let words = (vec![String::from("ab"), String::from("c")], ());
        assert_eq!(total.eval_state(words), "ABC");
    }

    #[rstest]
    fn reporting_combinators_return_the_written_focus() {
        let program: State<(char, u8), u8> = assigning_and_report(Snd, 5)
            .flat_map(|written| modifying_and_report(Snd, move |n: u8| n + written));
        assert_eq!(program.run_state(('x', 0)), (10, ('x', 10)));
    }
}
