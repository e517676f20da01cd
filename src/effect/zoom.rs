//! Running a computation over a part of the state.
//!
//! `zoom(optic, inner)` turns a computation over the focus `A` into one
//! over the whole `S`. The optic is driven with a focusing carrier: the
//! focus function runs `inner` on each focus, and the optic rebuilds the
//! whole around the new foci inside the host monad. Through a lens `inner`
//! runs once; through a traversal it runs once per focus, left to right,
//! with the results combined by the monoid of the result type and an
//! optic with no foci yielding that monoid's identity.
//!
//! | function      | inner computation                 | result               |
//! |---------------|-----------------------------------|----------------------|
//! | [`zoom`]      | `StateT<A, M, C>`                 | `C`                  |
//! | [`zoom_may`]  | `StateT<A, M, Option<C>>`         | `None` if any is     |
//! | [`zoom_err`]  | `StateT<A, M, Result<C, E>>`      | first `Err` if any   |
//! | [`zoom_rws`]  | `RwsT<R, W, A, M, C>`             | `C`, logs combined   |
//!
//! # Examples
//!
//! ```rust
//! use focal::effect::{zoom, State};
//! use focal::optics::{compose, traversed, Snd};
//!
//! let visit: State<i32, String> = State::state(|hits: i32| (hits.to_string(), hits + 1));
//! let every_counter: State<Vec<(&str, i32)>, String> = zoom(compose(traversed(), Snd), visit);
//!
//! let counters = vec![("home", 1), ("about", 5)];
//! assert_eq!(every_counter.run_state(counters), (String::from("15"), vec![("home", 2), ("about", 6)]));
//! ```

use super::rws::RwsT;
use super::state::StateT;
use crate::carrier::{
    Fallible, Focusing, FocusingBrand, FocusingErr, FocusingErrBrand, FocusingMay,
    FocusingMayBrand, FocusingWith, FocusingWithBrand, May,
};
use crate::optics::Optic;
use crate::typeclass::{Monad, Monoid};

/// Runs a state computation over the focus of the state.
///
/// Requires `C: Monoid` only when the optic is a traversal.
pub fn zoom<M, O, S, A, C>(optic: O, inner: StateT<A, M, C>) -> StateT<S, M, C>
where
    M: Monad + 'static,
    O: Optic<FocusingBrand<M, C>, S, S, A, A> + 'static,
    S: 'static,
    A: 'static,
    C: 'static,
{
    StateT::new(move |state| {
        optic
            .apply(|focus| Focusing(inner.run(focus)), state)
            .0
    })
}

/// Runs a state computation with an optional result over the focus of the state.
///
/// The foci are all updated; the result is `None` as soon as one run returns `None`.
///
/// # Examples
///
/// ```rust
/// use focal::effect::{zoom_may, State};
/// use focal::optics::traversed;
///
/// let checked_decrement: State<u8, Option<Vec<u8>>> =
///     State::state(|n: u8| (n.checked_sub(1).map(|m| vec![m]), n.saturating_sub(1)));
/// let all: State<Vec<u8>, Option<Vec<u8>>> = zoom_may(traversed(), checked_decrement);
///
/// assert_eq!(all.run_state(vec![2, 1]), (Some(vec![1, 0]), vec![1, 0]));
/// assert_eq!(all.run_state(vec![2, 0]), (None, vec![1, 0]));
/// ```
pub fn zoom_may<M, O, S, A, C>(optic: O, inner: StateT<A, M, Option<C>>) -> StateT<S, M, Option<C>>
where
    M: Monad + 'static,
    O: Optic<FocusingMayBrand<M, C>, S, S, A, A> + 'static,
    S: 'static,
    A: 'static,
    C: 'static,
{
    StateT::new(move |state| {
        let FocusingMay(Focusing(action)) = optic.apply(
            |focus| {
                FocusingMay(Focusing(M::fmap(inner.run(focus), |(result, focus)| {
                    (May(result), focus)
                })))
            },
            state,
        );
        M::fmap(action, |(May(result), whole)| (result, whole))
    })
}

/// Runs a state computation with a fallible result over the focus of the state.
///
/// The foci are all updated; the result is the first `Err` met in visiting order.
pub fn zoom_err<M, O, S, A, E, C>(
    optic: O,
    inner: StateT<A, M, Result<C, E>>,
) -> StateT<S, M, Result<C, E>>
where
    M: Monad + 'static,
    O: Optic<FocusingErrBrand<M, E, C>, S, S, A, A> + 'static,
    S: 'static,
    A: 'static,
    E: 'static,
    C: 'static,
{
    StateT::new(move |state| {
        let FocusingErr(Focusing(action)) = optic.apply(
            |focus| {
                FocusingErr(Focusing(M::fmap(inner.run(focus), |(result, focus)| {
                    (Fallible(result), focus)
                })))
            },
            state,
        );
        M::fmap(action, |(Fallible(result), whole)| (result, whole))
    })
}

/// Runs a reader, writer and state computation over the focus of the state.
///
/// Every run sees the same environment; logs are combined in visiting order.
pub fn zoom_rws<M, O, R, W, S, A, C>(optic: O, inner: RwsT<R, W, A, M, C>) -> RwsT<R, W, S, M, C>
where
    M: Monad + 'static,
    O: Optic<FocusingWithBrand<M, C, W>, S, S, A, A> + 'static,
    R: Clone + 'static,
    W: Monoid + 'static,
    S: 'static,
    A: 'static,
    C: 'static,
{
    RwsT::new(move |environment: R, state| {
        optic
            .apply(
                |focus| FocusingWith(inner.run(environment.clone(), focus)),
                state,
            )
            .0
    })
}
