//! Lenses: optics focusing on exactly one part of a whole.
//!
//! A lens demands nothing beyond [`Functor`] of its action type, so it can be
//! read through (`view`), written through (`set`, `over`), run effectfully
//! (`traverse_of`) and composed with any other optic.
//!
//! # Laws
//!
//! Every lens built with [`lens`] must satisfy:
//!
//! 1. **`PutGet`**: `view(l, set(l, b, s)) == b`
//! 2. **`GetPut`**: `set(l, view(l, s), s) == s`
//! 3. **`PutPut`**: `set(l, c, set(l, b, s)) == set(l, c, s)`
//!
//! The library does not verify them.
//!
//! # Examples
//!
//! ```rust
//! use focal::optics::{lens, over, set, view};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let x = lens(|point: &Point| point.x, |point: Point, x: i32| Point { x, ..point });
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(view(&x, point.clone()), 10);
//! assert_eq!(set(&x, 0, point.clone()), Point { x: 0, y: 20 });
//! assert_eq!(over(&x, |x| x * 3, point), Point { x: 30, y: 20 });
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use super::optic::Optic;
use crate::carrier::{Context, ContextBrand};
use crate::control::Either;
use crate::typeclass::Functor;

/// A lens built from an extraction function and a rebuild function.
///
/// # Type Parameters
///
/// - `S`, `T`: The whole before and after the update
/// - `A`, `B`: The focus before and after the update
/// - `G`: Extracts the focus, `Fn(&S) -> A`
/// - `St`: Rebuilds the whole, `Fn(S, B) -> T`
pub struct Lens<S, T, A, B, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S, B) -> (T, A)>,
}

impl<S, T, A, B, G, St> Lens<S, T, A, B, G, St> {
    /// Creates a lens from its extraction and rebuild functions.
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G: Clone, St: Clone> Clone for Lens<S, T, A, B, G, St> {
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, T, A, B, G, St> fmt::Debug for Lens<S, T, A, B, G, St> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lens").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B, G, St> Optic<F, S, T, A, B> for Lens<S, T, A, B, G, St>
where
    F: Functor,
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T + Clone + 'static,
    S: 'static,
    B: 'static,
    T: 'static,
{
    fn apply<H>(&self, mut focus: H, whole: S) -> F::Of<T>
    where
        H: FnMut(A) -> F::Of<B>,
    {
        let part = (self.getter)(&whole);
        let setter = self.setter.clone();
        F::fmap(focus(part), move |replacement| setter(whole, replacement))
    }
}

/// Builds a lens from an extraction function and a rebuild function.
///
/// # Arguments
///
/// * `getter` - Extracts the focus from the whole
/// * `setter` - Builds the new whole from the old whole and a new focus
///
/// # Returns
///
/// A lens usable at every action type
pub const fn lens<S, T, A, B, G, St>(getter: G, setter: St) -> Lens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T + Clone + 'static,
{
    Lens::new(getter, setter)
}

/// Two lenses run side by side over a pair of wholes.
///
/// See [`alongside`].
#[derive(Debug, Clone)]
pub struct Alongside<L1, L2> {
    left: L1,
    right: L2,
}

impl<F, S1, T1, A1, B1, S2, T2, A2, B2, L1, L2> Optic<F, (S1, S2), (T1, T2), (A1, A2), (B1, B2)>
    for Alongside<L1, L2>
where
    F: Functor,
    L1: Optic<ContextBrand<A1, B1>, S1, T1, A1, B1>,
    L2: Optic<ContextBrand<A2, B2>, S2, T2, A2, B2>,
    A1: 'static,
    B1: 'static,
    A2: 'static,
    B2: 'static,
    T1: 'static,
    T2: 'static,
{
    fn apply<G>(&self, mut focus: G, (left, right): (S1, S2)) -> F::Of<(T1, T2)>
    where
        G: FnMut((A1, A2)) -> F::Of<(B1, B2)>,
    {
        let (left_focus, rebuild_left) = self.left.apply(Context::sell, left).into_parts();
        let (right_focus, rebuild_right) = self.right.apply(Context::sell, right).into_parts();
        F::fmap(focus((left_focus, right_focus)), move |(left, right)| {
            (rebuild_left(left), rebuild_right(right))
        })
    }
}

/// Combines two lenses into a lens over the product of their wholes.
///
/// Each lens is read once through the store-pair witness, so the combined
/// lens sees both foci at once and rebuilds both wholes.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{alongside, over, view, Fst, Snd};
///
/// let corners = alongside(Fst, Snd);
/// assert_eq!(view(&corners, ((1, 'a'), ('b', 2))), (1, 2));
/// assert_eq!(over(&corners, |(x, y): (i32, i32)| (y, x), ((1, 'a'), ('b', 2))), ((2, 'a'), ('b', 1)));
/// ```
pub const fn alongside<L1, L2>(left: L1, right: L2) -> Alongside<L1, L2> {
    Alongside { left, right }
}

/// Two lenses with a shared focus over disjoint wholes.
///
/// See [`merged`].
#[derive(Debug, Clone)]
pub struct Merged<L1, L2> {
    left: L1,
    right: L2,
}

impl<F, S1, T1, S2, T2, A, B, L1, L2> Optic<F, Either<S1, S2>, Either<T1, T2>, A, B>
    for Merged<L1, L2>
where
    F: Functor,
    L1: Optic<F, S1, T1, A, B>,
    L2: Optic<F, S2, T2, A, B>,
    T1: 'static,
    T2: 'static,
{
    fn apply<G>(&self, focus: G, whole: Either<S1, S2>) -> F::Of<Either<T1, T2>>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        match whole {
            Either::Left(left) => F::fmap(self.left.apply(focus, left), Either::Left),
            Either::Right(right) => F::fmap(self.right.apply(focus, right), Either::Right),
        }
    }
}

/// Combines two lenses into a lens over the sum of their wholes.
///
/// # Examples
///
/// ```rust
/// use focal::control::Either;
/// use focal::optics::{merged, set, view, Fst, Snd};
///
/// let number = merged(Fst, Snd);
/// assert_eq!(view(&number, Either::<(i32, &str), (&str, i32)>::Right(("b", 2))), 2);
/// assert_eq!(
///     set(&number, 9, Either::<(i32, &str), (&str, i32)>::Left((1, "a"))),
///     Either::Left((9, "a"))
/// );
/// ```
pub const fn merged<L1, L2>(left: L1, right: L2) -> Merged<L1, L2> {
    Merged { left, right }
}

/// A lens captured as its store-pair witness.
///
/// `ClonedLens` is a single concrete, cheaply clonable type, convenient for
/// storing a lens in a struct field or returning one from a function
/// without naming its closure types. It behaves exactly like the lens it
/// was built from.
pub struct ClonedLens<S, T, A, B> {
    witness: Rc<dyn Fn(S) -> Context<A, B, T>>,
}

impl<S, T, A, B> ClonedLens<S, T, A, B> {
    /// Reads the focus and captures the rebuild function in one pass.
    pub fn witness(&self, whole: S) -> Context<A, B, T> {
        (self.witness)(whole)
    }
}

impl<S, T, A, B> Clone for ClonedLens<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            witness: Rc::clone(&self.witness),
        }
    }
}

impl<S, T, A, B> fmt::Debug for ClonedLens<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ClonedLens").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B> Optic<F, S, T, A, B> for ClonedLens<S, T, A, B>
where
    F: Functor,
    B: 'static,
    T: 'static,
{
    fn apply<G>(&self, mut focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        let (part, rebuild) = self.witness(whole).into_parts();
        F::fmap(focus(part), rebuild)
    }
}

/// Captures a lens (or iso) as a [`ClonedLens`].
///
/// Only optics usable at the store-pair action type qualify, so a
/// traversal or a getter is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{clone_lens, compose, set, view, Fst, Snd};
///
/// let inner = clone_lens(compose(Fst, Snd));
/// let whole = ((1, 'a'), true);
///
/// assert_eq!(view(&inner.clone(), whole), 'a');
/// assert_eq!(set(&inner, 'b', whole), ((1, 'b'), true));
/// ```
pub fn clone_lens<O, S, T, A, B>(optic: O) -> ClonedLens<S, T, A, B>
where
    O: Optic<ContextBrand<A, B>, S, T, A, B> + 'static,
    A: 'static,
    B: 'static,
{
    ClonedLens {
        witness: Rc::new(move |whole| optic.apply(Context::sell, whole)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{set, view, Fst, Snd};
    use proptest::prelude::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        owner: String,
        balance: i64,
    }

    fn balance() -> Lens<
        Account,
        Account,
        i64,
        i64,
        fn(&Account) -> i64,
        fn(Account, i64) -> Account,
    > {
        lens(
            (|account: &Account| account.balance) as fn(&Account) -> i64,
            (|account: Account, balance: i64| Account { balance, ..account }) as fn(Account, i64) -> Account,
        )
    }

    #[rstest]
    fn view_extracts_focus() {
        let account = Account { owner: String::from("ada"), balance: 10 };
        assert_eq!(view(&balance(), account), 10);
    }

    #[rstest]
    fn type_changing_lens_rebuilds_with_new_type() {
        let label = lens(|pair: &(i32, u8)| pair.0, |pair: (i32, u8), text: String| (text, pair.1));
        assert_eq!(crate::optics::over(&label, |n| format!("#{n}"), (7, 1)), (String::from("#7"), 1));
    }

    #[rstest]
    fn alongside_rebuilds_both_wholes() {
        let both = alongside(balance(), Snd);
        let account = Account { owner: String::from("ada"), balance: 1 };
        let updated = set(&both, (5, 'z'), (account, (0, 'a')));
        assert_eq!(updated.0.balance, 5);
        assert_eq!(updated.1, (0, 'z'));
    }

    #[rstest]
    fn merged_reads_either_side() {
        let first = merged(Fst, Fst);
        assert_eq!(view(&first, Either::<(u8, char), (u8, bool)>::Left((3, 'x'))), 3);
        assert_eq!(view(&first, Either::<(u8, char), (u8, bool)>::Right((4, true))), 4);
    }

    #[rstest]
    fn cloned_lens_witness_exposes_focus_and_rebuild() {
        let cloned = clone_lens(balance());
        let account = Account { owner: String::from("bo"), balance: 3 };
        let witness = cloned.witness(account.clone());
        assert_eq!(*witness.position(), 3);
        assert_eq!(witness.peek(8), Account { balance: 8, ..account });
    }

    proptest! {
        #[test]
        fn cloned_lens_agrees_with_its_source(balance_value in any::<i64>(), delta in -1000_i64..1000) {
            let cloned = clone_lens(balance());
            let account = Account { owner: String::from("cy"), balance: balance_value };
            prop_assert_eq!(view(&cloned, account.clone()), view(&balance(), account.clone()));
            prop_assert_eq!(
                crate::optics::over(&cloned, |n: i64| n.wrapping_add(delta), account.clone()),
                crate::optics::over(&balance(), |n: i64| n.wrapping_add(delta), account)
            );
        }

        #[test]
        fn lens_laws_hold_for_record_fields(
            owner in "[a-z]{0,8}",
            balance_value in any::<i64>(),
            first in any::<i64>(),
            second in any::<i64>(),
        ) {
            let account = Account { owner, balance: balance_value };
            prop_assert_eq!(view(&balance(), set(&balance(), first, account.clone())), first);
            prop_assert_eq!(set(&balance(), view(&balance(), account.clone()), account.clone()), account.clone());
            prop_assert_eq!(
                set(&balance(), second, set(&balance(), first, account.clone())),
                set(&balance(), second, account)
            );
        }
    }
}
