//! The universal optic shape and composition.
//!
//! Every optic in this crate is a value implementing [`Optic`]: given a
//! function from a focus to an action producing a replacement focus, it
//! produces a function from a whole to an action producing a replacement
//! whole.
//!
//! ```text
//! apply : (A -> F<B>) -> (S -> F<T>)
//! ```
//!
//! The *kind* of an optic is decided only by which action brands `F` it
//! implements the trait for:
//!
//! | kind       | implemented for                         |
//! |------------|-----------------------------------------|
//! | Iso, Lens  | every [`Functor`]                       |
//! | Getter     | every [`Phantom`] functor               |
//! | Traversal  | every [`Applicative`]                   |
//! | Fold       | every [`Phantom`] + [`Applicative`]     |
//! | Setter     | every [`Committing`] applicative        |
//!
//! Because `Phantom`, `Applicative` and `Committing` all refine `Functor`,
//! a lens is automatically usable wherever a getter, traversal, fold or
//! setter is expected. Composition ([`Composed`]) requires both parts to
//! implement the trait for the same `F`, so the composite is implemented for
//! exactly the intersection of the brands its parts accept: the weaker kind.
//!
//! [`Functor`]: crate::typeclass::Functor
//! [`Phantom`]: crate::typeclass::Phantom
//! [`Applicative`]: crate::typeclass::Applicative
//! [`Committing`]: crate::typeclass::Committing

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::Functor;

/// A composable accessor, usable at action type `F`.
///
/// # Type Parameters
///
/// - `F`: The action brand the optic is being run at
/// - `S`: The whole before the update
/// - `T`: The whole after the update
/// - `A`: The focus before the update
/// - `B`: The focus after the update
///
/// # Laws
///
/// An optic must call `focus` on its foci in a fixed left-to-right order and
/// must not call it more than once per focus. Traversal effects and
/// positional search rely on that ordering.
pub trait Optic<F: Functor, S, T, A, B> {
    /// Lifts an action on the focus to an action on the whole.
    ///
    /// # Arguments
    ///
    /// * `focus` - Produces the action for each focus
    /// * `whole` - The structure to run over
    ///
    /// # Returns
    ///
    /// The action carrying the rebuilt whole
    fn apply<G>(&self, focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(A) -> F::Of<B>;
}

/// Two optics composed: `outer` reaches `A`, `inner` reaches from `A` inward.
///
/// `A` and `B` name the intermediate focus. They are fixed by the optics
/// involved and rarely need to be written out.
pub struct Composed<O1, O2, A, B> {
    outer: O1,
    inner: O2,
    _marker: PhantomData<fn(A) -> B>,
}

impl<O1, O2, A, B> Composed<O1, O2, A, B> {
    /// Composes `outer` with `inner`.
    pub const fn new(outer: O1, inner: O2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }

    /// The optic reaching the intermediate focus.
    pub const fn outer(&self) -> &O1 {
        &self.outer
    }

    /// The optic reaching from the intermediate focus inward.
    pub const fn inner(&self) -> &O2 {
        &self.inner
    }
}

impl<O1: Clone, O2: Clone, A, B> Clone for Composed<O1, O2, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O1: fmt::Debug, O2: fmt::Debug, A, B> fmt::Debug for Composed<O1, O2, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<F, S, T, A, B, X, Y, O1, O2> Optic<F, S, T, X, Y> for Composed<O1, O2, A, B>
where
    F: Functor,
    O1: Optic<F, S, T, A, B>,
    O2: Optic<F, A, B, X, Y>,
{
    fn apply<G>(&self, mut focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(X) -> F::Of<Y>,
    {
        self.outer
            .apply(|part| self.inner.apply(&mut focus, part), whole)
    }
}

/// Composes two optics, `outer` first.
///
/// Reading left to right follows the path into the structure, so
/// `compose(outer, inner)` focuses on `inner` inside `outer`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{compose, set, view, Fst, Snd};
///
/// let nested = compose(Snd, Fst);
/// assert_eq!(view(&nested, ("label", (1, 2))), 1);
/// assert_eq!(set(&nested, 10, ("label", (1, 2))), ("label", (10, 2)));
/// ```
pub const fn compose<O1, O2, A, B>(outer: O1, inner: O2) -> Composed<O1, O2, A, B> {
    Composed::new(outer, inner)
}

/// Method syntax for composition.
pub trait OpticExt: Sized {
    /// Composes `self` with an optic reaching further inward.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::optics::{over, OpticExt, Fst, Snd};
    ///
    /// let nested = Fst.compose(Snd);
    /// assert_eq!(over(&nested, |n: i32| n + 1, ((0, 1), "tag")), ((0, 2), "tag"));
    /// ```
    fn compose<O2, A, B>(self, inner: O2) -> Composed<Self, O2, A, B> {
        Composed::new(self, inner)
    }
}

impl<O> OpticExt for O {}
