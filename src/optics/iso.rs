//! Isomorphisms: lossless, reversible optics.
//!
//! An [`Iso`] converts a whole to its focus and a replacement focus back to
//! a replacement whole, losing nothing in either direction. As an [`Optic`]
//! it demands only [`Functor`] of its action type, so it is usable as a
//! lens, getter, traversal, fold or setter. On top of that it implements
//! [`Isomorphism`], the witness that also supports reversal with
//! [`Isomorphism::from`].
//!
//! # Laws
//!
//! For an isomorphism with conversions `forward` and `backward`:
//!
//! ```text
//! backward(forward(x)) == x
//! forward(backward(y)) == y
//! ```
//!
//! The library cannot check these; a pair that is not mutually inverse
//! silently produces wrong results.
//!
//! # Examples
//!
//! ```rust
//! use focal::optics::{from, iso, view, Isomorphism};
//!
//! let characters = iso(
//!     |text: String| text.chars().collect::<Vec<_>>(),
//!     |characters: Vec<char>| characters.into_iter().collect::<String>(),
//! );
//!
//! assert_eq!(view(&characters, "hi".to_string()), vec!['h', 'i']);
//! assert_eq!(view(&from(&characters), vec!['o', 'k']), "ok");
//! assert_eq!(characters.backward(vec!['a']), "a");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::consume::over;
use super::optic::{Composed, Optic};
use crate::typeclass::{Effective, Functor, IdentityBrand, Monad};

/// A two-sided isomorphism witness.
///
/// Implemented by [`Iso`] and by the composition of two isomorphisms.
pub trait Isomorphism<S, T, A, B> {
    /// The same isomorphism read in the opposite direction.
    type Reversed: Isomorphism<A, B, S, T>;

    /// Converts a whole to its focus.
    fn forward(&self, whole: S) -> A;

    /// Converts a replacement focus to a replacement whole.
    fn backward(&self, replacement: B) -> T;

    /// Reverses the isomorphism.
    fn from(&self) -> Self::Reversed;
}

/// An isomorphism built from conversion functions.
///
/// The four functions convert `S -> A`, `A -> S`, `T -> B` and `B -> T`.
/// The first and last drive the optic; the middle two drive its reversal.
pub struct Iso<S, T, A, B, SA, AS, TB, BT> {
    to_focus: SA,
    from_focus: AS,
    to_replacement: TB,
    from_replacement: BT,
    _marker: PhantomData<fn(S, B) -> (T, A)>,
}

impl<S, T, A, B, SA, AS, TB, BT> Iso<S, T, A, B, SA, AS, TB, BT> {
    /// Creates an isomorphism from its four conversions.
    pub const fn new(to_focus: SA, from_focus: AS, to_replacement: TB, from_replacement: BT) -> Self {
        Self {
            to_focus,
            from_focus,
            to_replacement,
            from_replacement,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, SA: Clone, AS: Clone, TB: Clone, BT: Clone> Clone for Iso<S, T, A, B, SA, AS, TB, BT> {
    fn clone(&self) -> Self {
        Self::new(
            self.to_focus.clone(),
            self.from_focus.clone(),
            self.to_replacement.clone(),
            self.from_replacement.clone(),
        )
    }
}

impl<S, T, A, B, SA, AS, TB, BT> fmt::Debug for Iso<S, T, A, B, SA, AS, TB, BT> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

impl<F, S, T, A, B, SA, AS, TB, BT> Optic<F, S, T, A, B> for Iso<S, T, A, B, SA, AS, TB, BT>
where
    F: Functor,
    SA: Fn(S) -> A,
    BT: Fn(B) -> T + Clone + 'static,
    B: 'static,
    T: 'static,
{
    fn apply<G>(&self, mut focus: G, whole: S) -> F::Of<T>
    where
        G: FnMut(A) -> F::Of<B>,
    {
        F::fmap(focus((self.to_focus)(whole)), self.from_replacement.clone())
    }
}

impl<S, T, A, B, SA, AS, TB, BT> Isomorphism<S, T, A, B> for Iso<S, T, A, B, SA, AS, TB, BT>
where
    SA: Fn(S) -> A + Clone,
    AS: Fn(A) -> S + Clone,
    TB: Fn(T) -> B + Clone,
    BT: Fn(B) -> T + Clone,
{
    type Reversed = Iso<A, B, S, T, AS, SA, BT, TB>;

    fn forward(&self, whole: S) -> A {
        (self.to_focus)(whole)
    }

    fn backward(&self, replacement: B) -> T {
        (self.from_replacement)(replacement)
    }

    fn from(&self) -> Self::Reversed {
        Iso::new(
            self.from_focus.clone(),
            self.to_focus.clone(),
            self.from_replacement.clone(),
            self.to_replacement.clone(),
        )
    }
}

/// Two composed isomorphisms form an isomorphism.
impl<S, T, A, B, X, Y, O1, O2> Isomorphism<S, T, X, Y> for Composed<O1, O2, A, B>
where
    O1: Isomorphism<S, T, A, B>,
    O2: Isomorphism<A, B, X, Y>,
{
    type Reversed = Composed<O2::Reversed, O1::Reversed, A, B>;

    fn forward(&self, whole: S) -> X {
        self.inner().forward(self.outer().forward(whole))
    }

    fn backward(&self, replacement: Y) -> T {
        self.outer().backward(self.inner().backward(replacement))
    }

    fn from(&self) -> Self::Reversed {
        Composed::new(self.inner().from(), self.outer().from())
    }
}

/// Builds a type-changing isomorphism from four conversions.
///
/// # Arguments
///
/// * `to_focus` - Converts the whole `S` to the focus `A`
/// * `from_focus` - Converts the focus `A` back to the whole `S`
/// * `to_replacement` - Converts the replacement whole `T` to the replacement focus `B`
/// * `from_replacement` - Converts the replacement focus `B` to the replacement whole `T`
pub const fn isos<S, T, A, B, SA, AS, TB, BT>(
    to_focus: SA,
    from_focus: AS,
    to_replacement: TB,
    from_replacement: BT,
) -> Iso<S, T, A, B, SA, AS, TB, BT>
where
    SA: Fn(S) -> A,
    AS: Fn(A) -> S,
    TB: Fn(T) -> B,
    BT: Fn(B) -> T,
{
    Iso::new(to_focus, from_focus, to_replacement, from_replacement)
}

/// Builds an isomorphism from one inverse pair.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{iso, over, under};
///
/// let celsius = iso(|kelvin: f64| kelvin - 273.15, |celsius: f64| celsius + 273.15);
/// let warmed = over(&celsius, |degrees| degrees + 10.0, 300.0);
/// assert!((warmed - 310.0).abs() < 1e-9);
///
/// let cooled = under(&celsius, |kelvin| kelvin - 10.0, 20.0);
/// assert!((cooled - 10.0).abs() < 1e-9);
/// ```
pub fn iso<S, A, G, H>(forward: G, backward: H) -> Iso<S, S, A, A, G, H, G, H>
where
    G: Fn(S) -> A + Clone,
    H: Fn(A) -> S + Clone,
{
    Iso::new(forward.clone(), backward.clone(), forward, backward)
}

/// Reverses an isomorphism.
pub fn from<I, S, T, A, B>(isomorphism: &I) -> I::Reversed
where
    I: Isomorphism<S, T, A, B>,
{
    isomorphism.from()
}

/// Modifies through the reversed isomorphism: `over(from(iso), function)`.
///
/// # Arguments
///
/// * `isomorphism` - The isomorphism to run backwards
/// * `function` - Transforms the whole type `S` into `T`
/// * `focus` - The value on the focus side
///
/// # Returns
///
/// The replacement focus `B`
pub fn under<I, S, T, A, B, G>(isomorphism: &I, function: G, focus: A) -> B
where
    I: Isomorphism<S, T, A, B>,
    I::Reversed: Optic<IdentityBrand, A, B, S, T>,
    G: FnMut(S) -> T,
{
    over(&isomorphism.from(), function, focus)
}

/// The reversible conversion between a host computation and an effective
/// action, packaged as an isomorphism.
///
/// # Examples
///
/// ```rust
/// use focal::carrier::{Effect, EffectBrand};
/// use focal::optics::{effective_iso, Isomorphism};
/// use focal::typeclass::OptionBrand;
///
/// let conversion = effective_iso::<OptionBrand, EffectBrand<OptionBrand, i32>, ()>();
/// let action: Effect<OptionBrand, i32, ()> = conversion.forward(Some(3));
/// assert_eq!(conversion.from().forward(action), Some(3));
/// ```
pub fn effective_iso<M, F, X>() -> Iso<
    M::Of<F::Output>,
    M::Of<F::Output>,
    F::Of<X>,
    F::Of<X>,
    fn(M::Of<F::Output>) -> F::Of<X>,
    fn(F::Of<X>) -> M::Of<F::Output>,
    fn(M::Of<F::Output>) -> F::Of<X>,
    fn(F::Of<X>) -> M::Of<F::Output>,
>
where
    M: Monad,
    F: Effective<M>,
{
    let wrap: fn(M::Of<F::Output>) -> F::Of<X> = <F as Effective<M>>::effective::<X>;
    let unwrap: fn(F::Of<X>) -> M::Of<F::Output> = <F as Effective<M>>::ineffective::<X>;
    iso(wrap, unwrap)
}
