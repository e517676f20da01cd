//! Consumers: running an optic at a chosen action type.
//!
//! Each consumer picks the action type it needs and thereby the capability
//! it demands. `view` runs at a constant action and so accepts getters,
//! lenses and isos; `over` and `set` run at the identity action and accept
//! setters, traversals, lenses and isos; the fold consumers run at a
//! constant action carrying a monoid and accept folds, traversals, getters,
//! lenses and isos. Passing an optic of the wrong kind is a compile error.

use crate::carrier::{
    Const, ConstBrand, Effect, EffectBrand, First, Max, Min, Sequenced, Traversed,
};
use crate::typeclass::{Applicative, Functor, Identity, IdentityBrand, Monad, Monoid, PairBrand};

use super::optic::Optic;

/// Reads the single focus of a getter, lens or iso.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{view, Fst};
///
/// assert_eq!(view(&Fst, (1, "hello")), 1);
/// ```
pub fn view<O, S, A>(optic: &O, whole: S) -> A
where
    O: Optic<ConstBrand<A>, S, S, A, A>,
{
    optic.apply(Const::new, whole).into_inner()
}

/// Reads the focus through a function.
///
/// When the optic has many foci the results are combined with the monoid of
/// `R`, left to right.
pub fn views<O, S, A, R, G>(optic: &O, mut function: G, whole: S) -> R
where
    O: Optic<ConstBrand<R>, S, S, A, A>,
    G: FnMut(A) -> R,
{
    optic
        .apply(|part| Const::new(function(part)), whole)
        .into_inner()
}

/// Rebuilds the whole with every focus replaced by `function` applied to it.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{over, traversed};
///
/// assert_eq!(over(&traversed(), |n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn over<O, S, T, A, B, G>(optic: &O, mut function: G, whole: S) -> T
where
    O: Optic<IdentityBrand, S, T, A, B>,
    G: FnMut(A) -> B,
{
    optic
        .apply(|part| Identity(function(part)), whole)
        .into_inner()
}

/// Rebuilds the whole with every focus replaced by `value`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{set, Snd};
///
/// assert_eq!(set(&Snd, "world", (1, "hello")), (1, "world"));
/// ```
pub fn set<O, S, T, A, B>(optic: &O, value: B, whole: S) -> T
where
    O: Optic<IdentityBrand, S, T, A, B>,
    B: Clone,
{
    over(optic, |_| value.clone(), whole)
}

/// Lists every focus in visiting order.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{to_list_of, Both};
///
/// assert_eq!(to_list_of(&Both, ('l', 'r')), vec!['l', 'r']);
/// ```
pub fn to_list_of<O, S, A>(optic: &O, whole: S) -> Vec<A>
where
    O: Optic<ConstBrand<Vec<A>>, S, S, A, A>,
{
    views(optic, |part| vec![part], whole)
}

/// Maps every focus into a monoid and combines the results left to right.
///
/// An optic with no foci yields [`Monoid::empty`].
pub fn fold_map_of<O, S, A, R, G>(optic: &O, function: G, whole: S) -> R
where
    O: Optic<ConstBrand<R>, S, S, A, A>,
    R: Monoid,
    G: FnMut(A) -> R,
{
    views(optic, function, whole)
}

/// The first focus in visiting order, if any.
pub fn first_of<O, S, A>(optic: &O, whole: S) -> Option<A>
where
    O: Optic<ConstBrand<First<A>>, S, S, A, A>,
{
    views(optic, |part| First(Some(part)), whole).into()
}

/// The largest focus, if any.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{max_of, min_of, traversed};
///
/// assert_eq!(max_of(&traversed(), vec![5, 3, 9, 1]), Some(9));
/// assert_eq!(min_of(&traversed(), vec![5, 3, 9, 1]), Some(1));
/// assert_eq!(max_of(&traversed(), Vec::<i32>::new()), None);
/// ```
pub fn max_of<O, S, A>(optic: &O, whole: S) -> Option<A>
where
    O: Optic<ConstBrand<Max<A>>, S, S, A, A>,
    A: Ord,
{
    views(optic, |part| Max(Some(part)), whole).into()
}

/// The smallest focus, if any.
pub fn min_of<O, S, A>(optic: &O, whole: S) -> Option<A>
where
    O: Optic<ConstBrand<Min<A>>, S, S, A, A>,
    A: Ord,
{
    views(optic, |part| Min(Some(part)), whole).into()
}

/// Runs an effectful function on every focus and rebuilds the whole inside
/// the combined action.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{traverse_of, traversed};
/// use focal::typeclass::OptionBrand;
///
/// let parse = |text: &str| text.parse::<i32>().ok();
/// assert_eq!(
///     traverse_of::<OptionBrand, _, _, _, _, _, _>(&traversed(), parse, vec!["1", "2"]),
///     Some(vec![1, 2])
/// );
/// ```
pub fn traverse_of<F, O, S, T, A, B, G>(optic: &O, function: G, whole: S) -> F::Of<T>
where
    F: Functor,
    O: Optic<F, S, T, A, B>,
    G: FnMut(A) -> F::Of<B>,
{
    optic.apply(function, whole)
}

/// [`traverse_of`] with the whole given first.
pub fn for_of<F, O, S, T, A, B, G>(optic: &O, whole: S, function: G) -> F::Of<T>
where
    F: Functor,
    O: Optic<F, S, T, A, B>,
    G: FnMut(A) -> F::Of<B>,
{
    traverse_of(optic, function, whole)
}

/// Sequences the actions sitting at every focus.
pub fn sequence_of<F, O, S, T, B>(optic: &O, whole: S) -> F::Of<T>
where
    F: Functor,
    O: Optic<F, S, T, F::Of<B>, B>,
{
    optic.apply(|action| action, whole)
}

/// Runs an effectful function on every focus for its effects only.
///
/// Accepts folds as well as traversals.
pub fn traverse_of_<F, O, S, A, R, G>(optic: &O, mut function: G, whole: S) -> F::Of<()>
where
    F: Applicative,
    O: Optic<ConstBrand<Traversed<F>>, S, S, A, A>,
    G: FnMut(A) -> F::Of<R>,
    R: 'static,
{
    views(optic, |part| Traversed(F::void::<R>(function(part))), whole).0
}

/// [`traverse_of_`] with the whole given first.
pub fn for_of_<F, O, S, A, R, G>(optic: &O, whole: S, function: G) -> F::Of<()>
where
    F: Applicative,
    O: Optic<ConstBrand<Traversed<F>>, S, S, A, A>,
    G: FnMut(A) -> F::Of<R>,
    R: 'static,
{
    traverse_of_(optic, function, whole)
}

/// Runs a monadic function on every focus for its effects only, each
/// action bound after the previous one.
pub fn map_m_of_<M, O, S, A, R, G>(optic: &O, mut function: G, whole: S) -> M::Of<()>
where
    M: Monad,
    O: Optic<ConstBrand<Sequenced<M>>, S, S, A, A>,
    G: FnMut(A) -> M::Of<R>,
    R: 'static,
{
    views(optic, |part| Sequenced(M::void::<R>(function(part))), whole).0
}

/// Runs the host computations of a monadic getter or fold and returns the
/// result.
///
/// For a plain getter this is `view` lifted into `M`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{act, perform};
/// use focal::typeclass::ResultBrand;
///
/// let parsed = act::<ResultBrand<String>, _, _, _>(|text: &String| {
///     text.parse::<u8>().map_err(|error| error.to_string())
/// });
///
/// assert_eq!(perform::<ResultBrand<String>, _, _, _>(&parsed, "42".to_string()), Ok(42));
/// assert!(perform::<ResultBrand<String>, _, _, _>(&parsed, "x".to_string()).is_err());
/// ```
pub fn perform<M, O, S, A>(optic: &O, whole: S) -> M::Of<A>
where
    M: Monad,
    O: Optic<EffectBrand<M, A>, S, S, A, A>,
    A: 'static,
{
    optic
        .apply(|part| Effect::new(M::pure(part)), whole)
        .into_inner()
}

/// [`over`] that also reports the new focus.
///
/// With several foci the new foci are combined with the monoid of `B`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{over_and_report, Fst};
///
/// assert_eq!(over_and_report(&Fst, |n: i32| n + 1, (1, 'a')), (2, (2, 'a')));
/// ```
pub fn over_and_report<O, S, T, A, B, G>(optic: &O, mut function: G, whole: S) -> (B, T)
where
    O: Optic<PairBrand<B>, S, T, A, B>,
    B: Clone,
    G: FnMut(A) -> B,
{
    optic.apply(
        |part| {
            let replacement = function(part);
            (replacement.clone(), replacement)
        },
        whole,
    )
}

/// [`set`] that also reports the value written.
pub fn set_and_report<O, S, T, A, B>(optic: &O, value: B, whole: S) -> (B, T)
where
    O: Optic<IdentityBrand, S, T, A, B>,
    B: Clone,
{
    let written = value.clone();
    (written, set(optic, value, whole))
}
