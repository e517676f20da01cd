//! Compile-time checks that each optic kind admits exactly the action types
//! its capabilities allow, plus runtime checks of mixed-kind compositions.
//!
//! A getter is viewable but not settable, a setter is settable but not
//! viewable, a traversal cannot be cloned as a lens, and composition lands
//! on the weaker of the two kinds.

#![forbid(unsafe_code)]

use focal::carrier::{BazaarBrand, ConstBrand, ContextBrand, EffectBrand};
use focal::optics::{
    compose, mapped, over, set, to, to_list_of, traversed, view, Composed, Fst, Optic, Sets, Snd,
    To, VecTraversal,
};
use focal::typeclass::{
    Applicative, Committing, Effective, Functor, IdentityBrand, Monad, OptionBrand, Phantom,
};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

type Entry = (i32, String);
type LengthGetter = To<Entry, usize, fn(&Entry) -> usize>;
type EveryElement = Sets<Vec<i32>, Vec<i32>, i32, i32, fn(Vec<i32>, &mut dyn FnMut(i32) -> i32) -> Vec<i32>>;
type Elements = VecTraversal<i32, i32>;
type FirstOfEach = Composed<VecTraversal<(i32, char), (i32, char)>, Fst, (i32, char), (i32, char)>;
type NestedLength = Composed<Snd, LengthGetter, Entry, Entry>;
type EntryLengths = Composed<VecTraversal<Entry, Entry>, LengthGetter, Entry, Entry>;
type RowScores = Composed<Snd, EveryElement, Vec<i32>, Vec<i32>>;

// =============================================================================
// Action Types
// =============================================================================

assert_impl_all!(IdentityBrand: Functor, Applicative, Monad, Committing);
assert_not_impl_any!(IdentityBrand: Phantom);

assert_impl_all!(ConstBrand<String>: Functor, Applicative, Phantom, Effective<IdentityBrand>);
assert_not_impl_any!(ConstBrand<String>: Committing, Monad);
assert_not_impl_any!(ConstBrand<i32>: Applicative);

assert_impl_all!(ContextBrand<i32, i32>: Functor);
assert_not_impl_any!(ContextBrand<i32, i32>: Applicative, Phantom);

assert_impl_all!(BazaarBrand<i32, i32>: Functor, Applicative);
assert_not_impl_any!(BazaarBrand<i32, i32>: Phantom, Committing);

assert_impl_all!(EffectBrand<OptionBrand, Vec<i32>>: Phantom, Applicative, Effective<OptionBrand>);

// =============================================================================
// Lens
// =============================================================================

assert_impl_all!(
    Fst: Optic<IdentityBrand, (i32, char), (i32, char), i32, i32>,
    Optic<ConstBrand<i32>, (i32, char), (i32, char), i32, i32>,
    Optic<ContextBrand<i32, i32>, (i32, char), (i32, char), i32, i32>
);

// =============================================================================
// Getter
// =============================================================================

assert_impl_all!(LengthGetter: Optic<ConstBrand<usize>, Entry, Entry, usize, usize>);
assert_not_impl_any!(
    LengthGetter: Optic<IdentityBrand, Entry, Entry, usize, usize>,
    Optic<ContextBrand<usize, usize>, Entry, Entry, usize, usize>
);

// =============================================================================
// Setter
// =============================================================================

assert_impl_all!(EveryElement: Optic<IdentityBrand, Vec<i32>, Vec<i32>, i32, i32>);
assert_not_impl_any!(
    EveryElement: Optic<ConstBrand<i32>, Vec<i32>, Vec<i32>, i32, i32>,
    Optic<ConstBrand<Vec<i32>>, Vec<i32>, Vec<i32>, i32, i32>
);

// =============================================================================
// Traversal
// =============================================================================

assert_impl_all!(
    Elements: Optic<IdentityBrand, Vec<i32>, Vec<i32>, i32, i32>,
    Optic<ConstBrand<Vec<i32>>, Vec<i32>, Vec<i32>, i32, i32>,
    Optic<BazaarBrand<i32, i32>, Vec<i32>, Vec<i32>, i32, i32>
);
assert_not_impl_any!(
    Elements: Optic<ContextBrand<i32, i32>, Vec<i32>, Vec<i32>, i32, i32>,
    Optic<ConstBrand<i32>, Vec<i32>, Vec<i32>, i32, i32>
);

// Traversal composed with a lens stays a traversal.
assert_impl_all!(FirstOfEach: Optic<BazaarBrand<i32, i32>, Vec<(i32, char)>, Vec<(i32, char)>, i32, i32>);
assert_not_impl_any!(FirstOfEach: Optic<ContextBrand<i32, i32>, Vec<(i32, char)>, Vec<(i32, char)>, i32, i32>);

// Lens composed with a getter is a getter: viewable, not settable.
assert_impl_all!(NestedLength: Optic<ConstBrand<usize>, (bool, Entry), (bool, Entry), usize, usize>);
assert_not_impl_any!(
    NestedLength: Optic<IdentityBrand, (bool, Entry), (bool, Entry), usize, usize>,
    Optic<ContextBrand<usize, usize>, (bool, Entry), (bool, Entry), usize, usize>
);

// Traversal composed with a getter is a fold: it folds into a monoid but
// can neither be set nor viewed as a single focus.
assert_impl_all!(EntryLengths: Optic<ConstBrand<Vec<usize>>, Vec<Entry>, Vec<Entry>, usize, usize>);
assert_not_impl_any!(
    EntryLengths: Optic<IdentityBrand, Vec<Entry>, Vec<Entry>, usize, usize>,
    Optic<ConstBrand<usize>, Vec<Entry>, Vec<Entry>, usize, usize>,
    Optic<BazaarBrand<usize, usize>, Vec<Entry>, Vec<Entry>, usize, usize>
);

// Lens composed with a setter is a setter: settable, not viewable.
assert_impl_all!(RowScores: Optic<IdentityBrand, (char, Vec<i32>), (char, Vec<i32>), i32, i32>);
assert_not_impl_any!(
    RowScores: Optic<ConstBrand<i32>, (char, Vec<i32>), (char, Vec<i32>), i32, i32>,
    Optic<ConstBrand<Vec<i32>>, (char, Vec<i32>), (char, Vec<i32>), i32, i32>,
    Optic<ContextBrand<i32, i32>, (char, Vec<i32>), (char, Vec<i32>), i32, i32>
);

// =============================================================================
// Mixed Compositions
// =============================================================================

fn name_length(entry: &Entry) -> usize {
    entry.1.len()
}

#[rstest]
fn lens_then_getter_is_viewable() {
    let length = compose(Snd, to(name_length as fn(&Entry) -> usize));
    let nested = (true, (7, String::from("focal")));
    assert_eq!(view(&length, nested), 5);
}

#[rstest]
fn traversal_then_getter_folds() {
    let lengths = compose(traversed(), to(name_length as fn(&Entry) -> usize));
    let entries = vec![(1, String::from("ab")), (2, String::from("cde"))];
    assert_eq!(to_list_of(&lengths, entries), vec![2, 3]);
}

#[rstest]
fn lens_then_setter_is_settable() {
    let scores = compose(Snd, mapped());
    assert_eq!(set(&scores, 0, ("row", vec![4, 5])), ("row", vec![0, 0]));
    assert_eq!(
        over(&scores, |n: i32| n * 10, ("row", vec![4, 5])),
        ("row", vec![40, 50])
    );
}
