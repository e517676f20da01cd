//! Optics: composable accessors for immutable data.
//!
//! Every optic in this module is a value implementing one trait,
//! [`Optic<F, S, T, A, B>`](Optic): given a function from a focus `A` to an
//! action `F::Of<B>`, it turns a whole `S` into an action `F::Of<T>`. The
//! action type `F` is chosen by the consumer, and what an optic demands of
//! `F` decides its kind.
//!
//! # Capability Lattice
//!
//! | Kind      | Demands of `F`                  | Built with                        |
//! |-----------|---------------------------------|-----------------------------------|
//! | Iso       | [`Functor`](crate::typeclass::Functor) | [`iso`], [`isos`]          |
//! | Lens      | [`Functor`](crate::typeclass::Functor) | [`lens`], [`Fst`], [`Snd`], [`at`] |
//! | Getter    | [`Phantom`](crate::typeclass::Phantom) | [`to`]                     |
//! | Action    | [`Effective`](crate::typeclass::Effective) | [`act`]                |
//! | Traversal | [`Applicative`](crate::typeclass::Applicative) | [`traversed`], [`both`], [`ix`] |
//! | Fold      | `Phantom` + `Applicative`       | [`folding`], [`folded`]           |
//! | Setter    | [`Committing`](crate::typeclass::Committing) | [`sets`], [`mapped`] |
//!
//! Composing two optics with [`compose`] yields an optic usable at exactly
//! the action types both accept, so the kind of a composition is the join
//! of the two kinds: a lens after a getter is a getter, a traversal after a
//! lens is a traversal, a getter after a traversal is a fold. Using an optic
//! where its kind does not fit, for example setting through a getter, is a
//! compile error.
//!
//! # Example
//!
//! ```
//! use focal::optics::{compose, lens, over, set, to_list_of, traversed, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, addresses: Vec<Address> }
//!
//! let addresses = lens(
//!     |person: &Person| person.addresses.clone(),
//!     |person: Person, addresses: Vec<Address>| Person { addresses, ..person },
//! );
//! let city = lens(
//!     |address: &Address| address.city.clone(),
//!     |address: Address, city: String| Address { city, ..address },
//! );
//! let cities = compose(compose(addresses.clone(), traversed()), city);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     addresses: vec![
//!         Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
//!         Address { street: "Oak Ave".to_string(), city: "Osaka".to_string() },
//!     ],
//! };
//!
//! assert_eq!(to_list_of(&cities, person.clone()), vec!["Tokyo", "Osaka"]);
//!
//! let moved = set(&cities, "Kyoto".to_string(), person.clone());
//! assert_eq!(to_list_of(&cities, moved.clone()), vec!["Kyoto", "Kyoto"]);
//! assert_eq!(moved.name, "Alice");
//!
//! let shouting = over(&cities, |city: String| city.to_uppercase(), person);
//! assert_eq!(view(&addresses, shouting)[0].city, "TOKYO");
//! ```
//!
//! # Laws
//!
//! Lenses satisfy `PutGet`, `GetPut` and `PutPut`; isomorphisms are
//! mutually inverse; traversals preserve identity and fuse consecutive
//! updates. See the module documentation of each kind.

mod at;
mod consume;
mod element;
mod error;
mod getter;
mod iso;
mod lens;
mod optic;
mod setter;
mod standard_optics;
mod traversal;

pub use optic::{compose, Composed, Optic, OpticExt};

pub use error::OpticError;

pub use iso::{effective_iso, from, iso, isos, under, Iso, Isomorphism};

pub use lens::{alongside, clone_lens, lens, merged, Alongside, ClonedLens, Lens, Merged};

pub use getter::{act, folded, folding, to, Act, Folding, To};

pub use setter::{mapped, sets, Sets};

pub use traversal::{clone_traversal, ix, traversed, ClonedTraversal, Ix, VecTraversal};

pub use standard_optics::{both, identity, swapped, Both, Fst, Snd};

pub use at::{at, At, AtKey};

pub use element::{element_of, element_where, ElementOf, ElementWhere};

pub use consume::{
    first_of, fold_map_of, for_of, for_of_, map_m_of_, max_of, min_of, over, over_and_report,
    perform, sequence_of, set, set_and_report, to_list_of, traverse_of, traverse_of_, view, views,
};

#[cfg(feature = "derive")]
pub use focal_derive::Lenses;
