//! Property-based tests for Lens laws.
//!
//! Lens Laws:
//!
//! 1. **PutGet**: `view(l, set(l, b, s)) == b`
//! 2. **GetPut**: `set(l, view(l, s), s) == s`
//! 3. **PutPut**: `set(l, c, set(l, b, s)) == set(l, c, s)`
//!
//! Checked for hand-written lenses, the tuple lenses, map entries and
//! compositions of them.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use focal::optics::{at, compose, lens, set, view, Fst, Lens, Snd};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    zip: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

type FieldLens<S, A> = Lens<S, S, A, A, fn(&S) -> A, fn(S, A) -> S>;

fn address() -> FieldLens<Person, Address> {
    lens(
        (|person: &Person| person.address.clone()) as fn(&Person) -> Address,
        (|person: Person, address: Address| Person { address, ..person }) as fn(Person, Address) -> Person,
    )
}

fn zip() -> FieldLens<Address, u32> {
    lens(
        (|address: &Address| address.zip) as fn(&Address) -> u32,
        (|address: Address, zip: u32| Address { zip, ..address }) as fn(Address, u32) -> Address,
    )
}

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[a-z]{0,10}", "[a-z ]{0,16}", any::<u32>()).prop_map(|(name, street, zip)| Person {
        name,
        address: Address { street, zip },
    })
}

// =============================================================================
// Record Field Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_put_get_law(person in person_strategy(), value: u32) {
        let person_zip = compose(address(), zip());
        prop_assert_eq!(view(&person_zip, set(&person_zip, value, person)), value);
    }

    #[test]
    fn prop_get_put_law(person in person_strategy()) {
        let person_zip = compose(address(), zip());
        let current = view(&person_zip, person.clone());
        prop_assert_eq!(set(&person_zip, current, person.clone()), person);
    }

    #[test]
    fn prop_put_put_law(person in person_strategy(), first: u32, second: u32) {
        let person_zip = compose(address(), zip());
        prop_assert_eq!(
            set(&person_zip, second, set(&person_zip, first, person.clone())),
            set(&person_zip, second, person)
        );
    }
}

// =============================================================================
// Tuple Lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_tuple_lenses_obey_the_laws(pair in any::<((i16, bool), char)>(), value: bool) {
        let inner = compose(Fst, Snd);
        prop_assert_eq!(view(&inner, set(&inner, value, pair)), value);
        prop_assert_eq!(set(&inner, view(&inner, pair), pair), pair);
        prop_assert_eq!(set(&inner, !value, set(&inner, value, pair)), set(&inner, !value, pair));
    }
}

// =============================================================================
// Map Entry Lens
// =============================================================================

proptest! {
    #[test]
    fn prop_map_entry_obeys_the_laws(
        entries in prop::collection::btree_map(0_u8..16, any::<i32>(), 0..8),
        key in 0_u8..16,
        value in proptest::option::of(any::<i32>()),
    ) {
        let entry = at::<BTreeMap<u8, i32>, u8>(key);
        prop_assert_eq!(view(&entry, set(&entry, value, entries.clone())), value);
        prop_assert_eq!(set(&entry, view(&entry, entries.clone()), entries.clone()), entries.clone());
        prop_assert_eq!(
            set(&entry, None, set(&entry, value, entries.clone())),
            set(&entry, None, entries)
        );
    }
}
