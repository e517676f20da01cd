//! Key-based lenses with insertion and deletion.
//!
//! [`at`] focuses on the *presence* of a value under a key: the focus is an
//! `Option`, so writing `Some(value)` inserts or replaces and writing `None`
//! deletes. Unlike an index traversal, the result is a true lens.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use focal::optics::{at, set, view};
//!
//! let map = BTreeMap::from([("a", 1)]);
//!
//! assert_eq!(view(&at("a"), map.clone()), Some(1));
//! assert_eq!(view(&at("b"), map.clone()), None);
//!
//! let map = set(&at("b"), Some(2), map);
//! assert_eq!(map.get("b"), Some(&2));
//!
//! let map = set(&at("a"), None, map);
//! assert!(!map.contains_key("a"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::optic::Optic;
use crate::typeclass::Functor;

/// Containers supporting lookup, insertion and deletion by key.
pub trait At<K>: Sized {
    /// The value type stored in the container.
    type Value;

    /// Returns a copy of the value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<Self::Value>;

    /// Stores `value` under `key`, deleting the entry when `value` is `None`.
    #[must_use]
    fn store(self, key: K, value: Option<Self::Value>) -> Self;
}

impl<K: Ord, V: Clone> At<K> for BTreeMap<K, V> {
    type Value = V;

    fn lookup(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(mut self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
        self
    }
}

impl<K: Eq + Hash, V: Clone, H: BuildHasher> At<K> for HashMap<K, V, H> {
    type Value = V;

    fn lookup(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }

    fn store(mut self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => {
                self.insert(key, value);
            }
            None => {
                self.remove(&key);
            }
        }
        self
    }
}

/// A lens onto the entry under one key of a container.
pub struct AtKey<M, K> {
    key: K,
    _marker: PhantomData<fn() -> M>,
}

impl<M, K: Clone> Clone for AtKey<M, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M, K: std::fmt::Debug> std::fmt::Debug for AtKey<M, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("AtKey").field("key", &self.key).finish()
    }
}

impl<F, M, K> Optic<F, M, M, Option<M::Value>, Option<M::Value>> for AtKey<M, K>
where
    F: Functor,
    M: At<K> + 'static,
    K: Clone + 'static,
    M::Value: 'static,
{
    fn apply<G>(&self, mut focus: G, whole: M) -> F::Of<M>
    where
        G: FnMut(Option<M::Value>) -> F::Of<Option<M::Value>>,
    {
        let current = whole.lookup(&self.key);
        let key = self.key.clone();
        F::fmap(focus(current), move |replacement| whole.store(key, replacement))
    }
}

/// Returns a lens onto the entry stored under `key`.
pub const fn at<M, K>(key: K) -> AtKey<M, K>
where
    M: At<K>,
{
    AtKey {
        key,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{over, set, view};
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn hash_map_insert_and_delete() {
        let map: HashMap<String, i32> = HashMap::new();
        let map = set(&at(String::from("key")), Some(42), map);
        assert_eq!(map.get("key"), Some(&42));

        let map = over(&at(String::from("key")), |value: Option<i32>| value.map(|n| n + 1), map);
        assert_eq!(map.get("key"), Some(&43));

        let map = set(&at(String::from("key")), None, map);
        assert!(map.is_empty());
    }

    #[rstest]
    fn deleting_a_missing_key_is_a_no_op() {
        let map = BTreeMap::from([(1, 'a')]);
        assert_eq!(set(&at(2), None, map.clone()), map);
    }

    proptest! {
        #[test]
        fn at_obeys_lens_laws(
            entries in prop::collection::btree_map(0_u8..8, any::<i32>(), 0..6),
            key in 0_u8..8,
            first in prop::option::of(any::<i32>()),
            second in prop::option::of(any::<i32>()),
        ) {
            let entry = at(key);
            prop_assert_eq!(view(&entry, set(&entry, first, entries.clone())), first);
            prop_assert_eq!(set(&entry, view(&entry, entries.clone()), entries.clone()), entries.clone());
            prop_assert_eq!(
                set(&entry, second, set(&entry, first, entries.clone())),
                set(&entry, second, entries)
            );
        }
    }
}
