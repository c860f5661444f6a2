//! Safe lookups and insert-only merges for maps.
//!
//! Lookups fall back to a default instead of failing on an absent key.
//! Merges insert entries one by one and refuse keys that are absent or
//! already present; entries inserted before a failure stay in place.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::hash_map::{self, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::error::{CollectionError, Result};

const DICTIONARY: &str = "dictionary";

/// Minimal map interface the dictionary helpers are written against.
pub trait Mapping<K, V> {
    /// Returns the value stored under `key`.
    fn get_value(&self, key: &K) -> Option<&V>;

    /// Inserts `key` only when it is not already present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] when `key` exists.
    fn insert_new(&mut self, key: K, value: V) -> Result<()>
    where
        K: Debug;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_new(&mut self, key: K, value: V) -> Result<()>
    where
        K: Debug,
    {
        match self.entry(key) {
            hash_map::Entry::Occupied(entry) => Err(duplicate(entry.key())),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_new(&mut self, key: K, value: V) -> Result<()>
    where
        K: Debug,
    {
        match self.entry(key) {
            btree_map::Entry::Occupied(entry) => Err(duplicate(entry.key())),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }
}

fn duplicate<K: Debug>(key: &K) -> crate::error::Error {
    CollectionError::DuplicateKey {
        key: format!("{key:?}"),
    }
    .into()
}

/// Lookups that substitute a default for an absent key.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use extkit::collections::DictionaryExt;
///
/// let stock = HashMap::from([("apples", 3)]);
/// assert_eq!(stock.value_or_default(&"apples").unwrap(), 3);
/// assert_eq!(stock.value_or_default(&"pears").unwrap(), 0);
/// assert_eq!(stock.value_or(&"pears", 7).unwrap(), 7);
/// ```
pub trait DictionaryExt<K, V> {
    /// Concrete map behind this receiver.
    type Map: Mapping<K, V>;

    /// Borrows the backing map.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCollection`] when the map is absent.
    fn mapping(&self) -> Result<&Self::Map>;

    /// Returns the value stored under `key`, or `V::default()`.
    fn value_or_default(&self, key: &K) -> Result<V>
    where
        V: Default + Clone,
    {
        Ok(self.mapping()?.get_value(key).cloned().unwrap_or_default())
    }

    /// Returns the value stored under `key`, or `default`.
    fn value_or(&self, key: &K, default: V) -> Result<V>
    where
        V: Clone,
    {
        Ok(self.mapping()?.get_value(key).cloned().unwrap_or(default))
    }
}

/// Insert-only merges into a map.
///
/// Keys are accepted as anything convertible into `Option<K>`, so both plain
/// keys and optional keys work. A `None` key is rejected, since a map never
/// holds an absent key.
pub trait DictionaryMergeExt<K, V>: DictionaryExt<K, V> {
    /// Mutably borrows the backing map.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCollection`] when the map is absent.
    fn mapping_mut(&mut self) -> Result<&mut Self::Map>;

    /// Inserts every `(key, value)` pair of `pairs`.
    ///
    /// A `None` source leaves the map untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidOperation`] for a `None` key and
    /// [`CollectionError::DuplicateKey`] for a key already in the map.
    fn add_range<I, KO>(&mut self, pairs: Option<I>) -> Result<()>
    where
        I: IntoIterator<Item = (KO, V)>,
        KO: Into<Option<K>>,
        K: Debug,
    {
        let map = self.mapping_mut()?;
        let Some(pairs) = pairs else {
            return Ok(());
        };
        for (key, value) in pairs {
            map.insert_new(required_key(key)?, value)?;
        }
        Ok(())
    }

    /// Copies every entry of `other` into this map.
    ///
    /// A `None` source leaves the map untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] for a key already in the map.
    fn add_range_from_map<'a, M>(&mut self, other: Option<&'a M>) -> Result<()>
    where
        &'a M: IntoIterator<Item = (&'a K, &'a V)>,
        M: 'a,
        K: Clone + Debug + 'a,
        V: Clone + 'a,
    {
        let map = self.mapping_mut()?;
        let Some(other) = other else {
            return Ok(());
        };
        for (key, value) in other {
            map.insert_new(key.clone(), value.clone())?;
        }
        Ok(())
    }

    /// Inserts one entry per element of `sequence`, deriving the key and the
    /// value with the given extractors.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when an extractor is
    /// missing, [`CollectionError::InvalidOperation`] when `key_fn` yields
    /// `None`, and [`CollectionError::DuplicateKey`] for a key already in
    /// the map.
    fn add_range_by<T, I, KO, F, G>(
        &mut self,
        sequence: I,
        key_fn: Option<F>,
        value_fn: Option<G>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> KO,
        G: FnMut(&T) -> V,
        KO: Into<Option<K>>,
        K: Debug,
    {
        let map = self.mapping_mut()?;
        let mut key_fn = key_fn.ok_or_else(|| CollectionError::InvalidArgument {
            name: "key_fn",
            reason: "a key extractor is required".to_string(),
        })?;
        let mut value_fn = value_fn.ok_or_else(|| CollectionError::InvalidArgument {
            name: "value_fn",
            reason: "a value extractor is required".to_string(),
        })?;

        for element in sequence {
            let key = required_key(key_fn(&element))?;
            map.insert_new(key, value_fn(&element))?;
        }
        Ok(())
    }
}

fn required_key<K, KO: Into<Option<K>>>(key: KO) -> Result<K> {
    key.into().ok_or_else(|| {
        CollectionError::InvalidOperation {
            reason: "a dictionary key cannot be absent".to_string(),
        }
        .into()
    })
}

impl<K, V, S> DictionaryExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Map = Self;

    fn mapping(&self) -> Result<&Self> {
        Ok(self)
    }
}

impl<K, V, S> DictionaryMergeExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn mapping_mut(&mut self) -> Result<&mut Self> {
        Ok(self)
    }
}

impl<K: Ord, V> DictionaryExt<K, V> for BTreeMap<K, V> {
    type Map = Self;

    fn mapping(&self) -> Result<&Self> {
        Ok(self)
    }
}

impl<K: Ord, V> DictionaryMergeExt<K, V> for BTreeMap<K, V> {
    fn mapping_mut(&mut self) -> Result<&mut Self> {
        Ok(self)
    }
}

impl<K, V, M> DictionaryExt<K, V> for &M
where
    M: DictionaryExt<K, V> + ?Sized,
{
    type Map = M::Map;

    fn mapping(&self) -> Result<&M::Map> {
        M::mapping(self)
    }
}

impl<K, V, M> DictionaryExt<K, V> for &mut M
where
    M: DictionaryExt<K, V> + ?Sized,
{
    type Map = M::Map;

    fn mapping(&self) -> Result<&M::Map> {
        M::mapping(self)
    }
}

impl<K, V, M> DictionaryMergeExt<K, V> for &mut M
where
    M: DictionaryMergeExt<K, V> + ?Sized,
{
    fn mapping_mut(&mut self) -> Result<&mut M::Map> {
        M::mapping_mut(self)
    }
}

impl<K, V, M> DictionaryExt<K, V> for Option<M>
where
    M: DictionaryExt<K, V>,
{
    type Map = M::Map;

    fn mapping(&self) -> Result<&M::Map> {
        let inner = self
            .as_ref()
            .ok_or(CollectionError::MissingCollection { name: DICTIONARY })?;
        inner.mapping()
    }
}

impl<K, V, M> DictionaryMergeExt<K, V> for Option<M>
where
    M: DictionaryMergeExt<K, V>,
{
    fn mapping_mut(&mut self) -> Result<&mut M::Map> {
        let inner = self
            .as_mut()
            .ok_or(CollectionError::MissingCollection { name: DICTIONARY })?;
        inner.mapping_mut()
    }
}
