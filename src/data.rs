//! The dynamic trait/property store.
//!
//! A [`TraitsData`] maps trait identifiers to per-trait property maps.
//! A trait is *imbued* when its identifier is present, regardless of
//! whether any of its properties hold a value. The store is shared
//! through [`TraitsDataPtr`] by every view and holder; all of them see
//! each other's writes immediately.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// trait and property maps are keyed by strings, so a fast hasher is used
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

// used to print out readable forms of a store
use std::fmt;

use tracing::trace;

use crate::value::Value;

pub type OtherHasher = BuildHasherDefault<SeaHasher>;

/// An unordered set of trait identifiers.
pub type TraitSet = HashSet<String, OtherHasher>;

type Properties = HashMap<String, Value, OtherHasher>;
type Traits = HashMap<String, Properties, OtherHasher>;

/// Shared ownership of a store. The last holder to drop it destroys it.
pub type TraitsDataPtr = Arc<TraitsData>;

#[derive(Debug, Default)]
pub struct TraitsData {
    traits: RwLock<Traits>,
}

impl TraitsData {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_traits<I, S>(trait_set: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data = Self::new();
        data.add_traits(trait_set);
        data
    }
    /// Makes a new, empty, shared store.
    pub fn make() -> TraitsDataPtr {
        Arc::new(Self::new())
    }
    /// Makes a new shared store imbued with exactly the given traits and
    /// no property values.
    pub fn make_with_traits<I, S>(trait_set: I) -> TraitsDataPtr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self::with_traits(trait_set))
    }
    /// Makes an independent deep copy of `other`.
    pub fn make_copy(other: &TraitsData) -> TraitsDataPtr {
        Arc::new(other.clone())
    }

    // Poisoning can only follow a panic inside one of the short critical
    // sections below, none of which leave the map half-written.
    fn read(&self) -> RwLockReadGuard<'_, Traits> {
        self.traits.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, Traits> {
        self.traits.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn trait_set(&self) -> TraitSet {
        self.read().keys().cloned().collect()
    }
    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.read().contains_key(trait_id)
    }
    pub fn add_trait(&self, trait_id: &str) {
        let mut traits = self.write();
        if !traits.contains_key(trait_id) {
            trace!(trait_id, "imbuing trait");
            traits.insert(trait_id.to_owned(), Properties::default());
        }
    }
    pub fn add_traits<I, S>(&self, trait_set: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut traits = self.write();
        for trait_id in trait_set {
            if let Entry::Vacant(e) = traits.entry(trait_id.into()) {
                trace!(trait_id = %e.key(), "imbuing trait");
                e.insert(Properties::default());
            }
        }
    }
    /// Stores `value` under `(trait_id, key)`, imbuing the trait if
    /// needed. Any previous value is overwritten, whatever its variant.
    pub fn set_trait_property(&self, trait_id: &str, key: &str, value: impl Into<Value>) {
        let value = value.into();
        trace!(trait_id, key, %value, "setting trait property");
        let mut traits = self.write();
        if let Some(properties) = traits.get_mut(trait_id) {
            properties.insert(key.to_owned(), value);
        } else {
            let mut properties = Properties::default();
            properties.insert(key.to_owned(), value);
            traits.insert(trait_id.to_owned(), properties);
        }
    }
    /// Returns the value stored under `(trait_id, key)` exactly as it was
    /// stored, or `None` if the trait is absent or the key unset.
    pub fn get_trait_property(&self, trait_id: &str, key: &str) -> Option<Value> {
        self.read()
            .get(trait_id)
            .and_then(|properties| properties.get(key))
            .cloned()
    }
    pub fn trait_property_keys(&self, trait_id: &str) -> Option<BTreeSet<String>> {
        self.read()
            .get(trait_id)
            .map(|properties| properties.keys().cloned().collect())
    }
}

impl Clone for TraitsData {
    fn clone(&self) -> Self {
        Self {
            traits: RwLock::new(self.read().clone()),
        }
    }
}
impl PartialEq for TraitsData {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // never hold both locks at once
        let traits = self.read().clone();
        traits == *other.read()
    }
}
impl fmt::Display for TraitsData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let traits = self.read();
        let sorted: BTreeMap<&String, BTreeMap<&String, &Value>> = traits
            .iter()
            .map(|(id, properties)| (id, properties.iter().collect()))
            .collect();
        let mut rendered = Vec::with_capacity(sorted.len());
        for (id, properties) in sorted {
            let properties: Vec<String> = properties
                .iter()
                .map(|(key, value)| format!("{}: {}::<{}>", key, value, value.value_type()))
                .collect();
            rendered.push(format!("{}: {{{}}}", id, properties.join(", ")));
        }
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
