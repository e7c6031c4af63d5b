//! Group index backends
//!
//! Maps each key to the values seen with it, in arrival order:
//! - Hash: `hashbrown` table with `ahash` (default, cheapest inserts)
//! - Ordered: `BTreeMap`, keeps keys sorted as they arrive

use ahash::RandomState;
use hashbrown::HashMap;
use std::collections::BTreeMap;

use crate::cli::IndexKind;

/// Values sharing one key, in first-seen order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    values: Vec<String>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: String) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Group {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Trait for key -> group index implementations
pub trait GroupIndex {
    /// Append `value` to the group for `key`, creating the group if unseen
    fn insert(&mut self, key: String, value: String);

    /// Look up the group for a key
    fn get(&self, key: &str) -> Option<&Group>;

    /// Number of distinct keys
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of values across all groups
    fn value_count(&self) -> usize;

    /// Every `(key, group)` pair, in no particular order
    fn groups(&self) -> Box<dyn Iterator<Item = (&str, &Group)> + '_>;
}

/// Hash table index
pub struct HashIndex {
    map: HashMap<String, Group, RandomState>,
    values: usize,
}

impl HashIndex {
    pub fn new() -> Self {
        Self {
            map: HashMap::with_hasher(RandomState::new()),
            values: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            values: 0,
        }
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupIndex for HashIndex {
    fn insert(&mut self, key: String, value: String) {
        self.map.entry(key).or_default().push(value);
        self.values += 1;
    }

    fn get(&self, key: &str) -> Option<&Group> {
        self.map.get(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn value_count(&self) -> usize {
        self.values
    }

    fn groups(&self) -> Box<dyn Iterator<Item = (&str, &Group)> + '_> {
        Box::new(self.map.iter().map(|(k, g)| (k.as_str(), g)))
    }
}

/// Ordered tree index
#[derive(Default)]
pub struct OrderedIndex {
    map: BTreeMap<String, Group>,
    values: usize,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GroupIndex for OrderedIndex {
    fn insert(&mut self, key: String, value: String) {
        self.map.entry(key).or_default().push(value);
        self.values += 1;
    }

    fn get(&self, key: &str) -> Option<&Group> {
        self.map.get(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn value_count(&self) -> usize {
        self.values
    }

    fn groups(&self) -> Box<dyn Iterator<Item = (&str, &Group)> + '_> {
        Box::new(self.map.iter().map(|(k, g)| (k.as_str(), g)))
    }
}

/// Factory for creating an index based on configuration
pub fn create_index(kind: IndexKind) -> Box<dyn GroupIndex> {
    match kind {
        IndexKind::Hash => Box::new(HashIndex::new()),
        IndexKind::Ordered => Box::new(OrderedIndex::new()),
    }
}
