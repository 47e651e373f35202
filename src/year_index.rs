use std::hash::{BuildHasherDefault, Hash};

use indexmap::IndexMap;
use twox_hash::XxHash64;

use crate::{
    record::{AtmosLog, AtmosRecord},
    sequence::Sequence,
};

type Hasher = BuildHasherDefault<XxHash64>;

/// Groups values under a key, keeping each group in arrival order and the
/// keys in first-seen order.
#[derive(Debug, Clone)]
pub struct GroupIndex<K, V> {
    map: IndexMap<K, Sequence<V>, Hasher>,
}

/// Records grouped by calendar year.
pub type YearIndex = GroupIndex<i32, AtmosRecord>;

#[macro_export]
macro_rules! group_index {
    ($($k: expr $(=> [$($value:expr),* $(,)?])?);* $(;)?) => {
        {
            #[allow(unused_mut)]
            let mut map = $crate::year_index::GroupIndex::new();
            $(
                #[allow(unused_variables)]
                let values = map.ensure_key($k);
                $(
                    $(values.push($value);)*
                )?
            )*
            map
        }
    };
}

impl<K, V> GroupIndex<K, V> {
    pub fn new() -> Self {
        Self {
            map: IndexMap::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn num_keys(&self) -> usize {
        self.map.len()
    }

    /// Total number of values across all groups.
    pub fn num_values(&self) -> usize {
        self.map.values().map(Sequence::len).sum()
    }

    pub fn ensure_key(&mut self, k: K) -> &mut Sequence<V>
    where
        K: Hash + Eq,
    {
        self.map.entry(k).or_insert_with(Sequence::new)
    }

    pub fn insert(&mut self, k: K, v: V)
    where
        K: Hash + Eq,
    {
        self.ensure_key(k).push(v)
    }

    pub fn get(&self, k: &K) -> Option<&Sequence<V>>
    where
        K: Hash + Eq,
    {
        self.map.get(k)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Sequence<V>)> {
        self.map.iter()
    }
}

impl<K, V> Default for GroupIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl YearIndex {
    pub fn from_log(log: &AtmosLog) -> Self {
        let mut index = Self::new();
        for record in log {
            index.insert(record.year(), *record);
        }
        index
    }
}

impl<K, V> IntoIterator for GroupIndex<K, V> {
    type Item = (K, Sequence<V>);

    type IntoIter = indexmap::map::IntoIter<K, Sequence<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
