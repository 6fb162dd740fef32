//! HashTable: `u64`-keyed table with separate chaining. Each bucket is a
//! [`LinkedList`] of [`KeyValue`] pairs owned by the table.
//!
//! Invariants
//! - `len` equals the sum of all chain lengths.
//! - Keys are unique across the whole table.
//! - Every pair sits in bucket `key % bucket_count`.
//!
//! The table only talks to its chains through the list's public API
//! (cursors, handles, push/pop); it never touches list nodes directly.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::hash_table_cursor::TableCursor;
use crate::linked_list::{self, CursorMut, LinkedList, Position};
use core::fmt;

/// One entry of the table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyValue<V> {
    pub key: u64,
    pub value: V,
}

/// What [`HashTable::insert`] did with the new pair.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub enum InsertOutcome<V> {
    /// The key was absent; the table grew by one.
    Inserted,
    /// The key was present; its value was swapped and the previous pair is
    /// handed back for disposal.
    Replaced(KeyValue<V>),
}

pub(crate) type Chain<V> = LinkedList<KeyValue<V>>;

pub struct HashTable<V> {
    pub(crate) buckets: Vec<Chain<V>>,
    len: usize,
    config: Config,
}

fn alloc_buckets<V>(n: usize) -> Result<Vec<Chain<V>>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(n)?;
    buckets.resize_with(n, LinkedList::new);
    Ok(buckets)
}

/// Cursor on the pair with `key`, if the chain holds one.
fn seek<V>(chain: &mut Chain<V>, key: u64) -> Option<CursorMut<'_, KeyValue<V>>> {
    let mut cursor = chain.cursor_mut(Position::Head)?;
    while cursor.payload().key != key {
        if !cursor.move_next() {
            return None;
        }
    }
    Some(cursor)
}

impl<V> HashTable<V> {
    /// Empty table using the default policy. Allocation failure aborts, as
    /// with any infallible collection constructor; use
    /// [`HashTable::with_config`] to observe it instead.
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            buckets: (0..config.initial_buckets)
                .map(|_| LinkedList::new())
                .collect(),
            len: 0,
            config,
        }
    }

    /// Empty table with `bucket_count` buckets and the default growth policy.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        Self::with_config(Config::new(bucket_count))
    }

    /// Empty table following `config`. Fails without leaking anything if the
    /// bucket array cannot be reserved.
    pub fn with_config(config: Config) -> Result<Self> {
        let buckets = alloc_buckets(config.initial_buckets)?;
        log::trace!("Allocated hash table with {} buckets", buckets.len());
        Ok(Self {
            buckets,
            len: 0,
            config,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    fn bucket_index(&self, key: u64) -> usize {
        (key % self.buckets.len() as u64) as usize
    }

    /// Inserts `value` under `key`, replacing (and returning) any previous
    /// pair with that key. May grow the table first.
    pub fn insert(&mut self, key: u64, value: V) -> InsertOutcome<V> {
        self.maybe_grow();

        let idx = self.bucket_index(key);
        let chain = &mut self.buckets[idx];
        if let Some(cursor) = seek(chain, key) {
            let slot = cursor.into_payload_mut();
            let old = core::mem::replace(&mut slot.value, value);
            return InsertOutcome::Replaced(KeyValue { key, value: old });
        }
        chain.push_back(KeyValue { key, value });
        self.len += 1;
        InsertOutcome::Inserted
    }

    pub fn lookup(&self, key: u64) -> Option<&KeyValue<V>> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|kv| kv.key == key)
    }

    pub fn get(&self, key: u64) -> Option<&V> {
        self.lookup(key).map(|kv| &kv.value)
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        seek(&mut self.buckets[idx], key).map(|c| &mut c.into_payload_mut().value)
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.lookup(key).is_some()
    }

    /// Detaches the pair with `key`; the caller now owns its value.
    pub fn remove(&mut self, key: u64) -> Option<KeyValue<V>> {
        let idx = self.bucket_index(key);
        let kv = seek(&mut self.buckets[idx], key)?.remove_current();
        self.len -= 1;
        Some(kv)
    }

    /// Cursor on the first pair in bucket order, or past-the-end if empty.
    pub fn cursor(&mut self) -> TableCursor<'_, V> {
        TableCursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Consumes the table, handing every value to `release`. Dropping the
    /// table is the same as `free(drop)`.
    pub fn free<F>(self, mut release: F)
    where
        F: FnMut(V),
    {
        for chain in self.buckets {
            chain.free(|kv| release(kv.value));
        }
    }

    fn maybe_grow(&mut self) {
        let buckets = self.buckets.len();
        if self.len < buckets.saturating_mul(self.config.max_load_factor) {
            return;
        }
        // Keep serving at the current size if the larger array is out of reach.
        if let Err(e) = self.grow() {
            log::warn!("Abandoned resize of {buckets} buckets holding {} pairs: {e}", self.len);
        }
    }

    /// Rehashes into `growth_factor` times as many buckets. The only fallible
    /// step is reserving the new array, which happens before any pair moves.
    fn grow(&mut self) -> Result<()> {
        let old = self.buckets.len();
        let target = old
            .checked_mul(self.config.growth_factor)
            .ok_or(Error::CapacityOverflow)?;
        let mut buckets = alloc_buckets::<V>(target)?;

        for chain in &mut self.buckets {
            while let Some(kv) = chain.pop_front() {
                let idx = (kv.key % target as u64) as usize;
                buckets[idx].push_back(kv);
            }
        }
        self.buckets = buckets;

        log::trace!("Resized hash table from {old} to {target} buckets ({} pairs)", self.len);
        Ok(())
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|kv| (&kv.key, &kv.value)))
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a KeyValue<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all pairs in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Chain<V>>,
    chain: Option<linked_list::Iter<'a, KeyValue<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a KeyValue<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(kv) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(kv);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
