//! Generic in-memory table, one per entity kind.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dastak_core::FreshId;

/// A keyed in-memory collection that owns identity assignment.
///
/// Rows are kept in insertion order for listing; lookups are O(1) through
/// the key map. Each table mints its own keys, so ID spaces never overlap
/// across entity kinds. Guards are held only for the duration of a single
/// operation and never across an `.await`.
pub struct Table<K, V> {
    inner: RwLock<TableInner<K, V>>,
}

struct TableInner<K, V> {
    rows: HashMap<K, V>,
    order: Vec<K>,
}

impl<K, V> Table<K, V>
where
    K: FreshId + Copy + Eq + Hash,
    V: Clone,
{
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                rows: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Insert a new row, assigning it a fresh ID.
    ///
    /// The caller builds the row from the assigned key; the stored copy is
    /// returned. Never fails for well-typed input.
    pub fn insert(&self, make: impl FnOnce(K) -> V) -> V {
        let id = K::fresh();
        let row = make(id);
        let mut inner = self.write();
        inner.rows.insert(id, row.clone());
        inner.order.push(id);
        row
    }

    /// Look up a row by key. Absent is not an error.
    #[must_use]
    pub fn get(&self, id: K) -> Option<V> {
        self.read().rows.get(&id).cloned()
    }

    /// Snapshot of all rows in insertion order.
    ///
    /// The snapshot does not reflect later writes.
    #[must_use]
    pub fn list(&self) -> Vec<V> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id).cloned())
            .collect()
    }

    /// Snapshot of the rows matching `pred`, in insertion order.
    #[must_use]
    pub fn filter(&self, pred: impl Fn(&V) -> bool) -> Vec<V> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id))
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    /// Find the first row matching `pred`, in insertion order.
    #[must_use]
    pub fn find(&self, pred: impl Fn(&V) -> bool) -> Option<V> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.rows.get(id))
            .find(|row| pred(row))
            .cloned()
    }

    /// Mutate a row in place, returning the updated copy.
    ///
    /// An absent key is a no-op returning `None`, not an error.
    pub fn update(&self, id: K, apply: impl FnOnce(&mut V)) -> Option<V> {
        let mut inner = self.write();
        let row = inner.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Number of rows stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().order.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Writes are single-step, so a poisoned lock still guards a
    // structurally sound map.
    fn read(&self) -> RwLockReadGuard<'_, TableInner<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableInner<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for Table<K, V>
where
    K: FreshId + Copy + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
