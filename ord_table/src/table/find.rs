use core::cmp::Ordering;

use crate::{table::PNode, OrdTable, TableError, TableKey};

impl<K: TableKey, V> OrdTable<K, V> {
    /// Descends from the root to the node with key `k`
    pub(crate) fn find_node(&self, k: &K) -> Result<PNode, TableError> {
        if k.is_null() {
            return Err(TableError::NullKey)
        }
        let mut p = self.root.ok_or(TableError::EmptyRoot)?;
        loop {
            let node = &self.a[p];
            p = match Ord::cmp(k, &node.k) {
                Ordering::Less => node.p_left,
                Ordering::Equal => return Ok(p),
                Ordering::Greater => node.p_right,
            }
            .ok_or(TableError::NotFound)?;
        }
    }

    /// Returns a reference to the value associated with `k`.
    ///
    /// # Errors
    ///
    /// [TableError::NullKey] if `k` is null, [TableError::EmptyRoot] if the
    /// table is empty, and [TableError::NotFound] if no entry has the key.
    pub fn find(&self, k: &K) -> Result<&V, TableError> {
        let p = self.find_node(k)?;
        Ok(&self.a[p].v)
    }

    /// Like [OrdTable::find] but gives mutable access to the value. Keys can
    /// never be changed in place.
    pub fn find_mut(&mut self, k: &K) -> Result<&mut V, TableError> {
        let p = self.find_node(k)?;
        Ok(&mut self.a[p].v)
    }

    /// Returns the stored key equal to `k` along with its value
    pub fn find_key_value(&self, k: &K) -> Result<(&K, &V), TableError> {
        let p = self.find_node(k)?;
        let node = &self.a[p];
        Ok((&node.k, &node.v))
    }
}
