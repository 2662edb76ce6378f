use core::cmp::Ordering;

use crate::{table::Node, OrdTable, TableError, TableKey};

impl<K: TableKey, V> OrdTable<K, V> {
    /// Inserts the key-value pair `(k, v)` as a new leaf.
    ///
    /// # Errors
    ///
    /// [TableError::NullKey] if `k` is null, and [TableError::AlreadyExists]
    /// if an entry with an equal key is present, in which case the table is
    /// unchanged and `k` and `v` are dropped.
    pub fn insert(&mut self, k: K, v: V) -> Result<(), TableError> {
        if k.is_null() {
            return Err(TableError::NullKey)
        }
        let mut p = match self.root {
            Some(p_root) => p_root,
            None => {
                let p_new = self.a.insert(Node::new(k, v, None));
                self.root = Some(p_new);
                tracing::trace!(?p_new, "inserted root");
                return Ok(())
            }
        };
        // descend until we fall off the tree
        let (p_back, left) = loop {
            let node = &self.a[p];
            match Ord::cmp(&node.k, &k) {
                Ordering::Greater => match node.p_left {
                    Some(p_left) => p = p_left,
                    None => break (p, true),
                },
                Ordering::Less => match node.p_right {
                    Some(p_right) => p = p_right,
                    None => break (p, false),
                },
                Ordering::Equal => return Err(TableError::AlreadyExists),
            }
        };
        let p_new = self.a.insert(Node::new(k, v, Some(p_back)));
        let parent = &mut self.a[p_back];
        if left {
            parent.p_left = Some(p_new);
        } else {
            parent.p_right = Some(p_new);
        }
        tracing::trace!(?p_new, ?p_back, left, "attached leaf");
        // the new node already has a size of 1
        let mut p = Some(p_back);
        while let Some(p_) = p {
            let node = &mut self.a[p_];
            node.size += 1;
            p = node.p_back;
        }
        Ok(())
    }
}
