use core::{cmp::Ordering, fmt};

use crate::{
    iterators::{Entries, NodeRef, Traversal},
    ptr_struct, Arena, Stack, TableKey, TraversalOrder,
};

mod dump;
mod find;
mod insert;
mod remove;

ptr_struct!(PNode doc = "Pointer to a node of an `OrdTable`");

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) k: K,
    pub(crate) v: V,
    // Pointer back to the parent, `None` for the root
    pub(crate) p_back: Option<PNode>,
    pub(crate) p_left: Option<PNode>,
    pub(crate) p_right: Option<PNode>,
    // number of nodes in the subtree rooted here, including this one
    pub(crate) size: usize,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(k: K, v: V, p_back: Option<PNode>) -> Self {
        Self {
            k,
            v,
            p_back,
            p_left: None,
            p_right: None,
            size: 1,
        }
    }
}

/// An ordered table from `K` to `V` stored as a binary search tree whose
/// nodes keep a pointer back to their parent and the cardinality of their
/// subtree.
///
/// Keys in a left subtree are less than the key of their parent, keys in a
/// right subtree are greater. Keys are unique and never null (see
/// [TableKey]). There is no rebalancing, so the shape depends entirely on the
/// insertion order and sorted insertions degenerate into a list.
///
/// ```
/// use ord_table::{OrdTable, TableError, TraversalOrder};
///
/// let mut t = OrdTable::new();
/// for (k, v) in [(5, 'A'), (3, 'B'), (7, 'C'), (2, 'D'), (4, 'E'), (6, 'F'), (8, 'G')] {
///     t.insert(k, v).unwrap();
/// }
/// assert_eq!(t.find(&4), Ok(&'E'));
/// assert_eq!(t.insert(4, 'X'), Err(TableError::AlreadyExists));
/// assert_eq!(t.subtree_size(&3), Some(3));
///
/// let in_order: String = t.make_iterator(TraversalOrder::DepthFirst).collect();
/// assert_eq!(in_order, "DBEAFCG");
/// let level_order: String = t.make_iterator(TraversalOrder::BreadthFirst).collect();
/// assert_eq!(level_order, "ABCDEFG");
///
/// assert_eq!(t.remove(&5), Ok('A'));
/// assert_eq!(t.find(&5), Err(TableError::NotFound));
/// assert_eq!(t.len(), 6);
/// ```
pub struct OrdTable<K: TableKey, V> {
    pub(crate) root: Option<PNode>,
    pub(crate) a: Arena<PNode, Node<K, V>>,
}

impl<K: TableKey, V> OrdTable<K, V> {
    /// Used by tests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        Arena::_check_invariants(&this.a)?;
        let p_root = match this.root {
            Some(p_root) => p_root,
            None => {
                if this.a.is_empty() {
                    return Ok(())
                } else {
                    return Err("no root but nodes exist")
                }
            }
        };
        match this.a.get(p_root) {
            Some(root) => {
                if root.p_back.is_some() {
                    return Err("root node has a back pointer")
                }
                if root.size != this.a.len() {
                    return Err("root size is not the number of nodes")
                }
            }
            None => return Err("this.root is broken"),
        }
        for (p, node) in &this.a {
            if node.k.is_null() {
                return Err("null key in the tree")
            }
            let mut size = 1;
            for p_child in [node.p_left, node.p_right].into_iter().flatten() {
                let child = this.a.get(p_child).ok_or("broken child pointer")?;
                if child.p_back != Some(p) {
                    return Err("child does not point back to its parent")
                }
                size += child.size;
            }
            if node.size != size {
                return Err("incorrect subtree size")
            }
            if p != p_root {
                let p_back = node.p_back.ok_or("non-root node without a parent")?;
                let parent = this.a.get(p_back).ok_or("broken back pointer")?;
                if (parent.p_left != Some(p)) && (parent.p_right != Some(p)) {
                    return Err("parent does not point to its child")
                }
            }
        }
        // in-order walk, checks strict ordering and that every node is reachable
        let mut pushed = 0usize;
        let mut count = 0usize;
        let mut prev: Option<PNode> = None;
        let mut stack = Stack::new();
        let mut p = Some(p_root);
        loop {
            while let Some(p_) = p {
                pushed += 1;
                if pushed > this.a.len() {
                    return Err("cycle in the tree")
                }
                stack.push(p_);
                p = this.a.get(p_).ok_or("broken child pointer")?.p_left;
            }
            let Ok(p_) = stack.pop() else { break };
            count += 1;
            if let Some(prev) = prev {
                if Ord::cmp(&this.a[prev].k, &this.a[p_].k) != Ordering::Less {
                    return Err("incorrect ordering")
                }
            }
            prev = Some(p_);
            p = this.a[p_].p_right;
        }
        if count != this.a.len() {
            return Err("unreachable nodes")
        }
        Ok(())
    }

    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            root: None,
            a: Arena::new(),
        }
    }

    /// Returns the number of key-value pairs
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns if there is no root
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every key-value pair. Clearing an empty table does nothing.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return
        }
        tracing::trace!(len = self.a.len(), "clearing table");
        self.root = None;
        self.a.clear();
    }

    /// Returns the number of nodes in the subtree rooted at the node with key
    /// `k`. Returns `None` if the table is empty, `k` is null, or no node has
    /// the key.
    pub fn subtree_size(&self, k: &K) -> Option<usize> {
        let p = self.find_node(k).ok()?;
        Some(self.a[p].size)
    }

    /// Returns if `k` is in the table
    pub fn contains(&self, k: &K) -> bool {
        self.find_node(k).is_ok()
    }

    /// Returns a new traversal of the table in the given order. Traversals
    /// are single pass, and each call starts a fresh one.
    pub fn make_iterator(&self, order: TraversalOrder) -> Traversal<'_, K, V> {
        Traversal::new(self, order)
    }

    /// Shorthand for an in-order traversal over the values
    pub fn iter(&self) -> Traversal<'_, K, V> {
        self.make_iterator(TraversalOrder::DepthFirst)
    }

    /// In-order iteration over key-value pairs
    pub fn entries(&self) -> Entries<'_, K, V> {
        self.iter().entries()
    }

    /// In-order iteration over keys
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries().map(|(k, _)| k)
    }

    /// Returns a read-only cursor at the root
    pub fn root_node(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|p| NodeRef::new(self, p))
    }

    /// Returns the key-value pair with the smallest key
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut p = self.root?;
        while let Some(p_left) = self.a[p].p_left {
            p = p_left;
        }
        let node = &self.a[p];
        Some((&node.k, &node.v))
    }

    /// Returns the key-value pair with the largest key
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut p = self.root?;
        while let Some(p_right) = self.a[p].p_right {
            p = p_right;
        }
        let node = &self.a[p];
        Some((&node.k, &node.v))
    }

    /// Returns the number of levels in the tree, 0 if the table is empty. A
    /// table with `n` entries has a height between `log2(n + 1)` rounded up
    /// and `n`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Stack::new();
        if let Some(p_root) = self.root {
            stack.push((p_root, 1));
        }
        while let Ok((p, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.a[p];
            for p_child in [node.p_left, node.p_right].into_iter().flatten() {
                stack.push((p_child, depth + 1));
            }
        }
        height
    }
}

impl<K: TableKey, V> Default for OrdTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TableKey + Clone, V: Clone> Clone for OrdTable<K, V> {
    /// Clones the exact shape of the tree
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            a: self.a.clone(),
        }
    }
}

impl<K: TableKey + fmt::Debug, V: fmt::Debug> fmt::Debug for OrdTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<'a, K: TableKey, V> IntoIterator for &'a OrdTable<K, V> {
    type IntoIter = Traversal<'a, K, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: TableKey, V> Extend<(K, V)> for OrdTable<K, V> {
    /// Null keys and keys that are already present are skipped
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            let _ = self.insert(k, v);
        }
    }
}

impl<K: TableKey, V> FromIterator<(K, V)> for OrdTable<K, V> {
    /// The first of several equal keys wins, and null keys are skipped
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = OrdTable::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> OrdTable<u32, char> {
        let mut t = OrdTable::new();
        for (k, v) in [(5, 'A'), (3, 'B'), (7, 'C'), (2, 'D')] {
            t.insert(k, v).unwrap();
        }
        OrdTable::_check_invariants(&t).unwrap();
        t
    }

    #[test]
    fn checker_rejects_left_cycle() {
        let mut t = small();
        let p_root = t.root.unwrap();
        let p_leaf = t.a.ptrs().find(|p| t.a[*p].k == 2).unwrap();
        // the leftmost leaf loops back to the root
        t.a[p_leaf].p_left = Some(p_root);
        assert!(OrdTable::_check_invariants(&t).is_err());
        t.a[p_root].p_back = Some(p_leaf);
        assert!(OrdTable::_check_invariants(&t).is_err());
    }

    #[test]
    fn checker_rejects_bad_sizes_and_order() {
        let mut t = small();
        let p_root = t.root.unwrap();
        t.a[p_root].size += 1;
        assert!(OrdTable::_check_invariants(&t).is_err());
        t.a[p_root].size -= 1;
        let p_leaf = t.a.ptrs().find(|p| t.a[*p].k == 2).unwrap();
        t.a[p_leaf].k = 9;
        assert_eq!(
            OrdTable::_check_invariants(&t),
            Err("incorrect ordering")
        );
    }
}
