//! Traversals and cursors for `OrdTable`

use core::iter::FusedIterator;

use crate::{table::PNode, OrdTable, Queue, Stack, TableError, TableKey};

/// The visiting order of a [Traversal]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Level by level from the root, left to right within a level
    BreadthFirst,
    /// In-order, which visits entries in ascending key order
    DepthFirst,
}

/// The position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Root,
    Left,
    Right,
}

/// A read-only cursor at a node of an `OrdTable`
pub struct NodeRef<'a, K: TableKey, V> {
    table: &'a OrdTable<K, V>,
    p: PNode,
}

impl<K: TableKey, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: TableKey, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K: TableKey, V> NodeRef<'a, K, V> {
    pub(crate) fn new(table: &'a OrdTable<K, V>, p: PNode) -> Self {
        Self { table, p }
    }

    fn get(&self, p: Option<PNode>) -> Option<Self> {
        p.map(|p| Self::new(self.table, p))
    }

    /// The arena pointer of this node. It stays valid until the node is
    /// removed, and is only useful for telling nodes apart.
    pub fn ptr(&self) -> PNode {
        self.p
    }

    pub fn key(&self) -> &'a K {
        &self.table.a[self.p].k
    }

    pub fn value(&self) -> &'a V {
        &self.table.a[self.p].v
    }

    pub fn left(&self) -> Option<Self> {
        self.get(self.table.a[self.p].p_left)
    }

    pub fn right(&self) -> Option<Self> {
        self.get(self.table.a[self.p].p_right)
    }

    pub fn parent(&self) -> Option<Self> {
        self.get(self.table.a[self.p].p_back)
    }

    /// Number of nodes in the subtree rooted at this node, including itself
    pub fn subtree_size(&self) -> usize {
        self.table.a[self.p].size
    }

    pub fn relation(&self) -> Relation {
        match self.table.a[self.p].p_back {
            None => Relation::Root,
            Some(p_back) => {
                if self.table.a[p_back].p_left == Some(self.p) {
                    Relation::Left
                } else {
                    Relation::Right
                }
            }
        }
    }
}

enum Frontier {
    BreadthFirst(Queue<PNode>),
    DepthFirst(Stack<PNode>),
}

/// A single pass traversal over the values of an `OrdTable`, made by
/// [OrdTable::make_iterator].
///
/// The traversal holds a shared borrow of its table, so the table cannot be
/// mutated until the traversal is dropped. There is no way to rewind, a new
/// traversal must be made instead.
///
/// ```
/// use ord_table::{OrdTable, TableError, TraversalOrder};
///
/// let t: OrdTable<u8, &str> = [(2, "b"), (1, "a")].into_iter().collect();
/// let mut trav = t.make_iterator(TraversalOrder::DepthFirst);
/// assert!(trav.has_next());
/// assert_eq!(trav.try_next(), Ok(&"a"));
/// assert_eq!(trav.try_next(), Ok(&"b"));
/// assert!(!trav.has_next());
/// assert_eq!(trav.try_next(), Err(TableError::EndOfIteration));
/// ```
pub struct Traversal<'a, K: TableKey, V> {
    table: &'a OrdTable<K, V>,
    frontier: Frontier,
}

impl<'a, K: TableKey, V> Traversal<'a, K, V> {
    pub(crate) fn new(table: &'a OrdTable<K, V>, order: TraversalOrder) -> Self {
        let frontier = match order {
            TraversalOrder::BreadthFirst => {
                let mut queue = Queue::new();
                if let Some(p_root) = table.root {
                    queue.push(p_root);
                }
                Frontier::BreadthFirst(queue)
            }
            TraversalOrder::DepthFirst => {
                let mut stack = Stack::new();
                push_left_spine(table, &mut stack, table.root);
                Frontier::DepthFirst(stack)
            }
        };
        Self { table, frontier }
    }

    pub fn order(&self) -> TraversalOrder {
        match self.frontier {
            Frontier::BreadthFirst(_) => TraversalOrder::BreadthFirst,
            Frontier::DepthFirst(_) => TraversalOrder::DepthFirst,
        }
    }

    /// Returns if there are nodes left to visit
    pub fn has_next(&self) -> bool {
        match &self.frontier {
            Frontier::BreadthFirst(queue) => !queue.is_empty(),
            Frontier::DepthFirst(stack) => !stack.is_empty(),
        }
    }

    /// Advances to the next node
    ///
    /// # Errors
    ///
    /// [TableError::EndOfIteration] if the traversal is exhausted
    pub fn try_next_node(&mut self) -> Result<NodeRef<'a, K, V>, TableError> {
        if !self.has_next() {
            return Err(TableError::EndOfIteration)
        }
        let table = self.table;
        let p = match &mut self.frontier {
            Frontier::BreadthFirst(queue) => {
                let p = queue.pop()?;
                let node = &table.a[p];
                for p_child in [node.p_left, node.p_right].into_iter().flatten() {
                    queue.push(p_child);
                }
                p
            }
            Frontier::DepthFirst(stack) => {
                let p = stack.pop()?;
                push_left_spine(table, stack, table.a[p].p_right);
                p
            }
        };
        Ok(NodeRef::new(table, p))
    }

    /// Advances to the next value
    ///
    /// # Errors
    ///
    /// [TableError::EndOfIteration] if the traversal is exhausted
    pub fn try_next(&mut self) -> Result<&'a V, TableError> {
        Ok(self.try_next_node()?.value())
    }

    pub fn next_node(&mut self) -> Option<NodeRef<'a, K, V>> {
        self.try_next_node().ok()
    }

    /// Advances to the next key-value pair
    pub fn next_entry(&mut self) -> Option<(&'a K, &'a V)> {
        self.next_node().map(|node| (node.key(), node.value()))
    }

    /// Converts into an iterator over key-value pairs
    pub fn entries(self) -> Entries<'a, K, V> {
        Entries { traversal: self }
    }

    /// Converts into an iterator over read-only node cursors
    pub fn nodes(self) -> Nodes<'a, K, V> {
        Nodes { traversal: self }
    }
}

fn push_left_spine<K: TableKey, V>(
    table: &OrdTable<K, V>,
    stack: &mut Stack<PNode>,
    mut p: Option<PNode>,
) {
    while let Some(p_) = p {
        stack.push(p_);
        p = table.a[p_].p_left;
    }
}

impl<'a, K: TableKey, V> Iterator for Traversal<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = match &self.frontier {
            Frontier::BreadthFirst(queue) => queue.len(),
            Frontier::DepthFirst(stack) => stack.len(),
        };
        (pending, Some(self.table.len()))
    }
}

impl<K: TableKey, V> FusedIterator for Traversal<'_, K, V> {}

/// An iterator over `(&K, &V)` in the order of its `Traversal`
pub struct Entries<'a, K: TableKey, V> {
    traversal: Traversal<'a, K, V>,
}

impl<'a, K: TableKey, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.next_entry()
    }
}

impl<K: TableKey, V> FusedIterator for Entries<'_, K, V> {}

/// An iterator over `NodeRef`s in the order of its `Traversal`
pub struct Nodes<'a, K: TableKey, V> {
    traversal: Traversal<'a, K, V>,
}

impl<'a, K: TableKey, V> Iterator for Nodes<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.traversal.next_node()
    }
}

impl<K: TableKey, V> FusedIterator for Nodes<'_, K, V> {}
