use alloc::{format, string::String, vec::Vec};
use core::fmt::Display;

use crate::{iterators::Relation, OrdTable, TableKey, TraversalOrder};

impl<K: TableKey + Display, V> OrdTable<K, V> {
    /// Describes the tree shape, one line per node in the given traversal
    /// order. Each line is the key followed by its position relative to its
    /// parent:
    ///
    /// ```
    /// use ord_table::{OrdTable, TraversalOrder};
    ///
    /// let t: OrdTable<u32, ()> = [(5, ()), (3, ()), (8, ())].into_iter().collect();
    /// assert_eq!(
    ///     t.dump(TraversalOrder::BreadthFirst),
    ///     "5 (root)\n3 (left of 5)\n8 (right of 5)"
    /// );
    /// assert_eq!(
    ///     t.dump(TraversalOrder::DepthFirst),
    ///     "3 (left of 5)\n5 (root)\n8 (right of 5)"
    /// );
    /// ```
    ///
    /// An empty table gives an empty string.
    pub fn dump(&self, order: TraversalOrder) -> String {
        let mut lines = Vec::with_capacity(self.len());
        let mut traversal = self.make_iterator(order);
        while let Some(node) = traversal.next_node() {
            let line = match (node.relation(), node.parent()) {
                (Relation::Left, Some(parent)) => {
                    format!("{} (left of {})", node.key(), parent.key())
                }
                (Relation::Right, Some(parent)) => {
                    format!("{} (right of {})", node.key(), parent.key())
                }
                _ => format!("{} (root)", node.key()),
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}
