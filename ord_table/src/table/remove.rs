use core::mem;

use crate::{OrdTable, TableError, TableKey};

impl<K: TableKey, V> OrdTable<K, V> {
    /// Removes the entry with key `k` and returns its value.
    ///
    /// # Errors
    ///
    /// The same as [OrdTable::find], and the table is unchanged on an error.
    pub fn remove(&mut self, k: &K) -> Result<V, TableError> {
        let p_n = self.find_node(k)?;
        let n = &self.a[p_n];
        // A node with two children keeps its place in the tree and takes the
        // entry of its in-order successor, which has no left child and is the
        // node that gets physically removed.
        //
        //       n                s
        //      / \              / \
        //    ...  r           ...  r
        //        / \     ->       / \
        //       s  ...           x  ...
        //        \
        //         x
        let p_x = match (n.p_left, n.p_right) {
            (Some(_), Some(p_right)) => {
                let mut p_s = p_right;
                while let Some(p_left) = self.a[p_s].p_left {
                    p_s = p_left;
                }
                tracing::trace!(?p_n, ?p_s, "removing node with two children");
                p_s
            }
            (None, None) => {
                tracing::trace!(?p_n, "removing leaf");
                p_n
            }
            _ => {
                tracing::trace!(?p_n, "removing node with one child");
                p_n
            }
        };
        let x = self.a.remove(p_x).unwrap();
        // splice the only child (if any) into the former slot of `x`
        let p_child = x.p_left.or(x.p_right);
        if let Some(p_child) = p_child {
            self.a[p_child].p_back = x.p_back;
        }
        match x.p_back {
            Some(p_back) => {
                let parent = &mut self.a[p_back];
                if parent.p_left == Some(p_x) {
                    parent.p_left = p_child;
                } else {
                    parent.p_right = p_child;
                }
            }
            None => self.root = p_child,
        }
        let mut p = x.p_back;
        while let Some(p_) = p {
            let node = &mut self.a[p_];
            node.size -= 1;
            p = node.p_back;
        }
        if p_x == p_n {
            Ok(x.v)
        } else {
            let n = &mut self.a[p_n];
            n.k = x.k;
            Ok(mem::replace(&mut n.v, x.v))
        }
    }
}
