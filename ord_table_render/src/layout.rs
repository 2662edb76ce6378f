use std::{collections::HashMap, fmt::Display};

use ord_table::{iterators::Relation, OrdTable, PNode, TableKey};

use crate::*;

/// Render nodes placed on the image
pub(crate) struct TreeLayout {
    /// In-order, so `nodes[i]` is in the `i`th column
    pub nodes: Vec<RenderNode>,
    /// Depth of each node, the root is at 0
    pub depths: Vec<usize>,
    /// (parent index, child index, side of the child)
    pub edges: Vec<(usize, usize, Relation)>,
    pub tot_wx: i32,
    pub tot_wy: i32,
}

impl TreeLayout {
    pub fn new<K: TableKey + Display, V>(table: &OrdTable<K, V>) -> Self {
        let mut nodes = vec![];
        let mut depths = vec![];
        let mut columns: HashMap<PNode, usize> = HashMap::new();
        for node in table.iter().nodes() {
            let mut depth = 0;
            let mut ancestor = node.parent();
            while let Some(parent) = ancestor {
                depth += 1;
                ancestor = parent.parent();
            }
            columns.insert(node.ptr(), nodes.len());
            nodes.push(RenderNode::new(
                &node.key().to_string(),
                &format!("size {}", node.subtree_size()),
            ));
            depths.push(depth);
        }
        let mut edges = vec![];
        for node in table.iter().nodes() {
            if let Some(parent) = node.parent() {
                edges.push((
                    columns[&parent.ptr()],
                    columns[&node.ptr()],
                    node.relation(),
                ));
            }
        }

        let row_wy = nodes.iter().map(|n| n.wy).max().unwrap_or(0) + NODE_PAD;
        let mut x_progression = 0;
        for (node, depth) in nodes.iter_mut().zip(depths.iter()) {
            let y = (*depth as i32) * row_wy;
            node.translate((x_progression, y));
            x_progression += node.wx + PAD;
        }
        let tot_wx = (x_progression - PAD).max(0);
        let tot_wy = match depths.iter().max() {
            Some(max_depth) => ((*max_depth as i32) + 1) * row_wy - NODE_PAD,
            None => 0,
        };
        tracing::debug!(nodes = nodes.len(), tot_wx, tot_wy, "laid out tree");
        Self {
            nodes,
            depths,
            edges,
            tot_wx,
            tot_wy,
        }
    }
}
