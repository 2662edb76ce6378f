use ord_table::{
    iterators::{NodeRef, Relation},
    OrdTable, TableError, TraversalOrder,
};
use testcrate::{scenario_table, std_table};

#[test]
fn scenario_orders() {
    let t = scenario_table();
    let dfs: String = t.make_iterator(TraversalOrder::DepthFirst).collect();
    assert_eq!(dfs, "DBEAFCG");
    let bfs: String = t.make_iterator(TraversalOrder::BreadthFirst).collect();
    assert_eq!(bfs, "ABCDEFG");
    // `iter` and `&OrdTable` are in-order
    assert_eq!(t.iter().collect::<String>(), "DBEAFCG");
    assert_eq!((&t).into_iter().collect::<String>(), "DBEAFCG");
    assert_eq!(t.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn end_of_iteration() {
    let t = scenario_table();
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let mut trav = t.make_iterator(order);
        assert_eq!(trav.order(), order);
        for _ in 0..7 {
            assert!(trav.has_next());
            assert!(trav.try_next().is_ok());
        }
        assert!(!trav.has_next());
        assert_eq!(trav.try_next(), Err(TableError::EndOfIteration));
        assert!(trav.try_next_node().is_err());
        // fused
        assert_eq!(trav.next(), None);
        assert_eq!(trav.next(), None);
    }
}

#[test]
fn empty_traversal() {
    let t: OrdTable<u32, char> = OrdTable::new();
    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let mut trav = t.make_iterator(order);
        assert!(!trav.has_next());
        assert_eq!(trav.try_next(), Err(TableError::EndOfIteration));
        assert!(trav.next_entry().is_none());
    }
    assert_eq!(t.entries().count(), 0);
}

#[test]
fn fresh_traversals() {
    let t = scenario_table();
    let mut first = t.make_iterator(TraversalOrder::DepthFirst);
    assert_eq!(first.try_next(), Ok(&'D'));
    assert_eq!(first.try_next(), Ok(&'B'));
    // a second traversal is independent of the first
    let mut second = t.make_iterator(TraversalOrder::DepthFirst);
    assert_eq!(second.try_next(), Ok(&'D'));
    assert_eq!(first.try_next(), Ok(&'E'));
    assert_eq!(first.count(), 4);
    assert_eq!(second.count(), 6);
}

#[test]
fn entries_and_nodes() {
    let t = scenario_table();
    let bfs: Vec<(u32, char)> = t
        .make_iterator(TraversalOrder::BreadthFirst)
        .entries()
        .map(|(k, v)| (*k, *v))
        .collect();
    assert_eq!(bfs, vec![
        (5, 'A'),
        (3, 'B'),
        (7, 'C'),
        (2, 'D'),
        (4, 'E'),
        (6, 'F'),
        (8, 'G')
    ]);

    let nodes: Vec<NodeRef<u32, char>> = t
        .make_iterator(TraversalOrder::BreadthFirst)
        .nodes()
        .collect();
    assert_eq!(nodes[0].relation(), Relation::Root);
    assert!(nodes[0].parent().is_none());
    assert_eq!(nodes[0].subtree_size(), 7);
    assert_eq!(nodes[1].relation(), Relation::Left);
    assert_eq!(nodes[2].relation(), Relation::Right);
    assert_eq!(nodes[4].parent().unwrap().key(), &3);
    assert_eq!(nodes[4].relation(), Relation::Right);
    assert_eq!(nodes[5].relation(), Relation::Left);
    for node in &nodes[3..] {
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.subtree_size(), 1);
    }
    // distinct pointers
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[(i + 1)..] {
            assert_ne!(a.ptr(), b.ptr());
        }
    }
}

#[test]
fn cursor_walk() {
    let t = std_table();
    // every node is the parent of its children, and sizes add up
    let mut count = 0;
    for node in t.make_iterator(TraversalOrder::DepthFirst).nodes() {
        count += 1;
        let mut size = 1;
        if let Some(left) = node.left() {
            assert!(left.key() < node.key());
            assert_eq!(left.parent().unwrap().ptr(), node.ptr());
            assert_eq!(left.relation(), Relation::Left);
            size += left.subtree_size();
        }
        if let Some(right) = node.right() {
            assert!(right.key() > node.key());
            assert_eq!(right.parent().unwrap().ptr(), node.ptr());
            assert_eq!(right.relation(), Relation::Right);
            size += right.subtree_size();
        }
        assert_eq!(node.subtree_size(), size);
        assert_eq!(t.subtree_size(node.key()), Some(size));
        assert_eq!(node.value(), &(node.key() * 100));
    }
    assert_eq!(count, t.len());
}

#[test]
fn bfs_visits_by_level() {
    let t = std_table();
    let mut depth_of = vec![];
    for node in t.make_iterator(TraversalOrder::BreadthFirst).nodes() {
        let mut depth = 0;
        let mut p = node;
        while let Some(parent) = p.parent() {
            depth += 1;
            p = parent;
        }
        depth_of.push(depth);
    }
    assert_eq!(depth_of.len(), t.len());
    assert!(depth_of.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(depth_of.last().copied(), Some(t.height() - 1));
}

#[test]
fn size_hint() {
    let t = scenario_table();
    let trav = t.make_iterator(TraversalOrder::DepthFirst);
    // the left spine is pending
    assert_eq!(trav.size_hint(), (3, Some(7)));
    let trav = t.make_iterator(TraversalOrder::BreadthFirst);
    assert_eq!(trav.size_hint(), (1, Some(7)));
}
