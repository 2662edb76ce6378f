use ord_table::{OrdTable, TableError, TableKey, TraversalOrder};
use testcrate::{scenario_table, std_table};

#[test]
fn empty_table() {
    let mut t: OrdTable<u32, char> = OrdTable::new();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert_eq!(t.find(&1), Err(TableError::EmptyRoot));
    assert_eq!(t.find_mut(&1), Err(TableError::EmptyRoot));
    assert_eq!(t.remove(&1), Err(TableError::EmptyRoot));
    assert_eq!(t.subtree_size(&1), None);
    assert!(!t.contains(&1));
    assert_eq!(t.min(), None);
    assert_eq!(t.max(), None);
    assert_eq!(t.height(), 0);
    assert!(t.root_node().is_none());
    assert_eq!(t.dump(TraversalOrder::BreadthFirst), "");
    assert_eq!(t.dump(TraversalOrder::DepthFirst), "");
    // no-op
    t.clear();
    assert!(t.is_empty());
    OrdTable::_check_invariants(&t).unwrap();
}

#[test]
fn null_keys() {
    let mut t: OrdTable<String, u32> = OrdTable::new();
    assert_eq!(t.insert(String::new(), 0), Err(TableError::NullKey));
    assert!(t.is_empty());
    // null key checks come before the empty check
    assert_eq!(t.find(&String::new()), Err(TableError::NullKey));
    t.insert("a".to_owned(), 1).unwrap();
    assert_eq!(t.find(&String::new()), Err(TableError::NullKey));
    assert_eq!(t.remove(&String::new()), Err(TableError::NullKey));
    assert_eq!(t.subtree_size(&String::new()), None);
    assert!(!t.contains(&String::new()));

    let mut t: OrdTable<Option<u8>, ()> = OrdTable::new();
    assert_eq!(t.insert(None, ()), Err(TableError::NullKey));
    assert_eq!(t.insert(Some(0), ()), Ok(()));
    assert_eq!(t.find(&None), Err(TableError::NullKey));
}

#[test]
fn never_null_keys() {
    assert!(!().is_null());
    assert!(!false.is_null());
    assert!(!0u8.is_null());
    assert!(!'\0'.is_null());

    let mut t: OrdTable<(), u8> = OrdTable::new();
    assert_eq!(t.insert((), 1), Ok(()));
    assert_eq!(t.insert((), 2), Err(TableError::AlreadyExists));
    assert_eq!(t.find(&()), Ok(&1));

    let mut t: OrdTable<bool, u8> = OrdTable::new();
    t.insert(true, 1).unwrap();
    t.insert(false, 0).unwrap();
    assert_eq!(t.keys().copied().collect::<Vec<_>>(), vec![false, true]);
    assert_eq!(t.remove(&true), Ok(1));
    OrdTable::_check_invariants(&t).unwrap();
}

#[test]
fn insert_then_find() {
    let t = scenario_table();
    assert_eq!(t.len(), 7);
    for (k, v) in [5, 3, 7, 2, 4, 6, 8].into_iter().zip('A'..='G') {
        assert_eq!(t.find(&k), Ok(&v));
        assert_eq!(t.find_key_value(&k), Ok((&k, &v)));
        assert!(t.contains(&k));
    }
    assert_eq!(t.find(&0), Err(TableError::NotFound));
    assert_eq!(t.find(&9), Err(TableError::NotFound));
    assert_eq!(t.min(), Some((&2, &'D')));
    assert_eq!(t.max(), Some((&8, &'G')));
    assert_eq!(t.height(), 3);
}

#[test]
fn duplicate_insert() {
    let mut t = scenario_table();
    let before = t.dump(TraversalOrder::BreadthFirst);
    assert_eq!(t.insert(4, 'X'), Err(TableError::AlreadyExists));
    assert_eq!(t.insert(5, 'X'), Err(TableError::AlreadyExists));
    assert_eq!(t.find(&4), Ok(&'E'));
    assert_eq!(t.len(), 7);
    assert_eq!(t.dump(TraversalOrder::BreadthFirst), before);
    assert_eq!(t.subtree_size(&5), Some(7));
    OrdTable::_check_invariants(&t).unwrap();
}

#[test]
fn find_mut_changes_value() {
    let mut t = scenario_table();
    *t.find_mut(&6).unwrap() = 'Z';
    assert_eq!(t.find(&6), Ok(&'Z'));
    assert_eq!(t.find_mut(&1), Err(TableError::NotFound));
}

#[test]
fn subtree_sizes() {
    let t = scenario_table();
    assert_eq!(t.subtree_size(&5), Some(7));
    assert_eq!(t.subtree_size(&3), Some(3));
    assert_eq!(t.subtree_size(&7), Some(3));
    for leaf in [2, 4, 6, 8] {
        assert_eq!(t.subtree_size(&leaf), Some(1));
    }
    assert_eq!(t.subtree_size(&1), None);

    // degenerate insertion order
    let t: OrdTable<u32, ()> = (0..10).map(|k| (k, ())).collect();
    assert_eq!(t.height(), 10);
    for k in 0..10 {
        assert_eq!(t.subtree_size(&k), Some(10 - k as usize));
    }
}

#[test]
fn remove_single_root() {
    let mut t = OrdTable::new();
    t.insert(5, 'A').unwrap();
    assert_eq!(t.remove(&5), Ok('A'));
    assert!(t.is_empty());
    assert_eq!(t.find(&5), Err(TableError::EmptyRoot));
    assert_eq!(t.remove(&5), Err(TableError::EmptyRoot));
    OrdTable::_check_invariants(&t).unwrap();
}

#[test]
fn remove_root_with_two_children() {
    let mut t = OrdTable::new();
    t.insert(5, 'A').unwrap();
    t.insert(3, 'B').unwrap();
    t.insert(7, 'C').unwrap();
    assert_eq!(t.remove(&5), Ok('A'));
    OrdTable::_check_invariants(&t).unwrap();
    assert_eq!(t.find(&3), Ok(&'B'));
    assert_eq!(t.find(&7), Ok(&'C'));
    // the successor moved into the root
    let root = t.root_node().unwrap();
    assert_eq!(root.key(), &7);
    assert_eq!(root.value(), &'C');
    assert_eq!(root.left().unwrap().key(), &3);
    assert!(root.right().is_none());
    assert_eq!(t.subtree_size(&7), Some(2));
    // the freed slot is reused by the next insert
    t.insert(9, 'D').unwrap();
    OrdTable::_check_invariants(&t).unwrap();
    assert_eq!(t.len(), 3);
    assert_eq!(t.subtree_size(&7), Some(3));
}

#[test]
fn remove_cases() {
    // leaf
    let mut t = scenario_table();
    assert_eq!(t.remove(&2), Ok('D'));
    OrdTable::_check_invariants(&t).unwrap();
    assert_eq!(t.subtree_size(&3), Some(2));
    assert_eq!(t.subtree_size(&5), Some(6));

    // one child
    assert_eq!(t.remove(&3), Ok('B'));
    OrdTable::_check_invariants(&t).unwrap();
    assert_eq!(
        t.dump(TraversalOrder::BreadthFirst),
        "5 (root)\n4 (left of 5)\n7 (right of 5)\n6 (left of 7)\n8 (right of 7)"
    );

    // two children where the successor is deeper than the right child
    let mut t = scenario_table();
    t.insert(9, 'H').unwrap();
    t.insert(1, 'I').unwrap();
    assert_eq!(t.remove(&3), Ok('B'));
    OrdTable::_check_invariants(&t).unwrap();
    assert_eq!(
        t.dump(TraversalOrder::BreadthFirst),
        "5 (root)\n4 (left of 5)\n7 (right of 5)\n2 (left of 4)\n6 (left of 7)\n8 (right of \
         7)\n1 (left of 2)\n9 (right of 8)"
    );
    assert_eq!(t.remove(&5), Ok('A'));
    OrdTable::_check_invariants(&t).unwrap();
    // 6 was the leftmost node of the right subtree
    assert_eq!(t.root_node().unwrap().key(), &6);
    assert_eq!(t.find(&6), Ok(&'F'));
    assert_eq!(t.subtree_size(&7), Some(3));
    assert_eq!(t.len(), 7);

    assert_eq!(t.remove(&5), Err(TableError::NotFound));
}

#[test]
fn remove_everything() {
    let mut t = std_table();
    let keys: Vec<u64> = t.keys().copied().collect();
    for (i, k) in keys.iter().enumerate() {
        assert_eq!(t.remove(k), Ok(k * 100));
        OrdTable::_check_invariants(&t).unwrap();
        assert_eq!(t.len(), keys.len() - i - 1);
    }
    assert!(t.is_empty());
    // the table is usable after emptying
    t.insert(1, 1).unwrap();
    assert_eq!(t.find(&1), Ok(&1));
}

#[test]
fn clear() {
    let mut t = std_table();
    t.clear();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert_eq!(t.find(&50), Err(TableError::EmptyRoot));
    OrdTable::_check_invariants(&t).unwrap();
    t.insert(3, 3).unwrap();
    assert_eq!(t.len(), 1);
}

#[test]
fn dump() {
    let t = scenario_table();
    assert_eq!(
        t.dump(TraversalOrder::BreadthFirst),
        "5 (root)
3 (left of 5)
7 (right of 5)
2 (left of 3)
4 (right of 3)
6 (left of 7)
8 (right of 7)"
    );
    assert_eq!(
        t.dump(TraversalOrder::DepthFirst),
        "2 (left of 3)
3 (left of 5)
4 (right of 3)
5 (root)
6 (left of 7)
7 (right of 5)
8 (right of 7)"
    );
    let mut single = OrdTable::new();
    single.insert("x", 0).unwrap();
    assert_eq!(single.dump(TraversalOrder::DepthFirst), "x (root)");
}

#[test]
fn traits() {
    let t = std_table();
    let u = t.clone();
    OrdTable::_check_invariants(&u).unwrap();
    assert_eq!(
        t.dump(TraversalOrder::BreadthFirst),
        u.dump(TraversalOrder::BreadthFirst)
    );

    let t: OrdTable<u8, &str> = [(2, "b"), (1, "a"), (2, "c"), (3, "d")]
        .into_iter()
        .collect();
    // first of the equal keys wins
    assert_eq!(t.find(&2), Ok(&"b"));
    assert_eq!(format!("{t:?}"), r#"{1: "a", 2: "b", 3: "d"}"#);

    let mut t: OrdTable<&str, u8> = OrdTable::default();
    t.extend([("", 0), ("a", 1), ("a", 2)]);
    assert_eq!(t.len(), 1);
    assert_eq!(t.find(&"a"), Ok(&1));

    let t: OrdTable<u8, u8> = OrdTable::new();
    assert_eq!(format!("{t:?}"), "{}");
}
