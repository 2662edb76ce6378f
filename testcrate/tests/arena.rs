use std::collections::HashMap;

use ord_table::{Arena, Ptr};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};
use testcrate::{P0, P1};

macro_rules! next_inx {
    ($rng:ident, $len:ident) => {
        $rng.next_u32() as usize % $len
    };
}

#[test]
fn fuzz_arena() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);

    // unique id for checking that the correct elements are returned
    let mut counter = 0u64;
    let mut new_t = || {
        counter += 1;
        counter
    };

    let mut a: Arena<P0, u64> = Arena::new();
    // map of all `T` and their pointers contained in the arena
    let mut b: HashMap<u64, P0> = HashMap::new();
    // for random indexing
    let mut list: Vec<u64> = vec![];
    let mut gen = 2;

    // get an invalid `Ptr` that is not `Ptr::invalid()`
    let invalid = a.insert(0);
    a.remove(invalid).unwrap();
    gen += 1;
    a.clear_and_shrink();
    gen += 1;

    let mut iters999 = 0;
    let mut max_len = 0;
    for _ in 0..200_000 {
        assert_eq!(b.len(), list.len());
        assert_eq!(a.len(), b.len());
        assert_eq!(a.gen().get(), gen);
        assert_eq!(a.is_empty(), b.is_empty());
        Arena::_check_invariants(&a).unwrap();
        max_len = max_len.max(a.len());
        let len = list.len();
        match rng.next_u32() % 1000 {
            0..=399 => {
                let t = new_t();
                let ptr = a.insert(t);
                b.insert(t, ptr);
                list.push(t);
            }
            400..=699 => {
                if len != 0 {
                    let t = list.swap_remove(next_inx!(rng, len));
                    let ptr = b.remove(&t).unwrap();
                    assert_eq!(a.remove(ptr), Some(t));
                    gen += 1;
                    // stays invalid even if the slot gets reused
                    assert!(a.remove(ptr).is_none());
                    assert!(!a.contains(ptr));
                } else {
                    assert!(a.remove(invalid).is_none());
                }
            }
            700..=899 => {
                if len != 0 {
                    let t = list[next_inx!(rng, len)];
                    let ptr = b[&t];
                    assert!(a.contains(ptr));
                    assert_eq!(a.get(ptr), Some(&t));
                    assert_eq!(a[ptr], t);
                    *a.get_mut(ptr).unwrap() += 0;
                }
                assert!(a.get(invalid).is_none());
                assert!(a.get(P0::invalid()).is_none());
            }
            900..=989 => {
                let mut n = 0;
                for (p, t) in &a {
                    assert_eq!(b[t], p);
                    n += 1;
                }
                assert_eq!(n, a.len());
                assert_eq!(a.ptrs().count(), a.len());
            }
            990..=998 => {
                if (rng.next_u32() % 4) == 0 {
                    let cap = a.capacity();
                    a.clear();
                    gen += 1;
                    assert_eq!(a.capacity(), cap);
                    for p in b.values() {
                        assert!(!a.contains(*p));
                    }
                    b.clear();
                    list.clear();
                }
            }
            999 => {
                iters999 += 1;
            }
            _ => unreachable!(),
        }
    }
    assert!(iters999 > 0);
    assert!(max_len > 0);
}

#[test]
fn freelist_reuse() {
    let mut a: Arena<P1, char> = Arena::new();
    let p0 = a.insert('a');
    let p1 = a.insert('b');
    let p2 = a.insert('c');
    assert_eq!(a.capacity(), 3);
    assert_eq!(a.remove(p1), Some('b'));
    assert_eq!(a.remove(p0), Some('a'));
    Arena::_check_invariants(&a).unwrap();
    // most recently freed first
    let q0 = a.insert('d');
    let q1 = a.insert('e');
    assert_eq!(q0.inx(), p0.inx());
    assert_eq!(q1.inx(), p1.inx());
    assert_eq!(a.capacity(), 3);
    // without generations the old pointers alias the new entries
    assert_eq!(a[p0], 'd');
    assert_eq!(a[p2], 'c');
    Arena::_check_invariants(&a).unwrap();
    assert_eq!(format!("{a:?}"), "{P1[0]: 'd', P1[1]: 'e', P1[2]: 'c'}");

    let c = a.clone();
    a.clear();
    Arena::_check_invariants(&a).unwrap();
    assert!(a.get(p2).is_none());
    assert_eq!(c[p2], 'c');
    a.clear_and_shrink();
    assert_eq!(a.capacity(), 0);
    Arena::_check_invariants(&a).unwrap();
}

#[test]
#[should_panic]
fn index_invalidated() {
    let mut a: Arena<P0, u8> = Arena::new();
    let p = a.insert(1);
    let _ = a.remove(p);
    let _ = a[p];
}
