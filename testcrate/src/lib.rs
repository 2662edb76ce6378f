use ord_table::{ptr_struct, OrdTable};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

ptr_struct!(P0);
ptr_struct!(P1());

/// Keys `5, 3, 7, 2, 4, 6, 8` with values `A` through `G` in insertion order,
/// which makes a perfect tree of height 3
pub fn scenario_table() -> OrdTable<u32, char> {
    let mut t = OrdTable::new();
    for (k, v) in [5, 3, 7, 2, 4, 6, 8].into_iter().zip('A'..='G') {
        t.insert(k, v).unwrap();
    }
    OrdTable::_check_invariants(&t).unwrap();
    t
}

/// A table with random shape and some removals behind it
pub fn std_table() -> OrdTable<u64, u64> {
    let mut t = OrdTable::new();
    for k in [50u64, 20, 80, 10, 30, 70, 90, 25, 35, 60, 75, 5, 95, 33] {
        t.insert(k, k * 100).unwrap();
    }
    t.remove(&20).unwrap();
    t.remove(&75).unwrap();
    t.remove(&5).unwrap();
    OrdTable::_check_invariants(&t).unwrap();
    t
}

/// An operation on a table, used by the benches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Inst {
    Insert(u64, u64),
    Remove(u64),
}

/// Makes instructions that grow a simulated set of keys from `sim` until it
/// has `fill` more entries, while `drain` entries are removed again, all in
/// random order. Returns the instructions and the final keys.
pub fn fuzz_fill_inst_bench(
    rng: &mut Xoshiro128StarStar,
    sim: &[u64],
    fill: u64,
    drain: u64,
) -> (Vec<Inst>, Vec<u64>) {
    let mut insts = vec![];
    let mut keys = sim.to_vec();
    let mut to_fill = fill;
    let mut to_drain = drain;
    while (to_fill > 0) || ((to_drain > 0) && !keys.is_empty()) {
        let insert = if to_fill == 0 {
            false
        } else if (to_drain == 0) || keys.is_empty() {
            true
        } else {
            (rng.next_u32() % 2) == 0
        };
        if insert {
            let k = rng.next_u64();
            if keys.contains(&k) {
                continue
            }
            keys.push(k);
            insts.push(Inst::Insert(k, rng.next_u64()));
            to_fill -= 1;
        } else {
            let inx = (rng.next_u64() % (keys.len() as u64)) as usize;
            insts.push(Inst::Remove(keys.swap_remove(inx)));
            to_drain -= 1;
        }
    }
    (insts, keys)
}
