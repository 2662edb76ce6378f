//! insures that the crate is `no_std` and also has some `cargo-show-asm`
//! targets to check
//!
//! `cargo asm --target=riscv32i-unknown-none-elf -p no_std_test`

#![no_std]
#![allow(clippy::all)]

use ord_table::{ptr_struct, Arena, OrdTable, Stack, TableError, TraversalOrder};

ptr_struct!(P0());
ptr_struct!(P1);

pub fn asm_arena_get(a: &Arena<P0, u64>, inx: P0) -> u64 {
    *a.get(inx).unwrap()
}

pub fn asm_arena_get_gen(a: &Arena<P1, u64>, inx: P1) -> u64 {
    *a.get(inx).unwrap()
}

pub fn asm_table_find(t: &OrdTable<u64, u64>, k: u64) -> Result<u64, TableError> {
    t.find(&k).copied()
}

pub fn asm_table_insert(t: &mut OrdTable<u64, u64>, k: u64, v: u64) -> Result<(), TableError> {
    t.insert(k, v)
}

pub fn asm_table_remove(t: &mut OrdTable<u64, u64>, k: u64) -> Result<u64, TableError> {
    t.remove(&k)
}

pub fn asm_subtree_size(t: &OrdTable<u64, u64>, k: u64) -> Option<usize> {
    t.subtree_size(&k)
}

pub fn asm_in_order_sum(t: &OrdTable<u64, u64>) -> u64 {
    t.make_iterator(TraversalOrder::DepthFirst).sum()
}

pub fn asm_stack(s: &mut Stack<u64>, x: u64) -> u64 {
    s.push(x);
    s.pop().unwrap_or(0)
}
