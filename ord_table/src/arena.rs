use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    fmt, mem,
    ops::{Index, IndexMut},
};

use crate::{utils::PtrGen, Ptr};

use Slot::*;

#[derive(Clone)]
enum Slot<P: Ptr, T> {
    /// Index of the next vacant slot, or of itself at the end of the freelist
    Vacant(usize),
    Occupied(P::Gen, T),
}

/// A slot arena storing `T`s that are pointed to by `P`s. Removed slots are
/// kept on an internal freelist and reused by later insertions. When `P` has a
/// generation counter, pointers to removed entries never work again.
///
/// This is the storage underneath both `OrdTable` nodes and `Chain` links, it
/// is what lets a tree have parent back-references without any owning cycles.
///
/// ```
/// use ord_table::{ptr_struct, Arena};
///
/// ptr_struct!(P0);
///
/// let mut a: Arena<P0, String> = Arena::new();
/// let p_test = a.insert("test".to_owned());
/// let p_hello = a.insert("hello".to_owned());
/// assert_eq!(a[p_hello], "hello");
///
/// assert_eq!(a.remove(p_test).unwrap(), "test");
/// // invalidated
/// assert!(a.get(p_test).is_none());
///
/// // the slot is reused, but the old pointer stays invalid
/// let p_new = a.insert("new".to_owned());
/// assert_eq!(p_new.inx(), p_test.inx());
/// assert!(a.get(p_test).is_none());
/// # use ord_table::Ptr;
/// ```
pub struct Arena<P: Ptr, T> {
    /// # Invariants
    ///
    /// - The generation value starts at 2 in a new `Arena`, so that
    ///   `Ptr::invalid` never works
    /// - All `Vacant` slots are in a single linked list starting at
    ///   `freelist_root`, and the last one points to itself
    /// - If there are no free entries, `freelist_root` is `None`
    m: Vec<Slot<P, T>>,
    len: usize,
    freelist_root: Option<usize>,
    gen: P::Gen,
}

impl<P: Ptr, T> Arena<P, T> {
    /// Used by tests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        if this.gen < P::Gen::two() {
            return Err("bad generation")
        }
        let n_occupied = this
            .m
            .iter()
            .filter(|entry| matches!(entry, Occupied(..)))
            .count();
        let n_vacant = this.m.len() - n_occupied;
        if this.len != n_occupied {
            return Err("len != n_occupied")
        }
        let mut freelist_len = 0;
        if let Some(root) = this.freelist_root {
            let mut inx = root;
            loop {
                match this.m.get(inx) {
                    Some(Vacant(next)) => {
                        freelist_len += 1;
                        if *next == inx {
                            break
                        }
                        inx = *next;
                    }
                    _ => return Err("bad freelist node"),
                }
                if freelist_len > this.m.len() {
                    return Err("endless loop")
                }
            }
        }
        if freelist_len != n_vacant {
            return Err("freelist discontinuous")
        }
        Ok(())
    }

    /// Creates a new empty arena
    pub fn new() -> Self {
        Self {
            m: Vec::new(),
            len: 0,
            freelist_root: None,
            gen: PtrGen::two(),
        }
    }

    /// Returns the number of `T` in the arena
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, allocated or free
    pub fn capacity(&self) -> usize {
        self.m.len()
    }

    /// Returns the arena generation counter, which is the number of
    /// invalidation operations performed on this arena plus 2
    pub fn gen(&self) -> P::Gen {
        self.gen
    }

    fn inc_gen(&mut self) {
        self.gen = PtrGen::increment(self.gen);
    }

    /// Inserts `t` into the arena and returns a `Ptr` to it. Free slots are
    /// reused before the arena grows.
    pub fn insert(&mut self, t: T) -> P {
        if let Some(inx) = self.freelist_root {
            let next = match mem::replace(&mut self.m[inx], Occupied(self.gen, t)) {
                Vacant(next) => next,
                Occupied(..) => unreachable!("freelist root is occupied"),
            };
            // the end of the freelist points to itself
            self.freelist_root = (next != inx).then_some(next);
            self.len += 1;
            P::_from_raw(inx, self.gen)
        } else {
            let inx = self.m.len();
            self.m.push(Occupied(self.gen, t));
            self.len += 1;
            P::_from_raw(inx, self.gen)
        }
    }

    /// Returns if `p` is a valid `Ptr`
    pub fn contains(&self, p: P) -> bool {
        matches!(self.m.get(p.inx()), Some(Occupied(gen, _)) if *gen == p.gen())
    }

    /// Returns a reference to the `T` pointed to by `p`, or `None` if `p` is
    /// invalid
    #[must_use]
    pub fn get(&self, p: P) -> Option<&T> {
        match self.m.get(p.inx()) {
            Some(Occupied(gen, t)) if *gen == p.gen() => Some(t),
            _ => None,
        }
    }

    /// Returns a mutable reference to the `T` pointed to by `p`, or `None` if
    /// `p` is invalid
    #[must_use]
    pub fn get_mut(&mut self, p: P) -> Option<&mut T> {
        match self.m.get_mut(p.inx()) {
            Some(Occupied(gen, t)) if *gen == p.gen() => Some(t),
            _ => None,
        }
    }

    /// Removes the `T` pointed to by `p`, returns it, and invalidates old
    /// `Ptr`s to it. Does nothing and returns `None` if `p` is invalid.
    #[must_use]
    pub fn remove(&mut self, p: P) -> Option<T> {
        if !self.contains(p) {
            return None
        }
        let freelist_ptr = self.freelist_root.unwrap_or(p.inx());
        let old = mem::replace(&mut self.m[p.inx()], Vacant(freelist_ptr));
        self.freelist_root = Some(p.inx());
        self.len -= 1;
        self.inc_gen();
        match old {
            Occupied(_, t) => Some(t),
            Vacant(_) => unreachable!(),
        }
    }

    /// Drops all `T` and invalidates every pointer previously handed out.
    /// Capacity is kept for reuse.
    pub fn clear(&mut self) {
        let cap = self.m.len();
        self.m.clear();
        for i in 1..cap {
            self.m.push(Vacant(i));
        }
        if cap == 0 {
            self.freelist_root = None;
        } else {
            // the last freelist node points to itself
            self.m.push(Vacant(cap - 1));
            self.freelist_root = Some(0);
        }
        self.len = 0;
        self.inc_gen();
    }

    /// Performs an [Arena::clear] and also releases the capacity
    pub fn clear_and_shrink(&mut self) {
        self.m = Vec::new();
        self.freelist_root = None;
        self.len = 0;
        self.inc_gen();
    }

    /// Iteration over `(P, &T)` in slot order
    pub fn iter(&self) -> Iter<'_, P, T> {
        Iter {
            iter: self.m.iter().enumerate(),
        }
    }

    /// Iteration over the valid `P`s in slot order
    pub fn ptrs(&self) -> impl Iterator<Item = P> + '_ {
        self.iter().map(|(p, _)| p)
    }
}

/// An iterator over `(P, &T)` of an `Arena`
pub struct Iter<'a, P: Ptr, T> {
    iter: core::iter::Enumerate<core::slice::Iter<'a, Slot<P, T>>>,
}

impl<'a, P: Ptr, T> Iterator for Iter<'a, P, T> {
    type Item = (P, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (inx, entry) in self.iter.by_ref() {
            if let Occupied(gen, t) = entry {
                return Some((P::_from_raw(inx, *gen), t))
            }
        }
        None
    }
}

impl<'a, P: Ptr, T> IntoIterator for &'a Arena<P, T> {
    type IntoIter = Iter<'a, P, T>;
    type Item = (P, &'a T);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Ptr, T> Default for Arena<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ptr, T: Clone> Clone for Arena<P, T> {
    /// Pointers into `self` are valid for the same `T`s in the clone
    fn clone(&self) -> Self {
        Self {
            m: self.m.clone(),
            len: self.len,
            freelist_root: self.freelist_root,
            gen: self.gen,
        }
    }
}

impl<P: Ptr, T, B: Borrow<P>> Index<B> for Arena<P, T> {
    type Output = T;

    fn index(&self, inx: B) -> &T {
        let p: P = *inx.borrow();
        self.get(p).expect("indexed arena with invalidated `Ptr`")
    }
}

impl<P: Ptr, T, B: Borrow<P>> IndexMut<B> for Arena<P, T> {
    fn index_mut(&mut self, inx: B) -> &mut T {
        let p: P = *inx.borrow();
        self.get_mut(p)
            .expect("indexed arena with invalidated `Ptr`")
    }
}

impl<P: Ptr, T: fmt::Debug> fmt::Debug for Arena<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
