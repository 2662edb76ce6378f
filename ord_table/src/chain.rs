use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{ptr_struct, Arena};

ptr_struct!(PLink doc = "Pointer to a `Link` inside of a `Chain`");

/// A link in a `Chain` with a public `t: T` field and private interlinks to
/// the previous and next links. `Deref` and `DerefMut` give direct access to
/// the `T`.
pub struct Link<T> {
    prev_next: (Option<PLink>, Option<PLink>),
    pub t: T,
}

impl<T> Link<T> {
    /// Get a `Ptr` to the previous `Link`, `None` at the front
    pub fn prev(&self) -> Option<PLink> {
        self.prev_next.0
    }

    /// Get a `Ptr` to the next `Link`, `None` at the back
    pub fn next(&self) -> Option<PLink> {
        self.prev_next.1
    }
}

impl<T> Deref for Link<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.t
    }
}

impl<T> DerefMut for Link<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.t
    }
}

/// A doubly-linked list stored on an `Arena`, with `O(1)` pushes and pops at
/// both ends. This is the sequential container that `Stack` and `Queue` are
/// built on.
///
/// ```
/// use ord_table::Chain;
///
/// let mut c = Chain::new();
/// c.push_back(2);
/// c.push_back(3);
/// c.push_front(1);
/// assert_eq!(c.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// assert_eq!(c.pop_back(), Some(3));
/// assert_eq!(c.pop_front(), Some(1));
/// assert_eq!(c.front(), Some(&2));
/// assert_eq!(c.len(), 1);
/// ```
pub struct Chain<T> {
    a: Arena<PLink, Link<T>>,
    first: Option<PLink>,
    last: Option<PLink>,
}

impl<T> Chain<T> {
    /// Used by tests
    #[doc(hidden)]
    pub fn _check_invariants(this: &Self) -> Result<(), &'static str> {
        Arena::_check_invariants(&this.a)?;
        let (first, last) = match (this.first, this.last) {
            (None, None) => {
                if this.a.is_empty() {
                    return Ok(())
                } else {
                    return Err("empty ends with nonempty arena")
                }
            }
            (Some(first), Some(last)) => (first, last),
            _ => return Err("only one end is set"),
        };
        if this.a.get(first).ok_or("invalid first")?.prev().is_some() {
            return Err("first link has a prev")
        }
        if this.a.get(last).ok_or("invalid last")?.next().is_some() {
            return Err("last link has a next")
        }
        // walk forwards checking that every interlink has its mirror
        let mut count = 0;
        let mut p = first;
        loop {
            count += 1;
            if count > this.a.len() {
                return Err("cycle")
            }
            let link = this.a.get(p).ok_or("broken interlink")?;
            match link.next() {
                Some(next) => {
                    if this.a.get(next).ok_or("broken interlink")?.prev() != Some(p) {
                        return Err("interlink does not correspond")
                    }
                    p = next;
                }
                None => break,
            }
        }
        if p != last {
            return Err("last is not at the end")
        }
        if count != this.a.len() {
            return Err("links not in the chain")
        }
        Ok(())
    }

    /// Creates an empty `Chain`
    pub fn new() -> Self {
        Self {
            a: Arena::new(),
            first: None,
            last: None,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns if there are no elements
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Inserts `t` before the current front
    pub fn push_front(&mut self, t: T) {
        let p_new = self.a.insert(Link {
            prev_next: (None, self.first),
            t,
        });
        match self.first {
            Some(p_first) => self.a[p_first].prev_next.0 = Some(p_new),
            None => self.last = Some(p_new),
        }
        self.first = Some(p_new);
    }

    /// Inserts `t` after the current back
    pub fn push_back(&mut self, t: T) {
        let p_new = self.a.insert(Link {
            prev_next: (self.last, None),
            t,
        });
        match self.last {
            Some(p_last) => self.a[p_last].prev_next.1 = Some(p_new),
            None => self.first = Some(p_new),
        }
        self.last = Some(p_new);
    }

    /// Removes and returns the front element
    pub fn pop_front(&mut self) -> Option<T> {
        let link = self.a.remove(self.first?)?;
        self.first = link.next();
        match self.first {
            Some(p_first) => self.a[p_first].prev_next.0 = None,
            None => self.last = None,
        }
        Some(link.t)
    }

    /// Removes and returns the back element
    pub fn pop_back(&mut self) -> Option<T> {
        let link = self.a.remove(self.last?)?;
        self.last = link.prev();
        match self.last {
            Some(p_last) => self.a[p_last].prev_next.1 = None,
            None => self.first = None,
        }
        Some(link.t)
    }

    /// Returns a reference to the front element
    pub fn front(&self) -> Option<&T> {
        self.first.map(|p| &self.a[p].t)
    }

    /// Returns a reference to the back element
    pub fn back(&self) -> Option<&T> {
        self.last.map(|p| &self.a[p].t)
    }

    /// Drops every element. Arena capacity is kept for reuse.
    pub fn clear(&mut self) {
        self.a.clear();
        self.first = None;
        self.last = None;
    }

    /// Front to back iteration
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            p: self.first,
        }
    }
}

/// Front to back iterator over a `Chain`
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    p: Option<PLink>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.chain.a.get(self.p?)?;
        self.p = link.next();
        Some(&link.t)
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for t in iter {
            self.push_back(t);
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        chain.extend(iter);
        chain
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
