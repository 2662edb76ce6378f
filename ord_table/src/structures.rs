use core::fmt;

use crate::{iterators::ChainIter, Chain, StructureError};

/// A last-in first-out stack on top of a `Chain`. Used by depth first
/// traversals to hold the path of nodes still to be visited.
///
/// ```
/// use ord_table::{Stack, StructureError};
///
/// let mut s = Stack::new();
/// s.push('a');
/// s.push('b');
/// assert_eq!(s.peek(), Some(&'b'));
/// assert_eq!(s.pop(), Ok('b'));
/// assert_eq!(s.pop(), Ok('a'));
/// assert_eq!(s.pop(), Err(StructureError::EmptyStructure));
/// ```
pub struct Stack<T> {
    pub(crate) chain: Chain<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Puts `t` on top of the stack
    pub fn push(&mut self, t: T) {
        self.chain.push_front(t)
    }

    /// Takes the top element off of the stack
    pub fn pop(&mut self) -> Result<T, StructureError> {
        self.chain.pop_front().ok_or(StructureError::EmptyStructure)
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> ChainIter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain.iter()).finish()
    }
}

/// A first-in first-out queue on top of a `Chain`. Used by breadth first
/// traversals to hold the frontier of the current tree level.
///
/// ```
/// use ord_table::{Queue, StructureError};
///
/// let mut q = Queue::new();
/// q.push(1);
/// q.push(2);
/// assert_eq!(q.peek(), Some(&1));
/// assert_eq!(q.pop(), Ok(1));
/// assert_eq!(q.pop(), Ok(2));
/// assert!(q.is_empty());
/// assert_eq!(q.pop(), Err(StructureError::EmptyStructure));
/// ```
pub struct Queue<T> {
    pub(crate) chain: Chain<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Adds `t` to the back of the queue
    pub fn push(&mut self, t: T) {
        self.chain.push_back(t)
    }

    /// Takes the element at the front of the queue
    pub fn pop(&mut self) -> Result<T, StructureError> {
        self.chain.pop_front().ok_or(StructureError::EmptyStructure)
    }

    /// Returns the front element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.chain.front()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    /// Iterates from the front of the queue to the back
    pub fn iter(&self) -> ChainIter<'_, T> {
        self.chain.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain.iter()).finish()
    }
}
