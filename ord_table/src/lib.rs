//! An ordered table stored as a parent-linked binary search tree, together
//! with the arena and sequential containers it is built from.
//!
//! Nodes live in an [Arena] and refer to each other through typed pointers,
//! so the tree can have back pointers to parents without any reference
//! counting or `unsafe`. Every node also tracks the size of its subtree.
//!
//! ```
//! use ord_table::{OrdTable, TableError, TraversalOrder};
//!
//! let mut t: OrdTable<String, u32> = OrdTable::new();
//! t.insert("Brno".to_owned(), 379_466).unwrap();
//! t.insert("Aš".to_owned(), 13_000).unwrap();
//! t.insert("Zlín".to_owned(), 74_255).unwrap();
//!
//! assert_eq!(t.find(&"Brno".to_owned()), Ok(&379_466));
//! assert_eq!(t.find(&String::new()), Err(TableError::NullKey));
//! assert_eq!(t.subtree_size(&"Brno".to_owned()), Some(3));
//! assert_eq!(
//!     t.dump(TraversalOrder::BreadthFirst),
//!     "Brno (root)\nAš (left of Brno)\nZlín (right of Brno)"
//! );
//! ```

#![no_std]
// `Ptr` is implemented by user-controlled macro output, so there is no unsafe
// code at all
#![deny(unsafe_code)]

extern crate alloc;

mod arena;
mod chain;
mod error;
mod key;
mod ptr;
mod structures;
mod table;
mod table_iterators;
pub mod traits;

pub use arena::Arena;
pub use chain::{Chain, Link, PLink};
pub use error::{StructureError, TableError};
pub use key::TableKey;
pub use ptr::Ptr;
pub use structures::{Queue, Stack};
pub use table::{OrdTable, PNode};
pub use table_iterators::TraversalOrder;

/// Iterators and cursors
pub mod iterators {
    pub use crate::{
        arena::Iter as ArenaIter,
        chain::Iter as ChainIter,
        table_iterators::{Entries, NodeRef, Nodes, Relation, Traversal},
    };
}

/// Less commonly used items
pub mod utils {
    pub use crate::ptr::PtrGen;
}
