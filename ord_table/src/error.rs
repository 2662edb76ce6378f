use thiserror::Error;

/// Failures of `OrdTable` operations and of its traversals
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableError {
    /// The key is the null key of its type (see [crate::TableKey::is_null])
    #[error("the key is null")]
    NullKey,
    /// The operation needs at least one entry but the table is empty
    #[error("the table is empty")]
    EmptyRoot,
    #[error("no entry has the key")]
    NotFound,
    /// Insertion of a key that is already present, the table is left
    /// unchanged
    #[error("an entry with the key already exists")]
    AlreadyExists,
    #[error("pop from an empty stack or queue")]
    EmptyStructure,
    /// `Traversal::try_next` was called after the traversal was exhausted
    #[error("the traversal has no more elements")]
    EndOfIteration,
}

/// Failure of the auxiliary `Stack` and `Queue`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureError {
    #[error("pop from an empty stack or queue")]
    EmptyStructure,
}

impl From<StructureError> for TableError {
    fn from(e: StructureError) -> Self {
        match e {
            StructureError::EmptyStructure => TableError::EmptyStructure,
        }
    }
}
