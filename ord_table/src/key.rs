use alloc::{boxed::Box, string::String};

/// Keys of an [crate::OrdTable]. Besides a total order, a key type can name
/// some of its values as null. Null keys are rejected by every table
/// operation with [crate::TableError::NullKey], or give an absent result for
/// the operations that never fail.
///
/// ```
/// use ord_table::{OrdTable, TableError, TableKey};
///
/// assert!("".is_null());
/// assert!(!"Praha".is_null());
/// assert!(None::<u8>.is_null());
///
/// let mut t: OrdTable<String, u32> = OrdTable::new();
/// assert_eq!(t.insert(String::new(), 1), Err(TableError::NullKey));
/// ```
pub trait TableKey: Ord {
    /// Returns if this key is the null key. No key is null by default.
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_never_null {
    ($($t:ty),*) => {
        $(
            impl TableKey for $t {}
        )*
    };
}

impl_never_null!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, ()
);

// empty strings stand in for missing names

impl TableKey for str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl TableKey for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl TableKey for Box<str> {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: TableKey> TableKey for Option<T> {
    fn is_null(&self) -> bool {
        match self {
            Some(t) => t.is_null(),
            None => true,
        }
    }
}

impl<A: TableKey, B: TableKey> TableKey for (A, B) {
    /// A pair is null if either half is
    fn is_null(&self) -> bool {
        self.0.is_null() || self.1.is_null()
    }
}
