//! Serialization of tables and sequential containers
//!
//! An `OrdTable` serializes as a map of its entries in ascending key order.
//! Only the logical entries are kept, the shape of the tree is not.
//! Deserialization inserts the entries one by one in the order they appear, so
//! a table that was serialized from a sorted source comes back as a list
//! shaped tree. Duplicate and null keys are errors when deserializing.
//!
//! `Chain`, `Stack`, and `Queue` serialize as sequences from front to back
//! (top to bottom for a `Stack`), and deserialize into the same order.
//!
//! ```
//! // Example using the `ron` crate
//! use ord_table::{OrdTable, TraversalOrder};
//! use ron::{from_str, to_string};
//!
//! let mut t: OrdTable<u32, String> = OrdTable::new();
//! t.insert(20, "b".to_owned()).unwrap();
//! t.insert(10, "a".to_owned()).unwrap();
//! t.insert(30, "c".to_owned()).unwrap();
//!
//! let serialized = to_string(&t).unwrap();
//! assert_eq!(serialized, "{10:\"a\",20:\"b\",30:\"c\"}");
//!
//! let t: OrdTable<u32, String> = from_str(&serialized).unwrap();
//! assert_eq!(t.len(), 3);
//! // the first entry became the root of the new shape
//! assert_eq!(t.dump(TraversalOrder::BreadthFirst), "10 (root)\n20 (right of 10)\n30 (right of 20)");
//!
//! let res: Result<OrdTable<u32, String>, _> = from_str("{1:\"x\",1:\"y\"}");
//! assert!(res.is_err());
//! ```

use alloc::fmt;
use core::marker::PhantomData;

use serde::{
    de::{Error, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Chain, OrdTable, Queue, Stack, TableError, TableKey};

impl<K: TableKey + Serialize, V: Serialize> Serialize for OrdTable<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.entries() {
            s.serialize_entry(k, v)?;
        }
        s.end()
    }
}

struct OrdTableVisitor<K, V>(PhantomData<fn() -> (K, V)>);

impl<'de, K, V> Visitor<'de> for OrdTableVisitor<K, V>
where
    K: TableKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = OrdTable<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of unique non-null keys")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut table = OrdTable::new();
        while let Some((k, v)) = access.next_entry::<K, V>()? {
            match table.insert(k, v) {
                Ok(()) => (),
                Err(TableError::AlreadyExists) => {
                    return Err(Error::custom(
                        "when deserializing an `OrdTable`, encountered duplicate keys",
                    ))
                }
                Err(e) => return Err(Error::custom(e)),
            }
        }
        Ok(table)
    }
}

impl<'de, K, V> Deserialize<'de> for OrdTable<K, V>
where
    K: TableKey + Deserialize<'de>,
    V: Deserialize<'de>,
{
    /// Returns an error in case of duplicate or null keys
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrdTableVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Chain<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_seq(Some(self.len()))?;
        for t in self {
            s.serialize_element(t)?;
        }
        s.end()
    }
}

struct ChainVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ChainVisitor<T> {
    type Value = Chain<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut chain = Chain::new();
        while let Some(t) = access.next_element()? {
            chain.push_back(t);
        }
        Ok(chain)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Chain<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ChainVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.chain.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Stack {
            chain: Deserialize::deserialize(deserializer)?,
        })
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.chain.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Queue {
            chain: Deserialize::deserialize(deserializer)?,
        })
    }
}
