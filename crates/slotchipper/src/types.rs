//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a lexical id in encoder buffers.
///
/// These are constrained to be unsigned primitive integers;
/// `T::zero()` doubles as the padding / unknown id.
pub trait IdType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IdType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type SCHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SCHashMap<K, V> {
            SCHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type SCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type SCHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> SCHashMap<K, V> {
            SCHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_id_types() {
        struct IsId<T: IdType>(PhantomData<T>);

        let _: IsId<u16>;
        let _: IsId<u32>;
        let _: IsId<u64>;
        let _: IsId<usize>;
    }

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: SCHashMap<String, u32> = hash_map_with_capacity(4);
        map.insert("ca".to_string(), 1);
        assert_eq!(map.get("ca"), Some(&1));
    }
}
