//! Total orders used to arrange keys inside trees.
//!
//! Trees never require `K: Ord` directly. Instead, every operation which needs to compare keys receives a [`Comparator`], which is stored inside the map alongside the root of the tree. The default one, [`NaturalOrder`], simply forwards to `Ord`.
//!
//! Any closure of the form `Fn(&K, &K) -> Ordering` is also a comparator:
//! ```rust
//! use cinder::AvlMap;
//!
//! let map = AvlMap::<&str, i32, _>::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()))
//!     .add("three", 3)
//!     .add("one", 1)
//!     .add("eleven", 11);
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, ["one", "three", "eleven"]);
//! ```
//!
//! [`Comparator`]: trait.Comparator.html " "
//! [`NaturalOrder`]: struct.NaturalOrder.html " "

use core::cmp::Ordering;

/// A three-way comparison between keys.
///
/// Implementations must describe a *total order* and must be consistent over the lifetime of the trees which use them: if the same pair of keys compares differently at different points in time, lookups and removals may give wrong answers. This is a logic error and will never cause memory unsafety.
pub trait Comparator<K: ?Sized> {
    /// Compares `lhs` against `rhs`.
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

/// The order defined by the key type's own `Ord` implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;
impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// The reverse of the wrapped comparator. Trees using it are enumerated in descending order of the inner one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C>(pub C);
impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        self(lhs, rhs)
    }
}
