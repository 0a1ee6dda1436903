use core::{
    fmt::{self, Debug, Formatter},
    iter::FromIterator,
    ops::Index,
};
use crate::{
    comparator::{Comparator, NaturalOrder},
    traversal::{
        algorithms::{Count, InvariantCheck, InvariantViolation},
        Traversable,
        TraversalOrder,
    },
    EmptyTreeAccessError,
    KeyNotFoundError,
};
use super::{Iter, Keys, NodeRef, Tree, Values};

/// A persistent ordered map backed by an AVL tree.
///
/// Every "modifying" operation returns a new map and leaves the original one unchanged. The two share all the nodes the operation did not have to rebuild, so both stay cheap to keep around. Cloning a map is `O(1)`.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct AvlMap<K, V, C = NaturalOrder> {
    root: Tree<K, V>,
    comparator: C,
}
impl<K, V> AvlMap<K, V> {
    /// Creates an empty map ordered by the natural order of the keys.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            root: Tree::Empty,
            comparator: NaturalOrder,
        }
    }
    /// Creates a map with a single entry, ordered by the natural order of the keys.
    #[inline]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            root: Tree::leaf(key, value),
            comparator: NaturalOrder,
        }
    }
}
impl<K, V, C> AvlMap<K, V, C> {
    /// Creates an empty map which orders its keys with the specified comparator.
    #[inline(always)]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            root: Tree::Empty,
            comparator,
        }
    }
    /// Wraps an existing tree into a map.
    ///
    /// The tree must have been built using the same comparator, otherwise lookups may fail to find keys. [`check_invariants`] can be used to verify that.
    ///
    /// [`check_invariants`]: #method.check_invariants " "
    #[inline(always)]
    pub const fn from_tree(root: Tree<K, V>, comparator: C) -> Self {
        Self { root, comparator }
    }
    /// Returns the tree the map is a view of.
    #[inline(always)]
    pub fn root(&self) -> &Tree<K, V> {
        &self.root
    }
    /// Returns the comparator used to order keys.
    #[inline(always)]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
    /// Splits the map into its tree and comparator.
    #[inline]
    pub fn into_parts(self) -> (Tree<K, V>, C) {
        (self.root, self.comparator)
    }

    /// Returns `true` if the map has no entries, `false` otherwise.
    ///
    /// `O(1)` time.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
    /// Returns the number of entries in the map.
    ///
    /// Nodes do not cache the sizes of their subtrees, so this walks the whole tree: `O(n)` time.
    #[inline]
    pub fn len(&self) -> usize {
        self.traverse(TraversalOrder::InOrder, Count::new())
    }
    /// Returns the height of the underlying tree, which is 0 for an empty map and at most about `1.44 * log2(len + 2)` otherwise.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.root.height()
    }
    /// Returns `true` if both maps are the same snapshot, i.e. share the root node.
    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.root.ptr_eq(&other.root)
    }

    /// Returns an iterator over the entries of the map, in ascending order of keys.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }
    /// Returns an iterator over the key-value pairs of the map, in ascending order of keys. Same as [`iter`].
    ///
    /// [`iter`]: #method.iter " "
    #[inline(always)]
    pub fn pairs(&self) -> Iter<'_, K, V> {
        self.iter()
    }
    /// Returns an iterator over the keys of the map, in ascending order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }
    /// Returns an iterator over the values of the map, in ascending order of their keys.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
    /// Returns the entry with the smallest key, or `None` if the map is empty.
    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.root.leftmost().map(|node| (node.key(), node.value()))
    }
    /// Returns the entry with the largest key, or `None` if the map is empty.
    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.root.rightmost().map(|node| (node.key(), node.value()))
    }
}
impl<K, V, C: Comparator<K>> AvlMap<K, V, C> {
    /// Returns `true` if the map contains an entry for the key.
    ///
    /// `O(log n)` time.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        !self.root.search(key, &self.comparator).is_empty()
    }
    /// Returns the value associated with the key.
    ///
    /// `O(log n)` time.
    ///
    /// # Errors
    /// Fails with [`KeyNotFoundError`] if the map has no entry for the key.
    ///
    /// [`KeyNotFoundError`]: ../struct.KeyNotFoundError.html " "
    #[inline]
    pub fn lookup(&self, key: &K) -> Result<&V, KeyNotFoundError> {
        self.root
            .search(key, &self.comparator)
            .value()
            .map_err(|_| KeyNotFoundError)
    }
    /// Returns the value associated with the key, or `None` if there is none.
    ///
    /// `O(log n)` time.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key).ok()
    }
    /// Checks that the underlying tree is a valid AVL tree under the map's comparator.
    ///
    /// `O(n)` time.
    ///
    /// # Errors
    /// Returns the first violation found in order of keys.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.traverse(
            TraversalOrder::InOrder,
            InvariantCheck::new(&self.comparator),
        )
    }
}
impl<K, V, C> AvlMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K> + Clone,
{
    /// Returns a new map which also maps `key` to `value`, replacing the previous value if the key was already present.
    ///
    /// `O(log n)` time and allocations.
    ///
    /// # Example
    /// ```rust
    /// use cinder::AvlMap;
    ///
    /// let before = AvlMap::new().add(1, "one");
    /// let after = before.add(2, "two").add(1, "uno");
    /// assert_eq!(before.lookup(&1), Ok(&"one"));
    /// assert_eq!(after.lookup(&1), Ok(&"uno"));
    /// assert!(!before.contains(&2));
    /// ```
    #[must_use = "maps are persistent, adding returns a new map and leaves this one unchanged"]
    pub fn add(&self, key: K, value: V) -> Self {
        Self {
            root: self.root.add(key, value, &self.comparator),
            comparator: self.comparator.clone(),
        }
    }
    /// An alias for [`add`], for those used to the standard library's maps.
    ///
    /// [`add`]: #method.add " "
    #[inline(always)]
    #[must_use = "maps are persistent, inserting returns a new map and leaves this one unchanged"]
    pub fn insert(&self, key: K, value: V) -> Self {
        self.add(key, value)
    }
    /// Returns a new map without the entry for `key`.
    ///
    /// `O(log n)` time and allocations.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Remove`] if the map has no entry for the key.
    ///
    /// [`EmptyTreeAccessError::Remove`]: ../enum.EmptyTreeAccessError.html#variant.Remove " "
    pub fn remove(&self, key: &K) -> Result<Self, EmptyTreeAccessError> {
        Ok(Self {
            root: self.root.remove(key, &self.comparator)?,
            comparator: self.comparator.clone(),
        })
    }
}

impl<K, V, C> Traversable<K, V> for AvlMap<K, V, C> {
    #[inline]
    fn root_ref(&self) -> Option<NodeRef<'_, K, V>> {
        NodeRef::root(&self.root)
    }
}
impl<K, V, C: Clone> Clone for AvlMap<K, V, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            comparator: self.comparator.clone(),
        }
    }
}
impl<K, V, C: Default> Default for AvlMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
impl<K: Debug, V: Debug, C> Debug for AvlMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlMap<K, V, C> {
    /// Compares the entries of the maps in order. Maps holding the same entries are equal regardless of the shape of their trees.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}
impl<K: Eq, V: Eq, C> Eq for AvlMap<K, V, C> {}
impl<K, V, C> FromIterator<(K, V)> for AvlMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
impl<K, V, C> Extend<(K, V)> for AvlMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
{
    /// Adds the entries to the map, replacing the snapshot held by `self`. Other clones of the map are not affected.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.root = self.root.add(key, value, &self.comparator);
        }
    }
}
impl<'a, K, V, C> IntoIterator for &'a AvlMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<K, V, C: Comparator<K>> Index<&K> for AvlMap<K, V, C> {
    type Output = V;
    /// Returns the value associated with the key.
    ///
    /// # Panics
    /// Panics if the map has no entry for the key. Use [`lookup`] or [`get`] to handle that case.
    ///
    /// [`lookup`]: #method.lookup " "
    /// [`get`]: #method.get " "
    #[track_caller]
    fn index(&self, key: &K) -> &V {
        self.lookup(key)
            .unwrap_or_else(|error| panic!("{}", error))
    }
}
