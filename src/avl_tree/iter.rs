use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use crate::util::Stack;
use super::{Node, Tree};

/// An in-order iterator over the entries of an AVL tree, yielding key-value pairs in ascending key order.
///
/// The iterator keeps the path to the next entry on an inline stack, so creating and advancing it never allocates. Created by [`AvlMap::iter`] or [`Iter::new`].
///
/// [`AvlMap::iter`]: struct.AvlMap.html#method.iter " "
/// [`Iter::new`]: #method.new " "
pub struct Iter<'a, K, V> {
    stack: Stack<&'a Node<K, V>>,
}
impl<'a, K, V> Iter<'a, K, V> {
    /// Creates an iterator starting at the smallest key of the tree.
    pub fn new(tree: &'a Tree<K, V>) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
        };
        iter.descend_left(tree);
        iter
    }
    #[inline]
    fn descend_left(&mut self, mut tree: &'a Tree<K, V>) {
        while let Some(node) = tree.node() {
            // The stack holds at most one entry per level, and the height is bounded by
            // the stack's capacity.
            self.stack.push(node);
            tree = &node.left;
        }
    }
}
impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        Some((&node.key, &node.value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
impl<K: Debug, V: Debug> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the keys of an AVL tree in ascending order. Created by [`AvlMap::keys`].
///
/// [`AvlMap::keys`]: struct.AvlMap.html#method.keys " "
pub struct Keys<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}
impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<K, V> FusedIterator for Keys<'_, K, V> {}
impl<K, V> Clone for Keys<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<K: Debug, V> Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the values of an AVL tree, in ascending order of their keys. Created by [`AvlMap::values`].
///
/// [`AvlMap::values`]: struct.AvlMap.html#method.values " "
pub struct Values<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}
impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<K, V> FusedIterator for Values<'_, K, V> {}
impl<K, V> Clone for Values<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<K, V: Debug> Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Returns an in-order iterator over the entries of the tree.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }
}
impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
