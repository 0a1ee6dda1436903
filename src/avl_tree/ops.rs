use core::cmp::Ordering;
use crate::{
    comparator::Comparator,
    util::broken_invariant,
    EmptyTreeAccessError,
};
use super::{balance::make_balanced, Node, Tree};

impl<K, V> Tree<K, V> {
    /// Finds the subtree whose root holds the specified key.
    ///
    /// If the key is absent, an empty tree is returned instead: either `self` if it's empty, or the empty child at which the search ended. Never fails.
    ///
    /// `O(log n)` time.
    pub fn search<C>(&self, key: &K, comparator: &C) -> &Self
    where C: Comparator<K> + ?Sized,
    {
        let mut current = self;
        while let Self::Node(node) = current {
            match comparator.compare(key, &node.key) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => break,
            }
        }
        current
    }
    /// Returns the node with the smallest key, or `None` if the tree is empty.
    pub fn leftmost(&self) -> Option<&Node<K, V>> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(node)
    }
    /// Returns the node with the largest key, or `None` if the tree is empty.
    pub fn rightmost(&self) -> Option<&Node<K, V>> {
        let mut node = self.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(node)
    }
}

impl<K: Clone, V: Clone> Tree<K, V> {
    /// Returns a new tree which also maps `key` to `value`.
    ///
    /// If a key comparing equal to `key` is already present, the new tree keeps the original key and replaces its value; the tree never holds duplicate keys. `self` is left untouched, and every subtree off the path from the root to the key is shared between the two trees.
    ///
    /// `O(log n)` time and allocations.
    pub fn add<C>(&self, key: K, value: V, comparator: &C) -> Self
    where C: Comparator<K> + ?Sized,
    {
        let node = match self {
            Self::Node(node) => node,
            Self::Empty => return Self::leaf(key, value),
        };
        match comparator.compare(&key, &node.key) {
            Ordering::Greater => make_balanced(Self::branch(
                node.key.clone(),
                node.value.clone(),
                node.left.clone(),
                node.right.add(key, value, comparator),
            )),
            Ordering::Less => make_balanced(Self::branch(
                node.key.clone(),
                node.value.clone(),
                node.left.add(key, value, comparator),
                node.right.clone(),
            )),
            // Same shape, so no rebalancing needed.
            Ordering::Equal => Self::branch(
                node.key.clone(),
                value,
                node.left.clone(),
                node.right.clone(),
            ),
        }
    }
    /// Returns a new tree without the entry for `key`.
    ///
    /// A node with two children is replaced by its in-order successor, i.e. the leftmost node of its right subtree. `self` is left untouched.
    ///
    /// `O(log n)` time and allocations.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Remove`] if the tree is empty or does not contain the key, since the search for it ends up trying to remove from an empty subtree.
    ///
    /// [`EmptyTreeAccessError::Remove`]: ../enum.EmptyTreeAccessError.html#variant.Remove " "
    pub fn remove<C>(&self, key: &K, comparator: &C) -> Result<Self, EmptyTreeAccessError>
    where C: Comparator<K> + ?Sized,
    {
        let node = match self {
            Self::Node(node) => node,
            Self::Empty => return Err(EmptyTreeAccessError::Remove),
        };
        let result = match comparator.compare(key, &node.key) {
            Ordering::Less => make_balanced(Self::branch(
                node.key.clone(),
                node.value.clone(),
                node.left.remove(key, comparator)?,
                node.right.clone(),
            )),
            Ordering::Greater => make_balanced(Self::branch(
                node.key.clone(),
                node.value.clone(),
                node.left.clone(),
                node.right.remove(key, comparator)?,
            )),
            Ordering::Equal => match (&node.left, &node.right) {
                (Self::Empty, Self::Empty) => Self::Empty,
                (Self::Empty, right) => right.clone(),
                (left, Self::Empty) => left.clone(),
                (left, right) => {
                    let successor = right
                        .leftmost()
                        .unwrap_or_else(|| broken_invariant("non-empty subtree without a leftmost node"));
                    trace_event!(
                        height = node.height,
                        "promoting in-order successor"
                    );
                    make_balanced(Self::branch(
                        successor.key.clone(),
                        successor.value.clone(),
                        left.clone(),
                        right.remove(&successor.key, comparator)?,
                    ))
                }
            },
        };
        Ok(result)
    }
}
