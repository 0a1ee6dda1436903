use alloc::sync::Arc;
use core::cmp;
use crate::EmptyTreeAccessError;

/// A persistent AVL tree: either nothing at all or a shared, immutable node.
///
/// Cloning a tree is `O(1)` and only bumps a reference count. No operation ever modifies a node after it has been built; operations which "change" a tree return a new root instead, reusing every subtree they did not have to touch.
#[derive(Debug)]
pub enum Tree<K, V> {
    /// The empty tree, used both as the tree with no entries and as the "no child" marker inside nodes. Its height is 0.
    Empty,
    /// A tree with at least one entry.
    Node(Arc<Node<K, V>>),
}

/// A node of a persistent AVL tree.
///
/// Nodes are created by the tree internally and only ever exposed behind shared references.
#[derive(Debug)]
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Tree<K, V>,
    pub(super) right: Tree<K, V>,
    pub(super) height: usize,
}
impl<K, V> Node<K, V> {
    /// Creates a node, computing its height from the children.
    #[inline]
    pub(super) fn new(key: K, value: V, left: Tree<K, V>, right: Tree<K, V>) -> Self {
        let height = 1 + cmp::max(left.height(), right.height());
        Self {
            key,
            value,
            left,
            right,
            height,
        }
    }
    /// Returns the key stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }
    /// Returns the left subtree, which only contains keys less than the node's one.
    #[inline(always)]
    pub fn left(&self) -> &Tree<K, V> {
        &self.left
    }
    /// Returns the right subtree, which only contains keys greater than the node's one.
    #[inline(always)]
    pub fn right(&self) -> &Tree<K, V> {
        &self.right
    }
    /// Returns the cached height of the subtree rooted at the node, which is at least 1.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the balance factor: the height of the right subtree minus the height of the left one.
    #[inline]
    pub fn balance(&self) -> isize {
        self.right.height() as isize - self.left.height() as isize
    }
}

impl<K, V> Tree<K, V> {
    /// The empty tree.
    ///
    /// It has no payload, so every empty tree is the same value and nothing is allocated for it.
    pub const EMPTY: Self = Self::Empty;

    /// Returns the empty tree.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self::Empty
    }
    /// Creates a tree with one entry.
    #[inline]
    pub fn leaf(key: K, value: V) -> Self {
        Self::branch(key, value, Self::Empty, Self::Empty)
    }
    /// Builds a node from its parts without performing any checks or rebalancing.
    #[inline]
    pub(crate) fn branch(key: K, value: V, left: Self, right: Self) -> Self {
        Self::Node(Arc::new(Node::new(key, value, left, right)))
    }

    /// Returns `true` if the tree has no entries, `false` otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    /// Returns the root node, or `None` for the empty tree.
    #[inline]
    pub fn node(&self) -> Option<&Node<K, V>> {
        match self {
            Self::Node(node) => Some(node.as_ref()),
            Self::Empty => None,
        }
    }
    /// Returns the height of the tree: 0 if it's empty, the cached height of the root otherwise.
    #[inline]
    pub fn height(&self) -> usize {
        match self {
            Self::Node(node) => node.height,
            Self::Empty => 0,
        }
    }
    /// Returns the balance factor of the root, or 0 if the tree is empty.
    #[inline]
    pub fn balance(&self) -> isize {
        match self {
            Self::Node(node) => node.balance(),
            Self::Empty => 0,
        }
    }
    /// Returns `true` if the right subtree is at least 2 levels taller than the left one.
    #[inline(always)]
    pub fn is_right_heavy(&self) -> bool {
        self.balance() >= 2
    }
    /// Returns `true` if the left subtree is at least 2 levels taller than the right one.
    #[inline(always)]
    pub fn is_left_heavy(&self) -> bool {
        self.balance() <= -2
    }

    /// Returns the key at the root.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Key`] if the tree is empty.
    ///
    /// [`EmptyTreeAccessError::Key`]: ../enum.EmptyTreeAccessError.html#variant.Key " "
    #[inline]
    pub fn key(&self) -> Result<&K, EmptyTreeAccessError> {
        self.node()
            .map(Node::key)
            .ok_or(EmptyTreeAccessError::Key)
    }
    /// Returns the value at the root.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Value`] if the tree is empty.
    ///
    /// [`EmptyTreeAccessError::Value`]: ../enum.EmptyTreeAccessError.html#variant.Value " "
    #[inline]
    pub fn value(&self) -> Result<&V, EmptyTreeAccessError> {
        self.node()
            .map(Node::value)
            .ok_or(EmptyTreeAccessError::Value)
    }
    /// Returns the left subtree of the root.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Left`] if the tree is empty.
    ///
    /// [`EmptyTreeAccessError::Left`]: ../enum.EmptyTreeAccessError.html#variant.Left " "
    #[inline]
    pub fn left(&self) -> Result<&Self, EmptyTreeAccessError> {
        self.node()
            .map(Node::left)
            .ok_or(EmptyTreeAccessError::Left)
    }
    /// Returns the right subtree of the root.
    ///
    /// # Errors
    /// Fails with [`EmptyTreeAccessError::Right`] if the tree is empty.
    ///
    /// [`EmptyTreeAccessError::Right`]: ../enum.EmptyTreeAccessError.html#variant.Right " "
    #[inline]
    pub fn right(&self) -> Result<&Self, EmptyTreeAccessError> {
        self.node()
            .map(Node::right)
            .ok_or(EmptyTreeAccessError::Right)
    }

    /// Returns `true` if both trees are the same snapshot, i.e. share the root allocation, or are both empty.
    ///
    /// This does not compare the contents: two trees built separately from the same entries are never `ptr_eq`.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Node(a), Self::Node(b)) => Arc::ptr_eq(a, b),
            (Self::Empty, Self::Empty) => true,
            _ => false,
        }
    }
}
impl<K, V> Clone for Tree<K, V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        match self {
            Self::Node(node) => Self::Node(Arc::clone(node)),
            Self::Empty => Self::Empty,
        }
    }
}
impl<K, V> Default for Tree<K, V> {
    #[inline(always)]
    fn default() -> Self {
        Self::Empty
    }
}
