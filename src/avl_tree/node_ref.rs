use super::{Node, Tree};

/// A reference to a node in an AVL tree, remembering how deep into the tree it is.
///
/// Handed to [`Visitor`]s during traversal. Since nodes have no parent links, a `NodeRef` can only be used to walk downwards.
///
/// [`Visitor`]: ../traversal/trait.Visitor.html " "
#[derive(Debug)]
pub struct NodeRef<'a, K, V> {
    node: &'a Node<K, V>,
    depth: usize,
}
impl<'a, K, V> NodeRef<'a, K, V> {
    /// Creates a reference to the root of the tree, or `None` if it's empty.
    #[inline]
    pub fn root(tree: &'a Tree<K, V>) -> Option<Self> {
        tree.node().map(|node| Self { node, depth: 0 })
    }
    #[inline]
    fn child(&self, tree: &'a Tree<K, V>) -> Option<Self> {
        tree.node().map(|node| Self {
            node,
            depth: self.depth + 1,
        })
    }
    /// Returns the key stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node.key
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a V {
        &self.node.value
    }
    /// Returns the node itself.
    #[inline(always)]
    pub fn node(&self) -> &'a Node<K, V> {
        self.node
    }
    /// Returns the number of edges between the node and the root the traversal started from.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Returns the cached height of the subtree rooted at the node.
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.node.height
    }
    /// Returns the balance factor of the node.
    #[inline(always)]
    pub fn balance(&self) -> isize {
        self.node.balance()
    }
    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_empty() && self.node.right.is_empty()
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left(&self) -> Option<Self> {
        self.child(&self.node.left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right(&self) -> Option<Self> {
        self.child(&self.node.right)
    }
}
impl<K, V> Copy for NodeRef<'_, K, V> {}
impl<K, V> Clone for NodeRef<'_, K, V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
