//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Visitor`] — a *trait for types which describe algorithms with state*, fed one node at a time
//! - [`Traversable`] — a *trait for types which describe tree-like structures* which can be traversed by `Visitor` algorithms
//! - Implementations of ubiquitous algorithms for trees (see the [`algorithms`] module for more)
//! - Helper types: [`TraversalOrder`] and [`VisitorDirection`]
//!
//! Persistent trees are never mutated and have no parent links, so unlike cursor-based traversal, the traversable drives the walk and the visitor only decides whether to keep going.
//!
//! # Example
//! ```rust
//! use cinder::{
//!     AvlMap,
//!     avl_tree::NodeRef,
//!     traversal::{Traversable, TraversalOrder, Visitor, VisitorDirection},
//! };
//!
//! /// Finds the depth of the deepest node.
//! struct MaxDepth(usize);
//! impl<'a, K, V> Visitor<'a, K, V> for MaxDepth {
//!     type Output = usize;
//!     fn visit(&mut self, node: NodeRef<'a, K, V>) -> VisitorDirection<usize> {
//!         self.0 = self.0.max(node.depth());
//!         VisitorDirection::Continue
//!     }
//!     fn finish(self) -> usize {
//!         self.0
//!     }
//! }
//!
//! let map: AvlMap<_, _> = (1..=7).map(|x| (x, ())).collect();
//! assert_eq!(map.traverse(TraversalOrder::PreOrder, MaxDepth(0)), 2);
//! ```
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversalOrder`]: enum.TraversalOrder.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "

pub mod algorithms;

use crate::avl_tree::NodeRef;

/// Structures which visit the nodes of a traversable one by one, accumulating state.
pub trait Visitor<'a, K, V> {
    /// The final value produced by the visitor.
    type Output;
    /// Visit the provided node, deciding whether the traversal should go on.
    fn visit(&mut self, node: NodeRef<'a, K, V>) -> VisitorDirection<Self::Output>;
    /// Produces the final value if the traversal ran out of nodes without being stopped.
    fn finish(self) -> Self::Output;
}

/// Whether a visitor wishes to continue the traversal after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<V> {
    /// Visit the next node in the traversal order.
    Continue,
    /// Stop the execution of the algorithm, producing a final value.
    Stop(V),
}

/// The order in which a traversal visits the nodes of a binary tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. For search trees, this visits keys in ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}
impl Default for TraversalOrder {
    #[inline(always)]
    fn default() -> Self {
        Self::InOrder
    }
}

/// Data structures which can be traversed using `Visitor`s.
pub trait Traversable<K, V> {
    /// Returns a reference to the root node, or `None` if the structure is empty.
    fn root_ref(&self) -> Option<NodeRef<'_, K, V>>;

    /// Traverses the structure from the root in the specified order, returning the final result of the visitor.
    ///
    /// Recursion depth is bounded by the height of the tree.
    fn traverse<'a, T>(&'a self, order: TraversalOrder, mut visitor: T) -> T::Output
    where
        K: 'a,
        V: 'a,
        T: Visitor<'a, K, V>,
    {
        if let Some(root) = self.root_ref() {
            if let Some(output) = walk(root, order, &mut visitor) {
                return output;
            }
        }
        visitor.finish()
    }
}

/// Returns `Some` as soon as the visitor stops, `None` if it wants to keep going.
fn walk<'a, K, V, T>(
    node: NodeRef<'a, K, V>,
    order: TraversalOrder,
    visitor: &mut T,
) -> Option<T::Output>
where T: Visitor<'a, K, V>,
{
    macro_rules! visit {
        ($node:expr) => {
            if let VisitorDirection::Stop(output) = visitor.visit($node) {
                return Some(output);
            }
        };
    }
    macro_rules! descend {
        ($child:expr) => {
            if let Some(child) = $child {
                if let Some(output) = walk(child, order, visitor) {
                    return Some(output);
                }
            }
        };
    }
    if order == TraversalOrder::PreOrder {
        visit!(node);
    }
    descend!(node.left());
    if order == TraversalOrder::InOrder {
        visit!(node);
    }
    descend!(node.right());
    if order == TraversalOrder::PostOrder {
        visit!(node);
    }
    None
}
