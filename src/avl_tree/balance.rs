//! Rebalancing primitives.
//!
//! Every node built by `add` or `remove` on the way back up from the point of change goes through [`make_balanced`], which applies at most one (single or double) rotation. Rotations only build new nodes on the rotated path; all other subtrees are moved over as shared references.
//!
//! [`make_balanced`]: fn.make_balanced.html " "

use alloc::sync::Arc;
use crate::util::broken_invariant;
use super::{Node, Tree};

/// The components of a node, moved out of it if it was not shared and cloned otherwise.
pub(super) type Parts<K, V> = (K, V, Tree<K, V>, Tree<K, V>);

impl<K: Clone, V: Clone> Tree<K, V> {
    /// Takes the root node apart, or returns `None` if the tree is empty.
    ///
    /// Nodes fresh out of construction are uniquely owned and are taken apart without cloning anything.
    pub(super) fn into_parts(self) -> Option<Parts<K, V>> {
        match self {
            Self::Node(node) => Some(match Arc::try_unwrap(node) {
                Ok(Node {
                    key,
                    value,
                    left,
                    right,
                    ..
                }) => (key, value, left, right),
                Err(shared) => (
                    shared.key.clone(),
                    shared.value.clone(),
                    shared.left.clone(),
                    shared.right.clone(),
                ),
            }),
            Self::Empty => None,
        }
    }
}

/// Restores the balance of a node whose subtrees differ in height by at most 2, returning the tree unchanged if it already is balanced.
///
/// A right-heavy tree is rotated left; if its right subtree leans the other way, the rotation is a double one, so that the middle subtree does not end up just as unbalanced on the opposite side. Left-heavy trees are handled symmetrically.
pub(crate) fn make_balanced<K: Clone, V: Clone>(tree: Tree<K, V>) -> Tree<K, V> {
    if tree.is_right_heavy() {
        let (key, value, left, right) = tree
            .into_parts()
            .unwrap_or_else(|| broken_invariant("right-heavy empty tree"));
        if right.balance() < 0 {
            rotate_left_double(key, value, left, right)
        } else {
            rotate_left(key, value, left, right)
        }
    } else if tree.is_left_heavy() {
        let (key, value, left, right) = tree
            .into_parts()
            .unwrap_or_else(|| broken_invariant("left-heavy empty tree"));
        if left.balance() > 0 {
            rotate_right_double(key, value, left, right)
        } else {
            rotate_right(key, value, left, right)
        }
    } else {
        tree
    }
}

/// Performs a single left rotation on the node made of the given parts: its right child becomes the root, and the node becomes the left child of that.
pub(crate) fn rotate_left<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    trace_event!(
        left_height = left.height(),
        right_height = right.height(),
        "rotating left"
    );
    let (pivot_key, pivot_value, pivot_left, pivot_right) = right
        .into_parts()
        .unwrap_or_else(|| broken_invariant("left rotation without a right child"));
    Tree::branch(
        pivot_key,
        pivot_value,
        Tree::branch(key, value, left, pivot_left),
        pivot_right,
    )
}

/// Performs a single right rotation on the node made of the given parts. Mirror image of [`rotate_left`].
///
/// [`rotate_left`]: fn.rotate_left.html " "
pub(crate) fn rotate_right<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    trace_event!(
        left_height = left.height(),
        right_height = right.height(),
        "rotating right"
    );
    let (pivot_key, pivot_value, pivot_left, pivot_right) = left
        .into_parts()
        .unwrap_or_else(|| broken_invariant("right rotation without a left child"));
    Tree::branch(
        pivot_key,
        pivot_value,
        pivot_left,
        Tree::branch(key, value, pivot_right, right),
    )
}

/// Rotates the right child to the right, then the whole node to the left.
pub(crate) fn rotate_left_double<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    let (right_key, right_value, right_left, right_right) = right
        .into_parts()
        .unwrap_or_else(|| broken_invariant("double left rotation without a right child"));
    let right = rotate_right(right_key, right_value, right_left, right_right);
    rotate_left(key, value, left, right)
}

/// Rotates the left child to the left, then the whole node to the right.
pub(crate) fn rotate_right_double<K: Clone, V: Clone>(
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
) -> Tree<K, V> {
    let (left_key, left_value, left_left, left_right) = left
        .into_parts()
        .unwrap_or_else(|| broken_invariant("double right rotation without a left child"));
    let left = rotate_left(left_key, left_value, left_left, left_right);
    rotate_right(key, value, left, right)
}
