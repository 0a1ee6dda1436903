//! Persistent AVL trees and the ordered map built on top of them.
//!
//! An [AVL tree] is a binary search tree which keeps the heights of the two subtrees of every node within 1 of each other, rotating nodes around whenever an insertion or removal would break that. This bounds the height of a tree of `n` entries by about `1.44 * log2(n + 2)`, which makes lookups, insertions and removals all take `O(log n)` time regardless of the order in which keys arrive.
//!
//! The trees here are *persistent*: nodes are reference-counted and never modified after being built. Adding or removing an entry builds new nodes only along the path from the root to the point of change and shares everything else with the previous tree, so both versions remain usable and the cost of keeping old versions around is `O(log n)` nodes per operation.
//!
//! Two layers are provided:
//! - [`Tree`], the raw tree, where every operation takes the comparator explicitly and the structure (keys, heights, children) can be inspected directly
//! - [`AvlMap`], an ordered map which bundles a tree with its comparator
//!
//! # Example
//! ```rust
//! use cinder::avl_tree::AvlMap;
//!
//! // Since the map is persistent, every version stays around for as long as we keep it.
//! let empty = AvlMap::new();
//! let small = empty.add("b", 2).add("a", 1);
//! let large = small.add("c", 3);
//!
//! assert!(empty.is_empty());
//! assert_eq!(small.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
//! assert_eq!(large.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! // Removing an entry which is not there is an error rather than a no-op.
//! assert!(small.remove(&"c").is_err());
//! let smaller = large.remove(&"a").unwrap();
//! assert_eq!(smaller.lookup(&"b"), Ok(&2));
//! assert!(smaller.lookup(&"a").is_err());
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree " "
//! [`Tree`]: enum.Tree.html " "
//! [`AvlMap`]: struct.AvlMap.html " "

mod balance;
mod base;
mod impl_traversable;
mod iter;
mod node;
mod node_ref;
mod ops;

pub use base::AvlMap;
pub use iter::{Iter, Keys, Values};
pub use node::{Node, Tree};
pub use node_ref::NodeRef;

#[cfg(test)]
mod tests;
