//! Ubiquitous algorithms for trees.
//!
//! This includes:
//! - Counting nodes
//! - Checking the structural invariants of AVL trees
//! - *More to come*

mod count;
pub use count::*;
mod invariants;
pub use invariants::*;

use super::{Visitor, VisitorDirection};
use crate::avl_tree::NodeRef;
