use core::{
    cmp::{self, Ordering},
    fmt::{self, Formatter, Display},
};
use crate::comparator::Comparator;
use super::*;

/// A `Visitor` which checks that a tree is a valid AVL tree, stopping at the first node which is not.
///
/// Must be run in [`TraversalOrder::InOrder`], since key ordering is verified by comparing every key to the one visited right before it. For every node, the following is checked:
/// - the key is strictly greater than the previous one according to the comparator, which, for an in-order walk, is the same as every left descendant being smaller and every right descendant being greater;
/// - the balance factor is between -1 and 1;
/// - the cached height is one more than the greater of the children's heights.
///
/// [`TraversalOrder::InOrder`]: ../enum.TraversalOrder.html#variant.InOrder " "
#[derive(Debug)]
pub struct InvariantCheck<'a, K, C: ?Sized> {
    comparator: &'a C,
    previous: Option<&'a K>,
}
impl<'a, K, C: ?Sized> InvariantCheck<'a, K, C> {
    /// Creates a checker which orders keys with the specified comparator.
    #[inline]
    pub fn new(comparator: &'a C) -> Self {
        Self {
            comparator,
            previous: None,
        }
    }
}
impl<'a, K, V, C> Visitor<'a, K, V> for InvariantCheck<'a, K, C>
where C: Comparator<K> + ?Sized,
{
    type Output = Result<(), InvariantViolation>;

    fn visit(&mut self, node: NodeRef<'a, K, V>) -> VisitorDirection<Self::Output> {
        let depth = node.depth();
        let raw = node.node();
        let actual = 1 + cmp::max(raw.left().height(), raw.right().height());
        if node.height() != actual {
            return VisitorDirection::Stop(Err(InvariantViolation::HeightMismatch {
                depth,
                cached: node.height(),
                actual,
            }));
        }
        let balance = node.balance();
        if !(-1..=1).contains(&balance) {
            return VisitorDirection::Stop(Err(InvariantViolation::Unbalanced { depth, balance }));
        }
        if let Some(previous) = self.previous {
            if self.comparator.compare(previous, node.key()) != Ordering::Less {
                return VisitorDirection::Stop(Err(InvariantViolation::OutOfOrder { depth }));
            }
        }
        self.previous = Some(node.key());
        VisitorDirection::Continue
    }
    #[inline(always)]
    fn finish(self) -> Self::Output {
        Ok(())
    }
}

/// The error type returned by [`InvariantCheck`] for trees which are not valid AVL trees.
///
/// The public interface of the crate never produces such trees. This is reported for trees built with a comparator which is not a total order or which changed its behavior between operations.
///
/// [`InvariantCheck`]: struct.InvariantCheck.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvariantViolation {
    /// A key was not strictly greater than the key preceding it in order.
    OutOfOrder {
        /// The depth of the offending node.
        depth: usize,
    },
    /// The heights of the subtrees of a node differed by more than 1.
    Unbalanced {
        /// The depth of the offending node.
        depth: usize,
        /// The balance factor of the node: right subtree height minus left subtree height.
        balance: isize,
    },
    /// The cached height of a node did not match the heights of its children.
    HeightMismatch {
        /// The depth of the offending node.
        depth: usize,
        /// The height stored in the node.
        cached: usize,
        /// The height computed from the children.
        actual: usize,
    },
}
impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfOrder { depth } => {
                write!(f, "key out of order at depth {}", depth)
            }
            Self::Unbalanced { depth, balance } => {
                write!(f, "node at depth {} has balance factor {}", depth, balance)
            }
            Self::HeightMismatch {
                depth,
                cached,
                actual,
            } => write!(
                f,
                "node at depth {} has cached height {}, expected {}",
                depth, cached, actual,
            ),
        }
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvariantViolation {}
