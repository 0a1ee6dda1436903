use super::*;

/// A `Visitor` which counts the nodes it is shown.
///
/// All traversal orders visit every node, so any of them can be used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Count(usize);
impl Count {
    /// Creates a counter starting at zero.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }
}
impl<'a, K, V> Visitor<'a, K, V> for Count {
    type Output = usize;

    #[inline]
    fn visit(&mut self, _node: NodeRef<'a, K, V>) -> VisitorDirection<usize> {
        self.0 += 1;
        VisitorDirection::Continue
    }
    #[inline(always)]
    fn finish(self) -> usize {
        self.0
    }
}
