use crate::traversal::Traversable;
use super::*;

impl<K, V> Traversable<K, V> for Tree<K, V> {
    #[inline]
    fn root_ref(&self) -> Option<NodeRef<'_, K, V>> {
        NodeRef::root(self)
    }
}
