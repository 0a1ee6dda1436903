/// Upper bound on the height of any tree the crate can build.
///
/// An AVL tree of height `h` holds at least `fib(h + 2) - 1` nodes, so a tree of height 128 would need more nodes than fit into a 64-bit address space.
pub(crate) const INLINE_STACK_SIZE: usize = 128;

pub(crate) type Stack<T> = arrayvec::ArrayVec<[T; INLINE_STACK_SIZE]>;

/// Emits a `trace`-level event if the `tracing` feature is enabled, otherwise expands to nothing.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Reports a tree whose balance factors contradict its shape.
///
/// Those states are only reachable if the structural invariants were broken, which the public interface does not allow.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn broken_invariant(msg: &str) -> ! {
    panic!("AVL invariant violated: {}", msg)
}
