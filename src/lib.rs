//! Implements persistent, self-balancing ordered maps using AVL trees with structural sharing.
//!
//! ------------------------
//!
//! # Overview
//! Cinder implements ordered maps in the functional style: a map is a snapshot, and adding or removing an entry produces a new snapshot while leaving the previous one intact. The snapshots are backed by AVL trees whose nodes are immutable and reference-counted with [`Arc`], so a new snapshot only allocates the `O(log n)` nodes on the path from the root to the point of change and shares every other subtree with the snapshot it was derived from.
//!
//! Since nothing is ever mutated in place, snapshots can be read from any number of threads at once without locking, and keeping old versions around costs nothing beyond the nodes they do not share.
//!
//! ```rust
//! use cinder::AvlMap;
//!
//! let v1: AvlMap<u32, &str> = [(5, "five"), (3, "three"), (8, "eight")].iter().copied().collect();
//! let v2 = v1.add(4, "four");
//! let v3 = v2.remove(&5).unwrap();
//!
//! assert_eq!(v1.keys().copied().collect::<Vec<_>>(), [3, 5, 8]);
//! assert_eq!(v2.keys().copied().collect::<Vec<_>>(), [3, 4, 5, 8]);
//! assert_eq!(v3.keys().copied().collect::<Vec<_>>(), [3, 4, 8]);
//! assert!(v3.lookup(&5).is_err());
//! ```
//!
//! # Ordering
//! Keys are arranged by a [`Comparator`], which defaults to [`NaturalOrder`] (the key type's `Ord` implementation). Any closure taking two key references and returning an [`Ordering`] can be used instead, as can [`ReverseOrder`] to flip another comparator.
//!
//! # Errors
//! Contract violations are reported as typed errors instead of panics:
//! - [`EmptyTreeAccessError`] — reading the key, value or children of an empty tree, or removing a key which is not present (the search for it ends at an empty subtree)
//! - [`KeyNotFoundError`] — looking up a key which is not present
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types. The crate always requires `alloc`.
//! - `serde` — adds `Serialize` and `Deserialize` implementations for [`AvlMap`], which is (de)serialized as a map in ascending order of keys.
//! - `tracing` — emits `trace`-level events from rotations and removals, which helps with debugging comparators.
//! - `doc_cfg` — annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `serde` (*optional*) — `^1.0`
//!
//! [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Ordering`]: https://doc.rust-lang.org/std/cmp/enum.Ordering.html " "
//! [`Comparator`]: comparator/trait.Comparator.html " "
//! [`NaturalOrder`]: comparator/struct.NaturalOrder.html " "
//! [`ReverseOrder`]: comparator/struct.ReverseOrder.html " "
//! [`AvlMap`]: avl_tree/struct.AvlMap.html " "
//! [`EmptyTreeAccessError`]: enum.EmptyTreeAccessError.html " "
//! [`KeyNotFoundError`]: struct.KeyNotFoundError.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

#[macro_use]
pub(crate) mod util;

pub mod comparator;
#[doc(no_inline)]
pub use comparator::{Comparator, NaturalOrder, ReverseOrder};

pub mod avl_tree;
pub use avl_tree::{AvlMap, Tree};

pub mod traversal;
pub use traversal::{Visitor, Traversable};

#[cfg(feature = "serde")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "serde")))]
mod serde_impl;

/// A prelude for using Cinder, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::avl_tree::{
        AvlMap,
        Tree as AvlTree,
        NodeRef as AvlTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::comparator::{
        Comparator as KeyComparator,
        NaturalOrder,
        ReverseOrder,
    };
    #[doc(no_inline)]
    pub use crate::{EmptyTreeAccessError, KeyNotFoundError};
}

use core::fmt::{self, Formatter, Display};

/// The error type returned when reading the contents of an empty tree or removing from one.
///
/// Removing a key which is not present in a tree also produces this error (as [`Remove`]), since the search for the key ends up at an empty subtree.
///
/// [`Remove`]: #variant.Remove " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EmptyTreeAccessError {
    /// The key of the root was requested.
    Key,
    /// The value of the root was requested.
    Value,
    /// The left subtree of the root was requested.
    Left,
    /// The right subtree of the root was requested.
    Right,
    /// An entry was to be removed.
    Remove,
}
impl Display for EmptyTreeAccessError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Key => "cannot get the key of an empty tree",
            Self::Value => "cannot get the value of an empty tree",
            Self::Left => "cannot get the left subtree of an empty tree",
            Self::Right => "cannot get the right subtree of an empty tree",
            Self::Remove => "cannot remove an entry from an empty tree",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EmptyTreeAccessError {}

/// The error type returned when looking up a key which is not present in a map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyNotFoundError;
impl Display for KeyNotFoundError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the key was not found in the map")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for KeyNotFoundError {}
