//! Implements classic in-memory data structures on top of arena storage: a binary search tree, a binary heap and a disjoint set.
//!
//! ------------------------
//!
//! # Overview
//! Every structure in Kindling stores [`Node`]s: a user value paired with a comparable [`Key`] which is derived from the value once, when it enters the structure. How the key is derived is decided by a [`KeyExtractor`] supplied at construction: plain numbers and strings are their own key, while records can expose a named field or be handed to a closure. Keys are then ordered by a [`Comparator`], which defaults to the natural order of keys and can be swapped for a locale-aware collating comparator.
//!
//! The structures themselves are arena-allocated, like ["arena-allocated trees"][arena tree blog post]: nodes live in some sort of backing storage, typically a [`Vec`] (or its variants, like [`SmallVec`] or [`ArrayVec`]), and link to each other with indices into the storage instead of pointers. Walks over the tree are iterative, so deep or degenerate trees do not exhaust the call stack.
//!
//! # Capacity
//! Every structure accepts an optional upper bound on the number of elements, described by [`Capacity`]. Zero means unlimited, which is the default. Insertions past the limit fail with [`Error::CapacityExceeded`] and leave the structure untouched. Fixed-size storages, like [`ArrayVec`], additionally cap the structure at their array length.
//!
//! # Storage
//! The trait used for defining the arena type used by the tree is `Storage`; heaps and queues need positional access and thus use `ListStorage`, a trait for list-like collections. Several types from both the standard library and external crates already implement `ListStorage` out of the box:
//! - [`Vec`], [`SmallVec`] and [`ArrayVec`]
//! - [`VecDeque`], which also makes `pop_front` constant-time and is thus the default for [`Queue`]
//!
//! `Storage` is implemented by `SparseStorage`, which wraps any `ListStorage` and leaves holes behind removed elements, reusing them on subsequent insertions. This keeps removal constant-time while not invalidating the keys of other elements.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only makes the error type implement `std::error::Error` and lets the logging facade use the standard library.
//! - `binary_search_tree`, `binary_heap`, `disjoint_set` (**enabled by default**) - the respective data structures.
//! - `smallvec` - adds a `ListStorage` trait implementation for [`SmallVec`].
//! - `doc_cfg` - marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Logging
//! Kindling logs through the [`log`] facade and never installs a logger. Structural changes, such as unions or removals which relink a subtree, are logged at the `trace` level; rejected insertions are logged at the `debug` level.
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//! - `smallvec` (*optional*): `^1.4`
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`log`]: https://docs.rs/log/*/log/ " "
//! [`Node`]: node/struct.Node.html " "
//! [`Key`]: node/struct.Key.html " "
//! [`KeyExtractor`]: node/trait.KeyExtractor.html " "
//! [`Comparator`]: compare/trait.Comparator.html " "
//! [`Capacity`]: struct.Capacity.html " "
//! [`Queue`]: queue/struct.Queue.html " "
//! [`Error::CapacityExceeded`]: enum.Error.html#variant.CapacityExceeded " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

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
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
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
#![allow(clippy::use_self, clippy::option_if_let_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::use_debug))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod node;
#[doc(no_inline)]
pub use node::{Key, Node, KeyExtractor, ScalarKey, FieldKey, KeyFn};

pub mod compare;
#[doc(no_inline)]
pub use compare::{Comparator, NaturalOrder, CollatingComparator};

mod capacity;
pub use capacity::Capacity;

pub mod queue;
#[doc(no_inline)]
pub use queue::Queue;

pub mod traversal;
#[doc(no_inline)]
pub use traversal::{Order, Visit};

#[cfg(feature = "binary_search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_search_tree")))]
pub mod binary_search_tree;
#[cfg(feature = "binary_search_tree")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_search_tree")))]
pub use binary_search_tree::BinarySearchTree;

#[cfg(feature = "binary_heap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_heap")))]
pub mod binary_heap;
#[cfg(feature = "binary_heap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_heap")))]
pub use binary_heap::{BinaryHeap, PriorityQueue};

#[cfg(feature = "disjoint_set")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "disjoint_set")))]
pub mod disjoint_set;
#[cfg(feature = "disjoint_set")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "disjoint_set")))]
pub use disjoint_set::DisjointSet;

/// A prelude for using Kindling, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        Capacity,
        Error as KindlingError,
        node::{Key, KeyExtractor, ScalarKey, FieldKey, KeyFn, Record, Scalar},
        compare::{Comparator, NaturalOrder, CollatingComparator},
        traversal::{Order as TraversalOrder, Visit},
        queue::Queue,
    };
    #[cfg(feature = "binary_search_tree")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_search_tree")))]
    #[doc(no_inline)]
    pub use crate::binary_search_tree::{
        BinarySearchTree,
        NodeRef as BinarySearchTreeNodeRef,
    };
    #[cfg(feature = "binary_heap")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "binary_heap")))]
    #[doc(no_inline)]
    pub use crate::binary_heap::{BinaryHeap, Orientation as HeapOrientation, PriorityQueue};
    #[cfg(feature = "disjoint_set")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "disjoint_set")))]
    #[doc(no_inline)]
    pub use crate::disjoint_set::DisjointSet;
}

use alloc::borrow::Cow;

/// The error type returned by fallible operations on every data structure in the crate.
///
/// Lookups of values which are not present are never errors; they are reported with `None`, `false` or `-1`, depending on the operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The structure already holds as many elements as its capacity allows.
    #[error("capacity of {capacity} elements exceeded")]
    CapacityExceeded {
        /// The configured capacity.
        capacity: usize,
    },
    /// A key could not be derived from a value, or a key was malformed.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected.
        reason: Cow<'static, str>,
    },
    /// A value cannot be stored at all.
    #[error("invalid value: {reason}")]
    InvalidValue {
        /// Why the value was rejected.
        reason: Cow<'static, str>,
    },
    /// A position or level was outside of the range the structure accepts.
    #[error("index {index} out of range for a structure of {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: isize,
        /// The number of elements in the structure at the time.
        len: usize,
    },
    /// An argument other than a value was malformed, such as an unknown traversal order or a locale tag.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: Cow<'static, str>,
    },
    /// The operation requires at least one element.
    #[error("cannot {operation} on an empty structure")]
    EmptyStructure {
        /// The name of the operation.
        operation: &'static str,
    },
    /// A value with the same key is already present and the structure does not admit duplicates.
    #[error("key {key} is already present")]
    DuplicateKey {
        /// The duplicated key.
        key: Key,
    },
}
