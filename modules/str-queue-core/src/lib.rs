#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::manual_assert)]
#![cfg_attr(not(test), no_std)]

//! Singly-linked queue of owned strings.
//!
//! [`StrQueue`] stores every element in its own heap node and every string as a private copy of the
//! caller's text. Allocation goes through an [`AllocationPolicy`] so that failures are reported as
//! [`QueueError::AllocError`] instead of aborting, and partial allocations are rolled back before an
//! insert returns.
//!
//! Besides the usual head/tail insertion and head removal, the queue can be reversed and merge-sorted
//! in place: both operations only relink nodes and never allocate.
//!
//! The [`facade`] module offers the same operations as free functions over an optional handle, for
//! drivers that model "no queue" explicitly.
//!
//! # Example
//! ```
//! use cellex_str_queue_core_rs::StrQueue;
//!
//! let mut queue = StrQueue::new();
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("a").unwrap();
//! queue.sort();
//!
//! let mut buffer = [0_u8; 8];
//! queue.remove_head(Some(&mut buffer)).unwrap();
//! assert_eq!(&buffer[..2], b"a\0");
//! ```

extern crate alloc;

/// Queue implementation, allocation policies and the optional-handle facade.
pub mod queue;

pub use queue::{
  facade, terminated, truncating_copy, AllocationKind, AllocationPolicy, FaultInjectingAllocation, Iter, QueueError,
  StrQueue, SystemAllocation,
};
