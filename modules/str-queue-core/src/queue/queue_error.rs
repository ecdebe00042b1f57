use core::fmt;

use crate::queue::AllocationKind;

/// Errors reported by queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
  /// A required allocation could not be satisfied. The queue is left as it was before the call.
  AllocError(AllocationKind),
  /// The operation targeted an absent queue, or tried to remove from an empty one.
  InvalidOperation,
}

impl QueueError {
  /// Returns `true` when the error was caused by a failed allocation.
  #[must_use]
  pub const fn is_alloc_error(&self) -> bool {
    matches!(self, Self::AllocError(_))
  }

  /// Returns the allocation that failed, if any.
  #[must_use]
  pub const fn allocation_kind(&self) -> Option<AllocationKind> {
    match self {
      | Self::AllocError(kind) => Some(*kind),
      | Self::InvalidOperation => None,
    }
  }
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AllocError(kind) => write!(f, "failed to allocate {kind}"),
      | Self::InvalidOperation => f.write_str("invalid operation on an absent or empty queue"),
    }
  }
}

impl core::error::Error for QueueError {}
