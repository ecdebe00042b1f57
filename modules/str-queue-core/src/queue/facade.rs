//! Operations over an optional queue handle.
//!
//! Drivers that track "no queue" explicitly pass `None`; every function then behaves as documented for
//! an absent queue instead of requiring the caller to branch first.

use alloc::{
  alloc::{alloc, Layout},
  boxed::Box,
};
use core::ptr::NonNull;

use crate::queue::{AllocationKind, AllocationPolicy, QueueError, StrQueue, SystemAllocation};

#[cfg(test)]
mod tests;

/// Allocates an empty queue on the heap.
///
/// # Errors
///
/// Returns [`QueueError::AllocError`] with [`AllocationKind::Queue`] when the queue structure cannot be
/// allocated.
pub fn create() -> Result<Box<StrQueue>, QueueError> {
  create_with(SystemAllocation)
}

/// Allocates an empty queue on the heap whose allocations, including this one, go through `policy`.
///
/// # Errors
///
/// Returns [`QueueError::AllocError`] with [`AllocationKind::Queue`] when `policy` rejects the request
/// or the allocator is exhausted.
pub fn create_with<P>(mut policy: P) -> Result<Box<StrQueue<P>>, QueueError>
where
  P: AllocationPolicy, {
  let layout = Layout::new::<StrQueue<P>>();
  if !policy.admit(AllocationKind::Queue, layout.size()) {
    tracing::warn!(kind = %AllocationKind::Queue, bytes = layout.size(), "allocation rejected by policy");
    return Err(QueueError::AllocError(AllocationKind::Queue));
  }
  // SAFETY: `StrQueue` always contains a `usize`, so the layout is not zero-sized.
  let raw = unsafe { alloc(layout) }.cast::<StrQueue<P>>();
  let Some(slot) = NonNull::new(raw) else {
    policy.release(AllocationKind::Queue, layout.size());
    tracing::warn!(kind = %AllocationKind::Queue, bytes = layout.size(), "allocator returned no memory");
    return Err(QueueError::AllocError(AllocationKind::Queue));
  };
  // SAFETY: `slot` is freshly allocated with the layout of `StrQueue<P>`, so it may be initialised and
  // then owned by a `Box`.
  unsafe {
    slot.as_ptr().write(StrQueue::with_policy(policy));
    Ok(Box::from_raw(slot.as_ptr()))
  }
}

/// Releases every element and then the queue itself. Does nothing for an absent queue.
///
/// Dropping the box directly frees the same memory but does not report the queue block back to the
/// policy.
pub fn destroy<P>(queue: Option<Box<StrQueue<P>>>)
where
  P: AllocationPolicy, {
  let Some(mut queue) = queue else {
    return;
  };
  queue.clear();
  queue.policy_mut().release(AllocationKind::Queue, Layout::new::<StrQueue<P>>().size());
}

/// Inserts a copy of `value` at the head.
///
/// # Errors
///
/// Returns [`QueueError::InvalidOperation`] for an absent queue, otherwise see
/// [`StrQueue::insert_head`].
pub fn insert_head<P>(queue: Option<&mut StrQueue<P>>, value: &str) -> Result<(), QueueError>
where
  P: AllocationPolicy, {
  queue.ok_or(QueueError::InvalidOperation)?.insert_head(value)
}

/// Inserts a copy of `value` at the tail.
///
/// # Errors
///
/// Returns [`QueueError::InvalidOperation`] for an absent queue, otherwise see
/// [`StrQueue::insert_tail`].
pub fn insert_tail<P>(queue: Option<&mut StrQueue<P>>, value: &str) -> Result<(), QueueError>
where
  P: AllocationPolicy, {
  queue.ok_or(QueueError::InvalidOperation)?.insert_tail(value)
}

/// Removes the head element, copying at most `buffer.len() - 1` bytes of it plus a NUL into `buffer`.
///
/// # Errors
///
/// Returns [`QueueError::InvalidOperation`] for an absent or empty queue.
pub fn remove_head<P>(queue: Option<&mut StrQueue<P>>, buffer: Option<&mut [u8]>) -> Result<(), QueueError>
where
  P: AllocationPolicy, {
  queue.ok_or(QueueError::InvalidOperation)?.remove_head(buffer)
}

/// Returns the number of elements, or zero for an absent queue.
#[must_use]
pub fn size<P>(queue: Option<&StrQueue<P>>) -> usize
where
  P: AllocationPolicy, {
  queue.map_or(0, StrQueue::len)
}

/// Reverses the queue in place. Does nothing for an absent queue.
pub fn reverse<P>(queue: Option<&mut StrQueue<P>>)
where
  P: AllocationPolicy, {
  if let Some(queue) = queue {
    queue.reverse();
  }
}

/// Sorts the queue in ascending byte order. Does nothing for an absent queue.
pub fn sort<P>(queue: Option<&mut StrQueue<P>>)
where
  P: AllocationPolicy, {
  if let Some(queue) = queue {
    queue.sort();
  }
}
