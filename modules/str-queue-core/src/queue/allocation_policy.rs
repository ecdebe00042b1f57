use crate::queue::AllocationKind;

/// Gate consulted before the queue asks the global allocator for memory.
///
/// Returning `false` from [`admit`](Self::admit) makes the pending operation fail with
/// [`QueueError::AllocError`](crate::QueueError::AllocError) exactly as if the allocator had run out of
/// memory. Every admitted block is eventually reported back through [`release`](Self::release), either
/// when it is freed or when its ownership leaves the queue.
pub trait AllocationPolicy {
  /// Decides whether an allocation of `bytes` bytes for `kind` may proceed.
  fn admit(&mut self, kind: AllocationKind, bytes: usize) -> bool;

  /// Notifies the policy that a previously admitted block is no longer owned by the queue.
  fn release(&mut self, kind: AllocationKind, bytes: usize) {
    let _ = (kind, bytes);
  }
}

impl<P> AllocationPolicy for &mut P
where
  P: AllocationPolicy + ?Sized,
{
  fn admit(&mut self, kind: AllocationKind, bytes: usize) -> bool {
    (**self).admit(kind, bytes)
  }

  fn release(&mut self, kind: AllocationKind, bytes: usize) {
    (**self).release(kind, bytes);
  }
}
