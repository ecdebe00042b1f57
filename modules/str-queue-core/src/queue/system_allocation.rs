use crate::queue::{AllocationKind, AllocationPolicy};

/// Policy that admits every request and leaves failure reporting to the global allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemAllocation;

impl AllocationPolicy for SystemAllocation {
  fn admit(&mut self, _kind: AllocationKind, _bytes: usize) -> bool {
    true
  }
}
