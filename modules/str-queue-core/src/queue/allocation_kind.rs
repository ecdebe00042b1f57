use core::fmt;

/// Identifies which allocation a queue operation is requesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocationKind {
  /// The queue structure itself, requested by [`facade::create`](crate::facade::create).
  Queue,
  /// A chain node.
  Node,
  /// The private copy of an inserted string.
  Value,
}

impl AllocationKind {
  pub(crate) const fn index(self) -> usize {
    match self {
      | Self::Queue => 0,
      | Self::Node => 1,
      | Self::Value => 2,
    }
  }
}

impl fmt::Display for AllocationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Queue => f.write_str("queue"),
      | Self::Node => f.write_str("node"),
      | Self::Value => f.write_str("string value"),
    }
  }
}
