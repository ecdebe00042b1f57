use alloc::{boxed::Box, string::String};
use core::{fmt, marker::PhantomData, ptr::NonNull};

use crate::queue::{
  chain,
  node::{copy_value, Link, Node},
  truncating_copy, AllocationKind, AllocationPolicy, Iter, QueueError, SystemAllocation,
};


/// Singly-linked queue of owned strings.
///
/// Every element lives in its own heap node and every string is a private copy of the text passed to
/// an insert. `head` and `tail` are both absent exactly when the queue is empty; otherwise `tail` is the
/// node reached after `len - 1` steps from `head`.
///
/// Allocation requests pass through the policy `P` first. A rejected or failed allocation surfaces as
/// [`QueueError::AllocError`] and leaves the queue untouched.
pub struct StrQueue<P = SystemAllocation>
where
  P: AllocationPolicy, {
  head:   Link,
  tail:   Link,
  len:    usize,
  policy: P,
  _owns:  PhantomData<Box<Node>>,
}

impl StrQueue<SystemAllocation> {
  /// Creates an empty queue backed by the global allocator.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_policy(SystemAllocation)
  }
}

impl Default for StrQueue<SystemAllocation> {
  fn default() -> Self {
    Self::new()
  }
}

impl<P> StrQueue<P>
where
  P: AllocationPolicy,
{
  /// Creates an empty queue whose allocations are gated by `policy`.
  #[must_use]
  pub const fn with_policy(policy: P) -> Self {
    Self { head: None, tail: None, len: 0, policy, _owns: PhantomData }
  }

  /// Returns the number of stored strings.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the string at the head, if any.
  #[must_use]
  pub fn front(&self) -> Option<&str> {
    // SAFETY: the head node is owned by `self` and cannot change while `self` is borrowed.
    self.head.map(|node| unsafe { Node::value(node) })
  }

  /// Returns the string at the tail, if any.
  #[must_use]
  pub fn back(&self) -> Option<&str> {
    // SAFETY: the tail node is owned by `self` and cannot change while `self` is borrowed.
    self.tail.map(|node| unsafe { Node::value(node) })
  }

  /// Iterates over the stored strings from head to tail.
  #[must_use]
  pub const fn iter(&self) -> Iter<'_> {
    Iter::new(self.head, self.len)
  }

  /// Provides access to the allocation policy.
  #[must_use]
  pub const fn policy(&self) -> &P {
    &self.policy
  }

  /// Provides mutable access to the allocation policy.
  pub fn policy_mut(&mut self) -> &mut P {
    &mut self.policy
  }

  /// Inserts a copy of `value` at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] when the node or the string copy cannot be allocated. A node
  /// obtained before the string copy failed is released again, so the queue is unchanged.
  pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
    let node = self.allocate_node(value)?;
    // SAFETY: `node` was just created and is not yet reachable from the chain.
    unsafe { Node::set_next(node, self.head) };
    self.head = Some(node);
    if self.tail.is_none() {
      self.tail = Some(node);
    }
    self.len += 1;
    Ok(())
  }

  /// Inserts a copy of `value` at the tail in constant time.
  ///
  /// # Errors
  ///
  /// Same as [`insert_head`](Self::insert_head).
  pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
    let node = self.allocate_node(value)?;
    match self.tail {
      // SAFETY: `tail` is the last node of the chain owned by `self`.
      | Some(tail) => unsafe { Node::set_next(tail, Some(node)) },
      | None => self.head = Some(node),
    }
    self.tail = Some(node);
    self.len += 1;
    Ok(())
  }

  /// Removes the head element, copying its string into `buffer` first.
  ///
  /// At most `buffer.len() - 1` bytes are copied, followed by a NUL terminator; longer strings are
  /// truncated silently. With `None` the string is discarded.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidOperation`] when the queue is empty. Nothing is modified in that case.
  pub fn remove_head(&mut self, buffer: Option<&mut [u8]>) -> Result<(), QueueError> {
    let node = self.detach_head()?;
    if let Some(buffer) = buffer {
      // SAFETY: `node` is detached and still initialised.
      let value = unsafe { Node::value(node) };
      truncating_copy(value.as_bytes(), buffer);
    }
    self.free(node);
    Ok(())
  }

  /// Removes the head element and hands its string to the caller.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidOperation`] when the queue is empty.
  pub fn pop_head(&mut self) -> Result<String, QueueError> {
    let node = self.detach_head()?;
    // SAFETY: `node` is detached and not used again.
    let value = unsafe { Node::into_value(node) };
    self.policy.release(AllocationKind::Node, Node::LAYOUT.size());
    self.policy.release(AllocationKind::Value, value.len());
    Ok(value)
  }

  /// Reverses the order of the elements without allocating.
  pub fn reverse(&mut self) {
    if self.head.is_none() {
      return;
    }
    tracing::trace!(len = self.len, "reversing queue");
    self.tail = self.head;
    // SAFETY: the chain is owned by `self`; the old head becomes the terminal node.
    self.head = unsafe { chain::reverse(self.head) };
  }

  /// Sorts the elements in ascending byte order with a stable in-place merge sort.
  pub fn sort(&mut self) {
    if self.len < 2 {
      return;
    }
    tracing::trace!(len = self.len, "sorting queue");
    // SAFETY: the chain is owned by `self`. The previous tail is still a member of the sorted chain, so
    // walking forward from it reaches the new tail.
    unsafe {
      self.head = chain::merge_sort(self.head);
      self.tail = chain::last(self.tail);
    }
  }

  /// Releases every element, leaving an empty queue.
  pub fn clear(&mut self) {
    let mut cursor = self.head.take();
    self.tail = None;
    self.len = 0;
    while let Some(node) = cursor {
      // SAFETY: the chain was detached from `self` above; each node is visited once.
      cursor = unsafe { Node::next(node) };
      self.free(node);
    }
  }

  fn detach_head(&mut self) -> Result<NonNull<Node>, QueueError> {
    let node = self.head.ok_or(QueueError::InvalidOperation)?;
    // SAFETY: `node` is the head of the chain owned by `self`.
    self.head = unsafe { Node::next(node) };
    self.len -= 1;
    if self.len == 0 {
      self.tail = None;
    }
    Ok(node)
  }

  fn free(&mut self, node: NonNull<Node>) {
    // SAFETY: callers pass a node they detached from the chain; it is not touched afterwards.
    let bytes = unsafe { Node::value(node) }.len();
    // SAFETY: as above.
    unsafe { Node::destroy(node) };
    self.policy.release(AllocationKind::Value, bytes);
    self.policy.release(AllocationKind::Node, Node::LAYOUT.size());
  }

  fn allocate_node(&mut self, value: &str) -> Result<NonNull<Node>, QueueError> {
    let slot = self.reserve_node()?;
    match self.copy_string(value) {
      // SAFETY: `slot` came from `reserve_node` and is still uninitialised.
      | Ok(copy) => Ok(unsafe { Node::init(slot, copy) }),
      | Err(error) => {
        // SAFETY: `slot` was never initialised.
        unsafe { Node::unreserve(slot) };
        self.policy.release(AllocationKind::Node, Node::LAYOUT.size());
        Err(error)
      },
    }
  }

  fn reserve_node(&mut self) -> Result<NonNull<Node>, QueueError> {
    let bytes = Node::LAYOUT.size();
    self.admit(AllocationKind::Node, bytes)?;
    Node::reserve().ok_or_else(|| self.allocator_exhausted(AllocationKind::Node, bytes))
  }

  fn copy_string(&mut self, value: &str) -> Result<String, QueueError> {
    self.admit(AllocationKind::Value, value.len())?;
    copy_value(value).ok_or_else(|| self.allocator_exhausted(AllocationKind::Value, value.len()))
  }

  fn admit(&mut self, kind: AllocationKind, bytes: usize) -> Result<(), QueueError> {
    if self.policy.admit(kind, bytes) {
      Ok(())
    } else {
      tracing::warn!(%kind, bytes, "allocation rejected by policy");
      Err(QueueError::AllocError(kind))
    }
  }

  fn allocator_exhausted(&mut self, kind: AllocationKind, bytes: usize) -> QueueError {
    self.policy.release(kind, bytes);
    tracing::warn!(%kind, bytes, "allocator returned no memory");
    QueueError::AllocError(kind)
  }

  #[cfg(test)]
  pub(crate) fn validate(&self) {
    if self.len == 0 {
      assert!(self.head.is_none(), "empty queue must not have a head");
      assert!(self.tail.is_none(), "empty queue must not have a tail");
      return;
    }
    let mut steps = 0;
    let mut last = None;
    let mut cursor = self.head;
    while let Some(node) = cursor {
      steps += 1;
      assert!(steps <= self.len, "chain is longer than len or cyclic");
      last = Some(node);
      // SAFETY: bounded by `len`, so every visited node belongs to the chain.
      cursor = unsafe { Node::next(node) };
    }
    assert_eq!(steps, self.len, "chain is shorter than len");
    assert_eq!(last, self.tail, "tail is not the last node");
  }
}

impl<P> Drop for StrQueue<P>
where
  P: AllocationPolicy,
{
  fn drop(&mut self) {
    if self.len > 0 {
      tracing::debug!(len = self.len, "destroying non-empty queue");
    }
    self.clear();
  }
}

impl<P> fmt::Debug for StrQueue<P>
where
  P: AllocationPolicy,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, P> IntoIterator for &'a StrQueue<P>
where
  P: AllocationPolicy,
{
  type IntoIter = Iter<'a>;
  type Item = &'a str;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
