use alloc::{
  alloc::{alloc, dealloc, Layout},
  boxed::Box,
  string::String,
};
use core::ptr::NonNull;

/// Owning link to the next node. `None` terminates the chain.
pub(crate) type Link = Option<NonNull<Node>>;

/// Chain element holding one privately owned string.
pub(crate) struct Node {
  value: String,
  next:  Link,
}

impl Node {
  /// Memory layout of a single node.
  pub(crate) const LAYOUT: Layout = Layout::new::<Self>();

  /// Obtains uninitialised memory for one node, or `None` when the allocator is exhausted.
  pub(crate) fn reserve() -> Option<NonNull<Self>> {
    // SAFETY: `Node` holds a `String`, so `LAYOUT` is never zero-sized.
    let raw = unsafe { alloc(Self::LAYOUT) };
    NonNull::new(raw.cast::<Self>())
  }

  /// Returns memory obtained from [`reserve`](Self::reserve) without initialising it.
  ///
  /// # Safety
  ///
  /// `slot` must come from `reserve` and must not have been passed to [`init`](Self::init).
  pub(crate) unsafe fn unreserve(slot: NonNull<Self>) {
    // SAFETY: the caller guarantees `slot` was allocated with `LAYOUT` and holds no live value.
    unsafe { dealloc(slot.as_ptr().cast::<u8>(), Self::LAYOUT) };
  }

  /// Writes a detached node carrying `value` into reserved memory.
  ///
  /// # Safety
  ///
  /// `slot` must come from [`reserve`](Self::reserve) and must not be initialised yet.
  pub(crate) unsafe fn init(slot: NonNull<Self>, value: String) -> NonNull<Self> {
    // SAFETY: `slot` is valid for writes of `Self` and uninitialised per the caller.
    unsafe { slot.as_ptr().write(Self { value, next: None }) };
    slot
  }

  /// Frees a detached node and hands its string back to the caller.
  ///
  /// # Safety
  ///
  /// `node` must have been produced by [`init`](Self::init), must no longer be reachable from any chain,
  /// and must not be used afterwards.
  pub(crate) unsafe fn into_value(node: NonNull<Self>) -> String {
    // SAFETY: the memory was allocated by the global allocator with `Layout::new::<Node>()` and holds an
    // initialised node, which is exactly what `Box::from_raw` requires.
    let boxed = unsafe { Box::from_raw(node.as_ptr()) };
    let Self { value, .. } = *boxed;
    value
  }

  /// Frees a detached node, dropping its string before the node memory itself.
  ///
  /// # Safety
  ///
  /// Same requirements as [`into_value`](Self::into_value).
  pub(crate) unsafe fn destroy(node: NonNull<Self>) {
    // SAFETY: see `into_value`; dropping the box drops `value` and then deallocates the node.
    drop(unsafe { Box::from_raw(node.as_ptr()) });
  }

  /// # Safety
  ///
  /// `node` must point to an initialised node.
  pub(crate) unsafe fn next(node: NonNull<Self>) -> Link {
    // SAFETY: guaranteed by the caller.
    unsafe { (*node.as_ptr()).next }
  }

  /// # Safety
  ///
  /// `node` must point to an initialised node that no shared reference currently observes.
  pub(crate) unsafe fn set_next(node: NonNull<Self>, next: Link) {
    // SAFETY: guaranteed by the caller.
    unsafe { (*node.as_ptr()).next = next };
  }

  /// # Safety
  ///
  /// `node` must point to an initialised node that outlives `'a` and whose string is not modified
  /// during `'a`.
  pub(crate) unsafe fn value<'a>(node: NonNull<Self>) -> &'a str {
    // SAFETY: guaranteed by the caller.
    unsafe { (*node.as_ptr()).value.as_str() }
  }
}

/// Copies `text` into a freshly allocated string, or returns `None` when the allocation fails.
pub(crate) fn copy_value(text: &str) -> Option<String> {
  let mut value = String::new();
  value.try_reserve_exact(text.len()).ok()?;
  value.push_str(text);
  Some(value)
}
