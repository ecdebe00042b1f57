//! Relinking algorithms over a raw node chain.
//!
//! Every function here takes a chain the caller owns exclusively and returns it rearranged. Nodes are
//! never allocated, freed or copied; only `next` links change.

use core::ptr::NonNull;

use crate::queue::node::{Link, Node};


/// Reverses the direction of every link and returns the new head.
///
/// # Safety
///
/// `head` must start a well-formed, acyclic chain owned by the caller.
pub(crate) unsafe fn reverse(head: Link) -> Link {
  let mut reversed: Link = None;
  let mut cursor = head;
  while let Some(node) = cursor {
    // SAFETY: `node` belongs to the caller's chain.
    unsafe {
      cursor = Node::next(node);
      Node::set_next(node, reversed);
    }
    reversed = Some(node);
  }
  reversed
}

/// Walks to the last node of the chain.
///
/// # Safety
///
/// `head` must start a well-formed, acyclic chain.
pub(crate) unsafe fn last(head: Link) -> Link {
  let mut cursor = head?;
  // SAFETY: every node reached belongs to the caller's chain.
  while let Some(next) = unsafe { Node::next(cursor) } {
    cursor = next;
  }
  Some(cursor)
}

/// Sorts the chain in ascending byte order and returns the new head.
///
/// Equal strings keep their relative order. Recursion depth is logarithmic in the chain length.
///
/// # Safety
///
/// `head` must start a well-formed, acyclic chain owned by the caller.
pub(crate) unsafe fn merge_sort(head: Link) -> Link {
  let first = head?;
  // SAFETY: `first` belongs to the caller's chain.
  if unsafe { Node::next(first) }.is_none() {
    return head;
  }
  // SAFETY: both halves are disjoint chains still owned by the caller.
  unsafe {
    let second = split_at_midpoint(first);
    let left = merge_sort(head);
    let right = merge_sort(second);
    merge(left, right)
  }
}

/// Cuts the chain behind its midpoint and returns the second half.
///
/// The fast cursor starts one node ahead of the slow one, so an odd-length chain leaves the extra node
/// in the first half.
///
/// # Safety
///
/// `head` must start a well-formed, acyclic chain owned by the caller.
unsafe fn split_at_midpoint(head: NonNull<Node>) -> Link {
  let mut slow = head;
  // SAFETY: all nodes visited belong to the caller's chain.
  unsafe {
    let mut fast = Node::next(head);
    while let Some(ahead) = fast.and_then(|node| Node::next(node)) {
      match Node::next(slow) {
        | Some(next) => slow = next,
        | None => break,
      }
      fast = Node::next(ahead);
    }
    let second = Node::next(slow);
    Node::set_next(slow, None);
    second
  }
}

/// Merges two ascending chains into one, taking from `left` on ties.
///
/// # Safety
///
/// `left` and `right` must be disjoint, well-formed chains owned by the caller.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
  let mut head: Link = None;
  let mut tail: Link = None;
  while let (Some(l), Some(r)) = (left, right) {
    // SAFETY: `l` and `r` are live nodes of the caller's chains.
    let picked = unsafe {
      if Node::value(l) <= Node::value(r) {
        left = Node::next(l);
        l
      } else {
        right = Node::next(r);
        r
      }
    };
    match tail {
      // SAFETY: `last` is the most recently merged node and nothing else observes it.
      | Some(last) => unsafe { Node::set_next(last, Some(picked)) },
      | None => head = Some(picked),
    }
    tail = Some(picked);
  }

  let rest = left.or(right);
  match tail {
    // SAFETY: as above.
    | Some(last) => unsafe { Node::set_next(last, rest) },
    | None => head = rest,
  }
  head
}
