use core::{iter::FusedIterator, marker::PhantomData};

use crate::queue::node::{Link, Node};

/// Head-to-tail iterator over the strings of a [`StrQueue`](crate::StrQueue).
pub struct Iter<'a> {
  cursor:    Link,
  remaining: usize,
  _marker:   PhantomData<&'a Node>,
}

impl<'a> Iter<'a> {
  pub(crate) const fn new(head: Link, len: usize) -> Self {
    Self { cursor: head, remaining: len, _marker: PhantomData }
  }
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.cursor?;
    // SAFETY: the iterator borrows the queue for `'a`, so every node stays alive and unmodified.
    let (value, next) = unsafe { (Node::value(node), Node::next(node)) };
    self.cursor = next;
    self.remaining = self.remaining.saturating_sub(1);
    Some(value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
