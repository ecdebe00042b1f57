use alloc::{vec, vec::Vec};

use super::*;
use crate::{queue::terminated, FaultInjectingAllocation};

fn contents<P: AllocationPolicy>(queue: &StrQueue<P>) -> Vec<&str> {
  queue.iter().collect()
}

#[test]
fn create_returns_empty_queue() {
  let queue = create().unwrap();
  assert_eq!(size(Some(&*queue)), 0);
  queue.validate();
  destroy(Some(queue));
}

#[test]
fn create_reports_rejected_queue_allocation() {
  let mut faults = FaultInjectingAllocation::new().only(AllocationKind::Queue).fail_after(0);
  let result = create_with(&mut faults);
  assert!(matches!(result, Err(QueueError::AllocError(AllocationKind::Queue))));
  drop(result);
  assert!(faults.is_balanced());
}

#[test]
fn destroy_reports_every_block() {
  let mut faults = FaultInjectingAllocation::new();
  let mut queue = create_with(&mut faults).unwrap();
  insert_tail(Some(&mut *queue), "a").unwrap();
  insert_tail(Some(&mut *queue), "b").unwrap();
  destroy(Some(queue));
  assert!(faults.is_balanced());
  assert_eq!(faults.admitted(), 5);
}

#[test]
fn destroy_of_absent_queue_is_noop() {
  destroy::<SystemAllocation>(None);
}

#[test]
fn absent_queue_rejects_mutation() {
  let mut buffer = [0x55_u8; 4];
  assert_eq!(insert_head::<SystemAllocation>(None, "x"), Err(QueueError::InvalidOperation));
  assert_eq!(insert_tail::<SystemAllocation>(None, "x"), Err(QueueError::InvalidOperation));
  assert_eq!(remove_head::<SystemAllocation>(None, Some(&mut buffer)), Err(QueueError::InvalidOperation));
  assert_eq!(buffer, [0x55; 4]);
}

#[test]
fn absent_queue_queries_are_harmless() {
  assert_eq!(size::<SystemAllocation>(None), 0);
  reverse::<SystemAllocation>(None);
  sort::<SystemAllocation>(None);
}

#[test]
fn remove_from_empty_queue_fails() {
  let mut queue = create().unwrap();
  assert_eq!(remove_head(Some(&mut *queue), None), Err(QueueError::InvalidOperation));
  queue.validate();
  destroy(Some(queue));
}

#[test]
fn operations_forward_to_queue() {
  let mut queue = create().unwrap();
  insert_tail(Some(&mut *queue), "b").unwrap();
  insert_tail(Some(&mut *queue), "a").unwrap();
  insert_tail(Some(&mut *queue), "c").unwrap();
  insert_head(Some(&mut *queue), "d").unwrap();
  assert_eq!(size(Some(&*queue)), 4);

  sort(Some(&mut *queue));
  assert_eq!(contents(&*queue), vec!["a", "b", "c", "d"]);

  reverse(Some(&mut *queue));
  assert_eq!(contents(&*queue), vec!["d", "c", "b", "a"]);

  let mut buffer = [0_u8; 8];
  remove_head(Some(&mut *queue), Some(&mut buffer)).unwrap();
  assert_eq!(terminated(&buffer), b"d");
  assert_eq!(size(Some(&*queue)), 3);
  queue.validate();
  destroy(Some(queue));
}
