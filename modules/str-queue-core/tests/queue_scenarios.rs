use cellex_str_queue_core_rs::{
  facade, terminated, AllocationKind, FaultInjectingAllocation, QueueError, StrQueue,
};

fn contents(queue: &StrQueue) -> Vec<String> {
  queue.iter().map(String::from).collect()
}

#[test]
fn sort_reverse_and_truncated_removal() {
  let mut queue = facade::create().expect("create queue");
  assert_eq!(facade::size(Some(&*queue)), 0);

  for value in ["b", "a", "c"] {
    facade::insert_tail(Some(&mut *queue), value).expect("insert tail");
  }
  assert_eq!(contents(&queue), ["b", "a", "c"]);
  assert_eq!(facade::size(Some(&*queue)), 3);

  facade::sort(Some(&mut *queue));
  assert_eq!(contents(&queue), ["a", "b", "c"]);

  facade::reverse(Some(&mut *queue));
  assert_eq!(contents(&queue), ["c", "b", "a"]);

  let mut buffer = [0xff_u8; 2];
  facade::remove_head(Some(&mut *queue), Some(&mut buffer)).expect("remove head");
  assert_eq!(&buffer, b"c\0");
  assert_eq!(facade::size(Some(&*queue)), 2);

  facade::destroy(Some(queue));
}

#[test]
fn single_element_lifecycle_clears_both_ends() {
  let mut queue = facade::create().expect("create queue");
  facade::insert_head(Some(&mut *queue), "x").expect("insert head");
  assert_eq!(queue.front(), Some("x"));
  assert_eq!(queue.back(), Some("x"));

  facade::remove_head(Some(&mut *queue), None).expect("remove head");
  assert_eq!(facade::size(Some(&*queue)), 0);
  assert_eq!(queue.front(), None);
  assert_eq!(queue.back(), None);

  facade::insert_tail(Some(&mut *queue), "y").expect("insert after emptying");
  assert_eq!(contents(&queue), ["y"]);
  facade::destroy(Some(queue));
}

#[test]
fn long_values_are_truncated_silently() {
  let mut queue = StrQueue::new();
  queue.insert_tail("a considerably longer string").expect("insert");

  let mut buffer = [0_u8; 11];
  queue.remove_head(Some(&mut buffer)).expect("remove");
  assert_eq!(terminated(&buffer), b"a consider");
  assert!(queue.is_empty());
}

#[test]
fn workload_survives_random_allocation_failures() {
  let mut faults = FaultInjectingAllocation::new().fail_every(7);
  let mut expected: Vec<String> = Vec::new();
  {
    let mut queue = StrQueue::with_policy(&mut faults);
    for round in 0..200_u32 {
      let value = format!("item-{:03}", (round * 37) % 101);
      let outcome = if round % 2 == 0 { queue.insert_tail(&value) } else { queue.insert_head(&value) };
      match outcome {
        | Ok(()) if round % 2 == 0 => expected.push(value),
        | Ok(()) => expected.insert(0, value),
        | Err(error) => assert!(error.is_alloc_error(), "unexpected error {error}"),
      }
      if round % 5 == 4 {
        let removed = queue.pop_head().expect("queue is not empty");
        assert_eq!(removed, expected.remove(0));
      }
      assert_eq!(queue.len(), expected.len());
    }

    queue.sort();
    expected.sort();
    let sorted: Vec<&str> = queue.iter().collect();
    assert_eq!(sorted, expected);
    assert!(queue.policy().rejected() > 0);
  }
  assert!(faults.is_balanced());
  assert_eq!(faults.live_blocks(AllocationKind::Value), 0);
}

#[test]
fn errors_render_for_humans() {
  assert_eq!(QueueError::AllocError(AllocationKind::Value).to_string(), "failed to allocate string value");
  assert_eq!(QueueError::InvalidOperation.to_string(), "invalid operation on an absent or empty queue");
  assert_eq!(QueueError::AllocError(AllocationKind::Node).allocation_kind(), Some(AllocationKind::Node));
  assert_eq!(QueueError::InvalidOperation.allocation_kind(), None);
}
