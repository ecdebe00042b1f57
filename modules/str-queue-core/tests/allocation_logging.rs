#![cfg(feature = "std")]

use std::{
  io::Write,
  sync::{Arc, Mutex},
};

use cellex_str_queue_core_rs::{facade, AllocationKind, FaultInjectingAllocation, StrQueue};
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

fn capture<F: FnOnce()>(body: F) -> String {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_max_level(tracing::Level::TRACE)
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  with_default(subscriber, body);

  let bytes = buffer.lock().unwrap().clone();
  String::from_utf8(bytes).unwrap()
}

#[test]
fn rejected_insert_emits_warning() {
  let output = capture(|| {
    let mut queue = StrQueue::with_policy(FaultInjectingAllocation::new().only(AllocationKind::Value).fail_after(0));
    assert!(queue.insert_tail("refused").is_err());
  });

  assert!(output.contains("WARN"), "missing level in {output}");
  assert!(output.contains("allocation rejected by policy"), "missing message in {output}");
  assert!(output.contains("kind=string value"), "missing kind in {output}");
  assert!(output.contains("bytes=7"), "missing size in {output}");
}

#[test]
fn rejected_create_emits_warning() {
  let output = capture(|| {
    let result = facade::create_with(FaultInjectingAllocation::new().only(AllocationKind::Queue).fail_after(0));
    assert!(result.is_err());
  });

  assert!(output.contains("kind=queue"), "missing kind in {output}");
}

#[test]
fn reorder_and_destroy_are_traced() {
  let output = capture(|| {
    let mut queue = StrQueue::new();
    queue.insert_tail("b").unwrap();
    queue.insert_tail("a").unwrap();
    queue.sort();
    queue.reverse();
  });

  assert!(output.contains("sorting queue"), "missing sort trace in {output}");
  assert!(output.contains("reversing queue"), "missing reverse trace in {output}");
  assert!(output.contains("destroying non-empty queue"), "missing destroy event in {output}");
  assert!(output.contains("len=2"), "missing len field in {output}");
}
