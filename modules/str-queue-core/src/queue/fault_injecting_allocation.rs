use crate::queue::{AllocationKind, AllocationPolicy};


const KINDS: usize = 3;

/// Policy that rejects allocations on a deterministic schedule and tracks live blocks.
///
/// Requests are counted per matching kind (all kinds unless [`only`](Self::only) narrows it). A request
/// is rejected when its ordinal exceeds the [`fail_after`](Self::fail_after) budget or is a multiple of
/// the [`fail_every`](Self::fail_every) period. Admitted blocks stay "live" until released, which lets a
/// test assert that nothing leaked after a queue is dropped.
///
/// Pass it by mutable reference so the counters can be inspected once the queue is gone:
///
/// ```
/// use cellex_str_queue_core_rs::{AllocationKind, FaultInjectingAllocation, StrQueue};
///
/// let mut faults = FaultInjectingAllocation::new().only(AllocationKind::Value).fail_after(1);
/// {
///   let mut queue = StrQueue::with_policy(&mut faults);
///   assert!(queue.insert_tail("kept").is_ok());
///   assert!(queue.insert_tail("rejected").is_err());
///   assert_eq!(queue.len(), 1);
/// }
/// assert!(faults.is_balanced());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultInjectingAllocation {
  only:        Option<AllocationKind>,
  fail_after:  Option<usize>,
  fail_every:  Option<usize>,
  requests:    usize,
  admitted:    usize,
  rejected:    usize,
  live_blocks: [usize; KINDS],
  live_bytes:  [usize; KINDS],
}

impl FaultInjectingAllocation {
  /// Creates a policy that admits everything until configured otherwise.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      only:        None,
      fail_after:  None,
      fail_every:  None,
      requests:    0,
      admitted:    0,
      rejected:    0,
      live_blocks: [0; KINDS],
      live_bytes:  [0; KINDS],
    }
  }

  /// Admits the first `budget` matching requests and rejects every one after that.
  #[must_use]
  pub const fn fail_after(mut self, budget: usize) -> Self {
    self.fail_after = Some(budget);
    self
  }

  /// Rejects every `period`-th matching request. A period of zero disables periodic failures.
  #[must_use]
  pub const fn fail_every(mut self, period: usize) -> Self {
    self.fail_every = if period == 0 { None } else { Some(period) };
    self
  }

  /// Restricts failure injection to requests of a single kind.
  #[must_use]
  pub const fn only(mut self, kind: AllocationKind) -> Self {
    self.only = Some(kind);
    self
  }

  /// Stops injecting failures while keeping the live-block accounting.
  pub fn disarm(&mut self) {
    self.fail_after = None;
    self.fail_every = None;
  }

  /// Number of matching requests seen so far, admitted or not.
  #[must_use]
  pub const fn requests(&self) -> usize {
    self.requests
  }

  /// Number of admitted requests across all kinds.
  #[must_use]
  pub const fn admitted(&self) -> usize {
    self.admitted
  }

  /// Number of rejected requests.
  #[must_use]
  pub const fn rejected(&self) -> usize {
    self.rejected
  }

  /// Blocks of `kind` admitted and not yet released.
  #[must_use]
  pub const fn live_blocks(&self, kind: AllocationKind) -> usize {
    self.live_blocks[kind.index()]
  }

  /// Bytes of `kind` admitted and not yet released.
  #[must_use]
  pub const fn live_bytes(&self, kind: AllocationKind) -> usize {
    self.live_bytes[kind.index()]
  }

  /// Returns `true` when every admitted block has been released.
  #[must_use]
  pub fn is_balanced(&self) -> bool {
    self.live_blocks.iter().all(|count| *count == 0)
  }

  fn matches(&self, kind: AllocationKind) -> bool {
    self.only.map_or(true, |only| only == kind)
  }

  fn should_reject(&self) -> bool {
    let over_budget = self.fail_after.is_some_and(|budget| self.requests > budget);
    let periodic = self.fail_every.is_some_and(|period| self.requests % period == 0);
    over_budget || periodic
  }
}

impl AllocationPolicy for FaultInjectingAllocation {
  fn admit(&mut self, kind: AllocationKind, bytes: usize) -> bool {
    if self.matches(kind) {
      self.requests += 1;
      if self.should_reject() {
        self.rejected += 1;
        return false;
      }
    }
    self.admitted += 1;
    self.live_blocks[kind.index()] += 1;
    self.live_bytes[kind.index()] += bytes;
    true
  }

  fn release(&mut self, kind: AllocationKind, bytes: usize) {
    let slot = kind.index();
    self.live_blocks[slot] = self.live_blocks[slot].saturating_sub(1);
    self.live_bytes[slot] = self.live_bytes[slot].saturating_sub(bytes);
  }
}
