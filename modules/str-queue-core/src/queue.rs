//! Linked string queue and its allocation seam.

mod allocation_kind;
mod allocation_policy;
mod bounded_copy;
mod chain;
/// Free-function API over an optional queue handle.
pub mod facade;
mod fault_injecting_allocation;
mod iter;
mod node;
mod queue_error;
mod str_queue;
mod system_allocation;

pub use allocation_kind::AllocationKind;
pub use allocation_policy::AllocationPolicy;
pub use bounded_copy::{terminated, truncating_copy};
pub use fault_injecting_allocation::FaultInjectingAllocation;
pub use iter::Iter;
pub use queue_error::QueueError;
pub use str_queue::StrQueue;
pub use system_allocation::SystemAllocation;
