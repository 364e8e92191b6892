pub mod priority_queue;
pub mod radix_queue;

pub use priority_queue::{BinaryCostHeap, CostQueue};
pub use radix_queue::RadixQueue;
