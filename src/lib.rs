pub mod error;
pub mod heap;
pub mod scheduling;

pub use error::ParseTaskError;
pub use heap::{BinaryHeap, Compare, Greater, Less};
pub use scheduling::{ByPriority, PriorityScheduler, Task};
