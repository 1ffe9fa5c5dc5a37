pub mod queue;
pub mod randomized;
pub mod sort;

// Re-export all modules
pub use queue::*;
pub use randomized::*;
pub use sort::*;
