pub mod cs;
pub mod error;

pub use cs::{queue, randomized, sort};
pub use cs::{Queue, RandomizedQueue, StreamChooseK};
pub use error::{Error, Result};
