pub mod randomized_queue;
pub mod stream_choose_k;

pub use randomized_queue::RandomizedQueue;
pub use stream_choose_k::StreamChooseK;
