//! 图算法模块
//!
//! 包含最大流和最短路径算法

mod max_flow;
mod priority_queue;
mod shortest_path;

pub use max_flow::{max_flow, MaxFlow};
pub use priority_queue::IndexedQueue;
pub use shortest_path::{shortest_path, shortest_paths, ShortestPaths};
