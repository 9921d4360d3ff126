//! FlowGraph - 带权有向图上的经典图算法
//!
//! 顶点为 `0..n` 的整数编号，提供：
//! - Edmonds-Karp 最大流（含最小割）
//! - 基于索引优先队列的 Dijkstra 单源最短路径
//! - 边列表（CSV / JSON Lines）导入

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{max_flow, shortest_path, shortest_paths, MaxFlow, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{sort, Adjacency, Edge, Immutable, Mutable, MAX_COST};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
