//! 图核心模块
//!
//! 定义算法所依赖的图访问抽象，以及两种具体的图实现：
//! - [`Mutable`]：可修改的邻接表，用作残量图和结果图的构建器
//! - [`Immutable`]：排序后的只读邻接表，用于输出规范化的结果

mod adjacency;
mod edge;
mod immutable;
mod mutable;

pub use adjacency::{Adjacency, MAX_COST};
pub use edge::Edge;
pub use immutable::{sort, Immutable};
pub use mutable::Mutable;
