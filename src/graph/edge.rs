//! 边定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 带权有向边
///
/// 权重在最大流中表示容量，在最短路径中表示代价。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// 起点
    pub from: usize,
    /// 终点
    pub to: usize,
    /// 权重
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

impl From<(usize, usize, i64)> for Edge {
    fn from((from, to, weight): (usize, usize, i64)) -> Self {
        Self { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
