//! 只读的规范化图
//!
//! 由 [`sort`] 生成：每个顶点的出边按 (邻居, 权重) 排序，
//! 相同输入总是得到完全相同的结构。

use super::adjacency::Adjacency;
use super::edge::Edge;
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// 排序后的只读图，保留平行边
///
/// 反序列化时会校验邻居下标并重新排序，保证和 [`sort`] 的结果一致。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImmutable")]
pub struct Immutable {
    edges: Vec<Vec<(usize, i64)>>,
}

/// 未经校验的反序列化形式
#[derive(Deserialize)]
struct RawImmutable {
    edges: Vec<Vec<(usize, i64)>>,
}

impl TryFrom<RawImmutable> for Immutable {
    type Error = Error;

    fn try_from(raw: RawImmutable) -> Result<Self, Self::Error> {
        let order = raw.edges.len();
        let mut edges = raw.edges;
        for out in &mut edges {
            if let Some(&(w, _)) = out.iter().find(|&&(w, _)| w >= order) {
                return Err(Error::InvalidVertex { vertex: w, order });
            }
            out.sort_unstable();
        }
        Ok(Self { edges })
    }
}

/// 生成图的规范化只读副本
pub fn sort<G: Adjacency>(g: &G) -> Immutable {
    let edges = (0..g.order())
        .map(|v| {
            let mut out: Vec<(usize, i64)> = g.edges(v).collect();
            out.sort_unstable();
            out
        })
        .collect();
    Immutable { edges }
}

impl Immutable {
    /// 边数
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// 按 (起点, 终点, 权重) 顺序列出所有边
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .enumerate()
            .flat_map(|(v, out)| out.iter().map(move |&(w, c)| Edge::new(v, w, c)))
            .collect()
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().flatten().map(|&(_, c)| c).sum()
    }
}

impl Adjacency for Immutable {
    fn order(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self, v: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.edges[v].iter().copied()
    }

    /// 二分查找；存在平行边时返回权重最小的一条
    fn cost(&self, u: usize, v: usize) -> i64 {
        let Some(out) = self.edges.get(u) else {
            return 0;
        };
        let i = out.partition_point(|&(w, _)| w < v);
        match out.get(i) {
            Some(&(w, c)) if w == v => c,
            _ => 0,
        }
    }

    fn degree(&self, v: usize) -> usize {
        self.edges[v].len()
    }
}
