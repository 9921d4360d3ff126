//! 可修改的邻接表图
//!
//! 顶点是数组下标，每个顶点的出边保存在按邻居排序的 `BTreeMap` 中，
//! 因此遍历顺序固定，算法结果可复现。

use super::adjacency::Adjacency;
use super::edge::Edge;
use crate::error::Result;
use std::collections::BTreeMap;

/// 可修改的图
///
/// 同一对顶点之间最多一条边；`add_cost` 对已有边累加权重。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutable {
    edges: Vec<BTreeMap<usize, i64>>,
}

impl Mutable {
    /// 创建 `n` 个顶点、没有边的图
    pub fn new(n: usize) -> Self {
        Self {
            edges: vec![BTreeMap::new(); n],
        }
    }

    /// 由边列表构建，平行边的权重会被累加
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut g = Self::new(n);
        for e in edges {
            g.check_vertex(e.from)?;
            g.check_vertex(e.to)?;
            g.add_cost(e.from, e.to, e.weight);
        }
        Ok(g)
    }

    /// 复制任意图的全部边
    pub fn copy<G: Adjacency>(g: &G) -> Self {
        let mut res = Self::new(g.order());
        for v in 0..g.order() {
            for (w, c) in g.edges(v) {
                res.add_cost(v, w, c);
            }
        }
        res
    }

    /// 设置边 `(u, v)` 的权重，边不存在时创建
    ///
    /// # Panics
    /// 顶点越界时 panic。
    pub fn set_cost(&mut self, u: usize, v: usize, c: i64) {
        assert!(v < self.edges.len(), "顶点越界: {}", v);
        self.edges[u].insert(v, c);
    }

    /// 给边 `(u, v)` 的权重加上 `delta`，边不存在时以 0 为初值创建
    ///
    /// 结果在 `i64` 范围内饱和，不会溢出。
    ///
    /// # Panics
    /// 顶点越界时 panic。
    pub fn add_cost(&mut self, u: usize, v: usize, delta: i64) {
        assert!(v < self.edges.len(), "顶点越界: {}", v);
        let c = self.edges[u].entry(v).or_insert(0);
        *c = c.saturating_add(delta);
    }

    /// 删除边 `(u, v)`，返回原权重
    pub fn delete(&mut self, u: usize, v: usize) -> Option<i64> {
        self.edges.get_mut(u)?.remove(&v)
    }

    /// 边 `(u, v)` 是否存在（权重为 0 的边也算存在）
    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.edges.get(u).is_some_and(|m| m.contains_key(&v))
    }

    /// 边数
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(BTreeMap::len).sum()
    }
}

impl Adjacency for Mutable {
    fn order(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self, v: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.edges[v].iter().map(|(&w, &c)| (w, c))
    }

    fn cost(&self, u: usize, v: usize) -> i64 {
        self.edges
            .get(u)
            .and_then(|m| m.get(&v))
            .copied()
            .unwrap_or(0)
    }

    fn degree(&self, v: usize) -> usize {
        self.edges[v].len()
    }
}
