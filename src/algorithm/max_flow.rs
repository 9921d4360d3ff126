//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 输入图的权重视为容量，必须非负；负容量的结果没有保证。

use crate::error::Result;
use crate::graph::{sort, Adjacency, Edge, Immutable, Mutable, MAX_COST};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: i64,
    /// 流量分配：每条边的权重是该边上的正流量
    pub graph: Immutable,
    /// 最小割的源侧顶点（升序）
    pub source_side: Vec<usize>,
    /// 增广次数
    pub augmentations: usize,
}

impl MaxFlow {
    /// 顶点是否在最小割的源侧
    pub fn is_source_side(&self, v: usize) -> bool {
        self.source_side.binary_search(&v).is_ok()
    }

    /// 最小割上的边：原图中从源侧指向汇侧的正容量边
    ///
    /// 这些边全部饱和，容量之和等于最大流量值。
    pub fn cut_edges<G: Adjacency>(&self, g: &G) -> Vec<Edge> {
        let mut cut = Vec::new();
        for &v in &self.source_side {
            for (w, c) in g.edges(v) {
                if c > 0 && !self.is_source_side(w) {
                    cut.push(Edge::new(v, w, c));
                }
            }
        }
        cut
    }
}

/// 计算从 `s` 到 `t` 的最大流
///
/// 同一对顶点之间的平行边先合并为一条边，返回的流量分配也基于合并后的边。
/// `s == t` 时流量为 0。
///
/// 时间复杂度 O(|V|·|E|²)。
pub fn max_flow<G: Adjacency>(g: &G, s: usize, t: usize) -> Result<MaxFlow> {
    g.check_vertex(s)?;
    g.check_vertex(t)?;
    let n = g.order();

    // 合并平行边后的容量，残量图由它复制而来
    let capacity = Mutable::copy(g);
    let mut residual = capacity.clone();
    let mut prev = vec![None; n];
    let mut flow: i64 = 0;
    let mut augmentations = 0;

    while s != t && flow < MAX_COST && residual_flow(&residual, s, t, &mut prev) {
        let path = trace_back(&prev, s, t);
        let bottleneck = path
            .iter()
            .map(|&(u, v)| residual.cost(u, v))
            .fold(MAX_COST, i64::min);

        flow = flow.saturating_add(bottleneck);
        augmentations += 1;
        trace!(bottleneck, length = path.len(), flow, "增广路径");

        for &(u, v) in &path {
            residual.add_cost(u, v, -bottleneck);
            residual.add_cost(v, u, bottleneck);
        }
    }

    let mut res = Mutable::new(n);
    for v in 0..n {
        for (w, c) in capacity.edges(v) {
            let f = c.saturating_sub(residual.cost(v, w));
            if f > 0 {
                res.add_cost(v, w, f);
            }
        }
    }

    let visited = reachable(&residual, s, &mut prev);
    let source_side = (0..n).filter(|&v| visited[v]).collect();

    debug!(s, t, flow, augmentations, "最大流计算完成");

    Ok(MaxFlow {
        value: flow,
        graph: sort(&res),
        source_side,
        augmentations,
    })
}

/// BFS 找增广路径
///
/// 只走残量为正的边，为每个到达的顶点记录前驱；返回 `t` 是否可达。
fn residual_flow(residual: &Mutable, s: usize, t: usize, prev: &mut [Option<usize>]) -> bool {
    bfs(residual, s, Some(t), prev)[t]
}

/// 残量图中从 `s` 可达的顶点
fn reachable(residual: &Mutable, s: usize, prev: &mut [Option<usize>]) -> Vec<bool> {
    bfs(residual, s, None, prev)
}

fn bfs(
    residual: &Mutable,
    s: usize,
    stop: Option<usize>,
    prev: &mut [Option<usize>],
) -> Vec<bool> {
    let mut visited = vec![false; residual.order()];
    let mut queue = VecDeque::new();

    prev[s] = None;
    visited[s] = true;
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        if Some(v) == stop {
            break;
        }
        for (w, c) in residual.edges(v) {
            if !visited[w] && c > 0 {
                prev[w] = Some(v);
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    visited
}

/// 沿前驱从 `t` 回溯到 `s`，返回路径上的边（由汇点到源点）
fn trace_back(prev: &[Option<usize>], s: usize, t: usize) -> Vec<(usize, usize)> {
    let mut path = Vec::new();
    let mut v = t;
    while v != s {
        let Some(u) = prev[v] else {
            break;
        };
        path.push((u, v));
        v = u;
    }
    path
}
