//! 最短路径算法
//!
//! 基于带 decrease-key 的索引优先队列实现 Dijkstra。
//! 只使用非负权重的边，负权边不参与松弛，也不会报错。

use super::priority_queue::IndexedQueue;
use crate::error::Result;
use crate::graph::Adjacency;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 单源最短路径树
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// 起点
    pub source: usize,
    /// 每个顶点在最短路径树中的前驱，起点和不可达顶点为 None
    pub parent: Vec<Option<usize>>,
    /// 每个顶点到起点的最短距离，不可达为 None
    pub dist: Vec<Option<i64>>,
}

impl ShortestPaths {
    /// 到 `target` 的最短距离
    pub fn distance(&self, target: usize) -> Option<i64> {
        self.dist.get(target).copied().flatten()
    }

    /// 从起点到 `target` 的顶点序列，不可达时为 None
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut v = target;
        while let Some(u) = self.parent[v] {
            path.push(u);
            v = u;
        }
        path.reverse();
        Some(path)
    }

    /// 可达顶点数（包括起点）
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

/// 计算从 `source` 到所有顶点的最短路径
///
/// 距离累加在 [`MAX_COST`](crate::graph::MAX_COST) 处饱和，
/// 超过它的路径长度报告为 `MAX_COST`。
///
/// 时间复杂度 O((|E| + |V|)·log|V|)。
pub fn shortest_paths<G: Adjacency>(g: &G, source: usize) -> Result<ShortestPaths> {
    g.check_vertex(source)?;
    let n = g.order();
    let mut parent = vec![None; n];

    let mut queue = IndexedQueue::new(n);
    queue.push(source, 0);
    let mut settled = 0usize;

    while let Some(v) = queue.pop() {
        settled += 1;
        let Some(dv) = queue.key(v) else {
            continue;
        };
        for (w, d) in g.edges(v) {
            if d < 0 {
                continue;
            }
            let alt = dv.saturating_add(d);
            match queue.key(w) {
                None => {
                    parent[w] = Some(v);
                    queue.push(w, alt);
                }
                Some(dw) if alt < dw => {
                    if queue.decrease_key(w, alt) {
                        parent[w] = Some(v);
                    }
                }
                Some(_) => {}
            }
        }
    }

    debug!(source, vertices = n, settled, "最短路径计算完成");

    Ok(ShortestPaths {
        source,
        parent,
        dist: queue.into_keys(),
    })
}

/// 计算从 `source` 到 `target` 的一条最短路径
///
/// 返回顶点序列和路径长度；不可达时返回空序列和 None。
pub fn shortest_path<G: Adjacency>(
    g: &G,
    source: usize,
    target: usize,
) -> Result<(Vec<usize>, Option<i64>)> {
    g.check_vertex(target)?;
    let tree = shortest_paths(g, source)?;
    let dist = tree.distance(target);
    let path = tree.path_to(target).unwrap_or_default();
    Ok((path, dist))
}
