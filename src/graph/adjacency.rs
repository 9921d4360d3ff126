//! 图访问抽象
//!
//! 算法只通过这个 trait 读取图：顶点数、逐顶点的出边序列、点对查询。

use crate::error::{Error, Result};
use std::ops::ControlFlow;

/// "实际上无穷大" 的代价上界
///
/// 既是最大流累加的溢出保护，也是瓶颈容量计算的初始上界。
/// 残量更新和最短路径距离都在此处饱和：距离被截断为 `MAX_COST` 时，
/// 路径上的权重之和不再等于报告的距离。
pub const MAX_COST: i64 = i64::MAX;

/// 顶点为 `0..order()` 的有向带权图
pub trait Adjacency {
    /// 顶点数
    fn order(&self) -> usize;

    /// 顶点 `v` 的出边序列，产出 `(邻居, 权重)`
    ///
    /// 序列可以重复获取；调用方可以在任意位置停止消费。
    /// 迭代顺序由实现决定，但对同一个图必须是确定的。
    fn edges(&self, v: usize) -> impl Iterator<Item = (usize, i64)> + '_;

    /// 边 `(u, v)` 的权重，不存在时为 0
    ///
    /// 默认实现线性扫描 `u` 的出边，存在平行边时返回第一条。
    fn cost(&self, u: usize, v: usize) -> i64 {
        self.edges(u)
            .find(|&(w, _)| w == v)
            .map_or(0, |(_, c)| c)
    }

    /// 对 `v` 的每条出边调用 `f`
    ///
    /// `f` 返回 `ControlFlow::Break` 时只终止 `v` 剩余出边的遍历，
    /// 返回值告诉调用方是否被提前终止。
    fn visit<F>(&self, v: usize, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize, i64) -> ControlFlow<()>,
    {
        self.edges(v).try_for_each(|(w, c)| f(w, c))
    }

    /// 出度
    fn degree(&self, v: usize) -> usize {
        self.edges(v).count()
    }

    /// 校验顶点下标
    fn check_vertex(&self, v: usize) -> Result<()> {
        let order = self.order();
        if v < order {
            Ok(())
        } else {
            Err(Error::InvalidVertex { vertex: v, order })
        }
    }
}
