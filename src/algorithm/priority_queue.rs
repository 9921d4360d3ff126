//! 带索引的优先队列
//!
//! 二叉堆里存顶点编号，按距离数组排序；另有一个反向索引记录每个顶点
//! 在堆中的位置，使 decrease-key 不需要线性查找。

/// 以顶点距离为键的最小堆
///
/// 队列持有距离数组本身，键只能通过 [`push`](Self::push) 和
/// [`decrease_key`](Self::decrease_key) 修改，堆序因此不会被绕过。
#[derive(Debug, Clone)]
pub struct IndexedQueue {
    /// 按堆序排列的顶点
    heap: Vec<usize>,
    /// 每个顶点在堆中的位置，不在堆中为 None
    index: Vec<Option<usize>>,
    /// 距离数组，None 表示尚未到达
    keys: Vec<Option<i64>>,
}

impl IndexedQueue {
    /// 创建 `n` 个顶点的空队列，所有键为 None
    pub fn new(n: usize) -> Self {
        Self {
            heap: Vec::new(),
            index: vec![None; n],
            keys: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// 顶点当前是否在堆中
    pub fn contains(&self, v: usize) -> bool {
        self.index[v].is_some()
    }

    /// 顶点当前的键
    pub fn key(&self, v: usize) -> Option<i64> {
        self.keys[v]
    }

    /// 以键 `key` 加入顶点 `v`
    ///
    /// `v` 不能已经在堆中。
    pub fn push(&mut self, v: usize, key: i64) {
        debug_assert!(!self.contains(v), "顶点 {} 已在队列中", v);
        self.keys[v] = Some(key);
        let i = self.heap.len();
        self.heap.push(v);
        self.index[v] = Some(i);
        self.sift_up(i);
    }

    /// 取出键最小的顶点
    pub fn pop(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let v = self.heap.pop()?;
        self.index[v] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(v)
    }

    /// 把堆中顶点 `v` 的键降为 `key` 并恢复堆序
    ///
    /// 新键不小于当前键，或 `v` 不在堆中时什么也不做，返回 false。
    pub fn decrease_key(&mut self, v: usize, key: i64) -> bool {
        let Some(i) = self.index[v] else {
            return false;
        };
        if self.keys[v].is_some_and(|k| key >= k) {
            return false;
        }
        self.keys[v] = Some(key);
        self.sift_up(i);
        true
    }

    /// 结束使用，交回距离数组
    pub fn into_keys(self) -> Vec<Option<i64>> {
        self.keys
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.keys[self.heap[i]] < self.keys[self.heap[j]]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.index[self.heap[i]] = Some(i);
        self.index[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        for (i, &v) in self.heap.iter().enumerate() {
            assert_eq!(self.index[v], Some(i));
            if i > 0 {
                assert!(!self.less(i, (i - 1) / 2), "堆序被破坏: 位置 {}", i);
            }
        }
        let queued = self.index.iter().filter(|i| i.is_some()).count();
        assert_eq!(queued, self.heap.len());
    }
}
