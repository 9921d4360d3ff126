//! 随机图上的性质测试
//!
//! 最大流与暴力枚举的最小割比较，最短路径与 Bellman-Ford 比较。

use flowgraph::{max_flow, shortest_path, shortest_paths, Adjacency, Mutable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: usize, min_weight: i64, max_weight: i64) -> Mutable {
    let mut g = Mutable::new(n);
    for u in 0..n {
        for v in 0..n {
            if rng.gen_bool(0.4) {
                g.set_cost(u, v, rng.gen_range(min_weight..=max_weight));
            }
        }
    }
    g
}

/// 枚举所有 s-t 割，返回最小容量
fn brute_force_min_cut(g: &Mutable, s: usize, t: usize) -> i64 {
    let n = g.order();
    let mut best = i64::MAX;
    for mask in 0u32..(1 << n) {
        if mask & (1 << s) == 0 || mask & (1 << t) != 0 {
            continue;
        }
        let mut cut = 0;
        for u in 0..n {
            if mask & (1 << u) == 0 {
                continue;
            }
            for (v, c) in g.edges(u) {
                if mask & (1 << v) == 0 {
                    cut += c;
                }
            }
        }
        best = best.min(cut);
    }
    best
}

/// 只使用非负边的 Bellman-Ford
fn bellman_ford(g: &Mutable, source: usize) -> Vec<Option<i64>> {
    let n = g.order();
    let mut dist = vec![None; n];
    dist[source] = Some(0);
    for _ in 0..n {
        for u in 0..n {
            let Some(du) = dist[u] else { continue };
            for (v, c) in g.edges(u) {
                if c < 0 {
                    continue;
                }
                if dist[v].map_or(true, |dv| du + c < dv) {
                    dist[v] = Some(du + c);
                }
            }
        }
    }
    dist
}

#[test]
fn max_flow_equals_min_cut() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let n = rng.gen_range(2..=7);
        let g = random_graph(&mut rng, n, 0, 10);
        let s = rng.gen_range(0..n);
        let t = (s + rng.gen_range(1..n)) % n;

        let result = max_flow(&g, s, t).unwrap();
        assert_eq!(result.value, brute_force_min_cut(&g, s, t), "{:?} s={} t={}", g, s, t);

        let cut: i64 = result.cut_edges(&g).iter().map(|e| e.weight).sum();
        assert_eq!(cut, result.value);
        assert!(result.is_source_side(s));
        assert!(!result.is_source_side(t));
    }
}

#[test]
fn flow_is_feasible_and_conserved() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let n = rng.gen_range(2..=8);
        let g = random_graph(&mut rng, n, 0, 20);
        let s = rng.gen_range(0..n);
        let t = (s + rng.gen_range(1..n)) % n;

        let result = max_flow(&g, s, t).unwrap();
        let flow = &result.graph;
        assert_eq!(flow.order(), n);

        let mut balance = vec![0i64; n];
        for e in flow.edge_list() {
            assert!(e.weight > 0);
            assert!(e.weight <= g.cost(e.from, e.to), "边 {} 超出容量", e);
            balance[e.from] -= e.weight;
            balance[e.to] += e.weight;
        }
        for v in 0..n {
            if v != s && v != t {
                assert_eq!(balance[v], 0, "顶点 {} 流量不守恒", v);
            }
        }
        assert_eq!(balance[t], result.value);
        assert_eq!(balance[s], -result.value);
    }
}

#[test]
fn max_flow_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let g = random_graph(&mut rng, 8, 0, 15);
        let a = max_flow(&g, 0, 7).unwrap();
        let b = max_flow(&g, 0, 7).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn shortest_paths_match_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..300 {
        let n = rng.gen_range(1..=10);
        let g = random_graph(&mut rng, n, -5, 20);
        let source = rng.gen_range(0..n);

        let tree = shortest_paths(&g, source).unwrap();
        assert_eq!(tree.dist, bellman_ford(&g, source));

        for v in 0..n {
            match tree.dist[v] {
                None => assert_eq!(tree.parent[v], None),
                Some(_) if v == source => assert_eq!(tree.parent[v], None),
                Some(_) => assert!(tree.parent[v].is_some()),
            }
        }
    }
}

#[test]
fn shortest_path_is_consistent() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..300 {
        let n = rng.gen_range(1..=10);
        let g = random_graph(&mut rng, n, -5, 20);
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);

        let (path, dist) = shortest_path(&g, source, target).unwrap();
        let Some(dist) = dist else {
            assert!(path.is_empty());
            continue;
        };

        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&target));
        let mut total = 0;
        for pair in path.windows(2) {
            let c = g.cost(pair[0], pair[1]);
            assert!(c >= 0, "路径使用了负权边 {:?}", pair);
            total += c;
        }
        assert_eq!(total, dist);
    }
}
