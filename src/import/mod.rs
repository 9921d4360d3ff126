//! 数据导入模块
//!
//! 从 CSV 或 JSON Lines 读取边列表，构建 [`Mutable`] 图。
//! 每行一条边 `from,to,weight`；无法解析或顶点越界的行计入错误并跳过。

use crate::error::{Error, Result};
use crate::graph::{Edge, Mutable};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

/// 未指定顶点数时允许推断出的最大顶点数
///
/// 顶点编号超出该范围的边计为错误；更大的图需要用
/// [`EdgeListImporter::with_order`] 显式指定顶点数。
pub const MAX_INFERRED_ORDER: usize = 1 << 24;

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub order: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边记录（CSV 表头 / JSON 字段）
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    weight: i64,
}

impl From<EdgeRecord> for Edge {
    fn from(r: EdgeRecord) -> Self {
        Edge::new(r.from, r.to, r.weight)
    }
}

/// 边列表导入器
#[derive(Debug, Default, Clone)]
pub struct EdgeListImporter {
    order: Option<usize>,
}

impl EdgeListImporter {
    /// 创建导入器，顶点数取最大顶点编号 + 1
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定顶点数；超出范围的边计为错误
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// 按格式名导入：`csv`、`jsonl`（或 `json`）
    pub fn import<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<(Mutable, ImportStats)> {
        match format {
            "csv" => self.import_csv(path),
            "jsonl" | "json" => self.import_jsonl(path),
            other => Err(Error::ImportError(format!("不支持的格式: {}", other))),
        }
    }

    /// 从 CSV 文件导入，首行为表头 `from,to,weight`
    pub fn import_csv<P: AsRef<Path>>(&self, path: P) -> Result<(Mutable, ImportStats)> {
        self.read_csv(File::open(path)?)
    }

    /// 从 JSON Lines 文件导入
    pub fn import_jsonl<P: AsRef<Path>>(&self, path: P) -> Result<(Mutable, ImportStats)> {
        self.read_jsonl(BufReader::new(File::open(path)?))
    }

    pub fn read_csv<R: Read>(&self, reader: R) -> Result<(Mutable, ImportStats)> {
        let start = Instant::now();
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut edges = Vec::new();
        let mut errors = 0;
        for (line, record) in rdr.deserialize::<EdgeRecord>().enumerate() {
            match record {
                Ok(r) => edges.push(Edge::from(r)),
                Err(e) => {
                    warn!(line = line + 2, error = %e, "跳过无法解析的行");
                    errors += 1;
                }
            }
        }

        Ok(self.build(edges, errors, start))
    }

    pub fn read_jsonl<R: BufRead>(&self, reader: R) -> Result<(Mutable, ImportStats)> {
        let start = Instant::now();
        let mut edges = Vec::new();
        let mut errors = 0;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<EdgeRecord>(line) {
                Ok(r) => edges.push(Edge::from(r)),
                Err(e) => {
                    warn!(line = line_no + 1, error = %e, "跳过无法解析的行");
                    errors += 1;
                }
            }
        }

        Ok(self.build(edges, errors, start))
    }

    fn build(&self, edges: Vec<Edge>, mut errors: usize, start: Instant) -> (Mutable, ImportStats) {
        let order = self.order.unwrap_or_else(|| {
            edges
                .iter()
                .filter_map(|e| e.from.max(e.to).checked_add(1))
                .filter(|&n| n <= MAX_INFERRED_ORDER)
                .max()
                .unwrap_or(0)
        });

        let mut g = Mutable::new(order);
        let mut edges_imported = 0;
        for e in edges {
            if e.from >= order || e.to >= order {
                warn!(edge = %e, order, "边的顶点越界");
                errors += 1;
                continue;
            }
            g.add_cost(e.from, e.to, e.weight);
            edges_imported += 1;
        }

        let stats = ImportStats {
            order,
            edges_imported,
            errors,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!(?stats, "边列表导入完成");
        (g, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Adjacency;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from,to,weight").unwrap();
        writeln!(file, "0, 1, 3").unwrap();
        writeln!(file, "1,2,4").unwrap();
        writeln!(file, "0,1,2").unwrap();
        writeln!(file, "x,2,4").unwrap();

        let (g, stats) = EdgeListImporter::new().import_csv(file.path()).unwrap();
        assert_eq!(stats.order, 3);
        assert_eq!(stats.edges_imported, 3);
        assert_eq!(stats.errors, 1);
        // 平行边合并
        assert_eq!(g.cost(0, 1), 5);
        assert_eq!(g.cost(1, 2), 4);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_import_jsonl() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"from":0,"to":3,"weight":7}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"from":3,"to":1,"weight":-2}}"#).unwrap();
        writeln!(file, "not json").unwrap();

        let (g, stats) = EdgeListImporter::new()
            .import(file.path(), "jsonl")
            .unwrap();
        assert_eq!(stats.order, 4);
        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(g.cost(0, 3), 7);
        assert_eq!(g.cost(3, 1), -2);
    }

    #[test]
    fn test_explicit_order() {
        let data = "from,to,weight\n0,1,1\n1,5,1\n";
        let (g, stats) = EdgeListImporter::new()
            .with_order(4)
            .read_csv(data.as_bytes())
            .unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 1);
    }

    #[test]
    fn test_huge_vertex_id_is_an_error() {
        let data = format!("from,to,weight\n{},0,1\n0,1,2\n", usize::MAX);
        let (g, stats) = EdgeListImporter::new().read_csv(data.as_bytes()).unwrap();
        assert_eq!(stats.order, 2);
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(g.cost(0, 1), 2);

        // 超过推断上限的编号不会撑大图
        let data = "from,to,weight\n1000000000000000,3,1\n2,3,5\n";
        let (g, stats) = EdgeListImporter::new().read_csv(data.as_bytes()).unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 1);

        let line = format!(r#"{{"from":0,"to":{},"weight":1}}"#, usize::MAX);
        let (g, stats) = EdgeListImporter::new().read_jsonl(line.as_bytes()).unwrap();
        assert_eq!(g.order(), 0);
        assert_eq!(stats.edges_imported, 0);
        assert_eq!(stats.errors, 1);
    }

    #[test]
    fn test_unknown_format() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            EdgeListImporter::new().import(file.path(), "xml"),
            Err(Error::ImportError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EdgeListImporter::new().import_csv("/nonexistent/edges.csv"),
            Err(Error::IoError(_))
        ));
    }
}
