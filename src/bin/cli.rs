//! FlowGraph CLI 工具
//!
//! 读取边列表文件，计算最大流或最短路径

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flowgraph::algorithm::{max_flow, shortest_path, shortest_paths};
use flowgraph::graph::Adjacency;
use flowgraph::import::EdgeListImporter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowgraph-cli")]
#[command(about = "FlowGraph 命令行工具：最大流与最短路径")]
struct Args {
    /// 边列表文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: csv, jsonl
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// 顶点数（默认取最大顶点编号 + 1，推断上限为 2^24）
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 计算从 source 到 sink 的最大流
    MaxFlow {
        /// 源点
        #[arg(short, long)]
        source: usize,

        /// 汇点
        #[arg(short = 't', long)]
        sink: usize,

        /// 同时输出最小割
        #[arg(long)]
        cut: bool,
    },

    /// 计算最短路径；不指定 target 时输出到所有顶点的距离
    Path {
        /// 起点
        #[arg(short, long)]
        source: usize,

        /// 终点
        #[arg(short = 't', long)]
        target: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut importer = EdgeListImporter::new();
    if let Some(n) = args.order {
        importer = importer.with_order(n);
    }
    let (graph, stats) = importer
        .import(&args.input, &args.format)
        .with_context(|| format!("无法读取 {:?}", args.input))?;

    info!(
        vertices = graph.order(),
        edges = stats.edges_imported,
        errors = stats.errors,
        duration_ms = stats.duration_ms,
        "图已加载"
    );

    match args.command {
        Command::MaxFlow { source, sink, cut } => {
            let result = max_flow(&graph, source, sink)?;
            let cut_edges = if cut {
                Some(result.cut_edges(&graph))
            } else {
                None
            };

            if args.json {
                let out = serde_json::json!({
                    "value": result.value,
                    "augmentations": result.augmentations,
                    "flow": result.graph.edge_list(),
                    "source_side": result.source_side,
                    "cut": cut_edges,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("最大流: {}", result.value);
                println!("增广次数: {}", result.augmentations);
                println!("流量分配:");
                for e in result.graph.edge_list() {
                    println!("  {}", e);
                }
                if let Some(cut_edges) = cut_edges {
                    println!("最小割:");
                    for e in cut_edges {
                        println!("  {}", e);
                    }
                }
            }
        }

        Command::Path {
            source,
            target: Some(target),
        } => {
            let (path, dist) = shortest_path(&graph, source, target)?;
            if args.json {
                let out = serde_json::json!({
                    "source": source,
                    "target": target,
                    "distance": dist,
                    "path": path,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                match dist {
                    Some(d) => {
                        let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
                        println!("距离: {}", d);
                        println!("路径: {}", hops.join(" -> "));
                    }
                    None => println!("{} 从 {} 不可达", target, source),
                }
            }
        }

        Command::Path {
            source,
            target: None,
        } => {
            let tree = shortest_paths(&graph, source)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                println!("从 {} 出发，可达 {} 个顶点:", source, tree.reached());
                for (v, d) in tree.dist.iter().enumerate() {
                    match d {
                        Some(d) => println!("  {}: {}", v, d),
                        None => println!("  {}: 不可达", v),
                    }
                }
            }
        }
    }

    Ok(())
}
