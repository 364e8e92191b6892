use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use labelset::graph::GraphFile;
use labelset::{Dijkstra, QueueKind, TraversalSource};
use log::info;

/// Shortest paths over a graph read from a JSON file
#[derive(Debug, Parser)]
#[command(name = "labelset", version, about)]
struct Args {
    /// Graph file: { "order": n, "edges": [[from, to, cost], ...] }
    #[arg(short, long)]
    graph: PathBuf,

    /// Source vertex
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Target vertex; without it, distances to every vertex are printed
    #[arg(short, long)]
    target: Option<usize>,

    /// Priority queue strategy
    #[arg(short, long, value_enum, default_value_t = QueueKind::Binary)]
    queue: QueueKind,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> labelset::Result<()> {
    let graph = GraphFile::load(&args.graph)?.build()?;
    info!(
        "loaded {} with {} vertices and {} edges",
        args.graph.display(),
        graph.order(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new().with_queue(args.queue);
    info!("running {} with the {} queue", dijkstra.name(), dijkstra.queue());

    match args.target {
        Some(target) => {
            let result = dijkstra.shortest_path(&graph, args.source, target)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_reachable() {
                println!("distance: {}", result.distance_or_sentinel());
                println!("path: {:?}", result.path);
            } else {
                println!("no path from {} to {}", args.source, target);
            }
        }
        None => {
            let (tree, stats) = dijkstra.shortest_paths_with_stats(&graph, args.source)?;
            info!("{stats:?}");
            if args.json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                for v in 0..tree.order() {
                    match (tree.distance(v), tree.parent(v)) {
                        (Some(d), Some(p)) => println!("{v}: distance {d}, via {p}"),
                        (Some(d), None) => println!("{v}: distance {d} (source)"),
                        _ => println!("{v}: unreachable"),
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
