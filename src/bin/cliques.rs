use bron_kerbosch::graph::UndirectedGraph;
use bron_kerbosch::reporter::{CollectingReporter, CountingReporter};
use bron_kerbosch::vertexset::{BitVertexSet, IndexVertexSet, VertexSetLike};
use bron_kerbosch::*;

use chrono::Local;
use clap::{ArgEnum, Parser};
use env_logger::Builder;
use log::LevelFilter;

use std::io::Write;
use std::time::Instant;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum SetKind {
    Bit,
    Index,
}

/// Enumerate the maximal cliques of an undirected graph
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// edge list, or a graph saved with bincode if the name ends in .bin
    #[clap(short, long)]
    input: String,

    /// naive, pivot-{gg,gp,gpx}, degen-{gg,gp,gpx} or parallel-{gg,gp,gpx}@THREADS
    #[clap(short, long, default_value = "degen-gpx")]
    algorithm: Algorithm,

    /// vertex set representation
    #[clap(long, arg_enum, default_value = "bit")]
    set: SetKind,

    /// print every clique, sorted, instead of only their number
    #[clap(short, long)]
    print: bool,
}

fn run<S: VertexSetLike>(args: &Args) -> anyhow::Result<()> {
    let graph: UndirectedGraph<S> = if args.input.ends_with(".bin") {
        io::load_graph(&args.input)?
    } else {
        io::read_edge_list(&args.input)?
    };
    log::info!("{}: order {}, size {}", args.input, graph.order(), graph.size());

    let start = Instant::now();
    if args.print {
        let mut reporter = CollectingReporter::default();
        args.algorithm.explore(&graph, &mut reporter)?;
        log::info!("{} took {:.3}s", args.algorithm, start.elapsed().as_secs_f64());
        let cliques = sort_cliques(reporter.cliques);
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for clique in &cliques {
            let line: Vec<String> = clique.iter().map(|v| v.to_string()).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        log::info!("{} maximal cliques", cliques.len());
    } else {
        let mut reporter = CountingReporter::default();
        args.algorithm.explore(&graph, &mut reporter)?;
        log::info!("{} took {:.3}s", args.algorithm, start.elapsed().as_secs_f64());
        println!("{}", reporter.count);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match args.set {
        SetKind::Bit => run::<BitVertexSet>(&args),
        SetKind::Index => run::<IndexVertexSet>(&args),
    }
}
