use bron_kerbosch::check::verify_cliques;
use bron_kerbosch::graph::UndirectedGraph;
use bron_kerbosch::random_graph::new_undirected;
use bron_kerbosch::reporter::{CollectingReporter, CountingReporter};
use bron_kerbosch::stats::SampleStatistics;
use bron_kerbosch::vertexset::{BitVertexSet, IndexVertexSet, VertexSetLike};
use bron_kerbosch::*;

use chrono::Local;
use clap::{ArgEnum, Parser};
use env_logger::Builder;
use log::LevelFilter;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use std::io::Write;
use std::time::Instant;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum SetKind {
    Bit,
    Index,
}

/// Time and cross-check the Bron-Kerbosch variants on random graphs
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// number of vertices
    #[clap(short, long)]
    order: usize,

    /// numbers of edges, one random graph each
    #[clap(short = 'n', long, required = true, use_value_delimiter = true)]
    sizes: Vec<usize>,

    /// timed runs per algorithm and graph
    #[clap(long, default_value_t = 3)]
    samples: u32,

    /// algorithms to compare, all of them if omitted
    #[clap(short, long, use_value_delimiter = true)]
    algorithms: Vec<Algorithm>,

    /// pool sizes for the parallel variant when --algorithms is omitted
    #[clap(short, long, use_value_delimiter = true)]
    threads: Vec<usize>,

    /// random seed
    #[clap(long, default_value_t = 19680516)]
    seed: u64,

    /// vertex set representation
    #[clap(long, arg_enum, default_value = "bit")]
    set: SetKind,

    /// write min/mean/max seconds per algorithm and size to this csv file
    #[clap(long)]
    csv: Option<String>,

    /// keep every generated graph in this directory, as edge list and bincode,
    /// for rerunning single algorithms on it with `cliques`
    #[clap(long)]
    save: Option<String>,
}

/// Times every algorithm on one graph. The first sample collects the cliques
/// and checks them, the later ones only count.
fn bench_graph<S: VertexSetLike>(
    graph: &UndirectedGraph<S>,
    algorithms: &[Algorithm],
    samples: u32,
) -> anyhow::Result<Vec<SampleStatistics>> {
    let mut times = vec![SampleStatistics::default(); algorithms.len()];
    let mut first: Option<Vec<Clique>> = None;
    for sample in 0..samples {
        for (algorithm, stats) in algorithms.iter().zip(&mut times) {
            if sample == 0 {
                let mut reporter = CollectingReporter::default();
                let start = Instant::now();
                algorithm.explore(graph, &mut reporter)?;
                stats.put(start.elapsed().as_secs_f64());

                let cliques = sort_cliques(reporter.cliques);
                if let Some(expected) = &first {
                    if *expected != cliques {
                        log::error!(
                            "{} found {} cliques, {} found {}",
                            algorithm,
                            cliques.len(),
                            algorithms[0],
                            expected.len()
                        );
                    }
                } else {
                    if let Err(e) = verify_cliques(graph, &cliques) {
                        log::error!("{} reported a bad clique: {}", algorithm, e);
                    }
                    log::info!("{} maximal cliques", cliques.len());
                    first = Some(cliques);
                }
            } else {
                let mut reporter = CountingReporter::default();
                let start = Instant::now();
                algorithm.explore(graph, &mut reporter)?;
                stats.put(start.elapsed().as_secs_f64());
            }
        }
    }
    Ok(times)
}

fn run<S: VertexSetLike>(args: &Args, algorithms: &[Algorithm]) -> anyhow::Result<()> {
    let mut report = match &args.csv {
        Some(path) => {
            let mut w = csv::Writer::from_path(path)?;
            let mut header = vec!["Size".to_string()];
            for a in algorithms {
                for column in ["min", "mean", "max"] {
                    header.push(format!("{} {}", a, column));
                }
            }
            w.write_record(&header)?;
            Some(w)
        }
        None => None,
    };

    let mut rng = Xoshiro256StarStar::seed_from_u64(args.seed);
    for &size in &args.sizes {
        let start = Instant::now();
        let graph: UndirectedGraph<S> = new_undirected(&mut rng, args.order, size)?;
        log::info!(
            "random graph of order {}, size {} in {:.3}s",
            args.order,
            size,
            start.elapsed().as_secs_f64()
        );

        if let Some(dir) = &args.save {
            let stem = format!("{}/random-{}-{}-{}", dir, args.order, size, args.seed);
            io::save_edge_list(&format!("{}.txt", stem), &graph)?;
            io::save_graph(&format!("{}.bin", stem), &graph)?;
            log::info!("saved graph as {}.{{txt,bin}}", stem);
        }

        let times = bench_graph(&graph, algorithms, args.samples)?;
        for (algorithm, stats) in algorithms.iter().zip(&times) {
            let mean = stats.mean();
            let reldev = stats.deviation() / mean;
            println!(
                "order {:>6} size {:>8} {:<16} {:8.3}s ± {:.0}%",
                args.order,
                size,
                algorithm.to_string(),
                mean,
                100. * reldev
            );
        }

        if let Some(w) = report.as_mut() {
            let mut record = vec![size.to_string()];
            for stats in &times {
                record.extend([stats.min(), stats.mean(), stats.max()].map(|t| t.to_string()));
            }
            w.write_record(&record)?;
            w.flush()?;
        }
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
    anyhow::ensure!(args.samples > 0, "need at least one sample");
    if let Some(dir) = &args.save {
        std::fs::create_dir_all(dir)?;
    }
    let algorithms = if args.algorithms.is_empty() {
        let threads: &[usize] = if args.threads.is_empty() {
            &DEFAULT_THREADS
        } else {
            &args.threads
        };
        Algorithm::comparison_set(threads)
    } else {
        args.algorithms.clone()
    };

    match args.set {
        SetKind::Bit => run::<BitVertexSet>(&args, &algorithms),
        SetKind::Index => run::<IndexVertexSet>(&args, &algorithms),
    }
}
