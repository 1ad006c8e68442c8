//! Degeneracy-ordered search with the roots handed out to a pool of threads.
//!
//! One producer walks the degeneracy order and keeps the excluded roots, which
//! only it ever touches. Each root becomes a job owning its own candidate and
//! excluded sets. Workers take jobs from a bounded queue, so the producer
//! blocks instead of buffering the whole order, and send their cliques to the
//! calling thread, which feeds the reporter. The clique channel closes once
//! every worker has returned, so the reporter sees all cliques before this
//! returns. A panicking worker takes the whole search down with it.

use crate::error::{Error, Result};
use crate::graph::UndirectedGraph;
use crate::reporter::{ChannelReporter, Reporter};
use crate::search::{for_each_root, visit, PivotChoice};
use crate::vertexset::VertexSetLike;
use crate::{Clique, Vertex};

use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread;

struct VisitJob<S> {
    start: Vertex,
    candidates: S,
    excluded: S,
}

pub fn explore_parallel<S, R>(
    graph: &UndirectedGraph<S>,
    reporter: &mut R,
    pivot_choice: PivotChoice,
    num_threads: usize,
) -> Result<()>
where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    if num_threads == 0 {
        return Err(Error::NoWorkers);
    }
    thread::scope(|scope| {
        let (job_tx, job_rx) = bounded(num_threads);
        let (clique_tx, clique_rx) = bounded(num_threads);

        scope.spawn(move || dispatch(graph, job_tx));
        for _ in 0..num_threads {
            let job_rx = job_rx.clone();
            let clique_tx = clique_tx.clone();
            scope.spawn(move || descend(graph, pivot_choice, job_rx, clique_tx));
        }
        drop(job_rx);
        drop(clique_tx);

        for clique in clique_rx {
            reporter.record(clique);
        }
    });
    Ok(())
}

fn dispatch<S: VertexSetLike>(graph: &UndirectedGraph<S>, job_tx: Sender<VisitJob<S>>) {
    let mut jobs = 0;
    for_each_root(graph, |start, candidates, excluded| {
        let job = VisitJob { start, candidates, excluded };
        // workers only hang up by panicking
        job_tx.send(job).expect("every worker hung up");
        jobs += 1;
    });
    log::debug!("dispatched {} jobs", jobs);
}

fn descend<S: VertexSetLike>(
    graph: &UndirectedGraph<S>,
    pivot_choice: PivotChoice,
    job_rx: Receiver<VisitJob<S>>,
    clique_tx: Sender<Clique>,
) {
    let mut reporter = ChannelReporter(clique_tx);
    for job in job_rx {
        let mut clique = vec![job.start];
        visit(graph, &mut reporter, Some(pivot_choice), job.candidates, job.excluded, &mut clique);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_graph::new_undirected;
    use crate::reporter::{CollectingReporter, CountingReporter};
    use crate::search::explore_degeneracy;
    use crate::sort_cliques;
    use crate::vertexset::{BitVertexSet, IndexVertexSet};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn no_workers() {
        let g: UndirectedGraph = crate::examples::sample();
        let mut r = CountingReporter::default();
        let res = explore_parallel(&g, &mut r, PivotChoice::MaxDegreeLocal, 0);
        assert!(matches!(res, Err(Error::NoWorkers)));
        assert_eq!(r.count, 0);
    }

    #[test]
    fn empty_graph() {
        let g: UndirectedGraph = UndirectedGraph::from_edges(5, &[]).unwrap();
        let mut r = CountingReporter::default();
        explore_parallel(&g, &mut r, PivotChoice::MaxDegreeLocal, 4).unwrap();
        assert_eq!(r.count, 0);
    }

    fn agrees_with_sequential<S: VertexSetLike>(seed: u64) {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        for (order, size) in [(30, 100), (60, 600), (100, 1000)] {
            let g: UndirectedGraph<S> = new_undirected(&mut rng, order, size).unwrap();
            let mut expected = CollectingReporter::default();
            explore_degeneracy(&g, &mut expected, PivotChoice::MaxDegreeLocal);
            let expected = sort_cliques(expected.cliques);
            for pivot_choice in PivotChoice::ALL {
                for threads in [1, 4, 16, 64] {
                    let mut r = CollectingReporter::default();
                    explore_parallel(&g, &mut r, pivot_choice, threads).unwrap();
                    let cliques = sort_cliques(r.cliques);
                    assert_eq!(cliques, expected, "{:?} on {} threads", pivot_choice, threads);
                }
            }
        }
    }

    #[test]
    fn agrees_bit() {
        agrees_with_sequential::<BitVertexSet>(7);
    }

    #[test]
    fn agrees_index() {
        agrees_with_sequential::<IndexVertexSet>(8);
    }
}
