//! Maximal clique enumeration with variants of the Bron-Kerbosch algorithm.

pub mod check;
pub mod degeneracy;
pub mod error;
pub mod graph;
pub mod io;
pub mod parallel;
pub mod random_graph;
pub mod reporter;
pub mod search;
pub mod stats;
pub mod vertexset;

mod util;

pub use error::{Error, Result};
pub use search::PivotChoice;

use graph::UndirectedGraph;
use reporter::Reporter;
use vertexset::VertexSetLike;

pub type Vertex = u32;
pub type Edge = [Vertex; 2];
pub type Clique = Vec<Vertex>;

/// Pool sizes the parallel variant is compared at.
pub const DEFAULT_THREADS: [usize; 5] = [1, 4, 16, 64, 256];

/// The search variants, all producing the same set of cliques.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Naive,
    /// one search over the whole graph
    Pivot(PivotChoice),
    /// one search per vertex, in degeneracy order
    Degeneracy(PivotChoice),
    /// like Degeneracy, with the searches spread over `threads` workers
    Parallel { pivot: PivotChoice, threads: usize },
}

impl Algorithm {
    /// Every variant, the parallel one once per pool size.
    pub fn comparison_set(threads: &[usize]) -> Vec<Algorithm> {
        let mut algorithms = vec![Algorithm::Naive];
        algorithms.extend(PivotChoice::ALL.map(Algorithm::Pivot));
        algorithms.extend(PivotChoice::ALL.map(Algorithm::Degeneracy));
        for &threads in threads {
            for pivot in PivotChoice::ALL {
                algorithms.push(Algorithm::Parallel { pivot, threads });
            }
        }
        algorithms
    }

    pub fn explore<S, R>(&self, graph: &UndirectedGraph<S>, reporter: &mut R) -> Result<()>
    where
        S: VertexSetLike,
        R: Reporter + ?Sized,
    {
        match *self {
            Algorithm::Naive => search::explore_naive(graph, reporter),
            Algorithm::Pivot(p) => search::explore_pivot(graph, reporter, p),
            Algorithm::Degeneracy(p) => search::explore_degeneracy(graph, reporter, p),
            Algorithm::Parallel { pivot, threads } => {
                parallel::explore_parallel(graph, reporter, pivot, threads)?
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Algorithm::Naive => write!(f, "naive"),
            Algorithm::Pivot(p) => write!(f, "pivot-{}", p.abbreviation()),
            Algorithm::Degeneracy(p) => write!(f, "degen-{}", p.abbreviation()),
            Algorithm::Parallel { pivot, threads } => {
                write!(f, "parallel-{}@{}", pivot.abbreviation(), threads)
            }
        }
    }
}

/// ```
/// use bron_kerbosch::{Algorithm, PivotChoice};
/// let a: Algorithm = "parallel-gpx@16".parse().unwrap();
/// assert_eq!(a, Algorithm::Parallel { pivot: PivotChoice::MaxDegreeLocalX, threads: 16 });
/// assert_eq!(a.to_string(), "parallel-gpx@16");
/// assert!("parallel-gpx@0".parse::<Algorithm>().is_err());
/// ```
impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "naive" {
            return Ok(Algorithm::Naive);
        }
        let parsed = s.split_once('-').and_then(|(kind, rest)| match kind {
            "pivot" => PivotChoice::from_abbreviation(rest).map(Algorithm::Pivot),
            "degen" => PivotChoice::from_abbreviation(rest).map(Algorithm::Degeneracy),
            "parallel" => {
                let (pivot, threads) = rest.split_once('@')?;
                let pivot = PivotChoice::from_abbreviation(pivot)?;
                let threads: usize = threads.parse().ok()?;
                (threads > 0).then_some(Algorithm::Parallel { pivot, threads })
            }
            _ => None,
        });
        parsed.ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Sorts the vertices of every clique, then the cliques, so that the output
/// of different variants can be compared.
/// ```
/// use bron_kerbosch::sort_cliques;
/// assert_eq!(sort_cliques(vec![vec![3, 2], vec![1, 0, 2]]), vec![vec![0, 1, 2], vec![2, 3]]);
/// ```
pub fn sort_cliques(mut cliques: Vec<Clique>) -> Vec<Clique> {
    for c in &mut cliques {
        c.sort_unstable();
    }
    cliques.sort_unstable();
    cliques
}

#[cfg(test)]
pub mod examples {
    use crate::graph::UndirectedGraph;
    use crate::vertexset::VertexSetLike;
    use crate::Vertex;

    pub fn from_lists<S: VertexSetLike>(adjacencies: &[Vec<Vertex>]) -> UndirectedGraph<S> {
        let rows = adjacencies.iter().map(|a| a.iter().copied().collect()).collect();
        UndirectedGraph::new(rows).unwrap()
    }

    /// 8 vertices, vertex 0 left alone
    pub fn sample<S: VertexSetLike>() -> UndirectedGraph<S> {
        from_lists(&[
            vec![],
            vec![2, 3, 4],
            vec![1, 3, 4, 5],
            vec![1, 2, 4, 5],
            vec![1, 2, 3],
            vec![2, 3, 6, 7],
            vec![5, 7],
            vec![5, 6],
        ])
    }
}
