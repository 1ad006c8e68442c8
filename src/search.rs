//! Bron-Kerbosch recursion and the sequential ways to start it.

use crate::degeneracy::DegeneracyOrder;
use crate::graph::UndirectedGraph;
use crate::reporter::Reporter;
use crate::vertexset::VertexSetLike;
use crate::Vertex;

/// How a search frame picks the vertex whose neighbours it skips.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PivotChoice {
    /// candidate of highest degree in the whole graph
    MaxDegreeGlobal,
    /// candidate with most neighbours among the candidates
    MaxDegreeLocal,
    /// like MaxDegreeLocal, but excluded vertices may win too
    MaxDegreeLocalX,
}

impl PivotChoice {
    pub const ALL: [PivotChoice; 3] = [
        PivotChoice::MaxDegreeGlobal,
        PivotChoice::MaxDegreeLocal,
        PivotChoice::MaxDegreeLocalX,
    ];

    /// short name, as used in algorithm names
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PivotChoice::MaxDegreeGlobal => "gg",
            PivotChoice::MaxDegreeLocal => "gp",
            PivotChoice::MaxDegreeLocalX => "gpx",
        }
    }

    pub fn from_abbreviation(s: &str) -> Option<Self> {
        PivotChoice::ALL.into_iter().find(|p| p.abbreviation() == s)
    }
}

/// Reports every maximal clique containing `clique` and extended from
/// `candidates`, skipping those that would also fit a vertex of `excluded`.
///
/// Without a pivot choice, every candidate is branched on.
/// `clique` is used as a stack and is restored before returning.
pub fn visit<S, R>(
    graph: &UndirectedGraph<S>,
    reporter: &mut R,
    pivot_choice: Option<PivotChoice>,
    mut candidates: S,
    mut excluded: S,
    clique: &mut Vec<Vertex>,
) where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    debug_assert!(!candidates.is_empty());
    debug_assert!(candidates.is_disjoint(&excluded));

    if candidates.len() == 1 {
        // same as the general case below, stripped down
        for v in candidates.iter() {
            if graph.neighbours(v).is_disjoint(&excluded) {
                report(reporter, clique, v);
            }
        }
        return;
    }

    let mut remaining_candidates: Vec<Vertex> = Vec::with_capacity(candidates.len());
    let pivot = match pivot_choice {
        None => {
            remaining_candidates.extend(candidates.iter());
            None
        }
        Some(PivotChoice::MaxDegreeGlobal) => {
            remaining_candidates.extend(candidates.iter());
            remaining_candidates.iter().copied().max_by_key(|&v| graph.degree(v))
        }
        Some(choice) => {
            // handle locally unconnected candidates right away while looking for the pivot
            let mut pivot = None;
            let mut seen_local_degree = 0;
            for v in candidates.iter() {
                let neighbours = graph.neighbours(v);
                let local_degree = neighbours.intersection_size(&candidates);
                if local_degree == 0 {
                    if neighbours.is_disjoint(&excluded) {
                        report(reporter, clique, v);
                    }
                } else {
                    if seen_local_degree < local_degree {
                        seen_local_degree = local_degree;
                        pivot = Some(v);
                    }
                    remaining_candidates.push(v);
                }
            }
            if remaining_candidates.is_empty() {
                return;
            }
            if choice == PivotChoice::MaxDegreeLocalX {
                for v in excluded.iter() {
                    let local_degree = graph.neighbours(v).intersection_size(&candidates);
                    if seen_local_degree < local_degree {
                        seen_local_degree = local_degree;
                        pivot = Some(v);
                    }
                }
            }
            pivot
        }
    };

    for v in remaining_candidates {
        let neighbours = graph.neighbours(v);
        if let Some(pivot) = pivot {
            if neighbours.contains(pivot) {
                continue;
            }
        }
        candidates.remove(v);
        let neighbouring_candidates = neighbours.intersection(&candidates);
        if !neighbouring_candidates.is_empty() {
            let neighbouring_excluded = neighbours.intersection(&excluded);
            clique.push(v);
            let (candidates, excluded) = (neighbouring_candidates, neighbouring_excluded);
            visit(graph, reporter, pivot_choice, candidates, excluded, clique);
            clique.pop();
        } else if neighbours.is_disjoint(&excluded) {
            report(reporter, clique, v);
        }
        excluded.insert(v);
    }
}

fn report<R: Reporter + ?Sized>(reporter: &mut R, clique: &[Vertex], v: Vertex) {
    let mut c = Vec::with_capacity(clique.len() + 1);
    c.extend_from_slice(clique);
    c.push(v);
    reporter.record(c);
}

/// Naive Bron-Kerbosch: branch on every candidate, no pivot.
pub fn explore_naive<S, R>(graph: &UndirectedGraph<S>, reporter: &mut R)
where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    explore_whole(graph, reporter, None);
}

/// One search over the whole graph, pruned by `pivot_choice`.
pub fn explore_pivot<S, R>(graph: &UndirectedGraph<S>, reporter: &mut R, pivot_choice: PivotChoice)
where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    explore_whole(graph, reporter, Some(pivot_choice));
}

fn explore_whole<S, R>(
    graph: &UndirectedGraph<S>,
    reporter: &mut R,
    pivot_choice: Option<PivotChoice>,
) where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    let candidates = graph.connected_vertices();
    if candidates.is_empty() {
        return;
    }
    let excluded = S::with_capacity(graph.order());
    visit(graph, reporter, pivot_choice, candidates, excluded, &mut vec![]);
}

/// Search rooted at each vertex in degeneracy order, so that each root only
/// considers its own neighbourhood minus the roots handled before it.
pub fn explore_degeneracy<S, R>(
    graph: &UndirectedGraph<S>,
    reporter: &mut R,
    pivot_choice: PivotChoice,
) where
    S: VertexSetLike,
    R: Reporter + ?Sized,
{
    let mut roots = 0;
    for_each_root(graph, |v, candidates, excluded| {
        roots += 1;
        visit(graph, reporter, Some(pivot_choice), candidates, excluded, &mut vec![v]);
    });
    log::debug!("searched from {} roots", roots);
}

/// Walks the degeneracy order and hands out the candidates and excluded
/// vertices of every root that still has candidates left.
///
/// Every root joins the excluded vertices of the roots after it, so this
/// bookkeeping is strictly sequential.
pub(crate) fn for_each_root<S, F>(graph: &UndirectedGraph<S>, mut f: F)
where
    S: VertexSetLike,
    F: FnMut(Vertex, S, S),
{
    // all neighbours are candidates until excluded
    let mut excluded = S::with_capacity(graph.order());
    for v in DegeneracyOrder::new(graph) {
        let neighbours = graph.neighbours(v);
        let neighbouring_excluded = neighbours.intersection(&excluded);
        if neighbouring_excluded.len() < neighbours.len() {
            let neighbouring_candidates = neighbours.difference(&neighbouring_excluded);
            f(v, neighbouring_candidates, neighbouring_excluded);
        }
        excluded.insert(v);
    }
}
