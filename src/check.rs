//! Verification of reported cliques against the graph they came from.

use crate::graph::UndirectedGraph;
use crate::util::{intersect_sorted, is_subset_sorted};
use crate::vertexset::VertexSetLike;
use crate::{Clique, Vertex};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Violation {
    #[error("{0:?} has fewer than two vertices")]
    TooSmall(Clique),
    #[error("{clique:?} is not a clique: {a} and {b} are not adjacent")]
    NotAClique { clique: Clique, a: Vertex, b: Vertex },
    #[error("{clique:?} is not maximal: {extension} is adjacent to all of it")]
    NotMaximal { clique: Clique, extension: Vertex },
    #[error("{0:?} is reported twice")]
    Duplicate(Clique),
    #[error("{inner:?} is contained in {outer:?}")]
    Contained { inner: Clique, outer: Clique },
}

/// Checks that every reported clique is complete and maximal, and that none
/// repeats or contains another. Cliques may come in any order.
pub fn verify_cliques<S: VertexSetLike>(
    graph: &UndirectedGraph<S>,
    cliques: &[Clique],
) -> Result<(), Violation> {
    let mut sorted: Vec<Clique> = cliques.to_vec();
    for c in &mut sorted {
        c.sort_unstable();
    }
    for c in &sorted {
        verify_clique(graph, c)?;
    }
    sorted.sort();
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(Violation::Duplicate(pair[0].clone()));
        }
    }

    check_containment(&sorted, graph.order())
}

/// `sorted` holds sorted cliques over vertices below `order`
fn check_containment(sorted: &[Clique], order: usize) -> Result<(), Violation> {
    // an outer clique must contain the first vertex of the inner one
    let mut by_vertex: Vec<Vec<usize>> = vec![vec![]; order];
    for (i, c) in sorted.iter().enumerate() {
        for &v in c {
            by_vertex[v as usize].push(i);
        }
    }
    for inner in sorted {
        for &o in &by_vertex[inner[0] as usize] {
            let outer = &sorted[o];
            if outer.len() > inner.len() && is_subset_sorted(inner, outer) {
                return Err(Violation::Contained {
                    inner: inner.clone(),
                    outer: outer.clone(),
                });
            }
        }
    }
    Ok(())
}

/// `clique` must be sorted
fn verify_clique<S: VertexSetLike>(
    graph: &UndirectedGraph<S>,
    clique: &[Vertex],
) -> Result<(), Violation> {
    if clique.len() < 2 {
        return Err(Violation::TooSmall(clique.to_vec()));
    }
    for (i, &a) in clique.iter().enumerate() {
        for &b in &clique[i + 1..] {
            if !graph.neighbours(a).contains(b) {
                return Err(Violation::NotAClique { clique: clique.to_vec(), a, b });
            }
        }
    }
    let sorted_neighbours = |v: Vertex| {
        let mut n: Vec<Vertex> = graph.neighbours(v).iter().collect();
        n.sort_unstable();
        n
    };
    let mut common = sorted_neighbours(clique[0]);
    for &v in &clique[1..] {
        common = intersect_sorted(&common, &sorted_neighbours(v));
    }
    match common.first() {
        Some(&extension) => Err(Violation::NotMaximal { clique: clique.to_vec(), extension }),
        None => Ok(()),
    }
}
