use crate::error::{Error, Result};
use crate::vertexset::{BitVertexSet, VertexSetLike};
use crate::{Edge, Vertex};

use rayon::prelude::*;

/// Immutable simple undirected graph, one neighbour set per vertex.
///
/// Construction checks that no vertex is its own neighbour, that every
/// neighbour id is in range and that adjacency is symmetric. Nothing mutates
/// the graph afterwards.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<S = BitVertexSet> {
    adjacencies: Vec<S>,
    size: usize,
    max_degree: usize,
}

impl<S: VertexSetLike> UndirectedGraph<S> {
    pub fn new(adjacencies: Vec<S>) -> Result<Self> {
        let order = adjacencies.len();
        (0..order).into_par_iter().try_for_each(|v| {
            let v = v as Vertex;
            for w in adjacencies[v as usize].iter() {
                if w == v {
                    return Err(Error::SelfLoop(v));
                }
                if w as usize >= order {
                    return Err(Error::OutOfRange { vertex: w, order });
                }
                if !adjacencies[w as usize].contains(v) {
                    return Err(Error::Asymmetric { from: v, to: w });
                }
            }
            Ok(())
        })?;

        let sum_degree: usize = adjacencies.iter().map(|a| a.len()).sum();
        if sum_degree % 2 != 0 {
            return Err(Error::OddDegreeSum(sum_degree));
        }
        let max_degree = adjacencies.iter().map(|a| a.len()).max().unwrap_or(0);
        log::debug!("graph of order {}, size {}, max degree {}", order, sum_degree / 2, max_degree);
        Ok(UndirectedGraph {
            adjacencies,
            size: sum_degree / 2,
            max_degree,
        })
    }

    /// Builds a graph of `order` vertices. Duplicate edges, in either
    /// direction, collapse into one.
    /// ```
    /// use bron_kerbosch::graph::UndirectedGraph;
    /// let g: UndirectedGraph = UndirectedGraph::from_edges(4, &[[0, 1], [1, 2], [2, 1]]).unwrap();
    /// assert_eq!(g.size(), 2);
    /// assert_eq!(g.degree(1), 2);
    /// assert_eq!(g.degree(3), 0);
    /// ```
    pub fn from_edges(order: usize, edges: &[Edge]) -> Result<Self> {
        let mut adjacencies = vec![S::default(); order];
        for &[a, b] in edges {
            for x in [a, b] {
                if x as usize >= order {
                    return Err(Error::OutOfRange { vertex: x, order });
                }
            }
            if a == b {
                return Err(Error::SelfLoop(a));
            }
            adjacencies[a as usize].insert(b);
            adjacencies[b as usize].insert(a);
        }
        Self::new(adjacencies)
    }

    pub fn order(&self) -> usize {
        self.adjacencies.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adjacencies[v as usize].len()
    }

    pub fn neighbours(&self, v: Vertex) -> &S {
        &self.adjacencies[v as usize]
    }

    pub fn iter_vertices(&self) -> std::ops::Range<Vertex> {
        0..(self.order() as Vertex)
    }

    /// all vertices with at least one neighbour
    pub fn connected_vertices(&self) -> S {
        self.iter_vertices().filter(|&v| self.degree(v) > 0).collect()
    }

    /// Some vertex of maximum degree; the lowest id wins ties.
    pub fn max_degree_vertex(&self) -> Result<Vertex> {
        if self.max_degree == 0 {
            return Err(Error::NoEdges);
        }
        self.iter_vertices()
            .find(|&v| self.degree(v) == self.max_degree)
            .ok_or(Error::NoEdges)
    }

    /// every edge once, as `[high, low]`
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.size);
        for from in self.iter_vertices() {
            for to in self.neighbours(from).iter() {
                if from > to {
                    edges.push([from, to]);
                }
            }
        }
        edges
    }

    /// Same graph with another vertex set representation.
    pub fn convert<T: VertexSetLike>(&self) -> UndirectedGraph<T> {
        UndirectedGraph {
            adjacencies: self.adjacencies.iter().map(|a| a.iter().collect()).collect(),
            size: self.size,
            max_degree: self.max_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertexset::IndexVertexSet;

    fn set(vs: &[Vertex]) -> BitVertexSet {
        vs.iter().copied().collect()
    }

    #[test]
    fn properties() {
        let g: UndirectedGraph = crate::examples::sample();
        assert_eq!(g.order(), 8);
        assert_eq!(g.size(), 11);
        assert_eq!(g.max_degree(), 4);
        assert_eq!(g.degree(0), 0);
        assert_eq!(g.degree(5), 4);
        assert_eq!(g.max_degree_vertex().unwrap(), 2);
        assert_eq!(g.neighbours(6), &set(&[5, 7]));
        assert_eq!(g.connected_vertices(), set(&[1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(g.edges().len(), g.size());
    }

    #[test]
    fn empty() {
        let g: UndirectedGraph = UndirectedGraph::new(vec![]).unwrap();
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
        assert!(g.connected_vertices().is_empty());
        assert!(matches!(g.max_degree_vertex(), Err(Error::NoEdges)));

        let g: UndirectedGraph = UndirectedGraph::from_edges(3, &[]).unwrap();
        assert_eq!(g.max_degree(), 0);
        assert!(matches!(g.max_degree_vertex(), Err(Error::NoEdges)));
    }

    #[test]
    fn rejects_self_loop() {
        let r = UndirectedGraph::new(vec![set(&[0, 1]), set(&[0])]);
        assert!(matches!(r, Err(Error::SelfLoop(0))));
        let r: Result<UndirectedGraph> = UndirectedGraph::from_edges(2, &[[1, 1]]);
        assert!(matches!(r, Err(Error::SelfLoop(1))));
    }

    #[test]
    fn rejects_asymmetry() {
        let r = UndirectedGraph::new(vec![set(&[1]), set(&[])]);
        assert!(matches!(r, Err(Error::Asymmetric { from: 0, to: 1 })));
    }

    #[test]
    fn rejects_out_of_range() {
        let r = UndirectedGraph::new(vec![set(&[2]), set(&[])]);
        assert!(matches!(r, Err(Error::OutOfRange { vertex: 2, order: 2 })));
        let r: Result<UndirectedGraph> = UndirectedGraph::from_edges(2, &[[0, 5]]);
        assert!(matches!(r, Err(Error::OutOfRange { vertex: 5, order: 2 })));
    }

    #[test]
    fn convert_keeps_structure() {
        let g: UndirectedGraph = crate::examples::sample();
        let h: UndirectedGraph<IndexVertexSet> = g.convert();
        assert_eq!(h.size(), g.size());
        assert_eq!(h.max_degree(), g.max_degree());
        let mut e = h.edges();
        e.sort();
        let mut f = g.edges();
        f.sort();
        assert_eq!(e, f);
    }
}
