use crate::graph::UndirectedGraph;
use crate::vertexset::VertexSetLike;
use crate::Vertex;

use std::iter::FusedIterator;

/// Yields every vertex of positive degree exactly once, each time picking a
/// vertex with the fewest neighbours among the vertices not yielded yet.
///
/// Vertices wait in a bucket queue indexed by that remaining degree. When a
/// neighbour is yielded, a vertex is pushed again into the next lower bucket
/// and its old entry is left behind; stale entries are skipped when popped.
pub struct DegeneracyOrder<'a, S> {
    graph: &'a UndirectedGraph<S>,
    // None: isolated or already yielded
    priority_per_vertex: Vec<Option<usize>>,
    stack_per_priority: Vec<Vec<Vertex>>,
    // every bucket below this one is empty
    lowest: usize,
    remaining: usize,
}

impl<'a, S: VertexSetLike> DegeneracyOrder<'a, S> {
    pub fn new(graph: &'a UndirectedGraph<S>) -> Self {
        let mut priority_per_vertex = vec![None; graph.order()];
        let mut stack_per_priority = vec![vec![]; graph.max_degree() + 1];
        let mut remaining = 0;
        for v in graph.iter_vertices() {
            let degree = graph.degree(v);
            if degree > 0 {
                priority_per_vertex[v as usize] = Some(degree);
                stack_per_priority[degree].push(v);
                remaining += 1;
            }
        }
        DegeneracyOrder {
            graph,
            priority_per_vertex,
            stack_per_priority,
            lowest: 0,
            remaining,
        }
    }

    fn pop(&mut self) -> Option<(Vertex, usize)> {
        while self.lowest < self.stack_per_priority.len() {
            if let Some(v) = self.stack_per_priority[self.lowest].pop() {
                return Some((v, self.lowest));
            }
            self.lowest += 1;
        }
        None
    }

    fn requeue(&mut self, v: Vertex, priority: usize) {
        self.priority_per_vertex[v as usize] = Some(priority);
        self.stack_per_priority[priority].push(v);
        if priority < self.lowest {
            self.lowest = priority;
        }
    }
}

impl<S: VertexSetLike> Iterator for DegeneracyOrder<'_, S> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let (pick, bucket) = self.pop()?;
            if self.priority_per_vertex[pick as usize] != Some(bucket) {
                // stale entry of a vertex already yielded
                continue;
            }
            self.priority_per_vertex[pick as usize] = None;
            self.remaining -= 1;
            let graph = self.graph;
            for w in graph.neighbours(pick).iter() {
                if let Some(p) = self.priority_per_vertex[w as usize] {
                    debug_assert!(p > 0);
                    self.requeue(w, p - 1);
                }
            }
            return Some(pick);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: VertexSetLike> ExactSizeIterator for DegeneracyOrder<'_, S> {}
impl<S: VertexSetLike> FusedIterator for DegeneracyOrder<'_, S> {}

/// Degeneracy order of the connected vertices, cut after `count` vertices
/// if given.
/// ```
/// use bron_kerbosch::graph::UndirectedGraph;
/// use bron_kerbosch::degeneracy::degeneracy_ordering;
/// // a triangle 0,1,2 with a pendant vertex 3 hanging off 2
/// let g: UndirectedGraph =
///     UndirectedGraph::from_edges(5, &[[0, 1], [1, 2], [0, 2], [2, 3]]).unwrap();
/// let order = degeneracy_ordering(&g, None);
/// assert_eq!(order[0], 3);
/// assert_eq!(order.len(), 4);
/// assert_eq!(degeneracy_ordering(&g, Some(2)).len(), 2);
/// ```
pub fn degeneracy_ordering<S: VertexSetLike>(
    graph: &UndirectedGraph<S>,
    count: Option<usize>,
) -> Vec<Vertex> {
    let order = DegeneracyOrder::new(graph);
    match count {
        Some(n) => order.take(n).collect(),
        None => order.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_graph::new_undirected;
    use crate::vertexset::IndexVertexSet;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    /// Checks the ordering and returns the degeneracy it realizes.
    fn check_ordering<S: VertexSetLike>(g: &UndirectedGraph<S>, ordering: &[Vertex]) -> usize {
        let mut sorted = ordering.to_vec();
        sorted.sort_unstable();
        let mut connected: Vec<Vertex> = g.connected_vertices().iter().collect();
        connected.sort_unstable();
        assert_eq!(sorted, connected, "each connected vertex exactly once");

        let mut visited = vec![false; g.order()];
        let mut degeneracy = 0;
        for (i, &v) in ordering.iter().enumerate() {
            let remaining_degree =
                |u: Vertex| g.neighbours(u).iter().filter(|&w| !visited[w as usize]).count();
            let d = remaining_degree(v);
            for &later in &ordering[i + 1..] {
                assert!(d <= remaining_degree(later), "{} picked before {}", v, later);
            }
            degeneracy = degeneracy.max(d);
            visited[v as usize] = true;
        }
        degeneracy
    }

    #[test]
    fn empty_and_isolated() {
        let g: UndirectedGraph = UndirectedGraph::from_edges(0, &[]).unwrap();
        assert!(degeneracy_ordering(&g, None).is_empty());
        let g: UndirectedGraph = UndirectedGraph::from_edges(3, &[]).unwrap();
        assert!(degeneracy_ordering(&g, None).is_empty());
    }

    #[test]
    fn known_degeneracies() {
        let path: UndirectedGraph =
            UndirectedGraph::from_edges(4, &[[0, 1], [1, 2], [2, 3]]).unwrap();
        let o = degeneracy_ordering(&path, None);
        assert!(o[0] == 0 || o[0] == 3);
        assert_eq!(check_ordering(&path, &o), 1);

        let k4: UndirectedGraph =
            UndirectedGraph::from_edges(4, &[[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]])
                .unwrap();
        assert_eq!(check_ordering(&k4, &degeneracy_ordering(&k4, None)), 3);

        let sample: UndirectedGraph = crate::examples::sample();
        let o = degeneracy_ordering(&sample, None);
        assert!(o[0] == 6 || o[0] == 7);
        assert_eq!(check_ordering(&sample, &o), 3);
    }

    #[test]
    fn exact_size() {
        let g: UndirectedGraph = crate::examples::sample();
        let mut it = DegeneracyOrder::new(&g);
        assert_eq!(it.len(), 7);
        it.next();
        assert_eq!(it.len(), 6);
        assert_eq!(it.by_ref().count(), 6);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn random_graphs() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(19);
        for (order, size) in [(10, 0), (10, 5), (20, 60), (50, 300), (80, 1200)] {
            let g: UndirectedGraph<IndexVertexSet> = new_undirected(&mut rng, order, size).unwrap();
            check_ordering(&g, &degeneracy_ordering(&g, None));
        }
    }
}
