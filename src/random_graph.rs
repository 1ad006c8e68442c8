use crate::error::{Error, Result};
use crate::graph::UndirectedGraph;
use crate::vertexset::{SeaBuildHasher, VertexSetLike};
use crate::{Edge, Vertex};

use indexmap::IndexSet;
use rand::Rng;

use std::cmp::{max, min};

/// Random graph with exactly `size` distinct edges over `order` vertices,
/// every such graph being equally likely.
pub fn new_undirected<S, R>(rng: &mut R, order: usize, size: usize) -> Result<UndirectedGraph<S>>
where
    S: VertexSetLike,
    R: Rng + ?Sized,
{
    let fully_meshed_size = order * order.saturating_sub(1) / 2;
    if size > fully_meshed_size {
        return Err(Error::TooManyEdges { order, size, max: fully_meshed_size });
    }

    // beyond half of all possible edges, pick the ones to leave out instead
    let complement = size > fully_meshed_size / 2;
    let target = if complement { fully_meshed_size - size } else { size };
    let mut picked: IndexSet<Edge, SeaBuildHasher> =
        IndexSet::with_capacity_and_hasher(target, Default::default());
    while picked.len() < target {
        let a = rng.gen_range(0..order) as Vertex;
        let b = rng.gen_range(0..order) as Vertex;
        if a != b {
            picked.insert([max(a, b), min(a, b)]);
        }
    }

    let edges: Vec<Edge> = if complement {
        (0..order as Vertex)
            .flat_map(|a| (0..a).map(move |b| [a, b]))
            .filter(|e| !picked.contains(e))
            .collect()
    } else {
        picked.into_iter().collect()
    };
    let g = UndirectedGraph::from_edges(order, &edges)?;
    debug_assert_eq!(g.size(), size);
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn exact_sizes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(68);
        for order in 0..6usize {
            let max = order * order.saturating_sub(1) / 2;
            for size in 0..=max {
                let g: UndirectedGraph = new_undirected(&mut rng, order, size).unwrap();
                assert_eq!(g.order(), order);
                assert_eq!(g.size(), size);
            }
        }
    }

    #[test]
    fn too_many_edges() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let r: Result<UndirectedGraph> = new_undirected(&mut rng, 4, 7);
        assert!(matches!(r, Err(Error::TooManyEdges { order: 4, size: 7, max: 6 })));
        let r: Result<UndirectedGraph> = new_undirected(&mut rng, 1, 1);
        assert!(matches!(r, Err(Error::TooManyEdges { max: 0, .. })));
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let g: UndirectedGraph = new_undirected(&mut rng, 50, 200).unwrap();
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let h: UndirectedGraph = new_undirected(&mut rng, 50, 200).unwrap();
        assert_eq!(g.edges(), h.edges());
    }
}
