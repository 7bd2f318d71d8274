//! Rayon views over a [`DirectedGraph`].
//!
//! Read-only. Collecting either view yields the same order as the sequential
//! cursor it mirrors.

use rayon::prelude::*;

use super::DirectedGraph;
use crate::graph::{Edge, IndexType};

impl<Ix: IndexType> DirectedGraph<Ix> {
    /// Parallel counterpart of [`vertices`](Self::vertices).
    pub fn par_vertices(&self) -> impl IndexedParallelIterator<Item = Ix> + '_ {
        (0..self.num_vertices()).into_par_iter().map(|i| Ix::new(i))
    }

    /// Parallel counterpart of [`edges`](Self::edges).
    pub fn par_edges(&self) -> impl ParallelIterator<Item = Edge<Ix>> + '_ {
        self.adjacency
            .par_iter()
            .enumerate()
            .flat_map_iter(|(source, set)| {
                let source = Ix::new(source);
                set.as_slice()
                    .iter()
                    .map(move |&target| Edge::new(source, target))
            })
    }
}

#[cfg(test)]
mod tests {
    use rayon::prelude::*;

    use crate::graph::{DirectedGraph, Edge};

    #[test]
    fn par_edges_match_sequential_order() {
        let g = DirectedGraph::<u32>::from_edges([(3, 1), (0, 2), (0, 1), (5, 5), (3, 0)]);
        let sequential: Vec<Edge<u32>> = g.edges().collect();
        let parallel: Vec<Edge<u32>> = g.par_edges().collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn par_vertices_cover_the_id_range() {
        let g = DirectedGraph::<usize>::with_vertices(1_000);
        let ids: Vec<usize> = g.par_vertices().collect();
        assert_eq!(ids, (0..1_000).collect::<Vec<_>>());
        assert_eq!(g.par_vertices().map(|v| g.out_degree(v)).sum::<usize>(), 0);
    }
}
