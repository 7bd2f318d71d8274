//! A sparse directed graph stored as an adjacency list of ordered out-edge sets.
//!
//! Vertices are dense ids handed out in insertion order and never removed, so the
//! graph is a growable arena of per-vertex out-edge sets indexed by id. Each set
//! keeps its targets sorted and deduplicated, which gives:
//! - idempotent `add_edge` (re-inserting an edge reports `inserted == false`),
//! - logarithmic `edge` lookups,
//! - a canonical edge order (source ascending, then target ascending) that every
//!   traversal reproduces exactly.
//!
//! Cursors ([`Vertices`], [`AdjacentVertices`], [`OutEdges`], [`Edges`]) borrow
//! the graph, so the borrow checker rejects any mutation while one is alive.

use crate::error::{GraphError, Result};
use crate::graph::traits::{
    AdjacencyGraph, EdgeListGraph, EdgeLookup, GraphBase, IncidenceGraph, MutableGraph,
    VertexListGraph,
};
use crate::graph::{Edge, IndexType};
use crate::trace::{debug_event, trace_event, warn_event};

pub use iter::{AdjacentVertices, Edges, OutEdges, Vertices};
use storage::OutEdgeSet;

/// A directed, unweighted graph with set semantics on edges.
///
/// `Ix` is the vertex id type (see [`IndexType`]); it defaults to `usize`.
///
/// Passing a vertex id that does not name an existing vertex to any query or
/// mutator panics. Each such operation has a `try_*` twin that reports the
/// failure as a [`GraphError`] instead. Either way the graph is left untouched.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends an empty out-edge set |
/// | `add_edge` | \(O(\text{out-degree})\) | Binary search, then a sorted insert |
/// | `edge` | \(O(\log \text{out-degree})\) | Binary search |
/// | `num_vertices` / `num_edges` | \(O(1)\) | Stored counts |
/// | `adjacent_vertices` | \(O(1)\) to create | Lazy view over the out-edge set |
/// | `edges` | \(O(1)\) amortized per step | Skips vertices without out-edges |
///
/// # Examples
///
/// ```
/// use adjgraph::DirectedGraph;
///
/// let mut g = DirectedGraph::<u32>::new();
/// let a = g.add_vertex();
/// let b = g.add_vertex();
/// let c = g.add_vertex();
///
/// assert!(g.add_edge(a, c).1);
/// assert!(g.add_edge(a, b).1);
/// assert!(!g.add_edge(a, b).1);
///
/// assert_eq!(g.num_edges(), 2);
/// assert_eq!(g.adjacent_vertices(a).collect::<Vec<_>>(), vec![b, c]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DirectedGraph<Ix = usize> {
    adjacency: Vec<OutEdgeSet<Ix>>,
    edge_count: usize,
}

impl<Ix: IndexType> DirectedGraph<Ix> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        let graph = Self {
            adjacency: Vec::new(),
            edge_count: 0,
        };
        debug_assert!(graph.is_valid());
        graph
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices and zero edges.
    ///
    /// # Panics
    /// Panics if `Ix` cannot represent `vertex_count - 1`.
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut graph = Self::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            graph.add_vertex();
        }
        graph
    }

    /// Builds a graph from `(source, target)` pairs.
    ///
    /// The vertex range grows to cover every endpoint; duplicate pairs collapse
    /// into one edge.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Ix, Ix)>,
    {
        let mut graph = Self::new();
        for (source, target) in edges {
            let needed = source.max(target).index() + 1;
            while graph.num_vertices() < needed {
                graph.add_vertex();
            }
            graph.insert_edge(source.index(), source, target);
        }
        graph
    }

    /// Adds a vertex with no out-edges and returns its id.
    ///
    /// The id equals the vertex count before the call.
    ///
    /// # Panics
    /// Panics if `Ix` cannot represent the new id.
    #[track_caller]
    pub fn add_vertex(&mut self) -> Ix {
        match self.try_add_vertex() {
            Ok(vertex) => vertex,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds a vertex with no out-edges, or reports that `Ix` is exhausted.
    pub fn try_add_vertex(&mut self) -> Result<Ix> {
        let index = self.adjacency.len();
        let Some(vertex) = Ix::try_new(index) else {
            debug_event!(index, "vertex index overflow");
            return Err(GraphError::IndexOverflow { index });
        };
        self.adjacency.push(OutEdgeSet::new());
        trace_event!(vertex = index, "add_vertex");
        Ok(vertex)
    }

    /// Adds the edge `a -> b` unless it is already present.
    ///
    /// Returns the edge together with `true` if it was inserted, or `false` if
    /// it already existed (in which case nothing changes).
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a vertex of this graph.
    #[track_caller]
    pub fn add_edge(&mut self, a: Ix, b: Ix) -> (Edge<Ix>, bool) {
        let source = self.expect_vertex(a);
        self.expect_vertex(b);
        self.insert_edge(source, a, b)
    }

    /// Checked form of [`add_edge`](Self::add_edge).
    pub fn try_add_edge(&mut self, a: Ix, b: Ix) -> Result<(Edge<Ix>, bool)> {
        let source = self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.insert_edge(source, a, b))
    }

    fn insert_edge(&mut self, source: usize, a: Ix, b: Ix) -> (Edge<Ix>, bool) {
        let inserted = self.adjacency[source].insert(b);
        if inserted {
            self.edge_count += 1;
        }
        trace_event!(from = source, to = b.index(), inserted, "add_edge");
        (Edge::new(a, b), inserted)
    }

    /// Looks up the edge `a -> b`.
    ///
    /// Returns the edge value together with whether it exists.
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a vertex of this graph.
    #[track_caller]
    pub fn edge(&self, a: Ix, b: Ix) -> (Edge<Ix>, bool) {
        let source = self.expect_vertex(a);
        self.expect_vertex(b);
        (Edge::new(a, b), self.adjacency[source].contains(b))
    }

    /// Checked form of [`edge`](Self::edge).
    pub fn try_edge(&self, a: Ix, b: Ix) -> Result<(Edge<Ix>, bool)> {
        let source = self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok((Edge::new(a, b), self.adjacency[source].contains(b)))
    }

    /// Returns the targets of `v`'s out-edges in ascending order.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    #[track_caller]
    pub fn adjacent_vertices(&self, v: Ix) -> AdjacentVertices<'_, Ix> {
        let source = self.expect_vertex(v);
        AdjacentVertices::new(self, source)
    }

    /// Checked form of [`adjacent_vertices`](Self::adjacent_vertices).
    pub fn try_adjacent_vertices(&self, v: Ix) -> Result<AdjacentVertices<'_, Ix>> {
        let source = self.check_vertex(v)?;
        Ok(AdjacentVertices::new(self, source))
    }

    /// Returns `v`'s out-edges in ascending target order.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    #[track_caller]
    pub fn out_edges(&self, v: Ix) -> OutEdges<'_, Ix> {
        let source = self.expect_vertex(v);
        OutEdges::new(self, source)
    }

    /// Returns the number of out-edges of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of this graph.
    #[track_caller]
    pub fn out_degree(&self, v: Ix) -> usize {
        let source = self.expect_vertex(v);
        self.adjacency[source].len()
    }

    /// Returns every edge, ordered by source and then by target.
    pub fn edges(&self) -> Edges<'_, Ix> {
        Edges::new(self)
    }

    /// Returns every vertex id in ascending order.
    pub fn vertices(&self) -> Vertices<'_, Ix> {
        Vertices::new(self)
    }

    /// Returns the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the vertex an edge leaves.
    #[inline]
    pub fn source(&self, edge: Edge<Ix>) -> Ix {
        edge.source
    }

    /// Returns the vertex an edge enters.
    #[inline]
    pub fn target(&self, edge: Edge<Ix>) -> Ix {
        edge.target
    }

    /// Returns the `index`-th vertex, which is `index` itself.
    ///
    /// # Panics
    /// Panics if `index >= self.num_vertices()`.
    #[track_caller]
    pub fn vertex(&self, index: usize) -> Ix {
        let n = self.num_vertices();
        assert!(
            index < n,
            "vertex {index} out of bounds for graph with {n} vertices"
        );
        Ix::new(index)
    }

    /// Returns `true` if `v` names a vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, v: Ix) -> bool {
        v.index() < self.adjacency.len()
    }

    /// Checks every structural invariant of the graph.
    ///
    /// Verifies that:
    /// 1. Each out-edge set is strictly ascending (sorted, no duplicates)
    /// 2. Every stored target names an existing vertex
    /// 3. The stored edge count equals the total out-edge set size
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn is_valid(&self) -> bool {
        let n = self.adjacency.len();
        let mut total = 0usize;
        for (vertex, set) in self.adjacency.iter().enumerate() {
            if !set.is_strictly_sorted() {
                warn_event!(vertex, "out-edge set is not strictly ascending");
                return false;
            }
            if set.as_slice().last().is_some_and(|t| t.index() >= n) {
                warn_event!(vertex, "out-edge target out of bounds");
                return false;
            }
            total += set.len();
        }
        if total != self.edge_count {
            warn_event!(total, stored = self.edge_count, "edge count mismatch");
            return false;
        }
        true
    }

    #[inline]
    #[track_caller]
    fn expect_vertex(&self, v: Ix) -> usize {
        let index = v.index();
        let n = self.adjacency.len();
        assert!(
            index < n,
            "vertex {index} out of bounds for graph with {n} vertices"
        );
        index
    }

    #[inline]
    fn check_vertex(&self, v: Ix) -> Result<usize> {
        let index = v.index();
        let num_vertices = self.adjacency.len();
        if index < num_vertices {
            Ok(index)
        } else {
            debug_event!(vertex = index, num_vertices, "vertex out of bounds");
            Err(GraphError::VertexOutOfBounds {
                vertex: index,
                num_vertices,
            })
        }
    }
}

impl<Ix: IndexType> Default for DirectedGraph<Ix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ix: IndexType> core::fmt::Debug for DirectedGraph<Ix> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("num_vertices", &self.num_vertices())
            .field("num_edges", &self.edge_count)
            .field("edges", &self.edges().map(Edge::into_pair).collect::<Vec<_>>())
            .finish()
    }
}

impl<Ix: IndexType> GraphBase for DirectedGraph<Ix> {
    type Vertex = Ix;
    type Edge = Edge<Ix>;

    fn source(&self, edge: Edge<Ix>) -> Ix {
        edge.source
    }

    fn target(&self, edge: Edge<Ix>) -> Ix {
        edge.target
    }
}

impl<Ix: IndexType> VertexListGraph for DirectedGraph<Ix> {
    type Vertices<'a> = Vertices<'a, Ix>;

    fn vertices(&self) -> Vertices<'_, Ix> {
        DirectedGraph::vertices(self)
    }

    fn num_vertices(&self) -> usize {
        DirectedGraph::num_vertices(self)
    }

    fn vertex(&self, index: usize) -> Ix {
        DirectedGraph::vertex(self, index)
    }
}

impl<Ix: IndexType> EdgeListGraph for DirectedGraph<Ix> {
    type Edges<'a> = Edges<'a, Ix>;

    fn edges(&self) -> Edges<'_, Ix> {
        DirectedGraph::edges(self)
    }

    fn num_edges(&self) -> usize {
        DirectedGraph::num_edges(self)
    }
}

impl<Ix: IndexType> AdjacencyGraph for DirectedGraph<Ix> {
    type AdjacentVertices<'a> = AdjacentVertices<'a, Ix>;

    fn adjacent_vertices(&self, vertex: Ix) -> AdjacentVertices<'_, Ix> {
        DirectedGraph::adjacent_vertices(self, vertex)
    }
}

impl<Ix: IndexType> IncidenceGraph for DirectedGraph<Ix> {
    type OutEdges<'a> = OutEdges<'a, Ix>;

    fn out_edges(&self, vertex: Ix) -> OutEdges<'_, Ix> {
        DirectedGraph::out_edges(self, vertex)
    }

    fn out_degree(&self, vertex: Ix) -> usize {
        DirectedGraph::out_degree(self, vertex)
    }
}

impl<Ix: IndexType> EdgeLookup for DirectedGraph<Ix> {
    fn edge(&self, a: Ix, b: Ix) -> (Edge<Ix>, bool) {
        DirectedGraph::edge(self, a, b)
    }
}

impl<Ix: IndexType> MutableGraph for DirectedGraph<Ix> {
    fn add_vertex(&mut self) -> Ix {
        DirectedGraph::add_vertex(self)
    }

    fn add_edge(&mut self, a: Ix, b: Ix) -> (Edge<Ix>, bool) {
        DirectedGraph::add_edge(self, a, b)
    }
}

mod iter;
#[cfg(feature = "parallel")]
mod parallel;
mod storage;
#[cfg(test)]
mod tests;
