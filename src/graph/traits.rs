//! Graph concepts in the style of the Boost Graph Library.
//!
//! Generic graph code (searches, orderings, validators) is written against
//! these traits rather than against a concrete container, so it runs unmodified
//! over any graph that provides the required capabilities. Each trait mirrors one
//! BGL concept:
//!
//! | Trait | BGL concept | Operations |
//! |-------|-------------|------------|
//! | [`GraphBase`] | Graph | `source`, `target` |
//! | [`VertexListGraph`] | VertexListGraph | `vertices`, `num_vertices`, `vertex` |
//! | [`EdgeListGraph`] | EdgeListGraph | `edges`, `num_edges` |
//! | [`AdjacencyGraph`] | AdjacencyGraph | `adjacent_vertices` |
//! | [`IncidenceGraph`] | IncidenceGraph | `out_edges`, `out_degree` |
//! | [`EdgeLookup`] | AdjacencyMatrix | `edge` |
//! | [`MutableGraph`] | MutableGraph | `add_vertex`, `add_edge` |

use core::fmt::Debug;
use core::hash::Hash;

/// Vertex and edge descriptor types shared by every graph concept.
pub trait GraphBase {
    /// Identifies a vertex.
    type Vertex: Copy + Eq + Ord + Hash + Debug;

    /// Identifies an edge.
    type Edge: Copy + Eq + Debug;

    /// Returns the vertex `edge` leaves.
    fn source(&self, edge: Self::Edge) -> Self::Vertex;

    /// Returns the vertex `edge` enters.
    fn target(&self, edge: Self::Edge) -> Self::Vertex;
}

/// A graph whose vertices can be enumerated.
pub trait VertexListGraph: GraphBase {
    /// Iterator over all vertices.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns the `index`-th vertex.
    fn vertex(&self, index: usize) -> Self::Vertex;
}

/// A graph whose edges can be enumerated.
pub trait EdgeListGraph: GraphBase {
    /// Iterator over all edges.
    type Edges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns an iterator over all edges.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn num_edges(&self) -> usize;
}

/// A graph that can enumerate the successors of a vertex.
pub trait AdjacencyGraph: GraphBase {
    /// Iterator over the successors of one vertex.
    type AdjacentVertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over the successors of `vertex`.
    fn adjacent_vertices(&self, vertex: Self::Vertex) -> Self::AdjacentVertices<'_>;
}

/// A graph that can enumerate the out-edges of a vertex.
pub trait IncidenceGraph: GraphBase {
    /// Iterator over the out-edges of one vertex.
    type OutEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns an iterator over the out-edges of `vertex`.
    fn out_edges(&self, vertex: Self::Vertex) -> Self::OutEdges<'_>;

    /// Returns the number of out-edges of `vertex`.
    fn out_degree(&self, vertex: Self::Vertex) -> usize;
}

/// A graph that can test whether a given edge exists.
pub trait EdgeLookup: GraphBase {
    /// Returns the edge `a -> b` and whether it is present.
    fn edge(&self, a: Self::Vertex, b: Self::Vertex) -> (Self::Edge, bool);
}

/// A graph that can grow.
pub trait MutableGraph: GraphBase {
    /// Adds a vertex and returns it.
    fn add_vertex(&mut self) -> Self::Vertex;

    /// Adds the edge `a -> b`, returning it and whether it was newly inserted.
    fn add_edge(&mut self, a: Self::Vertex, b: Self::Vertex) -> (Self::Edge, bool);
}
