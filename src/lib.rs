//! # `adjgraph` - Sparse Directed Adjacency-List Graph
//!
//! A directed, unweighted graph container with a Boost.Graph-compatible
//! surface: vertices and edges can be added, queried and iterated, and generic
//! graph code can be written once against the [`graph::traits`] concepts.
//!
//! ## Model
//!
//! - **Vertices** are dense, zero-based ids assigned in insertion order. They
//!   are never removed or renumbered.
//! - **Edges** are ordered `(source, target)` pairs. Self-loops are allowed;
//!   inserting the same pair twice leaves a single edge.
//! - **Storage** is one ordered out-edge set per vertex plus a running edge
//!   count. Nothing else is persisted.
//!
//! ## Ordering Guarantees
//!
//! - [`DirectedGraph::vertices`] yields `0..num_vertices` ascending.
//! - [`DirectedGraph::adjacent_vertices`] yields targets ascending.
//! - [`DirectedGraph::edges`] yields edges ascending by source, then target.
//!
//! Every cursor is double-ended and exact-size, supports constant-time `nth`
//! where the layout allows it, and compares equal to another cursor only if
//! both walk the same graph instance from the same positions.
//!
//! ## Preconditions
//!
//! Vertex ids passed to queries and mutators must name existing vertices. The
//! plain operations panic otherwise; the `try_*` operations return a
//! [`GraphError`]. No operation partially applies.
//!
//! ## Features
//!
//! - `parallel`: rayon views (`par_vertices`, `par_edges`)
//! - `tracing`: structured `trace`/`debug`/`warn` events from mutators and checks
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::{DirectedGraph, Edge};
//!
//! let mut g = DirectedGraph::<u32>::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//!
//! let (ab, inserted) = g.add_edge(a, b);
//! assert!(inserted);
//! assert_eq!(g.add_edge(a, b), (ab, false));
//! assert!(g.add_edge(a, a).1);
//!
//! let edges: Vec<Edge<u32>> = g.edges().collect();
//! assert_eq!(edges, vec![Edge::new(a, a), Edge::new(a, b)]);
//! assert_eq!(g.edges().rev().next(), Some(ab));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
mod trace;

pub use error::GraphError;
pub use graph::{DirectedGraph, Edge, IndexType};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // An edge is exactly its two endpoints.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<Edge<usize>>() == 2 * mem::size_of::<usize>());

    // The container is its set arena plus the edge count; narrower ids do not
    // change the header size.
    assert!(
        mem::size_of::<DirectedGraph<u32>>()
            == mem::size_of::<Vec<Vec<u32>>>() + mem::size_of::<usize>()
    );
    assert!(mem::size_of::<DirectedGraph<u8>>() == mem::size_of::<DirectedGraph<u64>>());
};
