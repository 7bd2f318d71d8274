//! Graph containers, descriptors and concepts.
//!
//! - `basic`: the adjacency-list container and its cursors
//! - `traits`: BGL-style concepts that generic graph code is written against

pub mod basic;
pub mod traits;
mod edge;
mod index;

pub use basic::directed::{AdjacentVertices, DirectedGraph, Edges, OutEdges, Vertices};
pub use edge::Edge;
pub use index::IndexType;
