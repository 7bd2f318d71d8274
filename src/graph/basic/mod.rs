//! Basic graph implementations.
//!
//! This module contains the fundamental adjacency-list representation that
//! the rest of the crate builds on.

pub mod directed;

pub use directed::DirectedGraph;
