//! Errors returned by the checked (`try_*`) graph operations.

use thiserror::Error;

/// A precondition failure reported by a checked graph operation.
///
/// The unchecked operations panic with the same message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id does not name an existing vertex.
    #[error("vertex {vertex} out of bounds for graph with {num_vertices} vertices")]
    VertexOutOfBounds {
        /// The offending vertex position.
        vertex: usize,
        /// The vertex count at the time of the call.
        num_vertices: usize,
    },
    /// The vertex id type cannot represent the next vertex.
    #[error("vertex index {index} does not fit in the graph's index type")]
    IndexOverflow {
        /// The position the new vertex would have received.
        index: usize,
    },
}

/// Convenience alias for results of checked graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
