//! Error types for the graphwalk library.

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Traversal was started from a vertex name the graph does not contain.
    #[error("Vertex '{0}' not found")]
    VertexNotFound(String),

    /// The same extension identifier was applied twice to one graph.
    #[error("Extension '{0}' already applied to this graph")]
    DuplicateExtension(String),

    /// An extension does not satisfy the extension contract.
    #[error("Invalid extension: {0}")]
    InvalidExtension(String),
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
