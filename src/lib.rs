//! graphwalk — in-memory graph modeling and traversal.
//!
//! Callers build a graph of named vertices and connecting edges through
//! idempotent upserts, then run color-based depth-first or breadth-first
//! traversals with pre/post visitation hooks and cooperative early stop.
//! Edge identity (directed vs. undirected) is pluggable through factories.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    breadth_first_connected, depth_first, depth_first_connected, first_unvisited, BfsSpec, Color,
    ColorMap, Control, DfsSpec, Visit,
};
pub use graph::{
    DefaultVertexFactory, DirectedEdgeFactory, EdgeFactory, Graph, GraphExtension,
    UndirectedEdgeFactory, VertexFactory,
};
pub use types::{Edge, GraphError, GraphResult, Value, Vertex};
