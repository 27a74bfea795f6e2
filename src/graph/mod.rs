//! In-memory graph operations — the core data structure.

pub mod core;
pub mod extension;
pub mod factory;

pub use self::core::Graph;
pub use extension::GraphExtension;
pub use factory::{
    DefaultVertexFactory, DirectedEdgeFactory, EdgeFactory, UndirectedEdgeFactory, VertexFactory,
};
