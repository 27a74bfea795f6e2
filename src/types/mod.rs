//! All data types for the graphwalk library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// The opaque payload type carried by vertices and edges.
///
/// Callers can store anything JSON-representable here; the library never
/// inspects it beyond carrying it through factory construction and upserts.
pub type Value = serde_json::Value;
