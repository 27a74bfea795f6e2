//! Capability contract for graph extensions.

use crate::types::GraphResult;

use super::Graph;

/// A named, one-shot mutation applied to a graph at most once.
///
/// Plugin-style layers implement this to decorate a graph (extra vertices,
/// attribute conventions, derived edges). The graph records each applied
/// identifier and rejects repeats, so extensions can assume a clean slate.
pub trait GraphExtension {
    /// Identifier recorded on the graph. Must be non-blank.
    fn id(&self) -> &str;

    /// Apply this extension to `graph`.
    fn apply(&self, graph: &mut Graph) -> GraphResult<()>;
}
