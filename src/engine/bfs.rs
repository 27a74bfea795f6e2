//! Breadth-first traversal of a single connected component.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::color::Color;
use super::spec::{BfsSpec, Control};

/// Breadth-first traversal of the component reachable from `name`.
///
/// A vertex is visited and colored grey at discovery time and queued
/// afterwards, so each vertex is visited exactly once; it turns black once
/// all of its neighbors have been examined. [`Control::Stop`] from the
/// visit callback halts immediately — the vertex it fired on stays grey
/// and is never enqueued.
///
/// Fails with [`GraphError::VertexNotFound`] when `name` is unknown to the
/// graph.
pub fn breadth_first_connected(
    graph: &Graph,
    name: &str,
    spec: &mut BfsSpec<'_>,
) -> GraphResult<Control> {
    spec.setup(graph);
    log::debug!("breadth-first traversal from '{}'", name);

    let root = graph
        .get_vertex(name)
        .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))?;
    let signal = spec.run_visit(root);
    spec.colors.set(name, Color::Grey);
    if signal.is_stop() {
        return Ok(Control::Stop);
    }

    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(name.to_owned());

    while let Some(current) = queue.pop_front() {
        for edge in graph.adjacent_edges(&current) {
            let Some(neighbor) = edge.other_end(&current) else {
                continue;
            };
            if spec.colors.color_of(neighbor) != Color::White {
                continue;
            }
            let vertex = graph
                .get_vertex(neighbor)
                .ok_or_else(|| GraphError::VertexNotFound(neighbor.to_owned()))?;
            let signal = spec.run_visit(vertex);
            spec.colors.set(neighbor, Color::Grey);
            if signal.is_stop() {
                return Ok(Control::Stop);
            }
            queue.push_back(neighbor.to_owned());
        }
        spec.colors.set(&current, Color::Black);
    }
    Ok(Control::Continue)
}
