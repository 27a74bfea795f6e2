//! Depth-first traversal over an explicit frame stack.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::color::Color;
use super::spec::{first_unvisited, Control, DfsSpec};

/// One in-progress vertex: its name and the neighbor scan position.
struct Frame {
    name: String,
    neighbors: Vec<String>,
    next: usize,
}

/// Depth-first traversal of the whole graph, disconnected components
/// included.
///
/// The first component starts at `spec.root` (defaulted to the first
/// unvisited vertex when absent); each further component starts at the
/// first vertex, in insertion order, still white. Returns as soon as any
/// callback signals [`Control::Stop`].
pub fn depth_first(graph: &Graph, spec: &mut DfsSpec<'_>) -> GraphResult<Control> {
    spec.setup(graph);
    log::debug!("depth-first traversal over {} vertices", graph.vertex_count());

    let mut next = spec.root.clone();
    while let Some(name) = next {
        if traverse_component(graph, &name, spec)?.is_stop() {
            return Ok(Control::Stop);
        }
        next = first_unvisited(graph, &spec.colors).map(str::to_owned);
    }
    Ok(Control::Continue)
}

/// Depth-first traversal of the single component reachable from `name`.
///
/// Fails with [`GraphError::VertexNotFound`] when `name` is unknown to the
/// graph.
pub fn depth_first_connected(
    graph: &Graph,
    name: &str,
    spec: &mut DfsSpec<'_>,
) -> GraphResult<Control> {
    spec.setup(graph);
    traverse_component(graph, name, spec)
}

/// The recursive algorithm, run on a heap-allocated frame stack so deep
/// graphs cannot exhaust the call stack.
///
/// Per vertex: pre-visit hook (STOP leaves it grey), grey, neighbors in
/// adjacency order (white ones only), post-visit hook, black. STOP from a
/// hook or a nested component propagates without expanding further edges.
fn traverse_component(graph: &Graph, start: &str, spec: &mut DfsSpec<'_>) -> GraphResult<Control> {
    let mut stack: Vec<Frame> = Vec::new();
    match enter(graph, start, spec)? {
        Entered::Stopped => return Ok(Control::Stop),
        Entered::Frame(frame) => stack.push(frame),
    }

    loop {
        let pending = match stack.last_mut() {
            Some(frame) => next_white_neighbor(frame, spec),
            None => break,
        };
        match pending {
            Some(neighbor) => match enter(graph, &neighbor, spec)? {
                Entered::Stopped => return Ok(Control::Stop),
                Entered::Frame(frame) => stack.push(frame),
            },
            None => {
                if let Some(frame) = stack.pop() {
                    if leave(graph, &frame.name, spec)?.is_stop() {
                        return Ok(Control::Stop);
                    }
                }
            }
        }
    }
    Ok(Control::Continue)
}

enum Entered {
    /// The pre-visit hook stopped the traversal; the vertex stays grey.
    Stopped,
    /// The vertex is grey and ready for neighbor expansion.
    Frame(Frame),
}

fn enter(graph: &Graph, name: &str, spec: &mut DfsSpec<'_>) -> GraphResult<Entered> {
    let vertex = graph
        .get_vertex(name)
        .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))?;

    let signal = spec.run_pre_visit(vertex);
    spec.colors.set(name, Color::Grey);
    if signal.is_stop() {
        return Ok(Entered::Stopped);
    }

    let neighbors = graph
        .adjacent_edges(name)
        .iter()
        .filter_map(|edge| edge.other_end(name))
        .map(str::to_owned)
        .collect();
    Ok(Entered::Frame(Frame {
        name: name.to_owned(),
        neighbors,
        next: 0,
    }))
}

fn leave(graph: &Graph, name: &str, spec: &mut DfsSpec<'_>) -> GraphResult<Control> {
    let vertex = graph
        .get_vertex(name)
        .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))?;
    let signal = spec.run_post_visit(vertex);
    spec.colors.set(name, Color::Black);
    Ok(signal)
}

/// Advance the frame's scan to the next still-white neighbor, if any.
///
/// Colors are re-read on every call, so a neighbor visited through a
/// sibling since the frame was pushed is skipped.
fn next_white_neighbor(frame: &mut Frame, spec: &DfsSpec<'_>) -> Option<String> {
    while frame.next < frame.neighbors.len() {
        let neighbor = &frame.neighbors[frame.next];
        frame.next += 1;
        if spec.colors.color_of(neighbor) == Color::White {
            return Some(neighbor.clone());
        }
    }
    None
}
