//! Traversal configuration values — callbacks, colors, root selection.

use crate::graph::Graph;
use crate::types::Vertex;

use super::color::{Color, ColorMap};

/// Signal returned by visitation callbacks and traversal entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep traversing.
    Continue,
    /// Halt the traversal at the next checkpoint.
    Stop,
}

impl Control {
    /// Whether this signal halts traversal.
    pub fn is_stop(&self) -> bool {
        *self == Self::Stop
    }
}

/// Boxed visitation callback: receives the visited vertex, decides whether
/// traversal continues.
pub type Visit<'a> = Box<dyn FnMut(&Vertex) -> Control + 'a>;

/// Configuration for a depth-first traversal.
///
/// Colors are mutated in place and persist after the traversal returns, so
/// a spec can be inspected afterwards or reused to chain traversals over
/// the same coloring.
#[derive(Default)]
pub struct DfsSpec<'a> {
    /// Per-vertex visitation state.
    pub colors: ColorMap,
    /// Starting vertex for the first component. Defaulted by `setup` when
    /// absent.
    pub root: Option<String>,
    pre_visit: Option<Visit<'a>>,
    post_visit: Option<Visit<'a>>,
}

impl<'a> DfsSpec<'a> {
    /// Create an empty spec; colors and root are defaulted at traversal
    /// time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting vertex.
    pub fn root(mut self, name: impl Into<String>) -> Self {
        self.root = Some(name.into());
        self
    }

    /// Supply an explicit color map, e.g. to resume a previous traversal.
    pub fn colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    /// Callback invoked before a vertex's neighbors are explored.
    pub fn pre_visit<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Vertex) -> Control + 'a,
    {
        self.pre_visit = Some(Box::new(f));
        self
    }

    /// Callback invoked after all of a vertex's descendants are done.
    pub fn post_visit<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Vertex) -> Control + 'a,
    {
        self.post_visit = Some(Box::new(f));
        self
    }

    /// Complete a partially configured spec against `graph`.
    ///
    /// Runs once per traversal invocation: an empty color map gets one
    /// white entry per known vertex in insertion order, and an absent root
    /// becomes the first unvisited vertex.
    pub(crate) fn setup(&mut self, graph: &Graph) {
        setup_colors(&mut self.colors, graph);
        if self.root.is_none() {
            self.root = first_unvisited(graph, &self.colors).map(str::to_owned);
        }
    }

    pub(crate) fn run_pre_visit(&mut self, vertex: &Vertex) -> Control {
        match self.pre_visit.as_mut() {
            Some(f) => f(vertex),
            None => Control::Continue,
        }
    }

    pub(crate) fn run_post_visit(&mut self, vertex: &Vertex) -> Control {
        match self.post_visit.as_mut() {
            Some(f) => f(vertex),
            None => Control::Continue,
        }
    }
}

/// Configuration for a breadth-first traversal.
#[derive(Default)]
pub struct BfsSpec<'a> {
    /// Per-vertex visitation state.
    pub colors: ColorMap,
    /// Starting vertex. Defaulted by `setup` when absent.
    pub root: Option<String>,
    visit: Option<Visit<'a>>,
}

impl<'a> BfsSpec<'a> {
    /// Create an empty spec; colors and root are defaulted at traversal
    /// time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting vertex.
    pub fn root(mut self, name: impl Into<String>) -> Self {
        self.root = Some(name.into());
        self
    }

    /// Supply an explicit color map, e.g. to resume a previous traversal.
    pub fn colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    /// Callback invoked once per discovered vertex.
    pub fn visit<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Vertex) -> Control + 'a,
    {
        self.visit = Some(Box::new(f));
        self
    }

    /// Complete a partially configured spec against `graph`, with the same
    /// defaulting rules as the depth-first spec.
    pub(crate) fn setup(&mut self, graph: &Graph) {
        setup_colors(&mut self.colors, graph);
        if self.root.is_none() {
            self.root = first_unvisited(graph, &self.colors).map(str::to_owned);
        }
    }

    pub(crate) fn run_visit(&mut self, vertex: &Vertex) -> Control {
        match self.visit.as_mut() {
            Some(f) => f(vertex),
            None => Control::Continue,
        }
    }
}

fn setup_colors(colors: &mut ColorMap, graph: &Graph) {
    if colors.is_empty() {
        for vertex in graph.vertices() {
            colors.set(&vertex.name, Color::White);
        }
    }
}

/// The first vertex, in insertion order, whose color is neither grey nor
/// black.
///
/// Drives component selection for whole-graph traversal, and is public so
/// callers can compose their own multi-component drivers.
pub fn first_unvisited<'g>(graph: &'g Graph, colors: &ColorMap) -> Option<&'g str> {
    graph
        .vertices()
        .iter()
        .map(|v| v.name.as_str())
        .find(|name| colors.is_unvisited(name))
}
