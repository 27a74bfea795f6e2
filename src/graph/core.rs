//! Core graph structure — vertices + edges with upsert semantics.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex};

use super::extension::GraphExtension;
use super::factory::{
    DefaultVertexFactory, DirectedEdgeFactory, EdgeFactory, UndirectedEdgeFactory, VertexFactory,
};

/// An in-memory graph of named vertices and connecting edges.
///
/// Vertices are kept in first-insertion order and are unique by name. The
/// edge set is deduplicated through the active [`EdgeFactory`]'s equality,
/// so the same graph code serves directed and undirected identity. Both
/// `vertex` and `edge` are idempotent upserts: re-referencing an existing
/// name or an equal endpoint pair returns the existing instance.
pub struct Graph {
    /// All vertices, in first-insertion order.
    vertices: Vec<Vertex>,
    /// Name -> position in `vertices`.
    index: HashMap<String, usize>,
    /// All edges, in first-insertion order, deduplicated by factory equality.
    edges: Vec<Edge>,
    /// Adjacency index: vertex name -> positions in `edges`, in insertion
    /// order. A self-loop is indexed once.
    adjacency: HashMap<String, Vec<usize>>,
    /// Identifiers of extensions already applied, in application order.
    extensions: Vec<String>,
    /// Vertex creation strategy.
    vertex_factory: Box<dyn VertexFactory>,
    /// Edge creation + identity strategy.
    edge_factory: Box<dyn EdgeFactory>,
}

impl Graph {
    /// Create an empty graph with undirected edge identity.
    pub fn new() -> Self {
        Self::with_factories(
            Box::new(DefaultVertexFactory),
            Box::new(UndirectedEdgeFactory),
        )
    }

    /// Create an empty graph with directed edge identity.
    pub fn directed() -> Self {
        Self::with_factories(Box::new(DefaultVertexFactory), Box::new(DirectedEdgeFactory))
    }

    /// Create an empty graph with explicit factories.
    pub fn with_factories(
        vertex_factory: Box<dyn VertexFactory>,
        edge_factory: Box<dyn EdgeFactory>,
    ) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
            extensions: Vec::new(),
            vertex_factory,
            edge_factory,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a vertex with this name exists.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a vertex by name (immutable).
    pub fn get_vertex(&self, name: &str) -> Option<&Vertex> {
        self.index.get(name).map(|&i| &self.vertices[i])
    }

    /// Get a vertex by name (mutable).
    pub fn get_vertex_mut(&mut self, name: &str) -> Option<&mut Vertex> {
        if let Some(&i) = self.index.get(name) {
            return Some(&mut self.vertices[i]);
        }
        None
    }

    /// All vertices, in first-insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, in first-insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Upsert a vertex: return the existing instance for `name`, or create
    /// one via the vertex factory, append it, and return it.
    pub fn vertex(&mut self, name: &str) -> &mut Vertex {
        if let Some(&i) = self.index.get(name) {
            return &mut self.vertices[i];
        }
        log::trace!("creating vertex '{}'", name);
        let vertex = self.vertex_factory.new_vertex(name);
        self.index.insert(name.to_owned(), self.vertices.len());
        self.vertices.push(vertex);
        let last = self.vertices.len() - 1;
        &mut self.vertices[last]
    }

    /// Upsert a vertex and run `configure` against it.
    ///
    /// The configurator sees the existing instance when the name is already
    /// known, so repeated calls accumulate onto one vertex.
    pub fn vertex_with<F>(&mut self, name: &str, configure: F) -> &mut Vertex
    where
        F: FnOnce(&mut Vertex),
    {
        let vertex = self.vertex(name);
        configure(&mut *vertex);
        vertex
    }

    /// Upsert an edge: if a factory-equal edge already exists it is
    /// returned, otherwise both endpoint vertices are created as needed and
    /// the new edge is appended.
    ///
    /// Referencing unknown endpoint names is not an error; they are created
    /// with empty payloads so edges never dangle. Under the undirected
    /// factory the stored orientation is whatever the first insertion used.
    pub fn edge(&mut self, one: &str, two: &str) -> &mut Edge {
        let candidate = self.edge_factory.new_edge(one, two);
        let factory = &self.edge_factory;
        let existing = self
            .edges
            .iter()
            .position(|e| factory.edges_equal(e, &candidate));
        match existing {
            Some(i) => {
                log::trace!("edge ({}, {}) deduplicated onto existing edge", one, two);
                &mut self.edges[i]
            }
            None => {
                let one = candidate.one.clone();
                let two = candidate.two.clone();
                self.vertex(&one);
                self.vertex(&two);
                let position = self.edges.len();
                self.edges.push(candidate);
                self.adjacency.entry(one.clone()).or_default().push(position);
                if one != two {
                    self.adjacency.entry(two).or_default().push(position);
                }
                &mut self.edges[position]
            }
        }
    }

    /// Upsert an edge and run `configure` against it.
    ///
    /// When the edge already exists the configurator mutates the existing
    /// instance, not a duplicate.
    pub fn edge_with<F>(&mut self, one: &str, two: &str, configure: F) -> &mut Edge
    where
        F: FnOnce(&mut Edge),
    {
        let edge = self.edge(one, two);
        configure(&mut *edge);
        edge
    }

    /// Every edge referencing `name` as either endpoint, in edge-insertion
    /// order. A self-loop appears once.
    pub fn adjacent_edges(&self, name: &str) -> Vec<&Edge> {
        match self.adjacency.get(name) {
            Some(positions) => positions.iter().map(|&i| &self.edges[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Apply a one-shot extension action under `id`.
    ///
    /// Fails with [`GraphError::DuplicateExtension`] if `id` was already
    /// applied to this graph, and with [`GraphError::InvalidExtension`] for
    /// a blank identifier. Otherwise the id is recorded and `action` runs
    /// with mutable access to the graph.
    pub fn apply_extension<F>(&mut self, id: &str, action: F) -> GraphResult<()>
    where
        F: FnOnce(&mut Graph) -> GraphResult<()>,
    {
        if id.trim().is_empty() {
            return Err(GraphError::InvalidExtension(
                "extension id must not be blank".to_owned(),
            ));
        }
        if self.extensions.iter().any(|applied| applied == id) {
            return Err(GraphError::DuplicateExtension(id.to_owned()));
        }
        log::debug!("applying extension '{}'", id);
        self.extensions.push(id.to_owned());
        action(self)
    }

    /// Apply a [`GraphExtension`] trait object, recording its id.
    pub fn extend(&mut self, extension: &dyn GraphExtension) -> GraphResult<()> {
        self.apply_extension(extension.id(), |graph| extension.apply(graph))
    }

    /// Whether an extension id has been applied to this graph.
    pub fn has_extension(&self, id: &str) -> bool {
        self.extensions.iter().any(|applied| applied == id)
    }

    /// Identifiers of applied extensions, in application order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
