//! Visitation colors and the per-traversal color map.

use std::collections::HashMap;

use serde::Serialize;

/// Visitation state of a single vertex during traversal.
///
/// Lifecycle is `White` -> `Grey` -> `Black`; `Black` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    /// Not yet visited.
    White,
    /// Visit in progress (on the DFS stack, or discovered but not yet
    /// fully expanded in BFS).
    Grey,
    /// Fully processed.
    Black,
}

impl Color {
    /// Return a human-readable name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Grey => "grey",
            Self::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Vertex name -> color mapping, mutated in place by the traversal engine.
///
/// Names without an entry read as [`Color::White`], so a map built for one
/// graph keeps working when vertices are added before a later traversal.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ColorMap {
    colors: HashMap<String, Color>,
}

impl ColorMap {
    /// Create an empty color map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no colors have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// The color recorded for `name`, defaulting to white.
    pub fn color_of(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or(Color::White)
    }

    /// Whether `name` is neither grey nor black.
    pub fn is_unvisited(&self, name: &str) -> bool {
        self.color_of(name) == Color::White
    }

    /// Record a color for `name`.
    pub fn set(&mut self, name: &str, color: Color) {
        self.colors.insert(name.to_owned(), color);
    }

    /// Iterate over recorded (name, color) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(name, &color)| (name.as_str(), color))
    }
}
