//! Traversal engine — colored depth-first and breadth-first walks.

pub mod bfs;
pub mod color;
pub mod dfs;
pub mod spec;

pub use bfs::breadth_first_connected;
pub use color::{Color, ColorMap};
pub use dfs::{depth_first, depth_first_connected};
pub use spec::{first_unvisited, BfsSpec, Control, DfsSpec, Visit};
