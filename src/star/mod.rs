//! Star module
//!
//! Starred/unstarred partition of a judge's seen projects. Independent of the
//! ranking partition; each toggle is persisted on its own.

mod state;


pub use state::*;
