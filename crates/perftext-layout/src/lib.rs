//! Layout contract types for the PerfText native component.
//!
//! These are the types that cross between the layout engine, the shadow node
//! and the measurement bridge. Nothing here performs layout; the engine owns
//! the algorithms and hands these values down per measurement pass.

mod constraints;
mod context;
mod geometry;

pub use constraints::*;
pub use context::*;
pub use geometry::*;
