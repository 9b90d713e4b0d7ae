//! PerfText: a leaf component whose intrinsic size comes from the host.
//!
//! The node never shapes text itself. When the layout engine asks for an
//! intrinsic size, the node forwards its props and the engine's constraints
//! through one serialized, synchronous call to the host measurement service
//! and returns the decoded result unchanged.

mod bridge;
mod descriptor;
mod node;
mod props;

pub use bridge::*;
pub use descriptor::*;
pub use node::*;
pub use props::*;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
