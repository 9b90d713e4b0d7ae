//! Runtime-boundary plumbing for PerfText measurement.
//!
//! Everything that crosses from the layout tree into the host execution
//! environment lives here: the service registry, the narrow RPC seam to the
//! host UI manager, the serialized measurement request and the packed-size
//! wire format. The node and descriptor logic in `perftext-component` never
//! touches the boundary directly.

mod error;
mod manager;
mod packed;
mod registry;
mod request;

pub use error::*;
pub use manager::*;
pub use packed::*;
pub use registry::*;
pub use request::*;
