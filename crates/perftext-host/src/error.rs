//! Measurement failure taxonomy.

use thiserror::Error;

/// Reasons a measurement round trip can fail.
///
/// Every variant indicates an integration defect or a protocol mismatch, not
/// a recoverable runtime condition. Callers at the layout-engine boundary
/// escalate these to a fatal failure instead of fabricating a size.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MeasureError {
    /// No handle is stored under the expected registry key; the surrounding
    /// framework was not wired before node creation.
    #[error("no host service registered under `{key}`")]
    ServiceMissing { key: &'static str },

    /// The host returned no measurement for the component.
    #[error("host returned no measurement for `{component}`")]
    Unmeasured { component: &'static str },

    /// The packed result carried a NaN dimension, a bit pattern the size
    /// convention never produces.
    #[error("malformed packed measurement result {packed:#018x}")]
    MalformedResult { packed: i64 },
}
