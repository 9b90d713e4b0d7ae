//! Serialized measurement request crossing the runtime boundary.

use perftext_layout::{LayoutConstraints, SurfaceId};
use serde::Serialize;
use serde_json::{Map, Value};

/// One measurement call, fields in wire order.
///
/// `local_data` and `state` are reserved slots in the wire contract and are
/// always absent in this design. The `props` map carries only the
/// hand-picked fields the caller chose to forward; this type does not filter,
/// it transports.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureRequest {
    pub surface_id: SurfaceId,
    pub component_name: &'static str,
    pub local_data: Option<Map<String, Value>>,
    pub props: Map<String, Value>,
    pub state: Option<Map<String, Value>>,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl MeasureRequest {
    /// Builds a request for `component_name` with the given serialized props.
    pub fn new(
        surface_id: SurfaceId,
        component_name: &'static str,
        props: Map<String, Value>,
        constraints: &LayoutConstraints,
    ) -> Self {
        Self {
            surface_id,
            component_name,
            local_data: None,
            props,
            state: None,
            min_width: constraints.minimum.width,
            max_width: constraints.maximum.width,
            min_height: constraints.minimum.height,
            max_height: constraints.maximum.height,
        }
    }
}

#[cfg(test)]
#[path = "tests/request_tests.rs"]
mod tests;
