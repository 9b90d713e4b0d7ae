//! Host-delegated measurement for PerfText nodes.

use std::sync::Arc;

use perftext_host::{
    ui_manager, unpack_size, MeasureError, MeasureRequest, ServiceRegistry,
    UI_MANAGER_SERVICE_KEY,
};
use perftext_layout::{LayoutConstraints, Size, SurfaceId};
use serde_json::{Map, Value};

use crate::{PerfTextProps, PERF_TEXT_COMPONENT_NAME};

/// Performs the cross-boundary measurement call for PerfText nodes.
///
/// One instance is shared by every node of the component type. The bridge
/// keeps no per-call state; it holds only the registry handle it was built
/// with, so concurrent measurement from multiple nodes is safe.
pub struct TextMeasurementBridge {
    registry: Arc<ServiceRegistry>,
}

impl TextMeasurementBridge {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Measures one node's content with a blocking round trip to the host.
    ///
    /// The result is returned exactly as the host produced it; clamping to
    /// the constraints is the host's contract and is not re-applied here.
    pub fn measure(
        &self,
        surface_id: SurfaceId,
        constraints: &LayoutConstraints,
        props: &PerfTextProps,
    ) -> Result<Size, MeasureError> {
        let manager = ui_manager(&self.registry).ok_or(MeasureError::ServiceMissing {
            key: UI_MANAGER_SERVICE_KEY,
        })?;

        let request = MeasureRequest::new(
            surface_id,
            PERF_TEXT_COMPONENT_NAME,
            serialize_measure_props(props),
            constraints,
        );
        log::trace!(
            "measuring {PERF_TEXT_COMPONENT_NAME} on surface {surface_id} ({} bytes of text)",
            props.text.len()
        );

        let packed = manager
            .measure(&request)
            .ok_or(MeasureError::Unmeasured {
                component: PERF_TEXT_COMPONENT_NAME,
            })?;
        let size = unpack_size(packed);
        if size.width.is_nan() || size.height.is_nan() {
            return Err(MeasureError::MalformedResult { packed });
        }
        Ok(size)
    }
}

/// Serializes the props that participate in measurement.
///
/// Hand-picked allow-list: `text`, `fontSize` and `lineHeight` are the only
/// fields the host may see. Extending this list is the sole sanctioned way to
/// expose more measurement inputs.
pub(crate) fn serialize_measure_props(props: &PerfTextProps) -> Map<String, Value> {
    let mut serialized = Map::new();
    serialized.insert("text".to_owned(), Value::from(props.text.as_str()));
    serialized.insert("fontSize".to_owned(), Value::from(props.font_size));
    serialized.insert("lineHeight".to_owned(), Value::from(props.line_height));
    serialized
}

#[cfg(test)]
#[path = "tests/bridge_tests.rs"]
mod tests;
