//! Component descriptor wiring nodes to the shared measurement bridge.

use std::sync::Arc;

use perftext_host::ServiceRegistry;
use perftext_layout::SurfaceId;

use crate::{
    PerfTextProps, PerfTextShadowNode, SealedStateViolation, TextMeasurementBridge,
    PERF_TEXT_COMPONENT_NAME,
};

/// Factory for PerfText nodes.
///
/// Owns the single measurement bridge for the component type and injects it
/// into every node during the framework's adoption step. Built once per
/// component type; a second descriptor would merely waste a bridge, since the
/// bridge holds no state beyond the registry handle.
pub struct PerfTextComponentDescriptor {
    bridge: Arc<TextMeasurementBridge>,
}

impl PerfTextComponentDescriptor {
    /// Builds the descriptor and its shared bridge against the given registry.
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self {
            bridge: Arc::new(TextMeasurementBridge::new(registry)),
        }
    }

    /// The component's fixed wire identifier.
    pub fn component_name(&self) -> &'static str {
        PERF_TEXT_COMPONENT_NAME
    }

    /// Creates an unsealed node for one component instance.
    pub fn create_node(
        &self,
        surface_id: SurfaceId,
        props: Arc<PerfTextProps>,
    ) -> PerfTextShadowNode {
        PerfTextShadowNode::new(surface_id, props)
    }

    /// Injects the shared bridge into a freshly created node.
    ///
    /// Must run before the framework seals the node; adoption of an already
    /// sealed node surfaces the node's sealed-state violation.
    pub fn adopt(&self, node: &mut PerfTextShadowNode) -> Result<(), SealedStateViolation> {
        node.set_measurement_bridge(Arc::clone(&self.bridge))
    }
}

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod tests;
