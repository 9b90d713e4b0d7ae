//! Shadow node for the PerfText leaf component.

use std::sync::Arc;

use bitflags::bitflags;
use perftext_layout::{LayoutConstraints, LayoutContext, Size, SurfaceId};
use thiserror::Error;

use crate::{PerfTextProps, TextMeasurementBridge};

/// Fixed wire identifier for the component.
pub const PERF_TEXT_COMPONENT_NAME: &str = "PerfText";

bitflags! {
    /// Traits the layout engine consults before recursing into a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct NodeTraits: u8 {
        /// The node never has children; the engine must not descend into it.
        const LEAF = 1 << 0;
        /// The node answers intrinsic-size queries via `measure_content`.
        const MEASURABLE = 1 << 1;
    }
}

/// Attempted mutation of a node after it was sealed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("shadow node is sealed and can no longer be mutated")]
pub struct SealedStateViolation;

/// One instance of the PerfText component in the layout tree.
///
/// The node follows the tree framework's builder-then-frozen lifecycle: it is
/// mutable while the descriptor wires it up, then [`seal`]ed before the
/// layout engine ever sees it. After sealing every accessor is read-only, so
/// concurrent `measure_content` calls need no locking.
///
/// [`seal`]: PerfTextShadowNode::seal
pub struct PerfTextShadowNode {
    surface_id: SurfaceId,
    props: Arc<PerfTextProps>,
    bridge: Option<Arc<TextMeasurementBridge>>,
    sealed: bool,
}

impl PerfTextShadowNode {
    /// Creates an unsealed node holding its props snapshot.
    pub fn new(surface_id: SurfaceId, props: Arc<PerfTextProps>) -> Self {
        Self {
            surface_id,
            props,
            bridge: None,
            sealed: false,
        }
    }

    /// Traits every PerfText node reports: a measurable leaf.
    pub fn base_traits() -> NodeTraits {
        NodeTraits::LEAF | NodeTraits::MEASURABLE
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.surface_id
    }

    pub fn props(&self) -> &PerfTextProps {
        &self.props
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Seals the node. One-way; the node is read-only afterwards.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Stores the shared measurement bridge.
    ///
    /// Called by the descriptor during adoption, before sealing. Calling it
    /// again on an unsealed node silently overwrites, since the value is
    /// always the same shared bridge. Calling it on a sealed node is a wiring
    /// defect and fails with [`SealedStateViolation`] every time.
    pub fn set_measurement_bridge(
        &mut self,
        bridge: Arc<TextMeasurementBridge>,
    ) -> Result<(), SealedStateViolation> {
        self.ensure_unsealed()?;
        self.bridge = Some(bridge);
        Ok(())
    }

    fn ensure_unsealed(&self) -> Result<(), SealedStateViolation> {
        if self.sealed {
            Err(SealedStateViolation)
        } else {
            Ok(())
        }
    }

    /// Answers the layout engine's intrinsic-size query.
    ///
    /// Delegates to the measurement bridge and returns its size unmodified.
    /// Measuring a node whose bridge was never adopted, or a failed host
    /// round trip, aborts: both mean the integration is broken and any size
    /// produced here would be meaningless.
    pub fn measure_content(
        &self,
        _context: &LayoutContext,
        constraints: &LayoutConstraints,
    ) -> Size {
        let bridge = self
            .bridge
            .as_ref()
            .expect("measurement bridge must be adopted before layout");
        match bridge.measure(self.surface_id, constraints, &self.props) {
            Ok(size) => size,
            Err(err) => panic!("PerfText measurement failed: {err}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
