use std::sync::Arc;

use perftext_host::pack_size;
use perftext_layout::{LayoutConstraints, LayoutContext, Size};

use super::PerfTextComponentDescriptor;
use crate::test_support::{registry_with, RecordingUiManager};
use crate::{PerfTextProps, SealedStateViolation};

fn default_props() -> Arc<PerfTextProps> {
    Arc::new(PerfTextProps::default())
}

#[test]
fn component_name_matches_the_wire_contract() {
    let descriptor = PerfTextComponentDescriptor::new(registry_with(Arc::new(
        RecordingUiManager::silent(),
    )));
    assert_eq!(descriptor.component_name(), "PerfText");
}

#[test]
fn created_nodes_are_unsealed() {
    let descriptor = PerfTextComponentDescriptor::new(registry_with(Arc::new(
        RecordingUiManager::silent(),
    )));
    let node = descriptor.create_node(4, default_props());
    assert!(!node.is_sealed());
    assert_eq!(node.surface_id(), 4);
}

#[test]
fn adopt_fails_on_a_sealed_node() {
    let descriptor = PerfTextComponentDescriptor::new(registry_with(Arc::new(
        RecordingUiManager::silent(),
    )));
    let mut node = descriptor.create_node(1, default_props());
    node.seal();
    assert_eq!(descriptor.adopt(&mut node), Err(SealedStateViolation));
}

#[test]
fn every_node_measures_through_the_shared_bridge() {
    let manager = Arc::new(RecordingUiManager::replying(pack_size(Size::new(
        10.0, 10.0,
    ))));
    let descriptor = PerfTextComponentDescriptor::new(registry_with(Arc::clone(&manager)));

    for surface_id in [1, 2] {
        let mut node = descriptor.create_node(surface_id, default_props());
        descriptor.adopt(&mut node).expect("node is unsealed");
        node.seal();
        node.measure_content(
            &LayoutContext::default(),
            &LayoutConstraints::loose(100.0, 100.0),
        );
    }

    let requests = manager.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].surface_id, 1);
    assert_eq!(requests[1].surface_id, 2);
}
