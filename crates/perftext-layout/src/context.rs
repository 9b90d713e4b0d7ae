//! Ambient layout-pass data.

/// Identifier of the rendering surface a node belongs to.
///
/// Opaque to this core; forwarded unchanged so the host resolves the right
/// rendering context when measuring.
pub type SurfaceId = i32;

/// Per-pass layout environment handed to measurement entry points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    /// Scale factor between points and device pixels.
    pub point_scale_factor: f32,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            point_scale_factor: 1.0,
        }
    }
}
