//! Immutable property snapshot for the PerfText component.

/// A contiguous span of styled text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
    pub start: i32,
    pub end: i32,
    /// Packed ARGB color, already resolved on the caller's side.
    pub color: i32,
}

/// Snapshot of the component's properties for one node revision.
///
/// The tree framework replaces the whole snapshot whenever the component
/// updates; it is never mutated in place. Of these fields only `text`,
/// `font_size` and `line_height` participate in measurement; `font_family`
/// and `color_ranges` matter for rendering but are withheld from the
/// measurement request (see [`crate::TextMeasurementBridge`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfTextProps {
    pub text: String,
    /// Font size in scale-independent points. Non-positive means "host default".
    pub font_size: f32,
    /// Line height in points. Non-positive means "font-derived".
    pub line_height: f32,
    pub font_family: Option<String>,
    pub color_ranges: Vec<ColorRange>,
}
