//! Constraints supplied by the layout engine for intrinsic measurement.

use crate::Size;

/// Bounds for one measurement pass.
///
/// The layout engine guarantees `minimum <= maximum` componentwise and hands
/// a fresh value down per call; this core never re-validates the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraints {
    pub minimum: Size,
    pub maximum: Size,
}

impl LayoutConstraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            minimum: Size::new(width, height),
            maximum: Size::new(width, height),
        }
    }

    /// Creates constraints with loose bounds (minimum = 0, maximum = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            minimum: Size::ZERO,
            maximum: Size::new(max_width, max_height),
        }
    }

    /// Creates constraints with zero minimums and unbounded maximums.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.minimum.width == self.maximum.width && self.minimum.height == self.maximum.height
    }

    /// Returns true if all bounds are finite.
    pub fn is_bounded(&self) -> bool {
        self.maximum.width.is_finite() && self.maximum.height.is_finite()
    }

    /// Clamps the provided size to fit within these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.minimum.width, self.maximum.width),
            size.height.clamp(self.minimum.height, self.maximum.height),
        )
    }

    /// Returns true if the size satisfies both bounds.
    pub fn contains(&self, size: Size) -> bool {
        size.width >= self.minimum.width
            && size.width <= self.maximum.width
            && size.height >= self.minimum.height
            && size.height <= self.maximum.height
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
