//! Fixed 64-bit packing for measured sizes.
//!
//! Wire layout, most significant bit first: bits 63..32 hold the IEEE-754
//! single-precision width, bits 31..0 hold the height. Both sides of the
//! boundary agree on this layout, so packing and unpacking are explicit bit
//! operations, never numeric casts.

use perftext_layout::Size;

/// Packs a measured size into the 64-bit wire form.
pub fn pack_size(size: Size) -> i64 {
    let width_bits = size.width.to_bits() as u64;
    let height_bits = size.height.to_bits() as u64;
    ((width_bits << 32) | height_bits) as i64
}

/// Unpacks the 64-bit wire form back into a size.
pub fn unpack_size(packed: i64) -> Size {
    let bits = packed as u64;
    Size::new(
        f32::from_bits((bits >> 32) as u32),
        f32::from_bits(bits as u32),
    )
}

#[cfg(test)]
#[path = "tests/packed_tests.rs"]
mod tests;
