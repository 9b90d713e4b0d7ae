use super::{pack_size, unpack_size};
use perftext_layout::Size;

fn round_trip(width: f32, height: f32) {
    let size = Size::new(width, height);
    let unpacked = unpack_size(pack_size(size));
    assert_eq!(unpacked.width.to_bits(), width.to_bits());
    assert_eq!(unpacked.height.to_bits(), height.to_bits());
}

#[test]
fn round_trip_is_bit_exact() {
    round_trip(0.0, 0.0);
    round_trip(320.5, 44.0);
    round_trip(f32::MAX, f32::MAX);
    round_trip(1.0e-38, 7.0e37);
    round_trip(f32::INFINITY, 0.0);
}

#[test]
fn negative_dimensions_do_not_crash() {
    round_trip(-1.0, -250.75);
    round_trip(-0.0, 0.0);
}

#[test]
fn width_occupies_the_upper_half() {
    let packed = pack_size(Size::new(1.5, 0.0));
    // 1.5f32 is 0x3FC00000; the lower half stays zero.
    assert_eq!(packed, 0x3FC0_0000_0000_0000);
}

#[test]
fn height_occupies_the_lower_half() {
    let packed = pack_size(Size::new(0.0, 1.5));
    assert_eq!(packed, 0x3FC0_0000);
}

#[test]
fn unpack_reads_halves_independently() {
    let size = unpack_size((0x4248_0000_u64 as i64) << 32 | 0x41A0_0000);
    assert_eq!(size, Size::new(50.0, 20.0));
}
