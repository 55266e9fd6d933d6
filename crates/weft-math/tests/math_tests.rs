//! Integration tests for weft-math.

use weft_math::{Direction, Vec3};

// ─── Direction Tests ──────────────────────────────────────────

#[test]
fn direction_of_axis_vector() {
    let d = Direction::of(Vec3::new(0.0, 3.0, 0.0));
    assert!((d.length - 3.0).abs() < 1e-6);
    assert!((d.unit - Vec3::Y).length() < 1e-6);
    assert!(!d.is_degenerate());
}

#[test]
fn direction_is_unit_length() {
    let d = Direction::of(Vec3::new(1.0, -2.0, 0.5));
    assert!((d.unit.length() - 1.0).abs() < 1e-6);
    assert!((d.unit * d.length - Vec3::new(1.0, -2.0, 0.5)).length() < 1e-6);
}

#[test]
fn zero_vector_has_zero_direction() {
    let d = Direction::of(Vec3::ZERO);
    assert_eq!(d.unit, Vec3::ZERO);
    assert_eq!(d.length, 0.0);
    assert!(d.is_degenerate());
    assert!(!d.unit.x.is_nan());
}

#[test]
fn tiny_vector_is_degenerate() {
    let d = Direction::of(Vec3::splat(1e-9));
    assert!(d.is_degenerate());
}
