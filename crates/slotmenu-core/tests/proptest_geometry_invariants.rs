//! Property-based invariant tests for geometry primitives (Point, Size).
//!
//! Coordinates are drawn from integer-valued floats so the arithmetic below is
//! exact and equality comparisons are meaningful.
//!
//! 1. Add and Sub are inverse.
//! 2. Translate composes additively.
//! 3. Negation is an involution.
//! 4. A height override leaves the width alone.

use proptest::prelude::*;
use slotmenu_core::geometry::{Point, Size};

fn coord() -> impl Strategy<Value = f32> {
    (-100_000i32..=100_000).prop_map(|v| v as f32)
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (0i32..=10_000, 0i32..=10_000).prop_map(|(w, h)| Size::new(w as f32, h as f32))
}

proptest! {
    #[test]
    fn add_then_sub_round_trips(a in point_strategy(), b in point_strategy()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn translate_composes(p in point_strategy(), dx1 in coord(), dy1 in coord(), dx2 in coord(), dy2 in coord()) {
        prop_assert_eq!(
            p.translate(dx1, dy1).translate(dx2, dy2),
            p.translate(dx1 + dx2, dy1 + dy2)
        );
    }

    #[test]
    fn negation_is_involution(p in point_strategy()) {
        prop_assert_eq!(-(-p), p);
    }

    #[test]
    fn height_override_keeps_width(s in size_strategy(), v in 0i32..=10_000) {
        let v = v as f32;
        let resized = s.with_height(v);
        prop_assert_eq!(resized.width, s.width);
        prop_assert_eq!(resized.height, v);
    }
}
