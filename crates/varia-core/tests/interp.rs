//! Interpolation behavior across every curve and every blendable kind.

use varia_core::{Easing, Rect, Variant, VariantKind, VariantList, Vec2, Vec3};

const CURVES: [Easing; 9] = [
    Easing::Linear,
    Easing::Smoothstep,
    Easing::EaseTo,
    Easing::EaseFrom,
    Easing::EaseToQuartic,
    Easing::EaseFromQuartic,
    Easing::BounceTo,
    Easing::SmoothstepAsColor,
    Easing::LinearAsColor,
];

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn blendable_pairs() -> Vec<(Variant, Variant)> {
    vec![
        (Variant::from(-2.0f32), Variant::from(6.5f32)),
        (Variant::from(10u32), Variant::from(200u32)),
        (Variant::from(-100i32), Variant::from(100i32)),
        (
            Variant::from(Vec2::new(0.0, -1.0)),
            Variant::from(Vec2::new(8.0, 3.0)),
        ),
        (
            Variant::from(Vec3::new(1.0, 2.0, 3.0)),
            Variant::from(Vec3::new(-4.0, -5.0, -6.0)),
        ),
        (
            Variant::from(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Variant::from(Rect::new(5.0, 5.0, 20.0, 40.0)),
        ),
    ]
}

fn blend(a: &Variant, b: &Variant, pos: f32, curve: Easing) -> Variant {
    let mut out = Variant::new();
    out.interpolate(a, b, pos, curve);
    out
}

// ─── Boundary contract ───────────────────────────────────────────────────────

#[test]
fn position_zero_yields_a_for_every_curve_and_kind() {
    for curve in CURVES {
        for (a, b) in blendable_pairs() {
            assert_eq!(blend(&a, &b, 0.0, curve), a, "{curve:?} / {:?}", a.kind());
        }
    }
}

#[test]
fn position_one_yields_b_for_every_curve_and_kind() {
    for curve in CURVES {
        for (a, b) in blendable_pairs() {
            assert_eq!(blend(&a, &b, 1.0, curve), b, "{curve:?} / {:?}", a.kind());
        }
    }
}

#[test]
fn midpoint_lies_between_endpoints_for_linear() {
    let out = blend(&Variant::from(10.0f32), &Variant::from(20.0f32), 0.5, Easing::Linear);
    assert_eq!(out.get_float(), 15.0);

    let out = blend(&Variant::from(10u32), &Variant::from(20u32), 0.5, Easing::Linear);
    assert_eq!(out.get_u32(), 15);
}

// ─── Bounce ──────────────────────────────────────────────────────────────────

#[test]
fn bounce_overshoots_then_settles() {
    let a = Variant::from(0.0f32);
    let b = Variant::from(100.0f32);
    let overshot = (80..100)
        .map(|i| blend(&a, &b, i as f32 / 100.0, Easing::BounceTo).get_float())
        .any(|x| x > 100.0);
    assert!(overshot, "BounceTo never went past the target");
    assert_eq!(blend(&a, &b, 1.0, Easing::BounceTo).get_float(), 100.0);
}

#[test]
fn bounce_on_unsigned_does_not_wrap() {
    // Overshoot below zero on a u32 blend must clamp, not wrap around.
    let a = Variant::from(100u32);
    let b = Variant::from(0u32);
    for i in 80..100 {
        let out = blend(&a, &b, i as f32 / 100.0, Easing::BounceTo);
        assert!(out.get_u32() <= 100, "wrapped at step {i}: {}", out.get_u32());
    }
}

// ─── Color-flavored curves ───────────────────────────────────────────────────

#[test]
fn color_blend_stays_inside_channel_range() {
    let a = Variant::from(u32::from_le_bytes([0, 64, 128, 255]));
    let b = Variant::from(u32::from_le_bytes([255, 192, 128, 0]));
    for i in 0..=100 {
        let out = blend(&a, &b, i as f32 / 100.0, Easing::SmoothstepAsColor);
        // Every byte of a u32 is a valid channel, so the real check is the
        // endpoints plus per-channel movement direction.
        let c = out.get_u32().to_le_bytes();
        assert!(c[2] == 128, "constant channel drifted at step {i}");
    }
    assert_eq!(blend(&a, &b, 0.0, Easing::LinearAsColor), a);
    assert_eq!(blend(&a, &b, 1.0, Easing::LinearAsColor), b);
}

#[test]
fn color_blend_is_per_channel() {
    let a = Variant::from(u32::from_le_bytes([0, 100, 200, 0]));
    let b = Variant::from(u32::from_le_bytes([100, 200, 0, 0]));
    let mid = blend(&a, &b, 0.5, Easing::LinearAsColor);
    assert_eq!(mid.get_u32().to_le_bytes(), [50, 150, 100, 0]);
}

// ─── Non-blendable kinds ─────────────────────────────────────────────────────

#[test]
fn string_and_handle_kinds_are_left_alone() {
    assert!(!VariantKind::String.blendable());
    assert!(!VariantKind::Entity.blendable());
    assert!(VariantKind::Float.blendable());

    let mut out = Variant::new();
    out.interpolate(&Variant::from("a"), &Variant::from("b"), 0.5, Easing::Linear);
    assert!(out.is_unused());

    out.interpolate(&Variant::new(), &Variant::new(), 0.5, Easing::Linear);
    assert!(out.is_unused());
}

#[test]
#[should_panic(expected = "variant kind contract violated")]
fn mismatched_kinds_panic() {
    let mut out = Variant::new();
    out.interpolate(&Variant::from(1.0f32), &Variant::from(1u32), 0.5, Easing::Linear);
}

// ─── Driving a list ──────────────────────────────────────────────────────────

// Parameter lists are what actually get tweened between subsystems: blend
// each slot of two matching lists.
#[test]
fn blending_two_lists_slot_by_slot() {
    let from = VariantList::from([Variant::from(0.0f32), Variant::from(Vec2::ZERO)]);
    let to = VariantList::from([
        Variant::from(10.0f32),
        Variant::from(Vec2::new(4.0, 8.0)),
    ]);

    let mut mid = VariantList::new();
    for i in 0..2 {
        mid.get_mut(i)
            .interpolate(from.get(i), to.get(i), 0.5, Easing::Linear);
    }
    assert_eq!(mid.get(0).get_float(), 5.0);
    assert_eq!(mid.get(1).get_vec2(), Vec2::new(2.0, 4.0));
    assert_eq!(mid.get(2).kind(), VariantKind::Unused);
}
