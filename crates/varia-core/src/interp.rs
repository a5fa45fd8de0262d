//! Easing curves and variant blending.
//!
//! A curve maps a normalized position to an interpolation weight; the blend
//! itself is `a(1 - w) + b·w`, which is exact at both endpoints. Positions
//! are not clamped here: callers wanting clamped output clamp the position
//! first. `BounceTo` intentionally leaves [0, 1] near the end of the run.

use crate::types::geom::{Rect, Vec2, Vec3, lerp};
use crate::value::variant::{Payload, Variant, VariantKind};

// ─── Curves ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Smoothstep,
    EaseTo,
    EaseFrom,
    EaseToQuartic,
    EaseFromQuartic,
    BounceTo,
    SmoothstepAsColor,
    LinearAsColor,
}

impl Easing {
    /// Color flavors blend a packed `UInt32` per 8-bit channel instead of
    /// as one scalar. For float-component kinds they behave like their base
    /// curve (every f32 channel value is representable, nothing to clamp).
    pub fn is_color(self) -> bool {
        matches!(self, Easing::SmoothstepAsColor | Easing::LinearAsColor)
    }
}

/// Back-ease overshoot coefficient. Higher values bounce farther past the
/// target before settling. Must stay exactly representable in f32 together
/// with its successor, so the curve lands exactly on 0 and 1 at the ends.
const BOUNCE_OVERSHOOT: f32 = 1.5;

/// Curve weight at normalized position `t`. Every curve maps 0 to 0 and
/// 1 to 1; all except `BounceTo` stay within [0, 1] on that interval.
pub fn weight(easing: Easing, t: f32) -> f32 {
    match easing {
        Easing::Linear | Easing::LinearAsColor => t,
        Easing::Smoothstep | Easing::SmoothstepAsColor => t * t * (3.0 - 2.0 * t),
        Easing::EaseTo => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseFrom => t * t,
        Easing::EaseToQuartic => {
            let u = 1.0 - t;
            1.0 - u * u * u * u
        }
        Easing::EaseFromQuartic => t * t * t * t,
        Easing::BounceTo => {
            let s = BOUNCE_OVERSHOOT;
            let u = t - 1.0;
            1.0 + (s + 1.0) * u * u * u + s * u * u
        }
    }
}

// ─── Scalar helpers ───────────────────────────────────────────────────────────

/// Integer blend in f64 with rounding, clamped to the target range so that
/// bounce overshoot cannot wrap.
fn blend_int(a: f64, b: f64, w: f32, min: f64, max: f64) -> f64 {
    let w = w as f64;
    (a * (1.0 - w) + b * w).round().clamp(min, max)
}

/// Per-channel blend of two packed 4x8-bit colors.
fn blend_color_u32(a: u32, b: u32, w: f32) -> u32 {
    let ac = a.to_le_bytes();
    let bc = b.to_le_bytes();
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = blend_int(ac[i] as f64, bc[i] as f64, w, 0.0, 255.0) as u8;
    }
    u32::from_le_bytes(out)
}

// ─── Variant blending ─────────────────────────────────────────────────────────

impl Variant {
    /// Write a blend of `a` and `b` at normalized `position` into this
    /// variant. Both operands must share a kind (caller bug otherwise), and
    /// this variant must be `Unused` or already of that kind. String and
    /// the reference kinds have no continuous blend and are left alone.
    pub fn interpolate(&mut self, a: &Variant, b: &Variant, position: f32, easing: Easing) {
        assert!(
            a.kind() == b.kind(),
            "variant kind contract violated: interpolate between {:?} and {:?}",
            a.kind(),
            b.kind()
        );
        let w = weight(easing, position);
        match (&a.payload, &b.payload) {
            (Payload::Float(x), Payload::Float(y)) => self.set_float(lerp(*x, *y, w)),
            (Payload::Vec2(x), Payload::Vec2(y)) => self.set_vec2(Vec2::lerp(*x, *y, w)),
            (Payload::Vec3(x), Payload::Vec3(y)) => self.set_vec3(Vec3::lerp(*x, *y, w)),
            (Payload::Rect(x), Payload::Rect(y)) => self.set_rect(Rect::lerp(*x, *y, w)),
            (Payload::UInt32(x), Payload::UInt32(y)) => {
                let v = if easing.is_color() {
                    blend_color_u32(*x, *y, w)
                } else {
                    blend_int(*x as f64, *y as f64, w, 0.0, u32::MAX as f64) as u32
                };
                self.set_u32(v);
            }
            (Payload::Int32(x), Payload::Int32(y)) => {
                let v = blend_int(*x as f64, *y as f64, w, i32::MIN as f64, i32::MAX as f64);
                self.set_i32(v as i32);
            }
            // No continuous blend exists for these.
            (Payload::Unused, Payload::Unused)
            | (Payload::Str(_), Payload::Str(_))
            | (Payload::Entity(_), Payload::Entity(_))
            | (Payload::Component(_), Payload::Component(_)) => {}
            _ => unreachable!("kinds checked above"),
        }
    }
}

impl VariantKind {
    /// Whether `interpolate` produces output for this kind.
    pub fn blendable(self) -> bool {
        matches!(
            self,
            VariantKind::Float
                | VariantKind::Vec2
                | VariantKind::Vec3
                | VariantKind::Rect
                | VariantKind::UInt32
                | VariantKind::Int32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn every_curve_hits_both_endpoints() {
        for curve in CURVES {
            assert_eq!(weight(curve, 0.0), 0.0, "{curve:?} at 0");
            assert_eq!(weight(curve, 1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn monotonic_curves_are_monotonic() {
        for curve in CURVES {
            if curve == Easing::BounceTo {
                continue;
            }
            let mut prev = 0.0f32;
            for i in 1..=100 {
                let w = weight(curve, i as f32 / 100.0);
                assert!(w >= prev, "{curve:?} decreased at step {i}");
                prev = w;
            }
        }
    }

    #[test]
    fn bounce_overshoots_past_target() {
        let overshot = (80..100).any(|i| weight(Easing::BounceTo, i as f32 / 100.0) > 1.0);
        assert!(overshot);
    }

    #[test]
    fn color_blend_clamps_channels() {
        // Bounce overshoot past a channel value of 255 must pin at 255.
        let a = u32::from_le_bytes([0, 0, 0, 0]);
        let b = u32::from_le_bytes([255, 255, 255, 255]);
        let mid = blend_color_u32(a, b, weight(Easing::BounceTo, 0.85));
        assert_eq!(mid.to_le_bytes(), [255, 255, 255, 255]);
    }

    #[test]
    fn string_interpolate_is_noop() {
        let a = Variant::from("start");
        let b = Variant::from("end");
        let mut out = Variant::new();
        out.interpolate(&a, &b, 0.5, Easing::Linear);
        assert!(out.is_unused());
    }
}
