//! Pure geometry payload types — no Variant, no error types.
//! All components are f32 to match the 4-byte wire layout.
//!
//! Used by value/variant.rs (payloads and operators) and interp.rs (blending).

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Blend `a` toward `b` by weight `w`. Exact at the endpoints: `w = 0`
/// yields `a`, `w = 1` yields `b`. `w` outside [0, 1] extrapolates.
#[inline]
pub fn lerp(a: f32, b: f32, w: f32) -> f32 {
    a * (1.0 - w) + b * w
}

// ─── Vec2 ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(a: Vec2, b: Vec2, w: f32) -> Vec2 {
        Vec2::new(lerp(a.x, b.x, w), lerp(a.y, b.y, w))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

// ─── Vec3 ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(a: Vec3, b: Vec3, w: f32) -> Vec3 {
        Vec3::new(lerp(a.x, b.x, w), lerp(a.y, b.y, w), lerp(a.z, b.z, w))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle: origin plus extent. Arithmetic and blending are
/// component-wise over all four fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn lerp(a: Rect, b: Rect, w: f32) -> Rect {
        Rect::new(
            lerp(a.x, b.x, w),
            lerp(a.y, b.y, w),
            lerp(a.w, b.w, w),
            lerp(a.h, b.h, w),
        )
    }
}

impl Add for Rect {
    type Output = Rect;
    fn add(self, rhs: Rect) -> Rect {
        Rect::new(self.x + rhs.x, self.y + rhs.y, self.w + rhs.w, self.h + rhs.h)
    }
}

impl Sub for Rect {
    type Output = Rect;
    fn sub(self, rhs: Rect) -> Rect {
        Rect::new(self.x - rhs.x, self.y - rhs.y, self.w - rhs.w, self.h - rhs.h)
    }
}

impl AddAssign for Rect {
    fn add_assign(&mut self, rhs: Rect) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rect {
    fn sub_assign(&mut self, rhs: Rect) {
        *self = *self - rhs;
    }
}
