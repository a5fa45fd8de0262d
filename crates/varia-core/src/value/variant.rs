//! The tagged `Variant` value — one payload out of a closed kind set.
//!
//! Type safety is enforced at the access methods, not by making callers
//! match: a variant latches onto a kind the first time it is set (or the
//! first time a `_mut` getter touches an unused one) and any later access
//! under a different kind is a caller bug, reported by panicking. Malformed
//! *data* (wire bytes) is a different story and goes through `CodecError`.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::signal::Connection;
use crate::types::geom::{Rect, Vec2, Vec3};

// ─── Kinds ────────────────────────────────────────────────────────────────────

/// Discriminator for the closed set of payload kinds. The numeric order is
/// the wire tag order (see codec.rs) and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VariantKind {
    Unused = 0,
    Float = 1,
    String = 2,
    Vec2 = 3,
    Vec3 = 4,
    UInt32 = 5,
    Entity = 6,
    Component = 7,
    Rect = 8,
    Int32 = 9,
}

/// Non-owning handle to an entity in an external registry. Never
/// dereferenced here; equality is handle identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

/// Non-owning handle to a component in an external registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(pub u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Payload {
    #[default]
    Unused,
    Float(f32),
    Str(String),
    Vec2(Vec2),
    Vec3(Vec3),
    UInt32(u32),
    Entity(EntityHandle),
    Component(ComponentHandle),
    Rect(Rect),
    Int32(i32),
}

impl Payload {
    pub(crate) fn kind(&self) -> VariantKind {
        match self {
            Payload::Unused => VariantKind::Unused,
            Payload::Float(_) => VariantKind::Float,
            Payload::Str(_) => VariantKind::String,
            Payload::Vec2(_) => VariantKind::Vec2,
            Payload::Vec3(_) => VariantKind::Vec3,
            Payload::UInt32(_) => VariantKind::UInt32,
            Payload::Entity(_) => VariantKind::Entity,
            Payload::Component(_) => VariantKind::Component,
            Payload::Rect(_) => VariantKind::Rect,
            Payload::Int32(_) => VariantKind::Int32,
        }
    }
}

// ─── Variant ──────────────────────────────────────────────────────────────────

/// A single loosely-typed parameter value.
///
/// Besides the payload it carries the registrations this value holds with
/// the external change-notification system. Registrations stay with the
/// original instance: copying a variant copies the payload only.
#[derive(Default)]
pub struct Variant {
    pub(crate) payload: Payload,
    connections: Vec<Connection>,
}

impl Clone for Variant {
    /// Payload-only copy. Signal registrations are owned solely by the
    /// original and must be re-attached on the copy if wanted.
    fn clone(&self) -> Self {
        Self { payload: self.payload.clone(), connections: Vec::new() }
    }
}

impl PartialEq for Variant {
    /// Kind plus kind-specific payload equality. Two `Unused` variants are
    /// always equal. Registrations never participate.
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("payload", &self.payload)
            .field("connections", &self.connections.len())
            .finish()
    }
}

impl Variant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> VariantKind {
        self.payload.kind()
    }

    pub fn is_unused(&self) -> bool {
        matches!(self.payload, Payload::Unused)
    }

    /// Back to `Unused`. Any kind may be set afterwards. Signal
    /// registrations are untouched; use `clear_connections` for those.
    pub fn reset(&mut self) {
        self.payload = Payload::Unused;
    }

    /// Assignment: copies the payload from `other`, leaving this variant's
    /// own signal registrations in place and never taking `other`'s.
    pub fn set_from(&mut self, other: &Variant) {
        self.payload = other.payload.clone();
    }

    fn check_settable(&self, want: VariantKind) {
        let have = self.kind();
        assert!(
            have == VariantKind::Unused || have == want,
            "variant kind contract violated: cannot store {want:?} in a {have:?} variant"
        );
    }

    fn kind_panic(have: VariantKind, want: VariantKind) -> ! {
        panic!("variant kind contract violated: wanted {want:?}, found {have:?}")
    }

    // ─── Setters ─────────────────────────────────────────────────────────────

    pub fn set_float(&mut self, v: f32) {
        self.check_settable(VariantKind::Float);
        self.payload = Payload::Float(v);
    }

    pub fn set_string(&mut self, v: impl Into<String>) {
        self.check_settable(VariantKind::String);
        self.payload = Payload::Str(v.into());
    }

    pub fn set_vec2(&mut self, v: Vec2) {
        self.check_settable(VariantKind::Vec2);
        self.payload = Payload::Vec2(v);
    }

    pub fn set_vec3(&mut self, v: Vec3) {
        self.check_settable(VariantKind::Vec3);
        self.payload = Payload::Vec3(v);
    }

    pub fn set_u32(&mut self, v: u32) {
        self.check_settable(VariantKind::UInt32);
        self.payload = Payload::UInt32(v);
    }

    pub fn set_entity(&mut self, v: EntityHandle) {
        self.check_settable(VariantKind::Entity);
        self.payload = Payload::Entity(v);
    }

    pub fn set_component(&mut self, v: ComponentHandle) {
        self.check_settable(VariantKind::Component);
        self.payload = Payload::Component(v);
    }

    pub fn set_rect(&mut self, v: Rect) {
        self.check_settable(VariantKind::Rect);
        self.payload = Payload::Rect(v);
    }

    pub fn set_i32(&mut self, v: i32) {
        self.check_settable(VariantKind::Int32);
        self.payload = Payload::Int32(v);
    }

    // ─── Getters ─────────────────────────────────────────────────────────────
    //
    // By-value getters require the kind to match. The `_mut` getters
    // additionally auto-initialize an `Unused` variant to the kind's zero
    // value, mirroring first-touch use of a fresh parameter slot.

    pub fn get_float(&self) -> f32 {
        match self.payload {
            Payload::Float(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Float),
        }
    }

    pub fn get_float_mut(&mut self) -> &mut f32 {
        if self.is_unused() {
            self.payload = Payload::Float(0.0);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Float(v) => v,
            _ => Self::kind_panic(have, VariantKind::Float),
        }
    }

    pub fn get_string(&self) -> &str {
        match &self.payload {
            Payload::Str(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::String),
        }
    }

    pub fn get_string_mut(&mut self) -> &mut String {
        if self.is_unused() {
            self.payload = Payload::Str(String::new());
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Str(v) => v,
            _ => Self::kind_panic(have, VariantKind::String),
        }
    }

    pub fn get_vec2(&self) -> Vec2 {
        match self.payload {
            Payload::Vec2(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Vec2),
        }
    }

    pub fn get_vec2_mut(&mut self) -> &mut Vec2 {
        if self.is_unused() {
            self.payload = Payload::Vec2(Vec2::ZERO);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Vec2(v) => v,
            _ => Self::kind_panic(have, VariantKind::Vec2),
        }
    }

    pub fn get_vec3(&self) -> Vec3 {
        match self.payload {
            Payload::Vec3(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Vec3),
        }
    }

    pub fn get_vec3_mut(&mut self) -> &mut Vec3 {
        if self.is_unused() {
            self.payload = Payload::Vec3(Vec3::ZERO);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Vec3(v) => v,
            _ => Self::kind_panic(have, VariantKind::Vec3),
        }
    }

    pub fn get_u32(&self) -> u32 {
        match self.payload {
            Payload::UInt32(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::UInt32),
        }
    }

    pub fn get_u32_mut(&mut self) -> &mut u32 {
        if self.is_unused() {
            self.payload = Payload::UInt32(0);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::UInt32(v) => v,
            _ => Self::kind_panic(have, VariantKind::UInt32),
        }
    }

    pub fn get_entity(&self) -> EntityHandle {
        match self.payload {
            Payload::Entity(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Entity),
        }
    }

    pub fn get_component(&self) -> ComponentHandle {
        match self.payload {
            Payload::Component(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Component),
        }
    }

    pub fn get_rect(&self) -> Rect {
        match self.payload {
            Payload::Rect(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Rect),
        }
    }

    pub fn get_rect_mut(&mut self) -> &mut Rect {
        if self.is_unused() {
            self.payload = Payload::Rect(Rect::ZERO);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Rect(v) => v,
            _ => Self::kind_panic(have, VariantKind::Rect),
        }
    }

    pub fn get_i32(&self) -> i32 {
        match self.payload {
            Payload::Int32(v) => v,
            _ => Self::kind_panic(self.kind(), VariantKind::Int32),
        }
    }

    pub fn get_i32_mut(&mut self) -> &mut i32 {
        if self.is_unused() {
            self.payload = Payload::Int32(0);
        }
        let have = self.kind();
        match &mut self.payload {
            Payload::Int32(v) => v,
            _ => Self::kind_panic(have, VariantKind::Int32),
        }
    }

    // ─── Signal registrations ────────────────────────────────────────────────

    /// Hold a registration guard from the external signal system. The guard
    /// detaches when dropped, so clearing or dropping this variant unhooks
    /// the observer.
    pub fn attach(&mut self, conn: Connection) {
        self.connections.push(conn);
    }

    /// Drop all held registration guards, detaching every observer this
    /// variant was registered with. Owners must call this (or drop the
    /// variant) before the observer side goes away.
    pub fn clear_connections(&mut self) {
        self.connections.clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

// ─── Constructors from raw payloads ───────────────────────────────────────────

impl From<f32> for Variant {
    fn from(v: f32) -> Self {
        Self { payload: Payload::Float(v), connections: Vec::new() }
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Self { payload: Payload::UInt32(v), connections: Vec::new() }
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Self { payload: Payload::Int32(v), connections: Vec::new() }
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self { payload: Payload::Str(v.to_string()), connections: Vec::new() }
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Self { payload: Payload::Str(v), connections: Vec::new() }
    }
}

impl From<Vec2> for Variant {
    fn from(v: Vec2) -> Self {
        Self { payload: Payload::Vec2(v), connections: Vec::new() }
    }
}

impl From<Vec3> for Variant {
    fn from(v: Vec3) -> Self {
        Self { payload: Payload::Vec3(v), connections: Vec::new() }
    }
}

impl From<Rect> for Variant {
    fn from(v: Rect) -> Self {
        Self { payload: Payload::Rect(v), connections: Vec::new() }
    }
}

impl From<EntityHandle> for Variant {
    fn from(v: EntityHandle) -> Self {
        Self { payload: Payload::Entity(v), connections: Vec::new() }
    }
}

impl From<ComponentHandle> for Variant {
    fn from(v: ComponentHandle) -> Self {
        Self { payload: Payload::Component(v), connections: Vec::new() }
    }
}

// ─── Arithmetic ───────────────────────────────────────────────────────────────
//
// Both operands must share a kind; mismatches are caller bugs and panic.
// Addition/subtraction is component-wise for the numeric kinds, `+=` on
// String is concatenation, and the reference kinds are not additive (their
// ops are deliberate no-ops, matching assignment-parameter semantics).

impl AddAssign<&Variant> for Variant {
    fn add_assign(&mut self, rhs: &Variant) {
        assert!(
            self.kind() == rhs.kind(),
            "variant kind contract violated: += between {:?} and {:?}",
            self.kind(),
            rhs.kind()
        );
        match (&mut self.payload, &rhs.payload) {
            (Payload::Unused, Payload::Unused) => {}
            (Payload::Float(a), Payload::Float(b)) => *a += b,
            (Payload::Str(a), Payload::Str(b)) => a.push_str(b),
            (Payload::Vec2(a), Payload::Vec2(b)) => *a += *b,
            (Payload::Vec3(a), Payload::Vec3(b)) => *a += *b,
            (Payload::UInt32(a), Payload::UInt32(b)) => *a = a.wrapping_add(*b),
            (Payload::Rect(a), Payload::Rect(b)) => *a += *b,
            (Payload::Int32(a), Payload::Int32(b)) => *a = a.wrapping_add(*b),
            (Payload::Entity(_), _) | (Payload::Component(_), _) => {}
            _ => unreachable!("kinds checked above"),
        }
    }
}

impl SubAssign<&Variant> for Variant {
    fn sub_assign(&mut self, rhs: &Variant) {
        assert!(
            self.kind() == rhs.kind(),
            "variant kind contract violated: -= between {:?} and {:?}",
            self.kind(),
            rhs.kind()
        );
        match (&mut self.payload, &rhs.payload) {
            (Payload::Unused, Payload::Unused) => {}
            (Payload::Float(a), Payload::Float(b)) => *a -= b,
            // Subtraction has no meaning for strings.
            (Payload::Str(_), Payload::Str(_)) => {}
            (Payload::Vec2(a), Payload::Vec2(b)) => *a -= *b,
            (Payload::Vec3(a), Payload::Vec3(b)) => *a -= *b,
            (Payload::UInt32(a), Payload::UInt32(b)) => *a = a.wrapping_sub(*b),
            (Payload::Rect(a), Payload::Rect(b)) => *a -= *b,
            (Payload::Int32(a), Payload::Int32(b)) => *a = a.wrapping_sub(*b),
            (Payload::Entity(_), _) | (Payload::Component(_), _) => {}
            _ => unreachable!("kinds checked above"),
        }
    }
}

impl AddAssign for Variant {
    fn add_assign(&mut self, rhs: Variant) {
        *self += &rhs;
    }
}

impl SubAssign for Variant {
    fn sub_assign(&mut self, rhs: Variant) {
        *self -= &rhs;
    }
}

impl Add<&Variant> for Variant {
    type Output = Variant;
    fn add(mut self, rhs: &Variant) -> Variant {
        self += rhs;
        self
    }
}

impl Add for Variant {
    type Output = Variant;
    fn add(mut self, rhs: Variant) -> Variant {
        self += &rhs;
        self
    }
}

impl Sub<&Variant> for Variant {
    type Output = Variant;
    fn sub(mut self, rhs: &Variant) -> Variant {
        self -= rhs;
        self
    }
}

impl Sub for Variant {
    type Output = Variant;
    fn sub(mut self, rhs: Variant) -> Variant {
        self -= &rhs;
        self
    }
}

// ─── Diagnostics ──────────────────────────────────────────────────────────────

/// Human-readable kind + payload rendering. Diagnostics only; the wire
/// format lives in codec.rs.
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Unused => write!(f, "unused"),
            Payload::Float(v) => write!(f, "float: {v}"),
            Payload::Str(v) => write!(f, "string: \"{v}\""),
            Payload::Vec2(v) => write!(f, "vec2: ({}, {})", v.x, v.y),
            Payload::Vec3(v) => write!(f, "vec3: ({}, {}, {})", v.x, v.y, v.z),
            Payload::UInt32(v) => write!(f, "uint32: {v}"),
            Payload::Entity(h) => write!(f, "entity: #{}", h.0),
            Payload::Component(h) => write!(f, "component: #{}", h.0),
            Payload::Rect(v) => write!(f, "rect: ({}, {}, {}, {})", v.x, v.y, v.w, v.h),
            Payload::Int32(v) => write!(f, "int32: {v}"),
        }
    }
}
