//! varia-core — loosely-typed parameter values for subsystem plumbing.
//!
//! A `Variant` holds exactly one payload out of a closed kind set (floats,
//! integers, strings, 2/3-component vectors, rects, and opaque entity or
//! component handles), latching onto its kind at first set. A `VariantList`
//! is the unit of parameter passing: six order-significant slots with a
//! byte-exact wire encoding for persistence. The interp module blends two
//! variants of matching kind along a normalized position with a family of
//! easing curves.
//!
//! Everything here is plain synchronous data; callers own any locking as
//! well as the lifetime of the objects behind the handle kinds.

pub mod codec;
pub mod error;
pub mod interp;
pub mod signal;
pub mod types;
pub mod value;

pub use error::{CodecError, CodecResult};
pub use interp::Easing;
pub use signal::Connection;
pub use types::geom::{Rect, Vec2, Vec3};
pub use value::list::{MAX_LIST_PARAMS, VariantList};
pub use value::variant::{ComponentHandle, EntityHandle, Variant, VariantKind};
