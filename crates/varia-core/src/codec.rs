//! Byte-exact wire codec for variants and variant lists.
//!
//! Layout per variant record, all integers little-endian:
//!   [1 byte kind tag][kind-specific payload]
//! with 4-byte IEEE-754 floats for every geometric component and strings as
//! a 4-byte length followed by raw bytes (no terminator). A list is simply
//! six records in slot order, unused slots included, so positional gaps
//! survive the trip. Tag bytes follow `VariantKind` numeric order and are a
//! stable contract; previously written data depends on them.
//!
//! The reference kinds (`Entity`, `Component`) hold non-owning handles that
//! mean nothing outside the writing process, so they encode as `Unused`
//! with a logged diagnostic rather than failing the whole list.

use std::io::{Read, Write};

use crate::error::{CodecError, CodecResult};
use crate::types::geom::{Rect, Vec2, Vec3};
use crate::value::list::{MAX_LIST_PARAMS, VariantList};
use crate::value::variant::{Payload, Variant};

// ─── Tags ─────────────────────────────────────────────────────────────────────

const TAG_UNUSED: u8 = 0;
const TAG_FLOAT: u8 = 1;
const TAG_STRING: u8 = 2;
const TAG_VEC2: u8 = 3;
const TAG_VEC3: u8 = 4;
const TAG_UINT32: u8 = 5;
const TAG_ENTITY: u8 = 6;
const TAG_COMPONENT: u8 = 7;
const TAG_RECT: u8 = 8;
const TAG_INT32: u8 = 9;

// ─── Cursor reads ─────────────────────────────────────────────────────────────

fn read_bytes<'a>(src: &'a [u8], cursor: &mut usize, n: usize) -> CodecResult<&'a [u8]> {
    let end = cursor
        .checked_add(n)
        .ok_or(CodecError::Truncated { offset: *cursor, needed: n })?;
    if end > src.len() {
        return Err(CodecError::Truncated { offset: *cursor, needed: end - src.len() });
    }
    let out = &src[*cursor..end];
    *cursor = end;
    Ok(out)
}

fn read_u8(src: &[u8], cursor: &mut usize) -> CodecResult<u8> {
    Ok(read_bytes(src, cursor, 1)?[0])
}

fn read_u32(src: &[u8], cursor: &mut usize) -> CodecResult<u32> {
    let b = read_bytes(src, cursor, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_i32(src: &[u8], cursor: &mut usize) -> CodecResult<i32> {
    let b = read_bytes(src, cursor, 4)?;
    Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_f32(src: &[u8], cursor: &mut usize) -> CodecResult<f32> {
    let b = read_bytes(src, cursor, 4)?;
    Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

// ─── Variant records ──────────────────────────────────────────────────────────

/// Encoded size in bytes of one variant record.
pub fn encoded_size(v: &Variant) -> usize {
    match &v.payload {
        Payload::Unused | Payload::Entity(_) | Payload::Component(_) => 1,
        Payload::Float(_) | Payload::UInt32(_) | Payload::Int32(_) => 1 + 4,
        Payload::Vec2(_) => 1 + 8,
        Payload::Vec3(_) => 1 + 12,
        Payload::Rect(_) => 1 + 16,
        Payload::Str(s) => 1 + 4 + s.len(),
    }
}

/// Append one variant record to `out`.
pub fn encode_variant(v: &Variant, out: &mut Vec<u8>) {
    match &v.payload {
        Payload::Unused => out.push(TAG_UNUSED),
        Payload::Float(x) => {
            out.push(TAG_FLOAT);
            out.extend_from_slice(&x.to_le_bytes());
        }
        Payload::Str(s) => {
            assert!(s.len() <= u32::MAX as usize, "string payload too long for wire format");
            out.push(TAG_STRING);
            out.extend_from_slice(&(s.len() as u32).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        Payload::Vec2(v) => {
            out.push(TAG_VEC2);
            out.extend_from_slice(&v.x.to_le_bytes());
            out.extend_from_slice(&v.y.to_le_bytes());
        }
        Payload::Vec3(v) => {
            out.push(TAG_VEC3);
            out.extend_from_slice(&v.x.to_le_bytes());
            out.extend_from_slice(&v.y.to_le_bytes());
            out.extend_from_slice(&v.z.to_le_bytes());
        }
        Payload::UInt32(x) => {
            out.push(TAG_UINT32);
            out.extend_from_slice(&x.to_le_bytes());
        }
        Payload::Rect(r) => {
            out.push(TAG_RECT);
            out.extend_from_slice(&r.x.to_le_bytes());
            out.extend_from_slice(&r.y.to_le_bytes());
            out.extend_from_slice(&r.w.to_le_bytes());
            out.extend_from_slice(&r.h.to_le_bytes());
        }
        Payload::Int32(x) => {
            out.push(TAG_INT32);
            out.extend_from_slice(&x.to_le_bytes());
        }
        Payload::Entity(_) | Payload::Component(_) => {
            log::warn!("{:?} variant is not serializable, writing Unused", v.kind());
            out.push(TAG_UNUSED);
        }
    }
}

/// Read one variant record at `cursor`, advancing it past the record.
pub fn decode_variant(src: &[u8], cursor: &mut usize) -> CodecResult<Variant> {
    let tag = read_u8(src, cursor)?;
    let v = match tag {
        TAG_UNUSED => Variant::new(),
        TAG_FLOAT => Variant::from(read_f32(src, cursor)?),
        TAG_STRING => {
            let len = read_u32(src, cursor)? as usize;
            let bytes = read_bytes(src, cursor, len)?;
            Variant::from(String::from_utf8_lossy(bytes).into_owned())
        }
        TAG_VEC2 => {
            let x = read_f32(src, cursor)?;
            let y = read_f32(src, cursor)?;
            Variant::from(Vec2::new(x, y))
        }
        TAG_VEC3 => {
            let x = read_f32(src, cursor)?;
            let y = read_f32(src, cursor)?;
            let z = read_f32(src, cursor)?;
            Variant::from(Vec3::new(x, y, z))
        }
        TAG_UINT32 => Variant::from(read_u32(src, cursor)?),
        TAG_RECT => {
            let x = read_f32(src, cursor)?;
            let y = read_f32(src, cursor)?;
            let w = read_f32(src, cursor)?;
            let h = read_f32(src, cursor)?;
            Variant::from(Rect::new(x, y, w, h))
        }
        TAG_INT32 => Variant::from(read_i32(src, cursor)?),
        // Our encoder never writes these, but a foreign writer might.
        // The record is tolerated rather than failing the whole list.
        TAG_ENTITY | TAG_COMPONENT => {
            log::warn!("non-serializable kind tag {tag:#04x} on the wire, reading Unused");
            Variant::new()
        }
        other => return Err(CodecError::UnknownKind(other)),
    };
    Ok(v)
}

// ─── List serialization ───────────────────────────────────────────────────────

impl VariantList {
    /// Total encoded size of all six slot records.
    pub fn serialized_size(&self) -> usize {
        self.slots.iter().map(encoded_size).sum()
    }

    /// Encode every slot in index order into a buffer sized exactly to the
    /// encoded length.
    pub fn serialize_to_mem(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_size());
        for slot in &self.slots {
            encode_variant(slot, &mut out);
        }
        out
    }

    /// Repopulate this list from `src`, returning the bytes consumed. On
    /// failure the list may be partially repopulated but is always safe to
    /// drop or reset.
    pub fn serialize_from_mem(&mut self, src: &[u8]) -> CodecResult<usize> {
        let mut cursor = 0;
        for i in 0..MAX_LIST_PARAMS {
            self.slots[i] = decode_variant(src, &mut cursor)?;
        }
        Ok(cursor)
    }

    // ─── Stream records ──────────────────────────────────────────────────────
    //
    // `[u32 name_len][name][u32 data_len][data]`, little-endian. The stream
    // comes in already open; its lifecycle belongs to the caller.

    /// Write this list to an open stream, tagged with `name`. Stream errors
    /// propagate unchanged.
    pub fn save<W: Write>(&self, w: &mut W, name: &str) -> CodecResult<()> {
        assert!(name.len() <= u32::MAX as usize, "record name too long for wire format");
        let data = self.serialize_to_mem();
        w.write_all(&(name.len() as u32).to_le_bytes())?;
        w.write_all(name.as_bytes())?;
        w.write_all(&(data.len() as u32).to_le_bytes())?;
        w.write_all(&data)?;
        Ok(())
    }

    /// Read back one record written by `save`: the name tag and the list.
    pub fn load<R: Read>(r: &mut R) -> CodecResult<(String, VariantList)> {
        let name_len = read_u32_stream(r)? as usize;
        let mut name = vec![0u8; name_len];
        r.read_exact(&mut name)?;
        let name = String::from_utf8_lossy(&name).into_owned();

        let data_len = read_u32_stream(r)? as usize;
        let mut data = vec![0u8; data_len];
        r.read_exact(&mut data)?;

        let mut list = VariantList::new();
        list.serialize_from_mem(&data)?;
        Ok((name, list))
    }
}

fn read_u32_stream<R: Read>(r: &mut R) -> CodecResult<u32> {
    let mut b = [0u8; 4];
    r.read_exact(&mut b)?;
    Ok(u32::from_le_bytes(b))
}
