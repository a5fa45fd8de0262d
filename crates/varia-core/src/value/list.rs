//! Fixed-capacity, order-significant parameter list.
//!
//! Six slots, each an independent `Variant`. Slot position is the parameter
//! index, so gaps (an unused slot before a populated one) are meaningful and
//! survive serialization. The wire encode/decode and stream save/load for
//! lists live in codec.rs.

use std::fmt::Write as _;

use crate::value::variant::Variant;

/// Slot count per list. Part of the wire contract.
pub const MAX_LIST_PARAMS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantList {
    pub(crate) slots: [Variant; MAX_LIST_PARAMS],
}

impl VariantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds-checked slot access. An out-of-range index is a caller bug.
    pub fn get(&self, index: usize) -> &Variant {
        assert!(
            index < MAX_LIST_PARAMS,
            "variant list index {index} out of range (capacity {MAX_LIST_PARAMS})"
        );
        &self.slots[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Variant {
        assert!(
            index < MAX_LIST_PARAMS,
            "variant list index {index} out of range (capacity {MAX_LIST_PARAMS})"
        );
        &mut self.slots[index]
    }

    /// Set every slot back to `Unused`.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
    }

    /// New list holding slots `[start..]` of this one shifted down to begin
    /// at index 0; the vacated tail slots come out `Unused`. `start` of 0 is
    /// an identity copy. `start` past the end is a caller bug.
    pub fn starting_at(&self, start: usize) -> VariantList {
        assert!(
            start < MAX_LIST_PARAMS,
            "variant list start index {start} out of range (capacity {MAX_LIST_PARAMS})"
        );
        let mut out = VariantList::new();
        for (dst, src) in (start..MAX_LIST_PARAMS).enumerate() {
            out.slots[dst] = self.slots[src].clone();
        }
        out
    }

    /// One line per slot: index plus the slot's `Display` rendering.
    /// Diagnostics only.
    pub fn contents_as_debug_string(&self) -> String {
        let mut out = String::new();
        for (i, slot) in self.slots.iter().enumerate() {
            let _ = writeln!(out, "{i}: {slot}");
        }
        out
    }
}

/// Positional construction from up to six variants; the rest stay `Unused`.
impl<const N: usize> From<[Variant; N]> for VariantList {
    fn from(parms: [Variant; N]) -> Self {
        assert!(
            N <= MAX_LIST_PARAMS,
            "variant list holds at most {MAX_LIST_PARAMS} parameters, got {N}"
        );
        let mut out = VariantList::new();
        for (i, v) in parms.into_iter().enumerate() {
            out.slots[i] = v;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::variant::VariantKind;

    #[test]
    fn positional_construction_leaves_tail_unused() {
        let list = VariantList::from([Variant::from(1u32), Variant::from("x")]);
        assert_eq!(list.get(0).get_u32(), 1);
        assert_eq!(list.get(1).get_string(), "x");
        for i in 2..MAX_LIST_PARAMS {
            assert_eq!(list.get(i).kind(), VariantKind::Unused);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_panics() {
        let list = VariantList::new();
        let _ = list.get(MAX_LIST_PARAMS);
    }

    #[test]
    fn starting_at_shifts_and_clears_tail() {
        let list = VariantList::from([
            Variant::from(0u32),
            Variant::from(1u32),
            Variant::from(2u32),
            Variant::from(3u32),
            Variant::from(4u32),
            Variant::from(5u32),
        ]);
        let shifted = list.starting_at(2);
        for i in 0..4 {
            assert_eq!(shifted.get(i).get_u32(), (i + 2) as u32);
        }
        assert_eq!(shifted.get(4).kind(), VariantKind::Unused);
        assert_eq!(shifted.get(5).kind(), VariantKind::Unused);
    }

    #[test]
    fn starting_at_zero_is_identity() {
        let list = VariantList::from([Variant::from("a"), Variant::from(2i32)]);
        assert_eq!(list.starting_at(0), list);
    }
}
