//! Size and field offsets of the time record

use std::mem::{align_of, align_of_val, offset_of, size_of, size_of_val};
use std::ptr;

use libc::c_int;

use super::constants::RESERVED_SLOTS;
use super::record::{probe, ShmTime, TimeT};
use crate::error::{LayoutError, Result};

/// Field names in declared order, as spelled by the C consumers
pub const FIELD_NAMES: [&str; 11] = [
    "mode",
    "count",
    "clockTimeStampSec",
    "clockTimeStampUSec",
    "receiveTimeStampSec",
    "receiveTimeStampUSec",
    "leap",
    "precision",
    "nsamples",
    "valid",
    "dummy",
];

/// Byte layout of a [`ShmTime`] record. All offsets are relative to the
/// record's base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShmTimeLayout {
    /// Total record size including trailing padding
    pub size: usize,
    /// Record alignment
    pub align: usize,
    /// Width of the platform-width seconds fields
    pub time_width: usize,
    pub mode: usize,
    pub count: usize,
    pub clock_sec: usize,
    pub clock_usec: usize,
    pub receive_sec: usize,
    pub receive_usec: usize,
    pub leap: usize,
    pub precision: usize,
    pub nsamples: usize,
    pub valid: usize,
    /// First reserved slot
    pub reserved: usize,
    /// Width of one reserved slot
    pub reserved_slot_width: usize,
    /// Last reserved slot
    pub last_reserved: usize,
}

impl ShmTimeLayout {
    /// Measure the static probe by address difference
    pub fn measure() -> Self {
        Self::measure_record(probe())
    }

    /// Measure a record instance by subtracting its base address from the
    /// address of each field
    pub fn measure_record(record: &ShmTime) -> Self {
        let base = record as *const ShmTime as usize;
        let offset = |field: usize| field - base;

        Self {
            size: size_of_val(record),
            align: align_of_val(record),
            time_width: size_of_val(&record.clock_timestamp_sec),
            mode: offset(ptr::addr_of!(record.mode) as usize),
            count: offset(ptr::addr_of!(record.count) as usize),
            clock_sec: offset(ptr::addr_of!(record.clock_timestamp_sec) as usize),
            clock_usec: offset(ptr::addr_of!(record.clock_timestamp_usec) as usize),
            receive_sec: offset(ptr::addr_of!(record.receive_timestamp_sec) as usize),
            receive_usec: offset(ptr::addr_of!(record.receive_timestamp_usec) as usize),
            leap: offset(ptr::addr_of!(record.leap) as usize),
            precision: offset(ptr::addr_of!(record.precision) as usize),
            nsamples: offset(ptr::addr_of!(record.nsamples) as usize),
            valid: offset(ptr::addr_of!(record.valid) as usize),
            reserved: offset(ptr::addr_of!(record.dummy) as usize),
            reserved_slot_width: size_of_val(&record.dummy[0]),
            last_reserved: offset(ptr::addr_of!(record.dummy[RESERVED_SLOTS - 1]) as usize),
        }
    }

    /// The same table taken from the compiler's layout introspection
    pub const fn compiled() -> Self {
        Self {
            size: size_of::<ShmTime>(),
            align: align_of::<ShmTime>(),
            time_width: size_of::<TimeT>(),
            mode: offset_of!(ShmTime, mode),
            count: offset_of!(ShmTime, count),
            clock_sec: offset_of!(ShmTime, clock_timestamp_sec),
            clock_usec: offset_of!(ShmTime, clock_timestamp_usec),
            receive_sec: offset_of!(ShmTime, receive_timestamp_sec),
            receive_usec: offset_of!(ShmTime, receive_timestamp_usec),
            leap: offset_of!(ShmTime, leap),
            precision: offset_of!(ShmTime, precision),
            nsamples: offset_of!(ShmTime, nsamples),
            valid: offset_of!(ShmTime, valid),
            reserved: offset_of!(ShmTime, dummy),
            reserved_slot_width: size_of::<c_int>(),
            last_reserved: offset_of!(ShmTime, dummy) + (RESERVED_SLOTS - 1) * size_of::<c_int>(),
        }
    }

    /// Offsets of every field in declared order
    pub fn field_offsets(&self) -> [(&'static str, usize); 11] {
        let offsets = [
            self.mode,
            self.count,
            self.clock_sec,
            self.clock_usec,
            self.receive_sec,
            self.receive_usec,
            self.leap,
            self.precision,
            self.nsamples,
            self.valid,
            self.reserved,
        ];
        let mut table = [("", 0); 11];
        for (slot, (name, offset)) in table.iter_mut().zip(FIELD_NAMES.iter().zip(offsets)) {
            *slot = (*name, offset);
        }
        table
    }

    /// Offset of the last reserved slot, derived from the reserved base
    pub fn last_reserved_offset(&self) -> usize {
        self.reserved + (RESERVED_SLOTS - 1) * self.reserved_slot_width
    }

    /// Compare against an expected layout, reporting the first difference
    pub fn verify_against(&self, expected: &ShmTimeLayout) -> Result<()> {
        if self.size != expected.size {
            return Err(LayoutError::size_mismatch(expected.size, self.size));
        }
        if self.time_width != expected.time_width {
            return Err(LayoutError::width_mismatch(expected.time_width, self.time_width));
        }
        for ((field, actual), (_, wanted)) in self.field_offsets().into_iter().zip(expected.field_offsets()) {
            if actual != wanted {
                return Err(LayoutError::offset_mismatch(field, wanted, actual));
            }
        }
        if self.last_reserved != expected.last_reserved {
            return Err(LayoutError::offset_mismatch(
                "dummy[9]",
                expected.last_reserved,
                self.last_reserved,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_matches_compiled() {
        assert_eq!(ShmTimeLayout::measure(), ShmTimeLayout::compiled());
    }

    #[test]
    fn test_measure_any_instance() {
        let boxed = Box::new(ShmTime::zeroed());
        assert_eq!(ShmTimeLayout::measure_record(&boxed), ShmTimeLayout::measure());
    }

    #[test]
    fn test_field_offsets_in_declared_order() {
        let layout = ShmTimeLayout::measure();
        let offsets = layout.field_offsets();

        assert_eq!(offsets[0], ("mode", 0));
        assert_eq!(offsets[10].0, "dummy");
        assert!(offsets.windows(2).all(|pair| pair[0].1 <= pair[1].1));
    }

    #[test]
    fn test_last_reserved_slot() {
        let layout = ShmTimeLayout::measure();
        assert_eq!(layout.last_reserved, layout.last_reserved_offset());
        assert_eq!(layout.last_reserved, layout.reserved + 9 * 4);
        assert!(layout.last_reserved + layout.reserved_slot_width <= layout.size);
    }

    #[test]
    fn test_verify_reports_first_mismatch() {
        let expected = ShmTimeLayout::compiled();

        let mut actual = expected;
        actual.leap += 4;
        actual.valid += 4;
        assert_eq!(
            actual.verify_against(&expected),
            Err(LayoutError::offset_mismatch("leap", expected.leap, expected.leap + 4))
        );

        let mut actual = expected;
        actual.size += 8;
        assert!(matches!(
            actual.verify_against(&expected),
            Err(LayoutError::SizeMismatch { .. })
        ));

        let mut actual = expected;
        actual.last_reserved += 1;
        assert!(matches!(
            actual.verify_against(&expected),
            Err(LayoutError::OffsetMismatch { field: "dummy[9]", .. })
        ));

        assert!(expected.verify_against(&expected).is_ok());
    }
}
