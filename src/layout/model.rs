//! Natural-alignment layout model for a target configuration
//!
//! Computes where a C compiler using natural alignment places each field of
//! the time record, given the width of `time_t`. The host model is checked
//! against the measured layout at startup.

use std::mem::size_of;

use super::constants::*;
use super::offsets::ShmTimeLayout;
use super::record::TimeT;
use crate::error::{LayoutError, Result};

/// Platform configuration the record layout is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetModel {
    name: &'static str,
    time_width: usize,
    int_width: usize,
}

impl TargetModel {
    /// 64-bit reference configuration (8-byte `time_t`)
    pub const LP64: Self = Self {
        name: "LP64",
        time_width: TIME_WIDTH_LP64,
        int_width: C_INT_WIDTH,
    };

    /// 32-bit reference configuration (4-byte `time_t`)
    pub const ILP32: Self = Self {
        name: "ILP32",
        time_width: TIME_WIDTH_ILP32,
        int_width: C_INT_WIDTH,
    };

    /// Create a model for a custom `time_t` width
    pub fn new(name: &'static str, time_width: usize) -> Result<Self> {
        match time_width {
            TIME_WIDTH_ILP32 | TIME_WIDTH_LP64 => Ok(Self {
                name,
                time_width,
                int_width: C_INT_WIDTH,
            }),
            _ => Err(LayoutError::unsupported_time_width(time_width)),
        }
    }

    /// The model matching the seconds type selected for this build
    pub const fn host() -> Self {
        if size_of::<TimeT>() == TIME_WIDTH_LP64 {
            Self::LP64
        } else {
            Self::ILP32
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn time_width(&self) -> usize {
        self.time_width
    }

    pub fn int_width(&self) -> usize {
        self.int_width
    }

    /// Place every field at the next multiple of its alignment and pad the
    /// total to the largest alignment
    pub fn layout(&self) -> ShmTimeLayout {
        let int = self.int_width;
        let time = self.time_width;
        let mut cursor = LayoutCursor::default();

        let mode = cursor.place(int, int);
        let count = cursor.place(int, int);
        let clock_sec = cursor.place(time, time);
        let clock_usec = cursor.place(int, int);
        let receive_sec = cursor.place(time, time);
        let receive_usec = cursor.place(int, int);
        let leap = cursor.place(int, int);
        let precision = cursor.place(int, int);
        let nsamples = cursor.place(int, int);
        let valid = cursor.place(int, int);
        let reserved = cursor.place(int * RESERVED_SLOTS, int);

        ShmTimeLayout {
            size: cursor.finish(),
            align: cursor.max_align,
            time_width: time,
            mode,
            count,
            clock_sec,
            clock_usec,
            receive_sec,
            receive_usec,
            leap,
            precision,
            nsamples,
            valid,
            reserved,
            reserved_slot_width: int,
            last_reserved: reserved + (RESERVED_SLOTS - 1) * int,
        }
    }
}

#[derive(Debug, Default)]
struct LayoutCursor {
    offset: usize,
    max_align: usize,
}

impl LayoutCursor {
    fn place(&mut self, size: usize, align: usize) -> usize {
        let at = Self::align_up(self.offset, align);
        self.offset = at + size;
        self.max_align = self.max_align.max(align);
        at
    }

    fn finish(&self) -> usize {
        Self::align_up(self.offset, self.max_align)
    }

    fn align_up(value: usize, align: usize) -> usize {
        (value + align - 1) & !(align - 1)
    }
}
