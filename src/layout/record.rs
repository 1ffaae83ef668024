//! The shared-memory time record

use std::mem::size_of;

use libc::c_int;

use super::constants::*;

/// Platform-width seconds type, selected per target instead of taken from
/// the platform headers.
#[cfg(target_pointer_width = "64")]
pub type TimeT = i64;

/// Platform-width seconds type, selected per target instead of taken from
/// the platform headers.
#[cfg(target_pointer_width = "32")]
pub type TimeT = i32;

/// Time exchange record of the NTP SHM reference clock driver.
///
/// Field order and types are an external contract with independently built
/// readers and writers. Do not reorder.
///
/// `mode` selects how a reader consumes the record:
/// - [`MODE_VALID_FLAG`]: if `valid` is set, use the values and clear `valid`.
/// - [`MODE_COUNTED`]: if `valid` is set and `count` is the same before and
///   after reading the values, use them and clear `valid`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShmTime {
    /// Synchronization protocol variant (0 or 1)
    pub mode: c_int,
    /// Generation counter bumped by the writer in mode 1
    pub count: c_int,
    /// Reference clock timestamp, seconds
    pub clock_timestamp_sec: TimeT,
    /// Reference clock timestamp, microseconds
    pub clock_timestamp_usec: c_int,
    /// Local receive timestamp, seconds
    pub receive_timestamp_sec: TimeT,
    /// Local receive timestamp, microseconds
    pub receive_timestamp_usec: c_int,
    /// Leap second indicator
    pub leap: c_int,
    /// Clock precision exponent
    pub precision: c_int,
    /// Unused sample count
    pub nsamples: c_int,
    /// Set by the writer, cleared by the reader
    pub valid: c_int,
    /// Reserved, never interpreted
    pub dummy: [c_int; RESERVED_SLOTS],
}

impl ShmTime {
    /// An all-zero record
    pub const fn zeroed() -> Self {
        Self {
            mode: MODE_VALID_FLAG,
            count: 0,
            clock_timestamp_sec: 0,
            clock_timestamp_usec: 0,
            receive_timestamp_sec: 0,
            receive_timestamp_usec: 0,
            leap: 0,
            precision: 0,
            nsamples: 0,
            valid: 0,
            dummy: [0; RESERVED_SLOTS],
        }
    }
}

impl Default for ShmTime {
    fn default() -> Self {
        Self::zeroed()
    }
}

static PROBE: ShmTime = ShmTime::zeroed();

/// The process-wide record instance used to measure field addresses
pub fn probe() -> &'static ShmTime {
    &PROBE
}

// Reference sizes for the two supported data models
#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<ShmTime>() == 96);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(size_of::<ShmTime>() == 80);

const _: () = assert!(size_of::<c_int>() == C_INT_WIDTH);
