//! Constants describing the SHM time record

/// Number of reserved `int` slots at the end of the record
pub const RESERVED_SLOTS: usize = 10;

/// Protocol mode 0: use the values while `valid` is set, then clear `valid`
pub const MODE_VALID_FLAG: i32 = 0;

/// Protocol mode 1: as mode 0, but `count` must be unchanged across the read
pub const MODE_COUNTED: i32 = 1;

/// Width of C `int` on every supported ABI
pub const C_INT_WIDTH: usize = 4;

/// `time_t` width on ILP32 targets (e.g. i686 Linux)
pub const TIME_WIDTH_ILP32: usize = 4;

/// `time_t` width on LP64 targets (e.g. x86_64 Linux)
pub const TIME_WIDTH_LP64: usize = 8;
