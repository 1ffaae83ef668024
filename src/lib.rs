//! # shmtime - NTP SHM time record layout
//!
//! The NTP shared memory reference clock driver exchanges timestamps through
//! a small fixed-layout record (`struct shmTime`). Writers (GPS daemons,
//! PPS tools) and readers (ntpd, chrony) are built separately, often in
//! different languages, so each side has to reproduce the record's byte
//! layout by hand.
//!
//! This crate declares the record with `#[repr(C)]`, measures where the
//! compiler put each field, and prints the result so those offsets can be
//! copied into another codebase.
//!
//! ```text
//! offset  LP64   ILP32
//!   0     mode   mode
//!   4     count  count
//!   8     clockTimeStampSec (time_t)
//!   ...
//!  88/76  dummy[9]
//! ```
//!
//! The numbers on the right depend on the target: run `shm-offsets` once per
//! platform of interest.

pub mod error;
pub mod layout;

// Main API re-exports
pub use error::{LayoutError, Result};
pub use layout::{probe, write_report, ShmTime, ShmTimeLayout, TargetModel, TimeT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
