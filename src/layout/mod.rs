//! Layout of the NTP SHM refclock time record
//!
//! The record is shared between a time source (writer) and an NTP daemon
//! (reader) that are compiled separately. This module pins the record's shape
//! and reports where the compiler actually placed each field:
//! 1. `record`: the `#[repr(C)]` record and the static layout probe
//! 2. `offsets`: size/width/offset table measured from the compiled record
//! 3. `model`: natural-alignment model of a target configuration
//! 4. `report`: human-readable rendering of an offset table

pub mod constants;
pub mod model;
pub mod offsets;
pub mod record;
pub mod report;

// Re-export main types
pub use constants::*;
pub use model::TargetModel;
pub use offsets::ShmTimeLayout;
pub use record::{probe, ShmTime, TimeT};
pub use report::write_report;
