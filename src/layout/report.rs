//! Text report of a record layout

use std::fmt;
use std::io::{self, Write};

use super::offsets::ShmTimeLayout;

impl fmt::Display for ShmTimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sizeof = {}  time_t = {}", self.size, self.time_width)?;
        writeln!(f, "r.s = {}  r.us = {}", self.clock_sec, self.clock_usec)?;
        writeln!(f, "l.s = {}  l.us = {}", self.receive_sec, self.receive_usec)?;
        writeln!(f, "leap = {}  valid = {}", self.leap, self.valid)?;
        writeln!(f, "lastdummy = {}", self.last_reserved)
    }
}

/// Write the five-line report in a single write
pub fn write_report<W: Write>(layout: &ShmTimeLayout, mut out: W) -> io::Result<()> {
    let text = layout.to_string();
    out.write_all(text.as_bytes())?;
    out.flush()
}
