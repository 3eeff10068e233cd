//! STA frame codec
//!
//! `$STA,<TIME>,BBB,RR,CC\n`: node status with 32-bit sync time, battery
//! percentage as three ASCII digits (000..=100) and the two sensor counts as
//! two ASCII digits each. The only frame mixing binary and decimal-ASCII
//! fields, so digits are composed and decomposed explicitly instead of
//! byte-copied.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{FrameKind, HEADER_SIZE, STA_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded STA payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaData {
    /// Milliseconds since node boot at status capture
    pub sync_time: u32,

    /// Battery level in percent, 0..=100
    pub battery: u8,

    /// Number of FSR channels, 0..=99
    pub fsr_count: u8,

    /// Number of FSC channels, 0..=99
    pub fsc_count: u8,
}

/// Parse a STA body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<StaData> {
    cur.require(STA_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let sync_time = cur.read_u32();

    cur.expect_separator()?;
    let battery = cur.read_digits3()?;
    if battery > 100 {
        return Err(BedlinkError::BatteryOutOfRange(battery));
    }

    cur.expect_separator()?;
    let fsr_count = cur.read_digits2()?;

    cur.expect_separator()?;
    let fsc_count = cur.read_digits2()?;

    cur.expect_end()?;

    Ok(StaData {
        sync_time,
        battery: battery as u8,
        fsr_count,
        fsc_count,
    })
}

/// Serialize a STA frame, returning its length
pub fn create(data: &StaData, out: &mut [u8]) -> Result<usize> {
    if data.battery > 100 {
        return Err(BedlinkError::BatteryOutOfRange(data.battery as u16));
    }
    if data.fsr_count > 99 {
        return Err(BedlinkError::SensorCountOutOfRange(data.fsr_count));
    }
    if data.fsc_count > 99 {
        return Err(BedlinkError::SensorCountOutOfRange(data.fsc_count));
    }

    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Sta)?;
    w.put_sep()?;
    w.put_u32(data.sync_time)?;
    w.put_sep()?;
    w.put_digits3(data.battery)?;
    w.put_sep()?;
    w.put_digits2(data.fsr_count)?;
    w.put_sep()?;
    w.put_digits2(data.fsc_count)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, STA_SIZE);
    Ok(len)
}
