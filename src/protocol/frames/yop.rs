//! YOP frame codec
//!
//! `$YOP,RR,CC\n`: node identification, the FSR and FSC channel counts as
//! two-digit ASCII decimals, both nonzero. The ask form `$YOP?\n` is handled
//! by the dispatcher and carries no body.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{FrameKind, HEADER_SIZE, YOP_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded YOP payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YopData {
    /// Number of FSR channels, 1..=99
    pub fsr_count: u8,

    /// Number of FSC channels, 1..=99
    pub fsc_count: u8,
}

/// Parse a YOP body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<YopData> {
    cur.require(YOP_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let fsr_count = cur.read_digits2()?;

    cur.expect_separator()?;
    let fsc_count = cur.read_digits2()?;

    cur.expect_end()?;

    if fsr_count == 0 || fsc_count == 0 {
        return Err(BedlinkError::ZeroSensorCount);
    }

    Ok(YopData {
        fsr_count,
        fsc_count,
    })
}

/// Serialize a YOP frame, returning its length
pub fn create(data: &YopData, out: &mut [u8]) -> Result<usize> {
    if data.fsr_count == 0 || data.fsc_count == 0 {
        return Err(BedlinkError::ZeroSensorCount);
    }
    if data.fsr_count > 99 {
        return Err(BedlinkError::SensorCountOutOfRange(data.fsr_count));
    }
    if data.fsc_count > 99 {
        return Err(BedlinkError::SensorCountOutOfRange(data.fsc_count));
    }

    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Yop)?;
    w.put_sep()?;
    w.put_digits2(data.fsr_count)?;
    w.put_sep()?;
    w.put_digits2(data.fsc_count)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, YOP_SIZE);
    Ok(len)
}
