//! DR1 frame codec
//!
//! `$DR1,<TIME>,<R0><R1>...<R7>\n`: one timestamp and one full FSR array.

use crate::error::Result;
use crate::protocol::catalog::{FrameKind, DR1_SIZE, FSR_COUNT, HEADER_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded DR1 payload: a single FSR sampling wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dr1Data {
    /// Milliseconds since node boot at acquisition
    pub time: u32,

    /// One reading per FSR channel
    pub fsr_values: [u16; FSR_COUNT],
}

/// Parse a DR1 body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<Dr1Data> {
    cur.require(DR1_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();

    cur.expect_separator()?;
    let mut fsr_values = [0u16; FSR_COUNT];
    cur.read_readings(&mut fsr_values);

    cur.expect_end()?;

    Ok(Dr1Data { time, fsr_values })
}

/// Serialize a DR1 frame, returning its length
pub fn create(data: &Dr1Data, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Dr1)?;
    w.put_sep()?;
    w.put_u32(data.time)?;
    w.put_sep()?;
    w.put_readings(&data.fsr_values)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, DR1_SIZE);
    Ok(len)
}
