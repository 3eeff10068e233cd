//! DA1 frame codec
//!
//! `$DA1,<TIME>,<R0>...<R7>,<C0><C1>\n`: one timestamp, one FSR array and
//! one FSC array: a full sampling wave of everything the node measures.

use crate::error::Result;
use crate::protocol::catalog::{FrameKind, DA1_SIZE, FSC_COUNT, FSR_COUNT, HEADER_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded DA1 payload: a single combined sampling wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Da1Data {
    /// Milliseconds since node boot at acquisition
    pub time: u32,

    /// One reading per FSR channel
    pub fsr_values: [u16; FSR_COUNT],

    /// One reading per FSC channel
    pub fsc_values: [u16; FSC_COUNT],
}

/// Parse a DA1 body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<Da1Data> {
    cur.require(DA1_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();

    cur.expect_separator()?;
    let mut fsr_values = [0u16; FSR_COUNT];
    cur.read_readings(&mut fsr_values);

    cur.expect_separator()?;
    let mut fsc_values = [0u16; FSC_COUNT];
    cur.read_readings(&mut fsc_values);

    cur.expect_end()?;

    Ok(Da1Data {
        time,
        fsr_values,
        fsc_values,
    })
}

/// Serialize a DA1 frame, returning its length
pub fn create(data: &Da1Data, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Da1)?;
    w.put_sep()?;
    w.put_u32(data.time)?;
    w.put_sep()?;
    w.put_readings(&data.fsr_values)?;
    w.put_sep()?;
    w.put_readings(&data.fsc_values)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, DA1_SIZE);
    Ok(len)
}
