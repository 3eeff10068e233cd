//! DC1 frame codec
//!
//! `$DC1,<TIME>,<C0><C1>\n`: one timestamp and one full FSC array.

use crate::error::Result;
use crate::protocol::catalog::{FrameKind, DC1_SIZE, FSC_COUNT, HEADER_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Decoded DC1 payload: a single FSC sampling wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dc1Data {
    /// Milliseconds since node boot at acquisition
    pub time: u32,

    /// One reading per FSC channel
    pub fsc_values: [u16; FSC_COUNT],
}

/// Parse a DC1 body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<Dc1Data> {
    cur.require(DC1_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();

    cur.expect_separator()?;
    let mut fsc_values = [0u16; FSC_COUNT];
    cur.read_readings(&mut fsc_values);

    cur.expect_end()?;

    Ok(Dc1Data { time, fsc_values })
}

/// Serialize a DC1 frame, returning its length
pub fn create(data: &Dc1Data, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Dc1)?;
    w.put_sep()?;
    w.put_u32(data.time)?;
    w.put_sep()?;
    w.put_readings(&data.fsc_values)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, DC1_SIZE);
    Ok(len)
}
