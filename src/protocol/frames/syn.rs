//! SYN frame codec
//!
//! `$SYN,<TIME>\n`: clock synchronization carrying one 32-bit millisecond
//! timestamp, big-endian like every other time field. (The original firmware
//! serialized this one field in host byte order; that was a bug, not a format.)

use crate::error::Result;
use crate::protocol::catalog::{FrameKind, HEADER_SIZE, SYN_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Parse a SYN body, yielding the timestamp
pub fn parse(cur: &mut Cursor) -> Result<u32> {
    cur.require(SYN_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let time = cur.read_u32();
    cur.expect_end()?;

    Ok(time)
}

/// Serialize a SYN frame, returning its length
pub fn create(time: u32, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Syn)?;
    w.put_sep()?;
    w.put_u32(time)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, SYN_SIZE);
    Ok(len)
}
