//! ACK frame codec
//!
//! `$ACK\n`: body-less acknowledgement.

use crate::error::Result;
use crate::protocol::catalog::{FrameKind, ACK_SIZE, HEADER_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Parse an ACK body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<()> {
    cur.require(ACK_SIZE - HEADER_SIZE)?;
    cur.expect_end()
}

/// Serialize an ACK frame, returning its length
pub fn create(out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Ack)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, ACK_SIZE);
    Ok(len)
}
