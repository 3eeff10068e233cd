//! ERR frame codec
//!
//! `$ERR,<CODE>\n`: one 16-bit error code, validated against the known
//! [`ErrorCode`] range on both parse and create.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{FrameKind, ERR_SIZE, HEADER_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Error conditions a node can report to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    /// A received frame could not be honored
    BadFrame = 0,

    /// A mode change request named an unsupported mode
    BadMode = 1,

    /// Battery level too low to honor the request
    LowBattery = 2,
}

impl TryFrom<u16> for ErrorCode {
    type Error = BedlinkError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(ErrorCode::BadFrame),
            1 => Ok(ErrorCode::BadMode),
            2 => Ok(ErrorCode::LowBattery),
            other => Err(BedlinkError::InvalidErrorCode(other)),
        }
    }
}

/// Parse an ERR body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<ErrorCode> {
    cur.require(ERR_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let code = ErrorCode::try_from(cur.read_u16())?;
    cur.expect_end()?;

    Ok(code)
}

/// Serialize an ERR frame, returning its length
pub fn create(code: ErrorCode, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Err)?;
    w.put_sep()?;
    w.put_u16(code as u16)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, ERR_SIZE);
    Ok(len)
}
