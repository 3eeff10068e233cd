//! MOD frame codec
//!
//! `$MOD,<MODE>\n`: one 8-bit sampling-mode value. Out-of-range modes are
//! unrepresentable in [`Mode`], so `create` cannot emit one; `parse` rejects
//! them.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{FrameKind, HEADER_SIZE, MOD_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::writer::FrameWriter;

/// Node sampling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Deep sleep between rare sampling waves
    Sleep = 0,

    /// Regular sampling cadence
    Normal = 1,

    /// High-rate sampling for calibration
    Accurate = 2,
}

impl TryFrom<u8> for Mode {
    type Error = BedlinkError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Mode::Sleep),
            1 => Ok(Mode::Normal),
            2 => Ok(Mode::Accurate),
            other => Err(BedlinkError::InvalidMode(other)),
        }
    }
}

/// Parse a MOD body (cursor positioned just past the tag)
pub fn parse(cur: &mut Cursor) -> Result<Mode> {
    cur.require(MOD_SIZE - HEADER_SIZE)?;

    cur.expect_separator()?;
    let mode = Mode::try_from(cur.read_u8())?;
    cur.expect_end()?;

    Ok(mode)
}

/// Serialize a MOD frame, returning its length
pub fn create(mode: Mode, out: &mut [u8]) -> Result<usize> {
    let mut w = FrameWriter::new(out);
    w.put_head(FrameKind::Mod)?;
    w.put_sep()?;
    w.put_u8(mode as u8)?;
    w.put_end()?;

    let len = w.finish();
    debug_assert_eq!(len, MOD_SIZE);
    Ok(len)
}
