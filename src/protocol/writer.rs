//! Frame Writer
//!
//! Write counterpart of the byte cursor: serializes frame pieces into a
//! caller-supplied buffer while tracking the write position. Running out of
//! space is a returned error so `create` never writes past the caller's
//! buffer, whatever size it handed in.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{FrameKind, END, SEP, START, TAG_SIZE};
use crate::protocol::endian;

/// Positioned writer over a borrowed output buffer
#[derive(Debug)]
pub struct FrameWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FrameWriter<'a> {
    /// Wrap an output buffer; writing starts at its first byte
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Consume the writer, yielding the total frame length
    pub fn finish(self) -> usize {
        self.pos
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if self.buf.len() - self.pos < n {
            return Err(BedlinkError::BufferTooSmall {
                needed: self.pos + n,
                available: self.buf.len(),
            });
        }
        Ok(())
    }

    fn put_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure(1)?;
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    // =========================================================================
    // Frame Structure
    // =========================================================================

    /// Write the frame head: start marker followed by the kind's tag
    pub fn put_head(&mut self, kind: FrameKind) -> Result<()> {
        self.ensure(1 + TAG_SIZE)?;
        self.buf[self.pos] = START;
        self.buf[self.pos + 1..self.pos + 1 + TAG_SIZE].copy_from_slice(kind.tag());
        self.pos += 1 + TAG_SIZE;
        Ok(())
    }

    /// Write a field separator
    pub fn put_sep(&mut self) -> Result<()> {
        self.put_byte(SEP)
    }

    /// Write the end-of-frame marker
    pub fn put_end(&mut self) -> Result<()> {
        self.put_byte(END)
    }

    // =========================================================================
    // Integer Fields (big-endian on the wire)
    // =========================================================================

    /// Write one byte
    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.put_byte(value)
    }

    /// Write a 16-bit integer in network byte order
    pub fn put_u16(&mut self, value: u16) -> Result<()> {
        self.ensure(2)?;
        endian::put_u16(&mut self.buf[self.pos..], value);
        self.pos += 2;
        Ok(())
    }

    /// Write a 32-bit integer in network byte order
    pub fn put_u32(&mut self, value: u32) -> Result<()> {
        self.ensure(4)?;
        endian::put_u32(&mut self.buf[self.pos..], value);
        self.pos += 4;
        Ok(())
    }

    /// Write an array of 16-bit sensor readings in network byte order
    pub fn put_readings(&mut self, values: &[u16]) -> Result<()> {
        self.ensure(2 * values.len())?;
        endian::put_u16_slice(&mut self.buf[self.pos..], values);
        self.pos += 2 * values.len();
        Ok(())
    }

    // =========================================================================
    // ASCII Decimal Fields (YOP and STA)
    // =========================================================================

    /// Write a value 0..=99 as two ASCII digits
    pub fn put_digits2(&mut self, value: u8) -> Result<()> {
        debug_assert!(value <= 99, "two-digit field out of range");
        self.ensure(2)?;
        self.buf[self.pos] = value / 10 + b'0';
        self.buf[self.pos + 1] = value % 10 + b'0';
        self.pos += 2;
        Ok(())
    }

    /// Write a value 0..=100 as three ASCII digits
    pub fn put_digits3(&mut self, value: u8) -> Result<()> {
        self.ensure(3)?;
        self.buf[self.pos] = value / 100 + b'0';
        self.buf[self.pos + 1] = (value / 10) % 10 + b'0';
        self.buf[self.pos + 2] = value % 10 + b'0';
        self.pos += 3;
        Ok(())
    }
}
