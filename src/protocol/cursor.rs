//! Byte Cursor
//!
//! A bounds-checked read window over an externally owned byte buffer. The
//! cursor never owns memory; it carries the remaining-length invariant and
//! asserts it on every read or advance.
//!
//! Reading past the remaining length is a programming error, not a parse
//! failure: codecs verify a minimum-size precondition with [`Cursor::require`]
//! before touching multi-byte fields, so an assert firing means the catalog's
//! size formula and a codec disagree.

use crate::error::{BedlinkError, Result};
use crate::protocol::catalog::{ASK, END, SEP, START};
use crate::protocol::endian;

/// Read cursor over a borrowed byte buffer
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
}

impl<'a> Cursor<'a> {
    /// Wrap a buffer; the cursor starts at its first byte
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// The byte at the cursor, without consuming it
    ///
    /// # Panics
    /// Panics if the cursor is exhausted.
    pub fn peek(&self) -> u8 {
        assert!(!self.data.is_empty(), "peek past end of cursor");
        self.data[0]
    }

    /// Move the cursor `n` bytes forward
    ///
    /// # Panics
    /// Panics if fewer than `n` bytes remain.
    pub fn advance(&mut self, n: usize) {
        assert!(n <= self.data.len(), "advance past end of cursor");
        self.data = &self.data[n..];
    }

    /// True if the byte at the cursor equals `delim` (false when exhausted)
    pub fn at(&self, delim: u8) -> bool {
        !self.data.is_empty() && self.data[0] == delim
    }

    /// True if the cursor sits on a start-of-frame marker
    pub fn at_start(&self) -> bool {
        self.at(START)
    }

    /// True if the cursor sits on an end-of-frame marker
    pub fn at_end(&self) -> bool {
        self.at(END)
    }

    /// True if the cursor sits on a field separator
    pub fn at_separator(&self) -> bool {
        self.at(SEP)
    }

    /// True if the cursor sits on an ask marker
    pub fn at_ask(&self) -> bool {
        self.at(ASK)
    }

    // =========================================================================
    // Parse-level Preconditions
    // =========================================================================

    /// Fail with [`BedlinkError::Truncated`] unless `n` bytes remain
    pub fn require(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(BedlinkError::Truncated {
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Consume one separator or fail
    pub fn expect_separator(&mut self) -> Result<()> {
        if !self.at_separator() {
            return Err(BedlinkError::ExpectedSeparator);
        }
        self.advance(1);
        Ok(())
    }

    /// Consume one end-of-frame marker or fail
    pub fn expect_end(&mut self) -> Result<()> {
        if !self.at_end() {
            return Err(BedlinkError::ExpectedTerminator);
        }
        self.advance(1);
        Ok(())
    }

    // =========================================================================
    // Integer Reads (big-endian on the wire)
    // =========================================================================

    /// Read one byte
    pub fn read_u8(&mut self) -> u8 {
        let value = self.peek();
        self.advance(1);
        value
    }

    /// Read a 16-bit big-endian integer
    pub fn read_u16(&mut self) -> u16 {
        let value = endian::get_u16(self.data);
        self.advance(2);
        value
    }

    /// Read a 32-bit big-endian integer
    pub fn read_u32(&mut self) -> u32 {
        let value = endian::get_u32(self.data);
        self.advance(4);
        value
    }

    /// Read a fixed-count array of 16-bit big-endian sensor readings
    pub fn read_readings(&mut self, values: &mut [u16]) {
        endian::get_u16_slice(self.data, values);
        self.advance(2 * values.len());
    }

    // =========================================================================
    // ASCII Decimal Reads (YOP and STA fields)
    // =========================================================================

    /// Read a two-digit ASCII decimal, 00..=99
    pub fn read_digits2(&mut self) -> Result<u8> {
        let tens = self.read_digit()?;
        let units = self.read_digit()?;
        Ok(tens * 10 + units)
    }

    /// Read a three-digit ASCII decimal, 000..=999
    pub fn read_digits3(&mut self) -> Result<u16> {
        let hundreds = self.read_digit()? as u16;
        let tens = self.read_digit()? as u16;
        let units = self.read_digit()? as u16;
        Ok(hundreds * 100 + tens * 10 + units)
    }

    fn read_digit(&mut self) -> Result<u8> {
        let byte = self.peek();
        if !byte.is_ascii_digit() {
            return Err(BedlinkError::BadDigit(byte));
        }
        self.advance(1);
        Ok(byte - b'0')
    }
}
