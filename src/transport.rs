//! Transport abstraction
//!
//! The protocol core never talks to the radio directly: it hands outgoing
//! bytes to a [`Transport`] and receives incoming payloads through
//! [`Link::receive`](crate::link::Link::receive). The XBee API framing, the
//! serial port and the sleep pin all live behind this seam.

use crate::error::Result;

/// Byte sink toward the radio
pub trait Transport {
    /// Queue bytes for transmission
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Push any buffered bytes out to the radio
    fn flush(&mut self) -> Result<()>;
}

/// In-memory transport capturing everything sent; for tests and diagnostics
#[derive(Debug, Default)]
pub struct LoopbackTransport {
    /// Payload of each `send` call, in order
    pub packets: Vec<Vec<u8>>,

    /// Number of `flush` calls observed
    pub flushes: usize,
}

impl LoopbackTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All sent bytes, concatenated across packets
    pub fn bytes(&self) -> Vec<u8> {
        self.packets.concat()
    }
}

impl Transport for LoopbackTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.packets.push(bytes.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
