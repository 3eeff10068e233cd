//! Error types for bedlink
//!
//! Provides a unified error type for all operations.
//!
//! All parse failures are recoverable and returned as errors so the
//! dispatcher can drop the offending frame and wait for the next one.
//! Cursor/writer bounds violations are contract errors and assert instead:
//! they indicate a size-formula mismatch between the catalog and a codec,
//! never a malformed input.

use thiserror::Error;

use crate::protocol::FrameKind;

/// Result type alias using BedlinkError
pub type Result<T> = std::result::Result<T, BedlinkError>;

/// Unified error type for bedlink operations
#[derive(Debug, Error)]
pub enum BedlinkError {
    // -------------------------------------------------------------------------
    // Malformed Frames (recoverable parse failures)
    // -------------------------------------------------------------------------
    #[error("truncated frame: need {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("expected separator at frame position")]
    ExpectedSeparator,

    #[error("expected end-of-frame marker")]
    ExpectedTerminator,

    #[error("expected decimal digit, found byte 0x{0:02x}")]
    BadDigit(u8),

    // -------------------------------------------------------------------------
    // Out-of-range Field Values
    // -------------------------------------------------------------------------
    #[error("unknown mode value {0}")]
    InvalidMode(u8),

    #[error("unknown error code {0}")]
    InvalidErrorCode(u16),

    #[error("battery level {0} exceeds 100%")]
    BatteryOutOfRange(u16),

    #[error("sensor count {0} does not fit in two decimal digits")]
    SensorCountOutOfRange(u8),

    #[error("sensor count must be nonzero")]
    ZeroSensorCount,

    // -------------------------------------------------------------------------
    // Multi-sample Frame Bounds
    // -------------------------------------------------------------------------
    #[error("sample count {count} exceeds the frame maximum of {max}")]
    TooManySamples { count: usize, max: usize },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("frame kind {0:?} has no payload codec")]
    UnsupportedFrame(FrameKind),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
