//! Protocol Module
//!
//! The frame protocol engine: grammar, codecs and dispatch for the ASCII/
//! binary hybrid frames exchanged between the sensor node and the platform.
//!
//! ## Wire Format
//!
//! ```text
//! ┌─────┬─────────────┬──────────────────────┬──────┐
//! │ '$' │ tag (3 ch)  │ [',' <field>]*       │ '\n' │
//! └─────┴─────────────┴──────────────────────┴──────┘
//! ```
//!
//! Ask form (query, no payload): `'$' <tag> '?' '\n'`.
//!
//! ### Frame Kinds
//! - ACK: acknowledgement, body-less
//! - YOP: identification, FSR/FSC counts as 2-digit ASCII decimals
//! - SYN: clock sync, 32-bit timestamp
//! - ERR: 16-bit error code
//! - BAT: tag reserved; battery level travels inside STA
//! - MOD: 8-bit sampling mode
//! - STA: status report, time, battery (3 ASCII digits), sensor counts
//! - DR1 / DC1 / DA1: single sampling wave (FSR / FSC / both)
//! - DCN / DAN: multi-wave runs, streamable, capped below 1024 bytes
//!
//! Multi-byte integers are big-endian on the wire. Sensor readings are raw
//! 16-bit values, not ASCII; only battery and count fields are decimal text.

pub mod catalog;
pub mod cursor;
pub mod dispatcher;
pub mod endian;
pub mod frames;
pub mod registry;
pub mod writer;

pub use catalog::FrameKind;
pub use cursor::Cursor;
pub use dispatcher::Dispatcher;
pub use frames::Frame;
pub use registry::{AskCallback, CallbackRegistry, DataCallback};
pub use writer::FrameWriter;
