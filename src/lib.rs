//! # bedlink
//!
//! Frame protocol engine for a battery-powered bed-sensor node:
//! - Fixed-grammar ASCII/binary hybrid wire frames (`$TAG,field,...\n`)
//! - Bounds-checked byte cursor parsing and buffer-direct serialization
//! - Streaming construction for multi-sample frames (DCN/DAN)
//! - Callback-based dispatch of received frame clusters
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Radio Transport                          │
//! │               (XBee framing, serial I/O)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ byte clusters / byte sink
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Link                                  │
//! │          (outbox, MTU chunking, cluster feed)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Dispatcher  │          │Frame Codecs │
//!   │ (+registry) │          │ (per kind)  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Callbacks  │          │Cursor/Writer│
//!   │ (app layer) │          │  + Endian   │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! The radio itself (XBee API state machine, serial port, sleep management)
//! is an external collaborator behind the [`transport::Transport`] trait.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod link;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BedlinkError, Result};
pub use config::LinkConfig;
pub use link::Link;
pub use protocol::{CallbackRegistry, Dispatcher, Frame, FrameKind};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bedlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
