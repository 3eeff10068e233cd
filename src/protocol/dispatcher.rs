//! Frame Dispatcher
//!
//! Recognizes one frame inside a received byte cluster and routes its decoded
//! payload to the registered callback. The firmware delivers one complete
//! frame per radio payload, so exactly one frame is processed per call;
//! multiple frames in one buffer are not split; callers feed one cluster at
//! a time.
//!
//! Drop policy: anything unrecognizable (garbage before the start marker, an
//! unknown tag, a truncated or malformed body) is discarded silently. On a
//! lossy radio link resending is cheaper than diagnosing, so no error frame is
//! generated here; that is an application-level decision. Drops are only
//! visible as debug-level trace events.

use tracing::{debug, trace};

use crate::protocol::catalog::{FrameKind, TAG_SIZE};
use crate::protocol::cursor::Cursor;
use crate::protocol::frames;
use crate::protocol::registry::CallbackRegistry;

/// Single-cluster frame dispatcher
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: CallbackRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with an empty callback registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the callback registry for registration
    pub fn registry_mut(&mut self) -> &mut CallbackRegistry {
        &mut self.registry
    }

    /// Process one received byte cluster
    ///
    /// Scans to the first start marker (discarding whatever precedes it,
    /// including any garbled partial frame), identifies the tag, and either
    /// invokes the kind's ask callback (for `$XXX?\n`) or parses the body and
    /// invokes the data callback. Never panics on hostile input.
    pub fn dispatch(&mut self, cluster: &[u8]) {
        let mut cur = Cursor::new(cluster);

        while cur.remaining() > 0 && !cur.at_start() {
            cur.advance(1);
        }
        if cur.remaining() == 0 {
            trace!(len = cluster.len(), "no start marker in cluster");
            return;
        }
        cur.advance(1);

        // Tag plus at least the end marker must follow the start marker.
        if cur.remaining() < TAG_SIZE + 1 {
            debug!(remaining = cur.remaining(), "cluster truncated inside tag");
            return;
        }
        let tag = [cur.read_u8(), cur.read_u8(), cur.read_u8()];
        let kind = FrameKind::identify(&tag);
        if kind == FrameKind::Unknown {
            debug!(tag = %String::from_utf8_lossy(&tag), "unknown frame tag");
            return;
        }

        // Ask form: a lone '?' directly before the end marker.
        if cur.at_ask() {
            cur.advance(1);
            if cur.at_end() {
                trace!(?kind, "ask frame");
                self.registry.deliver_ask(kind);
            } else {
                debug!(?kind, "ask marker not followed by end marker");
            }
            return;
        }

        match frames::parse_body(kind, &mut cur) {
            Ok(frame) => {
                trace!(?kind, "frame parsed");
                self.registry.deliver(&frame);
            }
            Err(error) => {
                debug!(?kind, %error, "dropping malformed frame");
            }
        }
    }
}
