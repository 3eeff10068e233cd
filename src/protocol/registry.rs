//! Callback Registry
//!
//! Per-frame-kind handler slots: at most one data callback and one ask
//! callback per kind. The owning application layer populates the registry
//! once during node initialization, before any frame traffic is processed;
//! an empty slot means "ignore frames of this kind". There is no
//! multi-subscriber fan-out and no concurrent mutation in this
//! single-threaded design.

use crate::protocol::catalog::{FrameKind, KIND_COUNT};
use crate::protocol::frames::Frame;

/// Handler invoked with the decoded payload of a data frame
pub type DataCallback = Box<dyn FnMut(&Frame) + Send>;

/// Handler invoked when an ask frame (`$XXX?\n`) is received
pub type AskCallback = Box<dyn FnMut() + Send>;

/// One data slot and one ask slot per frame kind
pub struct CallbackRegistry {
    data: [Option<DataCallback>; KIND_COUNT],
    ask: [Option<AskCallback>; KIND_COUNT],
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CallbackRegistry {
    /// Create a registry with every slot empty
    pub fn new() -> Self {
        Self {
            data: std::array::from_fn(|_| None),
            ask: std::array::from_fn(|_| None),
        }
    }

    /// Register the data callback for `kind`, overwriting any previous one
    ///
    /// # Panics
    /// Panics for [`FrameKind::Unknown`].
    pub fn set_callback<F>(&mut self, kind: FrameKind, callback: F)
    where
        F: FnMut(&Frame) + Send + 'static,
    {
        self.data[kind.slot()] = Some(Box::new(callback));
    }

    /// Remove the data callback for `kind`; its frames are dropped from now on
    pub fn clear_callback(&mut self, kind: FrameKind) {
        self.data[kind.slot()] = None;
    }

    /// Register the ask callback for `kind`, overwriting any previous one
    ///
    /// Meaningful for the query-able kinds (STA, DR1, DC1 and friends); other
    /// kinds simply never see ask traffic.
    pub fn set_ask_callback<F>(&mut self, kind: FrameKind, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.ask[kind.slot()] = Some(Box::new(callback));
    }

    /// Remove the ask callback for `kind`
    pub fn clear_ask_callback(&mut self, kind: FrameKind) {
        self.ask[kind.slot()] = None;
    }

    /// Invoke the data callback for the frame's kind, if one is registered
    ///
    /// Returns whether a handler ran.
    pub(crate) fn deliver(&mut self, frame: &Frame) -> bool {
        match &mut self.data[frame.kind().slot()] {
            Some(callback) => {
                callback(frame);
                true
            }
            None => false,
        }
    }

    /// Invoke the ask callback for `kind`, if one is registered
    ///
    /// Returns whether a handler ran.
    pub(crate) fn deliver_ask(&mut self, kind: FrameKind) -> bool {
        match &mut self.ask[kind.slot()] {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field(
                "data_callbacks",
                &self.data.iter().filter(|slot| slot.is_some()).count(),
            )
            .field(
                "ask_callbacks",
                &self.ask.iter().filter(|slot| slot.is_some()).count(),
            )
            .finish()
    }
}
