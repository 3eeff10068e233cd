//! Link layer
//!
//! Glue between the protocol engine and the radio transport: outgoing frames
//! are built straight into a shared outbox and drained in MTU-sized chunks;
//! incoming radio payloads are fed, one cluster at a time, to the frame
//! dispatcher. Single-threaded and synchronous; the caller drives both
//! directions.

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::config::LinkConfig;
use crate::error::Result;
use crate::protocol::catalog::MAX_FRAME_SIZE;
use crate::protocol::{CallbackRegistry, Dispatcher};
use crate::transport::Transport;

/// Frame-level endpoint over an abstract radio transport
pub struct Link<T: Transport> {
    transport: T,
    config: LinkConfig,
    dispatcher: Dispatcher,
    outbox: BytesMut,
}

impl<T: Transport> Link<T> {
    /// Create a link over `transport` with the given configuration
    pub fn new(transport: T, config: LinkConfig) -> Self {
        Self {
            transport,
            config,
            dispatcher: Dispatcher::new(),
            outbox: BytesMut::new(),
        }
    }

    /// The callback registry; populate it once during node initialization
    pub fn registry_mut(&mut self) -> &mut CallbackRegistry {
        self.dispatcher.registry_mut()
    }

    /// The link configuration
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // Outgoing
    // =========================================================================

    /// Build a frame directly into the outbox
    ///
    /// `build` receives a scratch region of the maximum frame size and
    /// returns the number of bytes it wrote, the signature every codec
    /// `create` and stream step has. On error nothing is queued.
    pub fn queue_frame<F>(&mut self, build: F) -> Result<usize>
    where
        F: FnOnce(&mut [u8]) -> Result<usize>,
    {
        let start = self.outbox.len();
        self.outbox.resize(start + MAX_FRAME_SIZE, 0);

        match build(&mut self.outbox[start..]) {
            Ok(len) => {
                self.outbox.truncate(start + len);
                trace!(len, queued = self.outbox.len(), "frame queued");
                Ok(len)
            }
            Err(error) => {
                self.outbox.truncate(start);
                Err(error)
            }
        }
    }

    /// Bytes currently queued for transmission
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }

    /// Drain the outbox through the transport in MTU-sized chunks, then flush
    pub fn transmit(&mut self) -> Result<()> {
        let payload = self.outbox.split();
        for chunk in payload.chunks(self.config.mtu) {
            self.transport.send(chunk)?;
        }
        self.transport.flush()?;
        debug!(len = payload.len(), mtu = self.config.mtu, "transmitted");
        Ok(())
    }

    // =========================================================================
    // Incoming
    // =========================================================================

    /// Feed one received radio payload to the dispatcher
    ///
    /// One complete frame per payload; callbacks registered through
    /// [`Link::registry_mut`] fire synchronously before this returns.
    pub fn receive(&mut self, cluster: &[u8]) {
        self.dispatcher.dispatch(cluster);
    }
}
