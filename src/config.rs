//! Configuration for the link layer
//!
//! Centralized configuration with sensible defaults for the radio the node
//! ships with.

/// Link-layer configuration
#[derive(Debug, Clone)]
pub struct LinkConfig {
    // -------------------------------------------------------------------------
    // Radio Configuration
    // -------------------------------------------------------------------------
    /// Largest payload the radio accepts per packet (bytes); frames longer
    /// than this are transmitted in chunks
    pub mtu: usize,

    // -------------------------------------------------------------------------
    // Timing Configuration
    // -------------------------------------------------------------------------
    /// How long the node waits for a reply after transmitting (milliseconds)
    pub response_timeout_ms: u64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            mtu: 100, // XBee RF payload limit
            response_timeout_ms: 1000,
        }
    }
}

impl LinkConfig {
    /// Create a new config builder
    pub fn builder() -> LinkConfigBuilder {
        LinkConfigBuilder::default()
    }
}

/// Builder for LinkConfig
#[derive(Default)]
pub struct LinkConfigBuilder {
    config: LinkConfig,
}

impl LinkConfigBuilder {
    /// Set the per-packet payload limit (in bytes)
    pub fn mtu(mut self, mtu: usize) -> Self {
        self.config.mtu = mtu;
        self
    }

    /// Set the reply timeout (in milliseconds)
    pub fn response_timeout_ms(mut self, ms: u64) -> Self {
        self.config.response_timeout_ms = ms;
        self
    }

    pub fn build(self) -> LinkConfig {
        self.config
    }
}
