//! Wireless radio collaborator boundary.
//!
//! The core never blocks on the radio: `begin_association` returns
//! immediately and the outcome is observed through `status()` on later
//! ticks. `scan()` is the one synchronous call; its results are presented
//! within the same input dispatch that requested them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Externally observed association state, polled every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Disconnected,
    Connecting,
    Connected,
    ConnectFailed,
}

/// One discovered network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub ssid: String,
    /// True when the network requires no secret.
    pub open: bool,
}

impl NetworkInfo {
    pub fn open(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            open: true,
        }
    }

    pub fn secured(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            open: false,
        }
    }
}

/// Low-level wireless radio driver seam.
pub trait Radio {
    /// Blocking scan for nearby networks. An empty list is a valid result.
    fn scan(&mut self) -> Vec<NetworkInfo>;

    /// Start associating with a network. Must not block; progress is
    /// reported through `status()`.
    fn begin_association(&mut self, ssid: &str, secret: Option<&str>);

    fn status(&self) -> ConnectivityStatus;

    /// Abandon any in-flight or established association.
    fn disconnect(&mut self);

    /// Local IP address once connected.
    fn local_address(&self) -> Option<String>;

    /// Name of the currently associated network, if any.
    fn connected_ssid(&self) -> Option<String>;
}
