//! Persisted network credentials collaborator boundary.

extern crate alloc;

use alloc::string::String;

/// A single persisted network profile. Written only after a successful
/// connection from the setup workflow; read once at boot for auto-reconnect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub ssid: String,
    pub secret: String,
}

/// Embedded key-value store seam. Survives power cycles.
pub trait CredentialsStore {
    fn load(&mut self) -> Option<StoredCredentials>;
    fn save(&mut self, credentials: &StoredCredentials);
}
