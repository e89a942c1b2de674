//! Mock collaborators for host-side tests.
//!
//! `MockRadio` plays back scripted connectivity and canned scan lists while
//! recording every association request, so tests can assert on exactly what
//! the state machines asked the radio to do.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::credentials::{CredentialsStore, StoredCredentials};
use crate::radio::{ConnectivityStatus, NetworkInfo, Radio};
use crate::service::StatusService;

/// Scripted radio. `begin_association` moves it to `Connecting`; tests then
/// drive the outcome with `set_status`.
#[derive(Debug)]
pub struct MockRadio {
    status: ConnectivityStatus,
    scan_results: Vec<NetworkInfo>,
    associations: Vec<(String, Option<String>)>,
    last_ssid: Option<String>,
    address: String,
    disconnect_called: bool,
    scan_count: usize,
}

impl MockRadio {
    pub fn new() -> Self {
        Self {
            status: ConnectivityStatus::Disconnected,
            scan_results: Vec::new(),
            associations: Vec::new(),
            last_ssid: None,
            address: String::from("192.168.1.57"),
            disconnect_called: false,
            scan_count: 0,
        }
    }

    pub fn set_status(&mut self, status: ConnectivityStatus) {
        self.status = status;
    }

    pub fn set_scan_results(&mut self, results: Vec<NetworkInfo>) {
        self.scan_results = results;
    }

    /// Every `begin_association` call, in order: (ssid, secret).
    pub fn associations(&self) -> &[(String, Option<String>)] {
        &self.associations
    }

    pub fn disconnect_called(&self) -> bool {
        self.disconnect_called
    }

    pub fn scan_count(&self) -> usize {
        self.scan_count
    }
}

impl Default for MockRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl Radio for MockRadio {
    fn scan(&mut self) -> Vec<NetworkInfo> {
        self.scan_count += 1;
        self.scan_results.clone()
    }

    fn begin_association(&mut self, ssid: &str, secret: Option<&str>) {
        self.associations
            .push((String::from(ssid), secret.map(String::from)));
        self.last_ssid = Some(String::from(ssid));
        self.status = ConnectivityStatus::Connecting;
    }

    fn status(&self) -> ConnectivityStatus {
        self.status
    }

    fn disconnect(&mut self) {
        self.disconnect_called = true;
        self.status = ConnectivityStatus::Disconnected;
    }

    fn local_address(&self) -> Option<String> {
        if self.status == ConnectivityStatus::Connected {
            Some(self.address.clone())
        } else {
            None
        }
    }

    fn connected_ssid(&self) -> Option<String> {
        if self.status == ConnectivityStatus::Connected {
            self.last_ssid.clone()
        } else {
            None
        }
    }
}

/// In-memory credentials store.
#[derive(Debug, Default)]
pub struct MockCredentialsStore {
    stored: Option<StoredCredentials>,
    save_count: usize,
}

impl MockCredentialsStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: StoredCredentials) -> Self {
        Self {
            stored: Some(credentials),
            save_count: 0,
        }
    }

    pub fn saved(&self) -> Option<&StoredCredentials> {
        if self.save_count == 0 {
            None
        } else {
            self.stored.as_ref()
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl CredentialsStore for MockCredentialsStore {
    fn load(&mut self) -> Option<StoredCredentials> {
        self.stored.clone()
    }

    fn save(&mut self, credentials: &StoredCredentials) {
        self.stored = Some(credentials.clone());
        self.save_count += 1;
    }
}

/// Counting status service.
#[derive(Debug, Default)]
pub struct MockStatusService {
    starts: usize,
    stops: usize,
    pumps: usize,
}

impl MockStatusService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starts(&self) -> usize {
        self.starts
    }

    pub fn stops(&self) -> usize {
        self.stops
    }

    pub fn pumps(&self) -> usize {
        self.pumps
    }
}

impl StatusService for MockStatusService {
    fn start(&mut self) {
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }

    fn pump(&mut self) {
        self.pumps += 1;
    }
}
