//! Connectivity lifecycle: boot auto-reconnect and status-service gating.
//!
//! Runs unconditionally on every tick, before input dispatch and render,
//! so the service state a render observes is never more than one tick
//! behind connectivity.

extern crate alloc;

use alloc::string::String;

use crate::credentials::CredentialsStore;
use crate::radio::{ConnectivityStatus, Radio};
use crate::service::StatusService;

/// Hard deadline for the boot-time reconnect. Once exceeded the attempt is
/// abandoned for the rest of the session; there is no automatic retry.
pub const RECONNECT_TIMEOUT_MS: u64 = 15_000;

/// A time-bounded association attempt from stored credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectAttempt {
    pub ssid: String,
    started_ms: u64,
}

/// Tracks radio status, drives the boot reconnect, and mirrors the status
/// service onto connectivity.
#[derive(Debug, Default)]
pub struct ConnectivityManager {
    reconnect: Option<ReconnectAttempt>,
    service_running: bool,
}

impl ConnectivityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconnect_active(&self) -> bool {
        self.reconnect.is_some()
    }

    /// Name shown on the reconnect screen, captured at attempt start.
    pub fn reconnect_attempt(&self) -> Option<&ReconnectAttempt> {
        self.reconnect.as_ref()
    }

    pub fn service_running(&self) -> bool {
        self.service_running
    }

    /// Boot step: if credentials are stored, begin associating and mark the
    /// attempt with the boot tick's timestamp.
    pub fn begin_boot_reconnect(
        &mut self,
        now_ms: u64,
        store: &mut dyn CredentialsStore,
        radio: &mut dyn Radio,
    ) {
        let Some(credentials) = store.load() else {
            return;
        };
        if credentials.ssid.is_empty() {
            return;
        }
        log::info!("[LIFE] reconnecting to stored network {:?}", credentials.ssid);
        radio.begin_association(&credentials.ssid, Some(&credentials.secret));
        self.reconnect = Some(ReconnectAttempt {
            ssid: credentials.ssid,
            started_ms: now_ms,
        });
    }

    /// Per-tick evaluation: resolve the reconnect attempt and keep the
    /// service mirroring connectivity.
    pub fn tick(&mut self, now_ms: u64, radio: &mut dyn Radio, service: &mut dyn StatusService) {
        if let Some(attempt) = self.reconnect.as_ref() {
            if radio.status() == ConnectivityStatus::Connected {
                self.reconnect = None;
            } else if now_ms.saturating_sub(attempt.started_ms) > RECONNECT_TIMEOUT_MS {
                log::warn!("[LIFE] reconnect timed out, abandoning attempt");
                self.reconnect = None;
                radio.disconnect();
            }
        }

        let connected = radio.status() == ConnectivityStatus::Connected;
        if connected && !self.service_running {
            log::info!("[LIFE] connectivity up, starting status service");
            service.start();
            self.service_running = true;
        } else if !connected && self.service_running {
            log::info!("[LIFE] connectivity lost, stopping status service");
            service.stop();
            self.service_running = false;
        }
    }

    /// Let the service process pending work while it is running.
    pub fn pump(&self, service: &mut dyn StatusService) {
        if self.service_running {
            service.pump();
        }
    }
}
