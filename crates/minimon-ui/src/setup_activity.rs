//! Network setup workflow: scan, pick, enter password, connect.
//!
//! A nested state machine active while the NetworkSetup screen is shown.
//! Input drives the forward transitions; the `Connecting` state is left
//! only by observing the radio's polled status during the lifecycle phase
//! of a tick, never during render.
//!
//! `Connecting` carries no timeout of its own. That is a deliberate policy:
//! the workflow trusts the radio layer to report `ConnectFailed`, and the
//! user can always wait it out. Only the boot reconnect is time-bounded.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::credentials::{CredentialsStore, StoredCredentials};
use crate::input::Button;
use crate::password::{CursorKey, PasswordAction, PasswordEntry};
use crate::radio::{ConnectivityStatus, NetworkInfo, Radio};
use crate::render::{body, title, BODY_Y, FOOTER_Y};

/// Workflow states, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    Idle,
    Scanning,
    ScanResults,
    EnteringPassword,
    Connecting,
    ConnectFailed,
}

/// How an input event left the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFlow {
    /// Stay on the NetworkSetup screen.
    Stay,
    /// Leave the workflow; the navigator should return to the menu.
    ExitWorkflow,
}

/// The network setup activity and all state it owns.
#[derive(Debug)]
pub struct SetupActivity {
    state: SetupState,
    networks: Vec<NetworkInfo>,
    selected: usize,
    password: PasswordEntry,
}

impl SetupActivity {
    /// Scan result rows visible at once on the 32-pixel panel.
    const VISIBLE_ROWS: usize = 3;

    pub fn new() -> Self {
        Self {
            state: SetupState::Idle,
            networks: Vec::new(),
            selected: 0,
            password: PasswordEntry::new(),
        }
    }

    pub fn state(&self) -> SetupState {
        self.state
    }

    pub fn networks(&self) -> &[NetworkInfo] {
        &self.networks
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn password(&self) -> &PasswordEntry {
        &self.password
    }

    fn selected_ssid(&self) -> Option<&str> {
        self.networks.get(self.selected).map(|n| n.ssid.as_str())
    }

    /// Discard any previous result list, run a scan, and present the new
    /// list. The old entries are gone before the scan starts so a render
    /// can never observe a mix of old and new.
    fn start_scan(&mut self, radio: &mut dyn Radio) {
        self.networks.clear();
        self.selected = 0;
        self.password.reset();
        self.state = SetupState::Scanning;
        let found = radio.scan();
        log::info!("[SETUP] scan finished, {} network(s)", found.len());
        self.networks = found;
        self.state = SetupState::ScanResults;
    }

    fn begin_association(&mut self, radio: &mut dyn Radio, secret: Option<&str>) {
        if let Some(ssid) = self.selected_ssid() {
            log::info!("[SETUP] associating with {:?}", ssid);
            radio.begin_association(ssid, secret);
            self.state = SetupState::Connecting;
        }
    }

    pub fn handle_button(&mut self, button: Button, radio: &mut dyn Radio) -> SetupFlow {
        match button {
            Button::Up => {
                match self.state {
                    SetupState::ScanResults if !self.networks.is_empty() => {
                        self.selected =
                            (self.selected + self.networks.len() - 1) % self.networks.len();
                    }
                    SetupState::EnteringPassword => self.password.cursor_prev(),
                    _ => {}
                }
                SetupFlow::Stay
            }
            Button::Down => {
                match self.state {
                    SetupState::ScanResults if !self.networks.is_empty() => {
                        self.selected = (self.selected + 1) % self.networks.len();
                    }
                    SetupState::EnteringPassword => self.password.cursor_next(),
                    _ => {}
                }
                SetupFlow::Stay
            }
            Button::Select => self.handle_select(radio),
        }
    }

    fn handle_select(&mut self, radio: &mut dyn Radio) -> SetupFlow {
        match self.state {
            SetupState::Idle => {
                if radio.status() != ConnectivityStatus::Connected {
                    self.start_scan(radio);
                    SetupFlow::Stay
                } else {
                    SetupFlow::ExitWorkflow
                }
            }
            SetupState::Scanning => SetupFlow::Stay,
            SetupState::ScanResults => {
                if let Some(network) = self.networks.get(self.selected) {
                    if network.open {
                        // Open network: no secret. Clear the buffer so a
                        // later save does not persist a stale password.
                        self.password.reset();
                        self.begin_association(radio, None);
                    } else {
                        self.password.reset();
                        self.state = SetupState::EnteringPassword;
                    }
                }
                SetupFlow::Stay
            }
            SetupState::EnteringPassword => {
                if self.password.select() == PasswordAction::Confirmed {
                    let secret = String::from(self.password.text());
                    self.begin_association(radio, Some(&secret));
                }
                SetupFlow::Stay
            }
            // Leaves only through observe_status.
            SetupState::Connecting => SetupFlow::Stay,
            SetupState::ConnectFailed => {
                self.state = SetupState::Idle;
                SetupFlow::Stay
            }
        }
    }

    /// Per-tick status observation while `Connecting`. On success the used
    /// credentials are persisted and the workflow returns to `Idle`.
    pub fn observe_status(&mut self, radio: &dyn Radio, store: &mut dyn CredentialsStore) {
        if self.state != SetupState::Connecting {
            return;
        }
        match radio.status() {
            ConnectivityStatus::Connected => {
                if let Some(ssid) = self.selected_ssid() {
                    store.save(&StoredCredentials {
                        ssid: String::from(ssid),
                        secret: String::from(self.password.text()),
                    });
                }
                self.state = SetupState::Idle;
            }
            ConnectivityStatus::ConnectFailed => {
                log::warn!("[SETUP] association failed");
                self.state = SetupState::ConnectFailed;
            }
            ConnectivityStatus::Disconnected | ConnectivityStatus::Connecting => {}
        }
    }

    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        radio: &dyn Radio,
    ) -> Result<(), D::Error> {
        match self.state {
            SetupState::Idle => self.render_idle(display, radio),
            SetupState::Scanning => title(display, "Scanning...", 0, 0),
            SetupState::ScanResults => self.render_scan_results(display),
            SetupState::EnteringPassword => self.render_password(display),
            SetupState::Connecting => self.render_connecting(display),
            SetupState::ConnectFailed => {
                body(display, "Connection Failed!", 0, 0)?;
                body(display, "Press Select to go back.", 0, BODY_Y)
            }
        }
    }

    fn render_idle<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        radio: &dyn Radio,
    ) -> Result<(), D::Error> {
        title(display, "WiFi", 0, 0)?;
        match radio.connected_ssid() {
            Some(ssid) => {
                let mut line = String::from("Connected to: ");
                line.push_str(&ssid);
                body(display, &line, 0, BODY_Y)
            }
            None => {
                body(display, "Disconnected", 0, BODY_Y)?;
                body(display, "> Scan for networks", 0, FOOTER_Y)
            }
        }
    }

    fn render_scan_results<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        body(display, "Select Network:", 0, 0)?;
        if self.networks.is_empty() {
            return body(display, "No networks found", 0, 8);
        }
        // Keep the selection inside the visible window.
        let first = self.selected.saturating_sub(Self::VISIBLE_ROWS - 1);
        let mut y = 8;
        for (i, network) in self
            .networks
            .iter()
            .enumerate()
            .skip(first)
            .take(Self::VISIBLE_ROWS)
        {
            let marker = if i == self.selected { "> " } else { "  " };
            let mut line = String::from(marker);
            line.push_str(&network.ssid);
            body(display, &line, 0, y)?;
            y += 8;
        }
        Ok(())
    }

    fn render_password<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let mut header = String::from("Pass for ");
        header.push_str(self.selected_ssid().unwrap_or(""));
        body(display, &header, 0, 0)?;

        let mut hidden = String::new();
        for _ in 0..self.password.text().len() {
            hidden.push('*');
        }
        body(display, &hidden, 0, 8)?;

        let mut key_line = String::from("Char: ");
        match self.password.key_at_cursor() {
            CursorKey::Char(ch) => key_line.push(ch),
            CursorKey::Backspace => key_line.push_str("<--"),
            CursorKey::Confirm => key_line.push_str("[OK]"),
        }
        body(display, &key_line, 0, FOOTER_Y)
    }

    fn render_connecting<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        body(display, "Connecting to", 0, 0)?;
        body(display, self.selected_ssid().unwrap_or(""), 0, 8)
    }
}

impl Default for SetupActivity {
    fn default() -> Self {
        Self::new()
    }
}
