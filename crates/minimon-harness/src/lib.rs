//! Host-side scenario harness for scripted device flows.
//!
//! Couples the app, the mock collaborators, a simulated millisecond clock,
//! and the framebuffer test display, so integration tests can express whole
//! user journeys: boot, reconnect, scan, type a password, connect.

use minimon_ui::{
    App, Button, ButtonStates, MockCredentialsStore, MockRadio, MockStatusService,
    StoredCredentials, TestDisplay, INPUT_INTERVAL_MS,
};

/// Tick period of the simulated control loop.
pub const TICK_MS: u64 = 50;

/// App + mocks + display + clock in one piece.
pub struct ScenarioHarness {
    app: App,
    radio: MockRadio,
    store: MockCredentialsStore,
    service: MockStatusService,
    display: TestDisplay,
    now_ms: u64,
}

impl ScenarioHarness {
    /// Boot with no stored credentials.
    pub fn boot() -> Self {
        Self::boot_with(MockRadio::new(), MockCredentialsStore::empty())
    }

    /// Boot with stored credentials, as after a previously saved network.
    pub fn boot_with_credentials(ssid: &str, secret: &str) -> Self {
        Self::boot_with(
            MockRadio::new(),
            MockCredentialsStore::with_credentials(StoredCredentials {
                ssid: ssid.into(),
                secret: secret.into(),
            }),
        )
    }

    /// Boot with caller-prepared mocks (e.g. canned scan results).
    pub fn boot_with(mut radio: MockRadio, mut store: MockCredentialsStore) -> Self {
        let app = App::new(0, &mut store, &mut radio);
        Self {
            app,
            radio,
            store,
            service: MockStatusService::new(),
            display: TestDisplay::default_size(),
            now_ms: 0,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn radio(&self) -> &MockRadio {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut MockRadio {
        &mut self.radio
    }

    pub fn store(&self) -> &MockCredentialsStore {
        &self.store
    }

    pub fn service(&self) -> &MockStatusService {
        &self.service
    }

    pub fn display(&self) -> &TestDisplay {
        &self.display
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advance the clock and run idle ticks.
    pub fn ticks(&mut self, count: usize) {
        for _ in 0..count {
            self.now_ms += TICK_MS;
            self.tick_once(ButtonStates::none());
        }
    }

    /// Press a button: advance past the input interval, then run one tick
    /// with the button held.
    pub fn press(&mut self, button: Button) {
        self.now_ms += INPUT_INTERVAL_MS;
        self.tick_once(ButtonStates::pressed(button));
    }

    /// Run one tick with an arbitrary level snapshot (for multi-button and
    /// hold-repeat scenarios).
    pub fn tick_with(&mut self, buttons: ButtonStates) {
        self.now_ms += TICK_MS;
        self.tick_once(buttons);
    }

    fn tick_once(&mut self, buttons: ButtonStates) {
        let redraw = self.app.tick(
            self.now_ms,
            buttons,
            &mut self.radio,
            &mut self.store,
            &mut self.service,
        );
        if redraw {
            self.render();
        }
    }

    /// Render the current screen into the test display.
    pub fn render(&mut self) {
        self.display.clear_buffer();
        self.app
            .render(&mut self.display, &self.radio)
            .expect("scenario render should succeed");
    }
}
