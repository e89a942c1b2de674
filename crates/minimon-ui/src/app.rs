//! The application: one owned state struct, one cooperative tick.
//!
//! Each tick runs, in order: connectivity lifecycle (reconnect resolution,
//! workflow status observation, service gating), input dispatch, service
//! pumping, and the render-cadence check. Lifecycle always runs before
//! input and render, so a render never observes a service/connectivity
//! mismatch older than one tick.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::credentials::CredentialsStore;
use crate::input::{Button, ButtonStates, InputGate};
use crate::lifecycle::ConnectivityManager;
use crate::radio::Radio;
use crate::render;
use crate::screen::{Navigator, TopScreen};
use crate::service::StatusService;
use crate::setup_activity::{SetupActivity, SetupFlow};

/// Display update cadence, independent of the input cadence.
pub const RENDER_INTERVAL_MS: u64 = 100;

/// All UI and connectivity state, owned in one place.
pub struct App {
    navigator: Navigator,
    setup: SetupActivity,
    lifecycle: ConnectivityManager,
    gate: InputGate,
    last_render_ms: u64,
    rendered_once: bool,
}

impl App {
    /// Boot the app. If credentials are stored, the auto-reconnect attempt
    /// starts here, stamped with the boot tick's timestamp.
    pub fn new(now_ms: u64, store: &mut dyn CredentialsStore, radio: &mut dyn Radio) -> Self {
        let mut lifecycle = ConnectivityManager::new();
        lifecycle.begin_boot_reconnect(now_ms, store, radio);
        Self {
            navigator: Navigator::new(),
            setup: SetupActivity::new(),
            lifecycle,
            gate: InputGate::new(),
            last_render_ms: 0,
            rendered_once: false,
        }
    }

    pub fn screen(&self) -> TopScreen {
        self.navigator.screen()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn setup(&self) -> &SetupActivity {
        &self.setup
    }

    pub fn lifecycle(&self) -> &ConnectivityManager {
        &self.lifecycle
    }

    /// Run one cooperative tick. Returns true when the 100 ms render
    /// cadence has elapsed and the caller should redraw.
    pub fn tick(
        &mut self,
        now_ms: u64,
        buttons: ButtonStates,
        radio: &mut dyn Radio,
        store: &mut dyn CredentialsStore,
        service: &mut dyn StatusService,
    ) -> bool {
        self.lifecycle.tick(now_ms, radio, service);
        self.setup.observe_status(radio, store);

        if let Some(button) = self.gate.poll(now_ms, buttons) {
            self.dispatch(button, radio);
        }

        self.lifecycle.pump(service);

        if !self.rendered_once || now_ms.saturating_sub(self.last_render_ms) >= RENDER_INTERVAL_MS {
            self.rendered_once = true;
            self.last_render_ms = now_ms;
            return true;
        }
        false
    }

    fn dispatch(&mut self, button: Button, radio: &mut dyn Radio) {
        if self.navigator.screen() == TopScreen::NetworkSetup {
            if self.setup.handle_button(button, radio) == SetupFlow::ExitWorkflow {
                self.navigator.back_to_menu();
            }
        } else {
            self.navigator
                .handle_button(button, self.lifecycle.reconnect_active());
        }
    }

    /// Draw the current screen. Pure read; the caller clears and flushes
    /// the surface.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
        radio: &dyn Radio,
    ) -> Result<(), D::Error> {
        match self.navigator.screen() {
            TopScreen::Menu => {
                render::draw_menu(display, &self.navigator, self.lifecycle.reconnect_attempt())
            }
            TopScreen::Info => render::draw_info(display, radio),
            TopScreen::NetworkSetup => self.setup.render(display, radio),
            TopScreen::Config => render::draw_config(display),
            TopScreen::Help => render::draw_help(display),
        }
    }
}
