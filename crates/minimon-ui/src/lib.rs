//! Core UI and connectivity state machines for the minimon pocket monitor.
//!
//! A 128x32 monochrome OLED, three buttons, and a WiFi radio: menu-driven
//! navigation, a network-setup workflow (scan, pick, password, connect),
//! boot-time auto-reconnect from stored credentials, and gating of the
//! HTTP status service on connectivity. Hardware concerns live behind the
//! `Radio`, `CredentialsStore`, and `StatusService` traits so the whole
//! crate runs and tests on the host.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod app;
pub mod credentials;
pub mod input;
pub mod lifecycle;
pub mod password;
pub mod radio;
mod render;
pub mod screen;
pub mod service;
pub mod setup_activity;
pub mod test_display;

#[cfg(any(test, feature = "std"))]
pub mod mock;

pub use app::{App, RENDER_INTERVAL_MS};
pub use credentials::{CredentialsStore, StoredCredentials};
pub use input::{Button, ButtonStates, InputGate, INPUT_INTERVAL_MS};
pub use lifecycle::{ConnectivityManager, ReconnectAttempt, RECONNECT_TIMEOUT_MS};
pub use password::{CursorKey, PasswordEntry, CHAR_SET, CURSOR_POSITIONS};
pub use radio::{ConnectivityStatus, NetworkInfo, Radio};
pub use screen::{Navigator, TopScreen, MENU_ITEMS};
pub use service::StatusService;
pub use setup_activity::{SetupActivity, SetupFlow, SetupState};
pub use test_display::TestDisplay;

#[cfg(any(test, feature = "std"))]
pub use mock::{MockCredentialsStore, MockRadio, MockStatusService};

/// Panel dimensions (landscape).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 32;
