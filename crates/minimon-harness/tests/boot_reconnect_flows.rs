use minimon_harness::{ScenarioHarness, TICK_MS};
use minimon_ui::{Button, ConnectivityStatus, TopScreen, RECONNECT_TIMEOUT_MS};

#[test]
fn boot_without_credentials_starts_nothing() {
    let mut harness = ScenarioHarness::boot();
    assert!(!harness.app().lifecycle().reconnect_active());
    assert!(harness.radio().associations().is_empty());

    // Navigation is live from the first serviced press.
    harness.press(Button::Down);
    assert_eq!(harness.app().navigator().menu_index(), 1);
}

#[test]
fn boot_with_credentials_associates_and_freezes_navigation() {
    let mut harness = ScenarioHarness::boot_with_credentials("home", "hunter2");
    assert!(harness.app().lifecycle().reconnect_active());
    assert_eq!(
        harness.radio().associations(),
        &[("home".into(), Some("hunter2".into()))]
    );

    harness.press(Button::Down);
    harness.press(Button::Select);
    assert_eq!(harness.app().navigator().menu_index(), 0);
    assert_eq!(harness.app().screen(), TopScreen::Menu);
}

#[test]
fn reconnect_clears_when_radio_connects() {
    let mut harness = ScenarioHarness::boot_with_credentials("home", "hunter2");
    harness.ticks(5);
    assert!(harness.app().lifecycle().reconnect_active());

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert!(!harness.app().lifecycle().reconnect_active());
    assert_eq!(harness.service().starts(), 1);

    // Navigation thaws on the very next press.
    harness.press(Button::Down);
    assert_eq!(harness.app().navigator().menu_index(), 1);
}

#[test]
fn reconnect_times_out_after_15_seconds_and_abandons_the_attempt() {
    let mut harness = ScenarioHarness::boot_with_credentials("home", "hunter2");
    let boundary = (RECONNECT_TIMEOUT_MS / TICK_MS) as usize;

    harness.ticks(boundary);
    assert_eq!(harness.now_ms(), RECONNECT_TIMEOUT_MS);
    assert!(harness.app().lifecycle().reconnect_active());

    harness.ticks(1);
    assert!(!harness.app().lifecycle().reconnect_active());
    assert!(harness.radio().disconnect_called());
    assert_eq!(harness.service().starts(), 0);

    // Abandoned for good: no retry on later ticks.
    harness.ticks(20);
    assert_eq!(harness.radio().associations().len(), 1);
}

#[test]
fn reconnect_screen_shows_the_stored_network() {
    let mut harness = ScenarioHarness::boot_with_credentials("home", "hunter2");
    assert_eq!(
        harness
            .app()
            .lifecycle()
            .reconnect_attempt()
            .map(|a| a.ssid.as_str()),
        Some("home")
    );
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);
}

#[test]
fn status_service_follows_connectivity_up_and_down() {
    let mut harness = ScenarioHarness::boot();
    harness.ticks(2);
    assert_eq!(harness.service().starts(), 0);
    assert_eq!(harness.service().pumps(), 0);

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(3);
    assert_eq!(harness.service().starts(), 1);
    assert_eq!(harness.service().pumps(), 3);

    harness.radio_mut().set_status(ConnectivityStatus::Disconnected);
    harness.ticks(3);
    assert_eq!(harness.service().stops(), 1);
    assert_eq!(harness.service().pumps(), 3);

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert_eq!(harness.service().starts(), 2);
}
