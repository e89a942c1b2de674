use minimon_harness::ScenarioHarness;
use minimon_ui::{
    Button, ConnectivityStatus, MockCredentialsStore, MockRadio, NetworkInfo, Radio, SetupState,
    TopScreen,
};

fn boot_with_networks() -> ScenarioHarness {
    let mut radio = MockRadio::new();
    radio.set_scan_results(vec![
        NetworkInfo::open("cafe"),
        NetworkInfo::secured("alpha"),
        NetworkInfo::secured("beta"),
    ]);
    ScenarioHarness::boot_with(radio, MockCredentialsStore::empty())
}

fn enter_workflow(harness: &mut ScenarioHarness) {
    harness.press(Button::Down); // highlight "Coms"
    harness.press(Button::Select);
    assert_eq!(harness.app().screen(), TopScreen::NetworkSetup);
}

#[test]
fn scan_lists_networks_and_selection_wraps() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);

    harness.press(Button::Select); // disconnected idle -> scan
    assert_eq!(harness.app().setup().state(), SetupState::ScanResults);
    assert_eq!(harness.app().setup().networks().len(), 3);
    assert_eq!(harness.radio().scan_count(), 1);

    harness.press(Button::Down);
    harness.press(Button::Down);
    harness.press(Button::Down);
    assert_eq!(harness.app().setup().selected_index(), 0);
    harness.press(Button::Up);
    assert_eq!(harness.app().setup().selected_index(), 2);
}

#[test]
fn secured_network_password_entry_end_to_end() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Down); // "alpha"
    harness.press(Button::Select);
    assert_eq!(harness.app().setup().state(), SetupState::EnteringPassword);

    // Type "abc": select the cursor character, step to the next one.
    harness.press(Button::Select);
    harness.press(Button::Down);
    harness.press(Button::Select);
    harness.press(Button::Down);
    harness.press(Button::Select);
    assert_eq!(harness.app().setup().password().text(), "abc");

    // Cursor sits on 'c'; four steps back wrap to Backspace.
    for _ in 0..4 {
        harness.press(Button::Up);
    }
    harness.press(Button::Select);
    assert_eq!(harness.app().setup().password().text(), "ab");

    // One step forward lands on Confirm.
    harness.press(Button::Down);
    harness.press(Button::Select);
    assert_eq!(harness.app().setup().state(), SetupState::Connecting);
    assert_eq!(
        harness.radio().associations(),
        &[("alpha".into(), Some("ab".into()))]
    );
}

#[test]
fn successful_connection_saves_credentials_and_starts_the_service() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Down); // "alpha"
    harness.press(Button::Select);
    harness.press(Button::Select); // append 'a'
    harness.press(Button::Up); // wrap to Confirm
    harness.press(Button::Select);
    assert_eq!(harness.app().setup().state(), SetupState::Connecting);

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert_eq!(harness.app().setup().state(), SetupState::Idle);
    let saved = harness.store().saved().expect("credentials saved");
    assert_eq!(saved.ssid, "alpha");
    assert_eq!(saved.secret, "a");
    assert_eq!(harness.service().starts(), 1);
}

#[test]
fn open_network_connects_without_a_secret() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Select); // "cafe", open
    assert_eq!(harness.app().setup().state(), SetupState::Connecting);
    assert_eq!(harness.radio().associations(), &[("cafe".into(), None)]);

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    let saved = harness.store().saved().expect("credentials saved");
    assert_eq!(saved.ssid, "cafe");
    assert_eq!(saved.secret, "");
}

#[test]
fn failed_connection_shows_failure_and_never_touches_the_store() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Select); // "cafe", open

    harness
        .radio_mut()
        .set_status(ConnectivityStatus::ConnectFailed);
    harness.ticks(1);
    assert_eq!(harness.app().setup().state(), SetupState::ConnectFailed);
    assert!(harness.store().saved().is_none());

    harness.render();
    assert!(harness.display().black_pixel_count() > 0);

    harness.press(Button::Select);
    assert_eq!(harness.app().setup().state(), SetupState::Idle);
    assert_eq!(harness.app().screen(), TopScreen::NetworkSetup);
}

#[test]
fn connecting_state_outwaits_any_delay() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Select); // "cafe", open

    // A minute of Connecting: no timeout, no state change, renders fine.
    harness.ticks(1_200);
    assert_eq!(harness.app().setup().state(), SetupState::Connecting);
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert_eq!(harness.app().setup().state(), SetupState::Idle);
}

#[test]
fn exit_from_connected_idle_returns_to_menu() {
    let mut harness = boot_with_networks();
    enter_workflow(&mut harness);
    harness.press(Button::Select);
    harness.press(Button::Select); // "cafe", open
    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert_eq!(harness.app().setup().state(), SetupState::Idle);

    harness.press(Button::Select); // connected idle -> exit
    assert_eq!(harness.app().screen(), TopScreen::Menu);
}

#[test]
fn info_screen_shows_the_address_once_connected() {
    let mut harness = boot_with_networks();
    harness.press(Button::Select); // "Info"
    assert_eq!(harness.app().screen(), TopScreen::Info);
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);
    assert!(harness.radio().local_address().is_none());

    harness.radio_mut().set_status(ConnectivityStatus::Connected);
    harness.ticks(1);
    assert!(harness.radio().local_address().is_some());
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);
}
