mod http;
mod input;
mod radio;
mod storage;

use std::time::Instant;

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::{
    delay::FreeRtos,
    i2c::{I2cConfig, I2cDriver},
    peripherals::Peripherals,
    units::Hertz,
};
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use ssd1306::{prelude::*, I2CDisplayInterface, Ssd1306};

use minimon_ui::App;

use http::HttpStatusService;
use input::ButtonPins;
use radio::EspRadio;
use storage::NvsCredentialsStore;

const TICK_MS: u32 = 50;

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!(
        "minimon starting, {} bytes main stack",
        esp_idf_svc::sys::CONFIG_ESP_MAIN_TASK_STACK_SIZE
    );

    let peripherals = Peripherals::take().unwrap();
    let sys_loop = EspSystemEventLoop::take().unwrap();
    let nvs_partition = EspDefaultNvsPartition::take().unwrap();

    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio5,
        peripherals.pins.gpio6,
        &I2cConfig::new().baudrate(Hertz(400_000)),
    )
    .unwrap();
    let interface = I2CDisplayInterface::new(i2c);
    // Panel is mounted upside down in the enclosure.
    let mut display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate180)
        .into_buffered_graphics_mode();
    display.init().unwrap();

    let buttons = ButtonPins::new(
        peripherals.pins.gpio2,
        peripherals.pins.gpio3,
        peripherals.pins.gpio4,
    )
    .unwrap();

    let mut radio = EspRadio::new(peripherals.modem, sys_loop, nvs_partition.clone()).unwrap();
    let mut store = NvsCredentialsStore::new(nvs_partition).unwrap();
    let mut service = HttpStatusService::new();

    let booted = Instant::now();
    let mut app = App::new(0, &mut store, &mut radio);

    loop {
        let now_ms = booted.elapsed().as_millis() as u64;
        let states = buttons.sample();
        if app.tick(now_ms, states, &mut radio, &mut store, &mut service) {
            display.clear_buffer();
            if let Err(err) = app.render(&mut display, &radio) {
                log::warn!("render failed: {:?}", err);
            }
            if let Err(err) = display.flush() {
                log::warn!("display flush failed: {:?}", err);
            }
        }
        FreeRtos::delay_ms(TICK_MS);
    }
}
