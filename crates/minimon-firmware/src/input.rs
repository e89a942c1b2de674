//! Button GPIO sampling.

use esp_idf_svc::hal::gpio::{Gpio2, Gpio3, Gpio4, Input, PinDriver, Pull};

use minimon_ui::ButtonStates;

/// The three front buttons, wired active low with internal pull-ups.
pub struct ButtonPins<'d> {
    up: PinDriver<'d, Gpio2, Input>,
    down: PinDriver<'d, Gpio3, Input>,
    select: PinDriver<'d, Gpio4, Input>,
}

impl<'d> ButtonPins<'d> {
    pub fn new(gpio2: Gpio2, gpio3: Gpio3, gpio4: Gpio4) -> Result<Self, String> {
        let mut up = PinDriver::input(gpio2)
            .map_err(|err| format!("up button init failed: {}", err))?;
        let mut down = PinDriver::input(gpio3)
            .map_err(|err| format!("down button init failed: {}", err))?;
        let mut select = PinDriver::input(gpio4)
            .map_err(|err| format!("select button init failed: {}", err))?;
        up.set_pull(Pull::Up)
            .map_err(|err| format!("up pull-up failed: {}", err))?;
        down.set_pull(Pull::Up)
            .map_err(|err| format!("down pull-up failed: {}", err))?;
        select.set_pull(Pull::Up)
            .map_err(|err| format!("select pull-up failed: {}", err))?;
        Ok(Self { up, down, select })
    }

    pub fn sample(&self) -> ButtonStates {
        ButtonStates {
            up: self.up.is_low(),
            down: self.down.is_low(),
            select: self.select.is_low(),
        }
    }
}
