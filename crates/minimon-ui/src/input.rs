//! Button input abstraction and the interval gate.
//!
//! The hardware delivers three already-debounced level signals. The core
//! applies a single timing rule on top: at most one accepted button per
//! 150 ms window, re-sampled every tick, so holding a button repeats its
//! action once per window.

/// Logical device buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Select,
}

/// Level snapshot of all three buttons for one tick (true = pressed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStates {
    pub up: bool,
    pub down: bool,
    pub select: bool,
}

impl ButtonStates {
    pub const fn none() -> Self {
        Self {
            up: false,
            down: false,
            select: false,
        }
    }

    pub const fn pressed(button: Button) -> Self {
        match button {
            Button::Up => Self {
                up: true,
                down: false,
                select: false,
            },
            Button::Down => Self {
                up: false,
                down: true,
                select: false,
            },
            Button::Select => Self {
                up: false,
                down: false,
                select: true,
            },
        }
    }
}

/// Minimum interval between two accepted button events.
pub const INPUT_INTERVAL_MS: u64 = 150;

/// Interval gate over the sampled button levels.
///
/// Priority when several buttons are held in the same window: Up, then Down,
/// then Select. The winning button claims the whole window even if it has no
/// effect on the current screen.
///
/// The window boundary is inclusive: a press exactly `INPUT_INTERVAL_MS`
/// after the last accepted one is accepted, so the hold-repeat period is
/// exactly one interval and not interval-plus-one-tick.
#[derive(Debug, Default)]
pub struct InputGate {
    last_input_ms: u64,
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample one tick's button levels. Returns the accepted button, if any.
    pub fn poll(&mut self, now_ms: u64, buttons: ButtonStates) -> Option<Button> {
        if now_ms.saturating_sub(self.last_input_ms) < INPUT_INTERVAL_MS {
            return None;
        }
        let button = if buttons.up {
            Button::Up
        } else if buttons.down {
            Button::Down
        } else if buttons.select {
            Button::Select
        } else {
            return None;
        };
        self.last_input_ms = now_ms;
        Some(button)
    }
}
