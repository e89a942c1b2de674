//! Top-level screens and the menu navigator.

use crate::input::Button;

/// The currently selected main application screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopScreen {
    Menu,
    Info,
    NetworkSetup,
    Config,
    Help,
}

/// Menu entries in display order. Index i maps to `TopScreen::from_menu_index(i)`.
pub const MENU_ITEMS: [&str; 4] = ["Info", "Coms", "Conf", "?"];

impl TopScreen {
    /// Map a menu index to its target screen.
    pub const fn from_menu_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Info),
            1 => Some(Self::NetworkSetup),
            2 => Some(Self::Config),
            3 => Some(Self::Help),
            _ => None,
        }
    }
}

/// Owns the top-level screen selection and back-navigation.
///
/// Up/Down move the menu highlight, Select enters the highlighted screen.
/// Once inside a screen, Select always means "back to menu". Navigation is
/// frozen while a boot-time reconnect attempt is in progress.
#[derive(Debug)]
pub struct Navigator {
    screen: TopScreen,
    menu_index: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            screen: TopScreen::Menu,
            menu_index: 0,
        }
    }

    pub fn screen(&self) -> TopScreen {
        self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Return to the menu. Used by the network setup workflow on exit.
    pub fn back_to_menu(&mut self) {
        self.screen = TopScreen::Menu;
    }

    pub fn handle_button(&mut self, button: Button, reconnect_active: bool) {
        match button {
            Button::Up => {
                if self.screen == TopScreen::Menu && !reconnect_active {
                    self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                }
            }
            Button::Down => {
                if self.screen == TopScreen::Menu && !reconnect_active {
                    self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
                }
            }
            Button::Select => {
                if self.screen == TopScreen::Menu {
                    if !reconnect_active {
                        if let Some(screen) = TopScreen::from_menu_index(self.menu_index) {
                            self.screen = screen;
                        }
                    }
                } else {
                    // Select is "back" on every non-menu screen, reconnect or not.
                    self.screen = TopScreen::Menu;
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
